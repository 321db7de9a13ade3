use crate::adapters::storage::LocalStores;
use crate::app::templates::Templates;
use crate::core::fanout::FanOutEngine;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub fanout: Arc<FanOutEngine>,
    pub templates: Arc<Templates>,
    pub stores: LocalStores,
}

impl AppState {
    /// 建立資料目錄、開啟 SQLite 並載入模板
    pub async fn initialize<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        tracing::info!("Initializing stores under {}", config.data_dir().display());
        let stores = LocalStores::open(config).await?;
        let fanout = Arc::new(FanOutEngine::new(stores.in_write_order()));

        tracing::debug!("Write order: {:?}", fanout.backends());

        Ok(Self {
            fanout,
            templates: Arc::new(Templates::load()?),
            stores,
        })
    }

    pub async fn shutdown(&self) {
        self.stores.sqlite.close().await;
        tracing::info!("SQLite pool closed");
    }
}
