pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStores;
pub use app::{build_router, run_server, AppState};
pub use config::Settings;
pub use core::fanout::FanOutEngine;
pub use utils::error::{RegistryError, Result};
