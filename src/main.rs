use clap::Parser;
use name_registry::utils::{logger, validation::Validate};
use name_registry::{run_server, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.log_json {
        logger::init_json_logger(settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.log_level.as_deref());
    }

    tracing::info!("Starting name-registry v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run_server(&settings).await {
        tracing::error!("❌ Server failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
