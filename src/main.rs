use clap::Parser;
use defang_ip::utils::{logger, validation::Validate};
use defang_ip::{CliConfig, DefangEngine, DefangPipeline, LoadOutcome, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(".".to_string());
    let engine = DefangEngine::new(DefangPipeline::new(storage, config));

    match engine.run().await {
        Ok(outcome) => match outcome.output {
            LoadOutcome::Rendered(rendered) => print!("{}", rendered),
            // 引擎已記錄輸出路徑
            LoadOutcome::Written(_) => {}
        },
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
