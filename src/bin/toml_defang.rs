use clap::Parser;
use defang_ip::core::ConfigProvider;
use defang_ip::utils::{logger, validation::Validate};
use defang_ip::{DefangEngine, DefangPipeline, LoadOutcome, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-defang")]
#[command(about = "Defang addresses using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "defang.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be processed without reading or writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌，命令列 --verbose 優先
    let verbose = args.verbose || config.verbose();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        display_config_summary(&config);
        return;
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
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Mode: {}", config.mode());
    println!("  Strict: {}", config.strict());
    println!("  Inline addresses: {}", config.addresses().len());
    for file in config.input_files() {
        println!("  Input file: {}", file);
    }
    println!(
        "  Output: {}",
        config.output_path().unwrap_or("<stdout>")
    );
    println!("  Format: {}", config.output_format());
}
