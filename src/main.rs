use card_image_fetcher::core::ConfigProvider;
use card_image_fetcher::utils::{logger, validation::Validate};
use card_image_fetcher::{CliConfig, LocalStorage, ScrapeEngine, ScrapeError, SetPipeline};
use clap::{CommandFactory, Parser};

fn exit_with(e: &ScrapeError) -> ! {
    if matches!(e, ScrapeError::NoSetUrls) {
        let _ = CliConfig::command().print_help();
    }
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting card-image-fetcher");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let pipeline = match SetPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e),
    };
    let engine = ScrapeEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            if let Some(path) = &summary.index_path {
                println!("\nWrote index to {}", path);
            }
            if !summary.failed_sets.is_empty() {
                println!("{} set(s) could not be processed:", summary.failed_sets.len());
                for url in &summary.failed_sets {
                    println!("  {}", url);
                }
            }
            println!("Done.");
        }
        Err(e) => exit_with(&e),
    }
}
