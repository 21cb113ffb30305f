use clap::Parser;
use fhir2csv::utils::error::ErrorSeverity;
use fhir2csv::utils::{logger, validation::Validate};
use fhir2csv::{CliConfig, EtlEngine, ExportPipeline, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fhir2csv");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(3);
    }

    // config paths are interpreted relative to the working directory
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ExportPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(outputs) => {
            tracing::info!("Export completed successfully");
            println!("✅ Export completed successfully!");
            for path in outputs {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!("Export failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e);

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
