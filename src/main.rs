use clap::Parser;
use coincourier::adapter::inbound::cli::{broadcast, check, run, Cli, Commands};
use coincourier::infrastructure::config::Config;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match cli.command {
        Commands::Run => run::execute(&config).await,
        Commands::Broadcast => broadcast::execute(&config).await,
        Commands::Check => check::execute(&cli.config, &config),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
