use clap::Parser;
use stakewire::cli::{check, preview, run, CheckCommand, Cli, Commands};
use stakewire::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    // One process-wide TLS provider for the gateway websocket.
    let _ = rustls::crypto::ring::default_provider().install_default();
    let cli = Cli::parse();

    let result: Result<bool> = match &cli.command {
        Commands::Run(args) => run::execute(args).await.map(|()| true),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config).map(|()| true),
        Commands::Check(CheckCommand::Connection(arg)) => check::execute_connection(&arg.config).await,
        Commands::Preview(args) => preview::execute(args).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
