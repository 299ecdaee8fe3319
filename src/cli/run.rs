//! Handler for the `run` command.

use tokio::signal;
use tracing::{error, info};

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap::App;
use crate::infrastructure::config::{Config, Credentials};

/// Execute the run command.
///
/// # Errors
///
/// Returns configuration errors; these are fatal before anything starts.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    let credentials = Credentials::from_env()?;
    info!(
        config = %args.config.display(),
        explorer = %config.explorer.base_url,
        "stakewire starting"
    );

    tokio::select! {
        result = App::run(config, credentials) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                return Err(e);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("stakewire stopped");
    Ok(())
}
