//! Handler for the `preview` command.

use crate::application::format::RenderedMessage;
use crate::cli::{output, PreviewArgs};
use crate::domain::{Platform, StakeEvent};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Render the sample alert for one or both platforms and print it.
///
/// # Errors
///
/// Returns an error if the config file is invalid.
pub fn execute(args: &PreviewArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let formatter = config.formatter();
    let event = StakeEvent::sample();

    let platforms = match args.platform {
        Some(platform) => vec![Platform::from(platform)],
        None => vec![Platform::Telegram, Platform::Discord],
    };

    for platform in platforms {
        output::section(&format!("{platform} preview"));
        match formatter.render(&event, platform) {
            RenderedMessage::Telegram(message) => {
                output::field("Photo", &message.photo_url);
                println!();
                println!("{}", message.caption);
            }
            RenderedMessage::Discord(embed) => {
                println!("{}", serde_json::to_string_pretty(&embed)?);
            }
        }
    }
    Ok(())
}
