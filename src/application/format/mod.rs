//! Stake alert formatting.
//!
//! Pure rendering of a [`StakeEvent`] into a platform-specific message:
//!
//! - [`telegram`] - HTML photo caption
//! - [`discord`] - Rich embed
//!
//! Rendering cannot fail; identical inputs always produce identical output.

pub mod branding;
pub mod discord;
pub mod telegram;

pub use branding::Branding;
pub use discord::Embed;
pub use telegram::TelegramMessage;

use crate::domain::{Explorer, Platform, StakeEvent};

/// A rendered alert for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedMessage {
    Telegram(TelegramMessage),
    Discord(Embed),
}

/// Renders stake events with a fixed branding and explorer.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    branding: Branding,
    explorer: Explorer,
}

impl Formatter {
    #[must_use]
    pub const fn new(branding: Branding, explorer: Explorer) -> Self {
        Self { branding, explorer }
    }

    #[must_use]
    pub const fn branding(&self) -> &Branding {
        &self.branding
    }

    #[must_use]
    pub const fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    #[must_use]
    pub fn telegram(&self, event: &StakeEvent) -> TelegramMessage {
        telegram::render(event, &self.branding, &self.explorer)
    }

    #[must_use]
    pub fn discord(&self, event: &StakeEvent) -> Embed {
        discord::render(event, &self.branding, &self.explorer)
    }

    /// Render for the given platform.
    #[must_use]
    pub fn render(&self, event: &StakeEvent, platform: Platform) -> RenderedMessage {
        match platform {
            Platform::Telegram => RenderedMessage::Telegram(self.telegram(event)),
            Platform::Discord => RenderedMessage::Discord(self.discord(event)),
        }
    }
}

/// Repeat `glyph` `count` times. Unbounded.
#[must_use]
pub fn indicator_bar(glyph: &str, count: usize) -> String {
    glyph.repeat(count)
}

/// Shorten an address to `first7...last5` (Unicode-safe).
///
/// Strings shorter than 12 characters are returned unchanged.
#[must_use]
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 12 {
        return address.to_string();
    }

    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x12345...45678"
        );
        assert_eq!(short_address("abcdefghijkl"), "abcdefg...hijkl");
        assert_eq!(short_address("short"), "short");
    }

    #[test]
    fn test_short_address_unicode() {
        assert_eq!(short_address("日本語テスト日本語テスト"), "日本語テスト日...本語テスト");
    }

    #[test]
    fn test_indicator_bar() {
        assert_eq!(indicator_bar("🟢", 0), "");
        assert_eq!(indicator_bar("🟢", 3), "🟢🟢🟢");
    }

    #[test]
    fn test_render_dispatches_on_platform() {
        let formatter = Formatter::default();
        let event = StakeEvent::sample();

        assert!(matches!(
            formatter.render(&event, Platform::Telegram),
            RenderedMessage::Telegram(_)
        ));
        assert!(matches!(
            formatter.render(&event, Platform::Discord),
            RenderedMessage::Discord(_)
        ));
    }
}
