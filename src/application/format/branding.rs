//! Presentation constants shared by both renderings.

use serde::Deserialize;

/// Fixed text, links and artwork embedded in every alert.
///
/// Defaults reproduce the zkSync staking alerts; every field can be
/// overridden from the `[branding]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Ticker shown next to token amounts.
    pub token_symbol: String,
    /// Bold headline of the Telegram caption.
    pub telegram_title: String,
    /// Title of the Discord embed.
    pub discord_title: String,
    /// Description line of the Discord embed.
    pub discord_description: String,
    /// Promotional image: Telegram photo and Discord thumbnail.
    pub image_url: String,
    /// Call-to-action link at the end of the Telegram caption.
    pub cta_url: String,
    /// Link text for [`Branding::cta_url`].
    pub cta_text: String,
    /// Discord embed footer.
    pub footer: String,
    /// Discord embed side colour (RGB).
    pub embed_color: u32,
    /// Glyph repeated once per $50 of stake.
    pub glyph: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            token_symbol: "ZK".into(),
            telegram_title: "ZkStaking Stake! 🎉".into(),
            discord_title: "New Stake Detected 🎉".into(),
            discord_description: "A new staking event has occurred on zkSync!".into(),
            image_url: "https://i.imgur.com/v80uAKc.jpg".into(),
            cta_url: "https://zksyncstake.com".into(),
            cta_text: "Stake now".into(),
            footer: "Stake now at zksyncstake.com".into(),
            embed_color: 0x0099ff,
            glyph: "🟢".into(),
        }
    }
}
