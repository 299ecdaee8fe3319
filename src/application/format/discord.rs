//! Embed rendering for Discord.
//!
//! The embed types serialize directly into the Discord API's embed object so
//! the outbound adapter can post them unchanged.

use serde::Serialize;

use crate::domain::{Explorer, StakeEvent};

use super::branding::Branding;
use super::short_address;

/// A Discord rich embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub thumbnail: EmbedThumbnail,
}

/// One name/value row of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

impl EmbedField {
    fn new(name: &str, value: String, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value,
            inline,
        }
    }
}

/// Render a stake event as a Discord embed.
#[must_use]
pub fn render(event: &StakeEvent, branding: &Branding, explorer: &Explorer) -> Embed {
    let staker = format!(
        "[{}]({})",
        short_address(event.staker()),
        explorer.address_url(event.staker())
    );
    let amount = format!("{} {}", event.tokens(), branding.token_symbol);
    let transaction = format!("[View Transaction]({})", explorer.tx_url(event.tx_hash()));

    Embed {
        title: branding.discord_title.clone(),
        description: branding.discord_description.clone(),
        color: branding.embed_color,
        fields: vec![
            EmbedField::new("Staker", staker, true),
            EmbedField::new("Amount Staked", amount, true),
            EmbedField::new("Transaction Link", transaction, false),
        ],
        footer: EmbedFooter {
            text: branding.footer.clone(),
        },
        thumbnail: EmbedThumbnail {
            url: branding.image_url.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_embed() {
        let embed = render(&StakeEvent::sample(), &Branding::default(), &Explorer::default());

        assert_eq!(embed.title, "New Stake Detected 🎉");
        assert_eq!(embed.description, "A new staking event has occurred on zkSync!");
        assert_eq!(embed.color, 0x0099ff);
        assert_eq!(embed.fields.len(), 3);

        assert_eq!(embed.fields[0].name, "Staker");
        assert_eq!(
            embed.fields[0].value,
            "[0x12345...45678](https://explorer.zksync.io/address/0x1234567890abcdef1234567890abcdef12345678)"
        );
        assert!(embed.fields[0].inline);

        assert_eq!(embed.fields[1].name, "Amount Staked");
        assert_eq!(embed.fields[1].value, "852.3979 ZK");
        assert!(embed.fields[1].inline);

        assert_eq!(embed.fields[2].name, "Transaction Link");
        assert_eq!(
            embed.fields[2].value,
            "[View Transaction](https://explorer.zksync.io/tx/0xabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdef)"
        );
        assert!(!embed.fields[2].inline);

        assert_eq!(embed.footer.text, "Stake now at zksyncstake.com");
        assert_eq!(embed.thumbnail.url, "https://i.imgur.com/v80uAKc.jpg");
    }

    #[test]
    fn test_embed_wire_shape() {
        let embed = render(&StakeEvent::sample(), &Branding::default(), &Explorer::default());
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["color"], 0x0099ff);
        assert_eq!(json["footer"]["text"], "Stake now at zksyncstake.com");
        assert_eq!(json["thumbnail"]["url"], "https://i.imgur.com/v80uAKc.jpg");
        assert_eq!(json["fields"][1]["inline"], true);
    }
}
