//! HTML caption rendering for Telegram.

use crate::domain::{Explorer, StakeEvent};

use super::branding::Branding;
use super::indicator_bar;

/// A photo post with an HTML caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramMessage {
    /// URL of the photo to post.
    pub photo_url: String,
    /// Caption in Telegram HTML parse mode.
    pub caption: String,
}

/// Render a stake event as a Telegram photo caption.
#[must_use]
pub fn render(event: &StakeEvent, branding: &Branding, explorer: &Explorer) -> TelegramMessage {
    let symbol = escape_html(&branding.token_symbol);
    let staker = escape_html(event.staker());

    let caption = format!(
        "<b>{title}</b>\n\
        {bar}\n\
        \n\
        💰 <b>Stake:</b> <code>${value:.2}</code> ({tokens} {symbol})\n\
        👤 <b>Staker:</b> <a href=\"{staker_url}\">{staker}</a>\n\
        🔗 <b>Transaction:</b> <a href=\"{tx_url}\">View TX</a>\n\
        📉 <b>{symbol} Price:</b> ${price:.6}\n\
        \n\
        <a href=\"{cta_url}\">{cta_text}</a>",
        title = escape_html(&branding.telegram_title),
        bar = indicator_bar(&branding.glyph, event.indicator_count()),
        value = event.value_usd(),
        tokens = event.tokens(),
        staker_url = escape_html(&explorer.address_url(event.staker())),
        tx_url = escape_html(&explorer.tx_url(event.tx_hash())),
        price = event.price_usd(),
        cta_url = escape_html(&branding.cta_url),
        cta_text = escape_html(&branding.cta_text),
    );

    TelegramMessage {
        photo_url: branding.image_url.clone(),
        caption,
    }
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("0xabc"), "0xabc");
        assert_eq!(escape_html("<b>&\"</b>"), "&lt;b&gt;&amp;&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_sample_caption() {
        let message = render(&StakeEvent::sample(), &Branding::default(), &Explorer::default());

        let expected = "<b>ZkStaking Stake! 🎉</b>\n\
            🟢🟢🟢🟢\n\
            \n\
            💰 <b>Stake:</b> <code>$205.00</code> (852.3979 ZK)\n\
            👤 <b>Staker:</b> <a href=\"https://explorer.zksync.io/address/0x1234567890abcdef1234567890abcdef12345678\">0x1234567890abcdef1234567890abcdef12345678</a>\n\
            🔗 <b>Transaction:</b> <a href=\"https://explorer.zksync.io/tx/0xabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdef\">View TX</a>\n\
            📉 <b>ZK Price:</b> $0.240498\n\
            \n\
            <a href=\"https://zksyncstake.com\">Stake now</a>";

        assert_eq!(message.caption, expected);
        assert_eq!(message.photo_url, "https://i.imgur.com/v80uAKc.jpg");
    }

    #[test]
    fn test_staker_markup_is_escaped() {
        let event = StakeEvent::try_new(
            "<script>",
            alloy_primitives::U256::from(1u64),
            "0x1",
            1.0,
        )
        .unwrap();
        let message = render(&event, &Branding::default(), &Explorer::default());
        assert!(message.caption.contains("&lt;script&gt;"));
        assert!(!message.caption.contains("<script>"));
    }
}
