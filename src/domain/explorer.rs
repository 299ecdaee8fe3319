//! Block explorer link templates.

/// Default explorer for zkSync Era mainnet.
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer.zksync.io";

/// Builds address and transaction links for a block explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    base_url: String,
}

impl Explorer {
    /// Create an explorer rooted at `base_url`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/address/{address}`
    #[must_use]
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{address}", self.base_url)
    }

    /// `{base}/tx/{tx_hash}`
    #[must_use]
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{tx_hash}", self.base_url)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORER_URL)
    }
}
