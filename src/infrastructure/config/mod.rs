//! Infrastructure configuration modules.
//!
//! - [`settings`] - The TOML-backed [`Config`](settings::Config)
//! - [`credentials`] - Secrets read from the environment

pub mod credentials;
pub mod discord;
pub mod logging;
pub mod price;
pub mod settings;
pub mod telegram;

pub use credentials::Credentials;
pub use settings::Config;
