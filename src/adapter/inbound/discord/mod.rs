//! Discord trigger: the `/teststake` slash command, received over the gateway.

pub mod gateway;
pub mod interaction;

pub use gateway::{Backoff, GatewayClient};
pub use interaction::{Interaction, InteractionHandler};
