//! Four-letter Display Core Library
//!
//! Front-end logic for the Cleep `fourletterdisplay` module:
//! - Display command service (brightness, night mode, message, dots, clear)
//! - Configuration controller keeping a local mirror of the module config
//!
//! The RPC transport and the host configuration store are abstracted through
//! traits; `fourletterdisplay-rpc` provides HTTP implementations.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ConfigController, DisplayCommandService, ServiceContext, DEFAULT_MODULE};
pub use traits::{ConfigStore, RpcTransport};
