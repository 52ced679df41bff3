//! # fourletterdisplay-rpc
//!
//! HTTP adapters for the collaborator traits of `fourletterdisplay-core`:
//!
//! | Type | Trait | Role |
//! |------|-------|------|
//! | [`HttpTransport`] | `RpcTransport` | `POST {base_url}/command` with `{command, to, params}` |
//! | [`CleepConfigStore`] | `ConfigStore` | per-module config cache fed by `get_module_config` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation to the Raspberry Pi.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fourletterdisplay_core::{ConfigController, ServiceContext};
//! use fourletterdisplay_rpc::{CleepConfigStore, HttpTransport, RpcConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RpcConfig::new("http://raspberrypi.local")?;
//!     let transport = Arc::new(HttpTransport::new(&config)?);
//!     let store = Arc::new(CleepConfigStore::new(transport.clone()));
//!     let ctx = ServiceContext::new(transport, store);
//!
//!     let mut controller = ConfigController::multi_select(&ctx)?;
//!     controller.init().await?;
//!     controller.next_change().await;
//!     println!("brightness: {:?}", controller.config().brightness());
//!
//!     controller.set_message("helo");
//!     if let Some(dispatch) = controller.display_message() {
//!         dispatch.await??;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Everything returns `CoreResult`. Connection failures map to
//! `CoreError::NetworkError`, client timeouts to `CoreError::Timeout`, non-2xx
//! answers to `CoreError::HttpStatus` and backend rejections
//! (`{"error": true, ...}`) to `CoreError::CommandFailed`. Nothing is retried.

mod config;
mod config_store;
mod http_client;
mod transport;

pub use config::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_URL, ENV_TIMEOUT_SECS, ENV_URL, RpcConfig,
};
pub use config_store::{CleepConfigStore, GET_CONFIG_COMMAND};
pub use http_client::{HttpUtils, truncate_for_log};
pub use transport::HttpTransport;
