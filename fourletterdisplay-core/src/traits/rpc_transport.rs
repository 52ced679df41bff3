//! RPC transport abstract Trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CoreResult;
use crate::types::CommandRequest;

/// Sends named commands to a backend module.
///
/// Platform implementation:
/// - `fourletterdisplay-rpc`: `HttpTransport` (`POST /command` on the Cleep device)
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Send a command and wait for its result
    ///
    /// # Arguments
    /// * `request` - command name, target module and parameters
    ///
    /// # Returns
    /// The `data` part of the backend response. A backend rejection is
    /// returned as `CoreError::CommandFailed`.
    async fn send_command(&self, request: CommandRequest) -> CoreResult<Value>;
}
