//! Display command service
//!
//! Stateless translation of display intents into remote commands.

use std::sync::Arc;

use serde_json::Value;

use crate::error::CoreResult;
use crate::traits::RpcTransport;
use crate::types::{DisplayCommand, DotSelection};

/// Display command service
///
/// Every method returns the transport result unmodified. No validation
/// happens here; out-of-range values come back as the backend's rejection.
#[derive(Clone)]
pub struct DisplayCommandService {
    transport: Arc<dyn RpcTransport>,
    module: String,
}

impl DisplayCommandService {
    /// Create a command service targeting `module`
    #[must_use]
    pub fn new(transport: Arc<dyn RpcTransport>, module: impl Into<String>) -> Self {
        Self {
            transport,
            module: module.into(),
        }
    }

    /// Target module identifier
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Send any display command
    pub async fn send(&self, command: DisplayCommand) -> CoreResult<Value> {
        let request = command.into_request(&self.module);
        log::debug!("[{}] -> {} {:?}", self.module, request.command, request.params);
        self.transport.send_command(request).await
    }

    /// Set display brightness
    pub async fn set_brightness(&self, brightness: i64) -> CoreResult<Value> {
        self.send(DisplayCommand::SetBrightness { brightness }).await
    }

    /// Set night mode brightness
    pub async fn set_night_mode_brightness(&self, brightness: i64) -> CoreResult<Value> {
        self.send(DisplayCommand::SetNightModeBrightness { brightness })
            .await
    }

    /// Display message (scrolls when longer than four characters)
    pub async fn display_message(&self, message: impl Into<String>) -> CoreResult<Value> {
        self.send(DisplayCommand::DisplayMessage {
            message: message.into(),
        })
        .await
    }

    /// Set the four indicator dots
    pub async fn set_dots(&self, dots: DotSelection) -> CoreResult<Value> {
        self.send(DisplayCommand::SetDots(dots)).await
    }

    /// Enable or disable night mode
    pub async fn enable_night_mode(&self, enable: bool) -> CoreResult<Value> {
        self.send(DisplayCommand::EnableNightMode { enable }).await
    }

    /// Clear display
    pub async fn clear(&self) -> CoreResult<Value> {
        self.send(DisplayCommand::Clear).await
    }
}
