//! Remote command types

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::DotSelection;

/// Request sent to the RPC transport.
///
/// Wire form: `{"command": "...", "to": "...", "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command name
    pub command: String,
    /// Target module identifier
    pub to: String,
    /// Parameter mapping (empty when the command takes none)
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl CommandRequest {
    #[must_use]
    pub fn new(command: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            to: to.into(),
            params: Map::new(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }
}

/// Response envelope returned by the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Whether the backend rejected the command
    #[serde(default)]
    pub error: bool,
    /// Error message (or informational message)
    #[serde(default)]
    pub message: Option<String>,
    /// Command result
    #[serde(default)]
    pub data: Value,
}

/// The six display commands the backend understands.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    SetBrightness { brightness: i64 },
    SetNightModeBrightness { brightness: i64 },
    DisplayMessage { message: String },
    SetDots(DotSelection),
    EnableNightMode { enable: bool },
    Clear,
}

impl DisplayCommand {
    /// Remote command name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBrightness { .. } => "set_brightness",
            Self::SetNightModeBrightness { .. } => "set_night_mode_brightness",
            Self::DisplayMessage { .. } => "display_message",
            Self::SetDots(_) => "set_dots",
            Self::EnableNightMode { .. } => "enable_night_mode",
            Self::Clear => "clear",
        }
    }

    /// Fixed parameter mapping for this command
    #[must_use]
    pub fn params(&self) -> Map<String, Value> {
        let value = match self {
            Self::SetBrightness { brightness } | Self::SetNightModeBrightness { brightness } => {
                json!({ "brightness": brightness })
            }
            Self::DisplayMessage { message } => json!({ "message": message }),
            Self::SetDots(dots) => json!({
                "most_left": dots.most_left,
                "middle_left": dots.middle_left,
                "middle_right": dots.middle_right,
                "most_right": dots.most_right,
            }),
            Self::EnableNightMode { enable } => json!({ "enable": enable }),
            Self::Clear => return Map::new(),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Build the transport request targeting `module`
    #[must_use]
    pub fn into_request(self, module: &str) -> CommandRequest {
        CommandRequest::new(self.name(), module).with_params(self.params())
    }
}
