//! HTTP request helpers
//!
//! Sending, logging and response decoding for the device's command endpoint.
//! Requests are sent exactly once: a failed command is reported, never retried.

use reqwest::RequestBuilder;
use serde_json::Value;

use fourletterdisplay_core::types::CommandResponse;
use fourletterdisplay_core::{CoreError, CoreResult};

/// Maximum number of bytes of a body included in logs and errors.
const TRUNCATE_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, body, ...)
    /// * `command` - command name (for logging)
    /// * `url` - target URL (for logging)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        command: &str,
        url: &str,
    ) -> CoreResult<(u16, String)> {
        log::debug!("[{command}] POST {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(format!("{command}: {e}"))
            } else {
                CoreError::NetworkError(format!("{command}: {e}"))
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{command}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        log::debug!(
            "[{command}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Decode the device's response envelope
    ///
    /// # Returns
    /// * `Ok(data)` - 2xx and `error == false`
    /// * `Err(CoreError::HttpStatus)` - non-2xx status
    /// * `Err(CoreError::SerializationError)` - body is not a response envelope
    /// * `Err(CoreError::CommandFailed)` - backend rejected the command
    pub fn parse_command_response(command: &str, status: u16, body: &str) -> CoreResult<Value> {
        if !(200..300).contains(&status) {
            log::warn!("[{command}] HTTP {status}");
            return Err(CoreError::HttpStatus {
                status,
                body: truncate_for_log(body),
            });
        }

        let response: CommandResponse = serde_json::from_str(body).map_err(|e| {
            log::error!("[{command}] JSON parse failed: {e}");
            log::error!("[{command}] Raw response: {}", truncate_for_log(body));
            CoreError::SerializationError(e.to_string())
        })?;

        if response.error {
            let message = response
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(CoreError::CommandFailed {
                command: command.to_string(),
                message,
            });
        }

        Ok(response.data)
    }
}

/// Truncate a string for logging, on a char boundary.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
