//! HTTP command transport

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use fourletterdisplay_core::types::CommandRequest;
use fourletterdisplay_core::{CoreError, CoreResult, RpcTransport};

use crate::config::RpcConfig;
use crate::http_client::HttpUtils;

/// Sends commands to a Cleep device as `POST /command` JSON requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    command_url: Url,
}

impl HttpTransport {
    pub fn new(config: &RpcConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            command_url: config.command_url()?,
        })
    }

    pub fn command_url(&self) -> &Url {
        &self.command_url
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send_command(&self, request: CommandRequest) -> CoreResult<Value> {
        let command = request.command.clone();
        let builder = self.client.post(self.command_url.clone()).json(&request);

        let (status, body) =
            HttpUtils::execute_request(builder, &command, self.command_url.as_str()).await?;

        HttpUtils::parse_command_response(&command, status, &body)
    }
}
