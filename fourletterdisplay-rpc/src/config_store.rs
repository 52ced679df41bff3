//! RPC-backed module configuration store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use fourletterdisplay_core::traits::{ConfigStore, ConfigSubscribers, ConfigSubscription};
use fourletterdisplay_core::types::CommandRequest;
use fourletterdisplay_core::{CoreResult, RpcTransport};

/// Command every Cleep module answers with its configuration
pub const GET_CONFIG_COMMAND: &str = "get_module_config";

/// Configuration store fetching module configs over the RPC transport.
///
/// Configs are cached per module. `get_module_config` serves the cache when
/// present; `reload_module_config` always asks the device. Either way the
/// result is pushed to subscribers. Nothing is pushed when a fetch fails.
pub struct CleepConfigStore {
    transport: Arc<dyn RpcTransport>,
    configs: RwLock<HashMap<String, Value>>,
    subscribers: ConfigSubscribers,
}

impl CleepConfigStore {
    #[must_use]
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            transport,
            configs: RwLock::new(HashMap::new()),
            subscribers: ConfigSubscribers::new(),
        }
    }

    /// Cached configuration of `module`, if fetched already
    pub async fn cached(&self, module: &str) -> Option<Value> {
        self.configs.read().await.get(module).cloned()
    }

    async fn fetch(&self, module: &str) -> CoreResult<()> {
        let config = self
            .transport
            .send_command(CommandRequest::new(GET_CONFIG_COMMAND, module))
            .await
            .inspect_err(|e| log::warn!("[{module}] Failed to fetch config: {e}"))?;

        self.configs
            .write()
            .await
            .insert(module.to_string(), config.clone());
        self.subscribers.publish(module, &Some(config)).await;
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for CleepConfigStore {
    async fn get_module_config(&self, module: &str) -> CoreResult<()> {
        if let Some(config) = self.cached(module).await {
            self.subscribers.publish(module, &Some(config)).await;
            return Ok(());
        }
        self.fetch(module).await
    }

    async fn reload_module_config(&self, module: &str) -> CoreResult<()> {
        log::debug!("[{module}] Reloading config");
        self.fetch(module).await
    }

    async fn subscribe(&self, module: &str) -> ConfigSubscription {
        self.subscribers.subscribe(module).await
    }
}
