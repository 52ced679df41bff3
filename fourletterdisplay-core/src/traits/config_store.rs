//! Host configuration store abstract Trait

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, RwLock};

use crate::error::CoreResult;

/// One change notification: the module's configuration object as the store
/// currently holds it (`None` when the store has nothing yet).
pub type ConfigSnapshot = Option<Value>;

/// Host configuration store Trait
///
/// Holds one configuration object per module and notifies subscribers every
/// time it changes.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Ask the store to populate the module configuration.
    ///
    /// The result reaches subscribers as a notification.
    ///
    /// # Arguments
    /// * `module` - Module name
    async fn get_module_config(&self, module: &str) -> CoreResult<()>;

    /// Force a re-fetch of the module configuration.
    ///
    /// # Arguments
    /// * `module` - Module name
    async fn reload_module_config(&self, module: &str) -> CoreResult<()>;

    /// Subscribe to configuration changes of a module.
    ///
    /// # Arguments
    /// * `module` - Module name
    async fn subscribe(&self, module: &str) -> ConfigSubscription;
}

/// Receiving end of a module configuration subscription.
///
/// Every notification is delivered, in order.
#[derive(Debug)]
pub struct ConfigSubscription {
    rx: mpsc::UnboundedReceiver<ConfigSnapshot>,
}

impl ConfigSubscription {
    /// Next pending notification, without waiting
    pub fn try_next(&mut self) -> Option<ConfigSnapshot> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next notification. `None` once the store is gone.
    pub async fn next(&mut self) -> Option<ConfigSnapshot> {
        self.rx.recv().await
    }
}

/// Subscriber bookkeeping shared by store implementations.
#[derive(Debug, Default)]
pub struct ConfigSubscribers {
    senders: RwLock<HashMap<String, Vec<mpsc::UnboundedSender<ConfigSnapshot>>>>,
}

impl ConfigSubscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber for `module`
    pub async fn subscribe(&self, module: &str) -> ConfigSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders
            .write()
            .await
            .entry(module.to_string())
            .or_default()
            .push(tx);
        ConfigSubscription { rx }
    }

    /// Notify every live subscriber of `module`; dropped subscribers are pruned.
    pub async fn publish(&self, module: &str, snapshot: &ConfigSnapshot) {
        let mut senders = self.senders.write().await;
        if let Some(list) = senders.get_mut(module) {
            list.retain(|tx| tx.send(snapshot.clone()).is_ok());
            log::debug!("[{module}] config change sent to {} subscriber(s)", list.len());
        }
    }

    /// Number of live subscribers for `module`
    pub async fn count(&self, module: &str) -> usize {
        self.senders
            .read()
            .await
            .get(module)
            .map_or(0, |list| list.iter().filter(|tx| !tx.is_closed()).count())
    }
}
