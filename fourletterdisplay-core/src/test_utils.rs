//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, DEFAULT_MODULE};
use crate::traits::{
    ConfigSnapshot, ConfigStore, ConfigSubscribers, ConfigSubscription, RpcTransport,
};
use crate::types::CommandRequest;

pub const TEST_MODULE: &str = DEFAULT_MODULE;

// ===== MockTransport =====

pub struct MockTransport {
    requests: RwLock<Vec<CommandRequest>>,
    /// 这些命令返回 `CommandFailed`（用于测试失败路径）
    failing: RwLock<HashSet<String>>,
    response: RwLock<Value>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            failing: RwLock::new(HashSet::new()),
            response: RwLock::new(Value::Null),
        }
    }

    pub async fn requests(&self) -> Vec<CommandRequest> {
        self.requests.read().await.clone()
    }

    pub async fn last_request(&self) -> Option<CommandRequest> {
        self.requests.read().await.last().cloned()
    }

    pub async fn fail_command(&self, command: &str) {
        self.failing.write().await.insert(command.to_string());
    }

    pub async fn set_response(&self, data: Value) {
        *self.response.write().await = data;
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send_command(&self, request: CommandRequest) -> CoreResult<Value> {
        let command = request.command.clone();
        self.requests.write().await.push(request);
        if self.failing.read().await.contains(&command) {
            return Err(CoreError::CommandFailed {
                command,
                message: "Parameter is invalid".to_string(),
            });
        }
        Ok(self.response.read().await.clone())
    }
}

// ===== MockConfigStore =====

pub struct MockConfigStore {
    subscribers: ConfigSubscribers,
    config: RwLock<ConfigSnapshot>,
    get_calls: AtomicUsize,
    reload_calls: AtomicUsize,
    /// 为 true 时 get/reload 返回错误
    fail: AtomicBool,
}

impl MockConfigStore {
    pub fn new() -> Self {
        Self {
            subscribers: ConfigSubscribers::new(),
            config: RwLock::new(None),
            get_calls: AtomicUsize::new(0),
            reload_calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Set what the next get/reload will publish
    pub async fn set_config(&self, config: Value) {
        *self.config.write().await = Some(config);
    }

    /// Push a notification straight to subscribers
    pub async fn notify(&self, snapshot: ConfigSnapshot) {
        self.subscribers.publish(TEST_MODULE, &snapshot).await;
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn reload_calls(&self) -> usize {
        self.reload_calls.load(Ordering::SeqCst)
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.count(TEST_MODULE).await
    }

    async fn publish_current(&self, module: &str) -> CoreResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::ConfigStoreError("store unavailable".to_string()));
        }
        let snapshot = self.config.read().await.clone();
        self.subscribers.publish(module, &snapshot).await;
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for MockConfigStore {
    async fn get_module_config(&self, module: &str) -> CoreResult<()> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.publish_current(module).await
    }

    async fn reload_module_config(&self, module: &str) -> CoreResult<()> {
        self.reload_calls.fetch_add(1, Ordering::SeqCst);
        self.publish_current(module).await
    }

    async fn subscribe(&self, module: &str) -> ConfigSubscription {
        self.subscribers.subscribe(module).await
    }
}

// ===== 工厂方法 =====

/// 创建测试用的 `ServiceContext`，同时返回 mock 句柄
pub fn create_test_context() -> (ServiceContext, Arc<MockTransport>, Arc<MockConfigStore>) {
    let transport = Arc::new(MockTransport::new());
    let store = Arc::new(MockConfigStore::new());
    let ctx = ServiceContext::new(transport.clone(), store.clone()).with_module(TEST_MODULE);
    (ctx, transport, store)
}
