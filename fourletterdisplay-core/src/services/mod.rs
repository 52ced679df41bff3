//! 业务逻辑服务层

mod command_service;
mod config_controller;
mod dot_input;

pub use command_service::DisplayCommandService;
pub use config_controller::{ConfigController, ControllerState, Dispatch, MessagePolicy};
pub use dot_input::{CheckboxDots, DotInput, MultiSelectDots};

use std::sync::Arc;

use crate::traits::{ConfigStore, RpcTransport};

/// Module name the display registers under on the device
pub const DEFAULT_MODULE: &str = "fourletterdisplay";

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的传输层与配置存储实现。
pub struct ServiceContext {
    /// RPC 传输层
    pub transport: Arc<dyn RpcTransport>,
    /// 模块配置存储
    pub config_store: Arc<dyn ConfigStore>,
    /// 目标模块名
    pub module: String,
}

impl ServiceContext {
    /// 创建服务上下文（目标模块为 [`DEFAULT_MODULE`]）
    #[must_use]
    pub fn new(transport: Arc<dyn RpcTransport>, config_store: Arc<dyn ConfigStore>) -> Self {
        Self {
            transport,
            config_store,
            module: DEFAULT_MODULE.to_string(),
        }
    }

    /// 指定目标模块名
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// 创建绑定到本上下文模块的命令服务
    #[must_use]
    pub fn command_service(&self) -> DisplayCommandService {
        DisplayCommandService::new(Arc::clone(&self.transport), self.module.clone())
    }
}
