//! 类型定义模块

mod command;
mod config;
mod dots;

pub use command::{CommandRequest, CommandResponse, DisplayCommand};
pub use config::{ConfigMirror, DisplayConfig, MAX_BRIGHTNESS, MIN_BRIGHTNESS};
pub use dots::{Dot, DotSelection};
