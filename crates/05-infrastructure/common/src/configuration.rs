//! 容器配置

use crate::errors::ConfigResult;
use serde::{Deserialize, Serialize};

/// 作用域中未发现任何组件时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyScopePolicy {
    /// 保持未初始化状态，不报错；之后可以再次初始化
    #[default]
    StayUninitialized,
    /// 视为初始化成功
    Initialize,
    /// 返回 `InitializationError::EmptyScope`
    Fail,
}

/// 异步事件分发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsyncDispatchMode {
    /// 存在 Tokio 运行时时使用其阻塞线程池，否则使用独立线程
    ///
    /// 阻塞线程池会复用线程并限制线程数（默认 512），超出时事件排队等待空闲线程；
    /// 关闭运行时会等待正在执行的处理方法。需要每次分发独占一个线程时使用 `Thread`。
    #[default]
    Auto,
    /// 始终使用独立线程
    Thread,
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 空作用域处理策略
    pub empty_scope: EmptyScopePolicy,
    /// 异步事件分发方式
    pub async_dispatch: AsyncDispatchMode,
}

impl ContainerConfig {
    /// 从 TOML 文本加载
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// 从 JSON 文本加载
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// 设置空作用域处理策略
    pub fn with_empty_scope(mut self, policy: EmptyScopePolicy) -> Self {
        self.empty_scope = policy;
        self
    }

    /// 设置异步事件分发方式
    pub fn with_async_dispatch(mut self, mode: AsyncDispatchMode) -> Self {
        self.async_dispatch = mode;
        self
    }
}
