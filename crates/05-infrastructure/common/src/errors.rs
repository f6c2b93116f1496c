//! 错误类型定义

use crate::lifecycle::{Phase, PriorityLevel};
use thiserror::Error;

/// 生命周期方法与事件处理方法的错误类型
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {source}")]
    ParseError {
        #[from]
        source: toml::de::Error,
    },

    #[error("配置序列化失败: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("依赖类型不匹配: 期望 {expected}")]
    TypeMismatch { expected: String },

    #[error("组件实例与声明不符: 期望 {expected}")]
    OwnerMismatch { expected: String },
}

/// 组件扫描错误类型
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("组件扫描失败: {message}")]
    ScanError { message: String },
}

impl ComponentError {
    /// 创建扫描错误
    pub fn scan_error(message: impl Into<String>) -> Self {
        Self::ScanError {
            message: message.into(),
        }
    }
}

/// 事件参数访问错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventArgError {
    #[error("事件参数缺失: 位置 {index}")]
    Missing { index: usize },

    #[error("事件参数类型不匹配: 位置 {index}, 期望 {expected}")]
    TypeMismatch { index: usize, expected: &'static str },
}

/// 依赖字段注入失败
///
/// 仅由 `wire_objects` 与初始化阶段的注入步骤产生，不改变容器状态。
#[derive(Error, Debug)]
#[error("组件依赖注入失败: {type_name}.{field}, 原因: {source}")]
pub struct WireError {
    pub type_name: String,
    pub field: &'static str,
    #[source]
    pub source: DependencyError,
}

/// 同步事件分发失败
///
/// 标识出失败的处理方法以及事件名称，后续处理方法不会再被调用。
#[derive(Error, Debug)]
#[error("事件处理方法执行失败: {event} -> {type_name}::{handler}, 原因: {source}")]
pub struct DispatchError {
    pub event: String,
    pub type_name: String,
    pub handler: &'static str,
    #[source]
    pub source: BoxError,
}

/// 容器初始化错误类型
///
/// 任一步骤失败都会中止整个初始化，容器保持未初始化状态。
#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("组件扫描失败: {scope}, 原因: {source}")]
    ScanFailed {
        scope: String,
        #[source]
        source: ComponentError,
    },

    #[error("组件实例化失败: {type_name}, 原因: {source}")]
    InstantiationFailed {
        type_name: String,
        #[source]
        source: BoxError,
    },

    #[error("组件依赖注入失败: {source}")]
    WiringFailed {
        #[from]
        source: WireError,
    },

    #[error("生命周期方法执行失败: {type_name}::{hook} ({phase}/{priority}), 原因: {source}")]
    LifecycleFailed {
        type_name: String,
        hook: &'static str,
        phase: Phase,
        priority: PriorityLevel,
        #[source]
        source: BoxError,
    },

    #[error("作用域中未发现任何组件: {scope}")]
    EmptyScope { scope: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type InitResult<T> = Result<T, InitializationError>;
pub type HookResult = Result<(), BoxError>;
