//! # Wireable Common
//!
//! 这个 crate 提供了 Wireable 容器的公共类型定义。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait，通过 [`ComponentDef`] 声明依赖、生命周期方法和事件处理方法
//! - [`ComponentDescriptor`] - 类型擦除后的组件描述符
//! - [`Wired`] - 可被容器注入的依赖字段
//! - [`EventArgs`] - 事件位置参数
//! - [`PriorityLevel`] / [`Phase`] - 生命周期优先级与阶段
//! - [`ContainerConfig`] - 容器配置
//!
//! ## 设计原则
//!
//! - 显式声明代替运行时反射
//! - 组件实例为单例，由容器独占持有
//! - 依赖缺失不视为错误

pub mod component;
pub mod configuration;
pub mod errors;
pub mod event;
pub mod lifecycle;
pub mod metadata;
pub mod wired;

pub use component::*;
pub use configuration::*;
pub use errors::*;
pub use event::*;
pub use lifecycle::*;
pub use metadata::*;
pub use wired::*;
