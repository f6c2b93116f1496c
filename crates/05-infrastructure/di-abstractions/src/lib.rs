//! # Wireable Abstractions
//!
//! 容器抽象层，定义组件发现、依赖来源和容器访问的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentLocator`] - 组件定位器接口
//! - [`ScopePath`] - 组件扫描作用域
//! - [`DependencySource`] - 依赖来源接口
//! - [`ComponentContainer`] - 容器访问接口

pub mod container;
pub mod locator;
pub mod source;

pub use container::*;
pub use locator::*;
pub use source::*;
