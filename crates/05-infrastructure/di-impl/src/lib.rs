//! # Wireable
//!
//! 最小化的控制反转容器：发现组件、以单例方式实例化、注入依赖、按优先级执行生命周期方法，
//! 并把命名事件分发给订阅的处理方法。
//!
//! ## 核心组件
//!
//! - [`ComponentRegistry`] - 组件注册表
//! - [`DependencyInjector`] - 依赖注入器
//! - [`InterfaceResolver`] - 能力接口解析器
//! - [`LifecycleRunner`] - 生命周期执行器
//! - [`EventBus`] - 事件总线
//! - [`WireableContainer`] - 容器门面
//!
//! ## 使用示例
//!
//! ```rust
//! use wireable::{Component, ComponentDef, ManualLocator, PriorityLevel, WireableContainer, Wired};
//!
//! #[derive(Default)]
//! struct Clock;
//! impl Component for Clock {}
//!
//! #[derive(Default)]
//! struct Scheduler {
//!     clock: Wired<Clock>,
//! }
//!
//! impl Component for Scheduler {
//!     fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
//!         def.wired("clock", |s| &s.clock)
//!             .on_startup(PriorityLevel::Normal, "start", |s| {
//!                 assert!(s.clock.is_wired());
//!                 Ok(())
//!             })
//!     }
//! }
//!
//! let locator = ManualLocator::new()
//!     .register::<Clock>("app")
//!     .register::<Scheduler>("app::jobs");
//!
//! let container = WireableContainer::create_and_init(&locator, "app").unwrap();
//! assert!(container.get_instance::<Scheduler>().is_some());
//! ```

pub mod catalog;
pub mod container;
pub mod context;
pub mod events;
pub mod injector;
pub mod lifecycle;
pub mod locator;
pub mod registry;
pub mod resolver;

pub use catalog::{CatalogEntry, CatalogLocator, DescriptorBuilder};
pub use container::*;
pub use context::*;
pub use events::*;
pub use injector::*;
pub use lifecycle::*;
pub use locator::*;
pub use registry::*;
pub use resolver::*;

pub use wireable_abstractions::*;
pub use wireable_common::*;
pub use wireable_macros::{component, Component};
