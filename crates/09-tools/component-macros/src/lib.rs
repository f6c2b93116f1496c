//! # Wireable Macros
//!
//! 这个 crate 提供了用于组件自动注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`component`] - 在程序加载时把组件提交到全局组件目录
//! - [`Component`] - 为不需要额外声明的组件实现 `Component` trait
//!
//! 生成的代码通过 `::wireable` 路径引用容器类型，并使用 `ctor` 注册，
//! 因此使用方需要同时依赖 `wireable` 和 `ctor`。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use wireable::{component, Component};
//!
//! #[component(priority = "high", primary_for = "dyn Greeter")]
//! #[derive(Default, Component)]
//! pub struct English;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod utils;

/// 组件自动注册宏
///
/// # 参数
///
/// - `priority = "high" | "normal" | "low"` - 组件优先级（默认为 `normal`）
/// - `private` - 私有组件，不会被注入到其他组件
/// - `primary_for = "dyn Trait"` - 作为能力接口的首选实现
/// - `implements = "dyn Trait"` - 声明实现的能力接口，可重复
/// - `scope = "app::services"` - 覆盖默认作用域（默认为所在模块路径）
///
/// 组件类型需要实现 `Default` 和 `Component`。
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}

/// 组件派生宏
///
/// 为结构体实现不带任何声明的 `Component` trait。
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(input)
}
