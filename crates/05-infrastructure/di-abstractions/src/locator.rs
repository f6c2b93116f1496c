//! 组件定位器抽象接口
//!
//! 给定作用域，按确定的顺序返回候选组件描述符

use std::fmt;
use wireable_common::{ComponentDescriptor, ComponentError};

/// 组件扫描作用域
///
/// 以模块路径表示，`::` 与 `.` 均可作为分隔符。空作用域匹配所有组件，
/// 非空作用域匹配自身以及所有嵌套的子作用域。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScopePath {
    segments: Vec<String>,
}

impl ScopePath {
    /// 解析作用域路径
    pub fn new(path: &str) -> Self {
        let segments = path
            .replace('.', "::")
            .split("::")
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// 匹配所有组件的根作用域
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// 路径片段
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// 指定模块路径是否位于此作用域内
    ///
    /// `a::b` 包含 `a::b` 和 `a::b::c`，但不包含 `a::bc`。
    pub fn contains(&self, module_path: &str) -> bool {
        ScopePath::new(module_path).segments.starts_with(&self.segments)
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

impl From<&str> for ScopePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ScopePath {
    fn from(path: String) -> Self {
        Self::new(&path)
    }
}

/// 组件定位器 trait
///
/// 返回的顺序即发现顺序，决定接口解析、事件订阅以及同一优先级内生命周期方法的执行顺序，
/// 必须是确定的。结果必须包含嵌套子作用域中的组件。
pub trait ComponentLocator: Send + Sync {
    /// 定位作用域内的组件
    fn locate(&self, scope: &ScopePath) -> Result<Vec<ComponentDescriptor>, ComponentError>;

    /// 获取定位器名称
    fn name(&self) -> &str;
}
