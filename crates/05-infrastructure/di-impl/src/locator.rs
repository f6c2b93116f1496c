//! 显式组件定位器
//!
//! 按注册顺序返回组件，适合测试以及不使用 `#[component]` 的场景

use std::fmt;
use std::sync::Arc;
use wireable_abstractions::{ComponentLocator, ScopePath};
use wireable_common::{Component, ComponentDescriptor, ComponentError};

type Builder = Arc<dyn Fn() -> ComponentDescriptor + Send + Sync>;

struct ManualEntry {
    scope: String,
    build: Builder,
}

/// 显式组件定位器
#[derive(Default)]
pub struct ManualLocator {
    entries: Vec<ManualEntry>,
}

impl ManualLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册使用 `Default` 构造的组件
    pub fn register<T: Component + Default>(self, scope: &str) -> Self {
        self.register_with(scope, ComponentDescriptor::of::<T>)
    }

    /// 注册自定义描述符构建函数
    pub fn register_with<F>(mut self, scope: &str, build: F) -> Self
    where
        F: Fn() -> ComponentDescriptor + Send + Sync + 'static,
    {
        self.entries.push(ManualEntry {
            scope: scope.to_string(),
            build: Arc::new(build),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ComponentLocator for ManualLocator {
    fn locate(&self, scope: &ScopePath) -> Result<Vec<ComponentDescriptor>, ComponentError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| scope.contains(&entry.scope))
            .map(|entry| (entry.build)())
            .collect())
    }

    fn name(&self) -> &str {
        "manual"
    }
}

impl fmt::Debug for ManualLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualLocator")
            .field("scopes", &self.entries.iter().map(|entry| &entry.scope).collect::<Vec<_>>())
            .finish()
    }
}
