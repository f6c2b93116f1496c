//! 全局组件目录
//!
//! `#[component]` 在程序加载时通过 `ctor` 向目录提交组件条目。目录只保存描述符的构建函数，不保存实例。

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;
use wireable_abstractions::{ComponentLocator, ScopePath};
use wireable_common::{ComponentDescriptor, ComponentError};

/// 描述符构建函数
pub type DescriptorBuilder = fn() -> ComponentDescriptor;

/// 目录条目
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// 所属作用域，默认为声明组件的模块路径
    pub scope: &'static str,
    /// 声明所在的源码行号
    pub line: u32,
    pub build: DescriptorBuilder,
}

impl CatalogEntry {
    pub const fn new(scope: &'static str, line: u32, build: DescriptorBuilder) -> Self {
        Self { scope, line, build }
    }
}

static CATALOG: Lazy<RwLock<Vec<CatalogEntry>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// 提交目录条目
pub fn submit(entry: CatalogEntry) {
    CATALOG.write().push(entry);
}

/// 获取所有目录条目，按 (作用域, 行号) 排序
pub fn entries() -> Vec<CatalogEntry> {
    let mut entries = CATALOG.read().clone();
    entries.sort_by(|a, b| (a.scope, a.line).cmp(&(b.scope, b.line)));
    entries
}

/// 基于全局目录的组件定位器
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogLocator;

impl ComponentLocator for CatalogLocator {
    fn locate(&self, scope: &ScopePath) -> Result<Vec<ComponentDescriptor>, ComponentError> {
        let descriptors: Vec<ComponentDescriptor> = entries()
            .into_iter()
            .filter(|entry| scope.contains(entry.scope))
            .map(|entry| (entry.build)())
            .collect();

        debug!("从组件目录中发现 {} 个组件: {}", descriptors.len(), scope);
        Ok(descriptors)
    }

    fn name(&self) -> &str {
        "catalog"
    }
}
