//! 能力接口解析器
//!
//! 先查找显式绑定，再按发现顺序查找第一个实现了该接口的组件

use crate::registry::{ComponentEntry, ComponentRegistry};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::{debug, warn};
use wireable_common::{Instance, TypeInfo};

/// 能力接口解析器
#[derive(Debug, Default)]
pub struct InterfaceResolver {
    bindings: HashMap<TypeId, TypeInfo>,
}

impl InterfaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 根据注册表中声明了首选接口的组件建立绑定
    pub fn from_registry(registry: &ComponentRegistry) -> Self {
        let mut resolver = Self::new();
        for entry in registry.entries() {
            if let Some(interface) = entry.descriptor.bound_interface {
                resolver.bind(interface, entry.descriptor.type_info);
            }
        }
        resolver
    }

    /// 绑定能力接口的首选实现
    ///
    /// 同一接口的后一次绑定会覆盖前一次。
    pub fn bind(&mut self, interface: TypeInfo, component: TypeInfo) {
        debug!("绑定能力接口: {} -> {}", interface.short_name(), component.short_name());
        if let Some(previous) = self.bindings.insert(interface.id, component) {
            if previous != component {
                warn!(
                    "能力接口绑定被覆盖: {} ({} -> {})",
                    interface.short_name(),
                    previous.short_name(),
                    component.short_name()
                );
            }
        }
    }

    /// 获取能力接口的绑定
    pub fn binding(&self, interface: TypeId) -> Option<TypeInfo> {
        self.bindings.get(&interface).copied()
    }

    /// 选出能力接口对应的组件
    ///
    /// 不做可注入性过滤。
    pub fn select<'r>(&self, registry: &'r ComponentRegistry, interface: TypeId) -> Option<&'r ComponentEntry> {
        match self.binding(interface) {
            Some(component) => registry.lookup(component.id),
            None => registry
                .entries()
                .find(|entry| entry.descriptor.provides_interface(interface)),
        }
    }

    /// 解析能力接口，返回值中保存的是 `Arc<dyn Trait>`
    ///
    /// 选中的组件为私有组件且 `include_non_injectable` 为 `false` 时返回 `None`，不会继续查找其他实现。
    pub fn resolve(
        &self,
        registry: &ComponentRegistry,
        interface: TypeId,
        include_non_injectable: bool,
    ) -> Option<Instance> {
        let entry = self.select(registry, interface)?;
        if !include_non_injectable && !entry.descriptor.injectable {
            debug!("能力接口的实现为私有组件: {}", entry.name());
            return None;
        }
        entry.descriptor.cast_to(interface, entry.instance.clone())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
