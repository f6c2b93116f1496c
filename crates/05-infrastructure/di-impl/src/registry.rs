//! 组件注册表
//!
//! 独占持有所有单例实例及其描述符，按发现顺序保存

use indexmap::IndexMap;
use std::any::TypeId;
use tracing::{debug, warn};
use wireable_common::{ComponentDescriptor, Instance, TypeInfo};

/// 注册表中的一个组件
#[derive(Debug, Clone)]
pub struct ComponentEntry {
    pub descriptor: ComponentDescriptor,
    pub instance: Instance,
}

impl ComponentEntry {
    /// 组件简短名称
    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }
}

/// 组件注册表
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: IndexMap<TypeId, ComponentEntry>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册组件实例，同一类型重复注册时覆盖旧实例
    pub fn register(&mut self, descriptor: ComponentDescriptor, instance: Instance) {
        let type_id = descriptor.type_info.id;
        debug!("注册组件: {}", descriptor.type_info);

        let entry = ComponentEntry { descriptor, instance };
        if let Some(previous) = self.entries.insert(type_id, entry) {
            warn!("组件重复注册，旧实例已被替换: {}", previous.descriptor.type_info);
        }
    }

    /// 按具体类型查找
    pub fn lookup(&self, type_id: TypeId) -> Option<&ComponentEntry> {
        self.entries.get(&type_id)
    }

    /// 按具体类型查找，私有组件视为不存在
    pub fn lookup_injectable(&self, type_id: TypeId) -> Option<&ComponentEntry> {
        self.lookup(type_id).filter(|entry| entry.descriptor.injectable)
    }

    /// 获取实例
    pub fn instance(&self, type_id: TypeId, include_non_injectable: bool) -> Option<Instance> {
        let entry = if include_non_injectable {
            self.lookup(type_id)
        } else {
            self.lookup_injectable(type_id)
        };
        entry.map(|entry| entry.instance.clone())
    }

    /// 按发现顺序遍历
    pub fn entries(&self) -> impl Iterator<Item = &ComponentEntry> {
        self.entries.values()
    }

    /// 按组件优先级排序，同一优先级保持发现顺序
    pub fn by_priority(&self) -> Vec<&ComponentEntry> {
        let mut entries: Vec<&ComponentEntry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.descriptor.priority);
        entries
    }

    /// 已注册的组件类型（按发现顺序）
    pub fn component_types(&self) -> Vec<TypeInfo> {
        self.entries.values().map(|entry| entry.descriptor.type_info).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
