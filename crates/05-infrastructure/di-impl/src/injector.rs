//! 依赖注入器
//!
//! 为每个依赖字段查找可注入的依赖并写入实例。依赖缺失时字段被置为缺省，不视为错误。

use crate::registry::ComponentRegistry;
use std::any::Any;
use tracing::debug;
use wireable_abstractions::DependencySource;
use wireable_common::{DependencySlot, TypeInfo, WireError, WireTarget};

/// 依赖注入器
pub struct DependencyInjector<'s> {
    source: &'s dyn DependencySource,
}

impl<'s> DependencyInjector<'s> {
    pub fn new(source: &'s dyn DependencySource) -> Self {
        Self { source }
    }

    /// 注入单个对象的依赖字段
    pub fn inject(
        &self,
        owner_type: TypeInfo,
        owner: &(dyn Any + Send + Sync),
        slots: &[DependencySlot],
    ) -> Result<(), WireError> {
        for slot in slots {
            let value = self.source.resolve(&slot.target);
            if value.is_none() {
                debug!(
                    "依赖未找到，字段置为缺省: {}.{} ({})",
                    owner_type.short_name(),
                    slot.field,
                    slot.target.type_info().short_name()
                );
            }

            slot.assign(owner, value).map_err(|source| WireError {
                type_name: owner_type.short_name().to_string(),
                field: slot.field,
                source,
            })?;
        }
        Ok(())
    }

    /// 注入注册表中所有组件的依赖字段（按组件优先级顺序）
    pub fn inject_registry(&self, registry: &ComponentRegistry) -> Result<(), WireError> {
        for entry in registry.by_priority() {
            self.inject(
                entry.descriptor.type_info,
                entry.instance.as_ref(),
                &entry.descriptor.dependencies,
            )?;
        }
        Ok(())
    }

    /// 注入外部对象的依赖字段，任一对象失败时中止剩余对象
    pub fn inject_targets(&self, targets: &[&dyn WireTarget]) -> Result<(), WireError> {
        for target in targets {
            self.inject(target.target_type(), target.as_any(), &target.dependency_slots())?;
        }
        Ok(())
    }
}
