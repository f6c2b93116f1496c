//! 依赖来源抽象接口
//!
//! 注入器只通过此接口查找依赖，不关心依赖由谁持有

use std::any::TypeId;
use wireable_common::{DependencyTarget, Instance};

/// 依赖来源 trait
pub trait DependencySource {
    /// 按具体类型查找实例
    ///
    /// `include_non_injectable` 为 `false` 时，私有组件视为不存在。
    fn lookup(&self, type_id: TypeId, include_non_injectable: bool) -> Option<Instance>;

    /// 按能力接口解析实例，返回值中保存的是 `Arc<dyn Trait>`
    fn resolve_interface(&self, interface: TypeId, include_non_injectable: bool) -> Option<Instance>;

    /// 解析依赖字段的目标，只返回可注入的组件
    fn resolve(&self, target: &DependencyTarget) -> Option<Instance> {
        match target {
            DependencyTarget::Concrete(info) => self.lookup(info.id, false),
            DependencyTarget::Interface(info) => self.resolve_interface(info.id, false),
        }
    }
}

/// 不提供任何依赖的来源
///
/// 容器未初始化时用于 `wire_objects`，所有依赖字段都会被置为缺省。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDependencies;

impl DependencySource for NoDependencies {
    fn lookup(&self, _type_id: TypeId, _include_non_injectable: bool) -> Option<Instance> {
        None
    }

    fn resolve_interface(&self, _interface: TypeId, _include_non_injectable: bool) -> Option<Instance> {
        None
    }
}
