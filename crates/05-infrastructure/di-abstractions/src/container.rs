//! 容器访问抽象接口
//!
//! 提供容器的类型擦除访问方式，泛型便捷方法见 [`ContainerExt`]

use std::any::TypeId;
use std::sync::Arc;
use wireable_common::{
    ContainerState, DispatchError, EventArgs, Instance, TypeInfo, WireError, WireTarget,
};

/// 容器 trait
pub trait ComponentContainer: Send + Sync {
    /// 当前状态
    fn state(&self) -> ContainerState;

    /// 是否已初始化
    fn is_initialized(&self) -> bool {
        self.state() == ContainerState::Initialized
    }

    /// 已管理的组件类型（按发现顺序）
    fn component_types(&self) -> Vec<TypeInfo>;

    /// 按具体类型获取实例
    fn instance_by_type_id(&self, type_id: TypeId, include_non_injectable: bool) -> Option<Instance>;

    /// 按能力接口获取实例，返回值中保存的是 `Arc<dyn Trait>`
    fn interface_by_type_id(&self, interface: TypeId, include_non_injectable: bool) -> Option<Instance>;

    /// 向外部对象注入依赖
    fn wire_objects(&self, targets: &[&dyn WireTarget]) -> Result<(), WireError>;

    /// 同步触发事件
    fn fire_event(&self, event: &str, args: EventArgs) -> Result<(), DispatchError>;

    /// 异步触发事件，失败时只记录日志
    fn fire_event_async(&self, event: &str, args: EventArgs);
}

/// 容器泛型便捷方法
pub trait ContainerExt: ComponentContainer {
    /// 获取可注入的具体组件
    fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.instance_by_type_id(TypeId::of::<T>(), false)
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 获取可注入的能力接口实现
    fn get_dyn<I: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<I>> {
        self.interface_by_type_id(TypeId::of::<I>(), false)
            .and_then(|instance| instance.downcast_ref::<Arc<I>>().cloned())
    }
}

impl<C: ComponentContainer + ?Sized> ContainerExt for C {}
