//! 组件声明接口
//!
//! 组件通过 [`Component::describe`] 显式声明自己的依赖字段、生命周期方法、
//! 事件处理方法以及所实现的能力接口，容器只依赖这些声明，不做运行时反射。

use crate::errors::{BoxError, DependencyError, HookResult};
use crate::event::{normalize_event_name, EventArgs};
use crate::lifecycle::{Phase, PriorityLevel};
use crate::metadata::TypeInfo;
use crate::wired::Wired;
use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// 容器持有的组件实例
pub type Instance = Arc<dyn Any + Send + Sync>;

type ErasedFactory = Arc<dyn Fn() -> Result<Instance, BoxError> + Send + Sync>;
type ErasedCast = Arc<dyn Fn(Instance) -> Option<Instance> + Send + Sync>;
type ErasedAssign =
    Arc<dyn Fn(&(dyn Any + Send + Sync), Option<Instance>) -> Result<(), DependencyError> + Send + Sync>;
type ErasedHook = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> HookResult + Send + Sync>;
type ErasedHandler = Arc<dyn Fn(&(dyn Any + Send + Sync), &EventArgs) -> HookResult + Send + Sync>;

/// 组件基础 trait
///
/// 所有由容器管理的组件都必须实现此 trait。默认实现不声明任何依赖、
/// 生命周期方法或事件处理方法。
///
/// ```rust
/// use std::sync::Arc;
/// use wireable_common::{Component, ComponentDef, HookResult, PriorityLevel, Wired};
///
/// #[derive(Default)]
/// struct Templates;
/// impl Component for Templates {}
///
/// #[derive(Default)]
/// struct Mailer {
///     templates: Wired<Templates>,
/// }
///
/// impl Mailer {
///     fn prepare(&self) -> HookResult {
///         Ok(())
///     }
/// }
///
/// impl Component for Mailer {
///     fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
///         def.wired("templates", |m| &m.templates)
///             .on_create(PriorityLevel::High, "prepare", Self::prepare)
///     }
/// }
/// ```
pub trait Component: Sized + Send + Sync + 'static {
    /// 声明组件
    fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
        def
    }
}

/// 依赖目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyTarget {
    /// 具体组件类型，直接查找注册表
    Concrete(TypeInfo),
    /// 能力接口（`dyn Trait`），经由接口解析器
    Interface(TypeInfo),
}

impl DependencyTarget {
    pub fn type_info(&self) -> TypeInfo {
        match self {
            DependencyTarget::Concrete(info) | DependencyTarget::Interface(info) => *info,
        }
    }
}

/// 依赖字段声明
#[derive(Clone)]
pub struct DependencySlot {
    /// 字段名称
    pub field: &'static str,
    /// 依赖目标
    pub target: DependencyTarget,
    assign: ErasedAssign,
}

impl DependencySlot {
    /// 向 `owner` 的字段写入依赖；`None` 表示依赖缺失
    pub fn assign(&self, owner: &(dyn Any + Send + Sync), value: Option<Instance>) -> Result<(), DependencyError> {
        (self.assign)(owner, value)
    }
}

impl fmt::Debug for DependencySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencySlot")
            .field("field", &self.field)
            .field("target", &self.target)
            .finish()
    }
}

/// 能力接口转换
///
/// 将组件实例转换为 `Arc<dyn Trait>`，转换结果以 `Instance` 的形式传递。
#[derive(Clone)]
pub struct InterfaceCast {
    pub interface: TypeInfo,
    cast: ErasedCast,
}

impl InterfaceCast {
    pub fn cast(&self, instance: Instance) -> Option<Instance> {
        (self.cast)(instance)
    }
}

impl fmt::Debug for InterfaceCast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceCast")
            .field("interface", &self.interface)
            .finish()
    }
}

/// 生命周期方法
#[derive(Clone)]
pub struct LifecycleHook {
    pub phase: Phase,
    pub priority: PriorityLevel,
    pub name: &'static str,
    call: ErasedHook,
}

impl LifecycleHook {
    pub fn invoke(&self, owner: &(dyn Any + Send + Sync)) -> HookResult {
        (self.call)(owner)
    }
}

impl fmt::Debug for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHook")
            .field("phase", &self.phase)
            .field("priority", &self.priority)
            .field("name", &self.name)
            .finish()
    }
}

/// 事件处理方法
#[derive(Clone)]
pub struct EventHandler {
    /// 订阅的事件名称（已规范化）
    pub events: Vec<String>,
    pub name: &'static str,
    /// 声明的参数个数
    pub arity: usize,
    call: ErasedHandler,
}

impl EventHandler {
    /// 调用处理方法，`args` 应已按 `arity` 截断或补齐
    pub fn invoke(&self, owner: &(dyn Any + Send + Sync), args: &EventArgs) -> HookResult {
        (self.call)(owner, args)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("events", &self.events)
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

fn owner_of<T: 'static>(owner: &(dyn Any + Send + Sync)) -> Result<&T, DependencyError> {
    owner.downcast_ref::<T>().ok_or_else(|| DependencyError::OwnerMismatch {
        expected: std::any::type_name::<T>().to_string(),
    })
}

/// 组件声明构建器
///
/// 所有声明按调用顺序保存，决定同一优先级内的执行顺序以及事件处理顺序。
pub struct ComponentDef<T> {
    type_info: TypeInfo,
    priority: PriorityLevel,
    injectable: bool,
    bound_interface: Option<TypeInfo>,
    provides: Vec<InterfaceCast>,
    dependencies: Vec<DependencySlot>,
    hooks: Vec<LifecycleHook>,
    handlers: Vec<EventHandler>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Component> ComponentDef<T> {
    /// 创建新的组件声明，默认可注入、优先级为 `Normal`
    pub fn new() -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            priority: PriorityLevel::Normal,
            injectable: true,
            bound_interface: None,
            provides: Vec::new(),
            dependencies: Vec::new(),
            hooks: Vec::new(),
            handlers: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// 设置组件优先级
    pub fn with_priority(mut self, priority: PriorityLevel) -> Self {
        self.priority = priority;
        self
    }

    /// 标记为私有组件：会被实例化并执行生命周期方法，但不会被注入到其他组件
    pub fn private(mut self) -> Self {
        self.injectable = false;
        self
    }

    /// 声明实现的能力接口
    ///
    /// ```rust,ignore
    /// def.implements::<dyn Greeter>(|c| c)
    /// ```
    pub fn implements<I>(mut self, upcast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let interface = TypeInfo::of::<I>();
        self.provides.retain(|existing| existing.interface != interface);

        let cast: ErasedCast = Arc::new(move |instance: Instance| {
            instance
                .downcast::<T>()
                .ok()
                .map(|concrete| Arc::new(upcast(concrete)) as Instance)
        });
        self.provides.push(InterfaceCast { interface, cast });
        self
    }

    /// 声明为能力接口的首选实现
    pub fn primary_for<I>(mut self, upcast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.bound_interface = Some(TypeInfo::of::<I>());
        self.implements(upcast)
    }

    /// 声明具体组件类型的依赖字段
    pub fn wired<D>(mut self, field: &'static str, access: fn(&T) -> &Wired<D>) -> Self
    where
        D: Send + Sync + 'static,
    {
        let target = TypeInfo::of::<D>();
        let assign = move |owner: &(dyn Any + Send + Sync), value: Option<Instance>| -> Result<(), DependencyError> {
            let owner = owner_of::<T>(owner)?;
            let value = match value {
                Some(instance) => Some(instance.downcast::<D>().map_err(|_| DependencyError::TypeMismatch {
                    expected: target.name.to_string(),
                })?),
                None => None,
            };
            access(owner).set(value);
            Ok(())
        };

        self.dependencies.push(DependencySlot {
            field,
            target: DependencyTarget::Concrete(target),
            assign: Arc::new(assign),
        });
        self
    }

    /// 声明能力接口类型的依赖字段
    pub fn wired_interface<I>(mut self, field: &'static str, access: fn(&T) -> &Wired<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let target = TypeInfo::of::<I>();
        let assign = move |owner: &(dyn Any + Send + Sync), value: Option<Instance>| -> Result<(), DependencyError> {
            let owner = owner_of::<T>(owner)?;
            let value = match value {
                Some(instance) => Some(
                    instance
                        .downcast_ref::<Arc<I>>()
                        .cloned()
                        .ok_or_else(|| DependencyError::TypeMismatch {
                            expected: target.name.to_string(),
                        })?,
                ),
                None => None,
            };
            access(owner).set(value);
            Ok(())
        };

        self.dependencies.push(DependencySlot {
            field,
            target: DependencyTarget::Interface(target),
            assign: Arc::new(assign),
        });
        self
    }

    /// 声明 `Create` 阶段方法
    pub fn on_create<F>(self, priority: PriorityLevel, name: &'static str, hook: F) -> Self
    where
        F: Fn(&T) -> HookResult + Send + Sync + 'static,
    {
        self.lifecycle(Phase::Create, priority, name, hook)
    }

    /// 声明 `Startup` 阶段方法
    pub fn on_startup<F>(self, priority: PriorityLevel, name: &'static str, hook: F) -> Self
    where
        F: Fn(&T) -> HookResult + Send + Sync + 'static,
    {
        self.lifecycle(Phase::Startup, priority, name, hook)
    }

    fn lifecycle<F>(mut self, phase: Phase, priority: PriorityLevel, name: &'static str, hook: F) -> Self
    where
        F: Fn(&T) -> HookResult + Send + Sync + 'static,
    {
        let call: ErasedHook = Arc::new(move |owner: &(dyn Any + Send + Sync)| -> HookResult {
            hook(owner_of::<T>(owner)?)
        });
        self.hooks.push(LifecycleHook {
            phase,
            priority,
            name,
            call,
        });
        self
    }

    /// 声明事件处理方法
    pub fn on_event<F>(self, event: &str, name: &'static str, arity: usize, handler: F) -> Self
    where
        F: Fn(&T, &EventArgs) -> HookResult + Send + Sync + 'static,
    {
        self.on_events(&[event], name, arity, handler)
    }

    /// 声明订阅多个事件的处理方法
    pub fn on_events<F>(mut self, events: &[&str], name: &'static str, arity: usize, handler: F) -> Self
    where
        F: Fn(&T, &EventArgs) -> HookResult + Send + Sync + 'static,
    {
        let call: ErasedHandler = Arc::new(move |owner: &(dyn Any + Send + Sync), args: &EventArgs| -> HookResult {
            handler(owner_of::<T>(owner)?, args)
        });
        self.handlers.push(EventHandler {
            events: events.iter().map(|event| normalize_event_name(event)).collect(),
            name,
            arity,
            call,
        });
        self
    }

    /// 已声明的依赖字段
    pub fn dependencies(&self) -> &[DependencySlot] {
        &self.dependencies
    }
}

impl<T: Component> Default for ComponentDef<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 组件描述符
///
/// 由 [`ComponentDef`] 构建的类型擦除版本，容器只通过描述符操作组件。
#[derive(Clone)]
pub struct ComponentDescriptor {
    /// 组件类型
    pub type_info: TypeInfo,
    /// 是否可以注入到其他组件
    pub injectable: bool,
    /// 组件优先级
    pub priority: PriorityLevel,
    /// 作为首选实现绑定的能力接口
    pub bound_interface: Option<TypeInfo>,
    /// 实现的能力接口
    pub provides: Vec<InterfaceCast>,
    /// 依赖字段
    pub dependencies: Vec<DependencySlot>,
    /// 生命周期方法
    pub hooks: Vec<LifecycleHook>,
    /// 事件处理方法
    pub handlers: Vec<EventHandler>,
    factory: ErasedFactory,
}

impl ComponentDescriptor {
    /// 使用 `Default` 构造组件
    pub fn of<T: Component + Default>() -> Self {
        Self::configured::<T, _>(|def| def)
    }

    /// 先应用外部声明（例如 `#[component]` 属性），再应用组件自身的 `describe`
    pub fn configured<T, F>(tag: F) -> Self
    where
        T: Component + Default,
        F: FnOnce(ComponentDef<T>) -> ComponentDef<T>,
    {
        Self::from_def(T::describe(tag(ComponentDef::new())), || Ok(T::default()))
    }

    /// 使用可能失败的工厂构造组件
    pub fn with_factory<T, F>(factory: F) -> Self
    where
        T: Component,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self::from_def(T::describe(ComponentDef::new()), factory)
    }

    /// 由组件声明和工厂构建描述符
    pub fn from_def<T, F>(def: ComponentDef<T>, factory: F) -> Self
    where
        T: Component,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let factory: ErasedFactory = Arc::new(move || factory().map(|instance| Arc::new(instance) as Instance));
        Self {
            type_info: def.type_info,
            injectable: def.injectable,
            priority: def.priority,
            bound_interface: def.bound_interface,
            provides: def.provides,
            dependencies: def.dependencies,
            hooks: def.hooks,
            handlers: def.handlers,
            factory,
        }
    }

    /// 组件简短名称
    pub fn name(&self) -> &'static str {
        self.type_info.short_name()
    }

    /// 创建组件实例
    pub fn instantiate(&self) -> Result<Instance, BoxError> {
        (self.factory)()
    }

    /// 是否实现指定的能力接口
    pub fn provides_interface(&self, interface: TypeId) -> bool {
        self.provides.iter().any(|cast| cast.interface.id == interface)
    }

    /// 将实例转换为指定能力接口
    pub fn cast_to(&self, interface: TypeId, instance: Instance) -> Option<Instance> {
        self.provides
            .iter()
            .find(|cast| cast.interface.id == interface)
            .and_then(|cast| cast.cast(instance))
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("type_info", &self.type_info)
            .field("injectable", &self.injectable)
            .field("priority", &self.priority)
            .field("bound_interface", &self.bound_interface)
            .field("provides", &self.provides)
            .field("dependencies", &self.dependencies)
            .field("hooks", &self.hooks)
            .field("handlers", &self.handlers)
            .field("factory", &"<function>")
            .finish()
    }
}

/// 可被 `wire_objects` 注入的外部对象
pub trait WireTarget: Send + Sync {
    /// 对象类型
    fn target_type(&self) -> TypeInfo;

    /// 对象声明的依赖字段
    fn dependency_slots(&self) -> Vec<DependencySlot>;

    /// 以 `Any` 访问对象
    fn as_any(&self) -> &(dyn Any + Send + Sync);
}

impl<T: Component> WireTarget for T {
    fn target_type(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn dependency_slots(&self) -> Vec<DependencySlot> {
        T::describe(ComponentDef::new()).dependencies
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }
}
