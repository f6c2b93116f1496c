//! 容器门面
//!
//! 初始化顺序：扫描 → 实例化 → 绑定能力接口 → 注入依赖 → 注册事件 → `Create` → `Startup`。
//! 任一步骤失败时丢弃所有中间结果，容器保持未初始化状态。

use crate::catalog::CatalogLocator;
use crate::context::{ContainerContext, DispatchErrorHandler};
use crate::events::EventBus;
use crate::injector::DependencyInjector;
use crate::lifecycle::LifecycleRunner;
use crate::registry::ComponentRegistry;
use crate::resolver::InterfaceResolver;
use std::any::TypeId;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wireable_abstractions::{ComponentContainer, ComponentLocator, DependencySource, NoDependencies, ScopePath};
use wireable_common::{
    ContainerConfig, ContainerState, DispatchError, EmptyScopePolicy, EventArgs, InitResult,
    InitializationError, Instance, TypeInfo, WireError, WireTarget,
};

/// Wireable 容器
#[derive(Debug, Default)]
pub struct WireableContainer {
    config: ContainerConfig,
    context: Option<Arc<ContainerContext>>,
}

impl WireableContainer {
    /// 创建未初始化的容器
    pub fn create() -> Self {
        Self::default()
    }

    /// 使用指定配置创建未初始化的容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self { config, context: None }
    }

    /// 创建并初始化容器
    pub fn create_and_init(locator: &dyn ComponentLocator, scope: impl Into<ScopePath>) -> InitResult<Self> {
        let mut container = Self::create();
        container.init(locator, scope)?;
        Ok(container)
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 使用全局组件目录初始化
    pub fn init_from_catalog(&mut self, scope: impl Into<ScopePath>) -> InitResult<()> {
        self.init(&CatalogLocator, scope)
    }

    /// 初始化容器
    ///
    /// 已初始化时直接返回。
    pub fn init(&mut self, locator: &dyn ComponentLocator, scope: impl Into<ScopePath>) -> InitResult<()> {
        if self.context.is_some() {
            debug!("容器已初始化，忽略重复初始化");
            return Ok(());
        }

        let scope = scope.into();
        info!("开始初始化容器: 作用域 '{}', 定位器 {}", scope, locator.name());

        let descriptors = locator
            .locate(&scope)
            .map_err(|source| InitializationError::ScanFailed {
                scope: scope.to_string(),
                source,
            })?;

        if descriptors.is_empty() {
            return match self.config.empty_scope {
                EmptyScopePolicy::StayUninitialized => {
                    warn!("作用域中未发现任何组件，容器保持未初始化: '{}'", scope);
                    Ok(())
                }
                EmptyScopePolicy::Initialize => {
                    warn!("作用域中未发现任何组件: '{}'", scope);
                    self.context = Some(Arc::new(ContainerContext::default()));
                    Ok(())
                }
                EmptyScopePolicy::Fail => Err(InitializationError::EmptyScope {
                    scope: scope.to_string(),
                }),
            };
        }

        let mut registry = ComponentRegistry::new();
        for descriptor in descriptors {
            let instance = descriptor
                .instantiate()
                .map_err(|source| InitializationError::InstantiationFailed {
                    type_name: descriptor.name().to_string(),
                    source,
                })?;
            registry.register(descriptor, instance);
        }

        let resolver = InterfaceResolver::from_registry(&registry);
        let mut context = ContainerContext::new(registry, resolver);

        DependencyInjector::new(&context).inject_registry(&context.registry)?;
        context.events = EventBus::from_registry(&context.registry);
        LifecycleRunner::new(&context.registry).run()?;

        info!(
            "容器初始化完成: {} 个组件, {} 个接口绑定, {} 个事件",
            context.registry.len(),
            context.resolver.len(),
            context.events.event_count()
        );
        self.context = Some(Arc::new(context));
        Ok(())
    }

    /// 销毁所有实例，回到未初始化状态
    pub fn teardown(&mut self) {
        if let Some(context) = self.context.take() {
            info!("销毁容器: {} 个组件", context.registry.len());
        }
    }

    pub fn state(&self) -> ContainerState {
        if self.context.is_some() {
            ContainerState::Initialized
        } else {
            ContainerState::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == ContainerState::Initialized
    }

    /// 已管理的组件类型（按发现顺序）
    pub fn component_types(&self) -> Vec<TypeInfo> {
        self.context
            .as_ref()
            .map(|context| context.registry.component_types())
            .unwrap_or_default()
    }

    /// 获取可注入的组件实例
    pub fn get_instance<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.get_instance_with::<T>(false)
    }

    /// 获取组件实例，`include_non_injectable` 为 `true` 时同样返回私有组件
    pub fn get_instance_with<T: Send + Sync + 'static>(&self, include_non_injectable: bool) -> Option<Arc<T>> {
        self.instance_by_type_id(TypeId::of::<T>(), include_non_injectable)
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 获取能力接口的实现
    pub fn get_interface<I: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<I>> {
        self.get_interface_with::<I>(false)
    }

    /// 获取能力接口的实现，`include_non_injectable` 为 `true` 时同样返回私有组件
    pub fn get_interface_with<I: ?Sized + Send + Sync + 'static>(&self, include_non_injectable: bool) -> Option<Arc<I>> {
        self.interface_by_type_id(TypeId::of::<I>(), include_non_injectable)
            .and_then(|instance| instance.downcast_ref::<Arc<I>>().cloned())
    }

    /// 向容器外部的对象注入依赖
    ///
    /// 容器未初始化时所有依赖字段被置为缺省。任一对象失败时中止剩余对象。
    pub fn wire_objects(&self, targets: &[&dyn WireTarget]) -> Result<(), WireError> {
        let source: &dyn DependencySource = match &self.context {
            Some(context) => &**context,
            None => &NoDependencies,
        };
        DependencyInjector::new(source).inject_targets(targets)
    }

    /// 同步触发事件，容器未初始化时直接返回
    pub fn fire_event(&self, event: &str, args: EventArgs) -> Result<(), DispatchError> {
        match &self.context {
            Some(context) => context.dispatch(event, &args),
            None => {
                debug!("容器未初始化，忽略事件: {}", event);
                Ok(())
            }
        }
    }

    /// 异步触发事件，失败时记录错误日志
    pub fn fire_event_async(&self, event: &str, args: EventArgs) {
        self.spawn_dispatch(event, args, None);
    }

    /// 异步触发事件，失败时调用 `on_error`
    pub fn fire_event_async_with<F>(&self, event: &str, on_error: F, args: EventArgs)
    where
        F: FnOnce(DispatchError) + Send + 'static,
    {
        self.spawn_dispatch(event, args, Some(Box::new(on_error)));
    }

    fn spawn_dispatch(&self, event: &str, args: EventArgs, on_error: Option<DispatchErrorHandler>) {
        match &self.context {
            Some(context) => ContainerContext::dispatch_async(
                Arc::clone(context),
                event.to_string(),
                args,
                on_error,
                self.config.async_dispatch,
            ),
            None => debug!("容器未初始化，忽略异步事件: {}", event),
        }
    }
}

impl ComponentContainer for WireableContainer {
    fn state(&self) -> ContainerState {
        WireableContainer::state(self)
    }

    fn component_types(&self) -> Vec<TypeInfo> {
        WireableContainer::component_types(self)
    }

    fn instance_by_type_id(&self, type_id: TypeId, include_non_injectable: bool) -> Option<Instance> {
        self.context
            .as_ref()
            .and_then(|context| context.lookup(type_id, include_non_injectable))
    }

    fn interface_by_type_id(&self, interface: TypeId, include_non_injectable: bool) -> Option<Instance> {
        self.context
            .as_ref()
            .and_then(|context| context.resolve_interface(interface, include_non_injectable))
    }

    fn wire_objects(&self, targets: &[&dyn WireTarget]) -> Result<(), WireError> {
        WireableContainer::wire_objects(self, targets)
    }

    fn fire_event(&self, event: &str, args: EventArgs) -> Result<(), DispatchError> {
        WireableContainer::fire_event(self, event, args)
    }

    fn fire_event_async(&self, event: &str, args: EventArgs) {
        WireableContainer::fire_event_async(self, event, args)
    }
}
