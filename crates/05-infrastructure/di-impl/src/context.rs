//! 容器上下文
//!
//! 初始化完成后冻结的注册表、接口绑定和事件订阅。异步事件分发时共享给后台任务。

use crate::events::EventBus;
use crate::registry::ComponentRegistry;
use crate::resolver::InterfaceResolver;
use std::any::TypeId;
use std::sync::Arc;
use tracing::{debug, error};
use wireable_abstractions::DependencySource;
use wireable_common::{AsyncDispatchMode, DispatchError, EventArgs, Instance};

/// 异步分发失败时的回调
pub type DispatchErrorHandler = Box<dyn FnOnce(DispatchError) + Send + 'static>;

/// 容器上下文
#[derive(Debug, Default)]
pub struct ContainerContext {
    pub(crate) registry: ComponentRegistry,
    pub(crate) resolver: InterfaceResolver,
    pub(crate) events: EventBus,
}

impl ContainerContext {
    pub fn new(registry: ComponentRegistry, resolver: InterfaceResolver) -> Self {
        Self {
            registry,
            resolver,
            events: EventBus::new(),
        }
    }

    /// 同步分发事件
    pub fn dispatch(&self, event: &str, args: &EventArgs) -> Result<(), DispatchError> {
        self.events.dispatch(&self.registry, event, args)
    }

    /// 在独立任务中分发事件，立即返回
    ///
    /// 失败时交给 `on_error` 处理，未提供回调时记录错误日志。不返回任务句柄，无法取消。
    /// `Auto` 模式下受 Tokio 阻塞线程池的线程数上限约束，见 [`AsyncDispatchMode::Auto`]。
    pub fn dispatch_async(
        context: Arc<Self>,
        event: String,
        args: EventArgs,
        on_error: Option<DispatchErrorHandler>,
        mode: AsyncDispatchMode,
    ) {
        let task = move || {
            if let Err(failure) = context.dispatch(&event, &args) {
                match on_error {
                    Some(on_error) => on_error(failure),
                    None => error!("异步事件处理失败: {}", failure),
                }
            }
        };

        if mode == AsyncDispatchMode::Auto {
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                debug!("在 Tokio 阻塞线程池中分发事件");
                handle.spawn_blocking(task);
                return;
            }
        }

        let spawned = std::thread::Builder::new()
            .name("wireable-event".to_string())
            .spawn(task);
        if let Err(e) = spawned {
            error!("无法创建事件分发线程: {}", e);
        }
    }
}

impl DependencySource for ContainerContext {
    fn lookup(&self, type_id: TypeId, include_non_injectable: bool) -> Option<Instance> {
        self.registry.instance(type_id, include_non_injectable)
    }

    fn resolve_interface(&self, interface: TypeId, include_non_injectable: bool) -> Option<Instance> {
        self.resolver.resolve(&self.registry, interface, include_non_injectable)
    }
}
