//! 事件总线
//!
//! 事件名称大小写不敏感。处理方法按注册顺序同步调用，任一处理方法失败时立即停止。

use crate::registry::ComponentRegistry;
use std::collections::HashMap;
use tracing::debug;
use wireable_common::{normalize_event_name, ComponentDescriptor, DispatchError, EventArgs, EventHandler, TypeInfo};

/// 事件订阅
#[derive(Debug, Clone)]
pub struct Subscription {
    /// 处理方法所属组件
    pub owner: TypeInfo,
    pub handler: EventHandler,
}

/// 事件总线
#[derive(Debug, Default)]
pub struct EventBus {
    subscriptions: HashMap<String, Vec<Subscription>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按发现顺序注册注册表中所有组件的事件处理方法
    pub fn from_registry(registry: &ComponentRegistry) -> Self {
        let mut bus = Self::new();
        for entry in registry.entries() {
            bus.register_component(&entry.descriptor);
        }
        bus
    }

    /// 注册组件声明的全部事件处理方法
    pub fn register_component(&mut self, descriptor: &ComponentDescriptor) {
        for handler in &descriptor.handlers {
            for event in &handler.events {
                self.register(event, descriptor.type_info, handler.clone());
            }
        }
    }

    /// 注册事件处理方法
    pub fn register(&mut self, event: &str, owner: TypeInfo, handler: EventHandler) {
        let event = normalize_event_name(event);
        debug!("注册事件处理方法: {} -> {}::{}", event, owner.short_name(), handler.name);
        self.subscriptions
            .entry(event)
            .or_default()
            .push(Subscription { owner, handler });
    }

    /// 获取事件的订阅列表
    pub fn subscriptions(&self, event: &str) -> &[Subscription] {
        self.subscriptions
            .get(&normalize_event_name(event))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 已注册的事件数量
    pub fn event_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// 同步分发事件
    ///
    /// 参数按处理方法声明的个数截断或补齐。处理方法所属实例通过不受可注入性限制的查找获得。
    /// 未注册的事件直接返回。
    pub fn dispatch(&self, registry: &ComponentRegistry, event: &str, args: &EventArgs) -> Result<(), DispatchError> {
        let subscriptions = self.subscriptions(event);
        if subscriptions.is_empty() {
            debug!("事件没有处理方法: {}", event);
            return Ok(());
        }

        for subscription in subscriptions {
            let Subscription { owner, handler } = subscription;
            debug!("调用事件处理方法: {} -> {}::{}", event, owner.short_name(), handler.name);

            let failed = |source| DispatchError {
                event: event.to_string(),
                type_name: owner.short_name().to_string(),
                handler: handler.name,
                source,
            };

            let entry = registry
                .lookup(owner.id)
                .ok_or_else(|| failed(format!("组件实例不存在: {}", owner).into()))?;

            handler
                .invoke(entry.instance.as_ref(), &args.fitted(handler.arity))
                .map_err(failed)?;
        }
        Ok(())
    }
}
