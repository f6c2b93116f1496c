//! 容器初始化、注入与生命周期的集成测试

use std::sync::Arc;
use wireable::{
    ComponentDescriptor, ContainerConfig, ContainerState, EmptyScopePolicy, InitializationError, ManualLocator,
    Phase, PriorityLevel, WireableContainer,
};
use wireable_integration_tests::{
    shop_locator, AuditLog, EmailNotifier, Journal, Notifier, OrderService, PreferredEmail, PreferredSms, SmsNotifier,
};

#[test]
fn test_init_twice_keeps_registry() {
    let mut container = WireableContainer::create();
    container.init(&shop_locator(), "shop").unwrap();

    let types = container.component_types();
    let journal = container.get_instance::<Journal>().unwrap();

    // 第二次初始化不会重新扫描或重新执行生命周期方法
    container.init(&shop_locator(), "shop").unwrap();

    assert_eq!(container.component_types(), types);
    assert!(Arc::ptr_eq(&journal, &container.get_instance::<Journal>().unwrap()));
    assert_eq!(journal.names().iter().filter(|name| *name == "orders.connect").count(), 1);
}

#[test]
fn test_create_phase_waves() {
    let container = WireableContainer::create_and_init(&shop_locator(), "shop").unwrap();
    let journal = container.get_instance::<Journal>().unwrap();

    assert_eq!(
        journal.names(),
        vec!["audit.open", "orders.connect", "orders.load", "orders.warm", "orders.serve", "audit.seal"]
    );

    let high = journal.ordinal_of("orders.connect").unwrap().max(journal.ordinal_of("audit.open").unwrap());
    let normal = journal.ordinal_of("orders.load").unwrap();
    let low = journal.ordinal_of("orders.warm").unwrap();
    assert!(high < normal && normal < low);
}

#[test]
fn test_private_component_is_constructed_but_not_injected() {
    let container = WireableContainer::create_and_init(&shop_locator(), "shop").unwrap();
    let service = container.get_instance::<OrderService>().unwrap();

    assert!(!service.audit.is_wired());
    assert!(container.get_instance::<AuditLog>().is_none());
    assert!(container.get_instance_with::<AuditLog>(true).is_some());

    // 私有组件的生命周期方法同样被执行
    let journal = service.journal.get().unwrap();
    assert!(journal.ordinal_of("audit.open").is_some());
}

#[test]
fn test_missing_dependency_is_silent() {
    let locator = ManualLocator::new().register::<OrderService>("solo");
    let error = WireableContainer::create_and_init(&locator, "solo").unwrap_err();

    // 依赖缺失本身不是错误，失败来自生命周期方法中对 journal 的使用
    match error {
        InitializationError::LifecycleFailed { type_name, hook, phase, priority, .. } => {
            assert_eq!(type_name, "OrderService");
            assert_eq!(hook, "connect");
            assert_eq!(phase, Phase::Create);
            assert_eq!(priority, PriorityLevel::High);
        }
        other => panic!("unexpected error: {other}"),
    }

    let locator = ManualLocator::new().register::<Journal>("solo").register::<OrderService>("solo");
    let container = WireableContainer::create_and_init(&locator, "solo").unwrap();
    let service = container.get_instance::<OrderService>().unwrap();
    assert!(service.journal.is_wired());
    assert!(!service.notifier.is_wired());
}

#[test]
fn test_first_implementer_wins_without_binding() {
    let container = WireableContainer::create_and_init(&shop_locator(), "shop").unwrap();
    assert_eq!(container.get_interface::<dyn Notifier>().unwrap().channel(), "email");

    let reversed = ManualLocator::new()
        .register::<SmsNotifier>("shop")
        .register::<EmailNotifier>("shop");
    let container = WireableContainer::create_and_init(&reversed, "shop").unwrap();
    assert_eq!(container.get_interface::<dyn Notifier>().unwrap().channel(), "sms");
}

#[test]
fn test_explicit_binding_beats_scan_order() {
    let locator = ManualLocator::new()
        .register::<EmailNotifier>("shop")
        .register::<PreferredSms>("shop")
        .register::<Journal>("shop")
        .register::<OrderService>("shop");
    let container = WireableContainer::create_and_init(&locator, "shop").unwrap();

    let service = container.get_instance::<OrderService>().unwrap();
    assert_eq!(service.notifier.get().unwrap().channel(), "preferred-sms");
}

#[test]
fn test_last_binding_wins_in_both_orders() {
    let email_last = ManualLocator::new()
        .register::<PreferredSms>("shop")
        .register::<PreferredEmail>("shop");
    let container = WireableContainer::create_and_init(&email_last, "shop").unwrap();
    assert_eq!(container.get_interface::<dyn Notifier>().unwrap().channel(), "preferred-email");

    let sms_last = ManualLocator::new()
        .register::<PreferredEmail>("shop")
        .register::<PreferredSms>("shop");
    let container = WireableContainer::create_and_init(&sms_last, "shop").unwrap();
    assert_eq!(container.get_interface::<dyn Notifier>().unwrap().channel(), "preferred-sms");
}

#[test]
fn test_failed_init_discards_partial_work() {
    let broken = ManualLocator::new()
        .register::<Journal>("shop")
        .register_with("shop", || ComponentDescriptor::with_factory::<EmailNotifier, _>(|| Err("smtp offline".into())));

    let mut container = WireableContainer::create();
    let error = container.init(&broken, "shop").unwrap_err();

    assert!(matches!(error, InitializationError::InstantiationFailed { .. }));
    assert_eq!(container.state(), ContainerState::Uninitialized);
    assert!(container.component_types().is_empty());

    container.init(&shop_locator(), "shop").unwrap();
    assert!(container.is_initialized());
}

#[test]
fn test_scope_filters_nested_components() {
    let container = WireableContainer::create_and_init(&shop_locator(), "shop::notify").unwrap();
    let names: Vec<_> = container.component_types().iter().map(|info| info.short_name()).collect();

    assert_eq!(names, vec!["EmailNotifier", "SmsNotifier"]);
}

#[test]
fn test_empty_scope_policies() {
    let mut container = WireableContainer::create();
    container.init(&shop_locator(), "warehouse").unwrap();
    assert!(!container.is_initialized());

    let strict = ContainerConfig::from_toml_str("empty_scope = \"fail\"").unwrap();
    let mut container = WireableContainer::with_config(strict);
    assert!(matches!(
        container.init(&shop_locator(), "warehouse"),
        Err(InitializationError::EmptyScope { .. })
    ));

    let lenient = ContainerConfig::default().with_empty_scope(EmptyScopePolicy::Initialize);
    let mut container = WireableContainer::with_config(lenient);
    container.init(&shop_locator(), "warehouse").unwrap();
    assert!(container.is_initialized());
}

#[test]
fn test_wire_external_objects() {
    let mut container = WireableContainer::create_and_init(&shop_locator(), "shop").unwrap();

    let first = OrderService::default();
    let second = OrderService::default();
    container.wire_objects(&[&first, &second]).unwrap();

    assert!(first.journal.is_wired());
    assert_eq!(second.notifier.get().unwrap().channel(), "email");
    assert!(!second.audit.is_wired());

    container.teardown();
    container.wire_objects(&[&first]).unwrap();
    assert!(!first.journal.is_wired());
}
