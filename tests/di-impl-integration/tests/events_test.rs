//! 事件分发的集成测试

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::{Duration, Instant};
use tokio_test::assert_ok;
use wireable::{
    event_args, AsyncDispatchMode, Component, ComponentDef, ComponentDescriptor, ContainerConfig, EventArgs,
    ManualLocator, WireableContainer,
};
use wireable_integration_tests::{shop_locator, Journal, OrderService};

fn shop() -> WireableContainer {
    WireableContainer::create_and_init(&shop_locator(), "shop").unwrap()
}

#[test]
fn test_zero_arity_handler_ignores_extra_arguments() {
    let container = shop();

    assert_ok!(container.fire_event("PING", event_args!["a", 2_u32]));

    let journal = container.get_instance::<Journal>().unwrap();
    assert!(journal.ordinal_of("ping:0").is_some());
}

#[test]
fn test_missing_arguments_are_padded() {
    let container = shop();

    assert_ok!(container.fire_event("order.placed", event_args!["A-1"]));
    assert_ok!(container.fire_event("ORDER.REPLAYED", event_args!["A-2", 3_u32, "extra"]));

    let service = container.get_instance::<OrderService>().unwrap();
    assert_eq!(
        *service.placed.lock(),
        vec![("A-1".to_string(), None), ("A-2".to_string(), Some(3))]
    );
}

#[test]
fn test_dispatch_stops_at_failing_handler() {
    let container = shop();

    let error = container.fire_event("chain", EventArgs::new()).unwrap_err();
    assert_eq!(error.handler, "stage_two");
    assert_eq!(error.type_name, "Pipeline");
    assert_eq!(error.event, "chain");
    assert!(error.to_string().contains("stage two rejected"));

    let journal = container.get_instance::<Journal>().unwrap();
    assert!(journal.ordinal_of("stage_one").is_some());
    assert!(journal.ordinal_of("stage_three").is_none());
}

#[test]
fn test_unregistered_event_is_noop() {
    let container = shop();
    let journal = container.get_instance::<Journal>().unwrap();
    let before = journal.names();

    assert_ok!(container.fire_event("order.cancelled", event_args!["A-1"]));
    assert_eq!(journal.names(), before);
}

#[test]
fn test_events_on_uninitialized_container_are_ignored() {
    let container = WireableContainer::create();

    assert_ok!(container.fire_event("chain", EventArgs::new()));
    container.fire_event_async("chain", EventArgs::new());
}

#[tokio::test]
async fn test_async_failure_reaches_callback() {
    let container = shop();
    let (sender, receiver) = tokio::sync::oneshot::channel();

    container.fire_event_async_with(
        "chain",
        move |failure| {
            let _ = sender.send((failure.handler, failure.event));
        },
        EventArgs::new(),
    );

    let (handler, event) = tokio::time::timeout(Duration::from_secs(5), receiver)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(handler, "stage_two");
    assert_eq!(event, "chain");
}

#[tokio::test]
async fn test_async_failure_without_callback_does_not_crash() {
    let container = shop();

    container.fire_event_async("chain", EventArgs::new());
    container.fire_event_async("order.placed", event_args!["A-9"]);

    let service = container.get_instance::<OrderService>().unwrap();
    for _ in 0..200 {
        if !service.placed.lock().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(*service.placed.lock(), vec![("A-9".to_string(), None)]);
}

#[test]
fn test_async_dispatch_without_runtime_uses_thread() {
    let config = ContainerConfig::from_json_str(r#"{ "async_dispatch": "thread" }"#).unwrap();
    assert_eq!(config.async_dispatch, AsyncDispatchMode::Thread);

    let mut container = WireableContainer::with_config(config);
    container.init(&shop_locator(), "shop").unwrap();

    let (sender, receiver) = std::sync::mpsc::channel();
    container.fire_event_async_with(
        "chain",
        move |failure| {
            let _ = sender.send(failure.handler);
        },
        EventArgs::new(),
    );

    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).unwrap(), "stage_two");
}

/// 私有组件，只能通过事件触达
#[derive(Default)]
struct Ledger {
    hits: AtomicUsize,
}

impl Component for Ledger {
    fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
        def.private().on_event("poke", "count", 0, |ledger, _| {
            ledger.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

#[test]
fn test_private_component_receives_its_events() {
    let locator = ManualLocator::new().register::<Ledger>("vault");
    let container = WireableContainer::create_and_init(&locator, "vault").unwrap();
    assert!(container.get_instance::<Ledger>().is_none());

    assert_ok!(container.fire_event("POKE", EventArgs::new()));

    let ledger = container.get_instance_with::<Ledger>(true).unwrap();
    assert_eq!(ledger.hits.load(Ordering::SeqCst), 1);
}

/// 处理方法在屏障处等待，直到调用方放行
struct Gate {
    barrier: Arc<Barrier>,
    caller_returned: Arc<AtomicBool>,
    observed: Mutex<Option<bool>>,
}

impl Component for Gate {
    fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
        def.on_event("hold", "hold", 0, |gate, _| {
            gate.barrier.wait();
            *gate.observed.lock() = Some(gate.caller_returned.load(Ordering::SeqCst));
            Ok(())
        })
    }
}

fn assert_async_dispatch_returns_before_handler(mode: AsyncDispatchMode) {
    let barrier = Arc::new(Barrier::new(2));
    let caller_returned = Arc::new(AtomicBool::new(false));

    let (gate_barrier, gate_returned) = (barrier.clone(), caller_returned.clone());
    let locator = ManualLocator::new().register_with("gate", move || {
        let (barrier, caller_returned) = (gate_barrier.clone(), gate_returned.clone());
        ComponentDescriptor::with_factory::<Gate, _>(move || {
            Ok(Gate {
                barrier: barrier.clone(),
                caller_returned: caller_returned.clone(),
                observed: Mutex::new(None),
            })
        })
    });

    let mut container = WireableContainer::with_config(ContainerConfig::default().with_async_dispatch(mode));
    container.init(&locator, "gate").unwrap();

    // 同步执行的实现会在这里永久阻塞
    container.fire_event_async("hold", EventArgs::new());
    caller_returned.store(true, Ordering::SeqCst);
    barrier.wait();

    let gate = container.get_instance::<Gate>().unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while gate.observed.lock().is_none() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(*gate.observed.lock(), Some(true));
}

#[test]
fn test_async_dispatch_returns_immediately_on_thread() {
    assert_async_dispatch_returns_before_handler(AsyncDispatchMode::Thread);
}

#[test]
fn test_async_dispatch_returns_immediately_on_runtime() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let _guard = runtime.enter();
    assert_async_dispatch_returns_before_handler(AsyncDispatchMode::Auto);
}
