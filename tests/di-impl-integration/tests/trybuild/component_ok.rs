use wireable::{component, Component, ScopePath, WireableContainer};

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

#[component(priority = "high", primary_for = "dyn Clock")]
#[derive(Default, Component)]
struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        42
    }
}

// 仅大小写不同的组件名生成各自的注册函数
#[component]
#[derive(Default, Component)]
struct Gauge;

#[component]
#[derive(Default, Component)]
struct GAUGE;

fn main() {
    let container = WireableContainer::create_and_init(&wireable::CatalogLocator, ScopePath::new(module_path!()))
        .expect("容器初始化失败");
    let clock = container.get_interface::<dyn Clock>().expect("未找到 Clock");
    assert_eq!(clock.now(), 42);
    assert!(container.get_instance::<Gauge>().is_some());
    assert!(container.get_instance::<GAUGE>().is_some());
}
