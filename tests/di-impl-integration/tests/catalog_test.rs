//! `#[component]` 自动注册与目录定位器的集成测试

use wireable::{
    catalog, component, Component, ComponentDef, ComponentLocator, HookResult, PriorityLevel, ScopePath,
    WireableContainer, Wired,
};

pub trait Greeter: Send + Sync {
    fn greet(&self) -> &'static str;
}

mod greeting {
    use super::*;

    #[component(implements = "dyn Greeter")]
    #[derive(Default, Component)]
    pub struct Casual;

    impl Greeter for Casual {
        fn greet(&self) -> &'static str {
            "hi"
        }
    }

    #[component(priority = "high", primary_for = "dyn Greeter")]
    #[derive(Default, Component)]
    pub struct Formal;

    impl Greeter for Formal {
        fn greet(&self) -> &'static str {
            "good day"
        }
    }

    #[component(private)]
    #[derive(Default, Component)]
    pub struct Hidden;
}

mod front_desk {
    use super::*;
    use parking_lot::Mutex;

    #[component(priority = "low")]
    #[derive(Default)]
    pub struct Receptionist {
        pub greeter: Wired<dyn Greeter>,
        pub hidden: Wired<greeting::Hidden>,
        pub log: Mutex<Vec<String>>,
    }

    impl Receptionist {
        fn welcome(&self) -> HookResult {
            let greeter = self.greeter.get().ok_or("greeter 未注入")?;
            self.log.lock().push(greeter.greet().to_string());
            Ok(())
        }
    }

    impl Component for Receptionist {
        fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
            def.wired_interface("greeter", |r| &r.greeter)
                .wired("hidden", |r| &r.hidden)
                .on_startup(PriorityLevel::Normal, "welcome", Self::welcome)
                .on_event("visitor", "welcome", 0, |r, _| r.welcome())
        }
    }
}

#[component(scope = "catalog_test.relocated")]
#[derive(Default, Component)]
pub struct Relocated;

#[test]
fn test_catalog_entries_follow_source_order() {
    let scope = ScopePath::new(concat!(module_path!(), "::greeting"));
    let names: Vec<_> = catalog::CatalogLocator
        .locate(&scope)
        .unwrap()
        .iter()
        .map(|descriptor| descriptor.name())
        .collect();

    assert_eq!(names, vec!["Casual", "Formal", "Hidden"]);
}

#[test]
fn test_attribute_arguments_become_declarations() {
    let scope = ScopePath::new(concat!(module_path!(), "::greeting"));
    let descriptors = catalog::CatalogLocator.locate(&scope).unwrap();

    let formal = &descriptors[1];
    assert_eq!(formal.priority, PriorityLevel::High);
    assert!(formal.bound_interface.is_some());
    assert!(!descriptors[2].injectable);
    assert!(descriptors[0].bound_interface.is_none());
}

#[test]
fn test_container_from_catalog() {
    let mut container = WireableContainer::create();
    container.init_from_catalog(module_path!()).unwrap();

    let receptionist = container.get_instance::<front_desk::Receptionist>().unwrap();
    assert_eq!(*receptionist.log.lock(), vec!["good day".to_string()]);
    assert!(!receptionist.hidden.is_wired());

    container.fire_event("Visitor", Default::default()).unwrap();
    assert_eq!(receptionist.log.lock().len(), 2);
}

#[test]
fn test_scope_override() {
    let relocated = catalog::CatalogLocator
        .locate(&ScopePath::new("catalog_test::relocated"))
        .unwrap();
    assert_eq!(relocated.len(), 1);
    assert_eq!(relocated[0].name(), "Relocated");

    let container = WireableContainer::create_and_init(&catalog::CatalogLocator, "catalog_test::greeting").unwrap();
    assert!(container.get_instance::<Relocated>().is_none());
}
