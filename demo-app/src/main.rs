//! # 示例应用程序
//!
//! 演示如何使用 Wireable 容器：组件自动注册、依赖注入、生命周期与事件分发

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wireable::{
    component, event_args, Component, ComponentDef, ContainerConfig, EventArgs, HookResult, PriorityLevel,
    WireableContainer, Wired,
};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "wireable-demo")]
#[command(about = "Wireable 容器示例应用")]
struct Args {
    /// 容器配置文件路径（TOML 或 JSON）
    #[arg(short, long)]
    config: Option<String>,

    /// 扫描作用域，默认扫描整个应用
    #[arg(long, default_value = "wireable_demo")]
    scope: String,

    /// 下单的订单号
    #[arg(long, default_value = "order-1")]
    order: String,

    /// 下单数量
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// 日志级别（未设置 RUST_LOG 时生效）
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("启动 Wireable 示例应用");

    let config = load_config(args.config.as_deref())?;
    let mut container = WireableContainer::with_config(config);
    info!("容器配置: {:?}", container.config());
    container
        .init_from_catalog(args.scope.as_str())
        .context("容器初始化失败")?;

    if !container.is_initialized() {
        info!("作用域 '{}' 中没有组件", args.scope);
        return Ok(());
    }

    for type_info in container.component_types() {
        info!("已管理组件: {}", type_info.short_name());
    }

    // 同步事件
    container
        .fire_event("order.placed", event_args![args.order.clone(), args.quantity])
        .context("订单事件处理失败")?;

    // 异步事件：处理失败时交给回调
    container.fire_event_async_with(
        "order.placed",
        |failure| error!("异步订单事件处理失败: {}", failure),
        EventArgs::new(),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;

    if let Some(orders) = container.get_instance::<OrderBook>() {
        info!("订单簿: {:?}", orders.orders.lock());
    }

    container.teardown();
    info!("应用已关闭");
    Ok(())
}

/// 加载容器配置
fn load_config(path: Option<&str>) -> anyhow::Result<ContainerConfig> {
    let Some(path) = path else {
        return Ok(ContainerConfig::default());
    };

    let text = std::fs::read_to_string(path).with_context(|| format!("无法读取配置文件: {}", path))?;
    let config = if path.ends_with(".json") {
        ContainerConfig::from_json_str(&text)?
    } else {
        ContainerConfig::from_toml_str(&text)?
    };
    info!("已加载容器配置: {}", path);
    Ok(config)
}

/// 通知渠道
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// 控制台通知
#[component(primary_for = "dyn Notifier")]
#[derive(Default, Component)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        info!("通知: {}", message);
    }
}

/// 订单簿
#[component(priority = "high")]
#[derive(Default)]
pub struct OrderBook {
    orders: Mutex<Vec<(String, u32)>>,
}

impl OrderBook {
    fn open(&self) -> HookResult {
        info!("订单簿已打开");
        Ok(())
    }

    fn record(&self, args: &EventArgs) -> HookResult {
        let id = args.require::<String>(0)?;
        let quantity = args.get::<u32>(1).copied().unwrap_or(1);
        self.orders.lock().push((id.clone(), quantity));
        Ok(())
    }
}

impl Component for OrderBook {
    fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
        def.on_create(PriorityLevel::High, "open", Self::open)
            .on_event("order.placed", "record", 2, Self::record)
    }
}

/// 订单服务
#[component]
#[derive(Default)]
pub struct OrderService {
    book: Wired<OrderBook>,
    notifier: Wired<dyn Notifier>,
}

impl OrderService {
    fn ready(&self) -> HookResult {
        let book = self.book.get().ok_or("订单簿未注入")?;
        info!("订单服务就绪，当前订单数: {}", book.orders.lock().len());
        Ok(())
    }

    fn confirm(&self, args: &EventArgs) -> HookResult {
        if let (Some(notifier), Some(id)) = (self.notifier.get(), args.get::<String>(0)) {
            notifier.notify(&format!("订单 {} 已确认", id));
        }
        Ok(())
    }
}

impl Component for OrderService {
    fn describe(def: ComponentDef<Self>) -> ComponentDef<Self> {
        def.wired("book", |s| &s.book)
            .wired_interface("notifier", |s| &s.notifier)
            .on_startup(PriorityLevel::Normal, "ready", Self::ready)
            .on_event("order.placed", "confirm", 1, Self::confirm)
    }
}
