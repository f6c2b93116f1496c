//! 事件参数定义
//!
//! 事件以位置参数的形式携带任意值，缺省位置以 `None` 表示。

use crate::errors::EventArgError;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 单个事件参数值
pub type EventValue = Arc<dyn Any + Send + Sync>;

/// 规范化事件名称（大小写不敏感）
pub fn normalize_event_name(name: &str) -> String {
    name.to_lowercase()
}

/// 事件位置参数列表
#[derive(Clone, Default)]
pub struct EventArgs {
    values: Vec<Option<EventValue>>,
}

impl EventArgs {
    /// 创建空参数列表
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// 追加一个参数
    pub fn with<V: Any + Send + Sync>(mut self, value: V) -> Self {
        self.push(value);
        self
    }

    /// 追加一个缺省参数
    pub fn with_absent(mut self) -> Self {
        self.values.push(None);
        self
    }

    /// 追加一个参数
    pub fn push<V: Any + Send + Sync>(&mut self, value: V) {
        self.values.push(Some(Arc::new(value)));
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 获取指定位置的原始参数值
    pub fn value(&self, index: usize) -> Option<&EventValue> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// 指定位置是否缺省（越界同样视为缺省）
    pub fn is_absent(&self, index: usize) -> bool {
        self.value(index).is_none()
    }

    /// 按类型获取指定位置的参数，缺省或类型不符时返回 `None`
    pub fn get<V: Any>(&self, index: usize) -> Option<&V> {
        self.value(index).and_then(|value| value.downcast_ref::<V>())
    }

    /// 按类型获取指定位置的参数，缺省或类型不符时返回错误
    pub fn require<V: Any>(&self, index: usize) -> Result<&V, EventArgError> {
        let value = self.value(index).ok_or(EventArgError::Missing { index })?;
        value.downcast_ref::<V>().ok_or(EventArgError::TypeMismatch {
            index,
            expected: std::any::type_name::<V>(),
        })
    }

    /// 按处理方法声明的参数个数截断或补齐
    ///
    /// 多余的参数被丢弃，不足的位置以缺省值补齐。
    pub fn fitted(&self, arity: usize) -> EventArgs {
        let mut values: Vec<Option<EventValue>> = self.values.iter().take(arity).cloned().collect();
        values.resize(arity, None);
        EventArgs { values }
    }
}

impl fmt::Debug for EventArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.values.iter().map(|v| if v.is_some() { "<value>" } else { "<absent>" }))
            .finish()
    }
}

impl From<Vec<Option<EventValue>>> for EventArgs {
    fn from(values: Vec<Option<EventValue>>) -> Self {
        Self { values }
    }
}

/// 构建事件参数列表
///
/// ```rust
/// use wireable_common::event_args;
///
/// let args = event_args!["order-42", 3_u32];
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get::<u32>(1), Some(&3));
/// ```
#[macro_export]
macro_rules! event_args {
    () => {
        $crate::EventArgs::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::EventArgs::new();
        $(args.push($value);)+
        args
    }};
}
