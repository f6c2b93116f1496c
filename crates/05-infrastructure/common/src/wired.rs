//! 依赖字段
//!
//! 组件以 `Wired<T>` 声明依赖字段。容器在注入阶段直接写入共享实例中的字段，
//! 因此字段使用内部可变性。

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// 可被容器注入的依赖字段
///
/// `T` 可以是具体组件类型，也可以是 `dyn Trait` 形式的能力接口。
/// 未找到依赖时字段保持缺省（`None`），不视为错误。
pub struct Wired<T: ?Sized> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> Wired<T> {
    /// 创建一个空的依赖字段
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 获取已注入的依赖
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().clone()
    }

    /// 是否已注入
    pub fn is_wired(&self) -> bool {
        self.slot.read().is_some()
    }

    /// 写入依赖（`None` 表示清空）
    pub fn set(&self, value: Option<Arc<T>>) {
        *self.slot.write() = value;
    }
}

impl<T: ?Sized> Default for Wired<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Wired<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wired")
            .field("type", &std::any::type_name::<T>())
            .field("wired", &self.is_wired())
            .finish()
    }
}
