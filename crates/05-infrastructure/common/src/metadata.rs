//! 元数据定义
//!
//! 提供组件和能力接口的类型信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称（包含模块路径）
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息，`dyn Trait` 同样适用
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        let name = self.name.trim_start_matches("dyn ");
        // 去掉 `+ Send + Sync` 之类的附加约束
        let name = name.split(" + ").next().unwrap_or(name);
        let base = name.split('<').next().unwrap_or(name);
        match base.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
