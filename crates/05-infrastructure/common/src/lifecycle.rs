//! 组件生命周期定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 生命周期方法的优先级
///
/// 声明顺序即执行顺序：`High` 最先，`Low` 最后。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    #[default]
    Normal,
    Low,
}

impl PriorityLevel {
    /// 按执行顺序排列的全部优先级
    pub const ALL: [PriorityLevel; 3] = [PriorityLevel::High, PriorityLevel::Normal, PriorityLevel::Low];
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::High => write!(f, "HIGH"),
            PriorityLevel::Normal => write!(f, "NORMAL"),
            PriorityLevel::Low => write!(f, "LOW"),
        }
    }
}

/// 生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// 所有组件实例化并注入完成后执行
    Create,
    /// 所有 `Create` 方法执行完成后执行
    Startup,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Create => write!(f, "CREATE"),
            Phase::Startup => write!(f, "STARTUP"),
        }
    }
}

/// 容器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerState {
    /// 未初始化
    #[default]
    Uninitialized,
    /// 已初始化
    Initialized,
}
