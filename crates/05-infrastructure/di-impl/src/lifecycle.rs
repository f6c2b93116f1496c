//! 生命周期执行器
//!
//! 每个阶段依次执行 `High`、`Normal`、`Low` 三轮。一轮中的所有方法执行完成后才开始下一轮，
//! 任一方法失败时立即中止。

use crate::registry::ComponentRegistry;
use tracing::{debug, info};
use wireable_common::{InitResult, InitializationError, Phase, PriorityLevel};

/// 生命周期执行器
pub struct LifecycleRunner<'r> {
    registry: &'r ComponentRegistry,
}

impl<'r> LifecycleRunner<'r> {
    pub fn new(registry: &'r ComponentRegistry) -> Self {
        Self { registry }
    }

    /// 依次执行 `Create` 与 `Startup` 阶段
    pub fn run(&self) -> InitResult<()> {
        self.run_phase(Phase::Create)?;
        self.run_phase(Phase::Startup)
    }

    /// 执行单个阶段
    pub fn run_phase(&self, phase: Phase) -> InitResult<()> {
        info!("执行生命周期阶段: {}", phase);
        let components = self.registry.by_priority();

        for priority in PriorityLevel::ALL {
            for entry in &components {
                let hooks = entry
                    .descriptor
                    .hooks
                    .iter()
                    .filter(|hook| hook.phase == phase && hook.priority == priority);

                for hook in hooks {
                    debug!("执行生命周期方法: {}::{} ({}/{})", entry.name(), hook.name, phase, priority);
                    hook.invoke(entry.instance.as_ref())
                        .map_err(|source| InitializationError::LifecycleFailed {
                            type_name: entry.name().to_string(),
                            hook: hook.name,
                            phase,
                            priority,
                            source,
                        })?;
                }
            }
        }
        Ok(())
    }
}
