use crate::scheduler::{run_task, Scheduler, Task};

/// Runs every task inline on the submitting thread.
///
/// `subscribe_on(ImmediateScheduler)` behaves like a plain `subscribe`,
/// which makes it handy for deterministic tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
  fn schedule(&self, task: Task) { run_task("immediate", task) }
}
