use tokio::runtime::Handle;

use crate::scheduler::{run_task, Scheduler, Task};

/// Runs tasks on the blocking pool of a tokio runtime.
///
/// Tasks are plain closures that may block, so they go through
/// `spawn_blocking` rather than onto the async workers.
impl Scheduler for Handle {
  fn schedule(&self, task: Task) {
    self.spawn_blocking(move || run_task("tokio", task));
  }
}
