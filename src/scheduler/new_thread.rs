use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  },
  thread,
};

use crate::scheduler::{run_task, Scheduler, Task};

/// Spawns a dedicated, named OS thread for each unit of work.
///
/// Suited to blocking work; nothing orders two tasks relative to each other.
#[derive(Debug, Clone)]
pub struct NewThreadScheduler {
  name_prefix: Arc<str>,
  spawned: Arc<AtomicUsize>,
}

impl Default for NewThreadScheduler {
  fn default() -> Self { Self::with_name_prefix("rx-new-thread") }
}

impl NewThreadScheduler {
  pub fn new() -> Self { Self::default() }

  pub fn with_name_prefix(name_prefix: &str) -> Self {
    NewThreadScheduler { name_prefix: name_prefix.into(), spawned: Arc::new(AtomicUsize::new(0)) }
  }
}

impl Scheduler for NewThreadScheduler {
  fn schedule(&self, task: Task) {
    let idx = self.spawned.fetch_add(1, Ordering::Relaxed);
    let name = format!("{}-{}", self.name_prefix, idx);
    let spawned = thread::Builder::new().name(name.clone()).spawn(move || run_task(&name, task));
    if let Err(err) = spawned {
      // The task is dropped with the failed builder.
      tracing::error!(scheduler = %self.name_prefix, error = %err, "failed to spawn thread");
    }
  }
}
