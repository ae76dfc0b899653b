use futures::{executor::ThreadPool, future};

use crate::scheduler::{run_task, Scheduler, SchedulerConfig, SchedulerError, Task};

fn build_pool(config: &SchedulerConfig) -> Result<ThreadPool, SchedulerError> {
  config.validate()?;
  let pool =
    ThreadPool::builder().pool_size(config.pool_size).name_prefix(&config.name_prefix).create()?;
  tracing::debug!(
    pool_size = config.pool_size,
    name_prefix = %config.name_prefix,
    "scheduler pool started"
  );
  Ok(pool)
}

fn spawn_on(pool: &ThreadPool, name: &str, task: Task) {
  let name = name.to_owned();
  pool.spawn_ok(future::lazy(move |_| run_task(&name, task)));
}

/// Submits straight onto a futures pool; the pool's own name is not known
/// here, so panics are reported under `"thread-pool"`.
impl Scheduler for ThreadPool {
  fn schedule(&self, task: Task) { spawn_on(self, "thread-pool", task) }
}

/// A fixed-size pool for CPU-bound work.
///
/// Tasks may run concurrently and complete in any order.
#[derive(Clone)]
pub struct ComputationScheduler {
  pool: ThreadPool,
  name: String,
}

impl ComputationScheduler {
  /// A pool sized to the available parallelism.
  pub fn new() -> Result<Self, SchedulerError> { Self::with_config(SchedulerConfig::default()) }

  pub fn with_config(config: SchedulerConfig) -> Result<Self, SchedulerError> {
    let pool = build_pool(&config)?;
    Ok(ComputationScheduler { pool, name: config.name_prefix })
  }
}

impl Scheduler for ComputationScheduler {
  fn schedule(&self, task: Task) { spawn_on(&self.pool, &self.name, task) }
}

/// One worker thread; tasks run one at a time in submission order.
#[derive(Clone)]
pub struct SingleThreadScheduler {
  pool: ThreadPool,
  name: String,
}

impl SingleThreadScheduler {
  pub fn new() -> Result<Self, SchedulerError> { Self::with_name("rx-single") }

  /// The worker thread is named `name` followed by its index.
  pub fn with_name(name: &str) -> Result<Self, SchedulerError> {
    let config = SchedulerConfig::default().with_pool_size(1).with_name_prefix(name);
    let pool = build_pool(&config)?;
    Ok(SingleThreadScheduler { pool, name: config.name_prefix })
  }
}

impl Scheduler for SingleThreadScheduler {
  fn schedule(&self, task: Task) { spawn_on(&self.pool, &self.name, task) }
}
