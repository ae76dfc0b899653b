//! Where units of work run.
//!
//! A [`Scheduler`] accepts a boxed task and runs it at some point on some
//! worker. Schedulers are external collaborators of the core: the operators
//! only ever call [`Scheduler::schedule`] and never wait on the result.
//!
//! | Scheduler | Workers | Order between tasks |
//! |---|---|---|
//! | [`ImmediateScheduler`] | the caller | submission order |
//! | [`NewThreadScheduler`] | a fresh thread per task | none |
//! | [`ComputationScheduler`] | fixed pool | none |
//! | [`SingleThreadScheduler`] | one thread | FIFO |
//!
//! Every scheduler here catches a panicking task on its worker and reports it
//! with `tracing::error!`, so one faulty task cannot take a worker down.

use std::{
  io,
  num::NonZeroUsize,
  panic::{self, AssertUnwindSafe},
  sync::Arc,
  thread,
};

use thiserror::Error;

use crate::error::panic_message;

mod immediate;
mod new_thread;
#[cfg(feature = "futures-scheduler")]
mod thread_pool;
#[cfg(feature = "tokio-scheduler")]
mod tokio_handle;

pub use immediate::ImmediateScheduler;
pub use new_thread::NewThreadScheduler;
#[cfg(feature = "futures-scheduler")]
pub use thread_pool::{ComputationScheduler, SingleThreadScheduler};

/// A unit of work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send>;

/// Executes submitted units of work.
pub trait Scheduler: Send + Sync {
  /// Submits `task`. Returns without waiting for it, unless the scheduler
  /// runs work inline.
  fn schedule(&self, task: Task);
}

impl<S> Scheduler for Arc<S>
where
  S: Scheduler + ?Sized,
{
  #[inline]
  fn schedule(&self, task: Task) { (**self).schedule(task) }
}

/// Runs `task`, catching a panic and logging it on behalf of `scheduler`.
pub(crate) fn run_task(scheduler: &str, task: Task) {
  if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
    tracing::error!(
      scheduler,
      panic = %panic_message(&*payload),
      "scheduled task panicked"
    );
  }
}

/// Sizing and naming of pool-backed schedulers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
  pub pool_size: usize,
  pub name_prefix: String,
}

impl Default for SchedulerConfig {
  fn default() -> Self {
    SchedulerConfig {
      pool_size: thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1),
      name_prefix: "rx-computation".to_owned(),
    }
  }
}

impl SchedulerConfig {
  pub fn with_pool_size(mut self, pool_size: usize) -> Self {
    self.pool_size = pool_size;
    self
  }

  pub fn with_name_prefix(mut self, name_prefix: impl Into<String>) -> Self {
    self.name_prefix = name_prefix.into();
    self
  }

  pub(crate) fn validate(&self) -> Result<(), SchedulerError> {
    if self.pool_size == 0 {
      return Err(SchedulerError::ZeroPoolSize);
    }
    Ok(())
  }
}

/// Failure to build a scheduler.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchedulerError {
  #[error("scheduler pool size must be at least 1")]
  ZeroPoolSize,

  #[error("failed to start scheduler workers: {0}")]
  Spawn(#[from] io::Error),
}
