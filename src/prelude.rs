pub use crate::{
  disposable::{BooleanDisposable, Disposable},
  disposable_observer::{DisposableHandler, DisposableObserver},
  error::RxError,
  observable::Observable,
  observer::{self, FnObserver, Observer, SharedObserver},
  scheduler::{
    ImmediateScheduler, NewThreadScheduler, Scheduler, SchedulerConfig, SchedulerError, Task,
  },
};
#[cfg(feature = "futures-scheduler")]
pub use crate::scheduler::{ComputationScheduler, SingleThreadScheduler};
