use std::sync::Arc;

use crate::{
  error::RxError,
  observable::Observable,
  observer::{Observer, SharedObserver},
  scheduler::Scheduler,
};

impl<Item: Send + 'static> Observable<Item> {
  /// Re-emits every notification on `scheduler`.
  ///
  /// Upstream is subscribed on the current thread; each `next`, `error` and
  /// `complete` it produces is submitted to the scheduler as its own unit of
  /// work. Relative order downstream is only as good as the scheduler's: a
  /// single FIFO worker keeps it, a multi-worker pool does not.
  pub fn observe_on<S>(&self, scheduler: S) -> Observable<Item>
  where
    S: Scheduler + 'static,
  {
    let source = self.clone();
    let scheduler = Arc::new(scheduler);
    Observable::create(move |observer| {
      source.subscribe(ObserveOnObserver { observer, scheduler: scheduler.clone() });
      Ok(())
    })
  }
}

pub(crate) struct ObserveOnObserver<Item, S> {
  observer: SharedObserver<Item>,
  scheduler: Arc<S>,
}

impl<Item, S> Observer<Item> for ObserveOnObserver<Item, S>
where
  Item: Send + 'static,
  S: Scheduler,
{
  fn next(&self, value: Item) {
    let observer = self.observer.clone();
    self.scheduler.schedule(Box::new(move || observer.next(value)));
  }

  fn error(&self, err: RxError) {
    let observer = self.observer.clone();
    self.scheduler.schedule(Box::new(move || observer.error(err)));
  }

  fn complete(&self) {
    let observer = self.observer.clone();
    self.scheduler.schedule(Box::new(move || observer.complete()));
  }

  fn is_disposed(&self) -> bool { self.observer.is_disposed() }
}
