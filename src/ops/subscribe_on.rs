use crate::{observable::Observable, scheduler::Scheduler};

impl<Item: 'static> Observable<Item> {
  /// Moves the subscription itself onto `scheduler`.
  ///
  /// Subscribing submits "subscribe upstream with this observer" as one unit
  /// of work and returns at once; when the producer starts running is up to
  /// the scheduler.
  pub fn subscribe_on<S>(&self, scheduler: S) -> Observable<Item>
  where
    S: Scheduler + 'static,
  {
    let source = self.clone();
    Observable::create(move |observer| {
      let source = source.clone();
      scheduler.schedule(Box::new(move || source.subscribe(observer)));
      Ok(())
    })
  }
}
