use std::sync::Arc;

use crate::{
  error::RxError,
  observable::Observable,
  observer::{Observer, SharedObserver},
};

impl<Item: 'static> Observable<Item> {
  /// Emit only those items from an Observable that pass a predicate test.
  ///
  /// Like `map`, the predicate is not guarded: a panic inside it is only
  /// recovered at the nearest `subscribe` boundary.
  ///
  /// # Example
  ///
  /// ```
  /// use std::sync::{Arc, Mutex};
  /// use rxcore::prelude::*;
  ///
  /// let coll = Arc::new(Mutex::new(vec![]));
  /// let c_coll = coll.clone();
  ///
  /// Observable::from_iter(0..10)
  ///   .filter(|v| *v % 2 == 0)
  ///   .subscribe(observer::from_next(move |v: i32| c_coll.lock().unwrap().push(v)));
  ///
  /// // only even numbers received.
  /// assert_eq!(*coll.lock().unwrap(), vec![0, 2, 4, 6, 8]);
  /// ```
  pub fn filter<F>(&self, predicate: F) -> Observable<Item>
  where
    F: Fn(&Item) -> bool + Send + Sync + 'static,
  {
    let source = self.clone();
    let predicate = Arc::new(predicate);
    Observable::create(move |observer| {
      source.subscribe(FilterObserver { observer, predicate: predicate.clone() });
      Ok(())
    })
  }
}

pub(crate) struct FilterObserver<Item, F> {
  observer: SharedObserver<Item>,
  predicate: Arc<F>,
}

impl<Item, F> Observer<Item> for FilterObserver<Item, F>
where
  F: Fn(&Item) -> bool + Send + Sync,
{
  fn next(&self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value)
    }
  }

  fn error(&self, err: RxError) { self.observer.error(err) }

  fn complete(&self) { self.observer.complete() }

  fn is_disposed(&self) -> bool { self.observer.is_disposed() }
}
