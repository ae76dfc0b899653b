use std::{
  marker::PhantomData,
  panic::{self, AssertUnwindSafe},
  sync::Arc,
};

use crate::{
  error::RxError,
  observable::Observable,
  observer::{Observer, SharedObserver},
};

impl<Item: 'static> Observable<Item> {
  /// Maps every item to an inner observable and merges the inner emissions
  /// into one stream.
  ///
  /// Inner completions are swallowed; only the completion of this (outer)
  /// observable completes the result. An inner error terminates the whole
  /// stream. A panic raised by `factory` is caught where the factory is
  /// called and delivered downstream as an error.
  ///
  /// When nothing in the chain is scheduled, each inner observable is
  /// subscribed and fully drained before the next outer item is handled,
  /// so the output keeps outer order.
  pub fn flat_map<R, F>(&self, factory: F) -> Observable<R>
  where
    R: 'static,
    F: Fn(Item) -> Observable<R> + Send + Sync + 'static,
  {
    let source = self.clone();
    let factory = Arc::new(factory);
    Observable::create(move |observer| {
      source.subscribe(FlatMapObserver {
        observer,
        factory: factory.clone(),
        _marker: PhantomData,
      });
      Ok(())
    })
  }
}

pub(crate) struct FlatMapObserver<Item, R, F> {
  observer: SharedObserver<R>,
  factory: Arc<F>,
  _marker: PhantomData<fn(Item)>,
}

impl<Item, R, F> Observer<Item> for FlatMapObserver<Item, R, F>
where
  R: 'static,
  F: Fn(Item) -> Observable<R> + Send + Sync,
{
  fn next(&self, value: Item) {
    match panic::catch_unwind(AssertUnwindSafe(|| (self.factory)(value))) {
      Ok(inner) => inner.subscribe(InnerObserver { observer: self.observer.clone() }),
      Err(payload) => self.observer.error(RxError::from_panic(payload)),
    }
  }

  fn error(&self, err: RxError) { self.observer.error(err) }

  fn complete(&self) { self.observer.complete() }

  fn is_disposed(&self) -> bool { self.observer.is_disposed() }
}

/// Relays one inner observable into the shared downstream.
pub(crate) struct InnerObserver<R> {
  observer: SharedObserver<R>,
}

impl<R> Observer<R> for InnerObserver<R> {
  fn next(&self, value: R) { self.observer.next(value) }

  fn error(&self, err: RxError) { self.observer.error(err) }

  fn complete(&self) {}

  fn is_disposed(&self) -> bool { self.observer.is_disposed() }
}
