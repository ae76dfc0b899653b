use std::{marker::PhantomData, sync::Arc};

use crate::{
  error::RxError,
  observable::Observable,
  observer::{Observer, SharedObserver},
};

impl<Item: 'static> Observable<Item> {
  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  ///
  /// `transform` runs unguarded: if it panics, the panic unwinds through the
  /// upstream producer and is recovered only at the nearest `subscribe`
  /// boundary, which turns it into an `error`. Use `flat_map` when a failing
  /// transformation has to be caught where it happens.
  pub fn map<R, F>(&self, transform: F) -> Observable<R>
  where
    R: 'static,
    F: Fn(Item) -> R + Send + Sync + 'static,
  {
    let source = self.clone();
    let transform = Arc::new(transform);
    Observable::create(move |observer| {
      source.subscribe(MapObserver {
        observer,
        transform: transform.clone(),
        _marker: PhantomData,
      });
      Ok(())
    })
  }
}

pub(crate) struct MapObserver<Item, R, F> {
  observer: SharedObserver<R>,
  transform: Arc<F>,
  _marker: PhantomData<fn(Item)>,
}

impl<Item, R, F> Observer<Item> for MapObserver<Item, R, F>
where
  F: Fn(Item) -> R + Send + Sync,
{
  fn next(&self, value: Item) { self.observer.next((self.transform)(value)) }

  fn error(&self, err: RxError) { self.observer.error(err) }

  fn complete(&self) { self.observer.complete() }

  fn is_disposed(&self) -> bool { self.observer.is_disposed() }
}
