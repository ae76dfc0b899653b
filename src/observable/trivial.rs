use crate::{error::RxError, observable::Observable};

impl<Item: 'static> Observable<Item> {
  /// Creates an observable that produces no values and completes at once.
  pub fn empty() -> Self {
    Observable::create(|observer| {
      observer.complete();
      Ok(())
    })
  }

  /// Creates an observable that emits no items, just terminates with an error.
  pub fn throw(err: RxError) -> Self {
    Observable::create(move |observer| {
      observer.error(err.clone());
      Ok(())
    })
  }

  /// Creates an observable that never emits and never terminates.
  pub fn never() -> Self { Observable::create(|_| Ok(())) }
}
