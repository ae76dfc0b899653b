use crate::observable::Observable;

impl<Item> Observable<Item>
where
  Item: Clone + Send + Sync + 'static,
{
  /// Creates an observable producing a single value.
  ///
  /// Completes immediately after emitting the value given. Never emits an
  /// error.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxcore::prelude::*;
  ///
  /// Observable::of(123).subscribe(observer::from_next(|v: i32| println!("{}", v)));
  /// ```
  pub fn of(value: Item) -> Self {
    Observable::create(move |observer| {
      observer.next(value.clone());
      observer.complete();
      Ok(())
    })
  }
}
