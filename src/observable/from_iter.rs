use crate::observable::Observable;

impl<Item: 'static> Observable<Item> {
  /// Creates an observable that produces values from an iterator.
  ///
  /// The iterable is cloned for every subscription. Before each emission the
  /// downstream disposed flag is polled, so a consumer that disposes itself
  /// stops the loop. Completes when all elements have been emitted. Never
  /// emits an error.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxcore::prelude::*;
  ///
  /// Observable::from_iter(0..10).subscribe(observer::from_next(|v: i32| println!("{}", v)));
  /// Observable::from_iter(vec![0, 1, 2, 3])
  ///   .subscribe(observer::from_next(|v: i32| println!("{}", v)));
  /// ```
  pub fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Item> + Clone + Send + Sync + 'static,
  {
    Observable::create(move |observer| {
      for v in iter.clone() {
        if observer.is_disposed() {
          return Ok(());
        }
        observer.next(v);
      }
      if !observer.is_disposed() {
        observer.complete();
      }
      Ok(())
    })
  }
}
