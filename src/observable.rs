//! The `Observable` type: a cold, reusable template over a subscription
//! procedure.
//!
//! Subscribing runs the procedure from scratch every time; nothing is shared
//! or cached between subscribers. Operators (see [`crate::ops`]) return new
//! observables that re-subscribe upstream with a relay observer.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use rxcore::prelude::*;
//!
//! let seen = Arc::new(Mutex::new(vec![]));
//! let c_seen = seen.clone();
//!
//! Observable::<i32>::create(|observer| {
//!   observer.next(1);
//!   observer.next(2);
//!   observer.next(3);
//!   observer.complete();
//!   Ok(())
//! })
//! .filter(|v| v % 2 == 1)
//! .map(|v| v * 10)
//! .subscribe(observer::from_next(move |v: i32| c_seen.lock().unwrap().push(v)));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![10, 30]);
//! ```

use std::{
  panic::{self, AssertUnwindSafe},
  sync::Arc,
};

use crate::{
  disposable::Disposable,
  error::RxError,
  guard::TerminationGuard,
  observer::{Observer, SharedObserver},
};

mod from_iter;
mod of;
mod trivial;

type SubscribeFn<Item> = dyn Fn(SharedObserver<Item>) -> Result<(), RxError> + Send + Sync;

/// A cold stream of `Item`s.
///
/// The procedure handed to [`Observable::create`] is expected to call
/// `next` zero or more times followed by exactly one of `error` /
/// `complete`. It may also fail by returning `Err` or panicking; either is
/// delivered as an `error` by [`Observable::subscribe`].
pub struct Observable<Item> {
  subscribe_fn: Arc<SubscribeFn<Item>>,
}

impl<Item> Clone for Observable<Item> {
  fn clone(&self) -> Self { Self { subscribe_fn: self.subscribe_fn.clone() } }
}

impl<Item: 'static> Observable<Item> {
  /// Wraps a subscription procedure. Nothing runs until a subscription.
  pub fn create<F>(subscribe_fn: F) -> Self
  where
    F: Fn(SharedObserver<Item>) -> Result<(), RxError> + Send + Sync + 'static,
  {
    Self { subscribe_fn: Arc::new(subscribe_fn) }
  }

  /// Runs the subscription procedure against `observer`.
  ///
  /// The observer is wrapped in a termination guard for the lifetime of this
  /// run, so it sees at most one terminal event and nothing once it reports
  /// itself disposed. A fault escaping the procedure on the calling thread
  /// (an `Err` return or a panic) is delivered through the same guard; it is
  /// dropped silently if the observer is already disposed or terminated.
  pub fn subscribe<O>(&self, observer: O)
  where
    O: Observer<Item> + 'static,
  {
    let guard: SharedObserver<Item> = Arc::new(TerminationGuard::new(observer));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| (self.subscribe_fn)(guard.clone())));
    let fault = match outcome {
      Ok(Ok(())) => return,
      Ok(Err(err)) => err,
      Err(payload) => RxError::from_panic(payload),
    };
    guard.error(fault);
  }

  /// Subscribes and hands the observer back as a cancellation handle.
  pub fn subscribe_with<O>(&self, observer: Arc<O>) -> Arc<dyn Disposable>
  where
    O: Observer<Item> + Disposable + 'static,
  {
    self.subscribe(observer.clone());
    observer
  }
}
