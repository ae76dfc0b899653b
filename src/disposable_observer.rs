//! A consumer that is also its own cancellation handle.
//!
//! [`DisposableObserver`] owns the disposed flag and the single-fire error
//! guard; the behaviour of a concrete consumer lives in a
//! [`DisposableHandler`]. Every handler callback receives the observer as a
//! `&dyn Disposable` so it can cancel the subscription or inspect its state.

use std::{
  marker::PhantomData,
  sync::atomic::{AtomicBool, Ordering},
};

use crate::{
  disposable::{BooleanDisposable, Disposable},
  error::RxError,
  observer::Observer,
};

/// The extension points a [`DisposableObserver`] delegates to.
pub trait DisposableHandler<Item>: Send + Sync {
  fn on_next(&self, value: Item, disposable: &dyn Disposable);

  /// Called after the observer has transitioned to disposed.
  fn on_complete(&self, disposable: &dyn Disposable);

  /// Called at most once per observer, after it has transitioned to
  /// disposed, however many times `error` is invoked.
  fn handle_error(&self, err: RxError, disposable: &dyn Disposable);
}

/// Observer + Disposable with a one-way `active -> disposed` state machine.
///
/// The transition happens on an explicit `dispose`, on `complete` and on
/// `error`. `error` races are settled with a compare-and-set: one caller
/// disposes and runs `handle_error`, the others do nothing. `complete` is
/// guarded the same way on its own flag so `on_complete` also runs at most
/// once.
pub struct DisposableObserver<Item, H> {
  handler: H,
  disposed: BooleanDisposable,
  error_handled: AtomicBool,
  completed: AtomicBool,
  _marker: PhantomData<fn(Item)>,
}

impl<Item, H> DisposableObserver<Item, H>
where
  H: DisposableHandler<Item>,
{
  pub fn new(handler: H) -> Self {
    DisposableObserver {
      handler,
      disposed: BooleanDisposable::new(),
      error_handled: AtomicBool::new(false),
      completed: AtomicBool::new(false),
      _marker: PhantomData,
    }
  }

  pub fn handler(&self) -> &H { &self.handler }
}

impl<Item, N, C, E> DisposableObserver<Item, FnHandler<N, C, E>>
where
  N: Fn(Item, &dyn Disposable) + Send + Sync,
  C: Fn(&dyn Disposable) + Send + Sync,
  E: Fn(RxError, &dyn Disposable) + Send + Sync,
{
  /// Builds a disposable observer from closures.
  pub fn from_fns(on_next: N, on_complete: C, handle_error: E) -> Self {
    DisposableObserver::new(FnHandler { on_next, on_complete, handle_error })
  }
}

impl<Item, H> Observer<Item> for DisposableObserver<Item, H>
where
  H: DisposableHandler<Item>,
{
  fn next(&self, value: Item) { self.handler.on_next(value, self) }

  fn error(&self, err: RxError) {
    if self.error_handled.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    {
      self.disposed.dispose();
      self.handler.handle_error(err, self);
    }
  }

  fn complete(&self) {
    if self.completed.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok() {
      self.disposed.dispose();
      self.handler.on_complete(self);
    }
  }

  fn is_disposed(&self) -> bool { self.disposed.is_disposed() }
}

impl<Item, H> Disposable for DisposableObserver<Item, H>
where
  H: DisposableHandler<Item>,
{
  fn dispose(&self) { self.disposed.dispose() }

  fn is_disposed(&self) -> bool { self.disposed.is_disposed() }
}

/// Closure-backed [`DisposableHandler`], see [`DisposableObserver::from_fns`].
pub struct FnHandler<N, C, E> {
  on_next: N,
  on_complete: C,
  handle_error: E,
}

impl<Item, N, C, E> DisposableHandler<Item> for FnHandler<N, C, E>
where
  N: Fn(Item, &dyn Disposable) + Send + Sync,
  C: Fn(&dyn Disposable) + Send + Sync,
  E: Fn(RxError, &dyn Disposable) + Send + Sync,
{
  #[inline]
  fn on_next(&self, value: Item, disposable: &dyn Disposable) { (self.on_next)(value, disposable) }

  #[inline]
  fn on_complete(&self, disposable: &dyn Disposable) { (self.on_complete)(disposable) }

  #[inline]
  fn handle_error(&self, err: RxError, disposable: &dyn Disposable) {
    (self.handle_error)(err, disposable)
  }
}
