//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three event methods: next (for values), error (for faults), and
//! complete (for stream completion), plus a disposed query that producers
//! may poll to stop early.

use std::{marker::PhantomData, sync::Arc};

use crate::error::RxError;

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// Events may be delivered from whichever thread drives the chain (a
/// scheduler worker after `subscribe_on` / `observe_on`), so every method
/// takes `&self` and implementors keep their mutable state behind interior
/// mutability.
pub trait Observer<Item>: Send + Sync {
  /// Receive the next value from the observable
  fn next(&self, value: Item);

  /// Handle a fault from the observable. Terminal.
  fn error(&self, err: RxError);

  /// Handle completion of the observable. Terminal.
  fn complete(&self);

  /// Checks if the observer no longer wants events.
  ///
  /// Producers poll this between emissions to honor cancellation; the
  /// termination guard installed by `subscribe` also consults it before
  /// forwarding anything.
  fn is_disposed(&self) -> bool { false }
}

/// The observer handle a subscription procedure receives.
pub type SharedObserver<Item> = Arc<dyn Observer<Item>>;

impl<Item, O> Observer<Item> for Arc<O>
where
  O: Observer<Item> + ?Sized,
{
  #[inline]
  fn next(&self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&self, err: RxError) { (**self).error(err) }

  #[inline]
  fn complete(&self) { (**self).complete() }

  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

impl<Item, O> Observer<Item> for Box<O>
where
  O: Observer<Item> + ?Sized,
{
  #[inline]
  fn next(&self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&self, err: RxError) { (**self).error(err) }

  #[inline]
  fn complete(&self) { (**self).complete() }

  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

// ============================================================================
// FnObserver - Closure adapter
// ============================================================================

/// An observer assembled from three closures.
///
/// This enables ad-hoc consumers without declaring a type:
/// `observable.subscribe(observer::from_fn(|v| .., |e| .., || ..))`.
pub struct FnObserver<Item, N, E, C> {
  next: N,
  error: E,
  complete: C,
  _marker: PhantomData<fn(Item)>,
}

/// Builds an observer from `next`, `error` and `complete` closures.
pub fn from_fn<Item, N, E, C>(next: N, error: E, complete: C) -> FnObserver<Item, N, E, C>
where
  N: Fn(Item) + Send + Sync,
  E: Fn(RxError) + Send + Sync,
  C: Fn() + Send + Sync,
{
  FnObserver { next, error, complete, _marker: PhantomData }
}

/// Builds an observer that only cares about values; faults and completion
/// are ignored.
pub fn from_next<Item, N>(
  next: N,
) -> FnObserver<Item, N, impl Fn(RxError) + Send + Sync, impl Fn() + Send + Sync>
where
  N: Fn(Item) + Send + Sync,
{
  from_fn(next, |_| {}, || {})
}

impl<Item, N, E, C> Clone for FnObserver<Item, N, E, C>
where
  N: Clone,
  E: Clone,
  C: Clone,
{
  fn clone(&self) -> Self {
    FnObserver {
      next: self.next.clone(),
      error: self.error.clone(),
      complete: self.complete.clone(),
      _marker: PhantomData,
    }
  }
}

impl<Item, N, E, C> Observer<Item> for FnObserver<Item, N, E, C>
where
  N: Fn(Item) + Send + Sync,
  E: Fn(RxError) + Send + Sync,
  C: Fn() + Send + Sync,
{
  #[inline]
  fn next(&self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(&self, err: RxError) { (self.error)(err) }

  #[inline]
  fn complete(&self) { (self.complete)() }
}

// ============================================================================
// Tests
// ============================================================================
