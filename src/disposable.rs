//! Cooperative cancellation tokens.

use std::{
  fmt::{Debug, Formatter},
  sync::atomic::{AtomicBool, Ordering},
};

/// A cancellation token returned to callers so they can stop a subscription.
///
/// `dispose` only raises a flag: it never interrupts a unit of work that is
/// already running. Producers observe it through `Observer::is_disposed`.
pub trait Disposable: Send + Sync {
  /// Marks the token as disposed. Idempotent; never reversed.
  fn dispose(&self);

  /// Point-in-time read of the disposed flag.
  fn is_disposed(&self) -> bool;
}

impl Debug for dyn Disposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("dyn Disposable").field("is_disposed", &self.is_disposed()).finish()
  }
}

/// The plain one-way flag every disposable in this crate is built on.
#[derive(Debug, Default)]
pub struct BooleanDisposable(AtomicBool);

impl BooleanDisposable {
  pub fn new() -> Self { Self::default() }
}

impl Disposable for BooleanDisposable {
  #[inline]
  fn dispose(&self) { self.0.store(true, Ordering::Release); }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.load(Ordering::Acquire) }
}
