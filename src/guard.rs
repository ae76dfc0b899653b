use std::{
  marker::PhantomData,
  sync::atomic::{AtomicBool, Ordering},
};

use crate::{error::RxError, observer::Observer};

/// Per-subscription wrapper installed by `Observable::subscribe`.
///
/// Forwards at most one terminal event, nothing after it, and nothing once
/// the wrapped observer reports itself disposed. The terminal flag is an
/// atomic swap so two producer threads racing on `error`/`complete` cannot
/// both get through.
pub(crate) struct TerminationGuard<Item, O> {
  observer: O,
  done: AtomicBool,
  _marker: PhantomData<fn(Item)>,
}

impl<Item, O> TerminationGuard<Item, O>
where
  O: Observer<Item>,
{
  pub(crate) fn new(observer: O) -> Self {
    Self { observer, done: AtomicBool::new(false), _marker: PhantomData }
  }

  #[inline]
  fn is_done(&self) -> bool { self.done.load(Ordering::Acquire) }

  /// Claims the terminal slot. Only the first caller gets `true`.
  #[inline]
  fn claim_terminal(&self) -> bool {
    !self.is_done() && !self.observer.is_disposed() && !self.done.swap(true, Ordering::AcqRel)
  }
}

impl<Item, O> Observer<Item> for TerminationGuard<Item, O>
where
  O: Observer<Item>,
{
  fn next(&self, value: Item) {
    if !self.is_done() && !self.observer.is_disposed() {
      self.observer.next(value);
    }
  }

  fn error(&self, err: RxError) {
    if self.claim_terminal() {
      self.observer.error(err);
    }
  }

  fn complete(&self) {
    if self.claim_terminal() {
      self.observer.complete();
    }
  }

  fn is_disposed(&self) -> bool { self.is_done() || self.observer.is_disposed() }
}
