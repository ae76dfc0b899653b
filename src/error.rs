//! The fault type carried by `error` notifications.
//!
//! Every terminal failure in a chain travels as an [`RxError`]: faults a
//! producer signals explicitly, faults it returns from its subscription
//! procedure, and panics recovered at a `subscribe` boundary.

use std::{any::Any, error::Error as StdError, sync::Arc};

use thiserror::Error;

/// A fault delivered through `Observer::error`.
///
/// Cheap to clone, so a fault can be moved onto a scheduler thread or handed
/// to more than one consumer.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum RxError {
  /// A fault described only by a message.
  #[error("{0}")]
  Message(String),

  /// A fault wrapping an arbitrary error value.
  #[error(transparent)]
  Source(Arc<dyn StdError + Send + Sync + 'static>),

  /// A panic that unwound out of user code and was recovered.
  #[error("panicked: {0}")]
  Panicked(String),
}

impl RxError {
  /// Creates a fault from a message.
  pub fn msg(message: impl Into<String>) -> Self { RxError::Message(message.into()) }

  /// Wraps an error value.
  pub fn new<E>(err: E) -> Self
  where
    E: StdError + Send + Sync + 'static,
  {
    RxError::Source(Arc::new(err))
  }

  /// Converts a payload obtained from `std::panic::catch_unwind`.
  pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    RxError::Panicked(panic_message(payload.as_ref()))
  }

  /// Returns a short stable label (snake_case) for use in logs.
  pub fn as_label(&self) -> &'static str {
    match self {
      RxError::Message(_) => "rx_message",
      RxError::Source(_) => "rx_source",
      RxError::Panicked(_) => "rx_panicked",
    }
  }

  /// True when the fault was recovered from a panic.
  pub fn is_panic(&self) -> bool { matches!(self, RxError::Panicked(_)) }
}

impl From<String> for RxError {
  fn from(message: String) -> Self { RxError::Message(message) }
}

impl From<&str> for RxError {
  fn from(message: &str) -> Self { RxError::Message(message.to_owned()) }
}

/// Extracts the human readable part of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(s) = payload.downcast_ref::<&'static str>() {
    (*s).to_owned()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "unknown panic payload".to_owned()
  }
}
