//! # rxcore: a push-based reactive-stream core
//!
//! Cold [`Observable`]s built from a subscription procedure, the `map`,
//! `filter` and `flat_map` operators, `subscribe_on` / `observe_on` for moving
//! work onto a [`Scheduler`], and cooperative cancellation through
//! [`Disposable`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use rxcore::prelude::*;
//!
//! let seen = Arc::new(Mutex::new(vec![]));
//! let c_seen = seen.clone();
//!
//! Observable::from_iter(0..10)
//!   .filter(|v| v % 2 == 0)
//!   .map(|v| v * 2)
//!   .subscribe(observer::from_next(move |v: i32| c_seen.lock().unwrap().push(v)));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![0, 4, 8, 12, 16]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | Cold stream; every subscription re-runs the producer |
//! | [`Observer`] | Consumes `next`, `error` and `complete` events |
//! | [`DisposableObserver`] | An observer that is also its own cancellation handle |
//! | [`Scheduler`] | Runs submitted units of work on some worker |
//!
//! Every subscriber sees `next*` followed by at most one of `error` or
//! `complete`, and nothing once it reports itself disposed.
//!
//! ## Feature Flags
//!
//! - **`futures-scheduler`** (default): pool-backed [`ComputationScheduler`]
//!   and [`SingleThreadScheduler`]
//! - **`tokio-scheduler`**: `Scheduler` for `tokio::runtime::Handle`
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`DisposableObserver`]: disposable_observer::DisposableObserver
//! [`Disposable`]: disposable::Disposable
//! [`Scheduler`]: scheduler::Scheduler
//! [`ComputationScheduler`]: scheduler::ComputationScheduler
//! [`SingleThreadScheduler`]: scheduler::SingleThreadScheduler

pub mod disposable;
pub mod disposable_observer;
pub mod error;
mod guard;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;

pub use prelude::*;
