//! Operators.
//!
//! Each operator is an inherent method on [`Observable`] returning a new
//! observable. Subscribing to the result subscribes upstream with a relay
//! observer that transforms events and passes them on; relays report their
//! downstream's `is_disposed` so cancellation reaches the producer.
//!
//! [`Observable`]: crate::observable::Observable

mod filter;
mod flat_map;
mod map;
mod observe_on;
mod subscribe_on;
