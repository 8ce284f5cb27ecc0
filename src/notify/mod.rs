// SPDX-License-Identifier: MPL-2.0
//! Change-notification primitives for the viewer.
//!
//! The viewer fans state changes out on per-concern channels so that only
//! interested sub-views rebuild. [`Observable`] is a single-threaded value
//! holder with subscriber callbacks:
//!
//! - every emitted value reaches live subscribers in registration order;
//! - a newly attached subscriber is immediately replayed the current value,
//!   so late subscribers never observe a stale or undefined state;
//! - dropping the [`Subscription`] guard detaches the listener before the
//!   next emission;
//! - `close()` synchronously detaches every listener, used when a viewing
//!   session reaches a terminal state.

pub mod observable;

pub use observable::{Observable, Subscription};
