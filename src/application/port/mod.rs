// SPDX-License-Identifier: MPL-2.0
//! Port definitions for external collaborators.
//!
//! The viewer core never reads assets or touches platform chrome directly;
//! both are behind traits so the embedding application supplies concrete
//! adapters.

pub mod chrome;
pub mod media;

pub use chrome::{NoopSystemChrome, SystemChrome};
pub use media::{MediaError, MediaStore};
