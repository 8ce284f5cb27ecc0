// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is the headless state coordinator behind a full-screen
//! media picker viewer.
//!
//! It owns the page index, the bounded selection set, chrome visibility,
//! and the double-tap zoom animation for one viewing session, and exposes
//! narrow-cast notification channels so that independently-rendering
//! sub-views (app bar label, filmstrip, checkbox, image surface) rebuild
//! only on the changes they subscribe to. Rendering, the media asset
//! store, and the platform chrome API stay behind ports.

pub mod application;
pub mod domain;
pub mod error;
pub mod notify;
pub mod viewer;

pub use error::{Error, Result};
