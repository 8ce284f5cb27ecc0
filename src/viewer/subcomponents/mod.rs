// SPDX-License-Identifier: MPL-2.0
//! Sub-components of the viewer, one per independently-observable concern.
//!
//! Each sub-component owns its own state and, where sub-views need to
//! rebuild on change, its own notification channel. The coordinator in
//! `component.rs` orchestrates them.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── cursor     - current page index + broadcast channel
//!     ├── selection  - bounded selection set + snapshot channel
//!     ├── chrome     - overlay visibility + page-swipe gating
//!     └── zoom       - double-tap zoom animation + transform channel
//! ```

pub mod chrome;
pub mod cursor;
pub mod selection;
pub mod zoom;
