// SPDX-License-Identifier: MPL-2.0
//! Platform chrome port definition.
//!
//! Hiding and restoring system overlays (status bar, navigation bar) is a
//! best-effort, fire-and-forget platform call. The coordinator invokes it
//! as a side effect of chrome toggles and at session end; no return value
//! is inspected.

/// Port for the platform's system-overlay API.
pub trait SystemChrome {
    /// Hides the system overlays. Best effort.
    fn hide_system_overlays(&self);

    /// Restores the system overlays. Best effort.
    fn restore_system_overlays(&self);
}

/// A no-op adapter for tests and platforms without hideable chrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSystemChrome;

impl SystemChrome for NoopSystemChrome {
    fn hide_system_overlays(&self) {}

    fn restore_system_overlays(&self) {}
}
