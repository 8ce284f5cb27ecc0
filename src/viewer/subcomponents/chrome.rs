// SPDX-License-Identifier: MPL-2.0
//! Chrome visibility: the overlay-shown flag and the page-swipe gate.
//!
//! Pure state with no notification channel: the top/bottom overlays are
//! co-located with the caller's own redraw, so a coarse-grained full
//! redraw is cheaper than a dedicated channel. The platform chrome call
//! that accompanies `toggle()` is the coordinator's side effect, not owned
//! here.

/// Overlay visibility and page-swipe gating flags.
#[derive(Debug, Clone, Copy)]
pub struct ChromeVisibility {
    shown: bool,
    paging_enabled: bool,
}

impl ChromeVisibility {
    /// Creates the default state: overlays shown, paging enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shown: true,
            paging_enabled: true,
        }
    }

    /// Flips the shown/hidden flag and returns the new value.
    ///
    /// Every call is a real state change, so the caller always redraws and
    /// always forwards to the platform chrome port.
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    /// Whether the top/bottom overlays are currently shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Sets the page-swipe gate; used to disable swiping during video
    /// playback.
    ///
    /// Idempotent: returns `true` only when the value actually changed, so
    /// repeated invocations while a video plays cause no redraw flicker.
    pub fn set_paging_enabled(&mut self, enabled: bool) -> bool {
        if self.paging_enabled == enabled {
            return false;
        }
        self.paging_enabled = enabled;
        true
    }

    /// Whether page swiping is currently allowed.
    #[must_use]
    pub fn paging_enabled(&self) -> bool {
        self.paging_enabled
    }
}

impl Default for ChromeVisibility {
    fn default() -> Self {
        Self::new()
    }
}
