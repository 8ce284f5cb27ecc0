// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for values exchanged between the coordinator and the
//! rendering shell, independent of any presentation framework.

use std::fmt;

// =============================================================================
// Point
// =============================================================================

/// A position on the media surface, in surface-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Transform
// =============================================================================

/// The scale transform applied to the displayed image surface.
///
/// Emitted on every zoom animation tick; the anchor is the double-tap
/// position the scale is applied around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Total scale factor. 1.0 is the rest scale.
    pub scale: f32,
    /// Fixed point of the scale operation.
    pub anchor: Point,
}

impl Transform {
    /// The identity transform at rest scale.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            anchor: Point::default(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

// =============================================================================
// SelectionLimit
// =============================================================================

/// Maximum number of selectable items, guaranteed to be at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimit(usize);

impl SelectionLimit {
    /// Creates a limit, raising zero to one.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self(limit.max(1))
    }

    /// Returns the raw limit value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for SelectionLimit {
    /// A single selectable item.
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for SelectionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
