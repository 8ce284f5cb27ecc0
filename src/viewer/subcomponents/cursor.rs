// SPDX-License-Identifier: MPL-2.0
//! Page cursor: the current page index and its broadcast channel.
//!
//! Programmatic jumps (`move_to`) and settled swipe gestures
//! (`on_page_settled`) funnel into the same validation and the same
//! emission channel, so subscribers (app bar index label, filmstrip
//! highlight, selection checkbox) never need to distinguish origin.

use crate::error::{Error, Result};
use crate::notify::{Observable, Subscription};

/// Owns the current page index of a viewing session.
#[derive(Debug)]
pub struct PageCursor {
    len: usize,
    channel: Observable<usize>,
}

impl PageCursor {
    /// Creates a cursor over `len` pages positioned at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `start >= len`.
    pub fn new(len: usize, start: usize) -> Result<Self> {
        if start >= len {
            return Err(Error::IndexOutOfRange { index: start, len });
        }
        Ok(Self {
            len,
            channel: Observable::new(start),
        })
    }

    /// The current page index, always within `[0, len)`.
    #[must_use]
    pub fn current(&self) -> usize {
        self.channel.get()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a cursor cannot be constructed over zero pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Programmatic jump to `index`.
    ///
    /// On success the index is updated and exactly one notification
    /// carrying `index` is emitted, even when the index did not change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for an out-of-range target; the
    /// prior index is kept and nothing is emitted.
    pub fn move_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "rejected page move");
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.channel.set(index);
        Ok(())
    }

    /// A swipe gesture settled on `index`.
    ///
    /// Same validation and emission as [`move_to`](Self::move_to); the
    /// gesture origin is not observable downstream.
    pub fn on_page_settled(&mut self, index: usize) -> Result<()> {
        self.move_to(index)
    }

    /// Subscribes to index changes. The current index is replayed
    /// immediately, so late subscribers never see a stale or undefined
    /// value.
    pub fn subscribe(&self, listener: impl FnMut(&usize) + 'static) -> Subscription<usize> {
        self.channel.subscribe(listener)
    }

    /// Detaches all subscribers. Called at terminal session transitions.
    pub fn close(&self) {
        self.channel.close();
    }
}
