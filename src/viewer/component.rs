// SPDX-License-Identifier: MPL-2.0
//! Viewer coordinator: composes the sub-components into one viewing
//! session.
//!
//! User input is dispatched to the owning sub-component, which mutates its
//! state and emits on its own channel; only the sub-views subscribed to
//! that channel re-render. The coordinator also runs the session phase
//! machine and the finalize/cancel protocol with the caller: the outcome
//! future resolves exactly once, at the terminal transition, and every
//! notification channel is detached synchronously before state release.

use crate::application::port::{MediaStore, SystemChrome};
use crate::domain::media::{AssetSequence, MediaId, MediaItem};
use crate::domain::ui::{Point, Transform};
use crate::error::{Error, Result};
use crate::notify::Subscription;
use crate::viewer::options::ViewerOptions;
use crate::viewer::subcomponents::chrome::ChromeVisibility;
use crate::viewer::subcomponents::cursor::PageCursor;
use crate::viewer::subcomponents::selection::{SelectionLedger, ToggleOutcome};
use crate::viewer::subcomponents::zoom::ZoomGestureController;
use std::io::Read;
use std::rc::Rc;
use std::time::Instant;
use tokio::sync::oneshot;

/// How a viewing session ended, delivered through the outcome future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user confirmed; identifiers are in selection order.
    Confirmed(Vec<MediaId>),
    /// The user dismissed the viewer; the caller keeps its prior selection.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Viewing,
    Finalizing,
    Cancelled,
}

/// One viewing session over a fixed asset sequence.
pub struct ViewerCoordinator {
    phase: Phase,
    sequence: AssetSequence,
    cursor: PageCursor,
    selection: Option<SelectionLedger>,
    chrome: ChromeVisibility,
    zoom: ZoomGestureController,
    platform: Rc<dyn SystemChrome>,
    store: Rc<dyn MediaStore>,
    outcome: Option<oneshot::Sender<SessionOutcome>>,
}

impl ViewerCoordinator {
    /// Opens a viewing session.
    ///
    /// Validates the whole input contract before any state is built and
    /// returns the coordinator together with the outcome future, which
    /// resolves only at the finalize/cancel transition.
    ///
    /// # Errors
    ///
    /// Any [`ViewerOptions::validate`] failure.
    pub fn open(
        options: ViewerOptions,
        platform: Rc<dyn SystemChrome>,
        store: Rc<dyn MediaStore>,
    ) -> Result<(Self, oneshot::Receiver<SessionOutcome>)> {
        options.validate()?;
        let (sequence, selection, start_index) = options.into_parts();

        let cursor = PageCursor::new(sequence.len(), start_index)?;
        let selection =
            selection.map(|opts| SelectionLedger::new(opts.initial, opts.limit));

        tracing::debug!(
            items = sequence.len(),
            start_index,
            selection_mode = selection.is_some(),
            "viewing session opened"
        );

        let (tx, rx) = oneshot::channel();
        Ok((
            Self {
                phase: Phase::Viewing,
                sequence,
                cursor,
                selection,
                chrome: ChromeVisibility::new(),
                zoom: ZoomGestureController::new(),
                platform,
                store,
                outcome: Some(tx),
            },
            rx,
        ))
    }

    fn ensure_viewing(&self) -> Result<()> {
        if self.phase == Phase::Viewing {
            Ok(())
        } else {
            Err(Error::SessionClosed)
        }
    }

    // -------------------------------------------------------------------
    // Page navigation
    // -------------------------------------------------------------------

    /// Programmatic jump to `index`.
    pub fn navigate_to(&mut self, index: usize) -> Result<()> {
        self.ensure_viewing()?;
        self.cursor.move_to(index)?;
        tracing::trace!(index, "page moved");
        Ok(())
    }

    /// A swipe gesture settled on `index`.
    pub fn page_settled(&mut self, index: usize) -> Result<()> {
        self.ensure_viewing()?;
        self.cursor.on_page_settled(index)?;
        tracing::trace!(index, "page settled");
        Ok(())
    }

    /// The current page index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor.current()
    }

    /// The currently displayed item.
    #[must_use]
    pub fn current_item(&self) -> &MediaItem {
        // The cursor index is always within the sequence bounds.
        self.sequence
            .get(self.cursor.current())
            .unwrap_or_else(|| unreachable!("cursor index is always in bounds"))
    }

    /// The item at `index`, if in range.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&MediaItem> {
        self.sequence.get(index)
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always `false`; the sequence is non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Subscribes to page-index changes with immediate replay.
    pub fn subscribe_page(
        &self,
        listener: impl FnMut(&usize) + 'static,
    ) -> Subscription<usize> {
        self.cursor.subscribe(listener)
    }

    // -------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------

    /// Toggles `id` in the selection.
    ///
    /// # Errors
    ///
    /// [`Error::SelectionUnavailable`] in preview mode,
    /// [`Error::UnknownItem`] for an id outside the sequence,
    /// [`Error::SessionClosed`] after a terminal transition.
    pub fn toggle_selection(&mut self, id: &MediaId) -> Result<ToggleOutcome> {
        self.ensure_viewing()?;
        if !self.sequence.contains(id) {
            return Err(Error::UnknownItem(id.clone()));
        }
        let ledger = self
            .selection
            .as_mut()
            .ok_or(Error::SelectionUnavailable)?;

        let outcome = ledger.toggle(id);
        tracing::trace!(%id, ?outcome, count = ledger.len(), "selection toggled");
        Ok(outcome)
    }

    /// Whether `id` is currently selected. Always `false` in preview mode.
    #[must_use]
    pub fn is_selected(&self, id: &MediaId) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|ledger| ledger.contains(id))
    }

    /// Number of selected items. Zero in preview mode.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selection.as_ref().map_or(0, SelectionLedger::len)
    }

    /// Whether the session was opened with selection capability.
    #[must_use]
    pub fn selection_mode(&self) -> bool {
        self.selection.is_some()
    }

    /// Subscribes to selection snapshots; `None` in preview mode.
    pub fn subscribe_selection(
        &self,
        listener: impl FnMut(&Vec<MediaId>) + 'static,
    ) -> Option<Subscription<Vec<MediaId>>> {
        self.selection.as_ref().map(|l| l.subscribe(listener))
    }

    // -------------------------------------------------------------------
    // Chrome
    // -------------------------------------------------------------------

    /// Toggles the top/bottom overlays and mirrors the change to the
    /// platform chrome (fire-and-forget). Returns the new shown flag; the
    /// caller performs a full redraw of the chrome.
    pub fn toggle_chrome(&mut self) -> Result<bool> {
        self.ensure_viewing()?;
        let shown = self.chrome.toggle();
        if shown {
            self.platform.restore_system_overlays();
        } else {
            self.platform.hide_system_overlays();
        }
        Ok(shown)
    }

    /// Whether the overlays are currently shown.
    #[must_use]
    pub fn chrome_shown(&self) -> bool {
        self.chrome.is_shown()
    }

    /// Gates page swiping; used while a video plays. Returns whether the
    /// value changed (idempotent sets need no redraw).
    pub fn set_paging_enabled(&mut self, enabled: bool) -> Result<bool> {
        self.ensure_viewing()?;
        Ok(self.chrome.set_paging_enabled(enabled))
    }

    /// Whether page swiping is currently allowed.
    #[must_use]
    pub fn paging_enabled(&self) -> bool {
        self.chrome.paging_enabled()
    }

    // -------------------------------------------------------------------
    // Zoom
    // -------------------------------------------------------------------

    /// Routes a double-tap on the image surface to the zoom controller.
    pub fn double_tap(&mut self, at: Point, now: Instant) -> Result<()> {
        self.ensure_viewing()?;
        self.zoom.double_tap(at, now);
        Ok(())
    }

    /// Advances the zoom animation; called by the frame clock. Returns
    /// whether another frame is needed.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        self.ensure_viewing()?;
        Ok(self.zoom.tick(now))
    }

    /// Whether a zoom animation is in flight.
    #[must_use]
    pub fn is_zoom_animating(&self) -> bool {
        self.zoom.is_animating()
    }

    /// Subscribes the image surface to scale transforms with immediate
    /// replay.
    pub fn subscribe_transform(
        &self,
        listener: impl FnMut(&Transform) + 'static,
    ) -> Subscription<Transform> {
        self.zoom.subscribe(listener)
    }

    // -------------------------------------------------------------------
    // Media store access
    // -------------------------------------------------------------------

    /// Fetches the thumbnail for the page at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for a bad index; [`Error::Media`] for a
    /// store failure, scoped to this page only.
    pub fn thumbnail(&self, index: usize) -> Result<Vec<u8>> {
        let item = self.item_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.sequence.len(),
        })?;
        Ok(self.store.fetch_thumbnail(item.id())?)
    }

    /// Opens the full-resolution stream for the page at `index`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`thumbnail`](Self::thumbnail).
    pub fn full_resolution(&self, index: usize) -> Result<Box<dyn Read>> {
        let item = self.item_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.sequence.len(),
        })?;
        Ok(self.store.fetch_full_resolution(item.id())?)
    }

    // -------------------------------------------------------------------
    // Terminal transitions
    // -------------------------------------------------------------------

    /// Confirms the selection and ends the session.
    ///
    /// Returns the final selection in selection order; the same snapshot
    /// resolves the outcome future.
    ///
    /// # Errors
    ///
    /// [`Error::SelectionUnavailable`] in preview mode,
    /// [`Error::EmptySelection`] with nothing selected,
    /// [`Error::SessionClosed`] after a terminal transition.
    pub fn confirm(&mut self) -> Result<Vec<MediaId>> {
        self.ensure_viewing()?;
        let ledger = self
            .selection
            .as_ref()
            .ok_or(Error::SelectionUnavailable)?;
        if ledger.is_empty() {
            return Err(Error::EmptySelection);
        }

        let snapshot = ledger.snapshot();
        self.finish(Phase::Finalizing, SessionOutcome::Confirmed(snapshot.clone()));
        Ok(snapshot)
    }

    /// Dismisses the viewer (back navigation) and ends the session with no
    /// selection change for the caller.
    pub fn dismiss(&mut self) -> Result<()> {
        self.ensure_viewing()?;
        self.finish(Phase::Cancelled, SessionOutcome::Cancelled);
        Ok(())
    }

    /// Detaches every listener synchronously, restores system overlays if
    /// the session hid them, then resolves the outcome future. No callback
    /// can fire against session state after this returns.
    fn finish(&mut self, phase: Phase, outcome: SessionOutcome) {
        self.cursor.close();
        if let Some(ledger) = &self.selection {
            ledger.close();
        }
        self.zoom.cancel();

        if !self.chrome.is_shown() {
            self.platform.restore_system_overlays();
        }

        self.phase = phase;
        tracing::debug!(?phase, "viewing session ended");

        if let Some(tx) = self.outcome.take() {
            // The caller may have dropped the receiver; nothing to do then.
            let _ = tx.send(outcome);
        }
    }
}
