// SPDX-License-Identifier: MPL-2.0
//! Input contract from the caller that launches the viewer.
//!
//! An ordered, non-empty asset sequence; an optional initial selection
//! whose presence enables selection mode (with a required maximum count);
//! and a starting page index defaulting to 0. Everything is validated when
//! the session opens, before any state is built.

use crate::domain::media::{AssetSequence, MediaId};
use crate::domain::ui::SelectionLimit;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Selection-mode configuration: the caller's prior selection and the
/// maximum count policy it owns.
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// Items already selected before the viewer opened.
    pub initial: Vec<MediaId>,
    /// Maximum number of selectable items.
    pub limit: SelectionLimit,
}

/// Everything the caller supplies to open a viewing session.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    sequence: AssetSequence,
    selection: Option<SelectionOptions>,
    start_index: usize,
}

impl ViewerOptions {
    /// Pure preview mode over `sequence`, starting at page 0.
    #[must_use]
    pub fn new(sequence: AssetSequence) -> Self {
        Self {
            sequence,
            selection: None,
            start_index: 0,
        }
    }

    /// Sets the starting page index (bounds-checked at open).
    #[must_use]
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Enables selection mode with the caller's prior selection and
    /// maximum count.
    #[must_use]
    pub fn with_selection(mut self, initial: Vec<MediaId>, limit: SelectionLimit) -> Self {
        self.selection = Some(SelectionOptions { initial, limit });
        self
    }

    /// The asset sequence for the session.
    #[must_use]
    pub fn sequence(&self) -> &AssetSequence {
        &self.sequence
    }

    /// Selection-mode configuration, if enabled.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectionOptions> {
        self.selection.as_ref()
    }

    /// The starting page index.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Checks the whole input contract.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] when the start index is out of bounds;
    /// - [`Error::UnknownItem`] when an initial selection id is not in the
    ///   sequence;
    /// - [`Error::DuplicateItem`] when the initial selection repeats an id;
    /// - [`Error::SelectionOverLimit`] when the initial selection exceeds
    ///   the maximum count.
    pub fn validate(&self) -> Result<()> {
        if self.start_index >= self.sequence.len() {
            return Err(Error::IndexOutOfRange {
                index: self.start_index,
                len: self.sequence.len(),
            });
        }

        if let Some(selection) = &self.selection {
            let mut seen = HashSet::with_capacity(selection.initial.len());
            for id in &selection.initial {
                if !self.sequence.contains(id) {
                    return Err(Error::UnknownItem(id.clone()));
                }
                if !seen.insert(id) {
                    return Err(Error::DuplicateItem(id.clone()));
                }
            }
            if selection.initial.len() > selection.limit.value() {
                return Err(Error::SelectionOverLimit {
                    count: selection.initial.len(),
                    limit: selection.limit.value(),
                });
            }
        }

        Ok(())
    }

    /// Splits the options into the pieces the coordinator owns.
    pub(crate) fn into_parts(self) -> (AssetSequence, Option<SelectionOptions>, usize) {
        (self.sequence, self.selection, self.start_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaItem, MediaKind};

    fn sequence(names: &[&str]) -> AssetSequence {
        AssetSequence::new(
            names
                .iter()
                .map(|n| MediaItem::new(MediaId::new(*n), MediaKind::Image))
                .collect(),
        )
        .expect("valid sequence")
    }

    #[test]
    fn preview_options_validate() {
        let options = ViewerOptions::new(sequence(&["a", "b"]));
        assert!(options.validate().is_ok());
        assert_eq!(options.start_index(), 0);
        assert!(options.selection().is_none());
    }

    #[test]
    fn start_index_must_be_in_bounds() {
        let options = ViewerOptions::new(sequence(&["a", "b"])).with_start_index(2);
        assert_eq!(
            options.validate().unwrap_err(),
            Error::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn initial_selection_must_be_members() {
        let options = ViewerOptions::new(sequence(&["a", "b"]))
            .with_selection(vec![MediaId::new("z")], SelectionLimit::new(3));
        assert_eq!(
            options.validate().unwrap_err(),
            Error::UnknownItem(MediaId::new("z"))
        );
    }

    #[test]
    fn initial_selection_must_be_duplicate_free() {
        let options = ViewerOptions::new(sequence(&["a", "b"])).with_selection(
            vec![MediaId::new("a"), MediaId::new("a")],
            SelectionLimit::new(3),
        );
        assert_eq!(
            options.validate().unwrap_err(),
            Error::DuplicateItem(MediaId::new("a"))
        );
    }

    #[test]
    fn initial_selection_must_fit_the_limit() {
        let options = ViewerOptions::new(sequence(&["a", "b", "c"])).with_selection(
            vec![MediaId::new("a"), MediaId::new("b"), MediaId::new("c")],
            SelectionLimit::new(2),
        );
        assert_eq!(
            options.validate().unwrap_err(),
            Error::SelectionOverLimit { count: 3, limit: 2 }
        );
    }
}
