// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! The viewer never copies or mutates media metadata; the asset sequence
//! is fixed for the lifetime of one viewing session.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Stable identifier handed out by the media store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    /// Creates an identifier from its store-side string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Represents different kinds of media items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image (JPEG, PNG, HEIC, etc.)
    Image,
    /// Video with temporal playback.
    Video,
    /// Audio-only asset.
    Audio,
    /// Anything the store cannot classify.
    Other,
}

/// One entry of the viewing session, immutable for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    id: MediaId,
    kind: MediaKind,
}

impl MediaItem {
    /// Creates a new item description.
    #[must_use]
    pub fn new(id: MediaId, kind: MediaKind) -> Self {
        Self { id, kind }
    }

    /// Returns the stable identifier.
    #[must_use]
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    /// Returns the media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

/// An ordered, duplicate-free, non-empty sequence of media items.
///
/// The index domain is `[0, len)`. Items are resolved both by position and
/// by identifier; the identifier map avoids position-based aliasing when
/// selection order and display order diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSequence {
    items: Vec<MediaItem>,
    index_by_id: HashMap<MediaId, usize>,
}

impl AssetSequence {
    /// Builds a sequence, rejecting empty input and duplicate identifiers.
    pub fn new(items: Vec<MediaItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }

        let mut index_by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if index_by_id.insert(item.id().clone(), index).is_some() {
                return Err(Error::DuplicateItem(item.id().clone()));
            }
        }

        Ok(Self { items, index_by_id })
    }

    /// Returns the number of items. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; kept for API symmetry with collection types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Returns the position of `id` within the sequence.
    #[must_use]
    pub fn index_of(&self, id: &MediaId) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Checks whether `id` is a member of the sequence.
    #[must_use]
    pub fn contains(&self, id: &MediaId) -> bool {
        self.index_by_id.contains_key(id)
    }

    /// Iterates the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }
}
