// SPDX-License-Identifier: MPL-2.0
//! Media store port definition.
//!
//! This module defines the [`MediaStore`] trait for fetching asset data by
//! identifier. The store owns the assets and their metadata; the viewer
//! only reads. Both operations are independent per item and safe to call
//! repeatedly (idempotent reads), so a failed page can be retried without
//! affecting any other page.

use crate::domain::media::MediaId;
use std::fmt;
use std::io::Read;

// =============================================================================
// MediaError
// =============================================================================

/// Errors reported by the media store for a single item.
///
/// Always scoped to the one item that failed; the viewer renders a
/// placeholder for that page and keeps every other page intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The identifier is unknown to the store.
    NotFound,

    /// The asset exists but its format cannot be decoded.
    UnsupportedFormat,

    /// The asset data is corrupted or cannot be read to completion.
    CorruptedData(String),

    /// The underlying storage failed (network, disk, permissions).
    IoError(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound => write!(f, "Asset not found"),
            MediaError::UnsupportedFormat => write!(f, "Unsupported media format"),
            MediaError::CorruptedData(msg) => write!(f, "Corrupted media data: {msg}"),
            MediaError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

// =============================================================================
// MediaStore Trait
// =============================================================================

/// Port for fetching asset data by identifier.
///
/// The embedding application implements this against its asset backend
/// (photo library, remote store, filesystem). Thumbnails come back as
/// encoded bytes; full-resolution assets as a byte stream the page
/// renderer consumes incrementally.
pub trait MediaStore {
    /// Fetches the encoded thumbnail for `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] scoped to this single item.
    fn fetch_thumbnail(&self, id: &MediaId) -> Result<Vec<u8>, MediaError>;

    /// Opens the full-resolution byte stream for `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] scoped to this single item.
    fn fetch_full_resolution(&self, id: &MediaId) -> Result<Box<dyn Read>, MediaError>;
}
