// SPDX-License-Identifier: MPL-2.0
use crate::application::port::media::MediaError;
use crate::domain::media::MediaId;
use std::fmt;

/// Errors surfaced by the viewer core.
///
/// Every variant is scoped to the operation that triggered it; none is
/// fatal to the session. Sub-component failures are returned as values so
/// the coordinator can decide UI treatment without unwinding viewer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An asset sequence was constructed from zero items.
    EmptySequence,

    /// The same identifier appeared twice in a sequence or initial selection.
    DuplicateItem(MediaId),

    /// A page navigation targeted an index outside `[0, len)`.
    /// The prior index is kept and nothing is emitted.
    IndexOutOfRange { index: usize, len: usize },

    /// An identifier that is not a member of the asset sequence.
    UnknownItem(MediaId),

    /// An initial selection exceeded the caller-supplied maximum.
    SelectionOverLimit { count: usize, limit: usize },

    /// A selection operation was attempted in pure preview mode.
    SelectionUnavailable,

    /// Confirm was requested while the selection was empty.
    EmptySelection,

    /// The session already reached a terminal state (confirmed or cancelled).
    SessionClosed,

    /// A per-item failure reported by the media store.
    Media(MediaError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySequence => write!(f, "Asset sequence must not be empty"),
            Error::DuplicateItem(id) => write!(f, "Duplicate item: {id}"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for {len} items")
            }
            Error::UnknownItem(id) => write!(f, "Item not in the asset sequence: {id}"),
            Error::SelectionOverLimit { count, limit } => {
                write!(f, "Initial selection of {count} items exceeds limit {limit}")
            }
            Error::SelectionUnavailable => {
                write!(f, "Selection is unavailable in preview mode")
            }
            Error::EmptySelection => write!(f, "Cannot confirm an empty selection"),
            Error::SessionClosed => write!(f, "Viewing session already ended"),
            Error::Media(e) => write!(f, "Media Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
