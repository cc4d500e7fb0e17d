//! Central error type for the editor core (thiserror-based).

use thiserror::Error;

/// Errors surfaced by editor intents.
///
/// Every variant is recoverable: the operation that returned it left all
/// state untouched, so the caller can retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Post index {index} out of range (grid has {len} posts)")]
    PostIndexOutOfRange { index: usize, len: usize },

    #[error("Design index {index} out of range (library has {len} designs)")]
    DesignIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid size value: {input:?}")]
    InvalidSize { input: String },

    #[error("Invalid color value: {input:?} (expected #RGB or #RRGGBB)")]
    InvalidColor { input: String },

    #[error("Post collection shape mismatch: expected {expected}, got {got}")]
    CollectionShape { expected: String, got: String },

    #[error("Invalid grid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl EditorError {
    /// True for the index-out-of-range family (posts or designs).
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::PostIndexOutOfRange { .. } | Self::DesignIndexOutOfRange { .. }
        )
    }

    /// True for rejected values: sizes, colors, and wrong-shape collections.
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            Self::InvalidSize { .. } | Self::InvalidColor { .. } | Self::CollectionShape { .. }
        )
    }
}

/// Convenience Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
