//! `sc-app-state` — Selection and design state for the post sculpture editor.
//!
//! This crate provides:
//!
//! - **`PostGrid`**: The live, ordered grid of posts with selection flags and bulk edits.
//! - **`DragSelect`**: Press-and-sweep selection gesture tracking.
//! - **`Design`**: An immutable deep copy of the post collection.
//! - **`DesignStore`**: Ordered library of saved designs (save/load/delete by position).
//! - **`EditorState`** / **`Intent`**: The session container and its intent dispatch.
//!
//! # Architecture
//!
//! ```text
//! EditorState (central state)
//! ├── grid: PostGrid          (121 posts, row-major)
//! ├── drag: DragSelect        (drag-select in progress?)
//! └── designs: DesignStore    (saved Designs, save order)
//!
//! Intent ──apply──▶ EditorState ──▶ IntentOutcome | EditorError
//! ```

pub mod grid;
pub mod intent;
pub mod library;
pub mod post;
pub mod selection;
pub mod snapshot;
pub mod state;

// Re-export primary types at crate root for convenience.
pub use grid::{Field, FieldUpdate, PostGrid};
pub use intent::{Intent, IntentOutcome};
pub use library::{DesignStore, DesignSummary};
pub use post::Post;
pub use selection::DragSelect;
pub use snapshot::Design;
pub use state::EditorState;
