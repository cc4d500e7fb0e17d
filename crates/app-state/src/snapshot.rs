//! Saved designs: immutable deep copies of the post collection.
//!
//! A `Design` owns its posts outright. Nothing hands out mutable access to
//! them, and every path back into the live grid goes through a fresh copy, so
//! edits on either side never leak into the other.

use sc_common::EditorResult;
use serde::{Deserialize, Serialize};

use crate::grid::PostGrid;
use crate::post::Post;

/// A frozen copy of every post at the moment it was saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
    posts: Vec<Post>,
}

impl Design {
    /// Capture the grid's current collection.
    pub fn capture(grid: &PostGrid) -> Self {
        Self {
            posts: grid.snapshot(),
        }
    }

    /// Wrap an already-copied collection.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.posts.iter().filter(|p| p.is_selected()).count()
    }

    /// Deep copy of the stored posts.
    pub fn to_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// Replace the grid's collection with a copy of this design.
    pub fn restore(&self, grid: &mut PostGrid) -> EditorResult<()> {
        grid.replace_all(self.to_posts())?;
        tracing::debug!(
            posts = self.posts.len(),
            selected = self.selected_count(),
            "Design restored"
        );
        Ok(())
    }
}
