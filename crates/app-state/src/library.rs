//! Ordered library of saved designs.
//!
//! Designs are addressed by their current position only. Deleting an entry
//! shifts every later entry down by one.

use sc_common::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};

use crate::post::Post;
use crate::snapshot::Design;

/// Display row for a saved design.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Current position in the library.
    pub position: usize,
    /// One-based display label, e.g. "Design 1".
    pub label: String,
}

/// Saved designs in save order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignStore {
    designs: Vec<Design>,
}

impl DesignStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Read-only access to a stored design.
    pub fn get(&self, index: usize) -> Option<&Design> {
        self.designs.get(index)
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        if index < self.designs.len() {
            Ok(())
        } else {
            Err(EditorError::DesignIndexOutOfRange {
                index,
                len: self.designs.len(),
            })
        }
    }

    /// Append a design built from `snapshot`. Returns its position.
    pub fn save(&mut self, snapshot: Vec<Post>) -> usize {
        self.designs.push(Design::from_posts(snapshot));
        let position = self.designs.len() - 1;
        tracing::debug!(position, library_len = self.designs.len(), "Design saved");
        position
    }

    /// Remove the design at `index` and return it.
    pub fn delete(&mut self, index: usize) -> EditorResult<Design> {
        self.check_index(index).inspect_err(|err| {
            tracing::warn!(%err, "Design delete rejected");
        })?;
        let design = self.designs.remove(index);
        tracing::debug!(
            position = index,
            library_len = self.designs.len(),
            "Design deleted"
        );
        Ok(design)
    }

    /// Deep copy of the design at `index`, ready for `PostGrid::replace_all`.
    pub fn load(&self, index: usize) -> EditorResult<Vec<Post>> {
        self.check_index(index).inspect_err(|err| {
            tracing::warn!(%err, "Design load rejected");
        })?;
        Ok(self.designs[index].to_posts())
    }

    /// Summaries of the current entries, in order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = DesignSummary> + '_ {
        self.designs.iter().enumerate().map(|(position, _)| DesignSummary {
            position,
            label: format!("Design {}", position + 1),
        })
    }
}
