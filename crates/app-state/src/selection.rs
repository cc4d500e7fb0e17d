//! Drag-select gesture tracking.
//!
//! Pressing on a cell toggles it and starts a drag. While the drag is
//! active, every cell the pointer enters is toggled again, once per entry,
//! so sweeping back over a cell flips it back. Releasing the pointer ends
//! the drag without toggling anything.

use sc_common::EditorResult;
use serde::{Deserialize, Serialize};

use crate::grid::PostGrid;

/// Tracks whether a drag-select gesture is in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSelect {
    active: bool,
}

impl DragSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer pressed on `index`: toggle it and start dragging.
    ///
    /// An invalid index leaves both the grid and the drag state untouched.
    pub fn pointer_down(&mut self, grid: &mut PostGrid, index: usize) -> EditorResult<bool> {
        let selected = grid.toggle_selection(index)?;
        self.active = true;
        tracing::debug!(index, "Drag started");
        Ok(selected)
    }

    /// Pointer entered `index`. Toggles only while a drag is active and
    /// returns the new flag; `None` means the event was ignored.
    pub fn pointer_enter(
        &mut self,
        grid: &mut PostGrid,
        index: usize,
    ) -> EditorResult<Option<bool>> {
        if !self.active {
            return Ok(None);
        }
        grid.toggle_selection(index).map(Some)
    }

    /// Pointer released anywhere. Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = std::mem::take(&mut self.active);
        if was_active {
            tracing::debug!("Drag ended");
        }
        was_active
    }

    /// Forget any in-progress drag, e.g. after the grid was replaced.
    pub fn reset(&mut self) {
        self.active = false;
    }
}
