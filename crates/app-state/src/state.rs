//! Central editor state container.
//!
//! `EditorState` holds the live grid, the drag-select tracker, and the
//! design library, and exposes one method per user intent.

use sc_common::{EditorResult, GridConfig};

use crate::grid::{Field, FieldUpdate, PostGrid};
use crate::library::{DesignStore, DesignSummary};
use crate::post::Post;
use crate::selection::DragSelect;
use crate::snapshot::Design;

/// Single source of truth for one editing session.
///
/// The presentation layer reads through the accessor methods and changes
/// state only through the intent methods below (or [`EditorState::apply`]).
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    grid: PostGrid,
    drag: DragSelect,
    designs: DesignStore,
}

impl EditorState {
    /// Start a session on the default 11×11 grid with an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GridConfig) -> EditorResult<Self> {
        Ok(Self {
            grid: PostGrid::with_config(config)?,
            drag: DragSelect::new(),
            designs: DesignStore::new(),
        })
    }

    // --- Views ---

    pub fn grid(&self) -> &PostGrid {
        &self.grid
    }

    pub fn posts(&self) -> &[Post] {
        self.grid.posts()
    }

    pub fn designs(&self) -> &DesignStore {
        &self.designs
    }

    pub fn design_list(&self) -> impl ExactSizeIterator<Item = DesignSummary> + '_ {
        self.designs.list()
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag.is_active()
    }

    // --- Selection intents ---

    pub fn toggle_selection(&mut self, index: usize) -> EditorResult<bool> {
        self.grid.toggle_selection(index)
    }

    pub fn select_all(&mut self) -> usize {
        self.grid.select_all()
    }

    pub fn deselect_all(&mut self) -> usize {
        self.grid.deselect_all()
    }

    pub fn pointer_down(&mut self, index: usize) -> EditorResult<bool> {
        self.drag.pointer_down(&mut self.grid, index)
    }

    pub fn pointer_enter(&mut self, index: usize) -> EditorResult<Option<bool>> {
        self.drag.pointer_enter(&mut self.grid, index)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.drag.pointer_up()
    }

    // --- Edit intents ---

    /// Apply raw UI input to every selected post.
    pub fn update_selected_field(&mut self, field: Field, raw: &str) -> EditorResult<usize> {
        self.grid.update_selected_field(field, raw)
    }

    pub fn update_selected(&mut self, update: FieldUpdate) -> usize {
        self.grid.update_selected(update)
    }

    // --- Design intents ---

    /// Save a copy of the live grid. Returns the new design's position.
    pub fn save_design(&mut self) -> usize {
        self.designs.save(self.grid.snapshot())
    }

    pub fn delete_design(&mut self, index: usize) -> EditorResult<Design> {
        self.designs.delete(index)
    }

    /// Replace the live grid with a copy of the design at `index`.
    ///
    /// Any drag in progress is abandoned.
    pub fn load_design(&mut self, index: usize) -> EditorResult<()> {
        let posts = self.designs.load(index)?;
        self.grid.replace_all(posts)?;
        self.drag.reset();
        tracing::debug!(position = index, "Design loaded");
        Ok(())
    }
}
