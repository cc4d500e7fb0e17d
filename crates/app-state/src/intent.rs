//! User intents and their dispatch.
//!
//! The presentation layer turns clicks, drags, and form input into
//! [`Intent`] values and hands them to [`EditorState::apply`] one at a time.
//! Each intent runs to completion: it either succeeds, or fails with no
//! change to state.

use sc_common::EditorResult;
use serde::{Deserialize, Serialize};

use crate::grid::{Field, FieldUpdate};
use crate::state::EditorState;

/// A single user action aimed at the editor core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    ToggleSelection { index: usize },
    SelectAll,
    DeselectAll,
    /// Raw form input for one field, validated on apply.
    UpdateSelectedField { field: Field, value: String },
    /// An already-typed update.
    UpdateSelected(FieldUpdate),
    PointerDown { index: usize },
    PointerEnter { index: usize },
    PointerUp,
    SaveDesign,
    DeleteDesign { index: usize },
    LoadDesign { index: usize },
}

/// What an applied intent did, for the caller to surface to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    /// Selection flags changed on `changed` posts.
    Selection { changed: usize },
    /// A bulk update reached `count` selected posts.
    Updated { count: usize },
    DesignSaved { position: usize },
    DesignDeleted { position: usize },
    DesignLoaded { position: usize },
    /// A release ended the drag in progress. No flags changed.
    DragEnded,
    /// The intent had nothing to act on (pointer moves with no drag, or a
    /// release with no drag in progress).
    Ignored,
}

impl EditorState {
    /// Dispatch one intent.
    pub fn apply(&mut self, intent: Intent) -> EditorResult<IntentOutcome> {
        tracing::trace!(?intent, "Applying intent");
        let outcome = match intent {
            Intent::ToggleSelection { index } => {
                self.toggle_selection(index)?;
                IntentOutcome::Selection { changed: 1 }
            }
            Intent::SelectAll => IntentOutcome::Selection {
                changed: self.select_all(),
            },
            Intent::DeselectAll => IntentOutcome::Selection {
                changed: self.deselect_all(),
            },
            Intent::UpdateSelectedField { field, value } => IntentOutcome::Updated {
                count: self.update_selected_field(field, &value)?,
            },
            Intent::UpdateSelected(update) => IntentOutcome::Updated {
                count: self.update_selected(update),
            },
            Intent::PointerDown { index } => {
                self.pointer_down(index)?;
                IntentOutcome::Selection { changed: 1 }
            }
            Intent::PointerEnter { index } => match self.pointer_enter(index)? {
                Some(_) => IntentOutcome::Selection { changed: 1 },
                None => IntentOutcome::Ignored,
            },
            Intent::PointerUp => {
                if self.pointer_up() {
                    IntentOutcome::DragEnded
                } else {
                    IntentOutcome::Ignored
                }
            }
            Intent::SaveDesign => IntentOutcome::DesignSaved {
                position: self.save_design(),
            },
            Intent::DeleteDesign { index } => {
                self.delete_design(index)?;
                IntentOutcome::DesignDeleted { position: index }
            }
            Intent::LoadDesign { index } => {
                self.load_design(index)?;
                IntentOutcome::DesignLoaded { position: index }
            }
        };
        Ok(outcome)
    }
}
