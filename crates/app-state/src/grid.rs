//! The live post grid: ordered posts, their selection flags, and bulk edits
//! applied to the current selection.

use sc_common::{EditorError, EditorResult, GridConfig, GridPos, HexColor, PostSize};
use serde::{Deserialize, Serialize};

use crate::post::Post;

/// The editable fields a bulk update can target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Color,
    Size,
}

/// A typed, already-validated bulk update.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Color(HexColor),
    Size(PostSize),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            Self::Color(_) => Field::Color,
            Self::Size(_) => Field::Size,
        }
    }
}

/// Owns the ordered post collection for one editing session.
///
/// Posts are stored in row-major order (z outer, x inner), which is also the
/// index used to address them. The collection is only replaced wholesale by
/// [`PostGrid::replace_all`].
#[derive(Clone, Debug, PartialEq)]
pub struct PostGrid {
    config: GridConfig,
    posts: Vec<Post>,
}

impl Default for PostGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PostGrid {
    /// Create the default 11×11 grid.
    pub fn new() -> Self {
        let config = GridConfig::default();
        let posts = Self::initial_posts(&config);
        Self { config, posts }
    }

    /// Create a grid from a custom configuration.
    pub fn with_config(config: GridConfig) -> EditorResult<Self> {
        config.validate()?;
        let posts = Self::initial_posts(&config);
        Ok(Self { config, posts })
    }

    /// The deterministic starting collection for `config`: every lattice
    /// position once, colored by ring, all at the initial size, none selected.
    pub fn initial_posts(config: &GridConfig) -> Vec<Post> {
        let size = config.initial_post_size();
        let posts: Vec<Post> = (0..config.post_count())
            .map(|i| {
                let pos = GridPos::row_major(i, config.radius);
                Post::new(pos, config.layer_color(pos.layer()), size)
            })
            .collect();

        tracing::info!(
            count = posts.len(),
            radius = config.radius,
            "Post grid initialized"
        );
        posts
    }

    /// Discard all edits and return to the initial collection.
    pub fn reset(&mut self) {
        self.posts = Self::initial_posts(&self.config);
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Read-only view of the posts in addressing order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Index of the post at `pos`, if it lies inside the grid.
    pub fn index_of(&self, pos: GridPos) -> Option<usize> {
        pos.index(self.config.radius)
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        if index < self.posts.len() {
            Ok(())
        } else {
            Err(EditorError::PostIndexOutOfRange {
                index,
                len: self.posts.len(),
            })
        }
    }

    // --- Selection ---

    /// Flip the selection flag of one post. Returns the new flag.
    pub fn toggle_selection(&mut self, index: usize) -> EditorResult<bool> {
        self.check_index(index).inspect_err(|err| {
            tracing::warn!(%err, "Toggle rejected");
        })?;
        let selected = self.posts[index].toggle_selected();
        tracing::debug!(index, selected, "Selection toggled");
        Ok(selected)
    }

    /// Select every post. Returns how many flags changed.
    pub fn select_all(&mut self) -> usize {
        let changed = self.set_all_selected(true);
        tracing::debug!(changed, "Selected all posts");
        changed
    }

    /// Clear every selection flag. Returns how many flags changed.
    pub fn deselect_all(&mut self) -> usize {
        let changed = self.set_all_selected(false);
        tracing::debug!(changed, "Deselected all posts");
        changed
    }

    fn set_all_selected(&mut self, selected: bool) -> usize {
        let mut changed = 0;
        for post in self.posts.iter_mut().filter(|p| p.is_selected() != selected) {
            post.set_selected(selected);
            changed += 1;
        }
        changed
    }

    /// Positions of the selected posts, in order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.posts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_selected())
            .map(|(i, _)| i)
    }

    pub fn selected_posts(&self) -> impl Iterator<Item = &Post> + '_ {
        self.posts.iter().filter(|p| p.is_selected())
    }

    pub fn selected_count(&self) -> usize {
        self.selected_posts().count()
    }

    // --- Bulk edits ---

    /// Validate raw UI input for `field` against this grid's bounds.
    pub fn parse_field(&self, field: Field, raw: &str) -> EditorResult<FieldUpdate> {
        match field {
            Field::Color => HexColor::parse(raw).map(FieldUpdate::Color),
            Field::Size => PostSize::parse_input(raw, &self.config).map(FieldUpdate::Size),
        }
    }

    /// Build a size update from a number, clamping it into bounds.
    pub fn size_update(&self, value: f64) -> EditorResult<FieldUpdate> {
        PostSize::new(value, &self.config).map(FieldUpdate::Size)
    }

    /// Apply `update` to every selected post. Returns how many were updated;
    /// zero when nothing is selected.
    ///
    /// Sizes are re-clamped to this grid's bounds first.
    pub fn update_selected(&mut self, update: FieldUpdate) -> usize {
        let update = match update {
            FieldUpdate::Size(size) => FieldUpdate::Size(size.clamp_to(&self.config)),
            other => other,
        };
        let mut count = 0;
        for post in self.posts.iter_mut().filter(|p| p.is_selected()) {
            match update {
                FieldUpdate::Color(color) => post.set_color(color),
                FieldUpdate::Size(size) => post.set_size(size),
            }
            count += 1;
        }
        tracing::debug!(field = ?update.field(), count, "Selected posts updated");
        count
    }

    /// Parse `raw` for `field`, then apply it to the selection.
    ///
    /// Validation happens before any post is touched, so invalid input
    /// leaves the grid unchanged.
    pub fn update_selected_field(&mut self, field: Field, raw: &str) -> EditorResult<usize> {
        let update = self.parse_field(field, raw).inspect_err(|err| {
            tracing::warn!(?field, %err, "Bulk update rejected");
        })?;
        Ok(self.update_selected(update))
    }

    // --- Whole-collection operations ---

    /// Deep, independent copy of the current collection.
    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// Swap in an entirely new collection.
    ///
    /// The replacement must have this grid's length, every post must sit at
    /// the position its index implies, each stored layer must match its
    /// position, and every size must lie inside this grid's bounds.
    /// Otherwise nothing changes.
    pub fn replace_all(&mut self, posts: Vec<Post>) -> EditorResult<()> {
        self.check_shape(&posts).inspect_err(|err| {
            tracing::warn!(%err, "Collection replacement rejected");
        })?;
        self.posts = posts;
        tracing::debug!(
            count = self.posts.len(),
            selected = self.selected_count(),
            "Post collection replaced"
        );
        Ok(())
    }

    fn check_shape(&self, posts: &[Post]) -> EditorResult<()> {
        let expected = self.config.post_count();
        if posts.len() != expected {
            return Err(EditorError::CollectionShape {
                expected: format!("{expected} posts"),
                got: format!("{} posts", posts.len()),
            });
        }

        for (i, post) in posts.iter().enumerate() {
            let want = GridPos::row_major(i, self.config.radius);
            if post.pos() != want {
                return Err(EditorError::CollectionShape {
                    expected: format!("post {i} at {want}"),
                    got: format!("post {i} at {}", post.pos()),
                });
            }
            if !post.is_consistent() {
                return Err(EditorError::CollectionShape {
                    expected: format!("post {i} on layer {}", post.pos().layer()),
                    got: format!("post {i} on layer {}", post.layer()),
                });
            }
            if !post.size().is_within(&self.config) {
                return Err(EditorError::CollectionShape {
                    expected: format!(
                        "post {i} size in [{}, {}]",
                        self.config.min_size, self.config.max_size
                    ),
                    got: format!("post {i} size {}", post.size()),
                });
            }
        }
        Ok(())
    }
}
