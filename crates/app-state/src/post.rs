//! A single post of the sculpture grid.

use sc_common::{GridPos, HexColor, PostSize};
use serde::{Deserialize, Serialize};

/// One vertical post: fixed lattice position and ring, editable color and
/// size, and a selection flag.
///
/// Position and layer never change after construction. The mutable fields
/// are only written by the grid, so holders of `&Post` see a read-only view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pos: GridPos,
    /// Stored copy of `pos.layer()`.
    layer: u32,
    color: HexColor,
    size: PostSize,
    selected: bool,
}

impl Post {
    /// Create an unselected post. The layer is derived from `pos`.
    pub fn new(pos: GridPos, color: HexColor, size: PostSize) -> Self {
        Self {
            pos,
            layer: pos.layer(),
            color,
            size,
            selected: false,
        }
    }

    /// Builder-style selection flag, mostly useful for assembling fixtures.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn grid_x(&self) -> i32 {
        self.pos.x
    }

    pub fn grid_z(&self) -> i32 {
        self.pos.z
    }

    pub fn layer(&self) -> u32 {
        self.layer
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn size(&self) -> PostSize {
        self.size
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the stored layer still matches the position.
    pub fn is_consistent(&self) -> bool {
        self.layer == self.pos.layer()
    }

    /// Vertical center of the post column for a scene whose posts rest at
    /// `base_height`. Columns hang down from a fixed top, so taller posts
    /// sit lower.
    pub fn center_y(&self, base_height: f64) -> f64 {
        base_height - self.size.get() / 2.0 + 6.0
    }

    pub(crate) fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    pub(crate) fn set_size(&mut self, size: PostSize) {
        self.size = size;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn toggle_selected(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_common::GridConfig;

    fn post_at(x: i32, z: i32) -> Post {
        let cfg = GridConfig::default();
        Post::new(
            GridPos::new(x, z),
            HexColor::from_rgb(1, 2, 3),
            cfg.initial_post_size(),
        )
    }

    #[test]
    fn new_derives_layer() {
        let p = post_at(-3, 1);
        assert_eq!(p.layer(), 3);
        assert_eq!(p.grid_x(), -3);
        assert_eq!(p.grid_z(), 1);
        assert!(!p.is_selected());
        assert!(p.is_consistent());
    }

    #[test]
    fn toggle_flips_only_selection() {
        let mut p = post_at(2, 2);
        let before = p.clone();
        assert!(p.toggle_selected());
        assert_eq!(p.color(), before.color());
        assert_eq!(p.size(), before.size());
        assert!(!p.toggle_selected());
        assert_eq!(p, before);
    }

    #[test]
    fn center_y_matches_scene_layout() {
        let p = post_at(0, 0);
        // size 12 at base 4 -> 4 - 6 + 6
        assert_eq!(p.center_y(4.0), 4.0);
    }

    #[test]
    fn deserialized_layer_is_checked() {
        let json = r##"{"pos":{"x":4,"z":0},"layer":1,"color":"#FFFFFF","size":3.0,"selected":true}"##;
        let p: Post = serde_json::from_str(json).unwrap();
        assert!(!p.is_consistent());
        assert!(p.is_selected());
    }
}
