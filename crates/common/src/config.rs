//! Grid configuration: lattice extent, size bounds, and the initial palette.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::{EditorError, EditorResult};
use crate::types::PostSize;

/// Largest accepted grid radius (a 2049×2049 lattice).
pub const MAX_RADIUS: i32 = 1024;

/// Configuration for a post grid.
///
/// The default describes the 11×11 sculpture: posts at every integer
/// position in `-5..=5` on both axes, all 12 units tall, banded red/green/blue
/// by ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Half-extent of the grid. Positions span `-radius..=radius`.
    pub radius: i32,
    /// Size given to every post at initialization.
    pub initial_size: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Resting height of the post columns, used by 3D renderers.
    pub base_height: f64,
    /// Initial colors, indexed by `layer % 3`.
    pub palette: [HexColor; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 5,
            initial_size: 12.0,
            min_size: 1.0,
            max_size: 20.0,
            base_height: 4.0,
            palette: [
                HexColor::from_rgb(0xFF, 0x55, 0x55),
                HexColor::from_rgb(0x55, 0xFF, 0x55),
                HexColor::from_rgb(0x55, 0x55, 0xFF),
            ],
        }
    }
}

impl GridConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> EditorResult<()> {
        let invalid = |reason: String| Err(EditorError::InvalidConfig { reason });

        if !(0..=MAX_RADIUS).contains(&self.radius) {
            return invalid(format!(
                "radius must be in [0, {MAX_RADIUS}], got {}",
                self.radius
            ));
        }
        if !self.min_size.is_finite() || !self.max_size.is_finite() {
            return invalid("size bounds must be finite".to_string());
        }
        if self.min_size > self.max_size {
            return invalid(format!(
                "min_size {} exceeds max_size {}",
                self.min_size, self.max_size
            ));
        }
        if !(self.min_size..=self.max_size).contains(&self.initial_size) {
            return invalid(format!(
                "initial_size {} outside [{}, {}]",
                self.initial_size, self.min_size, self.max_size
            ));
        }
        if !self.base_height.is_finite() {
            return invalid("base_height must be finite".to_string());
        }
        Ok(())
    }

    /// Posts per row (and per column).
    pub fn side(&self) -> usize {
        (2 * i64::from(self.radius.max(0)) + 1) as usize
    }

    /// Total number of posts in the grid. Saturates for radii that
    /// `validate` rejects.
    pub fn post_count(&self) -> usize {
        self.side().saturating_mul(self.side())
    }

    /// Clamp a size into `[min_size, max_size]`. Never panics, even on
    /// inverted bounds.
    pub fn clamp_size(&self, value: f64) -> f64 {
        value.max(self.min_size).min(self.max_size)
    }

    /// Size given to freshly initialized posts, clamped into bounds.
    pub fn initial_post_size(&self) -> PostSize {
        PostSize::clamped(self.initial_size, self)
    }

    /// Initial color for a post on the given ring.
    pub fn layer_color(&self, layer: u32) -> HexColor {
        self.palette[(layer % 3) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GridConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.side(), 11);
        assert_eq!(cfg.post_count(), 121);
        assert_eq!(cfg.initial_post_size().get(), 12.0);
    }

    #[test]
    fn layer_color_cycles() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.layer_color(0).to_string(), "#FF5555");
        assert_eq!(cfg.layer_color(1).to_string(), "#55FF55");
        assert_eq!(cfg.layer_color(2).to_string(), "#5555FF");
        assert_eq!(cfg.layer_color(3), cfg.layer_color(0));
        assert_eq!(cfg.layer_color(5), cfg.layer_color(2));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            GridConfig {
                radius: -1,
                ..GridConfig::default()
            },
            GridConfig {
                min_size: 10.0,
                max_size: 5.0,
                initial_size: 7.0,
                ..GridConfig::default()
            },
            GridConfig {
                initial_size: 30.0,
                ..GridConfig::default()
            },
            GridConfig {
                max_size: f64::INFINITY,
                ..GridConfig::default()
            },
        ];
        for cfg in bad {
            assert!(matches!(
                cfg.validate(),
                Err(EditorError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn validate_rejects_oversized_radius() {
        for radius in [MAX_RADIUS + 1, i32::MAX] {
            let cfg = GridConfig {
                radius,
                ..GridConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(EditorError::InvalidConfig { .. })
            ));
            // Extent helpers stay panic-free on rejected configs.
            assert!(cfg.side() > 0);
            assert!(cfg.post_count() >= cfg.side());
        }

        let widest = GridConfig {
            radius: MAX_RADIUS,
            ..GridConfig::default()
        };
        widest.validate().unwrap();
        assert_eq!(widest.side(), 2049);
    }

    #[test]
    fn zero_radius_is_a_single_post() {
        let cfg = GridConfig {
            radius: 0,
            ..GridConfig::default()
        };
        cfg.validate().unwrap();
        assert_eq!(cfg.post_count(), 1);
    }

    #[test]
    fn deserialize_partial_uses_defaults() {
        let cfg: GridConfig =
            serde_json::from_str(r##"{"radius": 2, "palette": ["#000", "#FFF", "#808080"]}"##)
                .unwrap();
        assert_eq!(cfg.radius, 2);
        assert_eq!(cfg.post_count(), 25);
        assert_eq!(cfg.initial_size, 12.0);
        assert_eq!(cfg.palette[1].to_string(), "#FFFFFF");
    }
}
