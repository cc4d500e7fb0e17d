//! Core grid types with newtype pattern for type safety.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GridConfig;
use crate::error::{EditorError, EditorResult};

/// Integer lattice position of a post, centered on (0, 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub z: i32,
}

impl GridPos {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chebyshev distance from the grid center.
    pub fn layer(self) -> u32 {
        self.x.unsigned_abs().max(self.z.unsigned_abs())
    }

    /// Position of the `index`-th post in row-major order (z outer, x inner)
    /// for a grid spanning `-radius..=radius` on both axes.
    pub fn row_major(index: usize, radius: i32) -> Self {
        let side = side_len(radius);
        let x = (index % side) as i32 - radius;
        let z = (index / side) as i32 - radius;
        Self { x, z }
    }

    /// Inverse of [`GridPos::row_major`]. `None` when outside the grid.
    pub fn index(self, radius: i32) -> Option<usize> {
        if radius < 0 || self.layer() > radius.unsigned_abs() {
            return None;
        }
        let side = side_len(radius);
        let col = (i64::from(self.x) + i64::from(radius)) as usize;
        let row = (i64::from(self.z) + i64::from(radius)) as usize;
        Some(row * side + col)
    }
}

fn side_len(radius: i32) -> usize {
    (2 * i64::from(radius.max(0)) + 1) as usize
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Extruded length of a post, always finite and inside the configured bounds.
///
/// Deserialization rejects non-finite values. Bounds depend on the grid, so
/// `PostGrid` checks them when a collection is swapped in.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PostSize(f64);

impl PostSize {
    /// Clamp a numeric value into `config`'s size bounds.
    ///
    /// NaN and infinities are rejected rather than clamped.
    pub fn new(value: f64, config: &GridConfig) -> EditorResult<Self> {
        if !value.is_finite() {
            return Err(EditorError::InvalidSize {
                input: value.to_string(),
            });
        }
        Ok(Self(config.clamp_size(value)))
    }

    /// Parse raw text from a numeric input field, then clamp it.
    pub fn parse_input(input: &str, config: &GridConfig) -> EditorResult<Self> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| EditorError::InvalidSize {
                input: input.to_string(),
            })?;
        if !value.is_finite() {
            return Err(EditorError::InvalidSize {
                input: input.to_string(),
            });
        }
        Ok(Self(config.clamp_size(value)))
    }

    /// Clamp into `config`'s bounds.
    pub(crate) fn clamped(value: f64, config: &GridConfig) -> Self {
        Self(config.clamp_size(value))
    }

    /// Re-clamp into another config's bounds.
    pub fn clamp_to(self, config: &GridConfig) -> Self {
        Self::clamped(self.0, config)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether the value lies inside `config`'s bounds.
    pub fn is_within(self, config: &GridConfig) -> bool {
        (config.min_size..=config.max_size).contains(&self.0)
    }
}

impl TryFrom<f64> for PostSize {
    type Error = EditorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(EditorError::InvalidSize {
                input: value.to_string(),
            })
        }
    }
}

impl From<PostSize> for f64 {
    fn from(size: PostSize) -> Self {
        size.0
    }
}

impl fmt::Display for PostSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
