use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CoverError, CoverResult};

pub use kurbo::{Circle, Point, Vec2};

/// Padding in canvas units added beyond every canvas edge before meshing, so
/// triangles never thin out at the visible border.
pub const MESH_PAD: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Immutable per-call generator configuration.
///
/// A config is a pure data value that can be:
/// - built programmatically (see [`CoverConfig::new`])
/// - loaded from JSON via Serde (see [`CoverConfig::from_path`])
///
/// Validity is established once, at construction or load time; a validated
/// config makes [`crate::generate`] total.
pub struct CoverConfig {
    /// Canvas width in user units (`viewBox` width).
    pub width: u32,
    /// Canvas height in user units (`viewBox` height).
    pub height: u32,
    /// Background fill behind both render passes.
    pub background_color: String,
    /// Nominal mesh cell size; actual cells stretch to fit the padded canvas.
    pub base_triangle_size: f64,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            background_color: "#FFFFFF".to_string(),
            base_triangle_size: 45.0,
        }
    }
}

impl CoverConfig {
    /// Build a validated config.
    pub fn new(
        width: u32,
        height: u32,
        background_color: impl Into<String>,
        base_triangle_size: f64,
    ) -> CoverResult<Self> {
        let cfg = Self {
            width,
            height,
            background_color: background_color.into(),
            base_triangle_size,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CoverResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self =
            serde_json::from_slice(&bytes).map_err(|e| CoverError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the invariants [`crate::generate`] relies on.
    pub fn validate(&self) -> CoverResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoverError::validation("canvas dimensions must be > 0"));
        }
        if !self.base_triangle_size.is_finite() || self.base_triangle_size <= 0.0 {
            return Err(CoverError::validation("base_triangle_size must be > 0"));
        }
        if self.base_triangle_size > self.padded_width() || self.base_triangle_size > self.padded_height() {
            return Err(CoverError::validation(
                "base_triangle_size must yield at least one mesh row and column",
            ));
        }
        if self.background_color.is_empty() {
            return Err(CoverError::validation("background_color must not be empty"));
        }
        Ok(())
    }

    /// Canvas center in user units.
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Canvas width plus mesh padding on both sides.
    pub fn padded_width(&self) -> f64 {
        f64::from(self.width) + 2.0 * MESH_PAD
    }

    /// Canvas height plus mesh padding on both sides.
    pub fn padded_height(&self) -> f64 {
        f64::from(self.height) + 2.0 * MESH_PAD
    }
}
