//! Settings for [`BoxEditor`](crate::editor::BoxEditor).

use crate::math::{FreeCoordinate, Grid, GridSizeError};

/// Options that control the geometry of editing, fixed for the life of a
/// [`BoxEditor`](crate::editor::BoxEditor).
///
/// Serialized field by field; missing fields take their default values.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct EditorConfig {
    /// Dimensions of the grid that boxes are drawn in: width, height, and depth.
    pub grid_size: [FreeCoordinate; 3],

    /// Spacing that box faces snap to.
    pub step: FreeCoordinate,

    /// Smallest thickness that resizing will reduce a box to.
    ///
    /// Boxes thinner than this, such as boxes appended by the host, are never made
    /// thicker by resizing; they simply cannot be made thinner.
    pub min_thickness: FreeCoordinate,

    /// Whether translated boxes are kept inside the grid.
    /// If false, boxes may be moved partly or entirely outside it.
    pub confine_translation: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: [40.0, 20.0, 20.0],
            step: 1.0,
            min_thickness: 1.0,
            confine_translation: false,
        }
    }
}

impl EditorConfig {
    /// Returns the [`Grid`] these settings describe, or an error if any setting is
    /// unusable.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let [width, height, depth] = self.grid_size;
        let grid = Grid::new(width, height, depth).map_err(ConfigError::Grid)?;

        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::Step(self.step));
        }

        let smallest_extent = width.min(height).min(depth);
        if !(self.min_thickness.is_finite()
            && self.min_thickness > 0.0
            && self.min_thickness <= smallest_extent)
        {
            return Err(ConfigError::MinThickness(self.min_thickness));
        }

        Ok(grid)
    }
}

/// Error returned by [`EditorConfig::validate()`].
#[derive(Clone, Debug, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum ConfigError {
    /// invalid grid size
    Grid(GridSizeError),
    /// quantization step must be a positive finite number, not {0}
    Step(FreeCoordinate),
    /// minimum thickness must be positive and fit inside the grid, not {0}
    MinThickness(FreeCoordinate),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Grid(e) => Some(e),
            ConfigError::Step(_) | ConfigError::MinThickness(_) => None,
        }
    }
}
