//! Print settings and materials.
//!
//! [`PrintSettings`] is the raw, caller-supplied configuration. It is
//! checked once by [`PrintSettings::validate`], which produces the
//! [`ValidatedSettings`] the cost estimator works from.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Filament material.
///
/// Each variant carries its own price and density constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// Polylactic acid.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "PLA", alias = "pla"))]
    Pla,
    /// Polyethylene terephthalate glycol.
    #[cfg_attr(feature = "serde", serde(rename = "PETG", alias = "petg"))]
    Petg,
}

impl Material {
    /// Price per gram of filament, in whole currency units.
    #[must_use]
    pub const fn price_per_gram(&self) -> f64 {
        match self {
            Self::Pla => 220.0,
            Self::Petg => 350.0,
        }
    }

    /// Density that replaces the caller-supplied one, if any (g/cm³).
    #[must_use]
    pub const fn density_override(&self) -> Option<f64> {
        match self {
            Self::Pla => None,
            Self::Petg => Some(crate::PETG_DENSITY),
        }
    }

    /// Typical density of the material (g/cm³).
    #[must_use]
    pub const fn default_density(&self) -> f64 {
        match self.density_override() {
            Some(density) => density,
            None => DEFAULT_DENSITY,
        }
    }

    /// Get a human-readable name for the material.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pla => "PLA",
            Self::Petg => "PETG",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown material name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material `{0}`, expected PLA or PETG")]
pub struct ParseMaterialError(String);

impl FromStr for Material {
    type Err = ParseMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pla" => Ok(Self::Pla),
            "petg" => Ok(Self::Petg),
            _ => Err(ParseMaterialError(s.to_string())),
        }
    }
}

/// Default nozzle width in mm.
pub const DEFAULT_NOZZLE_WIDTH: f64 = 0.4;

/// Default print speed in mm/s.
pub const DEFAULT_PRINT_SPEED: f64 = 210.0;

/// Default filament density in g/cm³ (PLA).
pub const DEFAULT_DENSITY: f64 = 1.24;

#[cfg(feature = "serde")]
const fn default_nozzle_width() -> f64 {
    DEFAULT_NOZZLE_WIDTH
}

#[cfg(feature = "serde")]
const fn default_print_speed() -> f64 {
    DEFAULT_PRINT_SPEED
}

#[cfg(feature = "serde")]
const fn default_density() -> f64 {
    DEFAULT_DENSITY
}

/// Process parameters for one print.
///
/// Values are unchecked until [`validate`](Self::validate) is called.
///
/// # Example
///
/// ```
/// use print_estimate::{Material, PrintSettings};
///
/// let settings = PrintSettings::default()
///     .with_material(Material::Petg)
///     .with_infill_percentage(40.0);
///
/// let validated = settings.validate().unwrap();
/// assert!((validated.density() - 1.27).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrintSettings {
    /// Layer height in mm.
    pub layer_height: f64,

    /// Number of perimeter walls.
    pub wall_count: i32,

    /// Number of solid top layers.
    pub top_layer_count: i32,

    /// Number of solid bottom layers.
    pub bottom_layer_count: i32,

    /// Sparse infill density, 0 to 100.
    pub infill_percentage: f64,

    /// Filament material.
    pub material: Material,

    /// Extrusion width in mm.
    #[cfg_attr(feature = "serde", serde(default = "default_nozzle_width"))]
    pub nozzle_width: f64,

    /// Print head speed in mm/s.
    #[cfg_attr(feature = "serde", serde(default = "default_print_speed"))]
    pub print_speed: f64,

    /// Filament density in g/cm³. Ignored for materials with a fixed density.
    #[cfg_attr(feature = "serde", serde(default = "default_density"))]
    pub density: f64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            layer_height: 0.2,
            wall_count: 2,
            top_layer_count: 3,
            bottom_layer_count: 3,
            infill_percentage: 20.0,
            material: Material::Pla,
            nozzle_width: DEFAULT_NOZZLE_WIDTH,
            print_speed: DEFAULT_PRINT_SPEED,
            density: DEFAULT_DENSITY,
        }
    }
}

impl PrintSettings {
    /// Set the layer height.
    #[must_use]
    pub fn with_layer_height(mut self, mm: f64) -> Self {
        self.layer_height = mm;
        self
    }

    /// Set the number of perimeter walls.
    #[must_use]
    pub fn with_wall_count(mut self, count: i32) -> Self {
        self.wall_count = count;
        self
    }

    /// Set the number of top and bottom layers.
    #[must_use]
    pub fn with_cap_layers(mut self, top: i32, bottom: i32) -> Self {
        self.top_layer_count = top;
        self.bottom_layer_count = bottom;
        self
    }

    /// Set the infill percentage.
    #[must_use]
    pub fn with_infill_percentage(mut self, percent: f64) -> Self {
        self.infill_percentage = percent;
        self
    }

    /// Set the material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Set the nozzle width.
    #[must_use]
    pub fn with_nozzle_width(mut self, mm: f64) -> Self {
        self.nozzle_width = mm;
        self
    }

    /// Set the print speed.
    #[must_use]
    pub fn with_print_speed(mut self, mm_per_s: f64) -> Self {
        self.print_speed = mm_per_s;
        self
    }

    /// Set the filament density.
    #[must_use]
    pub fn with_density(mut self, g_per_cm3: f64) -> Self {
        self.density = g_per_cm3;
        self
    }

    /// Check every precondition and freeze the settings.
    ///
    /// Layer height, nozzle width and print speed must be finite and
    /// strictly positive. Infill must lie in `[0, 100]` and counts must not
    /// be negative. Density is only checked when the material uses it.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<ValidatedSettings, SettingsError> {
        let layer_height = positive("layerHeight", self.layer_height)?;
        let nozzle_width = positive("nozzleWidth", self.nozzle_width)?;
        let print_speed = positive("printSpeed", self.print_speed)?;

        let infill = finite("infillPercentage", self.infill_percentage)?;
        if !(0.0..=100.0).contains(&infill) {
            return Err(SettingsError::InfillOutOfRange { value: infill });
        }

        let density = match self.material.density_override() {
            Some(density) => density,
            None => positive("density", self.density)?,
        };

        Ok(ValidatedSettings {
            layer_height,
            wall_count: count("wallCount", self.wall_count)?,
            top_layer_count: count("topLayerCount", self.top_layer_count)?,
            bottom_layer_count: count("bottomLayerCount", self.bottom_layer_count)?,
            infill_percentage: infill,
            material: self.material,
            nozzle_width,
            print_speed,
            density,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, SettingsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SettingsError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, SettingsError> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}

fn count(field: &'static str, value: i32) -> Result<u32, SettingsError> {
    u32::try_from(value).map_err(|_| SettingsError::NegativeCount { field, value })
}

/// Print settings that passed [`PrintSettings::validate`].
///
/// Only obtainable through validation, so holders never need to re-check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedSettings {
    layer_height: f64,
    wall_count: u32,
    top_layer_count: u32,
    bottom_layer_count: u32,
    infill_percentage: f64,
    material: Material,
    nozzle_width: f64,
    print_speed: f64,
    density: f64,
}

impl ValidatedSettings {
    /// Layer height in mm.
    #[must_use]
    pub const fn layer_height(&self) -> f64 {
        self.layer_height
    }

    /// Number of perimeter walls.
    #[must_use]
    pub const fn wall_count(&self) -> u32 {
        self.wall_count
    }

    /// Number of solid top layers.
    #[must_use]
    pub const fn top_layer_count(&self) -> u32 {
        self.top_layer_count
    }

    /// Number of solid bottom layers.
    #[must_use]
    pub const fn bottom_layer_count(&self) -> u32 {
        self.bottom_layer_count
    }

    /// Infill percentage in `[0, 100]`.
    #[must_use]
    pub const fn infill_percentage(&self) -> f64 {
        self.infill_percentage
    }

    /// Filament material.
    #[must_use]
    pub const fn material(&self) -> Material {
        self.material
    }

    /// Extrusion width in mm.
    #[must_use]
    pub const fn nozzle_width(&self) -> f64 {
        self.nozzle_width
    }

    /// Print head speed in mm/s.
    #[must_use]
    pub const fn print_speed(&self) -> f64 {
        self.print_speed
    }

    /// Effective filament density in g/cm³, after any material override.
    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density
    }
}

/// Convert a wall thickness to a perimeter count.
///
/// Rounds `thickness / nozzle_width` to the nearest integer, never going
/// below one wall.
///
/// ```
/// use print_estimate::walls_for_thickness;
///
/// assert_eq!(walls_for_thickness(1.2, 0.4), 3);
/// assert_eq!(walls_for_thickness(0.1, 0.4), 1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn walls_for_thickness(thickness: f64, nozzle_width: f64) -> u32 {
    // Saturating cast: NaN and negatives land on 0 and are lifted to 1.
    ((thickness / nozzle_width).round() as u32).max(1)
}
