//! Volume-to-cost model.
//!
//! The model splits the part into an outer shell and a sparse interior,
//! scales the printed volume by an efficiency factor, then derives weight
//! and cost from it. Print time comes from the extruded filament length at
//! the configured speed, inflated by a complexity factor for walls and
//! solid cap layers.

use crate::settings::ValidatedSettings;

/// Fraction of the part volume treated as solid outer shell.
pub const SHELL_RATIO: f64 = 0.3;

/// Fraction of the modeled volume that is actually extruded.
pub const VOLUME_EFFICIENCY: f64 = 0.8;

/// Fixed PETG density in g/cm³.
pub const PETG_DENSITY: f64 = 1.27;

/// Machine time price per hour, in whole currency units.
pub const TIME_COST_PER_HOUR: f64 = 10_000.0;

/// Complexity added per perimeter wall.
pub const WALL_COMPLEXITY: f64 = 0.1;

/// Complexity added per solid top or bottom layer.
pub const CAP_LAYER_COMPLEXITY: f64 = 0.05;

const MM3_PER_CM3: f64 = 1000.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Every intermediate of the cost model, at full precision.
///
/// Nothing is rounded here except the three integer costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    /// Part volume in mm³.
    pub volume: f64,
    /// Infill as a ratio in `[0, 1]`.
    pub infill_ratio: f64,
    /// Solid shell volume in mm³.
    pub shell_volume: f64,
    /// Sparse interior volume in mm³.
    pub infill_volume: f64,
    /// Shell plus infill volume in mm³.
    pub effective_volume: f64,
    /// Effective volume after the efficiency factor, in mm³.
    pub calibrated_volume: f64,
    /// Density used for the weight, in g/cm³.
    pub density: f64,
    /// Filament weight in grams.
    pub weight: f64,
    /// Filament cost in whole currency units.
    pub material_cost: u64,
    /// Filament length in mm before the complexity factor.
    pub base_length: f64,
    /// Path length multiplier for walls and cap layers.
    pub complexity_multiplier: f64,
    /// Filament length in mm after the complexity factor.
    pub adjusted_length: f64,
    /// Print time in seconds.
    pub total_seconds: f64,
    /// Print time in hours, unrounded.
    pub time_in_hours: f64,
    /// Machine time cost in whole currency units.
    pub time_cost: u64,
    /// Material plus time cost, saturating at `u64::MAX`.
    pub total_cost: u64,
}

impl CostBreakdown {
    /// Run the cost model for a part of `volume` mm³.
    ///
    /// # Example
    ///
    /// ```
    /// use print_estimate::{CostBreakdown, PrintSettings};
    ///
    /// let settings = PrintSettings::default().validate().unwrap();
    /// let breakdown = CostBreakdown::compute(1_000_000.0, &settings);
    ///
    /// assert_eq!(breakdown.material_cost, 96_026);
    /// assert_eq!(breakdown.time_cost, 87_302);
    /// assert_eq!(breakdown.total_cost, 183_328);
    /// ```
    #[must_use]
    pub fn compute(volume: f64, settings: &ValidatedSettings) -> Self {
        let infill_ratio = settings.infill_percentage() / 100.0;
        let shell_volume = volume * SHELL_RATIO;
        let infill_volume = (volume - shell_volume) * infill_ratio;
        let effective_volume = shell_volume + infill_volume;
        let calibrated_volume = effective_volume * VOLUME_EFFICIENCY;

        let density = settings.density();
        let weight = calibrated_volume / MM3_PER_CM3 * density;
        let material_cost = round_cost(weight * settings.material().price_per_gram());

        let extrusion_per_mm = settings.nozzle_width() * settings.layer_height();
        let base_length = calibrated_volume / extrusion_per_mm;
        let cap_layers = settings.top_layer_count() + settings.bottom_layer_count();
        let complexity_multiplier = f64::from(settings.wall_count())
            .mul_add(WALL_COMPLEXITY, f64::from(cap_layers).mul_add(CAP_LAYER_COMPLEXITY, 1.0));
        let adjusted_length = base_length * complexity_multiplier;

        let total_seconds = adjusted_length / settings.print_speed();
        let time_in_hours = total_seconds / SECONDS_PER_HOUR;
        let time_cost = round_cost(time_in_hours * TIME_COST_PER_HOUR);

        Self {
            volume,
            infill_ratio,
            shell_volume,
            infill_volume,
            effective_volume,
            calibrated_volume,
            density,
            weight,
            material_cost,
            base_length,
            complexity_multiplier,
            adjusted_length,
            total_seconds,
            time_in_hours,
            time_cost,
            total_cost: material_cost.saturating_add(time_cost),
        }
    }
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round a non-negative amount to whole currency units.
///
/// Amounts past `u64::MAX` saturate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_cost(amount: f64) -> u64 {
    amount.round() as u64
}
