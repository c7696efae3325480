//! Estimation result.

use std::fmt;

use mesh_measure::format_volume;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::estimator::{round_cost, round_to, CostBreakdown};
use crate::report::{format_currency, format_duration, format_weight};

/// Rounded estimate for one uploaded part.
///
/// Serialized field names follow the API layer (`materialCost`,
/// `timeInHours`, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EstimationResult {
    /// Caller-supplied file name, passed through untouched.
    pub filename: String,
    /// Part volume in mm³, rounded to an integer.
    pub volume: u64,
    /// Filament weight in grams, two decimals.
    pub weight: f64,
    /// Filament cost in whole currency units.
    pub material_cost: u64,
    /// Print time in hours, two decimals.
    pub time_in_hours: f64,
    /// Machine time cost in whole currency units.
    pub time_cost: u64,
    /// `material_cost + time_cost`.
    pub total_cost: u64,
}

impl EstimationResult {
    /// Round a cost breakdown for reporting.
    ///
    /// Display rounding happens only here; the integer costs were already
    /// taken from full-precision values.
    #[must_use]
    pub fn from_breakdown(filename: impl Into<String>, breakdown: &CostBreakdown) -> Self {
        Self {
            filename: filename.into(),
            volume: round_cost(breakdown.volume),
            weight: round_to(breakdown.weight, 2),
            material_cost: breakdown.material_cost,
            time_in_hours: round_to(breakdown.time_in_hours, 2),
            time_cost: breakdown.time_cost,
            total_cost: breakdown.total_cost,
        }
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_precision_loss)]
        let volume = self.volume as f64;
        writeln!(f, "{}", self.filename)?;
        writeln!(f, "  Volume:        {}", format_volume(volume))?;
        writeln!(f, "  Weight:        {}", format_weight(self.weight))?;
        writeln!(f, "  Print time:    {}", format_duration(self.time_in_hours))?;
        writeln!(f, "  Material cost: {}", format_currency(self.material_cost))?;
        writeln!(f, "  Time cost:     {}", format_currency(self.time_cost))?;
        write!(f, "  Total:         {}", format_currency(self.total_cost))
    }
}
