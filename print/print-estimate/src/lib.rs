//! Material cost and print time estimation for FDM printing.
//!
//! Takes a raw STL buffer and a set of print settings and produces a
//! deterministic quote:
//!
//! ```text
//! bytes ─► detect ─► binary | ASCII decoder ─► MeshAccumulator ─► MeshMetrics
//!                                                                    │
//! PrintSettings ─► validate ─► ValidatedSettings ─► CostBreakdown ◄──┘
//!                                                         │
//!                                                         ▼
//!                                                 EstimationResult
//! ```
//!
//! Settings are validated before any bytes are decoded, so a bad settings
//! object never costs a parse. Every call is a pure function of its inputs
//! and holds no shared state; callers may run estimates concurrently.
//!
//! # Example
//!
//! ```
//! use print_estimate::{estimate, ErrorKind, PrintSettings};
//!
//! // 84-byte binary preamble declaring zero triangles
//! let empty = [0u8; 84];
//! let result = estimate("empty.stl", &empty, &PrintSettings::default()).unwrap();
//! assert_eq!(result.total_cost, 0);
//!
//! let bad = PrintSettings::default().with_print_speed(0.0);
//! let err = estimate("empty.stl", &empty, &bad).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Configuration);
//! ```
//!
//! # Accuracy
//!
//! Volume comes from the divergence theorem and is only meaningful for
//! closed, consistently wound meshes. The cost model is a coarse
//! approximation of slicer output, not a substitute for slicing.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod estimator;
mod report;
mod result;
mod settings;

pub use error::{ErrorKind, EstimateError, EstimateResult, SettingsError};
pub use estimator::{
    round_to, CostBreakdown, CAP_LAYER_COMPLEXITY, PETG_DENSITY, SHELL_RATIO,
    TIME_COST_PER_HOUR, VOLUME_EFFICIENCY, WALL_COMPLEXITY,
};
pub use report::{format_currency, format_duration, format_weight};
pub use result::EstimationResult;
pub use settings::{
    walls_for_thickness, Material, ParseMaterialError, PrintSettings, ValidatedSettings,
    DEFAULT_DENSITY, DEFAULT_NOZZLE_WIDTH, DEFAULT_PRINT_SPEED,
};

pub use mesh_io::{IoError, StlEncoding};
pub use mesh_measure::{format_volume, Dimensions, MeshMetrics};

use mesh_io::{read_stl, IoResult};
use mesh_measure::MeshAccumulator;
use tracing::{debug, info};

/// Decode an STL buffer straight into aggregate metrics.
///
/// # Errors
///
/// Returns an [`IoError`] if the buffer is empty or cannot be decoded.
pub fn measure_stl(bytes: &[u8]) -> IoResult<MeshMetrics> {
    let mut accumulator = MeshAccumulator::new();
    let encoding = read_stl(bytes, &mut accumulator)?;
    let metrics = accumulator.finish(encoding.is_binary());

    debug!(
        encoding = encoding.as_str(),
        triangles = metrics.triangle_count,
        volume = metrics.volume,
        surface_area = metrics.surface_area,
        "Measured STL"
    );
    if metrics.is_inside_out() {
        debug!(signed_volume = metrics.signed_volume, "Mesh winding is inverted");
    }

    Ok(metrics)
}

/// Estimate cost and print time for an STL buffer.
///
/// `filename` is carried into the result unchanged.
///
/// # Errors
///
/// Returns [`EstimateError::Settings`] if a setting violates its
/// precondition (checked before decoding), or [`EstimateError::Mesh`] if
/// the buffer cannot be decoded.
pub fn estimate(
    filename: &str,
    bytes: &[u8],
    settings: &PrintSettings,
) -> EstimateResult<EstimationResult> {
    let settings = settings.validate()?;
    let metrics = measure_stl(bytes)?;
    Ok(estimate_from_metrics(filename, &metrics, &settings))
}

/// Estimate from metrics that were already measured.
#[must_use]
pub fn estimate_from_metrics(
    filename: &str,
    metrics: &MeshMetrics,
    settings: &ValidatedSettings,
) -> EstimationResult {
    let breakdown = CostBreakdown::compute(metrics.volume, settings);
    let result = EstimationResult::from_breakdown(filename, &breakdown);

    info!(
        filename,
        triangles = metrics.triangle_count,
        volume = result.volume,
        material = settings.material().as_str(),
        total_cost = result.total_cost,
        "Estimate complete"
    );

    result
}
