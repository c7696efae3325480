//! The `inspect` command.

use std::path::Path;

use anyhow::{Context, Result};
use print_estimate::{format_volume, measure_stl, MeshMetrics};

use crate::upload::read_upload;

/// Print the measured metrics of one STL file.
pub fn run(file: &Path, json: bool) -> Result<()> {
    let upload = read_upload(file)?;
    let metrics = measure_stl(&upload.bytes)
        .with_context(|| format!("Failed to decode {}", upload.filename))?;

    if metrics.is_inside_out() {
        log::warn!(
            "{} appears inside-out (signed volume {:.2} mm³)",
            upload.filename,
            metrics.signed_volume
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!("{}", describe(&upload.filename, &metrics));
    }
    Ok(())
}

fn describe(filename: &str, metrics: &MeshMetrics) -> String {
    let encoding = if metrics.encoding_was_binary {
        "binary"
    } else {
        "ASCII"
    };
    let dimensions = metrics
        .dimensions()
        .map_or_else(|| "n/a".to_string(), |dims| dims.to_string());

    format!(
        "{filename}\n  Encoding:      {encoding}\n  Triangles:     {}\n  Vertices:      {}\n  Dimensions:    {dimensions}\n  Volume:        {}\n  Surface area:  {:.2} mm²",
        metrics.triangle_count,
        metrics.vertex_count,
        format_volume(metrics.volume),
        metrics.surface_area,
    )
}
