//! The `quote` command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use print_estimate::{estimate, walls_for_thickness, Material, PrintSettings};

use crate::upload::read_upload;

/// Print settings taken from a JSON file and command-line overrides.
#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    /// JSON settings file (API field names); flags below override it
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Filament material (PLA or PETG)
    #[arg(long)]
    material: Option<Material>,

    /// Layer height in mm
    #[arg(long, allow_negative_numbers = true)]
    layer_height: Option<f64>,

    /// Number of perimeter walls
    #[arg(long, allow_negative_numbers = true, conflicts_with = "wall_thickness")]
    walls: Option<i32>,

    /// Wall thickness in mm, converted to a wall count using the nozzle width
    #[arg(long)]
    wall_thickness: Option<f64>,

    /// Number of solid top layers
    #[arg(long, allow_negative_numbers = true)]
    top_layers: Option<i32>,

    /// Number of solid bottom layers
    #[arg(long, allow_negative_numbers = true)]
    bottom_layers: Option<i32>,

    /// Infill percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    infill: Option<f64>,

    /// Nozzle width in mm
    #[arg(long, allow_negative_numbers = true)]
    nozzle_width: Option<f64>,

    /// Print speed in mm/s
    #[arg(long, allow_negative_numbers = true)]
    print_speed: Option<f64>,

    /// Filament density in g/cm³ (ignored for PETG)
    #[arg(long, allow_negative_numbers = true)]
    density: Option<f64>,
}

impl SettingsArgs {
    /// Build the settings: file (or defaults) first, then flag overrides.
    pub fn resolve(&self) -> Result<PrintSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => PrintSettings::default(),
        };

        if let Some(material) = self.material {
            settings.material = material;
        }
        if let Some(mm) = self.layer_height {
            settings.layer_height = mm;
        }
        if let Some(mm) = self.nozzle_width {
            settings.nozzle_width = mm;
        }
        if let Some(speed) = self.print_speed {
            settings.print_speed = speed;
        }
        if let Some(density) = self.density {
            settings.density = density;
        }
        if let Some(percent) = self.infill {
            settings.infill_percentage = percent;
        }
        if let Some(top) = self.top_layers {
            settings.top_layer_count = top;
        }
        if let Some(bottom) = self.bottom_layers {
            settings.bottom_layer_count = bottom;
        }
        if let Some(walls) = self.walls {
            settings.wall_count = walls;
        }
        if let Some(thickness) = self.wall_thickness {
            let walls = walls_for_thickness(thickness, settings.nozzle_width);
            settings.wall_count = i32::try_from(walls).unwrap_or(i32::MAX);
            log::info!("Wall thickness {thickness} mm -> {walls} walls");
        }

        Ok(settings)
    }
}

fn load_settings(path: &Path) -> Result<PrintSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

/// Quote one STL file.
pub fn run(file: &Path, args: &SettingsArgs, json: bool) -> Result<()> {
    let settings = args.resolve()?;
    log::debug!("Using settings {settings:?}");

    let upload = read_upload(file)?;
    let result = estimate(&upload.filename, &upload.bytes, &settings)
        .with_context(|| format!("Failed to quote {}", upload.filename))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
        println!(
            "  Settings:      {}, {} mm layers, {}% infill, {} walls",
            settings.material,
            settings.layer_height,
            settings.infill_percentage,
            settings.wall_count
        );
    }
    Ok(())
}
