//! Reading an STL file the way the upload endpoint accepts it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Largest accepted upload, 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// An accepted upload held fully in memory.
#[derive(Debug)]
pub struct Upload {
    /// File name without directories.
    pub filename: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Read an STL file after checking its extension and size.
pub fn read_upload(path: &Path) -> Result<Upload> {
    let is_stl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"));
    if !is_stl {
        bail!("{} is not an .stl file", path.display());
    }

    let size = fs::metadata(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .len();
    if size > MAX_UPLOAD_BYTES {
        bail!(
            "{} is {size} bytes, larger than the {MAX_UPLOAD_BYTES} byte limit",
            path.display()
        );
    }

    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

    log::debug!("Read {filename} ({} bytes)", bytes.len());
    Ok(Upload { filename, bytes })
}
