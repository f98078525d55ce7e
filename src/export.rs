//! Saving rendered designs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::compositor::CanvasSize;
use crate::error::Result;
use crate::utils::convert;

/// Fixed size of the high-definition export.
pub const FULL_HD: CanvasSize = CanvasSize {
    width: 1920,
    height: 1080,
};

/// Every whitespace run becomes a single underscore.
fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// `PRO_DESIGN_<name>_<WxH>.png`
pub fn standard_filename(name: &str, dimensions: &str) -> String {
    format!("PRO_DESIGN_{}_{}.png", underscore_whitespace(name), dimensions)
}

/// `FHD_DESIGN_<name>_1920x1080.png`
pub fn full_hd_filename(name: &str) -> String {
    format!(
        "FHD_DESIGN_{}_{}.png",
        underscore_whitespace(name),
        FULL_HD.label()
    )
}

/// Write the image carried by `url` to `dir/filename`.
pub fn save_data_url(url: &str, dir: &Path, filename: &str) -> Result<PathBuf> {
    let bytes = convert::data_url_bytes(url)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, &bytes)?;
    info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
