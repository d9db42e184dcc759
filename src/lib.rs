use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use tracing::info;

pub mod canvas;
pub mod extract;
pub mod logging;
pub mod paths;
pub mod scan;

pub use extract::BoundingBox;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory the fixed relative paths resolve against; `None` means
    /// the current working directory.
    pub base_dir: Option<PathBuf>,
}

/// Extract the graphical mark from the source logo and write the three
/// icon variants. Returns the printable run report.
///
/// A missing source file or a uniformly blank image is reported in the
/// output and ends the run early with nothing written; those are expected
/// conditions, not errors. Decode and write failures propagate as errors.
pub fn run(config: Config) -> Result<String> {
    let base_dir = config.base_dir.as_deref();
    let mut report = Vec::new();

    let source = paths::resolve(base_dir, paths::SOURCE_LOGO);
    if !source.exists() {
        report.push(format!("Error: {} not found.", paths::SOURCE_LOGO));
        return Ok(report.join("\n"));
    }

    let img = image::open(&source)
        .with_context(|| format!("failed to decode {}", source.display()))?
        .to_rgba8();
    info!("loaded {} ({}x{})", paths::SOURCE_LOGO, img.width(), img.height());

    let flat = extract::flatten_onto_white(&img);
    let Some(bbox) = extract::content_bounding_box(&flat) else {
        report.push("Error: Empty image.".to_string());
        return Ok(report.join("\n"));
    };

    let content = extract::crop_to_box(&img, &bbox);
    let mark = match scan::find_split(&content) {
        Some(split_y) => {
            report.push(format!("Found gap at Y={}. Cropping text.", split_y));
            extract::crop_above(&content, split_y)
        }
        None => {
            report.push("No clear gap found. Using entire content (maybe no text?).".to_string());
            content
        }
    };
    if mark.width() == 0 || mark.height() == 0 {
        return Err(anyhow!("mark region is empty after split"));
    }

    let icon = canvas::compose(&mark);
    for relative in paths::OUTPUTS {
        let dest = paths::resolve(base_dir, relative);
        icon.save(&dest)
            .with_context(|| format!("failed to write {}", dest.display()))?;
    }
    report.push(format!("Saved icon to {}", paths::PRIMARY_ICON));
    report.push("Saved adaptive-icon.png and favicon.png".to_string());

    Ok(report.join("\n"))
}
