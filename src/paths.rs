use std::path::{Path, PathBuf};

/// Source logo, relative to the working directory.
pub const SOURCE_LOGO: &str = "assets/images/logo.png";

/// Primary app icon output.
pub const PRIMARY_ICON: &str = "assets/images/icon.png";

/// Android adaptive icon output.
pub const ADAPTIVE_ICON: &str = "assets/images/adaptive-icon.png";

/// Web favicon output.
pub const FAVICON: &str = "assets/images/favicon.png";

/// Output paths, in the order they are written.
pub const OUTPUTS: [&str; 3] = [PRIMARY_ICON, ADAPTIVE_ICON, FAVICON];

pub(crate) fn resolve(base_dir: Option<&Path>, relative: &str) -> PathBuf {
    match base_dir {
        Some(base) => base.join(relative),
        None => PathBuf::from(relative),
    }
}
