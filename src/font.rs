use std::path::{Path, PathBuf};

use rusttype::Font;

use crate::error::{Error, Result};

/// Fonts tried, in order, when no font is given explicitly.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn load_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path).map_err(|source| Error::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| Error::FontParse(path.to_path_buf()))
}

/// Load the requested font, or the first usable system font.
///
/// An explicit path that fails is an error. If nothing is found the dial is
/// drawn without labels.
pub fn resolve_font(explicit: Option<&Path>) -> Result<Option<Font<'static>>> {
    if let Some(path) = explicit {
        let font = load_font(path)?;
        log::info!("Using font {}", path.display());
        return Ok(Some(font));
    }

    for candidate in SYSTEM_FONTS.iter().map(PathBuf::from) {
        if !candidate.is_file() {
            continue;
        }
        match load_font(&candidate) {
            Ok(font) => {
                log::info!("Using system font {}", candidate.display());
                return Ok(Some(font));
            }
            Err(e) => log::debug!("Skipping font: {}", e),
        }
    }

    log::warn!("No usable font found; labels will not be drawn (pass --font to choose one)");
    Ok(None)
}
