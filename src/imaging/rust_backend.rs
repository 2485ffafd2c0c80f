//! Pure Rust image source built on the `image` crate.
//!
//! | Format | Decoder |
//! |---|---|
//! | JPEG | `image` (`jpeg` feature) |
//! | PNG | `image` (`png` feature) |
//! | TIFF | `image` (`tiff` feature) |
//! | WebP | `image` (`webp` feature) |
//!
//! Whatever the source color type, pixels are converted to RGB8 and alpha is
//! dropped.

use super::backend::{ImageSource, SourceError};
use super::grid::PixelGrid;
use image::ImageReader;
use log::debug;
use std::path::Path;

/// Image source decoding from disk with the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for RustBackend {
    fn load(&self, path: &Path) -> Result<PixelGrid, SourceError> {
        let img = ImageReader::open(path)
            .map_err(SourceError::Io)?
            .with_guessed_format()
            .map_err(SourceError::Io)?
            .decode()
            .map_err(|e| SourceError::Decode(format!("{}: {}", path.display(), e)))?;
        let rgb = img.to_rgb8();
        debug!(
            "loaded {} ({}x{})",
            path.display(),
            rgb.width(),
            rgb.height()
        );
        Ok(PixelGrid::from_rgb_image(&rgb))
    }
}
