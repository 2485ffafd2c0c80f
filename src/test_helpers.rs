//! Shared test utilities for the photo-post test suite.
//!
//! Provides synthetic grid builders, image file writers, and an in-memory
//! [`ImageSource`] that records what it was asked to load.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = MockSource::with_grid("cat.png", gradient_grid(40, 60));
//! let post = Post::new(&source, "cat.png", "cat", "2024-05-07", 1, 2).unwrap();
//! assert_eq!(source.loaded(), vec!["cat.png"]);
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use image::{ImageEncoder, Rgb, RgbImage};

use crate::imaging::{ImageSource, PixelGrid, SourceError};

// =========================================================================
// Grid builders
// =========================================================================

/// Grid where every pixel encodes its own position: `(row, col, row ^ col)`.
///
/// Positions wrap at 256, which is fine for the sizes tests use.
pub fn gradient_grid(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |row, col| {
        Rgb([row as u8, col as u8, (row ^ col) as u8])
    })
}

/// Grid filled with a single color.
pub fn solid_grid(width: usize, height: usize, color: Rgb<u8>) -> PixelGrid {
    PixelGrid::filled(width, height, color)
}

// =========================================================================
// Image files
// =========================================================================

fn synthetic_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a lossless PNG whose pixel at column x, row y is `(x, y, 128)`.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    synthetic_image(width, height).save(path).unwrap();
}

/// Write a JPEG with the same pattern as [`create_test_png`] (lossy).
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = synthetic_image(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Mock source
// =========================================================================

/// In-memory image source keyed by path.
///
/// Unknown paths fail with a not-found I/O error. Uses Mutex (not RefCell) so
/// it satisfies the `Sync` bound on [`ImageSource`].
#[derive(Default)]
pub struct MockSource {
    grids: HashMap<String, PixelGrid>,
    loaded: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(path: &str, grid: PixelGrid) -> Self {
        let mut source = Self::new();
        source.grids.insert(path.to_string(), grid);
        source
    }

    /// Paths passed to `load`, in call order.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded.lock().unwrap().clone()
    }
}

impl ImageSource for MockSource {
    fn load(&self, path: &Path) -> Result<PixelGrid, SourceError> {
        let key = path.to_string_lossy().to_string();
        self.loaded.lock().unwrap().push(key.clone());
        self.grids.get(&key).cloned().ok_or_else(|| {
            SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no mock image for {key}"),
            ))
        })
    }
}

