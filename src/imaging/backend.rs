//! Image source trait and shared error type.
//!
//! The [`ImageSource`] trait is the seam between posts and pixel acquisition:
//! a post asks a source for a [`PixelGrid`] and never parses file bytes itself.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), which decodes through the
//! `image` crate. Tests use an in-memory source from `test_helpers`.

use super::grid::PixelGrid;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Something that can hand out pixel grids.
pub trait ImageSource: Sync {
    /// Load and decode the image at `path` into an RGB grid.
    fn load(&self, path: &Path) -> Result<PixelGrid, SourceError>;

    /// A blank `width × height` canvas.
    fn blank(&self, width: usize, height: usize) -> PixelGrid {
        PixelGrid::blank(width, height)
    }
}
