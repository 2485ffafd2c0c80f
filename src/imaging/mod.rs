//! Image acquisition and normalization.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `image::ImageReader` → RGB8 |
//! | **Blank canvas** | [`PixelGrid::blank`] |
//! | **Normalize** | central square + block average (pure Rust, no resampling filter) |
//!
//! The module is split into:
//! - **Grid**: [`PixelGrid`], the in-memory pixel rectangle
//! - **Backend**: [`ImageSource`] trait + [`RustBackend`]
//! - **Normalize**: pure functions producing the fixed-size photo

pub mod backend;
pub mod grid;
pub mod normalize;
pub mod rust_backend;

pub use backend::{ImageSource, SourceError};
pub use grid::PixelGrid;
pub use normalize::{NormalizeError, PHOTO_SIZE, normalize};
pub use rust_backend::RustBackend;
