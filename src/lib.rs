//! # Photo Post
//!
//! A social-media post record: a photo, caption, date, like count and retweet
//! count. Photos are cut down to a fixed 17×17 square and can be printed to a
//! terminal as blocks of 256-color background.
//!
//! # Pipeline
//!
//! ```text
//! ImageSource::load  →  PixelGrid (H×W)  →  normalize  →  PixelGrid (17×17)  →  render_photo
//! ```
//!
//! - **Load**: an [`ImageSource`] turns a path into pixels. The post never
//!   parses file bytes itself, so tests swap in an in-memory source.
//! - **Normalize**: central square, then block-average. Pure functions.
//! - **Render**: one escape-wrapped pair of spaces per pixel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`post`] | The [`Post`] record (alias [`Tweet`]): validation, accessors, mutators, `Display`, equality |
//! | [`imaging`] | [`PixelGrid`], the [`ImageSource`] trait and [`RustBackend`], photo normalization |
//! | [`render`] | ANSI 256-color rendering of a grid |
//! | [`config`] | TOML config for the random engagement ranges |
//!
//! # Logging
//!
//! The crate logs through the `log` facade (`debug!` for loads and
//! normalization, `warn!` for odd-sized photo replacements) and never installs
//! a logger.

pub mod config;
pub mod imaging;
pub mod post;
pub mod render;

pub use imaging::{ImageSource, PHOTO_SIZE, PixelGrid, RustBackend, SourceError};
pub use post::{Post, PostError, Tweet};
pub use render::render_photo;

#[cfg(test)]
pub(crate) mod test_helpers;
