//! In-memory pixel grid.
//!
//! A [`PixelGrid`] is a row-major rectangle of RGB triples. It is the only
//! image representation the rest of the crate deals with: sources produce one,
//! the normalizer consumes and returns one, and the renderer reads one.
//!
//! Indexing is always `(row, col)`, i.e. `(y, x)`, which is the opposite order
//! from `image::RgbImage::get_pixel(x, y)`. Conversions to and from
//! `RgbImage` take care of the swap.

use image::{Rgb, RgbImage};

/// Row-major grid of RGB pixels. Every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb<u8>>,
}

impl PixelGrid {
    /// A `width × height` canvas filled with black.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb([0, 0, 0]))
    }

    /// A `width × height` canvas filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb<u8>) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Build a grid from a function of `(row, col)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb<u8>) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Returns `None` if the rows are ragged. An empty outer vector gives a
    /// 0×0 grid.
    pub fn from_rows(rows: Vec<Vec<Rgb<u8>>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    /// Copy pixels out of a decoded image.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        Self {
            width: w as usize,
            height: h as usize,
            // RgbImage pixels() iterates row-major, left to right
            pixels: img.pixels().copied().collect(),
        }
    }

    /// Convert back into an `image` buffer, e.g. to save a normalized photo.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixels[y as usize * self.width + x as usize]
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb<u8>> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb<u8>]> {
        // chunks_exact(0) panics, and a zero-width grid has no pixels anyway
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Self {
        Self::from_fn(self.height, self.width, |row, col| {
            self.pixels[col * self.width + row]
        })
    }

    /// Copy out `count` full rows starting at `start`.
    ///
    /// Returns `None` if the range runs past the bottom of the grid.
    pub fn row_band(&self, start: usize, count: usize) -> Option<Self> {
        let end = start.checked_add(count)?;
        if end > self.height {
            return None;
        }
        Some(Self {
            width: self.width,
            height: count,
            pixels: self.pixels[start * self.width..end * self.width].to_vec(),
        })
    }
}
