//! Photo normalization: central square, then block-average down to
//! [`PHOTO_SIZE`] × [`PHOTO_SIZE`].
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! ```text
//! H×W grid ──(wide? transpose)──► tall/square ──► central L×L rows
//!          ──(wide? transpose back)──► L×L ──► average scale×scale blocks ──► 17×17
//! ```
//!
//! `scale = L / 17` truncates. When `L` is not a multiple of 17 the trailing
//! `L - 17·scale` rows and columns of the square never land in any block.

use super::grid::PixelGrid;
use image::Rgb;
use log::debug;
use thiserror::Error;

/// Side length of every normalized photo.
pub const PHOTO_SIZE: usize = 17;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error(
        "Photo must be at least {} pixels in each dimension, got {width}x{height}",
        PHOTO_SIZE
    )]
    TooSmall { width: usize, height: usize },
}

/// Whether a grid is at least [`PHOTO_SIZE`] in both dimensions.
pub fn is_large_enough(grid: &PixelGrid) -> bool {
    grid.width() >= PHOTO_SIZE && grid.height() >= PHOTO_SIZE
}

/// Normalize an arbitrary photo to a [`PHOTO_SIZE`]-square grid.
///
/// # Errors
/// [`NormalizeError::TooSmall`] if either dimension is below [`PHOTO_SIZE`].
pub fn normalize(grid: &PixelGrid) -> Result<PixelGrid, NormalizeError> {
    if !is_large_enough(grid) {
        return Err(NormalizeError::TooSmall {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let wide = grid.width() > grid.height();
    let square = if wide {
        // Transposed twice: crop works on rows only, then restore orientation
        center_square(&grid.transposed()).map(|s| s.transposed())
    } else {
        center_square(grid)
    };
    // Tall-or-square orientation always has a central band
    let Some(square) = square else {
        return Err(NormalizeError::TooSmall {
            width: grid.width(),
            height: grid.height(),
        });
    };

    let scale = square.width() / PHOTO_SIZE;
    debug!(
        "normalizing {}x{} photo (wide: {wide}, square: {}, scale: {scale})",
        grid.width(),
        grid.height(),
        square.width()
    );
    block_average(&square, scale).ok_or(NormalizeError::TooSmall {
        width: grid.width(),
        height: grid.height(),
    })
}

/// Take the central `width × width` band of rows from a tall or square grid.
///
/// The band starts at `height/2 - width/2` (integer division on each half).
/// Returns `None` for a wide grid, which has no such band.
pub(crate) fn center_square(grid: &PixelGrid) -> Option<PixelGrid> {
    let side = grid.width();
    let start = (grid.height() / 2).checked_sub(side / 2)?;
    grid.row_band(start, side)
}

/// Average `scale × scale` blocks into a [`PHOTO_SIZE`]-square grid.
///
/// Channels are averaged independently with truncating division. Blocks are
/// anchored at the top-left corner; anything past `PHOTO_SIZE * scale` in
/// either direction is ignored.
///
/// Returns `None` if `scale` is 0 or `PHOTO_SIZE * scale` does not fit
/// inside `square`.
pub(crate) fn block_average(square: &PixelGrid, scale: usize) -> Option<PixelGrid> {
    let span = PHOTO_SIZE.checked_mul(scale)?;
    if scale == 0 || span > square.width() || span > square.height() {
        return None;
    }
    let area = (scale * scale) as u32;
    Some(PixelGrid::from_fn(PHOTO_SIZE, PHOTO_SIZE, |i, j| {
        let mut sum = [0u32; 3];
        for x in 0..scale {
            for y in 0..scale {
                if let Some(Rgb(px)) = square.get(i * scale + x, j * scale + y) {
                    for (acc, channel) in sum.iter_mut().zip(px) {
                        *acc += u32::from(channel);
                    }
                }
            }
        }
        Rgb(sum.map(|s| (s / area) as u8))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{gradient_grid, solid_grid};

    fn assert_photo_sized(grid: &PixelGrid) {
        assert_eq!((grid.width(), grid.height()), (PHOTO_SIZE, PHOTO_SIZE));
    }

    // =========================================================================
    // normalize
    // =========================================================================

    #[test]
    fn output_is_always_photo_sized() {
        for (w, h) in [(17, 17), (17, 40), (40, 17), (34, 34), (100, 51), (51, 100), (18, 19)] {
            let out = normalize(&gradient_grid(w, h)).unwrap();
            assert_photo_sized(&out);
        }
    }

    #[test]
    fn exact_size_input_is_unchanged() {
        let grid = gradient_grid(17, 17);
        assert_eq!(normalize(&grid).unwrap(), grid);
    }

    #[test]
    fn too_small_is_rejected() {
        assert_eq!(
            normalize(&PixelGrid::blank(20, 16)),
            Err(NormalizeError::TooSmall {
                width: 20,
                height: 16
            })
        );
        assert!(normalize(&PixelGrid::blank(16, 20)).is_err());
        assert!(normalize(&PixelGrid::blank(0, 0)).is_err());
    }

    #[test]
    fn solid_color_survives_averaging() {
        let color = Rgb([12, 200, 77]);
        let out = normalize(&solid_grid(85, 130, color)).unwrap();
        assert!(out.rows().flatten().all(|&p| p == color));
    }

    #[test]
    fn tall_input_keeps_central_rows() {
        // 17 wide, 51 tall: start = 25 - 8 = 17, rows 17..34
        let grid = gradient_grid(17, 51);
        let out = normalize(&grid).unwrap();
        assert_eq!(out, grid.row_band(17, 17).unwrap());
    }

    #[test]
    fn wide_input_keeps_central_columns() {
        // 51 wide, 17 tall: columns 17..34 after the transpose round trip
        let grid = gradient_grid(51, 17);
        let out = normalize(&grid).unwrap();
        for row in 0..PHOTO_SIZE {
            for col in 0..PHOTO_SIZE {
                assert_eq!(out.get(row, col), grid.get(row, col + 17));
            }
        }
    }

    #[test]
    fn odd_offsets_use_integer_halves() {
        // 17 wide, 20 tall: start = 10 - 8 = 2
        let grid = gradient_grid(17, 20);
        let out = normalize(&grid).unwrap();
        assert_eq!(out.get(0, 0), grid.get(2, 0));
        assert_eq!(out.get(16, 16), grid.get(18, 16));
    }

    #[test]
    fn averaging_truncates_channel_means() {
        // 34x34: each output cell averages a 2x2 block
        let grid = PixelGrid::from_fn(34, 34, |row, col| {
            // block (0,0) sums to 0+1+1+1 = 3 → 3/4 = 0
            if (row + col) % 2 == 0 && row % 2 == 0 {
                Rgb([0, 10, 255])
            } else {
                Rgb([1, 11, 254])
            }
        });
        let out = normalize(&grid).unwrap();
        assert_eq!(out.get(0, 0), Some(Rgb([0, 10, 254])));
    }

    #[test]
    fn side_not_multiple_of_size_drops_trailing_pixels() {
        // 40x40: scale = 2, rows/cols 34..40 never contribute
        let grid = PixelGrid::from_fn(40, 40, |row, col| {
            if row >= 34 || col >= 34 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let out = normalize(&grid).unwrap();
        assert!(out.rows().flatten().all(|&p| p == Rgb([0, 0, 0])));
    }

    // =========================================================================
    // center_square / block_average
    // =========================================================================

    #[test]
    fn center_square_of_square_is_identity() {
        let grid = gradient_grid(30, 30);
        assert_eq!(center_square(&grid), Some(grid));
    }

    #[test]
    fn center_square_rejects_wide_grid() {
        assert_eq!(center_square(&gradient_grid(30, 20)), None);
    }

    #[test]
    fn block_average_scale_one_copies_top_left() {
        let grid = gradient_grid(20, 20);
        let out = block_average(&grid, 1).unwrap();
        assert_eq!(out.get(16, 16), grid.get(16, 16));
    }

    #[test]
    fn block_average_rejects_bad_scale() {
        let grid = gradient_grid(34, 34);
        assert_eq!(block_average(&grid, 0), None);
        assert_eq!(block_average(&grid, 3), None);
        assert_eq!(block_average(&gradient_grid(34, 20), 2), None);
        assert_eq!(block_average(&grid, usize::MAX), None);
    }
}
