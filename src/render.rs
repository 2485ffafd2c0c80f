//! Terminal rendering of photos.
//!
//! Each pixel becomes two spaces on a 256-color background:
//!
//! ```text
//! ESC[48;5;{index}m␣␣ESC[m
//! ```
//!
//! `index` picks from the 6×6×6 color cube (entries 16–231). Each channel is
//! bucketed with integer division by 51, so 0–50 → 0, 51–101 → 1, …, 255 → 5.

use crate::imaging::PixelGrid;
use image::Rgb;

/// Resets all terminal attributes.
pub const RESET: &str = "\x1b[m";

/// First entry of the 256-color cube.
const CUBE_OFFSET: u16 = 16;

/// Width of one color-cube step in 0–255 channel space.
const CUBE_STEP: u8 = 51;

/// Color cube index for a pixel.
pub fn ansi_index(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let bucket = |v: u8| u16::from(v / CUBE_STEP);
    // max 16 + 180 + 30 + 5 = 231
    (CUBE_OFFSET + 36 * bucket(r) + 6 * bucket(g) + bucket(b)) as u8
}

/// One rendered cell: background escape, two spaces, reset.
pub fn cell(pixel: Rgb<u8>) -> String {
    format!("\x1b[48;5;{}m  {RESET}", ansi_index(pixel))
}

/// Render a grid, one newline-terminated line per row.
pub fn render_photo(grid: &PixelGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for &pixel in row {
            out.push_str(&cell(pixel));
        }
        out.push('\n');
    }
    out
}
