// src/rasterizer/mod.rs

//! Outline rasterization for lines and circles.
//!
//! Both routines are incremental and integer-only, and neither clips: every
//! computed point is handed straight to the surface, which decides what to do
//! with coordinates outside the canvas.
//!
//! ```text
//! draw_line    fixed-point DDA (16.16), one pixel per dominant-axis step
//! draw_circle  midpoint circle, 8-way symmetric plotting
//! ```

use crate::color::Rgb;
use crate::surface::PixelSurface;

/// Fractional bits of the line accumulator.
const FIXED_SHIFT: u32 = 16;
/// 0.5 in 16.16, so reading the accumulator back rounds to the nearest pixel.
const FIXED_HALF: i32 = 0x8000;

/// Draws a straight line from `(x0, y0)` to `(x1, y1)`, both ends inclusive.
///
/// The axis with the strictly larger extent is stepped one pixel at a time;
/// on a tie the y axis is stepped. The other axis is tracked as a 16.16
/// fixed-point accumulator. Endpoints are reordered so the dominant axis is
/// always walked upwards, which makes the pixel set independent of the
/// direction the line is given in. A zero-length line plots `(x0, y0)` once.
pub fn draw_line<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgb,
) {
    let dx = x1.wrapping_sub(x0);
    let dy = y1.wrapping_sub(y0);

    if dx.unsigned_abs() > dy.unsigned_abs() {
        let (start_x, start_y, end_x) = if x1 < x0 { (x1, y1, x0) } else { (x0, y0, x1) };
        // Swapping negates both deltas, which leaves their ratio unchanged.
        let gradient = (dy << FIXED_SHIFT) / dx;
        let mut y = FIXED_HALF.wrapping_add(start_y << FIXED_SHIFT);
        for x in start_x..=end_x {
            surface.set_pixel(x, y >> FIXED_SHIFT, color);
            y = y.wrapping_add(gradient);
        }
    } else if dy != 0 {
        let (start_x, start_y, end_y) = if y1 < y0 { (x1, y1, y0) } else { (x0, y0, y1) };
        let gradient = (dx << FIXED_SHIFT) / dy;
        let mut x = FIXED_HALF.wrapping_add(start_x << FIXED_SHIFT);
        for y in start_y..=end_y {
            surface.set_pixel(x >> FIXED_SHIFT, y, color);
            x = x.wrapping_add(gradient);
        }
    } else {
        surface.set_pixel(x0, y0, color);
    }
}

/// Draws the outline of a circle centred on `(cx, cy)`.
///
/// Each iteration of the midpoint algorithm plots one point per octant, so
/// points on the diagonals and axes are set more than once. A radius of 0
/// plots the centre; a negative radius plots nothing. Any radius up to
/// `i32::MAX` is handled without overflow.
pub fn draw_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Rgb,
) {
    if radius < 0 {
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut radius_error = 1 - i64::from(x);

    while y <= x {
        for (px, py) in [
            (x, y),
            (y, x),
            (-x, y),
            (-y, x),
            (-x, -y),
            (-y, -x),
            (x, -y),
            (y, -x),
        ] {
            surface.set_pixel(cx.wrapping_add(px), cy.wrapping_add(py), color);
        }

        y += 1;
        (x, radius_error) = midpoint_step(x, y, radius_error);
    }
}

/// Updates `x` and the error term after `y` has been incremented.
///
/// The error term is kept in `i64`: it grows to about twice the radius, which
/// does not fit in `i32` for radii near `i32::MAX`.
fn midpoint_step(x: i32, y: i32, radius_error: i64) -> (i32, i64) {
    let y = i64::from(y);
    if radius_error < 0 {
        (x, radius_error + 2 * y + 1)
    } else {
        let x = x - 1;
        (x, radius_error + 2 * (y - i64::from(x) + 1))
    }
}
