// src/surface.rs

//! The pixel sink every drawing routine writes into.
//!
//! `PixelSurface` is deliberately tiny: one pixel setter plus the canvas
//! dimensions. Clipping is the surface's job; callers are free to pass
//! coordinates that fall outside the visible area.

use crate::color::Rgb;
use log::trace;

/// Something that can have individual pixels set.
pub trait PixelSurface {
    /// Visible width in pixels.
    fn width(&self) -> i32;

    /// Visible height in pixels.
    fn height(&self) -> i32;

    /// Sets one pixel. Implementations must tolerate out-of-range
    /// coordinates, either by ignoring them or by clipping.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Paints every visible pixel with `color`.
    fn fill(&mut self, color: Rgb) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x, y, color);
            }
        }
    }
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        (**self).set_pixel(x, y, color)
    }

    fn fill(&mut self, color: Rgb) {
        (**self).fill(color)
    }
}

/// An owned, row-major RGB framebuffer.
///
/// Writes outside `0..width` x `0..height` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Creates a black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    /// Returns the pixel at `(x, y)`, or `None` when out of range.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index_of(x, y).map(|idx| self.pixels[idx])
    }

    /// Resets every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Row-major view of the pixel data.
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

impl PixelSurface for PixelBuffer {
    fn width(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    fn height(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        match self.index_of(x, y) {
            Some(idx) => self.pixels[idx] = color,
            None => trace!("PixelBuffer: dropping write at ({}, {})", x, y),
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}
