// tests/support/mod.rs

//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use ledgfx::{GlyphFont, PixelSurface, Rgb};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// A surface that remembers every `set_pixel` call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<(i32, i32, Rgb)>,
}

impl RecordingSurface {
    pub fn points(&self) -> Vec<(i32, i32)> {
        self.calls.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    pub fn point_set(&self) -> BTreeSet<(i32, i32)> {
        self.points().into_iter().collect()
    }
}

impl PixelSurface for RecordingSurface {
    fn width(&self) -> i32 {
        128
    }

    fn height(&self) -> i32 {
        128
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        self.calls.push((x, y, color));
    }
}

/// A monospace font that draws a filled `width` x `height` block per glyph
/// (top-left at the draw position) and records the codepoints it was given.
pub struct BlockFont {
    pub width: i32,
    pub height: i32,
    pub drawn: RefCell<Vec<(i32, i32, u32)>>,
}

impl BlockFont {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            drawn: RefCell::new(Vec::new()),
        }
    }

    pub fn positions(&self) -> Vec<(i32, i32)> {
        self.drawn.borrow().iter().map(|&(x, y, _)| (x, y)).collect()
    }
}

impl GlyphFont for BlockFont {
    fn height(&self) -> i32 {
        self.height
    }

    fn draw_glyph<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        fg: Rgb,
        _bg: Option<Rgb>,
        codepoint: u32,
    ) -> i32 {
        self.drawn.borrow_mut().push((x, y, codepoint));
        for dy in 0..self.height {
            for dx in 0..self.width {
                surface.set_pixel(x + dx, y + dy, fg);
            }
        }
        self.width
    }
}
