// src/text/mod.rs

//! Text layout: walks a UTF-8 string and places one glyph per codepoint.
//!
//! Layout never touches pixels itself. Every codepoint is handed to a
//! `GlyphFont`, which renders it onto the surface and reports how far it
//! advanced. The functions here only move the cursor.

pub mod utf8;

use crate::color::Rgb;
use crate::config::{TextDirection, TextStyle};
use crate::surface::PixelSurface;
use log::trace;
use utf8::Codepoints;

/// A font able to render single codepoints onto a surface.
pub trait GlyphFont {
    /// Line height in pixels; the vertical advance of stacked text.
    fn height(&self) -> i32;

    /// Distance from the top of a line to the baseline.
    fn baseline(&self) -> i32 {
        self.height()
    }

    /// Renders `codepoint` with its origin at `(x, y)` and returns the
    /// horizontal advance in pixels.
    ///
    /// Set glyph pixels are drawn in `fg`. When `bg` is `Some`, the unset
    /// pixels of the glyph cell are drawn in it, otherwise they are left
    /// untouched.
    fn draw_glyph<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        fg: Rgb,
        bg: Option<Rgb>,
        codepoint: u32,
    ) -> i32;
}

impl<F: GlyphFont + ?Sized> GlyphFont for &F {
    fn height(&self) -> i32 {
        (**self).height()
    }

    fn baseline(&self) -> i32 {
        (**self).baseline()
    }

    fn draw_glyph<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        fg: Rgb,
        bg: Option<Rgb>,
        codepoint: u32,
    ) -> i32 {
        (**self).draw_glyph(surface, x, y, fg, bg, codepoint)
    }
}

/// Draws `text` left to right starting at `(x, y)`.
///
/// After each glyph the cursor moves by the glyph's advance plus
/// `extra_spacing`. Returns the total horizontal distance covered, which is
/// 0 for empty text. The cursor wraps around at the ends of the `i32`
/// range instead of overflowing.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_horizontal<S, F>(
    surface: &mut S,
    font: &F,
    x: i32,
    y: i32,
    fg: Rgb,
    bg: Option<Rgb>,
    text: impl AsRef<[u8]>,
    extra_spacing: i32,
) -> i32
where
    S: PixelSurface + ?Sized,
    F: GlyphFont + ?Sized,
{
    let start_x = x;
    let mut x = x;
    for codepoint in Codepoints::new(text.as_ref()) {
        let advance = font.draw_glyph(surface, x, y, fg, bg, codepoint);
        x = x.wrapping_add(advance).wrapping_add(extra_spacing);
    }
    let width = x.wrapping_sub(start_x);
    trace!("draw_text_horizontal: advanced {} px from x={}", width, start_x);
    width
}

/// Draws `text` top to bottom starting at `(x, y)`.
///
/// Every glyph is drawn at the same `x`; the cursor moves down by the font
/// height plus `extra_spacing` per codepoint, whatever the glyph's own
/// width. Returns the total vertical distance covered.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_vertical<S, F>(
    surface: &mut S,
    font: &F,
    x: i32,
    y: i32,
    fg: Rgb,
    bg: Option<Rgb>,
    text: impl AsRef<[u8]>,
    extra_spacing: i32,
) -> i32
where
    S: PixelSurface + ?Sized,
    F: GlyphFont + ?Sized,
{
    let start_y = y;
    let mut y = y;
    for codepoint in Codepoints::new(text.as_ref()) {
        font.draw_glyph(surface, x, y, fg, bg, codepoint);
        y = y.wrapping_add(font.height()).wrapping_add(extra_spacing);
    }
    let height = y.wrapping_sub(start_y);
    trace!("draw_text_vertical: advanced {} px from y={}", height, start_y);
    height
}

/// Draws `text` horizontally with a transparent background and no extra
/// spacing.
pub fn draw_text<S, F>(
    surface: &mut S,
    font: &F,
    x: i32,
    y: i32,
    fg: Rgb,
    text: impl AsRef<[u8]>,
) -> i32
where
    S: PixelSurface + ?Sized,
    F: GlyphFont + ?Sized,
{
    draw_text_horizontal(surface, font, x, y, fg, None, text, 0)
}

/// Draws `text` using the colors, spacing and direction from `style`.
///
/// Returns the distance covered along the style's direction.
pub fn draw_styled_text<S, F>(
    surface: &mut S,
    font: &F,
    x: i32,
    y: i32,
    style: &TextStyle,
    text: impl AsRef<[u8]>,
) -> i32
where
    S: PixelSurface + ?Sized,
    F: GlyphFont + ?Sized,
{
    match style.direction {
        TextDirection::Horizontal => draw_text_horizontal(
            surface,
            font,
            x,
            y,
            style.fg,
            style.bg,
            text,
            style.extra_spacing,
        ),
        TextDirection::Vertical => draw_text_vertical(
            surface,
            font,
            x,
            y,
            style.fg,
            style.bg,
            text,
            style.extra_spacing,
        ),
    }
}
