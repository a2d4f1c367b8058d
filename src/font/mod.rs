// src/font/mod.rs

//! BDF bitmap fonts.
//!
//! Parses the text form of a Glyph Bitmap Distribution Format font and
//! renders its glyphs pixel by pixel through a `PixelSurface`. Only the
//! subset of BDF needed for drawing is read:
//!
//! ```text
//! FONTBOUNDINGBOX w h xoff yoff    line height and baseline
//! ENCODING n                       codepoint of the glyph
//! DWIDTH dx dy                     horizontal advance
//! BBX w h xoff yoff                glyph bitmap box
//! BITMAP / hex rows / ENDCHAR      the bitmap itself
//! ```
//!
//! Everything else (properties, SWIDTH, comments) is ignored.

use crate::color::Rgb;
use crate::surface::PixelSurface;
use crate::text::utf8::REPLACEMENT_CODEPOINT;
use crate::text::GlyphFont;
use anyhow::{bail, Context, Result};
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::str::SplitWhitespace;

/// Glyph rows are stored as 32-bit masks, leftmost pixel in the top bit.
const MAX_GLYPH_WIDTH: i32 = 32;

/// A single parsed glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BdfGlyph {
    device_width: i32,
    height: i32,
    y_offset: i32,
    /// One mask per bitmap row, already shifted by the glyph's x offset.
    rows: Vec<u32>,
}

impl BdfGlyph {
    fn is_set(&self, row: usize, x: i32) -> bool {
        x < MAX_GLYPH_WIDTH && self.rows[row] & (0x8000_0000 >> x) != 0
    }
}

/// A bitmap font loaded from BDF source text.
#[derive(Debug, Clone, Default)]
pub struct BdfFont {
    height: i32,
    baseline: i32,
    glyphs: HashMap<u32, BdfGlyph>,
}

/// Glyph being assembled between `STARTCHAR` and `ENDCHAR`.
#[derive(Default)]
struct PendingGlyph {
    codepoint: Option<u32>,
    device_width: i32,
    glyph: Option<BdfGlyph>,
    /// Shift that left-aligns a hex row into a 32-bit mask and applies xoff.
    row_shift: i32,
    in_bitmap: bool,
}

impl BdfFont {
    /// Parses BDF source text.
    ///
    /// Glyphs whose bitmap has fewer rows than their `BBX` declares are
    /// skipped with a warning. A missing `FONTBOUNDINGBOX`, a malformed number
    /// or a glyph wider than 32 pixels is an error.
    pub fn parse(source: &str) -> Result<Self> {
        let mut bounding_box: Option<(i32, i32)> = None;
        let mut glyphs = HashMap::new();
        let mut pending = PendingGlyph::default();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let mut fields = line.split_whitespace();
            let Some(keyword) = fields.next() else {
                continue;
            };

            match keyword {
                "FONTBOUNDINGBOX" => {
                    let [_width, height, _x_offset, y_offset] = parse_fields(fields)
                        .with_context(|| format!("BDF line {}: bad FONTBOUNDINGBOX", line_no))?;
                    bounding_box = Some((height, y_offset + height));
                }
                "STARTCHAR" => pending = PendingGlyph::default(),
                "ENCODING" => {
                    let [encoding] = parse_fields(fields)
                        .with_context(|| format!("BDF line {}: bad ENCODING", line_no))?;
                    // Negative encodings mark glyphs without a standard codepoint.
                    pending.codepoint = u32::try_from(encoding).ok();
                }
                "DWIDTH" => {
                    let [dx, _dy] = parse_fields(fields)
                        .with_context(|| format!("BDF line {}: bad DWIDTH", line_no))?;
                    pending.device_width = dx;
                }
                "BBX" => {
                    let [width, height, x_offset, y_offset] = parse_fields(fields)
                        .with_context(|| format!("BDF line {}: bad BBX", line_no))?;
                    if !(0..=MAX_GLYPH_WIDTH).contains(&width) || height < 0 {
                        bail!(
                            "BDF line {}: glyph box {}x{} unsupported (max width {})",
                            line_no,
                            width,
                            height,
                            MAX_GLYPH_WIDTH
                        );
                    }
                    let row_bytes = (width + 7) / 8;
                    pending.row_shift = 8 * (4 - row_bytes) - x_offset;
                    pending.glyph = Some(BdfGlyph {
                        device_width: pending.device_width,
                        height,
                        y_offset,
                        rows: Vec::new(),
                    });
                    pending.in_bitmap = false;
                }
                "BITMAP" => pending.in_bitmap = true,
                "ENDCHAR" => {
                    pending.in_bitmap = false;
                    // DWIDTH may come after BBX.
                    if let Some(glyph) = pending.glyph.as_mut() {
                        glyph.device_width = pending.device_width;
                    }
                    match (pending.codepoint.take(), pending.glyph.take()) {
                        (Some(codepoint), Some(glyph)) if glyph.rows.len() == glyph.height as usize => {
                            glyphs.insert(codepoint, glyph);
                        }
                        (Some(codepoint), Some(glyph)) => warn!(
                            "BdfFont: dropping U+{:04X}, {} of {} bitmap rows present",
                            codepoint,
                            glyph.rows.len(),
                            glyph.height
                        ),
                        _ => trace!("BdfFont: skipping glyph without ENCODING or BBX ending on line {}", line_no),
                    }
                }
                row if pending.in_bitmap => {
                    if let Some(glyph) = pending.glyph.as_mut() {
                        if glyph.rows.len() < glyph.height as usize {
                            let bits = u32::from_str_radix(row, 16).with_context(|| {
                                format!("BDF line {}: bad bitmap row '{}'", line_no, row)
                            })?;
                            glyph.rows.push(shift_row(bits, pending.row_shift));
                        }
                    }
                }
                _ => {}
            }
        }

        let (height, baseline) =
            bounding_box.context("BDF source has no FONTBOUNDINGBOX line")?;
        debug!(
            "BdfFont: loaded {} glyphs, height {}, baseline {}",
            glyphs.len(),
            height,
            baseline
        );
        Ok(BdfFont {
            height,
            baseline,
            glyphs,
        })
    }

    /// Advance width of `codepoint`, or `None` if the font lacks it.
    pub fn character_width(&self, codepoint: u32) -> Option<i32> {
        self.glyphs.get(&codepoint).map(|g| g.device_width)
    }

    /// Number of glyphs in the font.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    fn find_glyph(&self, codepoint: u32) -> Option<&BdfGlyph> {
        self.glyphs.get(&codepoint).or_else(|| {
            trace!("BdfFont: no glyph for U+{:04X}, trying replacement", codepoint);
            self.glyphs.get(&REPLACEMENT_CODEPOINT)
        })
    }
}

impl GlyphFont for BdfFont {
    fn height(&self) -> i32 {
        self.height
    }

    fn baseline(&self) -> i32 {
        self.baseline
    }

    /// Draws the glyph with its baseline at `y`.
    ///
    /// Unknown codepoints fall back to U+FFFD; if the font has no replacement
    /// glyph either, nothing is drawn and the advance is 0. Glyphs that lie
    /// completely off the surface are skipped but still advance.
    fn draw_glyph<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        fg: Rgb,
        bg: Option<Rgb>,
        codepoint: u32,
    ) -> i32 {
        let Some(glyph) = self.find_glyph(codepoint) else {
            return 0;
        };
        let top = y.wrapping_sub(glyph.height).wrapping_sub(glyph.y_offset);
        let bottom = top.wrapping_add(glyph.height);

        if x.wrapping_add(glyph.device_width) < 0
            || x > surface.width()
            || bottom < 0
            || top > surface.height()
        {
            return glyph.device_width;
        }

        for (row, py) in (top..bottom).enumerate() {
            for dx in 0..glyph.device_width {
                if glyph.is_set(row, dx) {
                    surface.set_pixel(x + dx, py, fg);
                } else if let Some(bg) = bg {
                    surface.set_pixel(x + dx, py, bg);
                }
            }
        }
        glyph.device_width
    }
}

fn shift_row(bits: u32, shift: i32) -> u32 {
    if shift >= 0 {
        bits.checked_shl(shift as u32).unwrap_or(0)
    } else {
        bits.checked_shr(shift.unsigned_abs()).unwrap_or(0)
    }
}

fn parse_fields<const N: usize>(mut fields: SplitWhitespace<'_>) -> Result<[i32; N]> {
    let mut values = [0; N];
    for (i, value) in values.iter_mut().enumerate() {
        let field = fields
            .next()
            .with_context(|| format!("expected {} numbers, found {}", N, i))?;
        *value = field
            .parse()
            .with_context(|| format!("'{}' is not an integer", field))?;
    }
    Ok(values)
}
