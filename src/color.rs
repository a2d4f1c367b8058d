// src/color.rs

//! Defines the color value types (`Rgb`, `Hsv`) and the HSV to RGB conversion.
//!
//! All channels are plain bytes on a 0-255 scale, hue included. The conversion
//! is done with 8-bit fixed-point arithmetic so that the produced bytes are
//! identical to what existing LED matrix consumers expect, rounding artifacts
//! and all.

use serde::{Deserialize, Serialize};

/// An RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An HSV color. Hue, saturation and value all use the full 0-255 byte range
/// (not degrees or percentages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Width of one hue sector on the byte scale.
const HUE_SECTOR_WIDTH: u8 = 43;

/// One of the six hue sectors of the color wheel.
///
/// Sectors are `h / 43`, so `Magenta` is the catch-all for 215..=255 and is
/// four hue steps wider than the others (6 * 43 = 258 does not divide 256).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HueRegion {
    Red = 0,
    Yellow = 1,
    Green = 2,
    Cyan = 3,
    Blue = 4,
    Magenta = 5,
}

impl HueRegion {
    /// Picks the sector a hue byte falls into.
    pub const fn from_hue(h: u8) -> Self {
        match h / HUE_SECTOR_WIDTH {
            0 => HueRegion::Red,
            1 => HueRegion::Yellow,
            2 => HueRegion::Green,
            3 => HueRegion::Cyan,
            4 => HueRegion::Blue,
            _ => HueRegion::Magenta,
        }
    }

    /// First hue byte belonging to this sector.
    pub const fn start(self) -> u8 {
        self as u8 * HUE_SECTOR_WIDTH
    }
}

/// Converts an HSV color to RGB.
///
/// Zero saturation is achromatic: the result is `(v, v, v)` whatever the hue.
/// Otherwise the hue sector selects which of `v` and the three fixed-point
/// intermediates `p`, `q`, `t` lands in each channel. Every intermediate is
/// truncated to 8 bits, matching the reference byte output exactly.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    if hsv.s == 0 {
        return Rgb::new(hsv.v, hsv.v, hsv.v);
    }

    let region = HueRegion::from_hue(hsv.h);
    // Position inside the sector scaled to 0..=255.
    let remainder: u8 = (hsv.h - region.start()).wrapping_mul(6);

    let v = u16::from(hsv.v);
    let s = u16::from(hsv.s);
    let rem = u16::from(remainder);

    // (a * b) >> 8 is a fixed-point multiply by b / 256.
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * rem) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - rem)) >> 8))) >> 8) as u8;
    let v = hsv.v;

    match region {
        HueRegion::Red => Rgb::new(v, t, p),
        HueRegion::Yellow => Rgb::new(q, v, p),
        HueRegion::Green => Rgb::new(p, v, t),
        HueRegion::Cyan => Rgb::new(p, q, v),
        HueRegion::Blue => Rgb::new(t, p, v),
        HueRegion::Magenta => Rgb::new(v, p, q),
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}
