// src/lib.rs

//! Integer-only 2D drawing primitives for small pixel displays.
//!
//! Everything here draws through two collaborator traits:
//!
//! - [`PixelSurface`]: anything that can set a single pixel (an LED matrix,
//!   a framebuffer, the in-memory [`PixelBuffer`]).
//! - [`GlyphFont`]: anything that can render one codepoint at a position and
//!   report how far it advanced (the BDF-backed [`BdfFont`], or your own).
//!
//! No floating point is used anywhere. Lines use a 16.16 fixed-point DDA,
//! circles use the midpoint algorithm, and HSV conversion uses 8-bit
//! fixed-point math so output bytes are stable across platforms.

pub mod color;
pub mod config;
pub mod font;
pub mod rasterizer;
pub mod surface;
pub mod text;

pub use color::{hsv_to_rgb, HueRegion, Hsv, Rgb};
pub use config::{TextDirection, TextStyle};
pub use font::BdfFont;
pub use rasterizer::{draw_circle, draw_line};
pub use surface::{PixelBuffer, PixelSurface};
pub use text::{
    draw_styled_text, draw_text, draw_text_horizontal, draw_text_vertical, GlyphFont,
};
