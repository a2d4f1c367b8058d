// src/config.rs

//! Serializable text rendering settings.
//!
//! A `TextStyle` bundles the per-call knobs of the text layout functions so
//! they can be kept in a configuration file (JSON here) instead of being
//! threaded through call sites one argument at a time. Missing fields fall
//! back to their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Direction the text cursor moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right, advancing by each glyph's width.
    #[default]
    Horizontal,
    /// Top to bottom, advancing by the font height.
    Vertical,
}

/// Colors, spacing and direction for a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Color of set glyph pixels.
    pub fg: Rgb,
    /// Color of unset glyph pixels. `None` leaves them untouched.
    pub bg: Option<Rgb>,
    /// Pixels added after every glyph, on top of its advance.
    /// May be negative to tighten the text.
    pub extra_spacing: i32,
    pub direction: TextDirection,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            fg: Rgb::WHITE,
            bg: None,
            extra_spacing: 0,
            direction: TextDirection::Horizontal,
        }
    }
}

impl TextStyle {
    /// Parses a style from JSON. Absent fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse text style JSON")
    }
}
