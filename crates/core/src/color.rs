//! Sampled particle colors.
//!
//! A [`Color`] keeps the raw RGBA bytes read from the sampling surface together
//! with the CSS fill style string built from them. The string is built once at
//! sampling time so the browser draw loop never formats per frame.

use std::fmt;

/// An immutable RGBA8 color plus its `rgba(r,g,b,a)` CSS form.
///
/// The alpha component is written as the raw byte (0..=255), exactly as it
/// was sampled. CSS clamps alpha to [0, 1], so any non-zero alpha renders
/// opaque in a browser; CPU painters check [`Color::is_visible`] to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    rgba: [u8; 4],
    css: String,
}

impl Color {
    /// Builds a color from its four channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgba: [r, g, b, a],
            css: format!("rgba({r},{g},{b},{a})"),
        }
    }

    /// Builds a color from a 4-byte RGBA slice.
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self::new(r, g, b, a)
    }

    /// The raw channels.
    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.rgba[0]
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.rgba[1]
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.rgba[2]
    }

    /// Alpha channel as sampled.
    pub fn a(&self) -> u8 {
        self.rgba[3]
    }

    /// The CSS fill style string, e.g. `rgba(255,0,0,255)`.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Whether the sampled pixel was at least partly visible.
    pub fn is_visible(&self) -> bool {
        self.rgba[3] > 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}
