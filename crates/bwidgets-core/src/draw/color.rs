// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour types

use crate::cast::{Conv, ConvFloat};
use thiserror::Error;

/// 4-part colour data, each component in the range `0..=1`
///
/// This is the colour type handed to the paint engine.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    /// Transparent black
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Self = Self::grey(1.0);
    /// Opaque black
    pub const BLACK: Self = Self::grey(0.0);

    /// Construct from R-G-B-A components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from opaque R-G-B
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Construct from grey-scale
    pub const fn grey(s: f32) -> Self {
        Self::rgb(s, s, s)
    }

    /// Construct from byte components (`0..=255`)
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f32::conv(r) / 255.0,
            f32::conv(g) / 255.0,
            f32::conv(b) / 255.0,
            f32::conv(a) / 255.0,
        )
    }

    /// Construct an opaque grey from a byte level (`0..=255`)
    pub fn grey_byte(level: u8) -> Self {
        Self::from_bytes(level, level, level, 255)
    }

    /// Shade by `amount / 255` on each colour component, clamped
    ///
    /// Positive values lighten, negative values darken. Alpha is unchanged.
    pub fn shade(&mut self, amount: i32) {
        let delta = f32::conv(amount) / 255.0;
        self.r = (self.r + delta).clamp(0.0, 1.0);
        self.g = (self.g + delta).clamp(0.0, 1.0);
        self.b = (self.b + delta).clamp(0.0, 1.0);
    }

    /// Return a copy shaded by `amount / 255`
    ///
    /// See [`Self::shade`].
    #[must_use = "method does not modify self but returns a new value"]
    pub fn shaded(mut self, amount: i32) -> Self {
        self.shade(amount);
        self
    }

    /// Linear blend: `self` at `t = 0`, `other` at `t = 1`
    pub fn mix(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        Self::rgba(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
            self.a * s + other.a * t,
        )
    }

    /// Return a copy with the given alpha component
    #[must_use = "method does not modify self but returns a new value"]
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

/// 8-bit-per-channel colour + alpha component
///
/// This is the format used by theme data (alpha component defaults to opaque).
///
/// This type may be parsed from a string:
/// ```
/// use bwidgets_core::draw::color::Rgba8;
///
/// let red: Rgba8 = "#FF0000".parse().unwrap();
/// assert_eq!(red, Rgba8::rgb(255, 0, 0));
///
/// // The leading `#` is optional and lowercase is fine
/// let green: Rgba8 = "00ff00".parse().unwrap();
/// assert_eq!(green, Rgba8::rgb(0, 255, 0));
///
/// // An optional fourth byte is interpreted as alpha component
/// let translucent_blue: Rgba8 = "0000FF7F".parse().unwrap();
/// assert_eq!(translucent_blue, Rgba8::rgba(0, 0, 255, 127));
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgba8([u8; 4]);

impl Rgba8 {
    /// Transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::grey(255);
    /// Opaque black
    pub const BLACK: Self = Self::grey(0);

    /// Construct from R-G-B-A components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Construct from opaque R-G-B
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Construct from grey-scale
    pub const fn grey(s: u8) -> Self {
        Self::rgb(s, s, s)
    }

    /// Parse a hex colour in a const context
    ///
    /// Panics on invalid input; intended for colour tables.
    pub const fn parse(s: &str) -> Self {
        const fn val(c: u8) -> u8 {
            match c {
                b'A'..=b'F' => c - b'A' + 10,
                b'a'..=b'f' => c - b'a' + 10,
                b'0'..=b'9' => c - b'0',
                _ => panic!("invalid hex digit"),
            }
        }

        const fn byte(s: &[u8], i: usize) -> u8 {
            (val(s[i]) << 4) | val(s[i + 1])
        }

        let s = s.as_bytes();
        assert!(s.len() == 6 || s.len() == 8);
        let a = if s.len() == 8 { byte(s, 6) } else { 0xFF };
        Self([byte(s, 0), byte(s, 2), byte(s, 4), a])
    }

    /// Format to a string
    ///
    /// This looks like `#123456` if the alpha component is opaque, otherwise
    /// like `#12345678`.
    pub fn format_html(self) -> String {
        if self.0[3] == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.0[0], self.0[1], self.0[2], self.0[3]
            )
        }
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.0
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(c: [u8; 4]) -> Self {
        Self(c)
    }
}

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        Color::from_bytes(c.0[0], c.0[1], c.0[2], c.0[3])
    }
}

impl From<Color> for Rgba8 {
    fn from(c: Color) -> Self {
        let byte = |x: f32| u8::conv_nearest(x.clamp(0.0, 1.0) * 255.0);
        Rgba8([byte(c.r), byte(c.g), byte(c.b), byte(c.a)])
    }
}

/// Colour parse error
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Incorrect input length
    #[error("input has unexpected length (expected optional `#` then 6 or 8 bytes")]
    Length,
    /// Invalid hex byte
    #[error("input byte is not a valid hex byte (expected 0-9, a-f or A-F)")]
    InvalidHex,
}

/// Parse colour designator from a string
///
/// Accepts:
///
/// -   optional `#` prefix
/// -   upper and lower case hex digits
/// -   six (RGB) or eight (RGBA) digits
impl std::str::FromStr for Rgba8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s).as_bytes();
        if s.len() != 6 && s.len() != 8 {
            return Err(ParseError::Length);
        }

        fn val(c: u8) -> Result<u8, ParseError> {
            match c {
                b'A'..=b'F' => Ok(c - b'A' + 10),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'0'..=b'9' => Ok(c - b'0'),
                _ => Err(ParseError::InvalidHex),
            }
        }

        fn byte(s: &[u8]) -> Result<u8, ParseError> {
            Ok((val(s[0])? << 4) | val(s[1])?)
        }

        let r = byte(&s[0..2])?;
        let g = byte(&s[2..4])?;
        let b = byte(&s[4..6])?;
        let a = if s.len() == 8 { byte(&s[6..8])? } else { 0xFF };

        Ok(Rgba8([r, g, b, a]))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_html())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Rgba8;

            fn expecting(&self, fmtr: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    fmtr,
                    "an HTML color code with optional '#' prefix then 6 or 8 hex digits"
                )
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shade_clamps() {
        let mut c = Color::grey_byte(250);
        c.shade(15);
        assert_eq!(c, Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(Color::grey_byte(10).shaded(-20), Color::BLACK);

        let c = Color::from_bytes(100, 100, 100, 128).shaded(15);
        assert_eq!(Rgba8::from(c), Rgba8::rgba(115, 115, 115, 128));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("#12345".parse::<Rgba8>(), Err(ParseError::Length));
        assert_eq!("#12345G".parse::<Rgba8>(), Err(ParseError::InvalidHex));
        assert_eq!("3d3d3d".parse::<Rgba8>(), Ok(Rgba8::grey(0x3d)));
        assert_eq!(Rgba8::parse("5680C2"), Rgba8::rgb(0x56, 0x80, 0xc2));
    }

    #[test]
    fn format_html() {
        assert_eq!(Rgba8::rgb(1, 2, 255).format_html(), "#0102FF");
        assert_eq!(Rgba8::rgba(1, 2, 3, 4).format_html(), "#01020304");
    }
}
