//! Color-space conversion between `#rrggbb` hex strings and HSL.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness are percentages
//! `[0, 100]`. Gray, black and white carry no hue: converting them to HSL
//! always yields `h = 0, s = 0`, so their original hue cannot be recovered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Parse a `#rrggbb` string (hex digits in either case).
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let digits = match hex.strip_prefix('#') {
            Some(digits) if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
                digits
            }
            _ => {
                log::debug!("Rejected color {:?}: expected #rrggbb", hex);
                return Err(ColorError::InvalidColorFormat(hex.to_string()));
            }
        };

        // from_str_radix alone would also accept a leading '+'
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))?;

        Ok(Self::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL. Achromatic colors map to `h = 0, s = 0`.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: wrap_hue(h * 60.0),
            s: (s * 100.0).min(100.0),
            l: l * 100.0,
        }
    }
}

impl From<HexColor> for Rgb {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Hue (degrees), saturation and lightness (percent).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a normalized HSL value.
    ///
    /// Hue wraps into `[0, 360)`; saturation and lightness clamp to `[0, 100]`.
    /// NaN components become 0.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// True when hue carries no information (gray, black or white).
    pub fn is_achromatic(&self) -> bool {
        self.s <= 0.0 || self.l <= 0.0 || self.l >= 100.0
    }

    /// Convert to 8-bit RGB, normalizing out-of-range components first.
    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = Hsl::new(self.h, self.s, self.l);
        let s = s / 100.0;
        let l = l / 100.0;
        let a = s * l.min(1.0 - l);

        let f = |n: f64| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };

        Rgb::new(to_channel(f(0.0)), to_channel(f(8.0)), to_channel(f(4.0)))
    }

    /// Convert to lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

/// A validated `#rrggbb` color.
///
/// Serializes as its lowercase hex string; deserializing a malformed string
/// fails with [`ColorError::InvalidColorFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: HexColor = HexColor(Rgb::BLACK);
    pub const WHITE: HexColor = HexColor(Rgb::WHITE);

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub fn parse(hex: &str) -> ColorResult<Self> {
        Rgb::from_hex(hex).map(Self)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        Self(hsl.to_rgb())
    }

    pub fn rgb(&self) -> Rgb {
        self.0
    }

    pub fn to_hsl(&self) -> Hsl {
        self.0.to_hsl()
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

/// Convert HSL to a lowercase `#rrggbb` string.
///
/// `h` may be any real number and is reduced modulo 360. `s` and `l` are
/// clamped to `[0, 100]`. Channels are rounded half away from zero.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Parse a `#rrggbb` string into HSL.
pub fn hex_to_hsl(hex: &str) -> ColorResult<Hsl> {
    Rgb::from_hex(hex).map(Rgb::to_hsl)
}

/// The fully saturated, mid-lightness color for a hue.
///
/// This is the top-right corner of a saturation/lightness gradient surface.
pub fn hue_to_hex(h: f64) -> String {
    hsl_to_hex(h, 100.0, 50.0)
}

fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        log::trace!("Non-finite hue {} replaced with 0", h);
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

pub(crate) fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        log::trace!("NaN percentage replaced with 0");
        return 0.0;
    }
    if !(0.0..=100.0).contains(&v) {
        log::trace!("Percentage {} clamped to [0, 100]", v);
    }
    v.clamp(0.0, 100.0)
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
