//! Conversions to and from the renderer's color type.

use peniko::Color;

use crate::color::{HexColor, Hsl, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
    }
}

/// Alpha is dropped.
impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Rgb::new(rgba.r, rgba.g, rgba.b)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        color.rgb().into()
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb().into()
    }
}
