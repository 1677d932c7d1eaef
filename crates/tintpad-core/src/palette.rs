//! Preset swatches shown in the color picker panel.

use crate::color::{HexColor, Rgb};

/// Number of swatches per row in the picker grid.
pub const SWATCH_COLUMNS: usize = 6;

const fn swatch(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(Rgb::new(r, g, b))
}

/// Preset colors in display order: twelve hues around the wheel, six dark
/// tones, then a gray ramp from black to white.
pub const SWATCHES: &[HexColor] = &[
    swatch(0xff, 0x00, 0x00), swatch(0xff, 0x80, 0x00), swatch(0xff, 0xff, 0x00),
    swatch(0x80, 0xff, 0x00), swatch(0x00, 0xff, 0x00), swatch(0x00, 0xff, 0x80),
    swatch(0x00, 0xff, 0xff), swatch(0x00, 0x80, 0xff), swatch(0x00, 0x00, 0xff),
    swatch(0x80, 0x00, 0xff), swatch(0xff, 0x00, 0xff), swatch(0xff, 0x00, 0x80),
    swatch(0x80, 0x00, 0x00), swatch(0x80, 0x80, 0x00), swatch(0x00, 0x80, 0x00),
    swatch(0x00, 0x80, 0x80), swatch(0x00, 0x00, 0x80), swatch(0x80, 0x00, 0x80),
    swatch(0x00, 0x00, 0x00), swatch(0x40, 0x40, 0x40), swatch(0x80, 0x80, 0x80),
    swatch(0xc0, 0xc0, 0xc0), swatch(0xff, 0xff, 0xff),
];

/// The preset swatch palette.
pub struct Palette;

impl Palette {
    /// All swatches in display order.
    pub fn swatches() -> &'static [HexColor] {
        SWATCHES
    }

    /// Grid cell `(row, column)` of the swatch at `index`.
    pub fn position(index: usize) -> Option<(usize, usize)> {
        (index < SWATCHES.len()).then(|| (index / SWATCH_COLUMNS, index % SWATCH_COLUMNS))
    }

    /// Number of grid rows needed to show every swatch.
    pub fn rows() -> usize {
        SWATCHES.len().div_ceil(SWATCH_COLUMNS)
    }

    /// Whether `swatch` is the currently selected color.
    ///
    /// `selected` comes straight from the presentation layer, so it is
    /// compared case-insensitively and never matches when malformed.
    pub fn is_selected(swatch: HexColor, selected: &str) -> bool {
        HexColor::parse(selected).is_ok_and(|color| color == swatch)
    }

    /// Index of the swatch matching `selected`, if it is a preset.
    pub fn index_of(selected: &str) -> Option<usize> {
        let color = HexColor::parse(selected).ok()?;
        SWATCHES.iter().position(|swatch| *swatch == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_order() {
        assert_eq!(SWATCHES.len(), 23);
        assert_eq!(SWATCHES[0].to_string(), "#ff0000");
        assert_eq!(SWATCHES[1].to_string(), "#ff8000");
        assert_eq!(SWATCHES[18].to_string(), "#000000");
        assert_eq!(SWATCHES[22].to_string(), "#ffffff");
    }

    #[test]
    fn test_hue_ring_is_evenly_spaced() {
        for (i, swatch) in SWATCHES[..12].iter().enumerate() {
            let hsl = swatch.to_hsl();
            let expected = i as f64 * 30.0;
            assert!((hsl.h - expected).abs() < 1.0, "swatch {} hue {}", i, hsl.h);
        }
    }

    #[test]
    fn test_gray_ramp_is_achromatic() {
        for swatch in &SWATCHES[18..] {
            assert_eq!(swatch.to_hsl().s, 0.0);
        }
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(Palette::rows(), 4);
        assert_eq!(Palette::position(0), Some((0, 0)));
        assert_eq!(Palette::position(5), Some((0, 5)));
        assert_eq!(Palette::position(6), Some((1, 0)));
        assert_eq!(Palette::position(22), Some((3, 4)));
        assert_eq!(Palette::position(23), None);
    }

    #[test]
    fn test_selection() {
        assert!(Palette::is_selected(SWATCHES[0], "#ff0000"));
        assert!(Palette::is_selected(SWATCHES[0], "#FF0000"));
        assert!(!Palette::is_selected(SWATCHES[0], "#ff0001"));
        assert!(!Palette::is_selected(SWATCHES[0], "red"));

        assert_eq!(Palette::index_of("#C0C0C0"), Some(21));
        assert_eq!(Palette::index_of("#123456"), None);
        assert_eq!(Palette::index_of("#fff"), None);
    }
}
