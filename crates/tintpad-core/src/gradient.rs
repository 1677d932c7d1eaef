//! Mapping between pointer positions on the saturation/lightness gradient
//! surface and color values.
//!
//! The surface's origin is its top-left corner. Saturation grows left to
//! right; lightness grows bottom to top.

use crate::color::{Hsl, clamp_percent};
use crate::error::{ColorError, ColorResult};

/// Pixel size of a gradient surface, validated to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSurface {
    width: f64,
    height: f64,
}

impl GradientSurface {
    /// Fails with [`ColorError::InvalidSurfaceDimensions`] when either side is
    /// not a positive finite number, e.g. when measuring an unmounted widget.
    pub fn new(width: f64, height: f64) -> ColorResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::debug!("Rejected gradient surface {}x{}", width, height);
            return Err(ColorError::InvalidSurfaceDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Saturation and lightness (percent) under a pointer position.
    ///
    /// Positions outside the surface clamp to its edges.
    pub fn saturation_lightness(&self, x: f64, y: f64) -> (f64, f64) {
        let saturation = clamp_percent(100.0 * x / self.width);
        let lightness = clamp_percent(100.0 * (1.0 - y / self.height));
        (saturation, lightness)
    }

    /// Pointer position for a saturation/lightness pair, used to place the cursor.
    pub fn position(&self, saturation: f64, lightness: f64) -> (f64, f64) {
        let x = clamp_percent(saturation) / 100.0 * self.width;
        let y = (1.0 - clamp_percent(lightness) / 100.0) * self.height;
        (x, y)
    }

    /// The color picked at a pointer position for the current hue.
    pub fn pick(&self, x: f64, y: f64, hue: f64) -> Hsl {
        let (s, l) = self.saturation_lightness(x, y);
        Hsl::new(hue, s, l)
    }

    /// Cursor position showing `color` on this surface. Hue is ignored.
    pub fn cursor(&self, color: Hsl) -> (f64, f64) {
        self.position(color.s, color.l)
    }
}

/// Map a pointer position to `(saturation, lightness)`, each in `[0, 100]`.
///
/// `x` and `y` are relative to the surface's top-left corner.
pub fn position_to_saturation_lightness(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> ColorResult<(f64, f64)> {
    Ok(GradientSurface::new(width, height)?.saturation_lightness(x, y))
}

/// Inverse of [`position_to_saturation_lightness`].
pub fn saturation_lightness_to_position(
    saturation: f64,
    lightness: f64,
    width: f64,
    height: f64,
) -> ColorResult<(f64, f64)> {
    Ok(GradientSurface::new(width, height)?.position(saturation, lightness))
}
