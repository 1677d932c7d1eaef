//! TintPad Core Library
//!
//! Color core for the TintPad drawing app: HSL/hex conversion, the
//! saturation/lightness gradient surface, the preset palette and brush
//! settings. Rendering, input handling and UI state live in the host app.

pub mod color;
pub mod error;
pub mod gradient;
#[cfg(feature = "peniko")]
pub mod interop;
pub mod palette;
pub mod tools;

pub use color::{HexColor, Hsl, Rgb, hex_to_hsl, hsl_to_hex, hue_to_hex};
pub use error::{ColorError, ColorResult};
pub use gradient::{GradientSurface, position_to_saturation_lightness, saturation_lightness_to_position};
pub use palette::{Palette, SWATCH_COLUMNS, SWATCHES};
pub use tools::{BrushSize, Tool, ToolbarAction, DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
