//! Brush settings and toolbar actions offered next to the color picker.

use serde::{Deserialize, Serialize};

/// Smallest brush diameter in pixels.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest brush diameter in pixels.
pub const MAX_BRUSH_SIZE: u32 = 20;
/// Brush diameter used before the user touches the slider.
pub const DEFAULT_BRUSH_SIZE: u32 = 5;

/// Brush diameter in pixels, always within `[MIN_BRUSH_SIZE, MAX_BRUSH_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct BrushSize(u32);

impl BrushSize {
    /// Create a brush size, clamping to the slider range.
    pub fn new(px: u32) -> Self {
        let clamped = px.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        if clamped != px {
            log::trace!("Brush size {} clamped to {}", px, clamped);
        }
        Self(clamped)
    }

    pub fn px(self) -> u32 {
        self.0
    }

    /// Slider label, e.g. `Brush Size: 5px`.
    pub fn label(self) -> String {
        format!("Brush Size: {}px", self.0)
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(DEFAULT_BRUSH_SIZE)
    }
}

impl From<u32> for BrushSize {
    fn from(px: u32) -> Self {
        Self::new(px)
    }
}

impl From<BrushSize> for u32 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// What a stroke does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
}

impl Tool {
    /// Switch between brush and eraser.
    pub fn toggle(self) -> Self {
        match self {
            Tool::Brush => Tool::Eraser,
            Tool::Eraser => Tool::Brush,
        }
    }

    pub fn is_eraser(self) -> bool {
        self == Tool::Eraser
    }

    /// Label for the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser ON",
        }
    }
}

/// Buttons on the top-right toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolbarAction {
    /// Clear the canvas.
    Reset,
    /// Score the current drawing.
    Calculate,
}

impl ToolbarAction {
    /// Actions in toolbar order, left to right.
    pub const ALL: [ToolbarAction; 2] = [ToolbarAction::Reset, ToolbarAction::Calculate];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::Reset => "Reset",
            ToolbarAction::Calculate => "Calculate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_size_clamps() {
        assert_eq!(BrushSize::new(0).px(), 1);
        assert_eq!(BrushSize::new(1).px(), 1);
        assert_eq!(BrushSize::new(12).px(), 12);
        assert_eq!(BrushSize::new(20).px(), 20);
        assert_eq!(BrushSize::new(64).px(), 20);
        assert_eq!(BrushSize::default().px(), DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn test_brush_size_label() {
        assert_eq!(BrushSize::new(7).label(), "Brush Size: 7px");
    }

    #[test]
    fn test_brush_size_serde_clamps() {
        let size: BrushSize = serde_json::from_str("42").unwrap();
        assert_eq!(size.px(), 20);
        assert_eq!(serde_json::to_string(&BrushSize::new(3)).unwrap(), "3");
    }

    #[test]
    fn test_tool_toggle() {
        assert_eq!(Tool::default(), Tool::Brush);
        assert_eq!(Tool::Brush.toggle(), Tool::Eraser);
        assert_eq!(Tool::Brush.toggle().toggle(), Tool::Brush);
        assert!(Tool::Eraser.is_eraser());
        assert_eq!(Tool::Brush.label(), "Brush");
        assert_eq!(Tool::Eraser.label(), "Eraser ON");
    }

    #[test]
    fn test_toolbar_order() {
        let labels: Vec<_> = ToolbarAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Reset", "Calculate"]);
    }
}
