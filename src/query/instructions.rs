//! Parsed representation of a query string.

use crate::layout::Extent;
use crate::rect::RectPatch;

/// Named canvas placement (`canvas`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CanvasMode {
    /// Shrink to fit the container, centered.
    Fit,
    /// Natural size, centered.
    OriginFit,
    /// Natural size at the container origin.
    Origin,
}

/// Named crop-box placement (`cropbox`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CropBoxMode {
    /// Fill the container.
    Fit,
    /// Fill the visible canvas.
    FitInCanvas,
}

/// Cropper settings parsed from a query string. Every field is optional;
/// absent fields keep the base option when converted.
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`to_options()`](Self::to_options).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Container width (`w`, `width`).
    pub width: Option<Extent>,
    /// Container height (`h`, `height`).
    pub height: Option<Extent>,
    /// Container scale (`ratio`).
    pub ratio: Option<f64>,
    /// Named canvas placement (`canvas`).
    pub canvas: Option<CanvasMode>,
    /// Explicit canvas rect (`canvas.rect`). Takes precedence over `canvas`.
    pub canvas_rect: Option<RectPatch>,
    /// Center the explicit canvas rect (`canvas.center`).
    pub canvas_center: Option<bool>,
    /// Canvas lock ratio (`canvas.ratio`), `0` for none.
    pub canvas_ratio: Option<f64>,
    /// Named crop-box placement (`cropbox`).
    pub crop_box: Option<CropBoxMode>,
    /// Explicit crop-box rect (`cropbox.rect`). Takes precedence over `cropbox`.
    pub crop_box_rect: Option<RectPatch>,
    /// Center the explicit crop-box rect (`cropbox.center`).
    pub crop_box_center: Option<bool>,
    /// Crop-box lock ratio (`cropbox.ratio`), `0` for none.
    pub crop_box_ratio: Option<f64>,
    /// `overflow`.
    pub overflow: Option<bool>,
    /// `disabled`.
    pub disabled: Option<bool>,
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no setting was parsed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
