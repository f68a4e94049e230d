//! Cropper configuration.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropBoxPosition, CropperOptions, Extent, Placement};
//!
//! let options = CropperOptions::new()
//!     .size(Extent::Fixed(800.0), Extent::Fixed(400.0))
//!     .crop_box_position(CropBoxPosition::Explicit(Placement::centered(200.0, 200.0)))
//!     .crop_box_ratio(1.0);
//!
//! assert!(options.validate().is_ok());
//! assert_eq!(options.crop_box_ratio, Some(1.0));
//! ```

use crate::error::CropError;
use crate::layout::{CanvasPosition, CropBoxOptions, CropBoxPosition, Extent, Placement, lock_ratio};
use crate::rect::RectPatch;

/// Everything that shapes the widget's geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropperOptions {
    /// Container width.
    pub width: Extent,
    /// Container height.
    pub height: Extent,
    /// Scale applied to the image size when both extents are auto.
    pub ratio: f64,
    pub canvas_position: CanvasPosition,
    /// Lock ratio for explicit canvas sizing.
    pub canvas_ratio: Option<f64>,
    pub crop_box_position: CropBoxPosition,
    /// Lock ratio for the crop box.
    pub crop_box_ratio: Option<f64>,
    /// Whether the crop box may extend beyond the canvas.
    pub overflow: bool,
    /// Suppress all pointer-driven changes.
    pub disabled: bool,
}

impl Default for CropperOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CropperOptions {
    /// Auto-sized container, image fit and centered, crop box filling the image.
    pub const fn new() -> Self {
        Self {
            width: Extent::Auto,
            height: Extent::Auto,
            ratio: 1.0,
            canvas_position: CanvasPosition::Fit,
            canvas_ratio: None,
            crop_box_position: CropBoxPosition::FitInCanvas,
            crop_box_ratio: None,
            overflow: false,
            disabled: false,
        }
    }

    /// Set both container extents.
    pub fn size(mut self, width: Extent, height: Extent) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the container scale used when both extents are auto.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn canvas_position(mut self, position: CanvasPosition) -> Self {
        self.canvas_position = position;
        self
    }

    /// Set the canvas lock ratio. Zero or negative clears it.
    pub fn canvas_ratio(mut self, ratio: f64) -> Self {
        self.canvas_ratio = lock_ratio(ratio);
        self
    }

    pub fn crop_box_position(mut self, position: CropBoxPosition) -> Self {
        self.crop_box_position = position;
        self
    }

    /// Set the crop-box lock ratio. Zero or negative clears it.
    pub fn crop_box_ratio(mut self, ratio: f64) -> Self {
        self.crop_box_ratio = lock_ratio(ratio);
        self
    }

    pub fn overflow(mut self, overflow: bool) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Crop-box constraints derived from these options.
    pub fn crop_box_options(&self) -> CropBoxOptions {
        CropBoxOptions {
            overflow: self.overflow,
            ratio: self.crop_box_ratio,
        }
    }

    /// Reject values no layout can be computed from.
    pub fn validate(&self) -> Result<(), CropError> {
        check_extent(self.width, "width")?;
        check_extent(self.height, "height")?;
        if !(self.ratio.is_finite() && self.ratio > 0.0) {
            return Err(CropError::InvalidRatio { field: "ratio" });
        }
        check_lock(self.canvas_ratio, "canvas_ratio")?;
        check_lock(self.crop_box_ratio, "crop_box_ratio")?;
        if let CanvasPosition::Explicit(p) = &self.canvas_position {
            check_placement(p, "canvas_position")?;
        }
        if let CropBoxPosition::Explicit(p) = &self.crop_box_position {
            check_placement(p, "crop_box_position")?;
        }
        Ok(())
    }
}

fn check_extent(extent: Extent, field: &'static str) -> Result<(), CropError> {
    match extent {
        Extent::Fixed(v) if !(v.is_finite() && v >= 0.0) => Err(CropError::InvalidExtent { field }),
        _ => Ok(()),
    }
}

fn check_lock(ratio: Option<f64>, field: &'static str) -> Result<(), CropError> {
    match ratio {
        Some(r) if !(r.is_finite() && r > 0.0) => Err(CropError::InvalidRatio { field }),
        _ => Ok(()),
    }
}

fn check_placement(placement: &Placement, field: &'static str) -> Result<(), CropError> {
    let RectPatch {
        top,
        left,
        width,
        height,
    } = placement.rect;
    if [top, left, width, height]
        .into_iter()
        .flatten()
        .all(f64::is_finite)
    {
        Ok(())
    } else {
        Err(CropError::InvalidPlacement { field })
    }
}
