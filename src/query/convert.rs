//! Fold parsed [`Instructions`] onto [`CropperOptions`].

use crate::layout::{CanvasPosition, CropBoxPosition, Placement};
use crate::options::CropperOptions;
use crate::rect::RectPatch;

use super::instructions::{CanvasMode, CropBoxMode, Instructions};

impl Instructions {
    /// Options with these settings applied over the defaults.
    pub fn to_options(&self) -> CropperOptions {
        self.apply_to(CropperOptions::new())
    }

    /// Options with these settings applied over `base`.
    ///
    /// An explicit rect wins over the named mode for the same target. A
    /// `.center` flag without a rect centers a rect sized by the ratio rules
    /// (image width for the canvas, the full view for the crop box).
    pub fn apply_to(&self, base: CropperOptions) -> CropperOptions {
        let mut o = base;
        if let Some(width) = self.width {
            o.width = width;
        }
        if let Some(height) = self.height {
            o.height = height;
        }
        if let Some(ratio) = self.ratio {
            o.ratio = ratio;
        }

        if let Some(placement) = explicit(self.canvas_rect, self.canvas_center) {
            o.canvas_position = CanvasPosition::Explicit(placement);
        } else if let Some(mode) = self.canvas {
            o.canvas_position = match mode {
                CanvasMode::Fit => CanvasPosition::Fit,
                CanvasMode::OriginFit => CanvasPosition::OriginFit,
                CanvasMode::Origin => CanvasPosition::Origin,
            };
        }
        if let Some(ratio) = self.canvas_ratio {
            o = o.canvas_ratio(ratio);
        }

        if let Some(placement) = explicit(self.crop_box_rect, self.crop_box_center) {
            o.crop_box_position = CropBoxPosition::Explicit(placement);
        } else if let Some(mode) = self.crop_box {
            o.crop_box_position = match mode {
                CropBoxMode::Fit => CropBoxPosition::Fit,
                CropBoxMode::FitInCanvas => CropBoxPosition::FitInCanvas,
            };
        }
        if let Some(ratio) = self.crop_box_ratio {
            o = o.crop_box_ratio(ratio);
        }

        if let Some(overflow) = self.overflow {
            o.overflow = overflow;
        }
        if let Some(disabled) = self.disabled {
            o.disabled = disabled;
        }
        o
    }
}

fn explicit(rect: Option<RectPatch>, center: Option<bool>) -> Option<Placement> {
    let centered = center.unwrap_or(false);
    match rect {
        Some(rect) => Some(Placement { rect, centered }),
        None if centered => Some(Placement {
            rect: RectPatch::new(),
            centered,
        }),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Extent;

    #[test]
    fn empty_instructions_give_defaults() {
        assert_eq!(Instructions::new().to_options(), CropperOptions::new());
    }

    #[test]
    fn rect_wins_over_named_mode() {
        let inst = Instructions {
            crop_box: Some(CropBoxMode::Fit),
            crop_box_rect: Some(RectPatch::new().left(5.0)),
            ..Instructions::new()
        };
        assert_eq!(
            inst.to_options().crop_box_position,
            CropBoxPosition::Explicit(Placement::from_patch(RectPatch::new().left(5.0)))
        );
    }

    #[test]
    fn center_without_rect() {
        let inst = Instructions {
            canvas_center: Some(true),
            ..Instructions::new()
        };
        assert_eq!(
            inst.to_options().canvas_position,
            CanvasPosition::Explicit(Placement {
                rect: RectPatch::new(),
                centered: true
            })
        );
        let inst = Instructions {
            canvas_center: Some(false),
            canvas: Some(CanvasMode::Origin),
            ..Instructions::new()
        };
        assert_eq!(inst.to_options().canvas_position, CanvasPosition::Origin);
    }

    #[test]
    fn apply_keeps_unset_base_fields() {
        let base = CropperOptions::new()
            .size(Extent::Fixed(640.0), Extent::Fixed(480.0))
            .crop_box_ratio(1.5)
            .overflow(true);
        let inst = Instructions {
            height: Some(Extent::Auto),
            crop_box_ratio: Some(0.0),
            ..Instructions::new()
        };
        let o = inst.apply_to(base);
        assert_eq!(o.width, Extent::Fixed(640.0));
        assert_eq!(o.height, Extent::Auto);
        assert_eq!(o.crop_box_ratio, None);
        assert!(o.overflow);
    }
}
