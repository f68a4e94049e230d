//! Container, canvas and crop-box placement.
//!
//! Three pure functions derive the widget's rectangles from the options and
//! the current image size, always in this order:
//!
//! 1. [`compute_container`]: outer bounds, from configured extents or the image.
//! 2. [`compute_canvas`]: where the image is drawn inside the container.
//! 3. [`compute_crop_box`]: the selection, bounded by the container and,
//!    unless overflow is allowed, by the canvas.
//!
//! # Example
//!
//! ```
//! use zencrop::layout::{self, CanvasPosition, CropBoxOptions, CropBoxPosition, Extent, ImageSize};
//! use zencrop::Rect;
//!
//! let image = ImageSize::new(1600.0, 800.0);
//! let container = layout::compute_container(
//!     Some(image),
//!     Extent::Fixed(800.0),
//!     Extent::Fixed(400.0),
//!     1.0,
//! );
//! let canvas = layout::compute_canvas(&CanvasPosition::Fit, None, image, container);
//! assert_eq!(canvas, Rect::new(0.0, 0.0, 800.0, 400.0));
//!
//! let crop = layout::compute_crop_box(
//!     &CropBoxPosition::FitInCanvas,
//!     CropBoxOptions { overflow: false, ratio: Some(1.0) },
//!     container,
//!     canvas,
//! );
//! assert_eq!(crop, Rect::new(200.0, 0.0, 400.0, 400.0));
//! ```

use crate::rect::{Rect, RectPatch};

/// Natural pixel size of the loaded image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width / height).
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether both dimensions are finite and positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn to_rect(self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

/// One configured container dimension.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Extent {
    /// Derive from the image (and the container ratio when both are auto).
    #[default]
    Auto,
    /// Fixed size in display units.
    Fixed(f64),
}

impl Extent {
    /// Map a raw number where negative means auto.
    pub fn from_raw(v: f64) -> Self {
        if v < 0.0 { Self::Auto } else { Self::Fixed(v) }
    }

    pub fn fixed(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Fixed(v) => Some(v),
        }
    }
}

/// Explicit placement of a canvas or crop box.
///
/// Missing width or height is derived from the lock ratio (or the image
/// ratio, for the canvas). With `centered` set, `top`/`left` are ignored and
/// the rect is centered in its view.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub rect: RectPatch,
    pub centered: bool,
}

impl Placement {
    /// Placement at a fixed position and size.
    pub fn at(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            rect: RectPatch::from(Rect::new(left, top, width, height)),
            centered: false,
        }
    }

    /// Placement of the given size, centered in its view.
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            rect: RectPatch::new().width(width).height(height),
            centered: true,
        }
    }

    /// Placement from a partial rect.
    pub fn from_patch(rect: RectPatch) -> Self {
        Self {
            rect,
            centered: false,
        }
    }
}

impl From<Rect> for Placement {
    fn from(r: Rect) -> Self {
        Self::at(r.left, r.top, r.width, r.height)
    }
}

/// Where to draw the image inside the container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum CanvasPosition {
    /// Natural size, shrunk to fit the container, centered.
    #[default]
    Fit,
    /// Natural size, centered, never shrunk.
    OriginFit,
    /// Natural size at the container origin.
    Origin,
    /// Explicit size and position.
    Explicit(Placement),
}

/// Where to put the crop box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum CropBoxPosition {
    /// Fill the container, tightened to the lock ratio, centered.
    Fit,
    /// Fill the visible part of the canvas, tightened to the lock ratio, centered.
    #[default]
    FitInCanvas,
    /// Explicit size and position, clamped into the view.
    Explicit(Placement),
}

/// Crop-box constraints shared by every crop-box computation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CropBoxOptions {
    /// Whether the box may leave the canvas (it stays inside the container).
    pub overflow: bool,
    /// Lock ratio (width / height).
    pub ratio: Option<f64>,
}

impl CropBoxOptions {
    /// The rect the crop box must stay inside.
    pub fn view(&self, container: Rect, canvas: Rect) -> Rect {
        if self.overflow {
            container
        } else {
            container.intersection(canvas).non_negative()
        }
    }
}

/// Map a raw lock ratio to `None` when it does not constrain anything.
pub fn lock_ratio(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then_some(raw)
}

/// Compute the container rect.
///
/// A missing dimension follows the image aspect ratio from the present one.
/// With both missing, each is the image dimension times `ratio`. Without an
/// image, auto dimensions are zero until one loads.
pub fn compute_container(
    image: Option<ImageSize>,
    width: Extent,
    height: Extent,
    ratio: f64,
) -> Rect {
    let (w, h) = match (width.fixed(), height.fixed(), image) {
        (Some(w), Some(h), _) => (w, h),
        (Some(w), None, Some(img)) => (w, img.height * w / img.width),
        (None, Some(h), Some(img)) => (img.width * h / img.height, h),
        (None, None, Some(img)) => (img.width * ratio, img.height * ratio),
        (w, h, None) => (w.unwrap_or(0.0), h.unwrap_or(0.0)),
    };
    Rect::from_size(w, h)
}

/// Compute the canvas rect for `image` inside `container`.
pub fn compute_canvas(
    position: &CanvasPosition,
    lock: Option<f64>,
    image: ImageSize,
    container: Rect,
) -> Rect {
    match position {
        CanvasPosition::Fit => image
            .to_rect()
            .scale_to_fit_within(container)
            .center_within(container),
        CanvasPosition::OriginFit => image.to_rect().center_within(container),
        CanvasPosition::Origin => {
            Rect::new(container.left, container.top, image.width, image.height)
        }
        CanvasPosition::Explicit(placement) => {
            let ratio = lock.unwrap_or_else(|| image.ratio());
            let (width, height) = resolve_size(&placement.rect, ratio, image.width);
            let rect = Rect::from_size(width, height);
            if placement.centered {
                rect.center_within(container)
            } else {
                rect.translate(
                    placement.rect.left.filter(|v| v.is_finite()).unwrap_or(0.0),
                    placement.rect.top.filter(|v| v.is_finite()).unwrap_or(0.0),
                )
            }
        }
    }
}

/// A usable width or height from a patch.
fn dimension(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Fill in whichever of width/height is missing from `ratio`.
fn resolve_size(patch: &RectPatch, ratio: f64, default_width: f64) -> (f64, f64) {
    match (dimension(patch.width), dimension(patch.height)) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, w / ratio),
        (None, Some(h)) => (h * ratio, h),
        (None, None) => (default_width, default_width / ratio),
    }
}

/// Compute the crop-box rect.
///
/// `Fit` with overflow allowed behaves as `FitInCanvas`. Without overflow,
/// the `Fit` box is clamped into `container ∩ canvas` so it never starts
/// outside the area it is dragged in. Explicit placements take their height
/// from the lock ratio when one is set, then are clamped into the view
/// (`container`, or `container ∩ canvas` without overflow).
pub fn compute_crop_box(
    position: &CropBoxPosition,
    options: CropBoxOptions,
    container: Rect,
    canvas: Rect,
) -> Rect {
    let CropBoxOptions { overflow, ratio } = options;
    let position = match position {
        CropBoxPosition::Fit if overflow => &CropBoxPosition::FitInCanvas,
        other => other,
    };
    let rect = match position {
        CropBoxPosition::Fit => container
            .enforce_ratio(ratio)
            .center_within(container)
            .clamp_within(options.view(container, canvas), overflow, ratio),
        CropBoxPosition::FitInCanvas => {
            let view = container.intersection(canvas).non_negative();
            view.enforce_ratio(ratio).center_within(view)
        }
        CropBoxPosition::Explicit(placement) => {
            let view = options.view(container, canvas);
            let patch = &placement.rect;
            let (width, height) = match ratio {
                Some(r) => {
                    let w = dimension(patch.width)
                        .or_else(|| dimension(patch.height).map(|h| h * r))
                        .unwrap_or(view.width);
                    (w, w / r)
                }
                None => (
                    dimension(patch.width).unwrap_or(view.width),
                    dimension(patch.height).unwrap_or(view.height),
                ),
            };
            let rect = Rect::new(
                patch.left.filter(|v| v.is_finite()).unwrap_or(view.left),
                patch.top.filter(|v| v.is_finite()).unwrap_or(view.top),
                width,
                height,
            )
            .clamp_within(view, overflow, ratio);
            if placement.centered {
                rect.center_within(view)
            } else {
                rect
            }
        }
    };
    rect.non_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMG: ImageSize = ImageSize::new(1600.0, 800.0);

    fn container() -> Rect {
        Rect::from_size(800.0, 400.0)
    }

    #[test]
    fn container_fixed() {
        let c = compute_container(Some(IMG), Extent::Fixed(800.0), Extent::Fixed(400.0), 1.0);
        assert_eq!(c, Rect::from_size(800.0, 400.0));
    }

    #[test]
    fn container_width_only_follows_image() {
        let c = compute_container(Some(IMG), Extent::Fixed(400.0), Extent::Auto, 1.0);
        assert_eq!(c, Rect::from_size(400.0, 200.0));
        let c = compute_container(Some(IMG), Extent::Auto, Extent::Fixed(100.0), 1.0);
        assert_eq!(c, Rect::from_size(200.0, 100.0));
    }

    #[test]
    fn container_both_auto_scales_image() {
        let c = compute_container(Some(IMG), Extent::Auto, Extent::Auto, 0.5);
        assert_eq!(c, Rect::from_size(800.0, 400.0));
    }

    #[test]
    fn container_auto_without_image_is_zero() {
        let c = compute_container(None, Extent::Auto, Extent::Auto, 1.0);
        assert_eq!(c, Rect::from_size(0.0, 0.0));
        let c = compute_container(None, Extent::Fixed(300.0), Extent::Auto, 1.0);
        assert_eq!(c, Rect::from_size(300.0, 0.0));
    }

    #[test]
    fn extent_from_raw_sentinel() {
        assert_eq!(Extent::from_raw(-1.0), Extent::Auto);
        assert_eq!(Extent::from_raw(0.0), Extent::Fixed(0.0));
    }

    #[test]
    fn canvas_fit_exactly_fills() {
        let c = compute_canvas(&CanvasPosition::Fit, None, IMG, container());
        assert_eq!(c, Rect::new(0.0, 0.0, 800.0, 400.0));
    }

    #[test]
    fn canvas_fit_portrait_is_centered() {
        let img = ImageSize::new(400.0, 800.0);
        let c = compute_canvas(&CanvasPosition::Fit, None, img, container());
        assert_eq!(c, Rect::new(300.0, 0.0, 200.0, 400.0));
    }

    #[test]
    fn canvas_origin_fit_keeps_natural_size() {
        let c = compute_canvas(&CanvasPosition::OriginFit, None, IMG, container());
        assert_eq!(c, Rect::new(-400.0, -200.0, 1600.0, 800.0));
    }

    #[test]
    fn canvas_origin_at_zero() {
        let c = compute_canvas(&CanvasPosition::Origin, None, IMG, container());
        assert_eq!(c, Rect::new(0.0, 0.0, 1600.0, 800.0));
    }

    #[test]
    fn canvas_explicit_width_uses_image_ratio() {
        let pos = CanvasPosition::Explicit(Placement::from_patch(
            RectPatch::new().left(10.0).top(20.0).width(400.0),
        ));
        let c = compute_canvas(&pos, None, IMG, container());
        assert_eq!(c, Rect::new(10.0, 20.0, 400.0, 200.0));
    }

    #[test]
    fn canvas_explicit_height_uses_lock_ratio() {
        let pos = CanvasPosition::Explicit(Placement::from_patch(RectPatch::new().height(100.0)));
        let c = compute_canvas(&pos, Some(3.0), IMG, container());
        assert_eq!(c, Rect::new(0.0, 0.0, 300.0, 100.0));
    }

    #[test]
    fn canvas_explicit_centered_ignores_position() {
        let mut placement = Placement::centered(200.0, 100.0);
        placement.rect.left = Some(700.0);
        let c = compute_canvas(&CanvasPosition::Explicit(placement), None, IMG, container());
        assert_eq!(c, Rect::new(300.0, 150.0, 200.0, 100.0));
    }

    #[test]
    fn crop_fit_in_canvas_square() {
        let canvas = Rect::new(0.0, 0.0, 800.0, 400.0);
        let opts = CropBoxOptions {
            overflow: false,
            ratio: Some(1.0),
        };
        let c = compute_crop_box(&CropBoxPosition::FitInCanvas, opts, container(), canvas);
        assert_eq!(c, Rect::new(200.0, 0.0, 400.0, 400.0));
    }

    #[test]
    fn crop_fit_uses_container() {
        let canvas = Rect::new(-400.0, -200.0, 1600.0, 800.0);
        let opts = CropBoxOptions::default();
        let c = compute_crop_box(&CropBoxPosition::Fit, opts, container(), canvas);
        assert_eq!(c, container());
    }

    #[test]
    fn crop_fit_without_overflow_stays_on_canvas() {
        let canvas = Rect::new(300.0, 0.0, 200.0, 400.0);
        let opts = CropBoxOptions::default();
        let c = compute_crop_box(&CropBoxPosition::Fit, opts, container(), canvas);
        assert_eq!(c, canvas);

        let opts = CropBoxOptions {
            overflow: false,
            ratio: Some(1.0),
        };
        let c = compute_crop_box(&CropBoxPosition::Fit, opts, container(), canvas);
        assert_eq!(c, Rect::new(300.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn crop_fit_with_overflow_means_fit_in_canvas() {
        let canvas = Rect::new(300.0, 0.0, 200.0, 400.0);
        let opts = CropBoxOptions {
            overflow: true,
            ratio: None,
        };
        let c = compute_crop_box(&CropBoxPosition::Fit, opts, container(), canvas);
        assert_eq!(c, canvas);
    }

    #[test]
    fn crop_explicit_already_inside() {
        let canvas = Rect::new(0.0, 0.0, 800.0, 400.0);
        let pos = CropBoxPosition::Explicit(Placement::at(0.0, 0.0, 200.0, 200.0));
        let opts = CropBoxOptions {
            overflow: false,
            ratio: Some(1.0),
        };
        let c = compute_crop_box(&pos, opts, container(), canvas);
        assert_eq!(c, Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn crop_explicit_ratio_overrides_height() {
        let canvas = Rect::new(0.0, 0.0, 800.0, 400.0);
        let pos = CropBoxPosition::Explicit(Placement::at(10.0, 10.0, 200.0, 50.0));
        let opts = CropBoxOptions {
            overflow: false,
            ratio: Some(2.0),
        };
        let c = compute_crop_box(&pos, opts, container(), canvas);
        assert_eq!(c, Rect::new(10.0, 10.0, 200.0, 100.0));
    }

    #[test]
    fn crop_explicit_clamped_to_canvas() {
        let canvas = Rect::new(300.0, 0.0, 200.0, 400.0);
        let pos = CropBoxPosition::Explicit(Placement::at(0.0, 0.0, 100.0, 100.0));
        let c = compute_crop_box(&pos, CropBoxOptions::default(), container(), canvas);
        assert_eq!(c, Rect::new(300.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn crop_explicit_oversized_is_reset_to_view() {
        let canvas = Rect::new(300.0, 0.0, 200.0, 400.0);
        let pos = CropBoxPosition::Explicit(Placement::at(300.0, 0.0, 500.0, 500.0));
        let opts = CropBoxOptions {
            overflow: false,
            ratio: Some(1.0),
        };
        let c = compute_crop_box(&pos, opts, container(), canvas);
        assert_eq!(c, Rect::new(300.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn crop_explicit_overflow_bounded_by_container() {
        let canvas = Rect::new(300.0, 0.0, 200.0, 400.0);
        let pos = CropBoxPosition::Explicit(Placement::at(700.0, 0.0, 200.0, 100.0));
        let opts = CropBoxOptions {
            overflow: true,
            ratio: None,
        };
        let c = compute_crop_box(&pos, opts, container(), canvas);
        assert_eq!(c, Rect::new(600.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn crop_explicit_centered() {
        let canvas = Rect::new(0.0, 0.0, 800.0, 400.0);
        let pos = CropBoxPosition::Explicit(Placement::centered(200.0, 200.0));
        let c = compute_crop_box(&pos, CropBoxOptions::default(), container(), canvas);
        assert_eq!(c, Rect::new(300.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn crop_disjoint_canvas_gives_empty_box() {
        let canvas = Rect::new(900.0, 0.0, 100.0, 100.0);
        let opts = CropBoxOptions::default();
        let c = compute_crop_box(&CropBoxPosition::FitInCanvas, opts, container(), canvas);
        assert!(c.is_valid());
        assert!(c.is_empty());
    }

    #[test]
    fn lock_ratio_filters_unconstrained() {
        assert_eq!(lock_ratio(0.0), None);
        assert_eq!(lock_ratio(-1.0), None);
        assert_eq!(lock_ratio(f64::NAN), None);
        assert_eq!(lock_ratio(1.5), Some(1.5));
    }
}
