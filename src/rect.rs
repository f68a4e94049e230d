//! Rectangle value type and the geometric operations the crop widget is built from.
//!
//! Coordinates are `f64` display units with the origin at the top-left and
//! `top` growing downward. Operations consume and return the rect so they
//! chain:
//!
//! ```
//! use zencrop::Rect;
//!
//! let view = Rect::new(0.0, 0.0, 800.0, 400.0);
//! let boxed = Rect::new(0.0, 0.0, 800.0, 400.0)
//!     .enforce_ratio(Some(1.0))
//!     .center_within(view);
//!
//! assert_eq!(boxed, Rect::new(200.0, 0.0, 400.0, 400.0));
//! ```
//!
//! Intermediate results may carry negative width or height (see
//! [`Rect::intersection`]); callers normalize before storing.

use num_traits::Float;

/// A point or displacement in display coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Partial rect update. Absent fields leave the target untouched.
///
/// ```
/// use zencrop::{Rect, RectPatch};
///
/// let moved = Rect::new(10.0, 10.0, 50.0, 50.0)
///     .extend_from(&RectPatch::new().left(0.0).top(f64::NAN));
/// assert_eq!(moved, Rect::new(0.0, 10.0, 50.0, 50.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectPatch {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl RectPatch {
    /// Empty patch.
    pub const fn new() -> Self {
        Self {
            top: None,
            left: None,
            width: None,
            height: None,
        }
    }

    pub fn top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        finite(self.top).is_none()
            && finite(self.left).is_none()
            && finite(self.width).is_none()
            && finite(self.height).is_none()
    }
}

impl From<Rect> for RectPatch {
    fn from(r: Rect) -> Self {
        Self {
            top: Some(r.top),
            left: Some(r.left),
            width: Some(r.width),
            height: Some(r.height),
        }
    }
}

/// Drop values a patch must not apply.
fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Rect of the given size at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Whether width and height are both non-negative.
    pub fn is_valid(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Whether the rect encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Overlap of two rects.
    ///
    /// Near edges are the larger of the two, far edges the smaller. Disjoint
    /// inputs produce zero or negative width/height rather than `None`, so
    /// check [`is_empty`](Self::is_empty) before treating the result as a region.
    pub fn intersection(self, other: Rect) -> Rect {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        Rect::new(
            left,
            top,
            self.right().min(other.right()) - left,
            self.bottom().min(other.bottom()) - top,
        )
    }

    /// Copy every finite field present in `patch` onto `self`.
    pub fn extend_from(mut self, patch: &RectPatch) -> Self {
        if let Some(top) = finite(patch.top) {
            self.top = top;
        }
        if let Some(left) = finite(patch.left) {
            self.left = left;
        }
        if let Some(width) = finite(patch.width) {
            self.width = width;
        }
        if let Some(height) = finite(patch.height) {
            self.height = height;
        }
        self
    }

    /// Grow (or shrink) from the top-left corner.
    ///
    /// Height always takes `d_height`. With a lock ratio the width follows the
    /// new height; otherwise it takes `d_width`.
    pub fn scale_by(mut self, d_width: f64, d_height: f64, ratio: Option<f64>) -> Self {
        self.height += d_height;
        match ratio {
            Some(r) => self.width = self.height * r,
            None => self.width += d_width,
        }
        self
    }

    /// Uniform scale of all four fields about the origin.
    pub fn zoom_to(mut self, factor: f64) -> Self {
        self.top *= factor;
        self.left *= factor;
        self.width *= factor;
        self.height *= factor;
        self
    }

    /// Shrink proportionally until both dimensions fit `bound`. Never enlarges.
    pub fn scale_to_fit_within(mut self, bound: Rect) -> Self {
        if self.width > bound.width {
            self.height = self.height * bound.width / self.width;
            self.width = bound.width;
        }
        if self.height > bound.height {
            self.width = self.width * bound.height / self.height;
            self.height = bound.height;
        }
        self
    }

    /// Pull the rect back inside `bound`.
    ///
    /// Near edges are clamped first, then an overshooting far edge shifts the
    /// rect back. If the rect is larger than `bound` on an axis and `overflow`
    /// is off, that axis is reset to fill `bound` exactly and the other axis
    /// follows the lock ratio.
    pub fn clamp_within(mut self, bound: Rect, overflow: bool, ratio: Option<f64>) -> Self {
        if self.top < bound.top {
            self.top = bound.top;
        }
        if self.left < bound.left {
            self.left = bound.left;
        }
        if self.bottom() > bound.bottom() {
            self.top = bound.bottom() - self.height;
            if self.top < bound.top && !overflow {
                self.top = bound.top;
                self.height = bound.height;
                if let Some(r) = ratio {
                    self.width = self.height * r;
                }
            }
        }
        if self.right() > bound.right() {
            self.left = bound.right() - self.width;
            if self.left < bound.left && !overflow {
                self.left = bound.left;
                self.width = bound.width;
                if let Some(r) = ratio {
                    self.height = self.width / r;
                    // A rect that did not honor the ratio can come out taller
                    // than the bound here.
                    if self.height > bound.height {
                        self.height = bound.height;
                        self.width = self.height * r;
                    }
                    if self.bottom() > bound.bottom() {
                        self.top = bound.bottom() - self.height;
                    }
                }
            }
        }
        self
    }

    /// Tighten to `ratio` (width / height) by shrinking the longer side.
    /// No-op without a ratio.
    pub fn enforce_ratio(mut self, ratio: Option<f64>) -> Self {
        let Some(r) = ratio else {
            return self;
        };
        let implied_height = self.width / r;
        if self.height < implied_height {
            self.width = self.height * r;
        } else {
            self.height = implied_height;
        }
        self
    }

    /// Center inside `bound`, keeping the size.
    pub fn center_within(mut self, bound: Rect) -> Self {
        self.left = bound.left + (bound.width - self.width) / 2.0;
        self.top = bound.top + (bound.height - self.height) / 2.0;
        self
    }

    /// Coordinates relative to the top-left of `bound`.
    pub fn relative_to(self, bound: Rect) -> Rect {
        Rect::new(
            self.left - bound.left,
            self.top - bound.top,
            self.width,
            self.height,
        )
    }

    /// Shift by `(dx, dy)`.
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.left += dx;
        self.top += dy;
        self
    }

    /// Clamp negative width/height to zero.
    pub fn non_negative(mut self) -> Self {
        self.width = self.width.max(0.0);
        self.height = self.height.max(0.0);
        self
    }

    /// Round every field to the nearest whole unit.
    pub fn round(self) -> Self {
        Rect::new(
            Float::round(self.left),
            Float::round(self.top),
            Float::round(self.width),
            Float::round(self.height),
        )
    }
}
