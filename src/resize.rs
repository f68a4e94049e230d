//! Corner-drag resizing of the crop box.
//!
//! Dragging a corner handle grows or shrinks the box while the diagonally
//! opposite corner (the anchor) stays put. When a drag pushes the active
//! corner past the anchor the box would invert; instead it collapses to zero
//! on the inverted axis, sitting on the anchor, and the active corner moves
//! on: clockwise for a collapsed width, counter-clockwise for a collapsed
//! height, to the opposite corner when both collapse.
//!
//! ```text
//!     NW ──────── NE        width < 0  → next      (NW → NE)
//!     │            │        height < 0 → previous  (NW → SW)
//!     │            │        both < 0   → opposite  (NW → SE)
//!     SW ──────── SE
//! ```

use crate::rect::{Point, Rect};

/// Corner handle, ordered clockwise from the top-left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All four corners in clockwise order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Clockwise index, `NorthWest = 0`.
    pub fn index(self) -> u8 {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthEast => 2,
            Self::SouthWest => 3,
        }
    }

    /// Corner for a clockwise index. Returns `None` above 3.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Diagonally opposite corner.
    pub fn opposite(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Next corner clockwise.
    pub fn next(self) -> Self {
        match self {
            Self::NorthWest => Self::NorthEast,
            Self::NorthEast => Self::SouthEast,
            Self::SouthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthWest,
        }
    }

    /// Next corner counter-clockwise.
    pub fn previous(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthWest,
            Self::NorthEast => Self::NorthWest,
            Self::SouthEast => Self::NorthEast,
            Self::SouthWest => Self::SouthEast,
        }
    }

    /// Whether the corner is on the left edge.
    pub fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// Whether the corner is on the top edge.
    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// This corner's position on `rect`.
    pub fn corner_of(self, rect: &Rect) -> Point {
        Point::new(
            if self.is_west() { rect.left } else { rect.right() },
            if self.is_north() { rect.top } else { rect.bottom() },
        )
    }
}

/// Result of one resize step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resize {
    /// New crop box, never negative in size.
    pub rect: Rect,
    /// Active corner for the next sample.
    pub direction: Direction,
}

/// Resize `current` by dragging its `direction` corner by `delta`.
///
/// The result stays inside `bound` and, with a lock ratio, keeps that ratio.
/// The corner opposite `direction` does not move unless the box flips.
///
/// ```
/// use zencrop::{Direction, Point, Rect, resize_crop_box};
///
/// let step = resize_crop_box(
///     Direction::NorthWest,
///     Point::new(-50.0, -20.0),
///     Rect::new(100.0, 100.0, 200.0, 200.0),
///     None,
///     Rect::new(0.0, 0.0, 1000.0, 1000.0),
/// );
/// assert_eq!(step.rect, Rect::new(50.0, 80.0, 250.0, 220.0));
/// assert_eq!(step.direction, Direction::NorthWest);
/// ```
pub fn resize_crop_box(
    direction: Direction,
    delta: Point,
    current: Rect,
    ratio: Option<f64>,
    bound: Rect,
) -> Resize {
    let fixed = direction.opposite().corner_of(&current);
    // Pulling a west/north corner further west/north grows the box.
    let dx = if direction.is_west() { -delta.x } else { delta.x };
    let dy = if direction.is_north() { -delta.y } else { delta.y };

    let scaled = anchor(current.scale_by(dx, dy, ratio), direction, fixed);
    let mut rect = anchor(
        scaled.intersection(bound).enforce_ratio(ratio),
        direction,
        fixed,
    );

    let next = if rect.width < 0.0 && rect.height < 0.0 {
        rect.width = 0.0;
        rect.height = 0.0;
        direction.opposite()
    } else if rect.width < 0.0 {
        rect.width = 0.0;
        direction.next()
    } else if rect.height < 0.0 {
        rect.height = 0.0;
        direction.previous()
    } else {
        direction
    };
    // Collapsed axes land exactly on the anchor.
    Resize {
        rect: anchor(rect, direction, fixed),
        direction: next,
    }
}

/// Move `rect` so the corner opposite `direction` lands on `fixed`.
fn anchor(mut rect: Rect, direction: Direction, fixed: Point) -> Rect {
    rect.left = if direction.is_west() {
        fixed.x - rect.width
    } else {
        fixed.x
    };
    rect.top = if direction.is_north() {
        fixed.y - rect.height
    } else {
        fixed.y
    };
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    const BOX: Rect = Rect::new(100.0, 100.0, 200.0, 200.0);

    #[test]
    fn direction_transitions() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.next().previous(), d);
            assert_eq!(d.next().next(), d.opposite());
            assert_eq!(Direction::from_index(d.index()), Some(d));
            assert_eq!(d.next().index(), (d.index() + 1) % 4);
            assert_eq!(d.opposite().index(), (d.index() + 2) % 4);
        }
        assert_eq!(Direction::NorthWest.previous(), Direction::SouthWest);
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn corners_of_rect() {
        assert_eq!(Direction::NorthWest.corner_of(&BOX), Point::new(100.0, 100.0));
        assert_eq!(Direction::NorthEast.corner_of(&BOX), Point::new(300.0, 100.0));
        assert_eq!(Direction::SouthEast.corner_of(&BOX), Point::new(300.0, 300.0));
        assert_eq!(Direction::SouthWest.corner_of(&BOX), Point::new(100.0, 300.0));
    }

    #[test]
    fn north_west_keeps_south_east_corner() {
        let step = resize_crop_box(
            Direction::NorthWest,
            Point::new(-50.0, -20.0),
            BOX,
            None,
            BOUND,
        );
        assert_eq!(step.rect, Rect::new(50.0, 80.0, 250.0, 220.0));
        assert_eq!(step.rect.bottom_right(), Point::new(300.0, 300.0));
        assert_eq!(step.direction, Direction::NorthWest);
    }

    #[test]
    fn each_direction_grows_outward() {
        let cases = [
            (Direction::NorthWest, Point::new(-10.0, -10.0)),
            (Direction::NorthEast, Point::new(10.0, -10.0)),
            (Direction::SouthEast, Point::new(10.0, 10.0)),
            (Direction::SouthWest, Point::new(-10.0, 10.0)),
        ];
        for (d, delta) in cases {
            let fixed = d.opposite().corner_of(&BOX);
            let step = resize_crop_box(d, delta, BOX, None, BOUND);
            assert_eq!((step.rect.width, step.rect.height), (210.0, 210.0), "{d:?}");
            assert_eq!(d.opposite().corner_of(&step.rect), fixed, "{d:?}");
            assert_eq!(step.direction, d);
        }
    }

    #[test]
    fn lock_ratio_follows_height() {
        let step = resize_crop_box(
            Direction::SouthEast,
            Point::new(50.0, 10.0),
            BOX,
            Some(1.0),
            BOUND,
        );
        assert_eq!(step.rect, Rect::new(100.0, 100.0, 210.0, 210.0));
    }

    #[test]
    fn clipped_by_bound() {
        let step = resize_crop_box(
            Direction::NorthWest,
            Point::new(-300.0, -300.0),
            BOX,
            None,
            BOUND,
        );
        assert_eq!(step.rect, Rect::new(0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn clipped_by_bound_keeps_ratio() {
        let bound = Rect::new(50.0, 0.0, 1000.0, 1000.0);
        let step = resize_crop_box(
            Direction::NorthWest,
            Point::new(-300.0, -300.0),
            BOX,
            Some(1.0),
            bound,
        );
        assert_eq!(step.rect, Rect::new(50.0, 50.0, 250.0, 250.0));
    }

    #[test]
    fn inverting_both_axes_flips_to_opposite() {
        let cases = [
            (Direction::NorthWest, Point::new(500.0, 500.0)),
            (Direction::NorthEast, Point::new(-500.0, 500.0)),
            (Direction::SouthEast, Point::new(-500.0, -500.0)),
            (Direction::SouthWest, Point::new(500.0, -500.0)),
        ];
        for (d, delta) in cases {
            let fixed = d.opposite().corner_of(&BOX);
            let step = resize_crop_box(d, delta, BOX, None, BOUND);
            assert_eq!(step.direction, d.opposite(), "{d:?}");
            assert_eq!(step.rect, Rect::new(fixed.x, fixed.y, 0.0, 0.0), "{d:?}");
        }
    }

    #[test]
    fn inverting_width_advances_clockwise() {
        let step = resize_crop_box(Direction::NorthWest, Point::new(250.0, 0.0), BOX, None, BOUND);
        assert_eq!(step.direction, Direction::NorthEast);
        assert_eq!(step.rect, Rect::new(300.0, 100.0, 0.0, 200.0));

        let step = resize_crop_box(Direction::SouthEast, Point::new(-250.0, 0.0), BOX, None, BOUND);
        assert_eq!(step.direction, Direction::SouthWest);
        assert_eq!(step.rect, Rect::new(100.0, 100.0, 0.0, 200.0));
    }

    #[test]
    fn inverting_height_steps_counter_clockwise() {
        let step = resize_crop_box(Direction::NorthWest, Point::new(0.0, 250.0), BOX, None, BOUND);
        assert_eq!(step.direction, Direction::SouthWest);
        assert_eq!(step.rect, Rect::new(100.0, 300.0, 200.0, 0.0));

        let step = resize_crop_box(Direction::NorthEast, Point::new(0.0, 250.0), BOX, None, BOUND);
        assert_eq!(step.direction, Direction::NorthWest);
        assert_eq!(step.rect, Rect::new(100.0, 300.0, 200.0, 0.0));
    }

    #[test]
    fn flip_then_continue_from_same_anchor() {
        let first = resize_crop_box(
            Direction::NorthWest,
            Point::new(300.0, 300.0),
            BOX,
            None,
            BOUND,
        );
        assert_eq!(first.direction, Direction::SouthEast);
        let second = resize_crop_box(
            first.direction,
            Point::new(40.0, 30.0),
            first.rect,
            None,
            BOUND,
        );
        assert_eq!(second.rect, Rect::new(300.0, 300.0, 40.0, 30.0));
        assert_eq!(second.direction, Direction::SouthEast);
    }
}
