//! Axis-aligned rectangles over dual-system coordinates.

use crate::coord::{Axis, Coord, XCoord, YCoord};
use crate::point::Point;
use crate::system::CoordSystem;

/// Axis-aligned rectangle stored as four edge coordinates.
///
/// Construction does not validate edge order; `left <= right` and
/// `bottom <= top` (in the rectangle's own stored system) is only restored
/// by [`Rect::to_system`]. An inverted rectangle is also how
/// [`Rect::intersection`] represents an empty overlap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    left: XCoord,
    right: XCoord,
    bottom: YCoord,
    top: YCoord,
}

impl Rect {
    /// Edges are taken verbatim from the two corners, with no validation
    /// that `left <= right` or `bottom <= top`.
    #[inline]
    pub fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            left: bottom_left.x(),
            right: top_right.x(),
            bottom: bottom_left.y(),
            top: top_right.y(),
        }
    }

    /// Rectangle centered on `center`, with truncating integer half-extents.
    ///
    /// Each edge inherits the system of the corresponding `center`
    /// component, so a mixed-system center yields a mixed-system rectangle.
    #[inline]
    pub fn from_center(center: Point, width: i32, height: i32) -> Self {
        Self {
            left: center.x() - width / 2,
            right: center.x() + width / 2,
            bottom: center.y() - height / 2,
            top: center.y() + height / 2,
        }
    }

    #[inline]
    pub fn left(self) -> XCoord {
        self.left
    }

    #[inline]
    pub fn right(self) -> XCoord {
        self.right
    }

    #[inline]
    pub fn bottom(self) -> YCoord {
        self.bottom
    }

    #[inline]
    pub fn top(self) -> YCoord {
        self.top
    }

    #[inline]
    pub fn bottom_left(self) -> Point {
        Point::new(self.left, self.bottom)
    }

    #[inline]
    pub fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn top_right(self) -> Point {
        Point::new(self.right, self.top)
    }

    #[inline]
    pub fn bottom_right(self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// The rectangle's horizontal frame: the system `left` is expressed in.
    /// [`Rect::intersection`] uses it as the common frame.
    #[inline]
    pub fn system(self) -> CoordSystem {
        self.left.system()
    }

    /// Re-expresses all four edges in `target`, then normalizes.
    ///
    /// The vertical conversion law is a reflection and reverses edge order,
    /// so converted edges are swapped back into `left <= right`,
    /// `bottom <= top`. Idempotent on already-normalized rectangles.
    pub fn to_system(self, target: CoordSystem) -> Rect {
        let left = self.left.to_system(target);
        let right = self.right.to_system(target);
        let bottom = self.bottom.to_system(target);
        let top = self.top.to_system(target);

        let (left, right) = if right < left { (right, left) } else { (left, right) };
        let (bottom, top) = if top < bottom { (top, bottom) } else { (bottom, top) };

        Rect::new(Point::new(left, bottom), Point::new(right, top))
    }

    /// Overlap of `self` and `other`, expressed in `self`'s system.
    ///
    /// `other` is first reprojected (and thereby normalized) into
    /// [`Rect::system`]. The result is NOT re-normalized: when the two
    /// rectangles do not overlap it carries `right < left` or
    /// `top < bottom`. That inverted shape is the designed empty-overlap
    /// representation, not an error; callers check it explicitly.
    pub fn intersection(self, other: Rect) -> Rect {
        let other = other.to_system(self.system());

        Rect::new(
            Point::new(
                max_coord(self.left, other.left),
                max_coord(self.bottom, other.bottom),
            ),
            Point::new(
                min_coord(self.right, other.right),
                min_coord(self.top, other.top),
            ),
        )
    }
}

// std::cmp::max/min need Ord; these keep the left operand on ties so the
// surviving system tag is deterministic.

#[inline]
fn max_coord<A: Axis>(a: Coord<A>, b: Coord<A>) -> Coord<A> {
    if a < b { b } else { a }
}

#[inline]
fn min_coord<A: Axis>(a: Coord<A>, b: Coord<A>) -> Coord<A> {
    if b < a { b } else { a }
}
