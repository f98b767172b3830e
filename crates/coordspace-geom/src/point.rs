use crate::coord::{XCoord, YCoord};
use crate::system::CoordSystem;

/// A 2D position: one horizontal and one vertical [`Coord`](crate::Coord).
///
/// The two components may legally carry different systems; conversion is
/// always explicit and per-axis, so the type does not force them to match.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    x: XCoord,
    y: YCoord,
}

impl Point {
    #[inline]
    pub const fn new(x: XCoord, y: YCoord) -> Self {
        Self { x, y }
    }

    /// Builds both components from raw integers authored in `system`.
    #[inline]
    pub const fn from_raw(x: i32, y: i32, system: CoordSystem) -> Self {
        Self {
            x: XCoord::new(x, system),
            y: YCoord::new(y, system),
        }
    }

    #[inline]
    pub fn x(self) -> XCoord {
        self.x
    }

    #[inline]
    pub fn y(self) -> YCoord {
        self.y
    }
}
