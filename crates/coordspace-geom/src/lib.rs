//! Geometry over two coordinate systems — **Window** and **GL** — where a
//! value remembers which system it was authored in and converts to the other
//! lazily, so callers never track which system a raw number belongs to.
//!
//! Conventions:
//! - Window: origin top-left, +Y down; horizontal origin offset +100 from GL.
//! - GL: origin bottom-left, +Y up over a 100-unit viewport.
//! - Horizontal and vertical coordinates are distinct types; mixing axes is
//!   a compile error.
//! - Everything is an immutable `Copy` value; every operation returns a new
//!   value and is total over `i32`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`system`] | `CoordSystem` |
//! | [`coord`] | `Axis`, `Coord`, `XCoord`, `YCoord`, conversion laws |
//! | [`point`] | `Point` |
//! | [`rect`] | `Rect`, normalization, intersection |
//! | [`format`] | `render_point`, `render_rect` |
//! | [`logging`] | logger initialization for binaries |
//!
//! # Quick start
//!
//! ```rust
//! use coordspace_geom::{CoordSystem, Point, Rect};
//!
//! let a = Rect::from_center(Point::from_raw(60, 80, CoordSystem::Window), 100, 50);
//! let b = Rect::from_center(Point::from_raw(20, -10, CoordSystem::Gl), 60, 30);
//!
//! let overlap = a.intersection(b);
//! assert_eq!(overlap.left().value_in(CoordSystem::Window), 90);
//! assert_eq!(overlap.bottom().value_in(CoordSystem::Gl), 5);
//! ```

pub mod coord;
pub mod format;
pub mod logging;
pub mod point;
pub mod rect;
pub mod system;

pub use coord::{Axis, Coord, Horizontal, Vertical, XCoord, YCoord};
pub use format::{render_point, render_rect};
pub use point::Point;
pub use rect::Rect;
pub use system::CoordSystem;
