//! Human-readable rendering of points and rectangles.
//!
//! Rendering reads components through `value_in`, so any point or rectangle
//! can be printed in either system regardless of how it is stored.

use crate::point::Point;
use crate::rect::Rect;
use crate::system::CoordSystem;

/// Formats a point as `"(x, y) SystemName"` in the given system.
pub fn render_point(point: Point, system: CoordSystem) -> String {
    format!(
        "({}, {}) {}",
        point.x().value_in(system),
        point.y().value_in(system),
        system
    )
}

/// Formats the four corners in order bottom-left, top-left, top-right,
/// bottom-right, joined by `"; "`.
pub fn render_rect(rect: Rect, system: CoordSystem) -> String {
    format!(
        "{}; {}; {}; {}",
        render_point(rect.bottom_left(), system),
        render_point(rect.top_left(), system),
        render_point(rect.top_right(), system),
        render_point(rect.bottom_right(), system),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::CoordSystem::{Gl, Window};

    #[test]
    fn point_in_its_own_system() {
        let p = Point::from_raw(60, 80, Window);
        assert_eq!(render_point(p, Window), "(60, 80) Window");
    }

    #[test]
    fn point_converted_on_render() {
        let p = Point::from_raw(60, 80, Window);
        assert_eq!(render_point(p, Gl), "(-40, 20) GL");
    }

    #[test]
    fn rect_corners_in_order() {
        let a = Rect::from_center(Point::from_raw(60, 80, Window), 100, 50);
        let b = Rect::from_center(Point::from_raw(20, -10, Gl), 60, 30);
        let i = a.intersection(b);
        assert_eq!(
            render_rect(i, Window),
            "(90, 95) Window; (90, 105) Window; (110, 105) Window; (110, 95) Window"
        );
        assert_eq!(
            render_rect(i, Gl),
            "(-10, 5) GL; (-10, -5) GL; (10, -5) GL; (10, 5) GL"
        );
    }
}
