use coordspace_geom::logging::init_logging;
use coordspace_geom::{CoordSystem, Point, Rect, render_rect};

fn main() {
    init_logging(None);

    let window_rect = Rect::from_center(Point::from_raw(60, 80, CoordSystem::Window), 100, 50);
    let gl_rect = Rect::from_center(Point::from_raw(20, -10, CoordSystem::Gl), 60, 30);
    log::debug!("window rect: {window_rect:?}");
    log::debug!("gl rect: {gl_rect:?}");

    let overlap = gl_rect.intersection(window_rect);
    log::debug!("overlap: {overlap:?}");

    println!("{}", render_rect(overlap, CoordSystem::Window));
    println!("{}", render_rect(overlap, CoordSystem::Gl));
}
