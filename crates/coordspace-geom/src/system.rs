use std::fmt;

/// Coordinate system a coordinate is expressed in.
///
/// Conventions:
/// - `Window`: origin top-left, +Y down; horizontal origin sits 100 units
///   to the right of GL's.
/// - `Gl`: origin bottom-left, +Y up over a 100-unit viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordSystem {
    Window,
    Gl,
}

impl fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoordSystem::Window => "Window",
            CoordSystem::Gl => "GL",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(CoordSystem::Window.to_string(), "Window");
        assert_eq!(CoordSystem::Gl.to_string(), "GL");
    }
}
