//! Axis-tagged scalar coordinates.
//!
//! A [`Coord`] remembers the [`CoordSystem`] it was authored in and converts
//! to the other system only on demand, so callers never track which system a
//! raw number belongs to. The axis is a type-level tag: a horizontal and a
//! vertical coordinate cannot be mixed up at compile time.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use crate::system::CoordSystem;

/// Offset between the two horizontal origins: a GL x-value reads 100 units
/// lower than the same position in Window.
pub const X_ORIGIN_OFFSET: i32 = 100;

/// Height of the shared viewport. The vertical axes point in opposite
/// directions and mirror across this span.
pub const Y_VIEWPORT_SPAN: i32 = 100;

/// Per-axis conversion law between the two systems.
///
/// Implemented exactly twice, by [`Horizontal`] and [`Vertical`].
pub trait Axis {
    /// Short axis label used in debug output.
    const NAME: &'static str;

    /// Re-expresses `value` (given in `from`) as it reads in `to`.
    ///
    /// Total for every `i32`; `from == to` is the identity.
    fn convert(value: i32, from: CoordSystem, to: CoordSystem) -> i32;
}

/// Marker for the horizontal (x) axis. Never instantiated.
pub enum Horizontal {}

/// Marker for the vertical (y) axis. Never instantiated.
pub enum Vertical {}

impl Axis for Horizontal {
    const NAME: &'static str = "x";

    fn convert(value: i32, from: CoordSystem, to: CoordSystem) -> i32 {
        if from == to {
            value
        } else if to == CoordSystem::Window {
            value + X_ORIGIN_OFFSET
        } else {
            value - X_ORIGIN_OFFSET
        }
    }
}

impl Axis for Vertical {
    const NAME: &'static str = "y";

    fn convert(value: i32, from: CoordSystem, to: CoordSystem) -> i32 {
        // Reflection: crossing systems reverses the axis direction.
        if from == to { value } else { Y_VIEWPORT_SPAN - value }
    }
}

/// A scalar position on one axis, tagged with the system it is expressed in.
///
/// Immutable value type; every operation returns a new coordinate. Any `i32`
/// is a legal value and conversion is total, so no constructor or conversion
/// can fail.
pub struct Coord<A: Axis> {
    value: i32,
    system: CoordSystem,
    _axis: PhantomData<A>,
}

/// Horizontal coordinate.
pub type XCoord = Coord<Horizontal>;

/// Vertical coordinate.
pub type YCoord = Coord<Vertical>;

impl<A: Axis> Coord<A> {
    #[inline]
    pub const fn new(value: i32, system: CoordSystem) -> Self {
        Self {
            value,
            system,
            _axis: PhantomData,
        }
    }

    /// The raw value, as stored (i.e. as it reads in [`Self::system`]).
    #[inline]
    pub fn value(self) -> i32 {
        self.value
    }

    /// The system this coordinate is expressed in.
    #[inline]
    pub fn system(self) -> CoordSystem {
        self.system
    }

    /// The numeric value as it would read in `target`, leaving the
    /// coordinate's own stored system untouched.
    ///
    /// This is the single place conversion math lives; everything else is
    /// defined in terms of it.
    #[inline]
    pub fn value_in(self, target: CoordSystem) -> i32 {
        A::convert(self.value, self.system, target)
    }

    /// The same real-world position, re-expressed in `target`.
    #[inline]
    pub fn to_system(self, target: CoordSystem) -> Self {
        Self::new(self.value_in(target), target)
    }
}

// Manual impls: the derives would put an `A: Clone`/`A: Copy` bound on the
// uninhabited marker, and equality must use the same frame as the ordering
// operators below.

impl<A: Axis> Clone for Coord<A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Axis> Copy for Coord<A> {}

impl<A: Axis> fmt::Debug for Coord<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord<{}>({} {})", A::NAME, self.value, self.system)
    }
}

/// Positional equality: the right operand is read in the left operand's
/// system, so e.g. x `0 GL` equals x `100 Window`.
impl<A: Axis> PartialEq for Coord<A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value_in(self.system)
    }
}

/// Ordering in the left operand's system. Note the direction of "less" is
/// frame-dependent on the vertical axis, where the two systems disagree on
/// which way the axis points.
impl<A: Axis> PartialOrd for Coord<A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value.cmp(&other.value_in(self.system)))
    }
}

impl<A: Axis> Add for Coord<A> {
    type Output = Coord<A>;
    #[inline]
    fn add(self, rhs: Coord<A>) -> Coord<A> {
        Coord::new(self.value + rhs.value_in(self.system), self.system)
    }
}

/// A raw integer operand is assumed already expressed in `self`'s system.
impl<A: Axis> Add<i32> for Coord<A> {
    type Output = Coord<A>;
    #[inline]
    fn add(self, rhs: i32) -> Coord<A> {
        Coord::new(self.value + rhs, self.system)
    }
}

impl<A: Axis> Sub for Coord<A> {
    type Output = Coord<A>;
    #[inline]
    fn sub(self, rhs: Coord<A>) -> Coord<A> {
        Coord::new(self.value - rhs.value_in(self.system), self.system)
    }
}

impl<A: Axis> Sub<i32> for Coord<A> {
    type Output = Coord<A>;
    #[inline]
    fn sub(self, rhs: i32) -> Coord<A> {
        Coord::new(self.value - rhs, self.system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::CoordSystem::{Gl, Window};

    fn xw(v: i32) -> XCoord { XCoord::new(v, Window) }
    fn xg(v: i32) -> XCoord { XCoord::new(v, Gl) }
    fn yw(v: i32) -> YCoord { YCoord::new(v, Window) }
    fn yg(v: i32) -> YCoord { YCoord::new(v, Gl) }

    // ── conversion laws ───────────────────────────────────────────────────

    #[test]
    fn horizontal_same_system_is_identity() {
        assert_eq!(xw(37).value_in(Window), 37);
        assert_eq!(xg(-4).value_in(Gl), -4);
    }

    #[test]
    fn horizontal_offset() {
        assert_eq!(xw(10).value_in(Gl), -90);
        assert_eq!(xg(10).value_in(Window), 110);
    }

    #[test]
    fn vertical_same_system_is_identity() {
        assert_eq!(yw(80).value_in(Window), 80);
        assert_eq!(yg(5).value_in(Gl), 5);
    }

    #[test]
    fn vertical_reflection() {
        assert_eq!(yw(80).value_in(Gl), 20);
        assert_eq!(yg(20).value_in(Window), 80);
        assert_eq!(yw(-5).value_in(Gl), 105);
    }

    #[test]
    fn horizontal_law_holds_for_any_value() {
        for v in [-250, -1, 0, 37, 100, 999] {
            assert_eq!(xw(v).value_in(Window) - xw(v).value_in(Gl), 100);
            assert_eq!(xg(v).value_in(Window) - xg(v).value_in(Gl), 100);
        }
    }

    #[test]
    fn vertical_law_holds_for_any_value() {
        for v in [-250, -1, 0, 37, 100, 999] {
            assert_eq!(yw(v).value_in(Window) + yw(v).value_in(Gl), 100);
            assert_eq!(yg(v).value_in(Window) + yg(v).value_in(Gl), 100);
        }
    }

    #[test]
    fn round_trip_is_invertible() {
        for v in [-250, -1, 0, 37, 100, 999] {
            assert_eq!(xw(v).to_system(Gl).to_system(Window).value(), v);
            assert_eq!(yw(v).to_system(Gl).to_system(Window).value(), v);
            assert_eq!(xg(v).to_system(Window).to_system(Gl).value(), v);
            assert_eq!(yg(v).to_system(Window).to_system(Gl).value(), v);
        }
    }

    #[test]
    fn to_system_retags_value_in_never_retags() {
        let c = yw(80);
        assert_eq!(c.to_system(Gl).system(), Gl);
        assert_eq!(c.to_system(Gl).value(), 20);
        // value_in leaves the original untouched
        let _ = c.value_in(Gl);
        assert_eq!(c.system(), Window);
        assert_eq!(c.value(), 80);
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_raw_integer_stays_in_own_system() {
        let c = xw(10) + 5;
        assert_eq!(c.value(), 15);
        assert_eq!(c.system(), Window);
    }

    #[test]
    fn add_converts_rhs_into_lhs_system() {
        // x 0 GL reads as 100 Window
        let c = xw(10) + xg(0);
        assert_eq!(c.value(), 110);
        assert_eq!(c.system(), Window);

        // x 100 Window reads as 0 GL
        let c = xg(0) + xw(100);
        assert_eq!(c.value(), 0);
        assert_eq!(c.system(), Gl);
    }

    #[test]
    fn sub_converts_rhs_into_lhs_system() {
        let c = xw(10) - 4;
        assert_eq!(c.value(), 6);

        let c = yw(80) - yg(20); // y 20 GL reads as 80 Window
        assert_eq!(c.value(), 0);
        assert_eq!(c.system(), Window);
    }

    // ── comparison ────────────────────────────────────────────────────────

    #[test]
    fn equality_is_positional() {
        assert_eq!(xg(0), xw(100));
        assert_eq!(yw(60), yg(40));
        assert_ne!(xw(0), xg(0));
    }

    #[test]
    fn ordering_uses_lhs_system() {
        // x -80 GL reads as 20 Window
        assert!(xw(10) < xg(-80));
        assert!(xg(-80) > xw(10));

        // y 80 GL reads as 20 Window
        assert!(yw(30) > yg(80));
        assert!(yw(30) <= yw(30));
        assert!(yw(30) >= yg(70));
    }
}
