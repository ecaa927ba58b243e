//! Grid coordinates: [`Position`] and the wide [`LongPosition`] alias.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use gridle_num::modulo;
use num_traits::AsPrimitive;

use crate::coord::Coord;
use crate::direction::Direction;
use crate::region::Region;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A 2D grid coordinate: a row and a column.
///
/// One generic implementation backs both precision variants: `Position` (the
/// `i32` default) and [`LongPosition`] (`i64`). Values are plain data,
/// freely copied, and ordered row-major: rows compare first, columns break
/// ties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position<T = i32> {
    pub row: T,
    pub col: T,
}

/// A [`Position`] with 64-bit coordinates.
pub type LongPosition = Position<i64>;

impl<T: Coord> Position<T> {
    /// Create a position from row and column.
    #[inline]
    pub fn new(row: T, col: T) -> Self {
        Self { row, col }
    }

    /// The origin, `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The unit step along the row axis, `(1, 0)`.
    #[inline]
    pub fn unit_row() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The unit step along the column axis, `(0, 1)`.
    #[inline]
    pub fn unit_col() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// The four orthogonal neighbour candidates, in fixed order:
    /// row below, row above, column left, column right.
    ///
    /// No bounds are consulted and nothing is deduplicated.
    #[inline]
    pub fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.row - T::one(), self.col),
            Self::new(self.row + T::one(), self.col),
            Self::new(self.row, self.col - T::one()),
            Self::new(self.row, self.col + T::one()),
        ]
    }

    /// All eight surrounding candidates: the four orthogonal ones in their
    /// usual order, then the four diagonals.
    #[inline]
    pub fn neighbors_8(self) -> [Self; 8] {
        let one = T::one();
        [
            Self::new(self.row - one, self.col),
            Self::new(self.row + one, self.col),
            Self::new(self.row, self.col - one),
            Self::new(self.row, self.col + one),
            Self::new(self.row - one, self.col - one),
            Self::new(self.row - one, self.col + one),
            Self::new(self.row + one, self.col - one),
            Self::new(self.row + one, self.col + one),
        ]
    }

    /// The orthogonal neighbours that fall inside `region`, preserving
    /// candidate order. Between zero and four positions.
    pub fn valid_neighbors(self, region: Region<T>) -> Vec<Self> {
        self.neighbors()
            .into_iter()
            .filter(|p| region.contains(*p))
            .collect()
    }

    /// The position `distance` steps away along `direction`.
    ///
    /// A negative distance walks the opposite way. No bounds are applied.
    #[inline]
    pub fn destination(self, direction: Direction, distance: T) -> Self {
        self + direction.delta() * distance
    }

    /// Manhattan (taxicab) distance to `other`.
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> T {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// This position with row and column exchanged.
    #[inline]
    pub fn transpose(self) -> Self {
        Self::new(self.col, self.row)
    }

    /// Floor-modulo both coordinates into a `total_rows` by `total_cols`
    /// torus.
    ///
    /// Negative coordinates wrap to the high end: `(-1, -1)` on a 10 by 10
    /// grid becomes `(9, 9)`, and `(10, 10)` becomes `(0, 0)`.
    #[inline]
    pub fn wrap(self, total_rows: T, total_cols: T) -> Self {
        Self::new(modulo(self.row, total_rows), modulo(self.col, total_cols))
    }

    /// Convert to another coordinate width with `as`-cast semantics.
    ///
    /// Narrowing silently truncates out-of-range values. For the lossless
    /// `i32` to `i64` direction, `From` is also available.
    #[inline]
    pub fn cast<U>(self) -> Position<U>
    where
        U: Coord,
        T: AsPrimitive<U>,
    {
        Position::new(self.row.as_(), self.col.as_())
    }
}

// --- trait impls for Position ---

impl<T: Coord> PartialOrd for Position<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord> Ord for Position<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl<T: Coord> fmt::Display for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Position<i32>> for Position<i64> {
    #[inline]
    fn from(p: Position<i32>) -> Self {
        Self::new(i64::from(p.row), i64::from(p.col))
    }
}

impl<T: Coord> Add for Position<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl<T: Coord> Add<T> for Position<T> {
    type Output = Self;
    /// Shift both coordinates by the same amount.
    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.row + rhs, self.col + rhs)
    }
}

impl<T: Coord> Sub for Position<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl<T: Coord> Sub<T> for Position<T> {
    type Output = Self;
    /// Shift both coordinates back by the same amount.
    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.row - rhs, self.col - rhs)
    }
}

impl<T: Coord> Mul for Position<T> {
    type Output = Self;
    /// Element-wise product.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.row * rhs.row, self.col * rhs.col)
    }
}

impl<T: Coord> Mul<T> for Position<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.row * rhs, self.col * rhs)
    }
}

impl<T: Coord> Div for Position<T> {
    type Output = Self;
    /// Element-wise quotient.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.row / rhs.row, self.col / rhs.col)
    }
}

impl<T: Coord> Div<T> for Position<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.row / rhs, self.col / rhs)
    }
}

impl<T: Coord> Neg for Position<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn position_round_trips_through_json() {
        let p = Position::new(3, -4);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"row":3,"col":-4}"#);
        assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), p);
    }

    #[test]
    fn long_position_round_trips_through_json() {
        let p = LongPosition::new(10_000_000_000, -1);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<LongPosition>(&json).unwrap(), p);
    }
}
