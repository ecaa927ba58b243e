//! Inclusive rectangular regions: [`Region`] and the wide [`LongRegion`] alias.

use std::fmt;

use num_traits::AsPrimitive;

use crate::coord::Coord;
use crate::error::{Axis, Error, Result};
use crate::position::Position;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle of positions, inclusive on all four bounds.
///
/// Construction enforces `min < max` on both axes, so a region always spans
/// at least two rows and two columns and stays valid for its whole life.
/// "Top" is the numerically larger row throughout.
///
/// `Region` (the `i32` default) and [`LongRegion`] (`i64`) share this one
/// implementation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Region<T = i32> {
    max_row: T,
    max_col: T,
    min_row: T,
    min_col: T,
}

/// A [`Region`] with 64-bit bounds.
pub type LongRegion = Region<i64>;

impl<T: Coord> Region<T> {
    /// Region spanning rows `0..=max_row` and columns `0..=max_col`.
    ///
    /// Fails unless both maxima are strictly positive.
    pub fn new(max_row: T, max_col: T) -> Result<Self> {
        Self::with_min(max_row, max_col, T::zero(), T::zero())
    }

    /// Region with explicit minimum bounds.
    ///
    /// Fails when `min_row >= max_row` or `min_col >= max_col`; the error
    /// names the offending axis.
    pub fn with_min(max_row: T, max_col: T, min_row: T, min_col: T) -> Result<Self> {
        if min_row >= max_row {
            return Err(Error::Bounds {
                axis: Axis::Row,
                min: bound(min_row),
                max: bound(max_row),
            });
        }
        if min_col >= max_col {
            return Err(Error::Bounds {
                axis: Axis::Column,
                min: bound(min_col),
                max: bound(max_col),
            });
        }
        Ok(Self { max_row, max_col, min_row, min_col })
    }

    /// The largest row in the region.
    #[inline]
    pub fn max_row(&self) -> T {
        self.max_row
    }

    /// The largest column in the region.
    #[inline]
    pub fn max_col(&self) -> T {
        self.max_col
    }

    /// The smallest row in the region.
    #[inline]
    pub fn min_row(&self) -> T {
        self.min_row
    }

    /// The smallest column in the region.
    #[inline]
    pub fn min_col(&self) -> T {
        self.min_col
    }

    /// Number of rows, counting both bounds.
    #[inline]
    pub fn rows(&self) -> T {
        self.max_row - self.min_row + T::one()
    }

    /// Number of columns, counting both bounds.
    #[inline]
    pub fn columns(&self) -> T {
        self.max_col - self.min_col + T::one()
    }

    /// The corner at the largest row and smallest column.
    #[inline]
    pub fn top_left(&self) -> Position<T> {
        Position::new(self.max_row, self.min_col)
    }

    /// The corner at the largest row and largest column.
    #[inline]
    pub fn top_right(&self) -> Position<T> {
        Position::new(self.max_row, self.max_col)
    }

    /// The corner at the smallest row and smallest column.
    #[inline]
    pub fn bottom_left(&self) -> Position<T> {
        Position::new(self.min_row, self.min_col)
    }

    /// The corner at the smallest row and largest column.
    #[inline]
    pub fn bottom_right(&self) -> Position<T> {
        Position::new(self.min_row, self.max_col)
    }

    /// Whether `pos` lies inside the region. Inclusive on every bound.
    #[inline]
    pub fn contains(&self, pos: Position<T>) -> bool {
        pos.row >= self.min_row
            && pos.row <= self.max_row
            && pos.col >= self.min_col
            && pos.col <= self.max_col
    }

    /// The positions of one row, in increasing column order.
    ///
    /// Empty when `row` is outside the region; never an error.
    pub fn row(&self, row: T) -> RowIter<T> {
        let cur = (row >= self.min_row && row <= self.max_row).then_some(self.min_col);
        RowIter { row, max_col: self.max_col, cur }
    }

    /// The positions of one column, in increasing row order.
    ///
    /// Empty when `col` is outside the region; never an error.
    pub fn column(&self, col: T) -> ColumnIter<T> {
        let cur = (col >= self.min_col && col <= self.max_col).then_some(self.min_row);
        ColumnIter { col, max_row: self.max_row, cur }
    }

    /// Total number of positions (rows times columns), saturating for
    /// regions too large to count in a `usize`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let rows = self.rows().to_usize().unwrap_or(usize::MAX);
        let columns = self.columns().to_usize().unwrap_or(usize::MAX);
        rows.saturating_mul(columns)
    }

    /// Row-major iterator over every position, from
    /// [`bottom_left`](Self::bottom_left) to [`top_right`](Self::top_right).
    #[inline]
    pub fn iter(&self) -> RegionIter<T> {
        RegionIter {
            region: *self,
            cur: Some(Position::new(self.min_row, self.min_col)),
        }
    }

    /// Convert bounds to another width with `as`-cast semantics, then
    /// re-validate.
    ///
    /// Each bound truncates independently, so narrowing can invert a bound
    /// pair; when that happens the cast fails like any other degenerate
    /// construction. For the lossless `i32` to `i64` direction, `From` is
    /// also available.
    pub fn cast<U>(self) -> Result<Region<U>>
    where
        U: Coord,
        T: AsPrimitive<U>,
    {
        Region::with_min(
            self.max_row.as_(),
            self.max_col.as_(),
            self.min_row.as_(),
            self.min_col.as_(),
        )
    }
}

/// Saturate a coordinate into `i64` for error payloads.
fn bound<T: Coord>(v: T) -> i64 {
    v.to_i64()
        .unwrap_or_else(|| if v > T::zero() { i64::MAX } else { i64::MIN })
}

impl From<Region<i32>> for Region<i64> {
    /// Lossless widening. The invariant is preserved as-is.
    #[inline]
    fn from(r: Region<i32>) -> Self {
        Self {
            max_row: i64::from(r.max_row),
            max_col: i64::from(r.max_col),
            min_row: i64::from(r.min_row),
            min_col: i64::from(r.min_col),
        }
    }
}

impl<T: Coord> IntoIterator for Region<T> {
    type Item = Position<T>;
    type IntoIter = RegionIter<T>;
    #[inline]
    fn into_iter(self) -> RegionIter<T> {
        self.iter()
    }
}

impl<T: Coord> fmt::Display for Region<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.bottom_left(), self.top_right())
    }
}

// Deserialization funnels through `with_min`, so decoded bounds satisfy the
// same invariant as constructed ones.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Region<T>
where
    T: Coord + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Bounds<T> {
            max_row: T,
            max_col: T,
            min_row: T,
            min_col: T,
        }
        let b = Bounds::<T>::deserialize(deserializer)?;
        Region::with_min(b.max_row, b.max_col, b.min_row, b.min_col)
            .map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions of a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionIter<T = i32> {
    region: Region<T>,
    cur: Option<Position<T>>,
}

impl<T: Coord> Iterator for RegionIter<T> {
    type Item = Position<T>;

    fn next(&mut self) -> Option<Position<T>> {
        let p = self.cur?;
        // Guarded stepping: bounds touching T::MAX never overflow.
        self.cur = if p.col < self.region.max_col {
            Some(Position::new(p.row, p.col + T::one()))
        } else if p.row < self.region.max_row {
            Some(Position::new(p.row + T::one(), self.region.min_col))
        } else {
            None
        };
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(p) = self.cur else {
            return (0, Some(0));
        };
        let width = self.region.columns().to_usize().unwrap_or(usize::MAX);
        let in_row = (self.region.max_col - p.col)
            .to_usize()
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        let rows_below = (self.region.max_row - p.row).to_usize().unwrap_or(usize::MAX);
        let total = in_row.saturating_add(rows_below.saturating_mul(width));
        (total, Some(total))
    }
}

impl<T: Coord> ExactSizeIterator for RegionIter<T> {}

/// Iterator over the positions of a single row.
#[derive(Clone, Debug)]
pub struct RowIter<T = i32> {
    row: T,
    max_col: T,
    cur: Option<T>,
}

impl<T: Coord> Iterator for RowIter<T> {
    type Item = Position<T>;

    fn next(&mut self) -> Option<Position<T>> {
        let col = self.cur?;
        self.cur = (col < self.max_col).then(|| col + T::one());
        Some(Position::new(self.row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.cur {
            Some(col) => (self.max_col - col)
                .to_usize()
                .unwrap_or(usize::MAX)
                .saturating_add(1),
            None => 0,
        };
        (n, Some(n))
    }
}

impl<T: Coord> ExactSizeIterator for RowIter<T> {}

/// Iterator over the positions of a single column.
#[derive(Clone, Debug)]
pub struct ColumnIter<T = i32> {
    col: T,
    max_row: T,
    cur: Option<T>,
}

impl<T: Coord> Iterator for ColumnIter<T> {
    type Item = Position<T>;

    fn next(&mut self) -> Option<Position<T>> {
        let row = self.cur?;
        self.cur = (row < self.max_row).then(|| row + T::one());
        Some(Position::new(row, self.col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.cur {
            Some(row) => (self.max_row - row)
                .to_usize()
                .unwrap_or(usize::MAX)
                .saturating_add(1),
            None => 0,
        };
        (n, Some(n))
    }
}

impl<T: Coord> ExactSizeIterator for ColumnIter<T> {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn region_round_trips_through_json() {
        let region = Region::with_min(7, 9, -2, -3).unwrap();
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(serde_json::from_str::<Region>(&json).unwrap(), region);
    }

    #[test]
    fn long_region_round_trips_through_json() {
        let region = LongRegion::new(10_000_000_000, 1).unwrap();
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(serde_json::from_str::<LongRegion>(&json).unwrap(), region);
    }

    #[test]
    fn deserialization_rejects_degenerate_bounds() {
        // Bounds no constructor would accept must not sneak in through the
        // wire either.
        for json in [
            r#"{"max_row":0,"max_col":0,"min_row":10,"min_col":10}"#,
            r#"{"max_row":5,"max_col":5,"min_row":0,"min_col":5}"#,
        ] {
            assert!(serde_json::from_str::<Region>(json).is_err());
        }
    }
}
