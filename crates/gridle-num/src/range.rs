//! An inclusive, stepped range of integers.

use thiserror::Error;

/// Errors from [`IntegerRange`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `min` was greater than `max`.
    #[error("range minimum {min} is greater than maximum {max}")]
    MinAboveMax { min: i64, max: i64 },
    /// The increment was zero or negative.
    #[error("range increment {0} is not positive")]
    BadIncrement(i64),
}

/// An inclusive range `[min, max]` stepped by a positive increment.
///
/// Unlike a region, a range may be a single value (`min == max`). Stepping
/// with [`next`](IntegerRange::next) and [`previous`](IntegerRange::previous)
/// clamps at the bounds instead of walking past them, which makes the range
/// usable as a cursor over a dial or a clamped counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntegerRange {
    min: i64,
    max: i64,
    increment: i64,
}

impl IntegerRange {
    /// Create a range. Fails when `min > max` or `increment <= 0`.
    pub fn new(min: i64, max: i64, increment: i64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::MinAboveMax { min, max });
        }
        if increment <= 0 {
            return Err(RangeError::BadIncrement(increment));
        }
        Ok(Self { min, max, increment })
    }

    /// The smallest value in the range.
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The largest admissible value in the range.
    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// The stride used by stepping and iteration.
    #[inline]
    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Whether `value` lies within `[min, max]`. The stride is ignored.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The value one increment above `current`, if it is still in range.
    ///
    /// `current` itself is not required to be in range, so a cursor can step
    /// into the range from outside. A step past `i64::MAX` is out of range
    /// like any other.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self, current: i64) -> Option<i64> {
        let next = current.checked_add(self.increment)?;
        self.contains(next).then_some(next)
    }

    /// The value one increment below `current`, if it is still in range.
    #[inline]
    pub fn previous(&self, current: i64) -> Option<i64> {
        let previous = current.checked_sub(self.increment)?;
        self.contains(previous).then_some(previous)
    }

    /// Number of values produced by iteration. At least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        ((self.max - self.min) / self.increment + 1) as usize
    }

    /// Iterate from `min` to `max` by the increment.
    #[inline]
    pub fn iter(&self) -> RangeIter {
        RangeIter { range: *self, cur: Some(self.min) }
    }
}

impl IntoIterator for IntegerRange {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// Deserialization funnels through `new`, so decoded ranges satisfy the same
// invariant as constructed ones.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntegerRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            min: i64,
            max: i64,
            increment: i64,
        }
        let f = Fields::deserialize(deserializer)?;
        IntegerRange::new(f.min, f.max, f.increment).map_err(serde::de::Error::custom)
    }
}

/// Iterator over the values of an [`IntegerRange`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    range: IntegerRange,
    cur: Option<i64>,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let cur = self.cur?;
        if cur > self.range.max {
            self.cur = None;
            return None;
        }
        self.cur = cur.checked_add(self.range.increment);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.cur {
            Some(cur) if cur <= self.range.max => {
                ((self.range.max - cur) / self.range.increment + 1) as usize
            }
            _ => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_round_trips_through_json() {
        let range = IntegerRange::new(-10, 10, 3).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(serde_json::from_str::<IntegerRange>(&json).unwrap(), range);
    }

    #[test]
    fn deserialization_rejects_invalid_fields() {
        // A range no constructor would accept must not sneak in through the
        // wire either; a negative increment would send iteration downward
        // with no floor.
        for json in [
            r#"{"min":0,"max":10,"increment":-1}"#,
            r#"{"min":0,"max":10,"increment":0}"#,
            r#"{"min":10,"max":0,"increment":1}"#,
        ] {
            assert!(serde_json::from_str::<IntegerRange>(json).is_err());
        }
    }
}
