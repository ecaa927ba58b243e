//! The four traversal directions.

use crate::coord::Coord;
use crate::position::Position;

/// A cardinal traversal direction.
///
/// Rows grow upward throughout this crate: `Up` increases the row and `Down`
/// decreases it, while `Right` increases the column and `Left` decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward smaller rows.
    Down,
    /// Toward smaller columns.
    Left,
    /// Toward larger columns.
    Right,
    /// Toward larger rows.
    Up,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [Self::Down, Self::Left, Self::Right, Self::Up];

    /// The unit position step for this direction.
    #[inline]
    pub fn delta<T: Coord>(self) -> Position<T> {
        match self {
            Self::Down => Position::new(-T::one(), T::zero()),
            Self::Left => Position::new(T::zero(), -T::one()),
            Self::Right => Position::new(T::zero(), T::one()),
            Self::Up => Position::new(T::one(), T::zero()),
        }
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_a_unit_step() {
        assert_eq!(Direction::Down.delta::<i32>(), Position::new(-1, 0));
        assert_eq!(Direction::Left.delta::<i32>(), Position::new(0, -1));
        assert_eq!(Direction::Right.delta::<i32>(), Position::new(0, 1));
        assert_eq!(Direction::Up.delta::<i32>(), Position::new(1, 0));
    }

    #[test]
    fn all_lists_each_direction_once() {
        assert_eq!(Direction::ALL.len(), 4);
        for dir in Direction::ALL {
            assert_eq!(Direction::ALL.iter().filter(|d| **d == dir).count(), 1);
        }
    }

    #[test]
    fn opposite_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta::<i32>() + dir.opposite().delta::<i32>(), Position::origin());
        }
    }
}
