//! Pluggable adjacency rules.

use crate::position::Position;
use crate::region::Region;

/// How a grid decides which positions border another.
///
/// [`CharGrid`](crate::grid::CharGrid) delegates its neighbour lookup to an
/// `Adjacency` value, so a specialized grid can swap the rule without
/// touching the indexing contract. The returned positions are filtered by
/// `region` and keep the rule's candidate order.
pub trait Adjacency {
    /// The neighbours of `pos` that lie inside `region`.
    fn neighbors(&self, pos: Position, region: Region) -> Vec<Position>;
}

/// The default rule: the four orthogonal neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orthogonal;

impl Adjacency for Orthogonal {
    #[inline]
    fn neighbors(&self, pos: Position, region: Region) -> Vec<Position> {
        pos.valid_neighbors(region)
    }
}

/// Orthogonal and diagonal neighbours, up to eight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EightWay;

impl Adjacency for EightWay {
    fn neighbors(&self, pos: Position, region: Region) -> Vec<Position> {
        pos.neighbors_8()
            .into_iter()
            .filter(|p| region.contains(*p))
            .collect()
    }
}
