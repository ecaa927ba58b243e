//! Character grids backed by lines of text.

use std::ops::Index;

use crate::error::{Error, Result};
use crate::neighbors::{Adjacency, Orthogonal};
use crate::position::Position;
use crate::region::Region;

// ---------------------------------------------------------------------------
// CharGrid
// ---------------------------------------------------------------------------

/// A grid of characters over a block of text lines.
///
/// The grid stores its lines verbatim and derives its [`Region`] from the
/// line count and the first line's length. The derived bounds are inclusive,
/// so they reach one past the last 0-indexed row and column; positions on
/// that outer rim are inside the region but outside the stored text, and
/// looking them up panics. Callers that walk the region and index the text
/// must keep the two bounds apart.
///
/// Lines after the first may have any length. Lookups are byte-oriented,
/// which for the ASCII inputs this crate targets is the same as
/// character-oriented.
#[derive(Debug, Clone)]
pub struct CharGrid<A: Adjacency = Orthogonal> {
    content: Vec<String>,
    region: Region,
    adjacency: A,
}

impl CharGrid {
    /// Build a grid with the default orthogonal adjacency.
    ///
    /// Fails when `content` is empty or its first line is empty.
    pub fn new(content: Vec<String>) -> Result<Self> {
        Self::with_adjacency(content, Orthogonal)
    }
}

impl<A: Adjacency> CharGrid<A> {
    /// Build a grid with a custom adjacency rule.
    pub fn with_adjacency(content: Vec<String>, adjacency: A) -> Result<Self> {
        if content.is_empty() || content[0].is_empty() {
            return Err(Error::EmptyGrid);
        }
        let region = Region::new(content.len() as i32, content[0].len() as i32)?;
        Ok(Self { content, region, adjacency })
    }

    /// The grid's lines, in input order.
    #[inline]
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// The region derived from the grid's shape.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// The `i`-th line. Panics when `i` is out of bounds.
    #[inline]
    pub fn line(&self, i: usize) -> &str {
        &self.content[i]
    }

    /// Iterate over the lines as `&str`.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(String::as_str)
    }

    /// The character at `pos`.
    ///
    /// No region pre-check is made: a position outside the stored text
    /// panics with the native index error, negative coordinates included.
    #[inline]
    pub fn at(&self, pos: Position) -> char {
        self.content.char_at(pos)
    }

    /// The neighbours of `pos` under this grid's adjacency rule, filtered
    /// by the grid's region.
    #[inline]
    pub fn neighbors_at(&self, pos: Position) -> Vec<Position> {
        self.adjacency.neighbors(pos, self.region)
    }
}

impl<A: Adjacency> Index<usize> for CharGrid<A> {
    type Output = str;

    #[inline]
    fn index(&self, i: usize) -> &str {
        &self.content[i]
    }
}

// ---------------------------------------------------------------------------
// Position lookups on plain collections
// ---------------------------------------------------------------------------

/// Position-based character lookup on a slice of text lines.
///
/// Implemented for any slice of string-like values, so parsed input can be
/// indexed by [`Position`] without first building a [`CharGrid`]. Lookups
/// are byte-oriented and panic on out-of-bounds positions.
pub trait LineGrid {
    /// The character at `pos`.
    fn char_at(&self, pos: Position) -> char;
}

impl<S: AsRef<str>> LineGrid for [S] {
    #[inline]
    fn char_at(&self, pos: Position) -> char {
        self[pos.row as usize].as_ref().as_bytes()[pos.col as usize] as char
    }
}

/// Position-based element lookup on nested vectors.
pub trait NestedGrid<T> {
    /// The element at `pos`. Panics when out of bounds.
    fn at(&self, pos: Position) -> &T;
}

impl<T> NestedGrid<T> for [Vec<T>] {
    #[inline]
    fn at(&self, pos: Position) -> &T {
        &self[pos.row as usize][pos.col as usize]
    }
}
