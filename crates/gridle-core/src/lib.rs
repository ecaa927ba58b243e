//! **gridle-core** — Grid and coordinate toolkit for puzzle solving (core types).
//!
//! This crate provides the foundational types used across the *gridle*
//! workspace: width-generic positions and inclusive regions, cardinal
//! directions, a character grid over text lines, and pluggable adjacency
//! rules.
//!
//! Coordinates come in two named widths backed by one generic
//! implementation: [`Position`] / [`Region`] (`i32`) for ordinary grids and
//! [`LongPosition`] / [`LongRegion`] (`i64`) for inputs whose coordinates
//! outgrow 32 bits. Widening is a `From` conversion; narrowing is an
//! explicit `cast` with `as` semantics.

pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod position;
pub mod region;

pub use coord::Coord;
pub use direction::Direction;
pub use error::{Axis, Error, Result};
pub use grid::{CharGrid, LineGrid, NestedGrid};
pub use neighbors::{Adjacency, EightWay, Orthogonal};
pub use position::{LongPosition, Position};
pub use region::{LongRegion, Region};
