//! Construction errors for regions and grids.

use std::fmt;

use thiserror::Error;

/// The axis on which a bounds violation occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors raised by `gridle-core` constructors.
///
/// Only construction reports through this type. Lookups on already-built
/// values are either total or panic with the native out-of-bounds error,
/// matching slice indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A region was given `min >= max` on the named axis.
    #[error("degenerate region: {axis} bounds {min}..={max} do not span")]
    Bounds { axis: Axis, min: i64, max: i64 },
    /// A character grid was given no lines, or an empty first line.
    #[error("character grid needs at least one line with at least one character")]
    EmptyGrid,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
