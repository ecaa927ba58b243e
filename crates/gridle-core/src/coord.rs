//! The integer kind behind width-generic coordinates.

use std::fmt;
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

/// A signed primitive integer usable as a coordinate.
///
/// [`Position`](crate::Position) and [`Region`](crate::Region) are generic
/// over this trait so the 32-bit and 64-bit variants share one
/// implementation. The trait is blanket-implemented; `i32` (the default
/// width) and `i64` (the wide width) are the instantiations the crate names,
/// but any signed primitive qualifies.
pub trait Coord:
    PrimInt + Signed + Hash + Default + fmt::Display + fmt::Debug + 'static
{
}

impl<T> Coord for T where
    T: PrimInt + Signed + Hash + Default + fmt::Display + fmt::Debug + 'static
{
}
