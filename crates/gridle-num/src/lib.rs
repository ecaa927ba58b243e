//! Integer helpers for grid puzzles.
//!
//! Two small tool sets shared by the rest of the workspace:
//!
//! - **Arithmetic**: [`modulo`] (floor semantics, for wrapping coordinates),
//!   [`gcd`] / [`lcm`] and their sequence forms [`gcd_all`] / [`lcm_all`]
//! - **Ranges**: [`IntegerRange`], an inclusive stepped range with clamped
//!   cursor stepping
//!
//! Everything is generic over the signed primitive integers where it can be;
//! [`IntegerRange`] is fixed at `i64`, wide enough for any puzzle input.

mod math;
mod range;

pub use math::{gcd, gcd_all, lcm, lcm_all, modulo};
pub use range::{IntegerRange, RangeError, RangeIter};
