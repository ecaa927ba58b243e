//! Integer arithmetic helpers: floor-modulo, GCD and LCM.

use num_traits::{PrimInt, Signed};

/// Floor-modulo: the remainder of `a / b`, shifted into the divisor's range.
///
/// Unlike `%`, which truncates toward zero, the result for a positive `b`
/// always lies in `[0, b)`, so `modulo(-1, 10) == 9`. Negative divisors are
/// honored the same way: `modulo(-9, -5) == -4`.
#[inline]
pub fn modulo<T: PrimInt + Signed>(a: T, b: T) -> T {
    (a % b + b) % b
}

/// Greatest common divisor of two values, by absolute value.
pub fn gcd<T: PrimInt + Signed>(a: T, b: T) -> T {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple of two values, by absolute value.
#[inline]
pub fn lcm<T: PrimInt + Signed>(a: T, b: T) -> T {
    let (a, b) = (a.abs(), b.abs());
    a / gcd(a, b) * b
}

/// GCD folded over a whole sequence. Zero when the sequence is empty.
pub fn gcd_all<T, I>(values: I) -> T
where
    T: PrimInt + Signed,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(gcd).unwrap_or_else(T::zero)
}

/// LCM folded over a whole sequence. Zero when the sequence is empty.
pub fn lcm_all<T, I>(values: I) -> T
where
    T: PrimInt + Signed,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(lcm).unwrap_or_else(T::zero)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_positive_divisor() {
        assert_eq!(modulo(10, 5), 0);
        assert_eq!(modulo(5, 2), 1);
        assert_eq!(modulo(0, 10), 0);
        assert_eq!(modulo(-1, 10), 9);
        assert_eq!(modulo(-10, 10), 0);
        assert_eq!(modulo(-12, 10), 8);
    }

    #[test]
    fn modulo_negative_divisor() {
        assert_eq!(modulo(-10, -5), 0);
        assert_eq!(modulo(-5, -9), -5);
        assert_eq!(modulo(-9, -5), -4);
    }

    #[test]
    fn modulo_wide() {
        assert_eq!(modulo(-1i64, 4_000_000_000), 3_999_999_999);
    }

    #[test]
    fn gcd_pairs() {
        assert_eq!(gcd(8, 16), 8);
        assert_eq!(gcd(16, 8), 8);
        assert_eq!(gcd(7, 16), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(-8, 12), 4);
    }

    #[test]
    fn lcm_pairs() {
        assert_eq!(lcm(8, 16), 16);
        assert_eq!(lcm(12, 15), 60);
        assert_eq!(lcm(7, 16), 112);
        assert_eq!(lcm(-4, 6), 12);
    }

    #[test]
    fn gcd_all_sequences() {
        assert_eq!(gcd_all(Vec::<i64>::new()), 0);
        assert_eq!(gcd_all([16409i64]), 16409);
        assert_eq!(gcd_all([16409i64, 19637, 18023, 15871, 14257, 12643]), 269);
    }

    #[test]
    fn lcm_all_sequences() {
        assert_eq!(lcm_all(Vec::<i64>::new()), 0);
        assert_eq!(lcm_all([16409i64]), 16409);
        assert_eq!(
            lcm_all([16409i64, 19637, 18023, 15871, 14257, 12643]),
            11_795_205_644_011
        );
    }
}
