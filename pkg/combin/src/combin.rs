// Combinatorics utilities.
//
// All of these operate on floating point numbers. Integer valued results are
// exact while they stay below 2^53, after which precision is lost silently and
// very large values overflow to infinity.

use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::*;

/// Largest row accepted by pascal(). The row has n + 1 entries and sequence
/// lengths are limited to 2^32 - 1.
const MAX_ROW: f64 = 4294967294.0;

/// Computes start * (start - 1) * (start - 2) * ... while the term is > 1.
///
/// Returns 1 when start <= 1 (or is NaN). Non-integer starting points are
/// allowed and just produce a product of non-integer terms.
pub fn descending_product<T: Float>(start: T) -> T {
    let mut v = T::one();
    let mut i = start;
    while i > T::one() {
        v = v * i;
        i = i - T::one();
    }

    v
}

/// Computes n! or NaN if n is negative.
pub fn factorial<T: Float>(n: T) -> T {
    if n < T::zero() {
        return T::nan();
    }

    descending_product(n)
}

/// Computes 'n permute r' = n! / (n - r)!
///
/// NOTE: (n - r)! is taken to be 1 whenever n - r <= 1, so for r > n this
/// returns n! rather than failing.
pub fn permutation<T: Float>(n: T, r: T) -> T {
    if n < T::zero() || r < T::zero() {
        return T::nan();
    }

    descending_product(n) / descending_product(n - r)
}

/// Computes 'n choose r' = n! / ((n - r)! * r!)
///
/// Has the same r > n behavior as permutation().
pub fn combination<T: Float>(n: T, r: T) -> T {
    if n < T::zero() || r < T::zero() {
        return T::nan();
    }

    let n_factorial = descending_product(n);
    let nr_factorial = descending_product(n - r);
    let r_factorial = descending_product(r);

    n_factorial / (nr_factorial * r_factorial)
}

/// Computes row 'n' (zero indexed) of Pascal's triangle.
///
/// Unlike the other functions, a negative row is an error rather than NaN.
pub fn pascal<T: Float>(n: T) -> Result<Vec<T>> {
    let row = n.to_f64().unwrap_or(core::f64::NAN);

    if n < T::zero() {
        return Err(CombinError::NegativeRow { row });
    }

    if n == T::zero() {
        return Ok(vec![T::one()]);
    }

    if !n.is_finite() || n.fract() != T::zero() || row > MAX_ROW {
        return Err(CombinError::InvalidRowLength { row });
    }

    let len = match (n + T::one()).to_usize() {
        Some(v) => v,
        None => return Err(CombinError::InvalidRowLength { row }),
    };

    // Grown on demand. Reserving the full row up front fails for large rows.
    let mut coeff = Vec::new();
    for i in 0..len {
        let r = match <T as NumCast>::from(i) {
            Some(v) => v,
            None => return Err(CombinError::InvalidRowLength { row }),
        };

        coeff.push(combination(n, r));
    }

    Ok(coeff)
}
