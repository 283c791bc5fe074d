//! Elementary combinatorics: factorial, nPr, nCr and rows of Pascal's
//! triangle.
//!
//! All results are computed in floating point. The typed functions in
//! [`combin`] take numbers directly. The functions at the crate root (and the
//! [`Combinatorics`] namespace they delegate to) take dynamically typed
//! [`Value`] arguments and reject non-numeric ones with a type error.
//!
//! The operations don't share one error policy:
//!
//! - `factorial`, `permutation` and `combination` return NaN for negative
//!   arguments.
//! - `pascal` returns `CombinError::NegativeRow` for a negative row.
//!
//! A namespace created with `Options::STRICT` raises errors for both.

pub mod combin;
pub mod error;
mod namespace;
mod options;
mod value;

pub use error::{CombinError, Operation, Result};
pub use namespace::Combinatorics;
pub use options::{NegativeInputPolicy, Options, PascalCoercion};
pub use value::Value;

/// Computes n! (NaN for negative n).
pub fn factorial<N: Into<Value>>(n: N) -> Result<f64> {
    Combinatorics::global().factorial(n)
}

/// Computes n! / (n - r)! (NaN for negative n or r).
pub fn permutation<N: Into<Value>, R: Into<Value>>(n: N, r: R) -> Result<f64> {
    Combinatorics::global().permutation(n, r)
}

/// Computes n! / ((n - r)! * r!) (NaN for negative n or r).
pub fn combination<N: Into<Value>, R: Into<Value>>(n: N, r: R) -> Result<f64> {
    Combinatorics::global().combination(n, r)
}

/// Computes row n of Pascal's triangle.
pub fn pascal<N: Into<Value>>(n: N) -> Result<Vec<f64>> {
    Combinatorics::global().pascal(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_level_functions() {
        assert_eq!(factorial(0).unwrap(), 1.0);
        assert_eq!(factorial(1).unwrap(), 1.0);
        assert_eq!(factorial(5).unwrap(), 120.0);
        assert_eq!(permutation(5, 0).unwrap(), 1.0);
        assert_eq!(permutation(5, 5).unwrap(), 120.0);
        assert_eq!(combination(5, 2).unwrap(), 10.0);
        assert_eq!(pascal(5).unwrap(), vec![1.0, 5.0, 10.0, 10.0, 5.0, 1.0]);

        assert!(factorial(-2).unwrap().is_nan());
        assert!(pascal(-1).is_err());
        assert!(factorial("abc").unwrap_err().is_type_error());
    }

    #[test]
    fn errors_propagate_with_question_mark() {
        fn row_sum(n: &str) -> Result<f64> {
            let row = pascal(n)?;
            Ok(row.iter().sum())
        }

        assert!(row_sum("3").unwrap_err().is_type_error());
    }
}
