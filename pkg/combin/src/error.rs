use core::fmt;

use failure::Fail;

/// One of the four operations exposed by the namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Factorial,
    Permutation,
    Combination,
    Pascal,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Factorial => "factorial",
            Operation::Permutation => "permutation",
            Operation::Combination => "combination",
            Operation::Pascal => "pascal",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum CombinError {
    /// An argument had the wrong fundamental type. This is a caller bug and
    /// should be propagated rather than handled.
    #[fail(
        display = "Cannot pass non-numeric arguments to {}, did you mean to take the length?",
        operation
    )]
    NonNumericArgument {
        operation: Operation,
        /// Type name of the rejected argument.
        found: &'static str,
    },

    /// Only produced when NegativeInputPolicy::Raise is selected. The default
    /// policy returns NaN instead.
    #[fail(
        display = "Cannot pass negative arguments to {}, instead got {}",
        operation, value
    )]
    NegativeArgument { operation: Operation, value: f64 },

    #[fail(
        display = "Row number of Pascal's triangle can be, at minimum, 0, instead got {}",
        row
    )]
    NegativeRow { row: f64 },

    /// The row can't be used as the length of the output sequence (fractional,
    /// NaN, infinite or too large).
    #[fail(display = "Invalid row length for Pascal's triangle: {}", row)]
    InvalidRowLength { row: f64 },
}

impl CombinError {
    /// Whether this error signals misuse of the API (an argument of the wrong
    /// type) rather than an invalid numeric value.
    pub fn is_type_error(&self) -> bool {
        match self {
            CombinError::NonNumericArgument { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T, E = CombinError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let e = CombinError::NonNumericArgument {
            operation: Operation::Factorial,
            found: "string",
        };
        assert_eq!(
            e.to_string(),
            "Cannot pass non-numeric arguments to factorial, did you mean to take the length?"
        );
        assert!(e.is_type_error());

        let e = CombinError::NegativeRow { row: -1.0 };
        assert_eq!(
            e.to_string(),
            "Row number of Pascal's triangle can be, at minimum, 0, instead got -1"
        );
        assert!(!e.is_type_error());
    }

    #[test]
    fn operation_names() {
        assert_eq!(Operation::Factorial.to_string(), "factorial");
        assert_eq!(Operation::Pascal.name(), "pascal");
    }
}
