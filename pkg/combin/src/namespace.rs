use tracing::{debug, warn};

use crate::combin;
use crate::error::*;
use crate::options::*;
use crate::value::Value;

static GLOBAL: Combinatorics = Combinatorics::new(Options::DEFAULT);

/// Entry point grouping the four operations over dynamically typed arguments.
///
/// Arguments of the wrong type are rejected with
/// CombinError::NonNumericArgument. What happens with negative numbers depends
/// on the Options the namespace was created with:
///
/// - factorial/permutation/combination return NaN by default
///   (NegativeInputPolicy::Sentinel).
/// - pascal always returns CombinError::NegativeRow.
#[derive(Clone, Debug)]
pub struct Combinatorics {
    options: Options,
}

impl Combinatorics {
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Instance with the default options. Used by the crate level functions.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn factorial<N: Into<Value>>(&self, n: N) -> Result<f64> {
        let op = Operation::Factorial;
        let n = number_argument(op, &n.into())?;
        self.check_negative(op, &[n])?;

        Ok(combin::factorial(n))
    }

    pub fn permutation<N: Into<Value>, R: Into<Value>>(&self, n: N, r: R) -> Result<f64> {
        let op = Operation::Permutation;
        let n = number_argument(op, &n.into())?;
        let r = number_argument(op, &r.into())?;
        self.check_negative(op, &[n, r])?;

        Ok(combin::permutation(n, r))
    }

    pub fn combination<N: Into<Value>, R: Into<Value>>(&self, n: N, r: R) -> Result<f64> {
        let op = Operation::Combination;
        let n = number_argument(op, &n.into())?;
        let r = number_argument(op, &r.into())?;
        self.check_negative(op, &[n, r])?;

        Ok(combin::combination(n, r))
    }

    pub fn pascal<N: Into<Value>>(&self, n: N) -> Result<Vec<f64>> {
        let value = n.into();

        let row = match value.get_number() {
            Some(v) => v,
            None => match self.options.pascal_coercion {
                PascalCoercion::WithWarning => {
                    let v = value.to_number();
                    warn!(
                        found = value.type_name(),
                        row = v,
                        "pascal got a non-number parameter, casting to a number may yield undesired results"
                    );
                    v
                }
                PascalCoercion::Never => return Err(uncoerced_row_error(&value)),
            },
        };

        combin::pascal(row)
    }

    /// Under NegativeInputPolicy::Raise, fails on the first negative argument.
    /// Otherwise negative arguments pass through and produce NaN.
    fn check_negative(&self, operation: Operation, args: &[f64]) -> Result<()> {
        let value = match args.iter().find(|v| **v < 0.0) {
            Some(v) => *v,
            None => return Ok(()),
        };

        match self.options.negative_input {
            NegativeInputPolicy::Sentinel => {
                debug!(%operation, value, "negative argument, returning NaN");
                Ok(())
            }
            NegativeInputPolicy::Raise => Err(CombinError::NegativeArgument { operation, value }),
        }
    }
}

impl Default for Combinatorics {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

fn number_argument(operation: Operation, value: &Value) -> Result<f64> {
    value
        .get_number()
        .ok_or_else(|| CombinError::NonNumericArgument {
            operation,
            found: value.type_name(),
        })
}

/// Error for a non-numeric row that was not coerced.
///
/// The row is still compared against zero numerically, so "-1" is reported as a
/// negative row. A row with no numeric value can't size the output. Anything
/// else is handed to combination() which rejects it.
fn uncoerced_row_error(value: &Value) -> CombinError {
    let row = value.to_number();
    if row < 0.0 {
        CombinError::NegativeRow { row }
    } else if row.is_nan() {
        CombinError::InvalidRowLength { row }
    } else {
        CombinError::NonNumericArgument {
            operation: Operation::Combination,
            found: value.type_name(),
        }
    }
}
