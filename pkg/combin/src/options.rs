/// What factorial/permutation/combination do with a negative argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NegativeInputPolicy {
    /// Return NaN and let the caller check for it.
    Sentinel,

    /// Return a CombinError::NegativeArgument.
    Raise,
}

/// What pascal() does when given a non-numeric row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PascalCoercion {
    /// Never coerce. The row fails the numeric check of the first combination
    /// it is used in (or fails as an invalid row length if it has no numeric
    /// value at all).
    Never,

    /// Convert the row with Number() semantics and log a warning.
    WithWarning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub negative_input: NegativeInputPolicy,
    pub pascal_coercion: PascalCoercion,
}

impl Options {
    pub const DEFAULT: Options = Options {
        negative_input: NegativeInputPolicy::Sentinel,
        pascal_coercion: PascalCoercion::Never,
    };

    /// Every operation reports invalid input as an Err and pascal() accepts
    /// numeric strings.
    pub const STRICT: Options = Options {
        negative_input: NegativeInputPolicy::Raise,
        pascal_coercion: PascalCoercion::WithWarning,
    };
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}
