/// Dynamically typed argument accepted by the namespace operations.
///
/// Callers holding plain numbers can pass them directly (`f64`, `i32`, etc.
/// convert into `Value::Number`). The other variants exist so that misuse with
/// non-numeric data is reported as an error instead of being silently
/// reinterpreted.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
    Undefined,
}

impl Value {
    pub fn get_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Name of this value's type as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Undefined => "undefined",
        }
    }

    /// Converts to a number the way JavaScript's `Number(value)` does.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(v) => *v,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
            Self::Null => 0.0,
            Self::Undefined => core::f64::NAN,
            Self::String(s) => parse_number(s),
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return core::f64::INFINITY,
        "-Infinity" => return core::f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(0..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // Rust's float parser also accepts "inf", "nan" and friends which Number()
    // does not.
    let is_decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == '.' || c == 'e' || c == 'E');
    if !is_decimal {
        return core::f64::NAN;
    }

    s.parse::<f64>().unwrap_or(core::f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return core::f64::NAN;
    }

    let mut v = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => v = v * (radix as f64) + (d as f64),
            None => return core::f64::NAN,
        }
    }

    v
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(value as f64)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Number(value as f64)
            }
        }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(5), Value::Number(5.0));
        assert_eq!(Value::from(2.5f32), Value::Number(2.5));
        assert_eq!(Value::from("5"), Value::String("5".into()));
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some(3u8)), Value::Number(3.0));
        assert_eq!(Value::from(true).type_name(), "boolean");
    }

    #[test]
    fn to_number_follows_number_cast() {
        assert_eq!(Value::from("  42 ").to_number(), 42.0);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert_eq!(Value::from("-2.5e1").to_number(), -25.0);
        assert_eq!(Value::from(".5").to_number(), 0.5);
        assert_eq!(Value::from("0x1F").to_number(), 31.0);
        assert_eq!(Value::from("0b101").to_number(), 5.0);
        assert_eq!(Value::from("0o17").to_number(), 15.0);
        assert_eq!(Value::from("-Infinity").to_number(), core::f64::NEG_INFINITY);
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert_eq!(Value::Null.to_number(), 0.0);

        assert!(Value::Undefined.to_number().is_nan());
        assert!(Value::from("abc").to_number().is_nan());
        assert!(Value::from("inf").to_number().is_nan());
        assert!(Value::from("NaN").to_number().is_nan());
        assert!(Value::from("0x").to_number().is_nan());
        assert!(Value::from("1 2").to_number().is_nan());
    }
}
