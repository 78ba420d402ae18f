//! Cell values as they come back from a bucket query.

use bucket_error::{QueryError, QueryErrorKind};
use serde_json::Value;

/// A single non-null value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl Scalar {
    /// Truthiness used when rendering boolean columns.
    ///
    /// Empty text and `"0"` are false, as are numeric zeroes.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Text(s) => !(s.is_empty() || s == "0"),
            Scalar::Integer(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Bool(b) => *b,
        }
    }

    /// Whether the display form of this value is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Text(s) => s.is_empty(),
            Scalar::Bool(b) => !b,
            Scalar::Integer(_) | Scalar::Float(_) => false,
        }
    }

    /// Converts a JSON leaf into a scalar.
    ///
    /// Returns `Ok(None)` for `null`; arrays and objects are not scalars.
    pub fn from_json(value: &Value) -> Result<Option<Self>, QueryError> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Scalar::Bool(*b))),
            Value::String(s) => Ok(Some(Scalar::Text(s.clone()))),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Some(Scalar::Integer(i))),
                None => Ok(n.as_f64().map(Scalar::Float)),
            },
            Value::Array(_) | Value::Object(_) => Err(QueryError::new(
                QueryErrorKind::MalformedResult(format!("expected a scalar value, got {}", value)),
            )),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => f.write_str(&format_float(*x)),
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => Ok(()),
        }
    }
}

/// Significant digits kept when printing floats.
const FLOAT_PRECISION: i32 = 14;

/// Prints a float the way the wiki prints numbers: fourteen significant
/// digits, trailing zeros trimmed, and exponent notation (`1.0E+25`) below
/// `1e-4` or from `1e14` upward.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NAN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding happens here, so a carry into the next power of ten is
    // already reflected in the exponent.
    let scientific = format!("{:.*e}", (FLOAT_PRECISION - 1) as usize, x);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= FLOAT_PRECISION {
        let mut mantissa = trim_fraction(mantissa).to_string();
        if !mantissa.contains('.') {
            mantissa.push_str(".0");
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (FLOAT_PRECISION - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Value of one cell in a result row.
///
/// The shape is decided once, when the row is ingested, so formatting never
/// has to guess whether it holds a list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value
    #[default]
    Null,
    /// A single value
    Scalar(Scalar),
    /// An ordered list of values, as stored in repeated columns.
    /// `None` marks a null element.
    Sequence(Vec<Option<Scalar>>),
}

impl CellValue {
    /// Whether this cell holds no value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Converts a JSON value into a cell value.
    ///
    /// Nulls inside a list are kept in place. Nested lists and objects are
    /// rejected.
    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        match value {
            Value::Array(items) => Ok(CellValue::Sequence(
                items
                    .iter()
                    .map(Scalar::from_json)
                    .collect::<Result<_, _>>()?,
            )),
            other => Ok(Scalar::from_json(other)?
                .map(CellValue::Scalar)
                .unwrap_or(CellValue::Null)),
        }
    }
}

impl From<Scalar> for CellValue {
    fn from(scalar: Scalar) -> Self {
        CellValue::Scalar(scalar)
    }
}

macro_rules! cell_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    CellValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

cell_from_scalar!(&str, String, i64, f64, bool);

impl<T: Into<Scalar>> From<Vec<T>> for CellValue {
    fn from(values: Vec<T>) -> Self {
        CellValue::Sequence(values.into_iter().map(|v| Some(v.into())).collect())
    }
}
