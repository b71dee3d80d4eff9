//! Values in the shape the database driver produces and accepts.

use std::fmt::{self, Display, Formatter};

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// A driver timestamp: an absolute instant with millisecond precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the Unix epoch.
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// The instant as a UTC date-time, or `None` if it is out of range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.3f")),
            None => write!(f, "{}ms", self.millis),
        }
    }
}

/// A typed SQL array as created or returned by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeArray {
    /// The driver's name for the element type, e.g. `BIGINT`.
    pub base_type_name: String,
    pub elements: Vec<NativeValue>,
}

impl NativeArray {
    pub fn new(base_type_name: impl Into<String>, elements: Vec<NativeValue>) -> Self {
        Self {
            base_type_name: base_type_name.into(),
            elements,
        }
    }
}

/// A value in the representation the driver reads from columns and binds as parameters.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NativeValue {
    Null,
    Str(String),
    Bool(bool),
    Long(i64),
    Double(f64),
    Decimal(BigDecimal),
    Bytes(Vec<u8>),
    Timestamp(Timestamp),
    Date(NaiveDate),
    Time(NaiveTime),
    Array(NativeArray),
    /// Any driver object without a dedicated variant, e.g. a UUID or an interval.
    Other {
        /// The driver's name for the object's concrete type.
        class: String,
        /// The object's default text rendering.
        text: String,
    },
}

impl NativeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }

    /// The name of this value's concrete shape, used in diagnostics.
    pub fn shape_name(&self) -> &str {
        match self {
            NativeValue::Null => "null",
            NativeValue::Str(_) => "string",
            NativeValue::Bool(_) => "boolean",
            NativeValue::Long(_) => "long",
            NativeValue::Double(_) => "double",
            NativeValue::Decimal(_) => "decimal",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Timestamp(_) => "timestamp",
            NativeValue::Date(_) => "date",
            NativeValue::Time(_) => "time",
            NativeValue::Array(_) => "array",
            NativeValue::Other { class, .. } => class,
        }
    }
}

/// The driver's default text rendering of a value; `NULL` renders as `null`.
impl Display for NativeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Null => f.write_str("null"),
            NativeValue::Str(s) => f.write_str(s),
            NativeValue::Bool(b) => write!(f, "{b}"),
            NativeValue::Long(n) => write!(f, "{n}"),
            NativeValue::Double(n) => write!(f, "{n}"),
            NativeValue::Decimal(n) => write!(f, "{n}"),
            NativeValue::Bytes(bytes) => write!(f, "\\x{}", hex::encode(bytes)),
            NativeValue::Timestamp(ts) => write!(f, "{ts}"),
            NativeValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            NativeValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            NativeValue::Array(array) => {
                f.write_str("{")?;
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("}")
            }
            NativeValue::Other { text, .. } => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_renders_native_values_as_text() {
        assert_eq!(NativeValue::Null.to_string(), "null");
        assert_eq!(NativeValue::Long(-12).to_string(), "-12");
        assert_eq!(NativeValue::Bytes(vec![0xDE, 0xAD]).to_string(), "\\xdead");
        assert_eq!(
            NativeValue::Timestamp(Timestamp::from_millis(1_183_305_600_000)).to_string(),
            "2007-07-01 16:00:00.000"
        );
        assert_eq!(
            NativeValue::Array(NativeArray::new(
                "BIGINT",
                vec![NativeValue::Long(1), NativeValue::Null, NativeValue::Long(3)]
            ))
            .to_string(),
            "{1,null,3}"
        );
        assert_eq!(
            NativeValue::Other {
                class: "java.util.UUID".into(),
                text: "0e1d2c3b-0000-0000-0000-000000000000".into(),
            }
            .to_string(),
            "0e1d2c3b-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn it_names_shapes() {
        assert_eq!(NativeValue::Long(0).shape_name(), "long");
        assert_eq!(
            NativeValue::Other {
                class: "org.postgresql.util.PGInterval".into(),
                text: "1 day".into(),
            }
            .shape_name(),
            "org.postgresql.util.PGInterval"
        );
    }
}
