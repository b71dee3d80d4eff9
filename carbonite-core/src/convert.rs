use chrono::NaiveDate;

use crate::driver::ResultSet;
use crate::error::{Error, Result};
use crate::native::NativeValue;
use crate::runtime_type::RuntimeType;
use crate::type_code::SqlTypeCode;
use crate::value::Value;

/// The pattern a date column backed by a string is parsed with (`YYYY-MM-DD`).
pub const DATE_PATTERN: &str = "%Y-%m-%d";

/// Converts one column of a result set into [`Value`]s.
///
/// A converter is chosen once per column from its SQL type code and can then
/// be invoked for every row without re-dispatching. Converters hold no state:
/// two converters for the same type code are equal and behave identically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnConverter {
    /// Character data, read with `get_string`.
    Str,
    /// `BIT` / `BOOLEAN`.
    Bool,
    /// Any integer width, widened to `i64`.
    Int,
    /// Any approximate numeric, widened to `f64`.
    Float,
    /// Exact numerics.
    Decimal,
    /// Binary data.
    Buf,
    /// `TIMESTAMP`, normalized to UTC.
    DateTime,
    /// `DATE`, from a native date or a `YYYY-MM-DD` string.
    Date,
    /// `TIME`, to second precision.
    Time,
    /// `ARRAY` of 64-bit integers.
    List,
    /// Anything else, read as the text rendering of the native object.
    Default,
}

impl ColumnConverter {
    /// Selects the converter for a SQL type code.
    pub const fn for_type(code: SqlTypeCode) -> Self {
        match code {
            _ if code.is_text() => ColumnConverter::Str,
            SqlTypeCode::BIT | SqlTypeCode::BOOLEAN => ColumnConverter::Bool,
            _ if code.is_integer() => ColumnConverter::Int,
            _ if code.is_float() => ColumnConverter::Float,
            _ if code.is_decimal() => ColumnConverter::Decimal,
            _ if code.is_binary() => ColumnConverter::Buf,
            SqlTypeCode::TIMESTAMP => ColumnConverter::DateTime,
            SqlTypeCode::DATE => ColumnConverter::Date,
            SqlTypeCode::TIME => ColumnConverter::Time,
            SqlTypeCode::ARRAY => ColumnConverter::List,
            _ => ColumnConverter::Default,
        }
    }

    /// The runtime type of the non-null values this converter produces.
    ///
    /// `None` for [`ColumnConverter::Default`]: its values are text, but the
    /// column has no declared runtime type.
    pub const fn runtime_type(&self) -> Option<RuntimeType> {
        Some(match self {
            ColumnConverter::Str => RuntimeType::Str,
            ColumnConverter::Bool => RuntimeType::Bool,
            ColumnConverter::Int => RuntimeType::Int,
            ColumnConverter::Float => RuntimeType::Float,
            ColumnConverter::Decimal => RuntimeType::Decimal,
            ColumnConverter::Buf => RuntimeType::Buf,
            ColumnConverter::DateTime => RuntimeType::DateTime,
            ColumnConverter::Date => RuntimeType::Date,
            ColumnConverter::Time => RuntimeType::Time,
            ColumnConverter::List => RuntimeType::List,
            ColumnConverter::Default => return None,
        })
    }

    /// Converts column `col` of the current row.
    pub fn convert<R>(&self, rs: &mut R, col: usize) -> Result<Value>
    where
        R: ResultSet + ?Sized,
    {
        Ok(match self {
            ColumnConverter::Str => rs.get_string(col)?.map_or(Value::Null, Value::Str),

            // primitive reads return a zero value for NULL; was_null() must be
            // consulted after every one of them
            ColumnConverter::Bool => {
                let b = rs.get_bool(col)?;
                if rs.was_null() {
                    return Ok(Value::Null);
                }
                Value::Bool(b)
            }

            ColumnConverter::Int => {
                let i = rs.get_long(col)?;
                if rs.was_null() {
                    return Ok(Value::Null);
                }
                Value::Int(i)
            }

            ColumnConverter::Float => {
                let f = rs.get_double(col)?;
                if rs.was_null() {
                    return Ok(Value::Null);
                }
                Value::Float(f)
            }

            ColumnConverter::Decimal => rs.get_decimal(col)?.map_or(Value::Null, Value::Decimal),

            ColumnConverter::Buf => match rs.get_bytes(col)? {
                Some(buf) if !rs.was_null() => Value::Buf(buf),
                _ => Value::Null,
            },

            ColumnConverter::DateTime => convert_timestamp(rs, col)?,

            ColumnConverter::Date => convert_date(rs, col)?,

            ColumnConverter::Time => match rs.get_time(col)? {
                Some(t) if !rs.was_null() => Value::Time(t),
                _ => Value::Null,
            },

            ColumnConverter::List => convert_array(rs, col)?,

            ColumnConverter::Default => Value::Str(rs.get_object(col)?.to_string()),
        })
    }
}

fn convert_timestamp<R>(rs: &mut R, col: usize) -> Result<Value>
where
    R: ResultSet + ?Sized,
{
    match rs.get_object(col)? {
        NativeValue::Null => Ok(Value::Null),

        NativeValue::Timestamp(_) => {
            let ts = match rs.get_timestamp(col)? {
                Some(ts) if !rs.was_null() => ts,
                _ => return Ok(Value::Null),
            };

            let utc = ts.to_utc().ok_or_else(|| {
                Error::decode(format!("timestamp out of range: {}ms", ts.millis()))
            })?;

            Ok(Value::DateTime(utc.fixed_offset()))
        }

        other => Err(unsupported(SqlTypeCode::TIMESTAMP, &other)),
    }
}

fn convert_date<R>(rs: &mut R, col: usize) -> Result<Value>
where
    R: ResultSet + ?Sized,
{
    match rs.get_object(col)? {
        NativeValue::Null => Ok(Value::Null),

        NativeValue::Date(_) => match rs.get_date(col)? {
            Some(d) if !rs.was_null() => Ok(Value::Date(d)),
            _ => Ok(Value::Null),
        },

        NativeValue::Str(s) => parse_date(&s).map(Value::Date),

        other => Err(unsupported(SqlTypeCode::DATE, &other)),
    }
}

/// Parses a date of exactly the shape `YYYY-MM-DD`, zero-padded and unsigned.
fn parse_date(s: &str) -> Result<NaiveDate> {
    let shaped = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return Err(Error::decode(format!("date {s:?} does not match YYYY-MM-DD")));
    }

    NaiveDate::parse_from_str(s, DATE_PATTERN).map_err(Error::decode)
}

fn convert_array<R>(rs: &mut R, col: usize) -> Result<Value>
where
    R: ResultSet + ?Sized,
{
    let Some(array) = rs.get_array(col)? else {
        return Ok(Value::Null);
    };

    // TODO: element conversion is integer-only; dispatch on `base_type_name` once
    // other element types are bound outbound through `ArrayTypeMap`
    array
        .elements
        .into_iter()
        .map(|element| match element {
            NativeValue::Long(i) => Ok(Value::Int(i)),
            NativeValue::Null => Ok(Value::Null),
            other => Err(unsupported(SqlTypeCode::ARRAY, &other)),
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::List)
}

fn unsupported(sql_type: SqlTypeCode, value: &NativeValue) -> Error {
    Error::UnsupportedNativeShape {
        sql_type,
        shape: value.shape_name().to_owned(),
    }
}
