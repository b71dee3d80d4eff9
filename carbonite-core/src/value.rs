use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::runtime_type::RuntimeType;

/// A runtime value produced by inbound conversion or bound as a parameter.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Null,
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    Buf(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(DateTime<FixedOffset>),
    List(Vec<Value>),
}

impl Value {
    /// The runtime type of this value, or `None` for [`Value::Null`].
    pub fn runtime_type(&self) -> Option<RuntimeType> {
        Some(match self {
            Value::Null => return None,
            Value::Str(_) => RuntimeType::Str,
            Value::Bool(_) => RuntimeType::Bool,
            Value::Int(_) => RuntimeType::Int,
            Value::Float(_) => RuntimeType::Float,
            Value::Decimal(_) => RuntimeType::Decimal,
            Value::Buf(_) => RuntimeType::Buf,
            Value::Date(_) => RuntimeType::Date,
            Value::Time(_) => RuntimeType::Time,
            Value::DateTime(_) => RuntimeType::DateTime,
            Value::List(_) => RuntimeType::List,
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Value::from)
    }
}

macro_rules! impl_from_for_value {
    ($ty:ty => $variant:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value.into())
            }
        }
    };
}

impl_from_for_value!(String => Str);
impl_from_for_value!(&'_ str => Str);
impl_from_for_value!(bool => Bool);
impl_from_for_value!(i16 => Int);
impl_from_for_value!(i32 => Int);
impl_from_for_value!(i64 => Int);
impl_from_for_value!(f32 => Float);
impl_from_for_value!(f64 => Float);
impl_from_for_value!(BigDecimal => Decimal);
impl_from_for_value!(Vec<u8> => Buf);
impl_from_for_value!(NaiveDate => Date);
impl_from_for_value!(NaiveTime => Time);

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::DateTime(value.fixed_offset())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}
