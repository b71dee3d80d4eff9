use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::convert::ColumnConverter;
use crate::error::Error;
use crate::type_code::SqlTypeCode;

/// The runtime type that represents a non-null [`Value`](crate::Value).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    Str,
    Bool,
    Int,
    Float,
    Decimal,
    Buf,
    Date,
    Time,
    DateTime,
    List,
}

impl RuntimeType {
    /// The simple name of the type, e.g. `Int`.
    pub const fn name(&self) -> &'static str {
        match self {
            RuntimeType::Str => "Str",
            RuntimeType::Bool => "Bool",
            RuntimeType::Int => "Int",
            RuntimeType::Float => "Float",
            RuntimeType::Decimal => "Decimal",
            RuntimeType::Buf => "Buf",
            RuntimeType::Date => "Date",
            RuntimeType::Time => "Time",
            RuntimeType::DateTime => "DateTime",
            RuntimeType::List => "List",
        }
    }

    /// The qualified name of the type, e.g. `sys::Int`.
    pub fn qname(&self) -> String {
        format!("sys::{}", self.name())
    }

    /// Maps a SQL type code to the runtime type that represents it.
    ///
    /// Returns `None` for codes that have no mapping; such columns are still
    /// readable, as text, through [`ColumnConverter::Default`].
    pub const fn from_sql_type(code: SqlTypeCode) -> Option<RuntimeType> {
        ColumnConverter::for_type(code).runtime_type()
    }
}

/// Maps a SQL type code to the runtime type that represents it.
///
/// Used for schema reflection; row conversion goes through [`ColumnConverter`].
pub const fn sql_to_runtime_type(code: SqlTypeCode) -> Option<RuntimeType> {
    RuntimeType::from_sql_type(code)
}

impl Display for RuntimeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuntimeType {
    type Err = Error;

    /// Parses a simple (`Int`) or qualified (`sys::Int`) type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("sys::").unwrap_or(s);

        Ok(match name {
            "Str" => RuntimeType::Str,
            "Bool" => RuntimeType::Bool,
            "Int" => RuntimeType::Int,
            "Float" => RuntimeType::Float,
            "Decimal" => RuntimeType::Decimal,
            "Buf" => RuntimeType::Buf,
            "Date" => RuntimeType::Date,
            "Time" => RuntimeType::Time,
            "DateTime" => RuntimeType::DateTime,
            "List" => RuntimeType::List,
            _ => return Err(Error::decode(format!("unknown runtime type {s:?}"))),
        })
    }
}
