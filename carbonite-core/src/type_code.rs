use std::fmt::{self, Display, Formatter};

/// A JDBC-style SQL type code identifying the wire type of a column.
///
/// The codes are the integer values of `java.sql.Types`, which most blocking
/// drivers report through their result-set metadata. Any integer is
/// representable; codes without a named constant are simply unrecognized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SqlTypeCode(i32);

impl SqlTypeCode {
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw integer code as reported by the driver.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` if this is a character or text data type.
    pub const fn is_text(&self) -> bool {
        matches!(
            *self,
            SqlTypeCode::CHAR
                | SqlTypeCode::NCHAR
                | SqlTypeCode::VARCHAR
                | SqlTypeCode::NVARCHAR
                | SqlTypeCode::LONGVARCHAR
                | SqlTypeCode::LONGNVARCHAR
                | SqlTypeCode::SQLXML
        )
    }

    /// Returns `true` if this is an integer data type.
    pub const fn is_integer(&self) -> bool {
        matches!(
            *self,
            SqlTypeCode::TINYINT | SqlTypeCode::SMALLINT | SqlTypeCode::INTEGER | SqlTypeCode::BIGINT
        )
    }

    /// Returns `true` if this is an approximate numeric data type.
    pub const fn is_float(&self) -> bool {
        matches!(
            *self,
            SqlTypeCode::REAL | SqlTypeCode::FLOAT | SqlTypeCode::DOUBLE
        )
    }

    /// Returns `true` if this is an exact numeric data type.
    pub const fn is_decimal(&self) -> bool {
        matches!(*self, SqlTypeCode::DECIMAL | SqlTypeCode::NUMERIC)
    }

    /// Returns `true` if this is a binary data type.
    pub const fn is_binary(&self) -> bool {
        matches!(
            *self,
            SqlTypeCode::BINARY | SqlTypeCode::VARBINARY | SqlTypeCode::LONGVARBINARY
        )
    }

    /// Returns the name for this SQL data type, or `None` if the code is not known.
    pub const fn name(&self) -> Option<&'static str> {
        Some(match *self {
            Self::BIT => "BIT",
            Self::TINYINT => "TINYINT",
            Self::SMALLINT => "SMALLINT",
            Self::INTEGER => "INTEGER",
            Self::BIGINT => "BIGINT",
            Self::FLOAT => "FLOAT",
            Self::REAL => "REAL",
            Self::DOUBLE => "DOUBLE",
            Self::NUMERIC => "NUMERIC",
            Self::DECIMAL => "DECIMAL",
            Self::CHAR => "CHAR",
            Self::VARCHAR => "VARCHAR",
            Self::LONGVARCHAR => "LONGVARCHAR",
            Self::DATE => "DATE",
            Self::TIME => "TIME",
            Self::TIMESTAMP => "TIMESTAMP",
            Self::BINARY => "BINARY",
            Self::VARBINARY => "VARBINARY",
            Self::LONGVARBINARY => "LONGVARBINARY",
            Self::NULL => "NULL",
            Self::OTHER => "OTHER",
            Self::JAVA_OBJECT => "JAVA_OBJECT",
            Self::DISTINCT => "DISTINCT",
            Self::STRUCT => "STRUCT",
            Self::ARRAY => "ARRAY",
            Self::BLOB => "BLOB",
            Self::CLOB => "CLOB",
            Self::REF => "REF",
            Self::DATALINK => "DATALINK",
            Self::BOOLEAN => "BOOLEAN",
            Self::ROWID => "ROWID",
            Self::NCHAR => "NCHAR",
            Self::NVARCHAR => "NVARCHAR",
            Self::LONGNVARCHAR => "LONGNVARCHAR",
            Self::NCLOB => "NCLOB",
            Self::SQLXML => "SQLXML",
            Self::REF_CURSOR => "REF_CURSOR",
            Self::TIME_WITH_TIMEZONE => "TIME_WITH_TIMEZONE",
            Self::TIMESTAMP_WITH_TIMEZONE => "TIMESTAMP_WITH_TIMEZONE",
            _ => return None,
        })
    }
}

impl From<i32> for SqlTypeCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<SqlTypeCode> for i32 {
    fn from(code: SqlTypeCode) -> Self {
        code.0
    }
}

impl Display for SqlTypeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN({})", self.0),
        }
    }
}

// https://docs.oracle.com/en/java/javase/17/docs/api/java.sql/java/sql/Types.html

impl SqlTypeCode {
    /// A single bit. Drivers commonly report boolean columns with this code.
    pub const BIT: SqlTypeCode = SqlTypeCode(-7);

    /// An 8-bit integer.
    pub const TINYINT: SqlTypeCode = SqlTypeCode(-6);

    /// A 16-bit integer.
    pub const SMALLINT: SqlTypeCode = SqlTypeCode(5);

    /// A 32-bit integer.
    pub const INTEGER: SqlTypeCode = SqlTypeCode(4);

    /// A 64-bit integer.
    pub const BIGINT: SqlTypeCode = SqlTypeCode(-5);

    /// An approximate numeric of driver-defined precision, usually 8 bytes.
    pub const FLOAT: SqlTypeCode = SqlTypeCode(6);

    /// A 4-byte approximate numeric.
    pub const REAL: SqlTypeCode = SqlTypeCode(7);

    /// An 8-byte approximate numeric.
    pub const DOUBLE: SqlTypeCode = SqlTypeCode(8);

    /// An exact numeric with declared precision and scale.
    pub const NUMERIC: SqlTypeCode = SqlTypeCode(2);

    /// An exact numeric with declared precision and scale.
    pub const DECIMAL: SqlTypeCode = SqlTypeCode(3);

    /// Fixed-length character data.
    pub const CHAR: SqlTypeCode = SqlTypeCode(1);

    /// Variable-length character data.
    pub const VARCHAR: SqlTypeCode = SqlTypeCode(12);

    /// Long variable-length character data.
    pub const LONGVARCHAR: SqlTypeCode = SqlTypeCode(-1);

    /// A calendar date without time of day.
    pub const DATE: SqlTypeCode = SqlTypeCode(91);

    /// A time of day without date.
    pub const TIME: SqlTypeCode = SqlTypeCode(92);

    /// A date and time of day.
    pub const TIMESTAMP: SqlTypeCode = SqlTypeCode(93);

    /// Fixed-length binary data.
    pub const BINARY: SqlTypeCode = SqlTypeCode(-2);

    /// Variable-length binary data.
    pub const VARBINARY: SqlTypeCode = SqlTypeCode(-3);

    /// Long variable-length binary data.
    pub const LONGVARBINARY: SqlTypeCode = SqlTypeCode(-4);

    /// Always `NULL`.
    pub const NULL: SqlTypeCode = SqlTypeCode(0);

    /// A database-specific type with no standard code.
    pub const OTHER: SqlTypeCode = SqlTypeCode(1111);

    pub const JAVA_OBJECT: SqlTypeCode = SqlTypeCode(2000);

    pub const DISTINCT: SqlTypeCode = SqlTypeCode(2001);

    pub const STRUCT: SqlTypeCode = SqlTypeCode(2002);

    /// A SQL array.
    pub const ARRAY: SqlTypeCode = SqlTypeCode(2003);

    pub const BLOB: SqlTypeCode = SqlTypeCode(2004);

    pub const CLOB: SqlTypeCode = SqlTypeCode(2005);

    pub const REF: SqlTypeCode = SqlTypeCode(2006);

    pub const DATALINK: SqlTypeCode = SqlTypeCode(70);

    /// A boolean.
    pub const BOOLEAN: SqlTypeCode = SqlTypeCode(16);

    pub const ROWID: SqlTypeCode = SqlTypeCode(-8);

    /// Fixed-length national character data.
    pub const NCHAR: SqlTypeCode = SqlTypeCode(-15);

    /// Variable-length national character data.
    pub const NVARCHAR: SqlTypeCode = SqlTypeCode(-9);

    /// Long variable-length national character data.
    pub const LONGNVARCHAR: SqlTypeCode = SqlTypeCode(-16);

    pub const NCLOB: SqlTypeCode = SqlTypeCode(2011);

    /// An XML document, read as text.
    pub const SQLXML: SqlTypeCode = SqlTypeCode(2009);

    pub const REF_CURSOR: SqlTypeCode = SqlTypeCode(2012);

    pub const TIME_WITH_TIMEZONE: SqlTypeCode = SqlTypeCode(2013);

    pub const TIMESTAMP_WITH_TIMEZONE: SqlTypeCode = SqlTypeCode(2014);
}
