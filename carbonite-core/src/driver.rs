//! The interface consumed from the underlying database driver.
//!
//! Carbonite does not talk to a database itself. A driver adapter implements
//! [`ResultSet`] for its positioned cursor and [`Connection`] for its live
//! connection; every call may block on the driver's I/O.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};

use crate::error::DriverError;
use crate::native::{NativeArray, NativeValue, Timestamp};
use crate::type_code::SqlTypeCode;

/// A result set positioned on a row.
///
/// Columns are addressed by 0-based index. The primitive accessors
/// (`get_bool`, `get_long`, `get_double`) follow the usual driver contract of
/// returning a zero value for SQL `NULL`; [`was_null`](ResultSet::was_null)
/// reports whether the most recent read hit a `NULL`.
///
/// Implementations are not expected to be safe for concurrent advancement;
/// `&mut self` serializes access.
pub trait ResultSet {
    type Error: DriverError;

    fn column_count(&self) -> Result<usize, Self::Error>;

    fn column_name(&self, col: usize) -> Result<String, Self::Error>;

    /// The SQL type code the driver reports for a column.
    fn column_type(&self, col: usize) -> Result<SqlTypeCode, Self::Error>;

    /// Returns `true` if the last column read was SQL `NULL`.
    fn was_null(&self) -> bool;

    fn get_string(&mut self, col: usize) -> Result<Option<String>, Self::Error>;

    fn get_bool(&mut self, col: usize) -> Result<bool, Self::Error>;

    fn get_long(&mut self, col: usize) -> Result<i64, Self::Error>;

    fn get_double(&mut self, col: usize) -> Result<f64, Self::Error>;

    fn get_decimal(&mut self, col: usize) -> Result<Option<BigDecimal>, Self::Error>;

    fn get_bytes(&mut self, col: usize) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Reads a column as whatever native object the driver chooses for it.
    fn get_object(&mut self, col: usize) -> Result<NativeValue, Self::Error>;

    fn get_timestamp(&mut self, col: usize) -> Result<Option<Timestamp>, Self::Error>;

    fn get_date(&mut self, col: usize) -> Result<Option<NaiveDate>, Self::Error>;

    fn get_time(&mut self, col: usize) -> Result<Option<NaiveTime>, Self::Error>;

    fn get_array(&mut self, col: usize) -> Result<Option<NativeArray>, Self::Error>;
}

/// A live connection, needed to build driver-specific parameter values.
pub trait Connection {
    type Error: DriverError;

    /// Creates a typed SQL array whose elements have the driver type `type_name`.
    fn create_array_of(
        &mut self,
        type_name: &str,
        elements: Vec<NativeValue>,
    ) -> Result<NativeArray, Self::Error>;
}
