//! Core of carbonite: SQL type codes, runtime values and the conversion table.
//!
//! Not intended to be used directly; see the `carbonite` crate.
#![warn(future_incompatible, rust_2018_idioms)]
#![allow(clippy::needless_doctest_main, clippy::type_complexity)]

pub mod array;
pub mod config;
pub mod convert;
pub mod driver;
pub mod error;
pub mod logger;
pub mod native;
pub mod row;
pub mod runtime_type;
pub mod table;
pub mod type_code;
pub mod value;

pub use array::ArrayTypeMap;
pub use config::Config;
pub use convert::ColumnConverter;
pub use driver::{Connection, ResultSet};
pub use error::{BoxDynError, DriverError, Error, Result};
pub use logger::LogSettings;
pub use native::{NativeArray, NativeValue, Timestamp};
pub use row::{Column, Row, RowReader};
pub use runtime_type::{sql_to_runtime_type, RuntimeType};
pub use table::ConversionTable;
pub use type_code::SqlTypeCode;
pub use value::Value;

/// Converts a runtime value into a driver parameter using the shared [`ConversionTable`].
pub fn to_native<C>(value: &Value, conn: &mut C) -> Result<NativeValue>
where
    C: Connection + ?Sized,
{
    ConversionTable::shared().to_native(value, conn)
}

/// Converts column `col` of the current row using the shared [`ConversionTable`].
pub fn to_value<R>(rs: &mut R, col: usize) -> Result<Value>
where
    R: ResultSet + ?Sized,
{
    ConversionTable::shared().to_value(rs, col)
}

/// Acquires the converter for column `col` using the shared [`ConversionTable`].
pub fn converter<R>(rs: &R, col: usize) -> Result<ColumnConverter>
where
    R: ResultSet + ?Sized,
{
    ConversionTable::shared().converter(rs, col)
}
