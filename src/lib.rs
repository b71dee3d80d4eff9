#![cfg_attr(docsrs, feature(doc_cfg))]
//! Conversion between SQL column types and runtime values.
//!
//! Carbonite sits between application code and a blocking database driver:
//!
//! * **outbound**, [`to_native`] turns a runtime [`Value`] into the
//!   [`NativeValue`] a driver binds as a query parameter;
//! * **inbound**, [`to_value`] turns a result column into a [`Value`], and
//!   [`converter`] acquires a [`ColumnConverter`] to reuse for every row of
//!   that column;
//! * [`sql_to_runtime_type`] maps a [`SqlTypeCode`] to the [`RuntimeType`]
//!   that represents it, for schema reflection.
//!
//! The driver itself is supplied by implementing [`ResultSet`] and
//! [`Connection`].
//!
//! ```ignore
//! let table = carbonite::ConversionTable::new(&carbonite::Config::read_from_dir(".")?);
//! let reader = table.describe(&rs)?;
//!
//! while rs.next()? {
//!     let row = reader.read(&mut rs)?;
//!     println!("{:?}", row.try_get("name")?);
//! }
//! ```

// Modules
pub use carbonite_core::{array, config, convert, driver, error, native, row};

// Types
pub use carbonite_core::{
    ArrayTypeMap, BoxDynError, Column, ColumnConverter, Config, Connection, ConversionTable,
    DriverError, Error, LogSettings, NativeArray, NativeValue, Result, ResultSet, Row, RowReader,
    RuntimeType, SqlTypeCode, Timestamp, Value,
};

// Functions
pub use carbonite_core::{converter, sql_to_runtime_type, to_native, to_value};
