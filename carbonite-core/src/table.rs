use std::sync::OnceLock;

use chrono::Timelike;

use crate::array::ArrayTypeMap;
use crate::config::Config;
use crate::convert::ColumnConverter;
use crate::driver::{Connection, ResultSet};
use crate::error::Result;
use crate::logger::{LogSettings, TARGET};
use crate::native::{NativeValue, Timestamp};
use crate::row::RowReader;
use crate::value::Value;

/// Converts runtime values to driver parameters and result columns to runtime values.
///
/// The table itself is immutable; build one at startup from a [`Config`] and
/// share it, or use the free functions which use the default table.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    arrays: ArrayTypeMap,
    log: LogSettings,
}

impl ConversionTable {
    pub fn new(config: &Config) -> Self {
        let mut arrays = ArrayTypeMap::default();
        if let Some(name) = &config.arrays.int_type_name {
            arrays = arrays.with_int_type_name(name.clone());
        }

        let mut log = LogSettings::default();
        if let Some(level) = config.log.converter_level {
            log.log_converters(level);
        }
        if let Some(level) = config.log.failure_level {
            log.log_failures(level);
        }

        Self { arrays, log }
    }

    /// The table used by the crate-level conversion functions.
    pub fn shared() -> &'static ConversionTable {
        static SHARED: OnceLock<ConversionTable> = OnceLock::new();
        SHARED.get_or_init(ConversionTable::default)
    }

    pub fn array_types(&self) -> &ArrayTypeMap {
        &self.arrays
    }

    pub fn log_settings(&self) -> &LogSettings {
        &self.log
    }

    /// Converts a runtime value into the representation the driver binds as a parameter.
    ///
    /// `conn` is only used to create SQL arrays for [`Value::List`].
    pub fn to_native<C>(&self, value: &Value, conn: &mut C) -> Result<NativeValue>
    where
        C: Connection + ?Sized,
    {
        Ok(match value {
            Value::DateTime(dt) => {
                NativeValue::Timestamp(Timestamp::from_millis(dt.timestamp_millis()))
            }

            Value::Date(d) => NativeValue::Date(*d),

            // drivers bind TIME to the second
            Value::Time(t) => NativeValue::Time(t.with_nanosecond(0).unwrap_or(*t)),

            Value::Buf(buf) => NativeValue::Bytes(buf.clone()),

            Value::List(items) => {
                let type_name = self.arrays.type_name_for(items)?;
                let elements = items
                    .iter()
                    .map(|item| self.to_native(item, conn))
                    .collect::<Result<Vec<_>>>()?;

                tracing::debug!(target: TARGET, type_name, len = elements.len(), "creating array");

                NativeValue::Array(conn.create_array_of(type_name, elements)?)
            }

            // already in a shape the driver binds directly
            Value::Null => NativeValue::Null,
            Value::Str(s) => NativeValue::Str(s.clone()),
            Value::Bool(b) => NativeValue::Bool(*b),
            Value::Int(i) => NativeValue::Long(*i),
            Value::Float(f) => NativeValue::Double(*f),
            Value::Decimal(d) => NativeValue::Decimal(d.clone()),
        })
    }

    /// Converts a parameter list, stopping at the first value that fails.
    pub fn to_native_params<C>(&self, values: &[Value], conn: &mut C) -> Result<Vec<NativeValue>>
    where
        C: Connection + ?Sized,
    {
        values.iter().map(|value| self.to_native(value, conn)).collect()
    }

    /// Acquires the converter for column `col`, to be reused for every row.
    pub fn converter<R>(&self, rs: &R, col: usize) -> Result<ColumnConverter>
    where
        R: ResultSet + ?Sized,
    {
        let code = rs.column_type(col)?;
        let converter = ColumnConverter::for_type(code);

        self.log.converter_acquired(col, code, converter);

        Ok(converter)
    }

    /// Converts column `col` of the current row directly.
    pub fn to_value<R>(&self, rs: &mut R, col: usize) -> Result<Value>
    where
        R: ResultSet + ?Sized,
    {
        let code = rs.column_type(col)?;

        ColumnConverter::for_type(code)
            .convert(rs, col)
            .inspect_err(|e| self.log.conversion_failed(col, e))
    }

    /// Describes the columns of `rs` and acquires one converter per column.
    pub fn describe<R>(&self, rs: &R) -> Result<RowReader>
    where
        R: ResultSet + ?Sized,
    {
        RowReader::describe(self, rs)
    }
}
