use std::sync::Arc;

use crate::convert::ColumnConverter;
use crate::driver::ResultSet;
use crate::error::{Error, Result};
use crate::logger::LogSettings;
use crate::runtime_type::RuntimeType;
use crate::table::ConversionTable;
use crate::type_code::SqlTypeCode;
use crate::value::Value;

/// A column of a result set, with the converter bound to its type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub(crate) ordinal: usize,
    pub(crate) name: String,
    pub(crate) type_code: SqlTypeCode,
    pub(crate) converter: ColumnConverter,
}

impl Column {
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_code(&self) -> SqlTypeCode {
        self.type_code
    }

    pub fn converter(&self) -> ColumnConverter {
        self.converter
    }

    /// The runtime type of the column's values, if the type code has one.
    pub fn runtime_type(&self) -> Option<RuntimeType> {
        self.converter.runtime_type()
    }
}

/// One converted row; the column list is shared by every row of the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[Column]>,
    values: Vec<Value>,
}

impl Row {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// The value at column `index`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values
            .get(index)
            .ok_or(Error::ColumnIndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    /// The value of the first column named `name`.
    pub fn try_get(&self, name: &str) -> Result<&Value> {
        let index = self
            .columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_owned()))?;

        self.get(index)
    }
}

/// Reads rows of one result set with converters acquired once per column.
#[derive(Debug, Clone)]
pub struct RowReader {
    columns: Arc<[Column]>,
    log: LogSettings,
}

impl RowReader {
    pub(crate) fn describe<R>(table: &ConversionTable, rs: &R) -> Result<Self>
    where
        R: ResultSet + ?Sized,
    {
        let count = rs.column_count()?;
        let mut columns = Vec::with_capacity(count);

        for ordinal in 0..count {
            columns.push(Column {
                ordinal,
                name: rs.column_name(ordinal)?,
                type_code: rs.column_type(ordinal)?,
                converter: table.converter(rs, ordinal)?,
            });
        }

        Ok(Self {
            columns: columns.into(),
            log: *table.log_settings(),
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Converts every column of the row `rs` is positioned on.
    pub fn read<R>(&self, rs: &mut R) -> Result<Row>
    where
        R: ResultSet + ?Sized,
    {
        let values = self
            .columns
            .iter()
            .map(|column| {
                column
                    .converter
                    .convert(rs, column.ordinal)
                    .inspect_err(|e| self.log.conversion_failed(column.ordinal, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Row {
            columns: Arc::clone(&self.columns),
            values,
        })
    }
}
