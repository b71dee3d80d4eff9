use std::borrow::Cow;

use bigdecimal::BigDecimal;
use carbonite::{
    Connection, DriverError, NativeArray, NativeValue, ResultSet, SqlTypeCode, Timestamp,
};
use chrono::{NaiveDate, NaiveTime};

/// An error raised by the mock driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MockDriverError {
    pub message: String,
    pub code: Option<String>,
}

impl MockDriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl DriverError for MockDriverError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        self.code.as_deref().map(Cow::Borrowed)
    }
}

type MockResult<T> = Result<T, MockDriverError>;

#[derive(Debug, Clone)]
struct MockColumn {
    name: String,
    type_code: SqlTypeCode,
}

/// An in-memory result set with the read semantics of a JDBC driver.
///
/// Primitive reads of a SQL `NULL` return a zero value and set
/// [`was_null`](ResultSet::was_null); every read resets it.
#[derive(Debug, Clone, Default)]
pub struct MockResultSet {
    columns: Vec<MockColumn>,
    rows: Vec<Vec<NativeValue>>,
    position: Option<usize>,
    was_null: bool,
    reads: usize,
}

impl MockResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A result set with a single column named `value`, positioned on its only row.
    pub fn single(type_code: SqlTypeCode, value: NativeValue) -> Self {
        let mut rs = Self::new().column("value", type_code).row(vec![value]);
        rs.next();
        rs
    }

    pub fn column(mut self, name: impl Into<String>, type_code: SqlTypeCode) -> Self {
        self.columns.push(MockColumn {
            name: name.into(),
            type_code,
        });
        self
    }

    pub fn row(mut self, values: Vec<NativeValue>) -> Self {
        assert_eq!(
            values.len(),
            self.columns.len(),
            "row width does not match the column count"
        );
        self.rows.push(values);
        self
    }

    /// Advances to the next row; returns `false` past the last one.
    pub fn next(&mut self) -> bool {
        let next = self.position.map_or(0, |p| p + 1);
        self.position = Some(next.min(self.rows.len()));
        next < self.rows.len()
    }

    /// The number of typed reads performed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    fn check_column(&self, col: usize) -> MockResult<&MockColumn> {
        self.columns
            .get(col)
            .ok_or_else(|| MockDriverError::new(format!("The column index is out of range: {col}")))
    }

    fn read(&mut self, col: usize) -> MockResult<NativeValue> {
        self.check_column(col)?;

        let value = self
            .position
            .and_then(|p| self.rows.get(p))
            .map(|row| row[col].clone())
            .ok_or_else(|| {
                MockDriverError::new("ResultSet not positioned properly, perhaps you need to call next.")
            })?;

        self.reads += 1;
        self.was_null = value.is_null();

        Ok(value)
    }
}

fn bad_value(value: &NativeValue, target: &str) -> MockDriverError {
    MockDriverError::new(format!("Bad value for type {target} : {value}")).with_code("22003")
}

impl ResultSet for MockResultSet {
    type Error = MockDriverError;

    fn column_count(&self) -> MockResult<usize> {
        Ok(self.columns.len())
    }

    fn column_name(&self, col: usize) -> MockResult<String> {
        Ok(self.check_column(col)?.name.clone())
    }

    fn column_type(&self, col: usize) -> MockResult<SqlTypeCode> {
        Ok(self.check_column(col)?.type_code)
    }

    fn was_null(&self) -> bool {
        self.was_null
    }

    fn get_string(&mut self, col: usize) -> MockResult<Option<String>> {
        Ok(match self.read(col)? {
            NativeValue::Null => None,
            NativeValue::Str(s) => Some(s),
            other => Some(other.to_string()),
        })
    }

    fn get_bool(&mut self, col: usize) -> MockResult<bool> {
        match self.read(col)? {
            NativeValue::Null => Ok(false),
            NativeValue::Bool(b) => Ok(b),
            NativeValue::Long(n) => Ok(n != 0),
            other => Err(bad_value(&other, "boolean")),
        }
    }

    fn get_long(&mut self, col: usize) -> MockResult<i64> {
        match self.read(col)? {
            NativeValue::Null => Ok(0),
            NativeValue::Long(n) => Ok(n),
            NativeValue::Bool(b) => Ok(i64::from(b)),
            NativeValue::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| bad_value(&NativeValue::Str(s.clone()), "long")),
            other => Err(bad_value(&other, "long")),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn get_double(&mut self, col: usize) -> MockResult<f64> {
        match self.read(col)? {
            NativeValue::Null => Ok(0.0),
            NativeValue::Double(n) => Ok(n),
            NativeValue::Long(n) => Ok(n as f64),
            other => Err(bad_value(&other, "double")),
        }
    }

    fn get_decimal(&mut self, col: usize) -> MockResult<Option<BigDecimal>> {
        match self.read(col)? {
            NativeValue::Null => Ok(None),
            NativeValue::Decimal(d) => Ok(Some(d)),
            NativeValue::Long(n) => Ok(Some(BigDecimal::from(n))),
            other => Err(bad_value(&other, "BigDecimal")),
        }
    }

    fn get_bytes(&mut self, col: usize) -> MockResult<Option<Vec<u8>>> {
        match self.read(col)? {
            NativeValue::Null => Ok(None),
            NativeValue::Bytes(b) => Ok(Some(b)),
            other => Err(bad_value(&other, "bytes")),
        }
    }

    fn get_object(&mut self, col: usize) -> MockResult<NativeValue> {
        self.read(col)
    }

    fn get_timestamp(&mut self, col: usize) -> MockResult<Option<Timestamp>> {
        match self.read(col)? {
            NativeValue::Null => Ok(None),
            NativeValue::Timestamp(ts) => Ok(Some(ts)),
            other => Err(bad_value(&other, "timestamp")),
        }
    }

    fn get_date(&mut self, col: usize) -> MockResult<Option<NaiveDate>> {
        match self.read(col)? {
            NativeValue::Null => Ok(None),
            NativeValue::Date(d) => Ok(Some(d)),
            other => Err(bad_value(&other, "date")),
        }
    }

    fn get_time(&mut self, col: usize) -> MockResult<Option<NaiveTime>> {
        match self.read(col)? {
            NativeValue::Null => Ok(None),
            NativeValue::Time(t) => Ok(Some(t)),
            other => Err(bad_value(&other, "time")),
        }
    }

    fn get_array(&mut self, col: usize) -> MockResult<Option<NativeArray>> {
        match self.read(col)? {
            NativeValue::Null => Ok(None),
            NativeValue::Array(a) => Ok(Some(a)),
            other => Err(bad_value(&other, "array")),
        }
    }
}

/// A connection that records the arrays it is asked to create.
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    known_array_types: Option<Vec<String>>,
    arrays: Vec<NativeArray>,
}

impl MockConnection {
    /// A connection that creates arrays of any element type.
    pub fn new() -> Self {
        Self::default()
    }

    /// A connection that only knows the given array element type names, like a
    /// server that resolves them against its catalog.
    pub fn with_array_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_array_types: Some(types.into_iter().map(Into::into).collect()),
            arrays: Vec::new(),
        }
    }

    /// Every array created through this connection, in order.
    pub fn arrays(&self) -> &[NativeArray] {
        &self.arrays
    }
}

impl Connection for MockConnection {
    type Error = MockDriverError;

    fn create_array_of(
        &mut self,
        type_name: &str,
        elements: Vec<NativeValue>,
    ) -> MockResult<NativeArray> {
        if let Some(known) = &self.known_array_types {
            if !known.iter().any(|t| t.eq_ignore_ascii_case(type_name)) {
                return Err(MockDriverError::new(format!(
                    "Unable to find server array type for provided name {type_name}."
                ))
                .with_code("42704"));
            }
        }

        let array = NativeArray::new(type_name, elements);
        self.arrays.push(array.clone());

        Ok(array)
    }
}
