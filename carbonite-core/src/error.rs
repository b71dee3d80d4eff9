use std::borrow::Cow;
use std::error::Error as StdError;
use std::result::Result as StdResult;

use crate::runtime_type::RuntimeType;
use crate::type_code::SqlTypeCode;

/// A specialized `Result` type for carbonite.
pub type Result<T> = StdResult<T, Error>;

// Convenience type alias for usage within carbonite.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways a conversion can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error returned from the database driver.
    ///
    /// The driver's message is kept verbatim and the driver error itself is
    /// available through [`source`](StdError::source).
    #[error("error returned from driver: {message}")]
    Driver {
        message: String,

        code: Option<String>,

        #[source]
        source: BoxDynError,
    },

    /// A list was bound as a parameter but its elements have no driver array type.
    #[error("unsupported array element type: {element}")]
    UnsupportedArrayElement { element: RuntimeType },

    /// The driver produced a value whose native shape cannot be converted for this column type.
    #[error("unsupported {sql_type} type '{shape}'")]
    UnsupportedNativeShape {
        sql_type: SqlTypeCode,
        shape: String,
    },

    /// A native value had the expected shape but could not be decoded.
    #[error("error occurred while decoding: {0}")]
    Decode(#[source] BoxDynError),

    /// Column index was out of bounds.
    #[error("column index out of bounds: the len is {len}, but the index is {index}")]
    ColumnIndexOutOfBounds { index: usize, len: usize },

    /// No column found for the given name.
    #[error("no column found for name: {0}")]
    ColumnNotFound(String),

    /// Error occurred while reading configuration.
    #[error("error reading configuration: {0}")]
    Configuration(#[source] BoxDynError),
}

impl Error {
    /// Returns the driver's diagnostic message if this error came from the driver.
    pub fn driver_message(&self) -> Option<&str> {
        match self {
            Error::Driver { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the driver's error code (e.g. SQLSTATE), if it reported one.
    pub fn driver_code(&self) -> Option<&str> {
        match self {
            Error::Driver { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn decode(err: impl Into<BoxDynError>) -> Self {
        Error::Decode(err.into())
    }

    #[inline]
    pub(crate) fn config(err: impl Into<BoxDynError>) -> Self {
        Error::Configuration(err.into())
    }
}

/// An error that was returned from the database driver.
pub trait DriverError: 'static + Send + Sync + StdError {
    /// The primary, human-readable error message.
    fn message(&self) -> &str;

    /// The (SQLSTATE) code for the error.
    fn code(&self) -> Option<Cow<'_, str>> {
        None
    }
}

impl<E> From<E> for Error
where
    E: DriverError,
{
    #[inline]
    fn from(error: E) -> Self {
        Error::Driver {
            message: error.message().to_owned(),
            code: error.code().map(Cow::into_owned),
            source: Box::new(error),
        }
    }
}
