use crate::error::{Error, Result};
use crate::runtime_type::RuntimeType;
use crate::value::Value;

/// The driver type name used for `Int` lists unless configured otherwise.
pub const DEFAULT_INT_ARRAY_TYPE: &str = "BIGINT";

/// Maps the element type of a runtime list to the driver's array element type name.
///
/// The mapping is closed: only element types listed here can be bound as arrays.
/// Currently that is `Int` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTypeMap {
    int_type_name: Box<str>,
}

impl Default for ArrayTypeMap {
    fn default() -> Self {
        Self {
            int_type_name: DEFAULT_INT_ARRAY_TYPE.into(),
        }
    }
}

impl ArrayTypeMap {
    /// Overrides the driver type name used for `Int` lists, e.g. `int8` for PostgreSQL.
    pub fn with_int_type_name(mut self, name: impl Into<Box<str>>) -> Self {
        self.int_type_name = name.into();
        self
    }

    /// The driver type name for an element type, if arrays of it are supported.
    pub fn type_name(&self, element: RuntimeType) -> Option<&str> {
        match element {
            RuntimeType::Int => Some(&self.int_type_name),
            _ => None,
        }
    }

    /// Determines the driver type name for the elements of `items`.
    ///
    /// Null elements are ignored. A list that is empty or holds only nulls is
    /// typed as `Int`. Lists that mix element types are rejected with the first
    /// element type that disagrees.
    pub fn type_name_for(&self, items: &[Value]) -> Result<&str> {
        let mut element = None;

        for ty in items.iter().filter_map(Value::runtime_type) {
            match element {
                None => element = Some(ty),
                Some(first) if first == ty => {}
                Some(_) => return Err(Error::UnsupportedArrayElement { element: ty }),
            }
        }

        let element = element.unwrap_or(RuntimeType::Int);

        self.type_name(element)
            .ok_or(Error::UnsupportedArrayElement { element })
    }
}
