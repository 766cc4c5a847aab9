//! Typed attribute store.
//!
//! Attributes live at two scopes: the file itself (`is-live`,
//! `last-valid-sample`) and the sample dataset (everything else). Both
//! scopes deref to [`hdf5::Location`], so the store is a set of free
//! functions over a location handle passed per call; it holds no state.
//!
//! Writes use create-then-write semantics: the first write of a name
//! creates the attribute with its declared type, and every later write
//! only overwrites the value. Reads treat a missing or unreadable
//! attribute as a typed error rather than silently yielding a default,
//! since a zeroed `gain` or `sample-rate` would corrupt any downstream
//! analysis.

use hdf5::types::{FixedUnicode, H5Type};
use hdf5::Location;

use crate::{Error, Result};
use mearec_core::format::STRING_ATTR_CAPACITY;

/// Fixed-length UTF-8 type used for every string attribute.
pub type StringAttr = FixedUnicode<STRING_ATTR_CAPACITY>;

/// Writes a scalar attribute, creating it on first write.
///
/// # Errors
/// Returns [`Error::AttributeAccess`] if the attribute cannot be created
/// or written.
pub fn write_scalar<T: H5Type>(location: &Location, name: &str, value: &T) -> Result<()> {
    let attr = match location.attr(name) {
        Ok(attr) => attr,
        Err(_) => location
            .new_attr::<T>()
            .create(name)
            .map_err(|source| Error::AttributeAccess {
                name: name.to_string(),
                source,
            })?,
    };
    attr.write_scalar(value)
        .map_err(|source| Error::AttributeAccess {
            name: name.to_string(),
            source,
        })
}

/// Reads a scalar attribute.
///
/// # Errors
/// Returns [`Error::AttributeAccess`] if the attribute is missing or its
/// stored type cannot be read as `T`.
pub fn read_scalar<T: H5Type + Clone>(location: &Location, name: &str) -> Result<T> {
    let attr = location
        .attr(name)
        .map_err(|source| Error::AttributeAccess {
            name: name.to_string(),
            source,
        })?;
    attr.read_scalar::<T>()
        .map_err(|source| Error::AttributeAccess {
            name: name.to_string(),
            source,
        })
}

/// Writes a string attribute using the fixed-length string type.
///
/// # Errors
/// Returns [`Error::StringTooLong`] if `value` exceeds the declared
/// capacity (values are rejected, never truncated),
/// [`Error::StringContainsNul`] if it carries an interior NUL byte, or
/// [`Error::AttributeAccess`] on storage failure.
pub fn write_string(location: &Location, name: &str, value: &str) -> Result<()> {
    if value.len() > STRING_ATTR_CAPACITY {
        return Err(Error::StringTooLong {
            name: name.to_string(),
            capacity: STRING_ATTR_CAPACITY,
        });
    }
    let value: StringAttr = value.parse().map_err(|_| Error::StringContainsNul {
        name: name.to_string(),
    })?;
    write_scalar(location, name, &value)
}

/// Reads a string attribute.
///
/// # Errors
/// Returns [`Error::AttributeAccess`] if the attribute is missing or not
/// a string.
pub fn read_string(location: &Location, name: &str) -> Result<String> {
    let value: StringAttr = read_scalar(location, name)?;
    Ok(value.to_string())
}
