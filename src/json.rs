//! Structured documents: reading and writing JSON trees, and the
//! `JsonSerializable` capability for types that convert themselves to and
//! from such a tree.
//!
//! Every failure to parse or produce a document is reported as a
//! [`JsonError`] carrying a single human-readable message.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A generic tree-shaped document: objects, arrays and scalars.
pub type Json = serde_json::Value;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct JsonError {
    message: String,
}

impl JsonError {
    pub fn new(message: impl Into<String>) -> Self {
        JsonError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        JsonError::new(e.to_string())
    }
}

impl From<io::Error> for JsonError {
    fn from(e: io::Error) -> Self {
        JsonError::new(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JsonError>;

/// A type that can produce a document describing itself and restore itself
/// from one.
pub trait JsonSerializable {
    fn serialize(&self) -> Json;

    /// Restores `self` from `json`. Documents that do not have the expected
    /// shape are reported as errors.
    fn deserialize(&mut self, json: &Json) -> Result<()>;
}

/// Parses a document from `input`.
pub fn read<R: Read>(input: R) -> Result<Json> {
    serde_json::from_reader(input).map_err(|e| {
        debug!("failed to parse json document: {}", e);
        JsonError::from(e)
    })
}

/// Parses the document stored at `path`.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Json> {
    let file = File::open(path.as_ref())?;
    read(BufReader::new(file))
}

/// Writes `json` to `output` and flushes it.
pub fn write<W: Write>(mut output: W, json: &Json) -> Result<()> {
    serde_json::to_writer(&mut output, json)?;
    output.flush()?;
    Ok(())
}

/// Writes `json` to `path`, creating or truncating the file.
pub fn write_path<P: AsRef<Path>>(path: P, json: &Json) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write(BufWriter::new(file), json)
}

pub fn extract<S: JsonSerializable + ?Sized>(value: &S) -> Json {
    value.serialize()
}

pub fn inject<S: JsonSerializable + ?Sized>(value: &mut S, json: &Json) -> Result<()> {
    value.deserialize(json)
}

/// Reads a document from `input` and restores `value` from it.
pub fn read_into<R: Read, S: JsonSerializable + ?Sized>(input: R, value: &mut S) -> Result<()> {
    value.deserialize(&read(input)?)
}

pub fn read_path_into<P: AsRef<Path>, S: JsonSerializable + ?Sized>(
    path: P,
    value: &mut S,
) -> Result<()> {
    value.deserialize(&read_path(path)?)
}

/// Serializes `value` and writes the document to `output`.
pub fn write_from<W: Write, S: JsonSerializable + ?Sized>(output: W, value: &S) -> Result<()> {
    write(output, &value.serialize())
}

pub fn write_path_from<P: AsRef<Path>, S: JsonSerializable + ?Sized>(
    path: P,
    value: &S,
) -> Result<()> {
    write_path(path, &value.serialize())
}

/// Returns `true` if `json` is an object with a member called `name`.
pub fn has(json: &Json, name: &str) -> bool {
    json.get(name).is_some()
}

/// Returns member `name` converted to `T`, or `default` if it is absent.
///
/// A member that is present but does not convert to `T` is an error.
pub fn opt<T: DeserializeOwned>(json: &Json, name: &str, default: T) -> Result<T> {
    match json.get(name) {
        None => Ok(default),
        Some(value) => Ok(T::deserialize(value)?),
    }
}

/// Stores member `name` converted to `T` into `dst` and returns `true`, or
/// leaves `dst` alone and returns `false` if it is absent.
pub fn opt_into<T: DeserializeOwned>(json: &Json, name: &str, dst: &mut T) -> Result<bool> {
    match json.get(name) {
        None => Ok(false),
        Some(value) => {
            *dst = T::deserialize(value)?;
            Ok(true)
        }
    }
}
