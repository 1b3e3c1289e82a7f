//! Path-addressed access to a front matter mapping
//!
//! All three operations walk the path one mapping at a time and cost
//! O(path length). A path that runs through a non-mapping value is "not
//! found" for reads and deletes. For writes, such a value is replaced by an
//! empty mapping so the new key can be stored under it.
//!
//! Deleting the last key of a nested mapping leaves the empty mapping in
//! place; nothing is pruned.

use super::key_path::KeyPath;
use super::value::{Mapping, Value};
use crate::error::{FrontmatterError, Result};
use log::debug;

/// The decoded front matter of a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    map: Mapping,
}

impl FrontMatter {
    /// Create an empty front matter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mapping(map: Mapping) -> Self {
        Self { map }
    }

    /// Decode front matter text
    ///
    /// Blank text and a YAML null document both give an empty mapping. Any
    /// other top-level node that is not a mapping is an error.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        let decoded: serde_yaml::Value = serde_yaml::from_str(text)?;
        match Value::from_yaml(decoded)? {
            Value::Null => Ok(Self::new()),
            Value::Mapping(map) => Ok(Self { map }),
            other => Err(FrontmatterError::invalid_front_matter(format!(
                "expected a mapping at the top level, found {}",
                type_name(&other)
            ))),
        }
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.map
    }

    pub fn into_mapping(self) -> Mapping {
        self.map
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up the value at `path`
    ///
    /// The root path is not a value and always returns `None`; use
    /// [`FrontMatter::as_mapping`] for the whole tree.
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = &self.map;
        for segment in parents {
            current = current.get(segment)?.as_mapping()?;
        }
        current.get(last)
    }

    /// Store `value` at `path`, creating intermediate mappings as needed
    ///
    /// An intermediate key holding anything other than a mapping is
    /// overwritten with a new mapping and its old value is lost.
    pub fn set(&mut self, path: &KeyPath, value: Value) -> Result<()> {
        let (last, parents) = path
            .split_last()
            .ok_or_else(|| FrontmatterError::invalid_key_path(path.to_string(), "key is empty"))?;

        let mut current = &mut self.map;
        for segment in parents {
            let slot = current.get_or_insert_with(segment, Value::mapping);
            if !slot.is_mapping() {
                debug!("replacing non-mapping value at '{}' while setting '{}'", segment, path);
            }
            current = slot.make_mapping();
        }
        current.insert(last, value);
        Ok(())
    }

    /// Remove the value at `path`, returning whether it existed
    pub fn remove(&mut self, path: &KeyPath) -> bool {
        let Some((last, parents)) = path.split_last() else {
            return false;
        };

        let mut current = &mut self.map;
        for segment in parents {
            match current.get_mut(segment) {
                Some(Value::Mapping(child)) => current = child,
                _ => return false,
            }
        }
        current.remove(last).is_some()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Int(_) | Value::UInt(_) => "an integer",
        Value::Float(_) => "a float",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
    }
}
