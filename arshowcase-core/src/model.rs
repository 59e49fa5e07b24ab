//! Model identity records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::handle::LocalHandle;

/// Unique identifier of a library entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModelId(u64);

impl ModelId {
    /// Wrap a raw id value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw id value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the model bytes live
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelUrl {
    /// Uploaded file held in a [`crate::HandleStore`]
    Local(LocalHandle),
    /// Remote address, opaque to the core
    Remote(String),
}

impl ModelUrl {
    /// Create a remote url
    pub fn remote(address: impl Into<String>) -> Self {
        ModelUrl::Remote(address.into())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ModelUrl::Local(_))
    }

    /// The local handle, if this url owns one
    pub fn local_handle(&self) -> Option<&LocalHandle> {
        match self {
            ModelUrl::Local(handle) => Some(handle),
            ModelUrl::Remote(_) => None,
        }
    }

    /// Address string handed to the external viewer
    pub fn address(&self) -> String {
        match self {
            ModelUrl::Local(handle) => handle.address(),
            ModelUrl::Remote(address) => address.clone(),
        }
    }
}

impl fmt::Display for ModelUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelUrl::Local(handle) => write!(f, "{}", handle),
            ModelUrl::Remote(address) => f.write_str(address),
        }
    }
}

/// How a model entered the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    File,
    Address,
    Catalog,
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModelSource::File => "file",
            ModelSource::Address => "address",
            ModelSource::Catalog => "catalog",
        };
        f.write_str(label)
    }
}

/// A loaded model's identity record
///
/// Entries are immutable once inserted; the library only ever adds or
/// removes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEntry {
    pub id: ModelId,
    pub url: ModelUrl,
    pub name: String,
    pub source: ModelSource,
    pub created_at: DateTime<Utc>,
}

impl ModelEntry {
    pub fn is_local(&self) -> bool {
        self.url.is_local()
    }
}
