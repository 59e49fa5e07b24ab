//! Revocable in-memory handles for uploaded model files
//!
//! An uploaded file is copied into a [`HandleStore`] and referenced through a
//! [`LocalHandle`]. The store owns the bytes until the handle is released;
//! releasing is idempotent so that cleanup paths never have to track whether
//! a handle was already revoked.

use std::collections::HashMap;
use std::fmt;

/// Scheme prefix used when a local handle is rendered as an address
pub const LOCAL_SCHEME: &str = "blob:arshowcase/";

/// Reference to bytes held by a [`HandleStore`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalHandle {
    id: u64,
    mime: &'static str,
}

impl LocalHandle {
    /// Numeric identity of the handle within its store
    pub fn id(&self) -> u64 {
        self.id
    }

    /// MIME type the bytes were registered with
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Address the external viewer is pointed at
    pub fn address(&self) -> String {
        format!("{}{}", LOCAL_SCHEME, self.id)
    }
}

impl fmt::Display for LocalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LOCAL_SCHEME, self.id)
    }
}

/// Owner of the byte buffers behind local handles
#[derive(Debug, Default)]
pub struct HandleStore {
    next_id: u64,
    buffers: HashMap<u64, Vec<u8>>,
    released: u64,
}

impl HandleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `bytes` and hand out a fresh handle
    pub fn register(&mut self, bytes: Vec<u8>, mime: &'static str) -> LocalHandle {
        self.next_id += 1;
        let id = self.next_id;
        log::debug!("registered local handle {} ({} bytes, {})", id, bytes.len(), mime);
        self.buffers.insert(id, bytes);
        LocalHandle { id, mime }
    }

    /// Release the bytes behind `handle`
    ///
    /// Returns `true` if the handle was live. Releasing an already released
    /// handle is a no-op and returns `false`.
    pub fn release(&mut self, handle: &LocalHandle) -> bool {
        match self.buffers.remove(&handle.id) {
            Some(bytes) => {
                self.released += 1;
                log::debug!("released local handle {} ({} bytes)", handle.id, bytes.len());
                true
            }
            None => false,
        }
    }

    /// Whether the handle still refers to live bytes
    pub fn is_live(&self, handle: &LocalHandle) -> bool {
        self.buffers.contains_key(&handle.id)
    }

    /// Borrow the bytes behind a live handle
    pub fn bytes(&self, handle: &LocalHandle) -> Option<&[u8]> {
        self.buffers.get(&handle.id).map(Vec::as_slice)
    }

    /// Number of live handles
    pub fn live_count(&self) -> usize {
        self.buffers.len()
    }

    /// Total number of successful releases over the store's lifetime
    pub fn release_count(&self) -> u64 {
        self.released
    }
}
