//! Ordered collection of loaded models
//!
//! The library owns every entry and the [`HandleStore`] behind uploaded
//! files. It keeps insertion order, tracks at most one active entry and
//! releases a local handle once the last entry referencing it is removed.

use chrono::Utc;

use crate::config::ReassignPolicy;
use crate::handle::HandleStore;
use crate::model::{ModelEntry, ModelId, ModelSource, ModelUrl};
use crate::{Error, Result};

/// Ordered, mutable collection of loaded models
#[derive(Debug)]
pub struct ModelLibrary {
    entries: Vec<ModelEntry>,
    active: Option<ModelId>,
    next_id: u64,
    policy: ReassignPolicy,
    default_name: String,
    handles: HandleStore,
}

impl ModelLibrary {
    /// Create an empty library with the default reassign policy
    pub fn new() -> Self {
        Self::with_policy(ReassignPolicy::default())
    }

    /// Create an empty library using `policy` when the active entry is removed
    pub fn with_policy(policy: ReassignPolicy) -> Self {
        Self {
            entries: Vec::new(),
            active: None,
            next_id: 0,
            policy,
            default_name: "Untitled model".to_string(),
            handles: HandleStore::new(),
        }
    }

    /// Override the label given to entries added without a name
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Append a new entry, make it active and return its id
    ///
    /// Provenance is inferred from the url: local handles come from file
    /// uploads, everything else from an address.
    pub fn add(&mut self, url: ModelUrl, name: &str) -> ModelId {
        let source = if url.is_local() { ModelSource::File } else { ModelSource::Address };
        self.add_from(url, name, source)
    }

    /// Append a new entry with explicit provenance
    pub fn add_from(&mut self, url: ModelUrl, name: &str, source: ModelSource) -> ModelId {
        self.next_id += 1;
        let id = ModelId::new(self.next_id);
        let name = match name.trim() {
            "" => self.default_name.clone(),
            trimmed => trimmed.to_string(),
        };

        log::info!("library: added {} '{}' from {} ({})", id, name, source, url);
        self.entries.push(ModelEntry {
            id,
            url,
            name,
            source,
            created_at: Utc::now(),
        });
        self.active = Some(id);
        id
    }

    /// Make the entry with `id` the active one
    pub fn select_active(&mut self, id: ModelId) -> Result<()> {
        if !self.contains(id) {
            return Err(Error::NotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Clear the active entry without removing anything
    pub fn deselect(&mut self) {
        self.active = None;
    }

    /// Remove the entry with `id`
    ///
    /// Returns the removed entry, or `None` if no such entry exists (which
    /// makes repeated removal a no-op). A local handle owned by the entry is
    /// released unless another surviving entry still references it.
    pub fn remove(&mut self, id: ModelId) -> Option<ModelEntry> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);

        if let Some(handle) = entry.url.local_handle() {
            let shared = self.entries.iter().any(|e| e.url.local_handle() == Some(handle));
            if !shared {
                self.handles.release(handle);
            }
        }

        if self.active == Some(id) {
            self.active = self.successor(index).map(|e| e.id);
            log::debug!("library: active entry {} removed, now {:?}", id, self.active);
        }
        log::info!("library: removed {} '{}'", id, entry.name);
        Some(entry)
    }

    /// Remove every entry and release every local handle
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            if let Some(handle) = entry.url.local_handle() {
                self.handles.release(handle);
            }
        }
        self.active = None;
    }

    /// Read-only view of the entries in insertion order
    pub fn list(&self) -> &[ModelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ModelId) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn active_id(&self) -> Option<ModelId> {
        self.active
    }

    /// The entry currently bound to the viewer
    pub fn active(&self) -> Option<&ModelEntry> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn policy(&self) -> ReassignPolicy {
        self.policy
    }

    /// Store holding the bytes of uploaded files
    pub fn handles(&self) -> &HandleStore {
        &self.handles
    }

    /// Mutable store access, used when registering freshly uploaded bytes
    ///
    /// Handles added to this library must come from this store; `remove` and
    /// `clear` only release from it.
    pub fn handles_mut(&mut self) -> &mut HandleStore {
        &mut self.handles
    }

    fn index_of(&self, id: ModelId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Entry that takes over after removing the one at `removed_index`
    fn successor(&self, removed_index: usize) -> Option<&ModelEntry> {
        match self.policy {
            ReassignPolicy::First => self.entries.first(),
            ReassignPolicy::Last => self.entries.last(),
            ReassignPolicy::Previous => {
                if removed_index == 0 {
                    self.entries.first()
                } else {
                    self.entries.get(removed_index - 1)
                }
            }
        }
    }
}

impl Default for ModelLibrary {
    fn default() -> Self {
        Self::new()
    }
}
