//! Model sources for arshowcase
//!
//! This crate turns user actions into model sources the library can hold:
//! format detection by extension, upload size guidance, address validation,
//! the curated gallery catalog and the resolver tying them together.

pub mod address;
pub mod catalog;
pub mod format;
pub mod resolver;
pub mod size;

pub use address::Address;
pub use catalog::{Attribution, Catalog, CatalogCategory, CatalogItem};
pub use format::ModelFormat;
pub use resolver::{ModelSourceResolver, Resolved, SourceInput, SAMPLE_MODEL_ADDRESS};
pub use size::{SizeBand, SizeReport};
