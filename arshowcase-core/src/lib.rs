//! Core data structures for arshowcase
//!
//! This crate provides the model identity records, the ordered model library
//! with its active-entry tracking, revocable handles for uploaded files and
//! the runtime configuration shared by the other crates.

pub mod config;
pub mod error;
pub mod handle;
pub mod library;
pub mod model;

pub use config::*;
pub use error::*;
pub use handle::*;
pub use library::*;
pub use model::*;
