//! # arshowcase
//!
//! Model library, source resolution and viewer lifecycle for web AR model
//! showcases.
//!
//! This is the umbrella crate that provides convenient access to all
//! arshowcase functionality. You can use this crate to get everything in one
//! place, or use individual crates for more granular control over
//! dependencies.
//!
//! ## Features
//!
//! - **Core**: Model identity, the model library and revocable upload handles
//! - **I/O**: Source resolution, format detection and the gallery catalog
//! - **Visualization**: Viewer mode, viewer configuration and AR diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use arshowcase::prelude::*;
//!
//! let resolver = ModelSourceResolver::default();
//! let mut library = ModelLibrary::new();
//!
//! let resolved = resolver.resolve_address("https://example.com/model.glb").unwrap();
//! let id = library.add_from(resolved.url, &resolved.name, resolved.source);
//!
//! assert_eq!(library.active_id(), Some(id));
//! assert_eq!(ViewerMode::of(&library), ViewerMode::SingleViewer);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io and visualization
//! - `io`: Source resolution and the catalog
//! - `visualization`: Viewer lifecycle (implies `io`)
//! - `all`: Enables all features

// Re-export core functionality
pub use arshowcase_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use arshowcase_io as io;

#[cfg(feature = "visualization")]
pub use arshowcase_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use arshowcase_core::*;

    #[cfg(feature = "io")]
    pub use arshowcase_io::*;

    #[cfg(feature = "visualization")]
    pub use arshowcase_visualization::*;
}
