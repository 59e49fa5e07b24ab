//! Viewer lifecycle for arshowcase
//!
//! This crate drives an external AR viewer component:
//! - Presentation mode derived from the model library
//! - Viewer configuration (scale, rotation, environment, camera)
//! - Scoped subscription to viewer notifications
//! - Advisory AR capability diagnostics
//! - The [`Showcase`] orchestrator tying it all together

pub mod camera;
pub mod diagnostics;
pub mod environment;
pub mod events;
pub mod mode;
pub mod probe;
pub mod showcase;
pub mod viewer;

pub use camera::*;
pub use diagnostics::*;
pub use environment::*;
pub use events::*;
pub use mode::*;
pub use probe::*;
pub use showcase::*;
pub use viewer::*;
