//! Viewer presentation mode
//!
//! The mode is a pure function of the library's current size and whether an
//! entry is active. History does not matter: a library shrinking back to one
//! entry goes back to [`ViewerMode::SingleViewer`].

use arshowcase_core::ModelLibrary;
use std::fmt;

/// What the user interface presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewerMode {
    /// Nothing bound to the viewer; the source picker is shown
    #[default]
    Empty,
    /// One model loaded, shown without the library panel
    SingleViewer,
    /// Several models loaded, shown with a selectable library list
    LibraryViewer,
}

impl ViewerMode {
    /// Classify from library size and active selection
    pub fn classify(len: usize, has_active: bool) -> Self {
        if !has_active {
            return ViewerMode::Empty;
        }
        match len {
            0 => ViewerMode::Empty,
            1 => ViewerMode::SingleViewer,
            _ => ViewerMode::LibraryViewer,
        }
    }

    pub fn of(library: &ModelLibrary) -> Self {
        Self::classify(library.len(), library.active_id().is_some())
    }

    /// Whether the model viewer is on screen
    pub fn shows_viewer(&self) -> bool {
        !matches!(self, ViewerMode::Empty)
    }

    /// Whether the list of loaded models is on screen
    pub fn shows_library(&self) -> bool {
        matches!(self, ViewerMode::LibraryViewer)
    }
}

impl fmt::Display for ViewerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViewerMode::Empty => "empty",
            ViewerMode::SingleViewer => "single-viewer",
            ViewerMode::LibraryViewer => "library-viewer",
        };
        f.write_str(label)
    }
}

/// A change of presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: ViewerMode,
    pub to: ViewerMode,
}

/// Tracks the mode and reports transitions after library mutations
#[derive(Debug, Default)]
pub struct ViewerModeController {
    mode: ViewerMode,
}

impl ViewerModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewerMode {
        self.mode
    }

    /// Re-derive the mode from `library`
    pub fn sync(&mut self, library: &ModelLibrary) -> Option<ModeTransition> {
        let next = ViewerMode::of(library);
        if next == self.mode {
            return None;
        }
        let transition = ModeTransition { from: self.mode, to: next };
        log::debug!("viewer mode: {} -> {}", transition.from, transition.to);
        self.mode = next;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arshowcase_core::ModelUrl;

    #[test]
    fn test_classification() {
        assert_eq!(ViewerMode::classify(0, false), ViewerMode::Empty);
        assert_eq!(ViewerMode::classify(1, true), ViewerMode::SingleViewer);
        assert_eq!(ViewerMode::classify(2, true), ViewerMode::LibraryViewer);
        assert_eq!(ViewerMode::classify(7, true), ViewerMode::LibraryViewer);
        assert_eq!(ViewerMode::classify(3, false), ViewerMode::Empty);
    }

    #[test]
    fn test_controller_follows_size() {
        let mut library = ModelLibrary::new();
        let mut controller = ViewerModeController::new();
        assert_eq!(controller.mode(), ViewerMode::Empty);

        let a = library.add(ModelUrl::remote("https://example.com/a.glb"), "a.glb");
        let t = controller.sync(&library).unwrap();
        assert_eq!((t.from, t.to), (ViewerMode::Empty, ViewerMode::SingleViewer));

        library.add(ModelUrl::remote("https://example.com/b.glb"), "b.glb");
        assert_eq!(controller.sync(&library).unwrap().to, ViewerMode::LibraryViewer);
        assert!(controller.sync(&library).is_none());

        library.remove(a);
        assert_eq!(controller.sync(&library).unwrap().to, ViewerMode::SingleViewer);

        library.deselect();
        assert_eq!(controller.sync(&library).unwrap().to, ViewerMode::Empty);
    }

    #[test]
    fn test_presentation_flags() {
        assert!(!ViewerMode::Empty.shows_viewer());
        assert!(ViewerMode::SingleViewer.shows_viewer());
        assert!(!ViewerMode::SingleViewer.shows_library());
        assert!(ViewerMode::LibraryViewer.shows_library());
    }
}
