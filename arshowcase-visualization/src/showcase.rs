//! Model-loading and viewer lifecycle
//!
//! [`Showcase`] wires the resolver, the library, the mode controller and the
//! external viewer together. Every operation runs to completion on the
//! caller's thread; viewer notifications are fed back in through
//! [`Showcase::handle`] tagged with the ticket of the attempt they belong to.
//!
//! "Load a different model" deselects: the library keeps its entries and the
//! viewer returns to [`ViewerMode::Empty`] until a model is loaded or
//! selected again.

use std::rc::Rc;

use chrono::Utc;

use arshowcase_core::{Error, ModelEntry, ModelId, ModelLibrary, ModelUrl, Result, ShowcaseConfig};
use arshowcase_io::{Catalog, CatalogItem, ModelSourceResolver, Resolved, SourceInput};

use crate::diagnostics::DiagnosticLog;
use crate::environment::EnvironmentPreset;
use crate::events::{ArStatus, LoadPhase, LoadTicket, ViewerBinding, ViewerHost, ViewerNotification};
use crate::mode::{ModeTransition, ViewerMode, ViewerModeController};
use crate::probe::{CapabilityProbe, CapabilityReport, ClientSignals};
use crate::viewer::ViewerConfig;

const RAW_GITHUB: &str = "https://raw.githubusercontent.com";

/// Application core driving one external viewer
pub struct Showcase<H: ViewerHost> {
    config: ShowcaseConfig,
    resolver: ModelSourceResolver,
    catalog: Catalog,
    library: ModelLibrary,
    controller: ViewerModeController,
    host: Rc<H>,
    binding: Option<ViewerBinding<H>>,
    bound_model: Option<ModelId>,
    next_ticket: u64,
    viewer: ViewerConfig,
    probe: CapabilityProbe,
    signals: ClientSignals,
    capabilities: Option<CapabilityReport>,
    diagnostics: DiagnosticLog,
    notice: Option<Error>,
    in_ar: bool,
}

impl<H: ViewerHost> Showcase<H> {
    /// Build a showcase around an injected catalog and viewer host
    pub fn new(config: ShowcaseConfig, catalog: Catalog, host: Rc<H>) -> Result<Self> {
        config.validate()?;
        let environment = EnvironmentPreset::find(&config.default_environment).ok_or_else(|| {
            Error::Config(format!("unknown environment preset '{}'", config.default_environment))
        })?;

        let library = ModelLibrary::with_policy(config.reassign_policy)
            .with_default_name(config.default_model_name.clone());

        Ok(Self {
            resolver: ModelSourceResolver::new(&config),
            diagnostics: DiagnosticLog::new(config.diagnostic_capacity),
            config,
            catalog,
            library,
            controller: ViewerModeController::new(),
            host,
            binding: None,
            bound_model: None,
            next_ticket: 0,
            viewer: ViewerConfig::new(environment),
            probe: CapabilityProbe::new(),
            signals: ClientSignals::default(),
            capabilities: None,
            notice: None,
            in_ar: false,
        })
    }

    /// Replace the client signals used by the next probe run
    pub fn set_client_signals(&mut self, signals: ClientSignals) {
        self.signals = signals;
    }

    /// Resolve `input`, add it to the library and bind it to the viewer
    ///
    /// Source errors are reported and returned without touching the library.
    pub fn load(&mut self, input: SourceInput) -> Result<ModelId> {
        let resolved = match self.resolver.resolve(input, &mut self.library) {
            Ok(resolved) => resolved,
            Err(err) => {
                self.diagnostics.error(err.to_string());
                return Err(err);
            }
        };
        Ok(self.insert(resolved))
    }

    /// Load a gallery item
    pub fn load_catalog_item(&mut self, item: &CatalogItem) -> ModelId {
        let resolved = self.resolver.resolve_catalog(item);
        self.insert(resolved)
    }

    /// Load the built-in sample model
    pub fn load_sample(&mut self) -> ModelId {
        let resolved = self.resolver.sample();
        self.insert(resolved)
    }

    fn insert(&mut self, resolved: Resolved) -> ModelId {
        let warning = resolved.size_warning(self.resolver.limits());
        let id = self.library.add_from(resolved.url, &resolved.name, resolved.source);
        self.sync();

        if let Some(warning) = warning {
            self.diagnostics.warning(warning);
        }
        self.run_probe();
        id
    }

    /// Bind the entry with `id` to the viewer
    pub fn select(&mut self, id: ModelId) -> Result<()> {
        self.library.select_active(id)?;
        self.sync();
        Ok(())
    }

    /// Remove an entry; removing an absent id is a no-op
    pub fn remove(&mut self, id: ModelId) -> Option<ModelEntry> {
        let removed = self.library.remove(id);
        if removed.is_some() {
            self.sync();
        }
        removed
    }

    /// Return to the source picker, keeping every loaded model
    pub fn load_different_model(&mut self) {
        self.library.deselect();
        self.sync();
    }

    /// Feed a viewer notification back in
    ///
    /// Returns `false` when the notification was discarded because it
    /// belongs to an abandoned attempt or arrived out of order. Expired
    /// informational diagnostics are dropped first.
    pub fn handle(&mut self, ticket: LoadTicket, notification: ViewerNotification) -> bool {
        self.diagnostics.expire(Utc::now());
        let Some(binding) = self.binding.as_mut() else {
            log::trace!("discarding {:?}: no model bound", notification);
            return false;
        };
        if binding.ticket() != ticket {
            log::trace!(
                "discarding {:?} for stale ticket {} (current {})",
                notification,
                ticket.generation(),
                binding.ticket().generation()
            );
            return false;
        }
        let before = binding.phase();
        if !binding.advance(&notification) {
            log::trace!("discarding out-of-order {:?}", notification);
            return false;
        }

        match notification {
            ViewerNotification::Progress(_) => {
                if let (LoadPhase::Loading { fraction: old }, LoadPhase::Loading { fraction: new }) =
                    (before, binding.phase())
                {
                    let (old, new) = (percent(old), percent(new));
                    if new != old && new % 25 == 0 && new > 0 && new < 100 {
                        self.diagnostics.info(format!("Loading: {}%", new));
                    }
                }
            }
            ViewerNotification::Loaded { has_animations } => {
                self.notice = None;
                self.diagnostics.success("Model loaded successfully");
                let animations = if has_animations { "Yes" } else { "None" };
                self.diagnostics.info(format!("Animations: {}", animations));
                // scale and rotation only take effect once a model is present
                self.host.configure(&self.viewer);
            }
            ViewerNotification::Error { kind, detail } => self.on_load_error(kind, detail),
            ViewerNotification::ArStatus(status) => self.on_ar_status(status),
        }
        true
    }

    fn on_load_error(&mut self, kind: String, detail: String) {
        let remote = self.library.active().and_then(|e| match &e.url {
            ModelUrl::Remote(address) => Some(address.clone()),
            ModelUrl::Local(_) => None,
        });
        let local = self.library.active().map(ModelEntry::is_local).unwrap_or(false);
        let ios = self.capabilities.as_ref().map(CapabilityReport::is_ios).unwrap_or(false);
        let ios_safari = self
            .capabilities
            .as_ref()
            .map(CapabilityReport::is_ios_safari)
            .unwrap_or(false);

        let err = Error::LoadFailed { kind, detail };
        self.diagnostics.error(err.to_string());

        if let Error::LoadFailed { kind, .. } = &err {
            if kind == "loadfailed" {
                self.diagnostics.warning("File format issue or corruption");
                if local {
                    self.diagnostics.warning("Uploaded file may be corrupted. Re-upload or use a different file");
                }
                if ios && remote.as_deref().is_some_and(|a| a.starts_with("http")) {
                    self.diagnostics.warning("iOS: external URL may be blocked. Upload the file from the device");
                }
            }
        }
        if let Some(address) = remote.as_deref() {
            if address.starts_with("http") && !address.starts_with(RAW_GITHUB) {
                self.diagnostics.warning("External URL might need CORS");
            }
        }
        if ios_safari {
            self.diagnostics.warning("iOS Safari: try uploading from the Files app");
        } else if ios {
            self.diagnostics.warning("Safari is required for AR on iOS");
        }
        self.diagnostics.info("Try uploading a GLB file from your device");
        self.notice = Some(err);
    }

    fn on_ar_status(&mut self, status: ArStatus) {
        match status {
            ArStatus::SessionStarted => {
                self.in_ar = true;
                self.diagnostics.success("AR session started");
            }
            ArStatus::NotPresenting => {
                self.in_ar = false;
                self.diagnostics.info("AR session ended");
            }
            ArStatus::Failed => {
                self.in_ar = false;
                let err = Error::ArActivationFailed(
                    "model may be too large or incompatible".to_string(),
                );
                self.diagnostics.error(err.to_string());
                if self.capabilities.as_ref().is_some_and(CapabilityReport::is_ios) {
                    self.diagnostics.warning(format!(
                        "iOS: try a smaller model (< {}MB)",
                        self.config.size_limits.caution_mib
                    ));
                }
                self.notice = Some(err);
            }
        }
    }

    /// Re-derive the mode and rebind the viewer if the active model changed
    fn sync(&mut self) -> Option<ModeTransition> {
        let active = self.library.active().map(|e| (e.id, e.url.address()));
        let active_id = active.as_ref().map(|(id, _)| *id);

        if active_id != self.bound_model {
            // dropping the old binding unsubscribes it before the new one exists
            self.binding = None;
            self.in_ar = false;
            self.notice = None;
            self.diagnostics.clear();
            self.bound_model = active_id;
            self.viewer.src = active.map(|(_, address)| address);
            self.host.configure(&self.viewer);

            if active_id.is_some() {
                self.next_ticket += 1;
                let ticket = LoadTicket::new(self.next_ticket);
                self.binding = Some(ViewerBinding::acquire(self.host.clone(), ticket));
                self.diagnostics.info("Starting to load model...");
            }
        }

        self.controller.sync(&self.library)
    }

    fn run_probe(&mut self) {
        let report = self.probe.probe(&self.signals);
        for hint in &report.hints {
            self.diagnostics.warning(hint.message());
        }
        self.capabilities = Some(report);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.viewer.set_scale(scale);
        self.push_view_if_loaded();
    }

    pub fn set_rotation_y(&mut self, degrees: f32) {
        self.viewer.set_rotation_y(degrees);
        self.push_view_if_loaded();
    }

    pub fn reset_view(&mut self) {
        self.viewer.reset_view();
        self.push_view_if_loaded();
    }

    pub fn set_camera_controls(&mut self, enabled: bool) {
        self.viewer.camera_controls = enabled;
        self.host.configure(&self.viewer);
    }

    /// Apply a built-in environment preset by name
    pub fn set_environment(&mut self, name: &str) -> Result<()> {
        let preset = EnvironmentPreset::find(name)
            .ok_or_else(|| Error::Config(format!("unknown environment preset '{}'", name)))?;
        self.viewer.set_environment(preset);
        self.host.configure(&self.viewer);
        Ok(())
    }

    fn push_view_if_loaded(&self) {
        if self.is_loaded() {
            self.host.configure(&self.viewer);
        }
    }

    pub fn mode(&self) -> ViewerMode {
        self.controller.mode()
    }

    pub fn library(&self) -> &ModelLibrary {
        &self.library
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn viewer_config(&self) -> &ViewerConfig {
        &self.viewer
    }

    /// Ticket of the attempt currently bound to the viewer
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.binding.as_ref().map(ViewerBinding::ticket)
    }

    pub fn load_phase(&self) -> Option<LoadPhase> {
        self.binding.as_ref().map(ViewerBinding::phase)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.load_phase(), Some(LoadPhase::Loaded { .. }))
    }

    pub fn is_in_ar(&self) -> bool {
        self.in_ar
    }

    /// Latest probe result, refreshed on every model load
    pub fn capabilities(&self) -> Option<&CapabilityReport> {
        self.capabilities.as_ref()
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticLog {
        &mut self.diagnostics
    }

    /// Viewer error waiting to be dismissed
    pub fn notice(&self) -> Option<&Error> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

fn percent(fraction: f32) -> u32 {
    (fraction * 100.0).round() as u32
}

impl<H: ViewerHost> std::fmt::Debug for Showcase<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Showcase")
            .field("mode", &self.mode())
            .field("models", &self.library.len())
            .field("active", &self.library.active_id())
            .field("binding", &self.binding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Severity, INFO_TTL_SECS};
    use crate::events::SubscriptionId;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingHost {
        next: Cell<u64>,
        live: RefCell<Vec<SubscriptionId>>,
        configured: RefCell<Vec<Option<String>>>,
    }

    impl ViewerHost for RecordingHost {
        fn configure(&self, config: &ViewerConfig) {
            self.configured.borrow_mut().push(config.src.clone());
        }

        fn subscribe(&self) -> SubscriptionId {
            self.next.set(self.next.get() + 1);
            let id = SubscriptionId(self.next.get());
            self.live.borrow_mut().push(id);
            id
        }

        fn unsubscribe(&self, subscription: SubscriptionId) {
            self.live.borrow_mut().retain(|s| *s != subscription);
        }
    }

    fn showcase() -> (Showcase<RecordingHost>, Rc<RecordingHost>) {
        let host = Rc::new(RecordingHost::default());
        let showcase = Showcase::new(ShowcaseConfig::default(), Catalog::builtin(), host.clone()).unwrap();
        (showcase, host)
    }

    fn address(name: &str) -> SourceInput {
        SourceInput::Address(format!("https://example.com/{}", name))
    }

    #[test]
    fn test_progress_diagnostics_at_quarters() {
        let (mut showcase, _host) = showcase();
        showcase.load(address("a.glb")).unwrap();
        let ticket = showcase.current_ticket().unwrap();

        showcase.handle(ticket, ViewerNotification::Progress(0.1));
        showcase.handle(ticket, ViewerNotification::Progress(0.25));
        showcase.handle(ticket, ViewerNotification::Progress(0.5));
        assert!(showcase.diagnostics().contains("Loading: 25%"));
        assert!(showcase.diagnostics().contains("Loading: 50%"));
        assert!(!showcase.diagnostics().contains("Loading: 10%"));
    }

    #[test]
    fn test_expired_info_dropped_on_notification() {
        let (mut showcase, _host) = showcase();
        showcase.load(address("a.glb")).unwrap();
        let stale = Utc::now() - chrono::Duration::seconds(INFO_TTL_SECS + 1);
        showcase.diagnostics_mut().push_at(Severity::Info, "old info", stale);
        showcase.diagnostics_mut().push_at(Severity::Warning, "old warning", stale);

        let ticket = showcase.current_ticket().unwrap();
        showcase.handle(ticket, ViewerNotification::Progress(0.1));
        assert!(!showcase.diagnostics().contains("old info"));
        assert!(showcase.diagnostics().contains("old warning"));
    }

    #[test]
    fn test_scale_pushed_only_after_load() {
        let (mut showcase, host) = showcase();
        showcase.load(address("a.glb")).unwrap();
        let pushes = host.configured.borrow().len();

        showcase.set_scale(2.0);
        assert_eq!(host.configured.borrow().len(), pushes);

        let ticket = showcase.current_ticket().unwrap();
        showcase.handle(ticket, ViewerNotification::Loaded { has_animations: false });
        let pushes = host.configured.borrow().len();
        showcase.set_scale(3.0);
        assert_eq!(host.configured.borrow().len(), pushes + 1);
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let (mut showcase, _host) = showcase();
        assert!(matches!(showcase.set_environment("Underwater"), Err(Error::Config(_))));
        showcase.set_environment("sunset").unwrap();
        assert_eq!(showcase.viewer_config().environment.name, "Sunset");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ShowcaseConfig::default();
        config.default_environment = "Nowhere".to_string();
        let host = Rc::new(RecordingHost::default());
        assert!(Showcase::new(config, Catalog::default(), host).is_err());
    }
}
