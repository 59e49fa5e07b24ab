//! Notifications from the external viewer and scoped interest in them
//!
//! A [`ViewerBinding`] represents interest in one load attempt. It subscribes
//! to the host when created and unsubscribes when dropped, so replacing or
//! discarding a binding always tears the registration down.

use std::rc::Rc;

/// Identifies one load attempt; newer attempts get larger tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Handle of a listener registration on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// State reported by the platform AR session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArStatus {
    SessionStarted,
    NotPresenting,
    Failed,
}

/// Events emitted by the external viewer
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerNotification {
    /// Fraction of the model fetched, 0.0 to 1.0
    Progress(f32),
    Loaded { has_animations: bool },
    Error { kind: String, detail: String },
    ArStatus(ArStatus),
}

/// The external viewer component
///
/// Implementations wrap whatever actually renders the model. The showcase
/// only configures it and registers interest in its notifications.
pub trait ViewerHost {
    /// Push a new configuration to the component
    fn configure(&self, config: &crate::viewer::ViewerConfig);

    /// Start forwarding notifications
    fn subscribe(&self) -> SubscriptionId;

    /// Stop forwarding notifications for `subscription`
    fn unsubscribe(&self, subscription: SubscriptionId);
}

/// Progress of the load attempt a binding tracks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadPhase {
    Loading { fraction: f32 },
    Loaded { has_animations: bool },
    Failed,
}

impl LoadPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadPhase::Loading { .. })
    }
}

/// Scoped registration of interest in one load attempt
pub struct ViewerBinding<H: ViewerHost + ?Sized> {
    host: Rc<H>,
    subscription: SubscriptionId,
    ticket: LoadTicket,
    phase: LoadPhase,
}

impl<H: ViewerHost + ?Sized> ViewerBinding<H> {
    /// Subscribe to `host` for the attempt identified by `ticket`
    pub fn acquire(host: Rc<H>, ticket: LoadTicket) -> Self {
        let subscription = host.subscribe();
        log::trace!("viewer binding {:?} acquired for ticket {}", subscription, ticket.generation());
        Self {
            host,
            subscription,
            ticket,
            phase: LoadPhase::Loading { fraction: 0.0 },
        }
    }

    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Check ordering and advance the load phase
    ///
    /// Returns `false` when the notification arrives out of order: progress
    /// or completion after the attempt already finished. AR status updates
    /// are always accepted.
    pub fn advance(&mut self, notification: &ViewerNotification) -> bool {
        match (notification, self.phase) {
            (ViewerNotification::ArStatus(_), _) => true,
            (_, phase) if phase.is_terminal() => false,
            (ViewerNotification::Progress(fraction), LoadPhase::Loading { fraction: current }) => {
                if fraction.is_nan() {
                    return false;
                }
                let fraction = (*fraction).clamp(0.0, 1.0).max(current);
                self.phase = LoadPhase::Loading { fraction };
                true
            }
            (ViewerNotification::Loaded { has_animations }, _) => {
                self.phase = LoadPhase::Loaded { has_animations: *has_animations };
                true
            }
            (ViewerNotification::Error { .. }, _) => {
                self.phase = LoadPhase::Failed;
                true
            }
            _ => false,
        }
    }
}

impl<H: ViewerHost + ?Sized> Drop for ViewerBinding<H> {
    fn drop(&mut self) {
        log::trace!("viewer binding {:?} released", self.subscription);
        self.host.unsubscribe(self.subscription);
    }
}

impl<H: ViewerHost + ?Sized> std::fmt::Debug for ViewerBinding<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerBinding")
            .field("subscription", &self.subscription)
            .field("ticket", &self.ticket)
            .field("phase", &self.phase)
            .finish()
    }
}
