//! Advisory AR capability detection
//!
//! The probe classifies the client from whatever signals the host can
//! gather. Its output only drives hints shown to the user; whether AR
//! actually starts is decided by the viewer component. Inconclusive signals
//! yield `Unknown` rather than a guess.

use std::fmt;

/// Raw signals gathered by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSignals {
    pub user_agent: String,
    /// What the viewer reported for its AR activation path, if it answered
    pub can_activate_ar: Option<bool>,
    /// Result of an `immersive-ar` WebXR session support query, if made
    pub webxr_immersive_ar: Option<bool>,
}

impl ClientSignals {
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFamily {
    Ios,
    Android,
    Desktop,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFamily {
    Safari,
    Chrome,
    Firefox,
    Edge,
    Other,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArAvailability {
    Likely,
    Unlikely,
    Unknown,
}

/// Advice for the user derived from the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// iOS AR Quick Look only works from Safari
    UseSafari,
    /// Quick Look is disabled in Safari's settings
    EnableQuickLook,
    /// Android AR needs an ARCore-capable browser
    UseArCoreBrowser,
}

impl Hint {
    pub fn message(&self) -> &'static str {
        match self {
            Hint::UseSafari => "iOS AR requires Safari. Copy the URL and open it in the Safari app.",
            Hint::EnableQuickLook => {
                "AR Quick Look is disabled. Enable it in Settings > Safari > Advanced, then reload."
            }
            Hint::UseArCoreBrowser => "AR needs Chrome on an ARCore-supported Android device.",
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one probe run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityReport {
    pub device: DeviceFamily,
    pub browser: BrowserFamily,
    pub ar: ArAvailability,
    pub hints: Vec<Hint>,
}

impl CapabilityReport {
    pub fn is_ios(&self) -> bool {
        self.device == DeviceFamily::Ios
    }

    pub fn is_ios_safari(&self) -> bool {
        self.is_ios() && self.browser == BrowserFamily::Safari
    }
}

/// Classifies client signals
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityProbe;

impl CapabilityProbe {
    pub fn new() -> Self {
        Self
    }

    pub fn probe(&self, signals: &ClientSignals) -> CapabilityReport {
        let ua = signals.user_agent.trim();
        let device = classify_device(ua);
        let browser = classify_browser(ua, device);

        let ar = match (signals.can_activate_ar, signals.webxr_immersive_ar) {
            (Some(true), _) | (None, Some(true)) => ArAvailability::Likely,
            (Some(false), _) | (None, Some(false)) => ArAvailability::Unlikely,
            (None, None) if device == DeviceFamily::Ios && browser != BrowserFamily::Safari => {
                ArAvailability::Unlikely
            }
            (None, None) => ArAvailability::Unknown,
        };

        let mut hints = Vec::new();
        match device {
            DeviceFamily::Ios if browser != BrowserFamily::Safari => hints.push(Hint::UseSafari),
            DeviceFamily::Ios if ar == ArAvailability::Unlikely => hints.push(Hint::EnableQuickLook),
            DeviceFamily::Android if ar == ArAvailability::Unlikely => hints.push(Hint::UseArCoreBrowser),
            _ => {}
        }

        let report = CapabilityReport { device, browser, ar, hints };
        log::debug!("capability probe: {:?}", report);
        report
    }
}

fn classify_device(ua: &str) -> DeviceFamily {
    if ua.is_empty() {
        DeviceFamily::Unknown
    } else if ["iPad", "iPhone", "iPod"].iter().any(|m| ua.contains(m)) {
        DeviceFamily::Ios
    } else if ua.contains("Android") {
        DeviceFamily::Android
    } else {
        DeviceFamily::Desktop
    }
}

fn classify_browser(ua: &str, device: DeviceFamily) -> BrowserFamily {
    match device {
        DeviceFamily::Unknown => BrowserFamily::Unknown,
        // every iOS browser runs WebKit; only the UA token tells them apart
        DeviceFamily::Ios => {
            if ua.contains("CriOS") {
                BrowserFamily::Chrome
            } else if ua.contains("FxiOS") {
                BrowserFamily::Firefox
            } else if ua.contains("EdgiOS") {
                BrowserFamily::Edge
            } else {
                BrowserFamily::Safari
            }
        }
        DeviceFamily::Android | DeviceFamily::Desktop => {
            if ua.contains("Edg/") {
                BrowserFamily::Edge
            } else if ua.contains("Firefox/") {
                BrowserFamily::Firefox
            } else if ua.contains("Chrome/") {
                BrowserFamily::Chrome
            } else if ua.contains("Safari/") {
                BrowserFamily::Safari
            } else {
                BrowserFamily::Other
            }
        }
    }
}
