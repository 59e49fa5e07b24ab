//! Configuration pushed to the external AR viewer component

use crate::camera::CameraDefaults;
use crate::environment::EnvironmentPreset;

/// Smallest accepted uniform scale
pub const MIN_SCALE: f32 = 0.1;
/// Largest accepted uniform scale
pub const MAX_SCALE: f32 = 5.0;

/// AR activation paths, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArMode {
    WebXr,
    SceneViewer,
    QuickLook,
}

impl ArMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArMode::WebXr => "webxr",
            ArMode::SceneViewer => "scene-viewer",
            ArMode::QuickLook => "quick-look",
        }
    }
}

/// Surfaces a model may be placed on in AR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArPlacement {
    Floor,
    Wall,
}

impl ArPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArPlacement::Floor => "floor",
            ArPlacement::Wall => "wall",
        }
    }
}

/// Everything the external viewer is configured with
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Address of the active model, `None` when nothing is bound
    pub src: Option<String>,
    pub ar_modes: Vec<ArMode>,
    pub ar_placement: Vec<ArPlacement>,
    pub camera_controls: bool,
    pub auto_rotate: bool,
    pub camera: CameraDefaults,
    pub shadow_intensity: f32,
    pub environment: EnvironmentPreset,
    scale: f32,
    rotation_y: f32,
}

impl ViewerConfig {
    pub fn new(environment: EnvironmentPreset) -> Self {
        Self {
            src: None,
            ar_modes: vec![ArMode::WebXr, ArMode::SceneViewer, ArMode::QuickLook],
            ar_placement: vec![ArPlacement::Floor, ArPlacement::Wall],
            camera_controls: true,
            auto_rotate: true,
            camera: CameraDefaults::default(),
            shadow_intensity: 1.0,
            environment,
            scale: 1.0,
            rotation_y: 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the uniform scale, clamped to [`MIN_SCALE`, `MAX_SCALE`]
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_nan() {
            return;
        }
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Rotation around the vertical axis in degrees, within [0, 360)
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Set the vertical-axis rotation; any finite angle is wrapped into [0, 360)
    pub fn set_rotation_y(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        self.rotation_y = if wrapped >= 360.0 { 0.0 } else { wrapped };
    }

    /// Restore scale and rotation to their defaults
    pub fn reset_view(&mut self) {
        self.scale = 1.0;
        self.rotation_y = 0.0;
    }

    pub fn set_environment(&mut self, environment: EnvironmentPreset) {
        self.environment = environment;
    }

    /// Render the configuration as ordered attribute pairs for the component
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(src) = &self.src {
            attrs.push(("src", src.clone()));
        }
        attrs.push(("ar", String::new()));
        attrs.push((
            "ar-modes",
            self.ar_modes.iter().map(ArMode::as_str).collect::<Vec<_>>().join(" "),
        ));
        attrs.push((
            "ar-placement",
            self.ar_placement.iter().map(ArPlacement::as_str).collect::<Vec<_>>().join(" "),
        ));
        attrs.push(("ar-scale", "auto".to_string()));
        if self.camera_controls {
            attrs.push(("camera-controls", String::new()));
        }
        if self.auto_rotate {
            attrs.push(("auto-rotate", String::new()));
        }
        attrs.push(("camera-orbit", self.camera.orbit.to_string()));
        attrs.push(("min-camera-orbit", self.camera.min_orbit.to_string()));
        attrs.push(("max-camera-orbit", self.camera.max_orbit.to_string()));
        attrs.push(("interpolation-decay", self.camera.interpolation_decay.to_string()));
        attrs.push(("shadow-intensity", self.shadow_intensity.to_string()));
        attrs.push(("exposure", self.environment.exposure.to_string()));
        attrs.push(("environment-image", self.environment.image.clone()));
        if let Some(skybox) = &self.environment.skybox {
            attrs.push(("skybox-image", skybox.clone()));
        }
        attrs.push(("scale", format!("{s} {s} {s}", s = self.scale)));
        attrs.push(("orientation", format!("0deg {}deg 0deg", self.rotation_y)));
        attrs
    }

    /// Look up a single rendered attribute
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(EnvironmentPreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_is_clamped() {
        let mut config = ViewerConfig::default();
        config.set_scale(10.0);
        assert_relative_eq!(config.scale(), MAX_SCALE);
        config.set_scale(0.0);
        assert_relative_eq!(config.scale(), MIN_SCALE);
        config.set_scale(2.5);
        assert_relative_eq!(config.scale(), 2.5);
        config.set_scale(f32::NAN);
        assert_relative_eq!(config.scale(), 2.5);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut config = ViewerConfig::default();
        config.set_rotation_y(370.0);
        assert_relative_eq!(config.rotation_y(), 10.0);
        config.set_rotation_y(-90.0);
        assert_relative_eq!(config.rotation_y(), 270.0);
        config.set_rotation_y(360.0);
        assert_relative_eq!(config.rotation_y(), 0.0);
        config.set_rotation_y(f32::INFINITY);
        assert_relative_eq!(config.rotation_y(), 0.0);
    }

    #[test]
    fn test_reset_view() {
        let mut config = ViewerConfig::default();
        config.set_scale(3.0);
        config.set_rotation_y(45.0);
        config.reset_view();
        assert_relative_eq!(config.scale(), 1.0);
        assert_relative_eq!(config.rotation_y(), 0.0);
    }

    #[test]
    fn test_attributes() {
        let mut config = ViewerConfig::default();
        assert!(config.attribute("src").is_none());

        config.src = Some("https://example.com/a.glb".to_string());
        config.set_scale(2.0);
        config.set_rotation_y(90.0);

        assert_eq!(config.attribute("src").as_deref(), Some("https://example.com/a.glb"));
        assert_eq!(config.attribute("ar-modes").as_deref(), Some("webxr scene-viewer quick-look"));
        assert_eq!(config.attribute("ar-placement").as_deref(), Some("floor wall"));
        assert_eq!(config.attribute("camera-orbit").as_deref(), Some("0deg 75deg 105%"));
        assert_eq!(config.attribute("scale").as_deref(), Some("2 2 2"));
        assert_eq!(config.attribute("orientation").as_deref(), Some("0deg 90deg 0deg"));
        assert!(config.attribute("skybox-image").is_none());

        config.camera_controls = false;
        assert!(config.attribute("camera-controls").is_none());
    }

    #[test]
    fn test_environment_attributes() {
        let mut config = ViewerConfig::default();
        config.set_environment(EnvironmentPreset::find("Studio").unwrap());
        assert_eq!(config.attribute("exposure").as_deref(), Some("1.1"));
        assert_eq!(config.attribute("environment-image").as_deref(), Some("neutral"));
        assert!(config.attribute("skybox-image").unwrap().ends_with("pillars_1k.hdr"));
    }
}
