//! Lighting environment presets

const ENVIRONMENTS: &str = "https://modelviewer.dev/shared-assets/environments";

/// Shading environment handed to the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentPreset {
    /// Label shown in the picker
    pub name: String,
    /// Built-in lighting the viewer should use (`neutral` or `legacy`)
    pub image: String,
    /// Exposure multiplier
    pub exposure: f32,
    /// Background image address, if any
    pub skybox: Option<String>,
}

impl EnvironmentPreset {
    pub fn new(name: &str, image: &str, exposure: f32, skybox: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            exposure,
            skybox: skybox.map(str::to_string),
        }
    }

    /// Plain neutral lighting with no background
    pub fn blank() -> Self {
        Self::new("Blank", "neutral", 1.0, None)
    }

    /// The presets offered in the environment picker
    pub fn builtin() -> Vec<EnvironmentPreset> {
        let hdr = |file: &str| format!("{}/{}", ENVIRONMENTS, file);
        vec![
            Self::blank(),
            Self::new("Outdoor", "legacy", 1.2, Some(&hdr("aircraft_workshop_01_1k.hdr"))),
            Self::new("Sunset", "neutral", 0.9, Some(&hdr("spruit_sunrise_1k_HDR.hdr"))),
            Self::new("Night", "legacy", 0.6, Some(&hdr("moon_1k.hdr"))),
            Self::new("Studio", "neutral", 1.1, Some(&hdr("pillars_1k.hdr"))),
        ]
    }

    /// Find a built-in preset by name, case-insensitively
    pub fn find(name: &str) -> Option<EnvironmentPreset> {
        Self::builtin()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for EnvironmentPreset {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_presets() {
        let presets = EnvironmentPreset::builtin();
        assert_eq!(presets.len(), 5);
        assert!(presets[0].skybox.is_none());

        let night = EnvironmentPreset::find("night").unwrap();
        assert_eq!(night.image, "legacy");
        assert_relative_eq!(night.exposure, 0.6);
        assert_eq!(
            night.skybox.as_deref(),
            Some("https://modelviewer.dev/shared-assets/environments/moon_1k.hdr")
        );

        assert!(EnvironmentPreset::find("Underwater").is_none());
    }
}
