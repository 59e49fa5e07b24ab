//! Camera orbit defaults for the external viewer

use std::fmt;

/// One component of an orbit limit; `Auto` lets the viewer decide
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitValue {
    Auto,
    Degrees(f32),
    Percent(f32),
}

impl fmt::Display for OrbitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitValue::Auto => f.write_str("auto"),
            OrbitValue::Degrees(v) => write!(f, "{}deg", v),
            OrbitValue::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Spherical camera position around the model: azimuth, polar angle, radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    pub theta: OrbitValue,
    pub phi: OrbitValue,
    pub radius: OrbitValue,
}

impl CameraOrbit {
    pub fn new(theta: OrbitValue, phi: OrbitValue, radius: OrbitValue) -> Self {
        Self { theta, phi, radius }
    }
}

impl fmt::Display for CameraOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.theta, self.phi, self.radius)
    }
}

/// Initial orbit plus the zoom limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDefaults {
    pub orbit: CameraOrbit,
    pub min_orbit: CameraOrbit,
    pub max_orbit: CameraOrbit,
    /// Smoothing applied by the viewer when the camera moves, in milliseconds
    pub interpolation_decay: u32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            orbit: CameraOrbit::new(
                OrbitValue::Degrees(0.0),
                OrbitValue::Degrees(75.0),
                OrbitValue::Percent(105.0),
            ),
            min_orbit: CameraOrbit::new(OrbitValue::Auto, OrbitValue::Auto, OrbitValue::Percent(5.0)),
            max_orbit: CameraOrbit::new(OrbitValue::Auto, OrbitValue::Auto, OrbitValue::Percent(500.0)),
            interpolation_decay: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbit_strings() {
        let camera = CameraDefaults::default();
        assert_eq!(camera.orbit.to_string(), "0deg 75deg 105%");
        assert_eq!(camera.min_orbit.to_string(), "auto auto 5%");
        assert_eq!(camera.max_orbit.to_string(), "auto auto 500%");
    }
}
