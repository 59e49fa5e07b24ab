//! Upload size guidance
//!
//! Sizes are classified for the user's benefit only. No band ever rejects a
//! load.

use arshowcase_core::SizeLimits;
use std::fmt;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Guidance band for an upload size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeBand {
    /// Small enough for mobile AR viewers
    Comfortable,
    /// Loads, but may cause issues on some devices
    Cautionary,
    /// Loads, but AR will likely fail on mobile devices
    Blocking,
}

/// Measured size of an upload with its band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub bytes: u64,
    pub band: SizeBand,
}

impl SizeReport {
    /// Classify `bytes` against `limits`
    pub fn classify(bytes: u64, limits: &SizeLimits) -> Self {
        let mib = bytes as f64 / BYTES_PER_MIB;
        let band = if mib > limits.blocking_mib {
            SizeBand::Blocking
        } else if mib > limits.caution_mib {
            SizeBand::Cautionary
        } else {
            SizeBand::Comfortable
        };
        Self { bytes, band }
    }

    pub fn mebibytes(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MIB
    }

    /// Warning text for the user, if the band calls for one
    pub fn warning(&self, limits: &SizeLimits) -> Option<String> {
        match self.band {
            SizeBand::Comfortable => None,
            SizeBand::Cautionary => Some(format!(
                "File size {:.1}MB may cause issues on some devices",
                self.mebibytes()
            )),
            SizeBand::Blocking => Some(format!(
                "Large file ({:.1}MB). AR may not work on mobile devices. Recommended: < {}MB",
                self.mebibytes(),
                limits.caution_mib
            )),
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}MB", self.mebibytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_bands() {
        let limits = SizeLimits::default();
        assert_eq!(SizeReport::classify(0, &limits).band, SizeBand::Comfortable);
        assert_eq!(SizeReport::classify(10 * MIB, &limits).band, SizeBand::Comfortable);
        assert_eq!(SizeReport::classify(10 * MIB + 1, &limits).band, SizeBand::Cautionary);
        assert_eq!(SizeReport::classify(50 * MIB, &limits).band, SizeBand::Cautionary);
        assert_eq!(SizeReport::classify(50 * MIB + 1, &limits).band, SizeBand::Blocking);
    }

    #[test]
    fn test_custom_limits() {
        let limits = SizeLimits { caution_mib: 1.0, blocking_mib: 2.0 };
        assert_eq!(SizeReport::classify(3 * MIB, &limits).band, SizeBand::Blocking);
    }

    #[test]
    fn test_warnings() {
        let limits = SizeLimits::default();
        assert!(SizeReport::classify(MIB, &limits).warning(&limits).is_none());

        let caution = SizeReport::classify(12 * MIB, &limits);
        assert_relative_eq!(caution.mebibytes(), 12.0);
        assert!(caution.warning(&limits).unwrap().contains("12.0MB"));

        let blocking = SizeReport::classify(60 * MIB, &limits);
        assert!(blocking.warning(&limits).unwrap().contains("AR may not work"));
    }
}
