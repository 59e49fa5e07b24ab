//! Model format detection
//!
//! Acceptance is decided by file extension alone. Header sniffing is only
//! used to warn when the extension and the content disagree.

use std::fmt;
use std::path::Path;

/// Magic bytes at the start of every binary glTF container
pub const GLB_MAGIC: &[u8; 4] = b"glTF";

/// Supported 3D model formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// Binary glTF container
    Glb,
    /// JSON glTF document
    Gltf,
}

impl ModelFormat {
    /// All supported formats
    pub const ALL: [ModelFormat; 2] = [ModelFormat::Glb, ModelFormat::Gltf];

    /// Detect the format from a file name, case-insensitively
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name.trim()).extension()?.to_str()?;
        Self::from_extension(extension)
    }

    /// Map an extension (without the dot) to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "glb" => Some(ModelFormat::Glb),
            "gltf" => Some(ModelFormat::Gltf),
            _ => None,
        }
    }

    /// Detect the format by examining the header bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(GLB_MAGIC) {
            return Some(ModelFormat::Glb);
        }
        let first = bytes.iter().find(|b| !b.is_ascii_whitespace())?;
        if *first == b'{' {
            Some(ModelFormat::Gltf)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ModelFormat::Glb => "glb",
            ModelFormat::Gltf => "gltf",
        }
    }

    /// MIME type the uploaded bytes are registered with
    pub fn mime_type(&self) -> &'static str {
        match self {
            ModelFormat::Glb => "model/gltf-binary",
            ModelFormat::Gltf => "model/gltf+json",
        }
    }

    /// Human readable list of accepted extensions, for error messages
    pub fn accepted_list() -> String {
        Self::ALL
            .iter()
            .map(|f| format!(".{}", f.extension()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFormat::Glb => f.write_str("GLB"),
            ModelFormat::Gltf => f.write_str("GLTF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(ModelFormat::from_file_name("model.glb"), Some(ModelFormat::Glb));
        assert_eq!(ModelFormat::from_file_name("MODEL.GLTF"), Some(ModelFormat::Gltf));
        assert_eq!(ModelFormat::from_file_name("scene.Glb"), Some(ModelFormat::Glb));
        assert_eq!(ModelFormat::from_file_name("model.txt"), None);
        assert_eq!(ModelFormat::from_file_name("glb"), None);
        assert_eq!(ModelFormat::from_file_name("archive.glb.zip"), None);
    }

    #[test]
    fn test_header_sniffing() {
        assert_eq!(ModelFormat::sniff(b"glTF\x02\x00\x00\x00"), Some(ModelFormat::Glb));
        assert_eq!(ModelFormat::sniff(b"  \n{\"asset\":{}}"), Some(ModelFormat::Gltf));
        assert_eq!(ModelFormat::sniff(b"ply\nformat ascii"), None);
        assert_eq!(ModelFormat::sniff(b""), None);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ModelFormat::Glb.mime_type(), "model/gltf-binary");
        assert_eq!(ModelFormat::Gltf.mime_type(), "model/gltf+json");
        assert_eq!(ModelFormat::accepted_list(), ".glb, .gltf");
    }
}
