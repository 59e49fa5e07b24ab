//! Model source resolution
//!
//! Turns a user action (file drop, typed address, gallery pick) into a
//! [`Resolved`] model source. The resolver never adds entries; uploaded
//! bytes are registered with the handle store of the library the result is
//! destined for, so removing the entry later releases them.

use arshowcase_core::{Error, ModelLibrary, ModelSource, ModelUrl, Result, ShowcaseConfig, SizeLimits};

use crate::address::Address;
use crate::catalog::CatalogItem;
use crate::format::ModelFormat;
use crate::size::{SizeBand, SizeReport};

/// Address of the model loaded by the "sample model" shortcut
pub const SAMPLE_MODEL_ADDRESS: &str =
    "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/Duck/glTF-Binary/Duck.glb";

/// A user action that names a model
#[derive(Debug, Clone)]
pub enum SourceInput {
    /// A local file picked or dropped by the user
    File { name: String, bytes: Vec<u8> },
    /// An address typed by the user
    Address(String),
    /// A gallery selection
    Catalog(CatalogItem),
}

/// A model source ready to be added to the library
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub url: ModelUrl,
    pub name: String,
    pub source: ModelSource,
    /// Present for uploaded files only
    pub size: Option<SizeReport>,
}

impl Resolved {
    /// User-facing size warning, if the upload falls outside the comfortable band
    pub fn size_warning(&self, limits: &SizeLimits) -> Option<String> {
        self.size.and_then(|report| report.warning(limits))
    }
}

/// Resolves user actions into model sources
#[derive(Debug, Clone)]
pub struct ModelSourceResolver {
    limits: SizeLimits,
    default_name: String,
}

impl ModelSourceResolver {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            limits: config.size_limits,
            default_name: config.default_model_name.clone(),
        }
    }

    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    /// Resolve any kind of input destined for `library`
    pub fn resolve(&self, input: SourceInput, library: &mut ModelLibrary) -> Result<Resolved> {
        match input {
            SourceInput::File { name, bytes } => self.resolve_file(&name, bytes, library),
            SourceInput::Address(address) => self.resolve_address(&address),
            SourceInput::Catalog(item) => Ok(self.resolve_catalog(&item)),
        }
    }

    /// Accept a `.glb`/`.gltf` upload and move its bytes into `library`'s store
    pub fn resolve_file(&self, name: &str, bytes: Vec<u8>, library: &mut ModelLibrary) -> Result<Resolved> {
        let format = ModelFormat::from_file_name(name).ok_or_else(|| {
            log::warn!("rejected upload '{}': not a {} file", name, ModelFormat::accepted_list());
            Error::UnsupportedFormat(format!(
                "'{}' is not a supported model file ({})",
                name,
                ModelFormat::accepted_list()
            ))
        })?;

        if let Some(sniffed) = ModelFormat::sniff(&bytes) {
            if sniffed != format {
                log::warn!("'{}' has a .{} extension but looks like {}", name, format.extension(), sniffed);
            }
        }

        let size = SizeReport::classify(bytes.len() as u64, &self.limits);
        match size.band {
            SizeBand::Comfortable => log::info!("model size: {}", size),
            SizeBand::Cautionary | SizeBand::Blocking => {
                if let Some(warning) = size.warning(&self.limits) {
                    log::warn!("{}", warning);
                }
            }
        }

        let handle = library.handles_mut().register(bytes, format.mime_type());
        Ok(Resolved {
            url: ModelUrl::Local(handle),
            name: self.name_or_default(name),
            source: ModelSource::File,
            size: Some(size),
        })
    }

    /// Validate a typed address; reachability is not checked
    pub fn resolve_address(&self, input: &str) -> Result<Resolved> {
        let address = Address::parse(input).map_err(|err| {
            log::warn!("rejected address '{}': {}", input.trim(), err);
            err
        })?;
        let name = address
            .file_name()
            .filter(|segment| ModelFormat::from_file_name(segment).is_some())
            .map(str::to_string)
            .unwrap_or_else(|| self.default_name.clone());

        log::info!("loading model from address: {}", address.as_str());
        Ok(Resolved {
            url: ModelUrl::Remote(address.into_string()),
            name,
            source: ModelSource::Address,
            size: None,
        })
    }

    /// Pass a gallery selection through unchanged
    pub fn resolve_catalog(&self, item: &CatalogItem) -> Resolved {
        Resolved {
            url: ModelUrl::remote(item.model_address.clone()),
            name: format!("{}.glb", item.display_name),
            source: ModelSource::Catalog,
            size: None,
        }
    }

    /// The built-in sample model
    pub fn sample(&self) -> Resolved {
        Resolved {
            url: ModelUrl::remote(SAMPLE_MODEL_ADDRESS),
            name: "Duck.glb".to_string(),
            source: ModelSource::Catalog,
            size: None,
        }
    }

    fn name_or_default(&self, name: &str) -> String {
        match name.trim() {
            "" => self.default_name.clone(),
            trimmed => trimmed.to_string(),
        }
    }
}

impl Default for ModelSourceResolver {
    fn default() -> Self {
        Self::new(&ShowcaseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLB_HEADER: &[u8] = b"glTF\x02\x00\x00\x00";

    #[test]
    fn test_file_extension_acceptance() {
        let resolver = ModelSourceResolver::default();
        let mut library = ModelLibrary::new();

        let rejected = resolver.resolve_file("model.txt", b"hello".to_vec(), &mut library);
        assert!(matches!(rejected, Err(Error::UnsupportedFormat(_))));
        assert_eq!(library.handles().live_count(), 0);

        for name in ["model.glb", "model.gltf", "MODEL.GLB", "Model.GlTf"] {
            let resolved = resolver.resolve_file(name, GLB_HEADER.to_vec(), &mut library).unwrap();
            assert!(resolved.url.is_local());
            assert_eq!(resolved.source, ModelSource::File);
            assert_eq!(resolved.name, name);
        }
        assert_eq!(library.handles().live_count(), 4);
    }

    #[test]
    fn test_file_handle_mime() {
        let resolver = ModelSourceResolver::default();
        let mut library = ModelLibrary::new();

        let glb = resolver.resolve_file("a.glb", GLB_HEADER.to_vec(), &mut library).unwrap();
        assert_eq!(glb.url.local_handle().unwrap().mime(), "model/gltf-binary");

        let gltf = resolver.resolve_file("a.gltf", b"{}".to_vec(), &mut library).unwrap();
        assert_eq!(gltf.url.local_handle().unwrap().mime(), "model/gltf+json");
    }

    #[test]
    fn test_large_file_still_resolves() {
        let mut config = ShowcaseConfig::default();
        config.size_limits = SizeLimits { caution_mib: 0.001, blocking_mib: 0.002 };
        let resolver = ModelSourceResolver::new(&config);
        let mut library = ModelLibrary::new();

        let resolved = resolver.resolve_file("big.glb", vec![0u8; 4096], &mut library).unwrap();
        assert_eq!(resolved.size.unwrap().band, SizeBand::Blocking);
        assert!(resolved.size_warning(resolver.limits()).is_some());
    }

    #[test]
    fn test_uploaded_bytes_released_by_owning_library() {
        let resolver = ModelSourceResolver::default();
        let mut library = ModelLibrary::new();

        let resolved = resolver.resolve_file("chair.glb", GLB_HEADER.to_vec(), &mut library).unwrap();
        let handle = resolved.url.local_handle().cloned().unwrap();
        assert!(library.handles().is_live(&handle));

        let id = library.add_from(resolved.url, &resolved.name, resolved.source);
        library.remove(id);
        assert!(!library.handles().is_live(&handle));
        assert_eq!(library.handles().release_count(), 1);
    }

    #[test]
    fn test_address_resolution() {
        let resolver = ModelSourceResolver::default();

        let rejected = resolver.resolve_address("not a url");
        assert!(matches!(rejected, Err(Error::InvalidAddress(_))));

        let resolved = resolver.resolve_address("https://example.com/model.glb").unwrap();
        assert_eq!(resolved.url, ModelUrl::remote("https://example.com/model.glb"));
        assert_eq!(resolved.name, "model.glb");
        assert_eq!(resolved.source, ModelSource::Address);
        assert!(resolved.size.is_none());

        let unnamed = resolver.resolve_address("https://example.com/api/model?id=4").unwrap();
        assert_eq!(unnamed.name, "Untitled model");
    }

    #[test]
    fn test_catalog_passthrough() {
        let resolver = ModelSourceResolver::default();
        let mut library = ModelLibrary::new();
        let item = CatalogItem::new("Fox", "https://modelviewer.dev/shared-assets/models/Fox.glb", "");

        let resolved = resolver.resolve(SourceInput::Catalog(item.clone()), &mut library).unwrap();
        assert_eq!(resolved.url.address(), item.model_address);
        assert_eq!(resolved.name, "Fox.glb");
        assert_eq!(resolved.source, ModelSource::Catalog);
        assert_eq!(library.handles().live_count(), 0);
    }

    #[test]
    fn test_sample_model() {
        let resolver = ModelSourceResolver::default();
        let sample = resolver.sample();
        assert_eq!(sample.url.address(), SAMPLE_MODEL_ADDRESS);
        assert_eq!(sample.name, "Duck.glb");
    }
}
