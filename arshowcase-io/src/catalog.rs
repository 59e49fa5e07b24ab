//! Read-only gallery of curated models
//!
//! The catalog is an immutable lookup table injected into the showcase. It
//! can be loaded from JSON or taken from [`Catalog::builtin`], which carries
//! the curated Khronos and model-viewer sample models.

use serde::{Deserialize, Serialize};
use std::path::Path;

use arshowcase_core::Result;

const RAW_GITHUB: &str = "https://raw.githubusercontent.com/";
const JSDELIVR_GITHUB: &str = "https://cdn.jsdelivr.net/gh/";
const KHRONOS_SAMPLES: &str = "KhronosGroup/glTF-Sample-Models";
const MODEL_VIEWER_ASSETS: &str = "modelviewer.dev/shared-assets/models";

/// A single curated model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub display_name: String,
    pub model_address: String,
    pub thumbnail_address: String,
}

/// Link to the original source of a catalog model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub href: String,
    pub label: &'static str,
}

impl CatalogItem {
    pub fn new(display_name: &str, model_address: &str, thumbnail_address: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            model_address: model_address.to_string(),
            thumbnail_address: thumbnail_address.to_string(),
        }
    }

    /// Thumbnail address, routed through a CORS-friendly CDN for GitHub raw content
    pub fn resolved_thumbnail(&self) -> String {
        match self.thumbnail_address.strip_prefix(RAW_GITHUB) {
            Some(path) => format!("{}{}", JSDELIVR_GITHUB, path.replacen("/master/", "@master/", 1)),
            None => self.thumbnail_address.clone(),
        }
    }

    /// Where the model came from, for known sample repositories
    pub fn attribution(&self) -> Option<Attribution> {
        let address = &self.model_address;
        if let Some(start) = address.find(KHRONOS_SAMPLES) {
            let after = &address[start + KHRONOS_SAMPLES.len()..];
            let model = after
                .strip_prefix("/master/2.0/")
                .and_then(|rest| rest.split('/').next())
                .filter(|name| !name.is_empty());
            let href = match model {
                Some(name) => format!("https://github.com/{}/tree/master/2.0/{}", KHRONOS_SAMPLES, name),
                None => format!("https://github.com/{}", KHRONOS_SAMPLES),
            };
            return Some(Attribution { href, label: "Khronos" });
        }
        if address.contains(MODEL_VIEWER_ASSETS) {
            return Some(Attribution {
                href: "https://github.com/google/model-viewer/tree/main/packages/shared-assets/models"
                    .to_string(),
                label: "model-viewer",
            });
        }
        None
    }
}

/// A named group of catalog items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

/// Immutable table of curated models grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<CatalogCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<CatalogCategory>) -> Self {
        Self { categories }
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    /// All items across categories, in catalog order
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Look up an item by display name, case-insensitively
    pub fn find(&self, display_name: &str) -> Option<&CatalogItem> {
        self.items()
            .find(|item| item.display_name.eq_ignore_ascii_case(display_name.trim()))
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The curated gallery of sample models
    pub fn builtin() -> Self {
        fn khronos(name: &str, model: &str) -> CatalogItem {
            let base = format!("{}{}/master/2.0/{}", RAW_GITHUB, KHRONOS_SAMPLES, model);
            CatalogItem::new(
                name,
                &format!("{}/glTF-Binary/{}.glb", base, model),
                &format!("{}/screenshot/screenshot.jpg", base),
            )
        }
        fn model_viewer(name: &str, model: &str) -> CatalogItem {
            let base = format!("https://{}/{}", MODEL_VIEWER_ASSETS, model);
            CatalogItem::new(name, &format!("{}.glb", base), &format!("{}.webp", base))
        }
        fn category(name: &str, items: Vec<CatalogItem>) -> CatalogCategory {
            CatalogCategory { name: name.to_string(), items }
        }

        Self::new(vec![
            category("Furniture", vec![
                khronos("Sheen Chair", "SheenChair"),
                khronos("Damaged Helmet (Decor)", "DamagedHelmet"),
            ]),
            category("Home Decor", vec![
                khronos("Lantern", "Lantern"),
                khronos("Antique Camera", "AntiqueCamera"),
            ]),
            category("Vehicles", vec![
                khronos("Milk Truck", "CesiumMilkTruck"),
                khronos("Buggy", "Buggy"),
            ]),
            category("Toys", vec![
                khronos("Toy Car", "ToyCar"),
                khronos("Duck", "Duck"),
            ]),
            category("Animals", vec![
                model_viewer("Fox", "Fox"),
                khronos("Barramundi Fish", "BarramundiFish"),
            ]),
            category("Fashion", vec![khronos("Corset", "Corset")]),
            category("Everyday", vec![khronos("Water Bottle", "WaterBottle")]),
            category("Characters", vec![
                khronos("Cesium Man", "CesiumMan"),
                model_viewer("Robot Expressive", "RobotExpressive"),
            ]),
            category("Space", vec![model_viewer("Astronaut", "Astronaut")]),
            category("Electronics", vec![
                khronos("BoomBox", "BoomBox"),
                khronos("Flight Helmet", "FlightHelmet"),
            ]),
            category("Abstract", vec![khronos("Suzanne", "Suzanne")]),
            category("Food", vec![khronos("Avocado", "Avocado")]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories().len(), 12);
        assert_eq!(catalog.len(), 19);
        assert!(!catalog.is_empty());

        let duck = catalog.find("duck").unwrap();
        assert_eq!(
            duck.model_address,
            "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/Duck/glTF-Binary/Duck.glb"
        );
        assert!(catalog.find("Teapot").is_none());
    }

    #[test]
    fn test_thumbnail_rewrite() {
        let catalog = Catalog::builtin();
        let lantern = catalog.find("Lantern").unwrap();
        assert_eq!(
            lantern.resolved_thumbnail(),
            "https://cdn.jsdelivr.net/gh/KhronosGroup/glTF-Sample-Models@master/2.0/Lantern/screenshot/screenshot.jpg"
        );

        let fox = catalog.find("Fox").unwrap();
        assert_eq!(fox.resolved_thumbnail(), "https://modelviewer.dev/shared-assets/models/Fox.webp");
    }

    #[test]
    fn test_attribution() {
        let catalog = Catalog::builtin();

        let buggy = catalog.find("Buggy").unwrap().attribution().unwrap();
        assert_eq!(buggy.label, "Khronos");
        assert_eq!(buggy.href, "https://github.com/KhronosGroup/glTF-Sample-Models/tree/master/2.0/Buggy");

        let astronaut = catalog.find("Astronaut").unwrap().attribution().unwrap();
        assert_eq!(astronaut.label, "model-viewer");

        let custom = CatalogItem::new("Mine", "https://example.com/mine.glb", "");
        assert!(custom.attribution().is_none());
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"{
            "categories": [
                { "name": "Props", "items": [
                    { "display_name": "Crate", "model_address": "https://example.com/crate.glb", "thumbnail_address": "https://example.com/crate.png" }
                ] }
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories()[0].name, "Props");
        assert!(Catalog::from_json_str("[]").is_err());
    }
}
