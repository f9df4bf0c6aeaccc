//! Map asset port
//!
//! The map library is a set of external stylesheet and script assets. The
//! loader makes them available (fetching, verifying or injecting them,
//! depending on the adapter) and releases them again.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Kind of a map asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Stylesheet,
    Script,
}

/// An external asset making up the map library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapAsset {
    pub kind: AssetKind,
    pub url: String,
    /// Subresource integrity hash, when pinned
    pub integrity: Option<String>,
}

impl MapAsset {
    fn new(kind: AssetKind, url: &str, integrity: Option<&str>) -> Self {
        Self {
            kind,
            url: url.to_string(),
            integrity: integrity.map(str::to_string),
        }
    }
}

/// Leaflet 1.9.3 plus the Geoapify address search stylesheet
#[must_use]
pub fn default_map_assets() -> Vec<MapAsset> {
    vec![
        MapAsset::new(
            AssetKind::Stylesheet,
            "https://unpkg.com/@geoapify/leaflet-address-search-plugin@^1/dist/L.Control.GeoapifyAddressSearch.min.css",
            None,
        ),
        MapAsset::new(
            AssetKind::Stylesheet,
            "https://unpkg.com/leaflet@1.9.3/dist/leaflet.css",
            Some("sha256-kLaT2GOSpHechhsozzB+flnD+zUyjE2LlfWPgU04xyI="),
        ),
        MapAsset::new(
            AssetKind::Script,
            "https://unpkg.com/leaflet@1.9.3/dist/leaflet.js",
            Some("sha256-WBkoXOwTeyKclOHuWtc+i2uENFpDZ9YPdf5Hf+D7ewM="),
        ),
    ]
}

/// Port for loading and unloading the map library assets
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MapAssetLoader: Send + Sync {
    /// Make the assets available
    async fn load(&self) -> Result<(), ApplicationError>;

    /// Release the assets
    fn unload(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaflet_assets_are_pinned() {
        let assets = default_map_assets();
        assert_eq!(assets.len(), 3);

        let script = assets
            .iter()
            .find(|a| a.kind == AssetKind::Script)
            .unwrap();
        assert!(script.url.ends_with("leaflet@1.9.3/dist/leaflet.js"));
        assert!(script.integrity.as_deref().unwrap().starts_with("sha256-"));

        let pinned = assets.iter().filter(|a| a.integrity.is_some()).count();
        assert_eq!(pinned, 2);
    }
}
