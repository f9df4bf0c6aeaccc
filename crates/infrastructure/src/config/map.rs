//! Map rendering configuration.

use application::ports::{PolylineStyle, TileLayer};
use application::services::MapRendererConfig;
use serde::{Deserialize, Serialize};

/// Map rendering and asset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Zoom level of a freshly created surface
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    /// Padding in pixels when fitting the viewport to a route
    #[serde(default = "default_fit_padding")]
    pub fit_padding: u32,

    /// Tile URL template
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Tile attribution HTML
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,

    /// Fetch the map library assets over HTTP before first use
    #[serde(default)]
    pub verify_assets: bool,

    /// Timeout for each asset fetch in seconds
    #[serde(default = "default_asset_timeout_secs")]
    pub asset_timeout_secs: u64,
}

const fn default_zoom() -> u8 {
    13
}

const fn default_fit_padding() -> u32 {
    30
}

fn default_tile_url() -> String {
    TileLayer::default().url_template
}

fn default_tile_attribution() -> String {
    TileLayer::default().attribution
}

const fn default_asset_timeout_secs() -> u64 {
    10
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_zoom: default_zoom(),
            fit_padding: default_fit_padding(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            verify_assets: false,
            asset_timeout_secs: default_asset_timeout_secs(),
        }
    }
}

impl MapConfig {
    /// Renderer settings derived from this configuration
    #[must_use]
    pub fn renderer_config(&self) -> MapRendererConfig {
        MapRendererConfig {
            default_zoom: self.default_zoom,
            fit_padding: self.fit_padding,
            route_style: PolylineStyle::default(),
            tile_layer: TileLayer {
                url_template: self.tile_url.clone(),
                attribution: self.tile_attribution.clone(),
            },
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_zoom > 20 {
            return Err("map.default_zoom must be 20 or less".to_string());
        }
        if self.tile_url.is_empty() {
            return Err("map.tile_url must not be empty".to_string());
        }
        if self.verify_assets && self.asset_timeout_secs == 0 {
            return Err("map.asset_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
