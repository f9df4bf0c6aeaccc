//! Map asset loaders - Implement MapAssetLoader

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::{MapAsset, MapAssetLoader, default_map_assets};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Fetches every map asset over HTTP and fails if one is unavailable
#[derive(Debug, Clone)]
pub struct HttpMapAssetLoader {
    client: Client,
    assets: Vec<MapAsset>,
}

impl HttpMapAssetLoader {
    /// Loader for the pinned Leaflet and address-search assets
    pub fn new(timeout_secs: u64) -> Result<Self, ApplicationError> {
        Self::with_assets(default_map_assets(), timeout_secs)
    }

    /// Loader for an explicit asset list
    pub fn with_assets(assets: Vec<MapAsset>, timeout_secs: u64) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("fleetdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self { client, assets })
    }

    pub fn assets(&self) -> &[MapAsset] {
        &self.assets
    }

    async fn fetch(&self, asset: &MapAsset) -> Result<usize, ApplicationError> {
        let response = self.client.get(&asset.url).send().await.map_err(|e| {
            let reason = if e.is_timeout() { "timed out" } else { "unreachable" };
            ApplicationError::LibraryLoad(format!("{} {reason}: {e}", asset.url))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::LibraryLoad(format!(
                "{} returned {status}",
                asset.url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApplicationError::LibraryLoad(format!("{}: {e}", asset.url)))?;
        if body.is_empty() {
            return Err(ApplicationError::LibraryLoad(format!(
                "{} returned an empty body",
                asset.url
            )));
        }
        Ok(body.len())
    }
}

#[async_trait]
impl MapAssetLoader for HttpMapAssetLoader {
    #[instrument(skip(self), fields(assets = self.assets.len()))]
    async fn load(&self) -> Result<(), ApplicationError> {
        for asset in &self.assets {
            let bytes = self.fetch(asset).await?;
            debug!(url = %asset.url, kind = ?asset.kind, bytes, "Map asset fetched");
        }
        info!("Map library assets loaded");
        Ok(())
    }

    fn unload(&self) {
        info!("Map library assets released");
    }
}

/// Loader for headless rendering; succeeds without network access
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMapAssetLoader;

#[async_trait]
impl MapAssetLoader for StaticMapAssetLoader {
    async fn load(&self) -> Result<(), ApplicationError> {
        debug!("Static map library ready");
        Ok(())
    }

    fn unload(&self) {
        debug!("Static map library released");
    }
}

#[cfg(test)]
mod tests {
    use application::ports::AssetKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn assets_on(server: &MockServer) -> Vec<MapAsset> {
        vec![
            MapAsset {
                kind: AssetKind::Stylesheet,
                url: format!("{}/leaflet.css", server.uri()),
                integrity: None,
            },
            MapAsset {
                kind: AssetKind::Script,
                url: format!("{}/leaflet.js", server.uri()),
                integrity: None,
            },
        ]
    }

    #[tokio::test]
    async fn loads_all_assets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leaflet.css"))
            .respond_with(ResponseTemplate::new(200).set_body_string(".leaflet-pane{}"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/leaflet.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("window.L={};"))
            .expect(1)
            .mount(&server)
            .await;

        let loader = HttpMapAssetLoader::with_assets(assets_on(&server), 5).unwrap();
        assert!(loader.load().await.is_ok());
    }

    #[tokio::test]
    async fn missing_asset_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leaflet.css"))
            .respond_with(ResponseTemplate::new(200).set_body_string(".leaflet-pane{}"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/leaflet.js"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let loader = HttpMapAssetLoader::with_assets(assets_on(&server), 5).unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, ApplicationError::LibraryLoad(ref m) if m.contains("404")));
    }

    #[tokio::test]
    async fn empty_body_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let loader = HttpMapAssetLoader::with_assets(assets_on(&server), 5).unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(err.to_string().contains("empty body"));
    }

    #[tokio::test]
    async fn unreachable_host_fails() {
        let loader = HttpMapAssetLoader::with_assets(
            vec![MapAsset {
                kind: AssetKind::Script,
                url: "http://127.0.0.1:1/leaflet.js".to_string(),
                integrity: None,
            }],
            2,
        )
        .unwrap();
        assert!(matches!(
            loader.load().await,
            Err(ApplicationError::LibraryLoad(_))
        ));
    }

    #[test]
    fn default_loader_uses_pinned_assets() {
        let loader = HttpMapAssetLoader::new(10).unwrap();
        assert_eq!(loader.assets().len(), 3);
    }

    #[tokio::test]
    async fn static_loader_always_succeeds() {
        let loader = StaticMapAssetLoader;
        assert!(loader.load().await.is_ok());
        loader.unload();
    }
}
