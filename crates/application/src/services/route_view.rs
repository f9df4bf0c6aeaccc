//! Route view controller
//!
//! Ties waypoints and options to a [`MapRenderer`] and a [`RoutingPort`]:
//! recalculates when either input changes, tracks the banner error and hands
//! each successful result to an optional callback.
//!
//! View state sits behind a short-held synchronous mutex that is never held
//! across an await. Every calculation is tagged with a generation number;
//! a response whose generation is no longer current is dropped without
//! drawing, erroring or calling back.

use std::sync::Arc;

use domain::{RouteOptions, RouteResult, Waypoint};
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::ports::RoutingPort;
use crate::services::map_library::MapLibrary;
use crate::services::map_renderer::{MapRenderer, RendererState};

/// Banner text shown for any failed calculation
pub const ROUTE_ERROR_MESSAGE: &str = "Failed to calculate route. Please try different waypoints.";

/// Receives each successfully calculated route
pub type RouteCallback = Arc<dyn Fn(&RouteResult) + Send + Sync>;

struct ViewState {
    renderer: MapRenderer,
    waypoints: Vec<Waypoint>,
    options: RouteOptions,
    is_loading: bool,
    /// Waypoints changed since the surface was built
    needs_rebuild: bool,
    error: Option<String>,
    route: Option<RouteResult>,
    generation: u64,
    on_route_calculated: Option<RouteCallback>,
}

/// Headless route map view
pub struct RouteView {
    routing: Arc<dyn RoutingPort>,
    library: Arc<MapLibrary>,
    inner: Mutex<ViewState>,
}

impl std::fmt::Debug for RouteView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("RouteView")
            .field("renderer", &state.renderer)
            .field("waypoints", &state.waypoints.len())
            .field("options", &state.options)
            .field("is_loading", &state.is_loading)
            .field("error", &state.error)
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}

impl RouteView {
    pub fn new(
        routing: Arc<dyn RoutingPort>,
        library: Arc<MapLibrary>,
        renderer: MapRenderer,
    ) -> Self {
        Self {
            routing,
            library,
            inner: Mutex::new(ViewState {
                renderer,
                waypoints: Vec::new(),
                options: RouteOptions::default(),
                is_loading: false,
                needs_rebuild: true,
                error: None,
                route: None,
                generation: 0,
                on_route_calculated: None,
            }),
        }
    }

    /// Set initial inputs before mounting
    #[must_use]
    pub fn with_inputs(self, waypoints: Vec<Waypoint>, options: RouteOptions) -> Self {
        {
            let mut state = self.inner.lock();
            state.waypoints = waypoints;
            state.options = options;
        }
        self
    }

    #[must_use]
    pub fn with_callback(self, callback: impl Fn(&RouteResult) + Send + Sync + 'static) -> Self {
        self.inner.lock().on_route_calculated = Some(Arc::new(callback));
        self
    }

    /// Load the map library, then calculate for the current inputs
    #[instrument(skip(self))]
    pub async fn mount(&self) {
        if !self.inner.lock().renderer.begin_library_load() {
            return;
        }

        let handle = self.library.acquire().await;

        {
            let mut state = self.inner.lock();
            if state.renderer.state() == RendererState::Unmounted {
                debug!("View unmounted while the map library was loading");
                return;
            }
            state.renderer.library_loaded(handle);
        }

        self.refresh().await;
    }

    /// Replace the waypoint list; identical lists are ignored
    pub async fn set_waypoints(&self, waypoints: Vec<Waypoint>) {
        {
            let mut state = self.inner.lock();
            if state.waypoints == waypoints {
                return;
            }
            state.waypoints = waypoints;
            state.renderer.release_session();
            state.needs_rebuild = true;
            state.generation += 1;
        }
        self.refresh().await;
    }

    /// Replace the routing options; identical options are ignored
    pub async fn set_options(&self, options: RouteOptions) {
        {
            let mut state = self.inner.lock();
            if state.options == options {
                return;
            }
            state.options = options;
            state.generation += 1;
        }
        self.refresh().await;
    }

    /// While loading, no calculation starts; clearing the flag recalculates
    pub async fn set_loading(&self, is_loading: bool) {
        {
            let mut state = self.inner.lock();
            if state.is_loading == is_loading {
                return;
            }
            state.is_loading = is_loading;
            if is_loading {
                return;
            }
        }
        self.refresh().await;
    }

    /// Calculate and draw a route for the current inputs if possible
    #[instrument(skip(self))]
    pub async fn refresh(&self) {
        let Some((generation, waypoints, options)) = self.begin_calculation() else {
            return;
        };

        let outcome = self.routing.calculate_route(&waypoints, &options).await;

        let delivery = {
            let mut state = self.inner.lock();
            if state.generation != generation
                || state.renderer.state() == RendererState::Unmounted
            {
                debug!(generation, current = state.generation, "Discarding stale route result");
                return;
            }

            match outcome {
                Ok(result) => {
                    state.renderer.draw_route(&result);
                    state.route = Some(result.clone());
                    state
                        .on_route_calculated
                        .clone()
                        .map(|callback| (callback, result))
                },
                Err(e) => {
                    warn!(error = %e, "Error calculating route");
                    state.renderer.route_failed();
                    state.error = Some(ROUTE_ERROR_MESSAGE.to_string());
                    None
                },
            }
        };

        if let Some((callback, result)) = delivery {
            callback(&result);
        }
    }

    /// Tear down the surface and release the map library
    pub fn unmount(&self) {
        let mut state = self.inner.lock();
        state.renderer.unmount();
        state.generation += 1;
    }

    /// Banner error of the latest attempt
    pub fn error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    /// Last successfully calculated route
    pub fn route(&self) -> Option<RouteResult> {
        self.inner.lock().route.clone()
    }

    pub fn renderer_state(&self) -> RendererState {
        self.inner.lock().renderer.state()
    }

    /// Map library load failure, if any
    pub fn library_error(&self) -> Option<String> {
        self.inner
            .lock()
            .renderer
            .library_error()
            .map(str::to_string)
    }

    /// Live waypoint markers on the surface
    pub fn marker_count(&self) -> usize {
        self.inner.lock().renderer.marker_count()
    }

    fn begin_calculation(&self) -> Option<(u64, Vec<Waypoint>, RouteOptions)> {
        let mut state = self.inner.lock();

        if state.is_loading || !state.renderer.is_library_ready() {
            return None;
        }

        if state.waypoints.len() < 2 {
            state.renderer.release_session();
            state.needs_rebuild = true;
            return None;
        }

        let started = if state.needs_rebuild || !state.renderer.has_session() {
            let waypoints = state.waypoints.clone();
            state.renderer.prepare_session(&waypoints)
        } else {
            state.renderer.begin_recalculation()
        };
        if !started {
            return None;
        }

        state.needs_rebuild = false;
        state.error = None;
        state.generation += 1;
        Some((
            state.generation,
            state.waypoints.clone(),
            state.options.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use domain::{LatLng, LonLat, RouteFeature, TravelMode};
    use tokio::sync::Notify;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{MapAssetLoader, MockMapAssetLoader, MockRoutingPort};
    use crate::services::map_renderer::MapRendererConfig;
    use crate::services::test_support::{RecordingFactory, waypoints};

    struct NoopLoader;

    #[async_trait]
    impl MapAssetLoader for NoopLoader {
        async fn load(&self) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn unload(&self) {}
    }

    fn route_through(points: &[(f64, f64)]) -> RouteResult {
        RouteResult::new(vec![RouteFeature {
            mode: TravelMode::Drive,
            legs: Vec::new(),
            total_distance_meters: 1200.0,
            total_duration_seconds: 300.0,
            geometry: points.iter().map(|(lon, lat)| LonLat::new(*lon, *lat)).collect(),
        }])
    }

    fn view(routing: impl RoutingPort + 'static, factory: &Arc<RecordingFactory>) -> RouteView {
        let renderer = MapRenderer::new(MapRendererConfig::default(), factory.clone());
        RouteView::new(
            Arc::new(routing),
            MapLibrary::new(Arc::new(NoopLoader)),
            renderer,
        )
    }

    #[tokio::test]
    async fn mount_calculates_and_draws() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_calculate_route()
            .times(1)
            .returning(|_, _| Ok(route_through(&[(-74.0, 40.7), (-74.01, 40.71)])));

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(2), RouteOptions::default());
        view.mount().await;

        assert!(view.error().is_none());
        assert!(view.route().is_some());
        assert_eq!(view.renderer_state(), RendererState::Ready);
        assert_eq!(
            factory.last().polyline.unwrap(),
            vec![LatLng::new(40.7, -74.0), LatLng::new(40.71, -74.01)]
        );
    }

    #[tokio::test]
    async fn marker_count_tracks_current_waypoints() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_calculate_route()
            .times(2)
            .returning(|_, _| Ok(route_through(&[(-74.0, 40.7)])));

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(4), RouteOptions::default());
        view.mount().await;
        view.set_waypoints(waypoints(3)).await;

        assert_eq!(view.marker_count(), 3);
        assert_eq!(factory.live_markers(), 3);
    }

    #[tokio::test]
    async fn service_error_sets_banner_and_keeps_overlay() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut routing = MockRoutingPort::new();
        routing.expect_calculate_route().returning(move |_, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(route_through(&[(-74.0, 40.7), (-74.01, 40.71)]))
            } else {
                Err(ApplicationError::RoutingService {
                    status: 429,
                    status_text: "Too Many Requests".to_string(),
                })
            }
        });

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(2), RouteOptions::default());
        view.mount().await;
        view.set_options(RouteOptions::for_mode(TravelMode::Truck)).await;

        assert_eq!(view.error().as_deref(), Some(ROUTE_ERROR_MESSAGE));
        let scene = factory.last();
        assert!(scene.polyline.is_some());
        assert_eq!(scene.markers.len(), 2);
        assert!(!scene.removed);
        assert_eq!(view.renderer_state(), RendererState::Ready);
    }

    #[tokio::test]
    async fn error_clears_on_next_attempt() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut routing = MockRoutingPort::new();
        routing.expect_calculate_route().returning(move |_, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ApplicationError::Transport("connection reset".to_string()))
            } else {
                Ok(route_through(&[(-74.0, 40.7)]))
            }
        });

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(2), RouteOptions::default());
        view.mount().await;
        assert!(view.error().is_some());

        view.set_waypoints(waypoints(3)).await;
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn identical_inputs_do_not_recalculate() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_calculate_route()
            .times(1)
            .returning(|_, _| Ok(route_through(&[(-74.0, 40.7)])));

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(2), RouteOptions::default());
        view.mount().await;
        view.set_waypoints(waypoints(2)).await;
        view.set_options(RouteOptions::default()).await;

        assert_eq!(factory.scenes().len(), 1);
    }

    #[tokio::test]
    async fn loading_flag_suppresses_until_cleared() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_calculate_route()
            .times(1)
            .returning(|_, _| Ok(route_through(&[(-74.0, 40.7)])));

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(2), RouteOptions::default());
        view.set_loading(true).await;
        view.mount().await;
        view.set_waypoints(waypoints(3)).await;
        assert!(view.route().is_none());
        assert!(factory.scenes().is_empty());

        view.set_loading(false).await;
        assert!(view.route().is_some());
        assert_eq!(view.marker_count(), 3);
    }

    #[tokio::test]
    async fn new_waypoints_while_loading_release_the_old_session() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_calculate_route()
            .times(1)
            .returning(|_, _| Ok(route_through(&[(-74.0, 40.7), (-74.03, 40.73)])));

        let factory = RecordingFactory::new();
        let view = view(routing, &factory).with_inputs(waypoints(4), RouteOptions::default());
        view.mount().await;
        assert_eq!(view.marker_count(), 4);

        view.set_loading(true).await;
        view.set_waypoints(waypoints(2)).await;

        assert_eq!(view.marker_count(), 0);
        assert_eq!(factory.live_markers(), 0);
        let old = factory.last();
        assert!(old.removed);
        assert!(old.polyline.is_none());
    }

    #[tokio::test]
    async fn callback_fires_once_per_success_and_never_on_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut routing = MockRoutingPort::new();
        routing.expect_calculate_route().returning(move |_, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                Err(ApplicationError::Transport("timeout".to_string()))
            } else {
                Ok(route_through(&[(-74.0, 40.7)]))
            }
        });

        let delivered = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&delivered);

        let factory = RecordingFactory::new();
        let view = view(routing, &factory)
            .with_inputs(waypoints(2), RouteOptions::default())
            .with_callback(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });

        view.mount().await;
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        view.set_waypoints(waypoints(3)).await;
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        view.set_waypoints(waypoints(4)).await;
        assert_eq!(delivered.load(Ordering::SeqCst), 2);
    }

    /// Routing port whose first call blocks until released
    struct GatedRouting {
        gate: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RoutingPort for GatedRouting {
        async fn calculate_route(
            &self,
            waypoints: &[Waypoint],
            _options: &RouteOptions,
        ) -> Result<RouteResult, ApplicationError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
            }
            #[allow(clippy::cast_precision_loss)]
            let marker = waypoints.len() as f64;
            Ok(route_through(&[(marker, marker)]))
        }
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let gate = Arc::new(Notify::new());
        let routing = GatedRouting {
            gate: Arc::clone(&gate),
            calls: AtomicUsize::new(0),
        };

        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&delivered);

        let factory = RecordingFactory::new();
        let view = Arc::new(
            view(routing, &factory)
                .with_inputs(waypoints(2), RouteOptions::default())
                .with_callback(move |result| {
                    let lon = result.primary().map_or(0.0, |f| f.geometry[0].lon);
                    sink.lock().push(lon);
                }),
        );

        let first = {
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.mount().await })
        };
        while view.renderer_state() != RendererState::Calculating {
            tokio::task::yield_now().await;
        }

        view.set_waypoints(waypoints(3)).await;
        gate.notify_one();
        first.await.unwrap();

        assert_eq!(*delivered.lock(), vec![3.0]);
        assert_eq!(factory.last().polyline.unwrap(), vec![LatLng::new(3.0, 3.0)]);
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn library_failure_never_calls_routing() {
        let mut loader = MockMapAssetLoader::new();
        loader
            .expect_load()
            .returning(|| Err(ApplicationError::LibraryLoad("blocked".to_string())));

        let mut routing = MockRoutingPort::new();
        routing.expect_calculate_route().never();

        let factory = RecordingFactory::new();
        let renderer = MapRenderer::new(MapRendererConfig::default(), factory.clone());
        let view = RouteView::new(
            Arc::new(routing),
            MapLibrary::new(Arc::new(loader)),
            renderer,
        )
        .with_inputs(waypoints(3), RouteOptions::default());

        view.mount().await;
        assert!(view.library_error().is_some());
        assert!(factory.scenes().is_empty());
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn unmount_releases_surface_and_library() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_calculate_route()
            .returning(|_, _| Ok(route_through(&[(-74.0, 40.7)])));

        let library = MapLibrary::new(Arc::new(NoopLoader));
        let factory = RecordingFactory::new();
        let renderer = MapRenderer::new(MapRendererConfig::default(), factory.clone());
        let view = RouteView::new(Arc::new(routing), Arc::clone(&library), renderer)
            .with_inputs(waypoints(2), RouteOptions::default());

        view.mount().await;
        assert_eq!(library.ref_count(), 1);

        view.unmount();
        assert_eq!(library.ref_count(), 0);
        assert!(factory.last().removed);
        assert_eq!(view.renderer_state(), RendererState::Unmounted);
    }
}
