//! Process-wide map library lifecycle
//!
//! The map assets are loaded once for the first consumer and released when
//! the last [`MapLibraryHandle`] is dropped. Concurrent first acquisitions
//! wait for a single load.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::MapAssetLoader;

/// Reference-counted owner of the map assets
pub struct MapLibrary {
    loader: Arc<dyn MapAssetLoader>,
    /// Serializes loads so only one caller fetches the assets
    load_gate: tokio::sync::Mutex<()>,
    refs: Mutex<usize>,
}

impl std::fmt::Debug for MapLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapLibrary")
            .field("refs", &*self.refs.lock())
            .finish_non_exhaustive()
    }
}

impl MapLibrary {
    pub fn new(loader: Arc<dyn MapAssetLoader>) -> Arc<Self> {
        Arc::new(Self {
            loader,
            load_gate: tokio::sync::Mutex::new(()),
            refs: Mutex::new(0),
        })
    }

    /// Acquire a handle, loading the assets if nobody holds one
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::LibraryLoad`] if the assets fail to load;
    /// no handle is counted in that case.
    #[instrument(skip(self))]
    pub async fn acquire(self: &Arc<Self>) -> Result<MapLibraryHandle, ApplicationError> {
        if let Some(handle) = self.try_share() {
            return Ok(handle);
        }

        let _gate = self.load_gate.lock().await;

        // Another caller may have finished loading while we waited
        if let Some(handle) = self.try_share() {
            return Ok(handle);
        }

        self.loader.load().await.map_err(|e| match e {
            ApplicationError::LibraryLoad(_) => e,
            other => ApplicationError::LibraryLoad(other.to_string()),
        })?;

        *self.refs.lock() += 1;
        info!("Map library loaded");
        Ok(MapLibraryHandle {
            library: Arc::clone(self),
        })
    }

    /// Number of live handles
    pub fn ref_count(&self) -> usize {
        *self.refs.lock()
    }

    pub fn is_loaded(&self) -> bool {
        self.ref_count() > 0
    }

    fn try_share(self: &Arc<Self>) -> Option<MapLibraryHandle> {
        let mut refs = self.refs.lock();
        if *refs == 0 {
            return None;
        }
        *refs += 1;
        debug!(refs = *refs, "Map library shared");
        Some(MapLibraryHandle {
            library: Arc::clone(self),
        })
    }

    fn release(&self) {
        let mut refs = self.refs.lock();
        match *refs {
            0 => warn!("Map library released more often than acquired"),
            1 => {
                *refs = 0;
                self.loader.unload();
                info!("Map library unloaded");
            },
            _ => {
                *refs -= 1;
                debug!(refs = *refs, "Map library handle released");
            },
        }
    }
}

/// Proof that the map library is loaded; releases it on drop
pub struct MapLibraryHandle {
    library: Arc<MapLibrary>,
}

impl std::fmt::Debug for MapLibraryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapLibraryHandle").finish_non_exhaustive()
    }
}

impl Drop for MapLibraryHandle {
    fn drop(&mut self) {
        self.library.release();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::ports::MockMapAssetLoader;

    #[derive(Default)]
    struct CountingLoader {
        loads: AtomicUsize,
        unloads: AtomicUsize,
    }

    #[async_trait]
    impl MapAssetLoader for CountingLoader {
        async fn load(&self) -> Result<(), ApplicationError> {
            tokio::task::yield_now().await;
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn unload(&self) {
            self.unloads.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn loads_once_and_unloads_on_last_release() {
        let loader = Arc::new(CountingLoader::default());
        let library = MapLibrary::new(loader.clone());

        let first = library.acquire().await.unwrap();
        let second = library.acquire().await.unwrap();
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(library.ref_count(), 2);

        drop(first);
        assert_eq!(loader.unloads.load(Ordering::SeqCst), 0);
        assert!(library.is_loaded());

        drop(second);
        assert_eq!(loader.unloads.load(Ordering::SeqCst), 1);
        assert!(!library.is_loaded());
    }

    #[tokio::test]
    async fn reloads_after_full_release() {
        let loader = Arc::new(CountingLoader::default());
        let library = MapLibrary::new(loader.clone());

        drop(library.acquire().await.unwrap());
        let _again = library.acquire().await.unwrap();
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
        assert_eq!(loader.unloads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_acquires_share_one_load() {
        let loader = Arc::new(CountingLoader::default());
        let library = MapLibrary::new(loader.clone());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let library = Arc::clone(&library);
                tokio::spawn(async move { library.acquire().await })
            })
            .collect();

        let mut handles = Vec::new();
        for task in tasks {
            handles.push(task.await.unwrap().unwrap());
        }
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(library.ref_count(), 8);

        handles.clear();
        assert_eq!(loader.unloads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_counts_nothing() {
        let mut loader = MockMapAssetLoader::new();
        loader
            .expect_load()
            .times(1)
            .returning(|| Err(ApplicationError::ExternalService("404".to_string())));
        loader.expect_unload().never();

        let library = MapLibrary::new(Arc::new(loader));
        let err = library.acquire().await.unwrap_err();
        assert!(matches!(err, ApplicationError::LibraryLoad(_)));
        assert_eq!(library.ref_count(), 0);
    }
}
