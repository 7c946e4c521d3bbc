use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use crate::source::{DeviceFix, StaticPositionSource};

use super::*;

/// A source that replays a fixed response and counts how often it is asked.
struct ScriptedSource {
    response: Result<DeviceFix, PositionFault>,
    permission: PermissionState,
    calls: Arc<AtomicU32>,
}

impl ScriptedSource {
    fn ok(latitude: f64, longitude: f64, calls: Arc<AtomicU32>) -> Self {
        Self {
            response: Ok(DeviceFix {
                latitude,
                longitude,
                accuracy_meters: 10.0,
            }),
            permission: PermissionState::Granted,
            calls,
        }
    }

    fn failing(fault: PositionFault, calls: Arc<AtomicU32>) -> Self {
        Self {
            response: Err(fault),
            permission: PermissionState::Denied,
            calls,
        }
    }
}

impl PositionSource for ScriptedSource {
    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<DeviceFix, PositionFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    async fn permission_state(&self) -> PermissionState {
        self.permission
    }
}

fn scratch_store() -> (TempDir, CacheStore) {
    let dir = tempfile::tempdir().expect("failed to create scratch dir");
    let store = CacheStore::open(dir.path());
    (dir, store)
}

fn cached_location(store: &CacheStore, latitude: f64, longitude: f64) -> UserLocation {
    let coordinates = Coordinates::new(latitude, longitude).unwrap();
    let location = UserLocation::new(coordinates, 25.0, Utc::now()).unwrap();
    store.set_location(&location, DEFAULT_LOCATION_TTL);
    location
}

#[tokio::test]
async fn cached_location_short_circuits_the_source() {
    let (_dir, store) = scratch_store();
    let cached = cached_location(&store, 40.7, -74.0);

    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::failing(
        PositionFault::Unavailable("should not be asked".into()),
        Arc::clone(&calls),
    );
    let provider = LocationProvider::new(source, store);

    let result = provider.current_position(false).await;
    assert_eq!(result.unwrap(), cached);
    assert_eq!(
        calls.load(Ordering::SeqCst),
        0,
        "a cached location must not trigger a device query"
    );
}

#[tokio::test]
async fn force_refresh_bypasses_and_overwrites_the_cache() {
    let (_dir, store) = scratch_store();
    cached_location(&store, 40.7, -74.0);

    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::ok(51.5, -0.13, Arc::clone(&calls));
    let provider = LocationProvider::new(source, store.clone());

    let fresh = provider.current_position(true).await.unwrap();
    assert_eq!(fresh.coordinates.latitude, 51.5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The fresh fix replaces the previously cached one.
    assert_eq!(store.location(), Some(fresh));
}

#[tokio::test]
async fn fresh_acquisition_is_persisted_with_the_cache_ttl() {
    let (_dir, store) = scratch_store();

    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::ok(48.85, 2.35, Arc::clone(&calls));
    let provider = LocationProvider::new(source, store.clone());

    assert!(!provider.has_cached_location());
    let acquired = provider.current_position(false).await.unwrap();
    assert_eq!(store.location(), Some(acquired));
    assert!(provider.has_cached_location());

    // A second call is now served from the cache.
    let again = provider.current_position(false).await.unwrap();
    assert_eq!(again, acquired);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn permission_denied_fault_classifies_as_code_1() {
    let (_dir, store) = scratch_store();
    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::failing(
        PositionFault::PermissionDenied("user said no".into()),
        calls,
    );
    let provider = LocationProvider::new(source, store);

    let err = provider.current_position(false).await.unwrap_err();
    assert_eq!(err.code(), 1);
    assert!(matches!(err, LocationError::PermissionDenied(_)));
}

#[tokio::test]
async fn timeout_fault_classifies_as_code_3() {
    let (_dir, store) = scratch_store();
    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::failing(PositionFault::TimedOut("10s elapsed".into()), calls);
    let provider = LocationProvider::new(source, store);

    let err = provider.current_position(false).await.unwrap_err();
    assert_eq!(err.code(), 3);
}

#[tokio::test]
async fn unsupported_platform_classifies_as_unavailable() {
    let (_dir, store) = scratch_store();
    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::failing(
        PositionFault::Unsupported("no location hardware".into()),
        calls,
    );
    let provider = LocationProvider::new(source, store);

    let err = provider.current_position(false).await.unwrap_err();
    assert_eq!(err.code(), 2);
    assert!(matches!(err, LocationError::Unavailable(_)));
}

#[tokio::test]
async fn user_messages_are_distinct_per_classification() {
    let denied = LocationError::PermissionDenied("x".into());
    let unavailable = LocationError::Unavailable("x".into());
    let timed_out = LocationError::TimedOut("x".into());

    assert_ne!(denied.user_message(), unavailable.user_message());
    assert_ne!(denied.user_message(), timed_out.user_message());
    assert_ne!(unavailable.user_message(), timed_out.user_message());
}

#[tokio::test]
async fn cached_position_is_a_pure_read() {
    let (_dir, store) = scratch_store();
    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::failing(
        PositionFault::Unavailable("should not be asked".into()),
        Arc::clone(&calls),
    );
    let provider = LocationProvider::new(source, store.clone());

    assert_eq!(provider.cached_position(), None);
    let cached = cached_location(&store, 35.68, 139.69);
    assert_eq!(provider.cached_position(), Some(cached));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn check_permission_reports_the_source_state() {
    let (_dir, store) = scratch_store();
    let calls = Arc::new(AtomicU32::new(0));
    let source = ScriptedSource::ok(0.0, 0.0, calls);
    let provider = LocationProvider::new(source, store);

    assert_eq!(provider.check_permission().await, PermissionState::Granted);
}

#[tokio::test]
async fn static_source_reports_its_coordinates() {
    let (_dir, store) = scratch_store();
    let provider = LocationProvider::new(StaticPositionSource::new(59.33, 18.07), store);

    let location = provider.current_position(false).await.unwrap();
    assert_eq!(location.coordinates.latitude, 59.33);
    assert_eq!(location.coordinates.longitude, 18.07);
    assert_eq!(location.accuracy_meters, 0.0);
}
