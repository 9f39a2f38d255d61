//! BDD steps shared by every feature

use std::sync::Arc;

use cucumber::{given, then};
use fleet_api::io::HttpClient;
use fleet_api::{ApiClient, ApiError};

use crate::fake_backend::FakeBackend;
use crate::world::FleetWorld;

#[given("a running fleet backend")]
fn running_backend(world: &mut FleetWorld) {
    let backend = Arc::new(FakeBackend::new());
    let http: Arc<dyn HttpClient> = backend.clone();
    world.client = Some(ApiClient::with_transport(http));
    world.backend = Some(backend);
}

#[then("the operation should succeed")]
fn operation_succeeds(world: &mut FleetWorld) {
    if let Some(err) = &world.last_error {
        panic!("expected success, got {err:?}");
    }
}

#[then(expr = "the operation should fail with {string}")]
fn operation_fails_with(world: &mut FleetWorld, kind: String) {
    let err = world.last_error.as_ref().expect("operation did not fail");
    let matches = match kind.as_str() {
        "not found" => matches!(err, ApiError::NotFound { .. }),
        "conflict" => matches!(err, ApiError::Conflict { .. }),
        "validation" => matches!(err, ApiError::Validation { .. }),
        other => panic!("Unknown error kind: {}", other),
    };
    assert!(matches, "expected {kind}, got {err:?}");
}
