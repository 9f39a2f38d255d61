//! BDD step definitions for the server registry feature

use cucumber::{given, then, when};
use fleet_api::types::{HealthStatus, ServerRegisterRequest, ServerStatus, ServerUpdateRequest};

use crate::world::FleetWorld;

async fn register(world: &mut FleetWorld, request: ServerRegisterRequest) {
    let result = world.client().servers().register(&request).await;
    match result {
        Ok(server) => {
            world.server_id = Some(server.id);
            world.server = Some(server);
            world.last_error = None;
        }
        Err(e) => world.record_error(e),
    }
}

async fn update(world: &mut FleetWorld, patch: ServerUpdateRequest) {
    let id = world.server_id();
    let result = world.client().servers().update(id, &patch).await;
    match result {
        Ok(server) => {
            world.server = Some(server);
            world.last_error = None;
        }
        Err(e) => world.record_error(e),
    }
}

fn parse_status(status: &str) -> ServerStatus {
    status.parse().unwrap_or_else(|e| panic!("{}", e))
}

#[given(expr = "a registered server named {string} at {string}")]
async fn registered_server(world: &mut FleetWorld, name: String, ip_address: String) {
    register(
        world,
        ServerRegisterRequest::new(1, name, "secret", ip_address, 22),
    )
    .await;
    assert!(world.last_error.is_none(), "{:?}", world.last_error);
}

#[when(expr = "I register a server named {string} at {string} port {int} with password {string}")]
async fn register_server(
    world: &mut FleetWorld,
    name: String,
    ip_address: String,
    port: u16,
    password: String,
) {
    register(
        world,
        ServerRegisterRequest::new(1, name, password, ip_address, port),
    )
    .await;
}

#[when(expr = "I register a server named {string} at {string} port {int} with status {string}")]
async fn register_server_with_status(
    world: &mut FleetWorld,
    name: String,
    ip_address: String,
    port: u16,
    status: String,
) {
    let request = ServerRegisterRequest::new(1, name, "secret", ip_address, port)
        .with_status(parse_status(&status));
    register(world, request).await;
}

#[when(expr = "I set the server status to {string}")]
async fn set_status(world: &mut FleetWorld, status: String) {
    update(world, ServerUpdateRequest::status(parse_status(&status))).await;
}

#[when(expr = "I rename the server to {string}")]
async fn rename(world: &mut FleetWorld, name: String) {
    let patch = ServerUpdateRequest {
        name: Some(name),
        ..ServerUpdateRequest::default()
    };
    update(world, patch).await;
}

#[when("I delete the server")]
async fn delete_server(world: &mut FleetWorld) {
    let id = world.server_id();
    world.last_error = world.client().servers().delete(id).await.err();
}

#[when("I list the servers")]
async fn list_servers(world: &mut FleetWorld) {
    world.servers = world.client().servers().list().await.unwrap();
}

#[when("I list the servers with containers")]
async fn list_with_containers(world: &mut FleetWorld) {
    world.server_views = world
        .client()
        .servers()
        .list_with_containers()
        .await
        .unwrap();
}

#[when("I collect containers for the server")]
async fn collect_containers(world: &mut FleetWorld) {
    let id = world.server_id();
    let result = world.client().servers().collect_containers(id).await;
    match result {
        Ok(view) => {
            world.server_views = vec![view];
            world.last_error = None;
        }
        Err(e) => world.record_error(e),
    }
}

#[when("I run a full monitoring sweep")]
async fn collect_all(world: &mut FleetWorld) {
    world.sweep = world.client().servers().collect_all().await.unwrap();
}

#[then(expr = "the server should be named {string}")]
fn server_named(world: &mut FleetWorld, expected: String) {
    let server = world.server.as_ref().expect("no server returned");
    assert_eq!(server.name, expected);
}

#[then(expr = "the server address should be {string} port {int}")]
fn server_address(world: &mut FleetWorld, ip_address: String, port: u16) {
    let server = world.server.as_ref().expect("no server returned");
    assert_eq!(server.ip_address, ip_address);
    assert_eq!(server.port, port);
}

#[then(expr = "the server status should be {string}")]
fn server_status(world: &mut FleetWorld, expected: String) {
    let server = world.server.as_ref().expect("no server returned");
    assert_eq!(server.status, parse_status(&expected));
}

#[then("the server password should not be returned in plaintext")]
fn password_encrypted(world: &mut FleetWorld) {
    let server = world.server.as_ref().expect("no server returned");
    assert_ne!(server.password.as_deref(), Some("x"));
}

#[then(expr = "the server list should contain {int} server(s)")]
fn server_count(world: &mut FleetWorld, expected: usize) {
    assert_eq!(world.servers.len(), expected);
}

#[then("the deleted server should not be listed")]
fn deleted_server_absent(world: &mut FleetWorld) {
    let id = world.server_id();
    assert!(world.servers.iter().all(|s| s.id != id));
}

#[then(expr = "every server should report {int} container(s)")]
fn containers_per_server(world: &mut FleetWorld, expected: usize) {
    assert!(!world.server_views.is_empty());
    for view in &world.server_views {
        assert_eq!(view.containers.len(), expected, "{}", view.server.name);
        assert!(view.containers.iter().all(|c| c.server_id == view.server.id));
    }
}

#[then(expr = "the server health should be {string}")]
fn server_health(world: &mut FleetWorld, expected: String) {
    let view = world.server_views.first().expect("no server view");
    let health = view.health.as_ref().expect("no health sample");
    let expected = match expected.as_str() {
        "healthy" => HealthStatus::Healthy,
        "unhealthy" => HealthStatus::Unhealthy,
        "offline" => HealthStatus::Offline,
        "error" => HealthStatus::Error,
        other => panic!("Unknown health status: {}", other),
    };
    assert_eq!(health.status, expected);
}

#[then(expr = "the sweep should cover {int} server(s)")]
fn sweep_size(world: &mut FleetWorld, expected: usize) {
    assert_eq!(world.sweep.len(), expected);
}

#[then(expr = "the sweep should list {int} connected database(s) for {string}")]
fn sweep_databases(world: &mut FleetWorld, expected: usize, server_name: String) {
    let entry = world
        .sweep
        .iter()
        .find(|entry| entry.server.name == server_name)
        .unwrap_or_else(|| panic!("{} missing from sweep", server_name));
    assert_eq!(entry.connected_databases().count(), expected);
}
