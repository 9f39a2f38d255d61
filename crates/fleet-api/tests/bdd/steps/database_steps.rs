//! BDD step definitions for the database registry feature

use cucumber::{given, then, when};
use fleet_api::types::{DatabaseRegisterRequest, DatabaseUpdateRequest, HealthStatus};

use crate::world::FleetWorld;

fn request(
    server_id: i64,
    db_type: String,
    name: String,
    host: String,
    port: u16,
    username: String,
    password: String,
) -> DatabaseRegisterRequest {
    DatabaseRegisterRequest {
        server_id,
        name,
        db_type,
        host,
        port,
        username,
        password,
        database_name: None,
        service_name: None,
    }
}

async fn register(world: &mut FleetWorld, request: DatabaseRegisterRequest) {
    let result = world.client().databases().register(&request).await;
    match result {
        Ok(database) => {
            world.database_id = Some(database.id);
            world.database = Some(database);
            world.last_error = None;
        }
        Err(e) => world.record_error(e),
    }
}

async fn update(world: &mut FleetWorld, patch: DatabaseUpdateRequest) {
    let id = world.database_id();
    let result = world.client().databases().update(id, &patch).await;
    match result {
        Ok(database) => {
            world.database = Some(database);
            world.last_error = None;
        }
        Err(e) => world.record_error(e),
    }
}

#[given(expr = "a registered {string} database named {string}")]
async fn registered_database(world: &mut FleetWorld, db_type: String, name: String) {
    let server_id = world.server_id();
    let request = request(
        server_id,
        db_type,
        name,
        "localhost".to_string(),
        5432,
        "app".to_string(),
        "initial".to_string(),
    );
    register(world, request).await;
    assert!(world.last_error.is_none(), "{:?}", world.last_error);
}

#[when(
    expr = "I register a {string} database named {string} on {string} port {int} as {string} with password {string}"
)]
async fn register_database(
    world: &mut FleetWorld,
    db_type: String,
    name: String,
    host: String,
    port: u16,
    username: String,
    password: String,
) {
    let server_id = world.server_id();
    let request = request(server_id, db_type, name, host, port, username, password);
    register(world, request).await;
}

#[when(expr = "I register a database for server {int}")]
async fn register_for_unknown_server(world: &mut FleetWorld, server_id: i64) {
    let request = request(
        server_id,
        "postgres".to_string(),
        "orphan".to_string(),
        "localhost".to_string(),
        5432,
        "u".to_string(),
        "p".to_string(),
    );
    register(world, request).await;
}

#[when(expr = "I change the database password to {string}")]
async fn change_password(world: &mut FleetWorld, password: String) {
    let patch = DatabaseUpdateRequest {
        password: Some(password),
        ..DatabaseUpdateRequest::default()
    };
    update(world, patch).await;
}

#[when(expr = "I move the database to port {int}")]
async fn change_port(world: &mut FleetWorld, port: u16) {
    let patch = DatabaseUpdateRequest {
        port: Some(port),
        ..DatabaseUpdateRequest::default()
    };
    update(world, patch).await;
}

#[when("I delete the database")]
async fn delete_database(world: &mut FleetWorld) {
    let id = world.database_id();
    world.last_error = world.client().databases().delete(id).await.err();
}

#[when("I list the databases with health")]
async fn list_databases(world: &mut FleetWorld) {
    world.databases = world
        .client()
        .databases()
        .list_with_health()
        .await
        .unwrap();
}

#[then("the database response should not contain a password")]
fn no_password(world: &mut FleetWorld) {
    let database = world.database.as_ref().expect("no database returned");
    let encoded = serde_json::to_value(database).unwrap();
    assert!(encoded.get("password").is_none(), "{encoded}");
}

#[then("the database should have no database name or service name")]
fn no_names(world: &mut FleetWorld) {
    let database = world.database.as_ref().expect("no database returned");
    assert!(database.database_name.is_none());
    assert!(database.service_name.is_none());
}

#[then(expr = "the database port should be {int}")]
fn database_port(world: &mut FleetWorld, expected: u16) {
    let database = world.database.as_ref().expect("no database returned");
    assert_eq!(database.port, expected);
}

#[then(expr = "the database host should be {string}")]
fn database_host(world: &mut FleetWorld, expected: String) {
    let database = world.database.as_ref().expect("no database returned");
    assert_eq!(database.host, expected);
}

#[then(expr = "the backend should hold the password {string}")]
fn backend_password(world: &mut FleetWorld, expected: String) {
    let backend = world.backend.as_ref().expect("backend not started");
    assert_eq!(
        backend.stored_database_password(world.database_id()),
        Some(expected)
    );
}

#[then(expr = "the database listing should contain {int} healthy database(s)")]
fn healthy_count(world: &mut FleetWorld, expected: usize) {
    let healthy = world
        .databases
        .iter()
        .filter(|db| {
            db.health
                .as_ref()
                .is_some_and(|h| h.status == HealthStatus::Healthy && h.is_connected)
        })
        .count();
    assert_eq!(healthy, expected);
}

#[then("the deleted database should not be listed")]
fn deleted_database_absent(world: &mut FleetWorld) {
    let id = world.database_id();
    assert!(world.databases.iter().all(|db| db.database.id != id));
}
