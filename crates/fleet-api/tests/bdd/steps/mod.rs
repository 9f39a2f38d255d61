//! BDD step definitions for the fleet API client

pub mod common_steps;
pub mod database_steps;
pub mod server_steps;
