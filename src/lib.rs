// Library entry so integration tests can reach the inventory core without a gateway connection.
// The binary (`main.rs`) only wires configuration, logging and the serenity client.
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod model;
pub mod services;

pub use model::AppState;
