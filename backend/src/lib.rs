//! HTTP service exposing CRUD operations on items under `/api/items`.

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod schema;
pub mod store;
pub mod validation;

use crate::gateway::ItemGateway;

/// Shared by every request. Built once at startup and never reassigned.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemGateway,
}
