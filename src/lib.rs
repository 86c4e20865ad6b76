//! Static HTTP service registry used as a fixture by service-discovery
//! client integration tests. Serves a fixed record list on three read-only
//! routes; see [`api::routes::router`].

pub mod api;
pub mod config;
pub mod registry;
