//! Web layer for the Light Rail schedule server.
//!
//! Exposes the catalog, per-station boards and route-mode views as a small
//! JSON API.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
