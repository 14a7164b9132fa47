//! Web server module
//!
//! Exposes book search over HTTP as JSON.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
