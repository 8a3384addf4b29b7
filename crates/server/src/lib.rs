pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod middleware;
pub mod observability;
pub mod openapi;

pub use startup::{run, serve_with_shutdown};
pub use state::AppState;
