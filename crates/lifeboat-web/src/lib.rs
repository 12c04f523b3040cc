//! Presentation layer: stateless HTML rendering plus the two-route axum app.

pub mod page;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
