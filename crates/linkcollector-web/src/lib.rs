//! LinkCollector HTTP front-end
//!
//! Routes, cookie sessions and error mapping on top of the
//! `linkcollector-core` repository. Views are returned as JSON.

pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
