//! Shipping REST API Module
//! Address lookup and fee calculation under `/api/shipping`

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
