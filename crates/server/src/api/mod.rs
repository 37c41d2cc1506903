pub mod catalog;
pub mod handlers;
pub mod routes;
pub mod suggestions;

pub use routes::create_router;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
