// ABOUTME: Library entry point for the lectern HTTP service.
// ABOUTME: Exposes the router, response envelope, and OpenAPI document builder.

pub mod docs;
pub mod response;
pub mod routes;

pub use crate::docs::openapi_document;
pub use crate::response::ServiceResponse;
pub use crate::routes::{router, AppState};
