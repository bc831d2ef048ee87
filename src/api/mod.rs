//! HTTP API module for the Gratuity Engine.
//!
//! This module provides the REST endpoints for recording employees and
//! computing their gratuity entitlement.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateEmployeeRequest, GratuityRequest, StatementQuery};
pub use response::{ApiError, GratuityResponse, HealthResponse};
pub use state::AppState;
