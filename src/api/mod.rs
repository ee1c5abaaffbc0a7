//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating payroll,
//! storing payroll details, and finalizing payroll periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculatePayrollRequest, UpsertDetailRequest};
pub use response::ApiError;
pub use state::AppState;
