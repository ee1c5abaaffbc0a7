//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation,
//! detail storage, and period finalization.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::StaffNotFound {
///     tenant_id: "tenant_001".to_string(),
///     staff_id: "staff_042".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Staff 'staff_042' not found for tenant 'tenant_001'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A required identifier was missing or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A tenant pay setting contained an invalid value.
    #[error("Invalid pay setting '{field}': {message}")]
    InvalidPaySetting {
        /// The setting field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The staff member does not exist for the tenant.
    #[error("Staff '{staff_id}' not found for tenant '{tenant_id}'")]
    StaffNotFound {
        /// The tenant that was queried.
        tenant_id: String,
        /// The staff id that was not found.
        staff_id: String,
    },

    /// No salary record exists for the staff member.
    #[error("No salary record for staff '{staff_id}'")]
    SalaryNotFound {
        /// The staff id without a salary record.
        staff_id: String,
    },

    /// The payroll period does not exist for the tenant.
    #[error("Payroll period '{period_id}' not found for tenant '{tenant_id}'")]
    PeriodNotFound {
        /// The tenant that was queried.
        tenant_id: String,
        /// The period id that was not found.
        period_id: String,
    },

    /// The period holds no payroll details.
    #[error("No payroll details stored for period '{period_id}'")]
    NoPayrollDetails {
        /// The period id that was queried.
        period_id: String,
    },

    /// The period is already finalized and can no longer be mutated.
    #[error("Payroll period '{period_id}' is already finalized")]
    PeriodFinalized {
        /// The id of the finalized period.
        period_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An unexpected persistence failure. The enclosing transaction is
    /// rolled back completely when this is returned mid-finalize.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
