//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the payroll
//! endpoints. Inputs are deserialized into these typed structs and
//! validated before any value reaches the calculation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the calculate endpoint.
///
/// Exactly one of `period_id` (actual-attendance mode) or `total_hours`
/// (manual mode) must be supplied; the handler rejects anything else
/// before calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatePayrollRequest {
    /// The staff member to calculate pay for.
    pub staff_id: String,
    /// Period whose attendance is aggregated (actual-attendance mode).
    #[serde(default)]
    pub period_id: Option<String>,
    /// Caller-supplied worked-hours total (manual mode).
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Bonus added to the take-home pay.
    #[serde(default)]
    pub bonus_amount: Decimal,
    /// Deductions subtracted from the take-home pay.
    #[serde(default)]
    pub deductions_amount: Decimal,
}

/// Request body for the detail upsert endpoint.
///
/// Both fields default to zero when the body is omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertDetailRequest {
    /// Bonus added to the take-home pay.
    #[serde(default)]
    pub bonus_amount: Decimal,
    /// Deductions subtracted from the take-home pay.
    #[serde(default)]
    pub deductions_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_period_mode_request() {
        let json = r#"{
            "staff_id": "staff_001",
            "period_id": "period_2026_01",
            "bonus_amount": "50000"
        }"#;

        let request: CalculatePayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.staff_id, "staff_001");
        assert_eq!(request.period_id.as_deref(), Some("period_2026_01"));
        assert!(request.total_hours.is_none());
        assert_eq!(request.bonus_amount, Decimal::from_str("50000").unwrap());
        assert_eq!(request.deductions_amount, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_manual_mode_request() {
        let json = r#"{
            "staff_id": "staff_001",
            "total_hours": "180.5"
        }"#;

        let request: CalculatePayrollRequest = serde_json::from_str(json).unwrap();
        assert!(request.period_id.is_none());
        assert_eq!(
            request.total_hours,
            Some(Decimal::from_str("180.5").unwrap())
        );
    }

    #[test]
    fn test_upsert_request_defaults_to_zero() {
        let request: UpsertDetailRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.bonus_amount, Decimal::ZERO);
        assert_eq!(request.deductions_amount, Decimal::ZERO);
    }
}
