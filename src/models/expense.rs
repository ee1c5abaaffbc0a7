//! Ledger expense models.
//!
//! This module defines the financial ledger target of period finalization:
//! [`ExpenseCategory`], [`Expense`], and the [`NewExpense`] rows a finalize
//! run stages before its atomic commit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the per-tenant salary expense category.
pub const SALARY_CATEGORY_NAME: &str = "Gaji";

/// Code of the per-tenant salary expense category.
pub const SALARY_CATEGORY_CODE: &str = "GAJI";

/// How an expense was paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PaymentType {
    /// Paid out in cash. Payroll expenses always use this type.
    Cash,
}

/// A tenant's expense category.
///
/// The salary category ("Gaji" / "GAJI", private) is created on first
/// finalize per tenant and reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Unique identifier for the category.
    pub id: String,
    /// The tenant this category belongs to.
    pub tenant_id: String,
    /// Display name of the category.
    pub name: String,
    /// Short code of the category.
    pub code: String,
    /// Private categories are managed by the system, not the tenant.
    pub is_private: bool,
}

impl ExpenseCategory {
    /// Builds the tenant's salary category with a fresh id.
    pub fn salary_category(id: String, tenant_id: String) -> Self {
        Self {
            id,
            tenant_id,
            name: SALARY_CATEGORY_NAME.to_string(),
            code: SALARY_CATEGORY_CODE.to_string(),
            is_private: true,
        }
    }
}

/// An immutable ledger expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense.
    pub id: String,
    /// The tenant this expense belongs to.
    pub tenant_id: String,
    /// The category this expense is filed under.
    pub category_id: String,
    /// The staff member the expense was paid to.
    pub staff_id: String,
    /// Human-readable description, e.g. `"Gaji - budi"`.
    pub description: String,
    /// The amount paid out.
    pub amount: Decimal,
    /// When the expense was paid.
    pub paid_at: DateTime<Utc>,
    /// How the expense was paid.
    pub payment_type: PaymentType,
}

/// A staged expense row, built by the finalizer and materialized inside the
/// finalization transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    /// The staff member the expense will be paid to.
    pub staff_id: String,
    /// The payroll detail this expense settles.
    pub payroll_detail_id: String,
    /// Human-readable description.
    pub description: String,
    /// The amount to pay out (the detail's take-home pay).
    pub amount: Decimal,
}
