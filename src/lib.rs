//! Payroll Calculation & Finalization Engine
//!
//! This crate computes tiered, overtime-aware take-home pay for staff members
//! of a multi-tenant back office, stores the results idempotently per pay
//! period, and finalizes periods by converting every stored payroll detail
//! into immutable ledger expense entries.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
