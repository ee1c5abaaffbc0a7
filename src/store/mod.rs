//! Storage components for the payroll engine.
//!
//! This module defines the repository traits the engine depends on
//! (dependency-injection seams over the surrounding platform's data store),
//! an in-memory implementation of every trait, and the two stateful
//! components built on top of them: the idempotent payroll detail store and
//! the period finalizer.

mod detail_store;
mod finalizer;
mod memory;
mod repository;

pub use detail_store::{CalculationMode, PayrollDetailStore, UpsertOutcome};
pub use finalizer::PayrollFinalizer;
pub use memory::InMemoryStore;
pub use repository::{
    AttendanceRepository, ExpenseLedger, FinalizationRun, PaySettingRepository,
    PayrollDetailRepository, PayrollPeriodRepository, SalaryRepository, StaffRepository,
};
