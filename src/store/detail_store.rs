//! Idempotent payroll detail storage.
//!
//! [`PayrollDetailStore`] is the write path for payroll calculations: it
//! validates the (tenant, period, staff) key, runs the calculator, and
//! stores the result as exactly one row per key — created on first
//! calculation, overwritten in place on every recalculation while the
//! period is open. It is the only source of truth finalization reads from.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{
    OvertimeRates, aggregate_worked_days, calculate_from_attendance, calculate_from_total_hours,
};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayBreakdown, PaySetting, PayrollDetail, Salary, Staff};

use super::repository::{
    AttendanceRepository, PaySettingRepository, PayrollDetailRepository, PayrollPeriodRepository,
    SalaryRepository, StaffRepository,
};

/// How a payroll calculation sources its worked hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationMode {
    /// Aggregate actual attendance over a stored period.
    ForPeriod {
        /// The period whose attendance is aggregated.
        period_id: String,
    },
    /// Price a caller-supplied hours total against the monthly threshold.
    ManualHours {
        /// The worked-hours total supplied by the caller.
        total_hours: Decimal,
    },
}

/// The result of an upsert: the stored detail plus whether it was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// The detail row as stored.
    pub detail: PayrollDetail,
    /// True when a new row was created, false when overwritten in place.
    pub created: bool,
}

/// Calculates pay breakdowns and stores them idempotently per
/// (tenant, period, staff) key.
pub struct PayrollDetailStore {
    staff: Arc<dyn StaffRepository>,
    salaries: Arc<dyn SalaryRepository>,
    settings: Arc<dyn PaySettingRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    periods: Arc<dyn PayrollPeriodRepository>,
    details: Arc<dyn PayrollDetailRepository>,
    default_setting: PaySetting,
}

impl PayrollDetailStore {
    /// Creates a store over the given repositories.
    ///
    /// `default_setting` is used for tenants without a stored pay setting.
    pub fn new(
        staff: Arc<dyn StaffRepository>,
        salaries: Arc<dyn SalaryRepository>,
        settings: Arc<dyn PaySettingRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        periods: Arc<dyn PayrollPeriodRepository>,
        details: Arc<dyn PayrollDetailRepository>,
        default_setting: PaySetting,
    ) -> Self {
        Self {
            staff,
            salaries,
            settings,
            attendance,
            periods,
            details,
            default_setting,
        }
    }

    /// Calculates a pay breakdown without storing anything.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::MissingField`] for empty identifiers
    /// - [`PayrollError::StaffNotFound`] / [`PayrollError::SalaryNotFound`]
    /// - [`PayrollError::PeriodNotFound`] in period mode
    pub fn calculate(
        &self,
        tenant_id: &str,
        staff_id: &str,
        mode: &CalculationMode,
        bonus_amount: Decimal,
        deductions_amount: Decimal,
    ) -> PayrollResult<PayBreakdown> {
        require_field("tenant_id", tenant_id)?;
        require_field("staff_id", staff_id)?;

        let staff = self.require_staff(tenant_id, staff_id)?;
        let (salary, rates) = self.resolve_rates(tenant_id, &staff)?;

        match mode {
            CalculationMode::ForPeriod { period_id } => {
                require_field("period_id", period_id)?;
                let period = self.require_period(tenant_id, period_id)?;
                let records = self.attendance.list_attendance(
                    tenant_id,
                    staff_id,
                    period.period_start,
                    period.period_end,
                )?;
                let summary =
                    aggregate_worked_days(&records, period.period_start, period.period_end);
                Ok(calculate_from_attendance(
                    &summary,
                    &rates,
                    &salary,
                    bonus_amount,
                    deductions_amount,
                ))
            }
            CalculationMode::ManualHours { total_hours } => Ok(calculate_from_total_hours(
                *total_hours,
                &rates,
                &salary,
                bonus_amount,
                deductions_amount,
            )),
        }
    }

    /// Calculates and stores the detail row for a (tenant, period, staff)
    /// key: creates the row on first calculation, overwrites it in place on
    /// recalculation. Exactly one row exists per key afterwards.
    ///
    /// # Errors
    ///
    /// In addition to the [`PayrollDetailStore::calculate`] errors, returns
    /// [`PayrollError::PeriodFinalized`] when the owning period is closed.
    pub fn upsert(
        &self,
        tenant_id: &str,
        period_id: &str,
        staff_id: &str,
        bonus_amount: Decimal,
        deductions_amount: Decimal,
    ) -> PayrollResult<UpsertOutcome> {
        require_field("tenant_id", tenant_id)?;
        require_field("period_id", period_id)?;
        require_field("staff_id", staff_id)?;

        self.require_staff(tenant_id, staff_id)?;
        let period = self.require_period(tenant_id, period_id)?;
        if period.is_finalized {
            return Err(PayrollError::PeriodFinalized {
                period_id: period_id.to_string(),
            });
        }

        let breakdown = self.calculate(
            tenant_id,
            staff_id,
            &CalculationMode::ForPeriod {
                period_id: period_id.to_string(),
            },
            bonus_amount,
            deductions_amount,
        )?;

        let existing = self.details.find_detail(tenant_id, period_id, staff_id)?;
        let (detail, created) = match existing {
            Some(mut detail) => {
                detail.apply_breakdown(&breakdown);
                (detail, false)
            }
            None => (
                PayrollDetail::from_breakdown(
                    Uuid::new_v4().to_string(),
                    tenant_id.to_string(),
                    period_id.to_string(),
                    staff_id.to_string(),
                    &breakdown,
                ),
                true,
            ),
        };
        self.details.save_detail(&detail)?;

        info!(
            tenant_id,
            period_id,
            staff_id,
            created,
            take_home_pay = %detail.take_home_pay,
            "Stored payroll detail"
        );

        Ok(UpsertOutcome { detail, created })
    }

    /// Lists the stored details of a period.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::NoPayrollDetails`] when the period exists but
    /// holds no details.
    pub fn list(&self, tenant_id: &str, period_id: &str) -> PayrollResult<Vec<PayrollDetail>> {
        require_field("tenant_id", tenant_id)?;
        require_field("period_id", period_id)?;

        self.require_period(tenant_id, period_id)?;
        let details = self.details.list_details(tenant_id, period_id)?;
        if details.is_empty() {
            return Err(PayrollError::NoPayrollDetails {
                period_id: period_id.to_string(),
            });
        }
        Ok(details)
    }

    fn require_staff(&self, tenant_id: &str, staff_id: &str) -> PayrollResult<Staff> {
        self.staff
            .find_staff(tenant_id, staff_id)?
            .ok_or_else(|| PayrollError::StaffNotFound {
                tenant_id: tenant_id.to_string(),
                staff_id: staff_id.to_string(),
            })
    }

    fn require_period(
        &self,
        tenant_id: &str,
        period_id: &str,
    ) -> PayrollResult<crate::models::PayrollPeriod> {
        self.periods
            .find_period(tenant_id, period_id)?
            .ok_or_else(|| PayrollError::PeriodNotFound {
                tenant_id: tenant_id.to_string(),
                period_id: period_id.to_string(),
            })
    }

    fn resolve_rates(
        &self,
        tenant_id: &str,
        staff: &Staff,
    ) -> PayrollResult<(Salary, OvertimeRates)> {
        let salary = self
            .salaries
            .find_salary(&staff.id)?
            .ok_or_else(|| PayrollError::SalaryNotFound {
                staff_id: staff.id.clone(),
            })?;
        let setting = self
            .settings
            .find_setting(tenant_id)?
            .unwrap_or_else(|| self.default_setting.clone());
        let rates = OvertimeRates::resolve(&setting, &salary)?;
        Ok((salary, rates))
    }
}

fn require_field(field: &str, value: &str) -> PayrollResult<()> {
    if value.trim().is_empty() {
        return Err(PayrollError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, PayrollPeriod};
    use crate::store::InMemoryStore;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn seeded_store() -> (Arc<InMemoryStore>, PayrollDetailStore) {
        let store = Arc::new(InMemoryStore::new());
        store.insert_staff(Staff {
            id: "staff_001".to_string(),
            tenant_id: "tenant_001".to_string(),
            username: "budi".to_string(),
        });
        store.insert_salary(Salary {
            staff_id: "staff_001".to_string(),
            basic_salary: dec("1600000"),
            fixed_allowance: Decimal::ZERO,
        });
        store.insert_setting(
            "tenant_001",
            PaySetting {
                normal_work_hours_per_day: dec("8"),
                normal_work_hours_per_month: dec("160"),
                ..PaySetting::default()
            },
        );
        store.insert_period(PayrollPeriod {
            id: "period_001".to_string(),
            tenant_id: "tenant_001".to_string(),
            period_start: date(1),
            period_end: date(31),
            is_finalized: false,
        });

        let details = PayrollDetailStore::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            PaySetting::default(),
        );
        (store, details)
    }

    fn seed_attendance(store: &InMemoryStore, day: u32, hours: &str) {
        store.insert_attendance(AttendanceRecord {
            tenant_id: "tenant_001".to_string(),
            staff_id: "staff_001".to_string(),
            date: date(day),
            check_in_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            check_out_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
            total_hours: Some(dec(hours)),
        });
    }

    // ==========================================================================
    // DS-001: upsert creates on first call, updates on the second
    // ==========================================================================
    #[test]
    fn test_ds_001_upsert_idempotent() {
        let (store, details) = seeded_store();
        seed_attendance(&store, 5, "10"); // 2h weekday overtime

        let first = details
            .upsert("tenant_001", "period_001", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap();
        let second = details
            .upsert("tenant_001", "period_001", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        // Unchanged inputs produce an identical row, same id included.
        assert_eq!(first.detail, second.detail);
        assert_eq!(
            store.list_details("tenant_001", "period_001").unwrap().len(),
            1
        );
    }

    // ==========================================================================
    // DS-002: upsert recalculates when attendance changed
    // ==========================================================================
    #[test]
    fn test_ds_002_upsert_overwrites_on_new_attendance() {
        let (store, details) = seeded_store();
        seed_attendance(&store, 5, "8");

        let first = details
            .upsert("tenant_001", "period_001", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap();
        seed_attendance(&store, 6, "10");
        let second = details
            .upsert("tenant_001", "period_001", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap();

        assert_eq!(first.detail.total_hours, dec("8"));
        assert_eq!(second.detail.total_hours, dec("18"));
        assert_eq!(second.detail.id, first.detail.id);
        assert_eq!(second.detail.overtime_pay, dec("35000.00"));
    }

    // ==========================================================================
    // DS-003: missing staff and period map to not-found errors
    // ==========================================================================
    #[test]
    fn test_ds_003_not_found_errors() {
        let (_store, details) = seeded_store();

        let err = details
            .upsert("tenant_001", "period_001", "staff_404", Decimal::ZERO, Decimal::ZERO)
            .unwrap_err();
        assert!(matches!(err, PayrollError::StaffNotFound { .. }));

        let err = details
            .upsert("tenant_001", "period_404", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap_err();
        assert!(matches!(err, PayrollError::PeriodNotFound { .. }));
    }

    // ==========================================================================
    // DS-004: upsert against a finalized period conflicts
    // ==========================================================================
    #[test]
    fn test_ds_004_upsert_rejected_when_finalized() {
        let (store, details) = seeded_store();
        store.insert_period(PayrollPeriod {
            id: "period_001".to_string(),
            tenant_id: "tenant_001".to_string(),
            period_start: date(1),
            period_end: date(31),
            is_finalized: true,
        });

        let err = details
            .upsert("tenant_001", "period_001", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap_err();
        assert!(matches!(err, PayrollError::PeriodFinalized { .. }));
    }

    // ==========================================================================
    // DS-005: calculate in manual mode needs no period
    // ==========================================================================
    #[test]
    fn test_ds_005_manual_mode_calculation() {
        let (_store, details) = seeded_store();

        let breakdown = details
            .calculate(
                "tenant_001",
                "staff_001",
                &CalculationMode::ManualHours {
                    total_hours: dec("162"),
                },
                Decimal::ZERO,
                Decimal::ZERO,
            )
            .unwrap();

        // hourly = 1600000/160 = 10000; 2h over the 160h threshold:
        // 10000x1x1.5 + 10000x1x2 = 35000
        assert_eq!(breakdown.overtime_hours, dec("2"));
        assert_eq!(breakdown.overtime_pay, dec("35000.00"));
    }

    #[test]
    fn test_calculate_missing_salary() {
        let (store, details) = seeded_store();
        store.insert_staff(Staff {
            id: "staff_002".to_string(),
            tenant_id: "tenant_001".to_string(),
            username: "sari".to_string(),
        });

        let err = details
            .calculate(
                "tenant_001",
                "staff_002",
                &CalculationMode::ManualHours {
                    total_hours: dec("160"),
                },
                Decimal::ZERO,
                Decimal::ZERO,
            )
            .unwrap_err();
        assert!(matches!(err, PayrollError::SalaryNotFound { .. }));
    }

    #[test]
    fn test_calculate_empty_tenant_id_rejected() {
        let (_store, details) = seeded_store();

        let err = details
            .calculate(
                "",
                "staff_001",
                &CalculationMode::ManualHours {
                    total_hours: dec("160"),
                },
                Decimal::ZERO,
                Decimal::ZERO,
            )
            .unwrap_err();
        assert!(matches!(err, PayrollError::MissingField { .. }));
    }

    #[test]
    fn test_missing_setting_falls_back_to_default() {
        let (store, details) = seeded_store();
        // A tenant with staff and salary but no stored setting.
        store.insert_staff(Staff {
            id: "staff_009".to_string(),
            tenant_id: "tenant_002".to_string(),
            username: "tono".to_string(),
        });
        store.insert_salary(Salary {
            staff_id: "staff_009".to_string(),
            basic_salary: dec("1730000"),
            fixed_allowance: Decimal::ZERO,
        });

        let breakdown = details
            .calculate(
                "tenant_002",
                "staff_009",
                &CalculationMode::ManualHours {
                    total_hours: dec("100"),
                },
                Decimal::ZERO,
                Decimal::ZERO,
            )
            .unwrap();

        // Defaults divide by 173 hours per month.
        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        assert_eq!(breakdown.take_home_pay, dec("1730000.00"));
    }

    #[test]
    fn test_list_empty_period_is_not_found() {
        let (_store, details) = seeded_store();
        let err = details.list("tenant_001", "period_001").unwrap_err();
        assert!(matches!(err, PayrollError::NoPayrollDetails { .. }));
    }

    #[test]
    fn test_list_returns_stored_details() {
        let (store, details) = seeded_store();
        seed_attendance(&store, 5, "8");
        details
            .upsert("tenant_001", "period_001", "staff_001", Decimal::ZERO, Decimal::ZERO)
            .unwrap();

        let listed = details.list("tenant_001", "period_001").unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].invariant_holds());
    }

    #[test]
    fn test_upsert_applies_bonus_and_deductions() {
        let (store, details) = seeded_store();
        seed_attendance(&store, 5, "8");

        let outcome = details
            .upsert(
                "tenant_001",
                "period_001",
                "staff_001",
                dec("200000"),
                dec("50000"),
            )
            .unwrap();

        assert_eq!(outcome.detail.bonus_amount, dec("200000.00"));
        assert_eq!(outcome.detail.deductions_amount, dec("50000.00"));
        assert_eq!(outcome.detail.take_home_pay, dec("1750000.00"));
        assert!(outcome.detail.invariant_holds());
    }
}
