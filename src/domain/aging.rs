use crate::domain::money::Money;
use crate::domain::payment::Payment;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Collection-aging bucket for a sale, derived from elapsed days since the
/// last payment (or the sale date when nothing has been paid yet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AgingStatus {
    Paid,
    Current,
    Delinquent { days_late: i64 },
    Overdue { days_late: i64 },
}

impl AgingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgingStatus::Paid => "paid",
            AgingStatus::Current => "current",
            AgingStatus::Delinquent { .. } => "delinquent",
            AgingStatus::Overdue { .. } => "overdue",
        }
    }

    pub fn days_late(&self) -> i64 {
        match self {
            AgingStatus::Paid | AgingStatus::Current => 0,
            AgingStatus::Delinquent { days_late } | AgingStatus::Overdue { days_late } => {
                *days_late
            }
        }
    }
}

/// Schedule status: has the plan been settled against the post-bonus total,
/// and if not, has its installment window already run out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Paid,
    Overdue,
    Pending,
}

impl ScheduleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Paid => "paid",
            ScheduleStatus::Overdue => "overdue",
            ScheduleStatus::Pending => "pending",
        }
    }
}

pub fn total_paid(payments: &[Payment]) -> Money {
    payments.iter().map(|p| p.amount).sum()
}

/// Fraction of the sale total covered by payments, defined as 0 when the
/// total is 0 so the caller never divides by zero.
pub fn paid_fraction(total: Money, payments: &[Payment]) -> Decimal {
    if total.0 == Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_paid(payments).0 / total.0
}

/// Classifies a sale into an aging bucket as of `today`.
///
/// Fully paid sales are `Paid` regardless of dates. Otherwise elapsed days
/// are counted from the most recent payment, falling back to the sale date:
/// up to 30 days is `Current`, 31-60 is `Delinquent`, beyond that `Overdue`.
pub fn classify_aging(
    total: Money,
    payments: &[Payment],
    sale_date: NaiveDate,
    today: NaiveDate,
) -> AgingStatus {
    if paid_fraction(total, payments) >= Decimal::ONE {
        return AgingStatus::Paid;
    }

    let anchor = payments.iter().map(|p| p.date).max().unwrap_or(sale_date);
    let days_late = (today - anchor).num_days();

    if days_late <= 30 {
        AgingStatus::Current
    } else if days_late <= 60 {
        AgingStatus::Delinquent { days_late }
    } else {
        AgingStatus::Overdue { days_late }
    }
}

/// Classifies a sale against its installment schedule as of `today`.
///
/// Settled means payments cover the post-bonus total. An unsettled sale is
/// overdue once today is past the sale date plus the installment count in
/// months, pending otherwise.
pub fn classify_schedule(
    total: Money,
    bonus: Money,
    payments: &[Payment],
    sale_date: NaiveDate,
    installments: u32,
    today: NaiveDate,
) -> ScheduleStatus {
    if total_paid(payments) >= total - bonus {
        return ScheduleStatus::Paid;
    }

    let deadline = sale_date
        .checked_add_months(Months::new(installments))
        .unwrap_or(NaiveDate::MAX);
    if today > deadline {
        ScheduleStatus::Overdue
    } else {
        ScheduleStatus::Pending
    }
}
