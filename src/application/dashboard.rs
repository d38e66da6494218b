use crate::domain::lot::Lot;
use crate::domain::money::Money;
use crate::domain::movement::{CashMovement, MovementKind};
use crate::domain::payment::Payment;
use crate::domain::sale::Sale;
use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

pub const UNASSIGNED_OWNER: &str = "unassigned";

/// Per-owner sales totals: one row per lot owner on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerSummary {
    pub owner: String,
    pub lots_sold: u32,
    pub total_sales: Money,
    pub bonuses: Money,
    pub admin_fees: Money,
    pub sales_fees: Money,
    pub payments: Money,
}

/// Overall rollup across the selected owners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rollup {
    pub lots_sold: u32,
    pub total_sales: Money,
    pub bonuses: Money,
    /// total_sales minus bonuses.
    pub total_real: Money,
    pub payments: Money,
    pub admin_fees: Money,
    pub sales_fees: Money,
    /// payments minus both fee buckets.
    pub net_payments: Money,
    pub outstanding: Money,
    /// Percent of total_real covered by net payments, 0 when there is
    /// nothing to collect.
    pub paid_percentage: Decimal,
}

/// Inflow/outflow totals for one calendar month of the cash-flow book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    pub inflow: Money,
    pub outflow: Money,
}

/// Groups sales by the owner of the sold lot, attaching each sale's payment
/// total. Sales whose lot is missing land under [`UNASSIGNED_OWNER`].
pub fn owner_summaries(sales: &[Sale], lots: &[Lot], payments: &[Payment]) -> Vec<OwnerSummary> {
    let mut by_owner: BTreeMap<String, OwnerSummary> = BTreeMap::new();

    for sale in sales {
        let owner = lots
            .iter()
            .find(|l| l.id == sale.lot_id)
            .map(|l| l.owner.clone())
            .unwrap_or_else(|| UNASSIGNED_OWNER.to_string());
        let sale_payments: Money = payments
            .iter()
            .filter(|p| p.sale_id == sale.id)
            .map(|p| p.amount)
            .sum();

        let entry = by_owner
            .entry(owner.clone())
            .or_insert_with(|| OwnerSummary {
                owner,
                lots_sold: 0,
                total_sales: Money::ZERO,
                bonuses: Money::ZERO,
                admin_fees: Money::ZERO,
                sales_fees: Money::ZERO,
                payments: Money::ZERO,
            });
        entry.lots_sold += 1;
        entry.total_sales += sale.total;
        entry.bonuses += sale.bonus;
        entry.admin_fees += sale.admin_fee;
        entry.sales_fees += sale.sales_fee;
        entry.payments += sale_payments;
    }

    by_owner.into_values().collect()
}

/// Collapses owner summaries into the dashboard's headline figures.
pub fn rollup(summaries: &[OwnerSummary]) -> Rollup {
    let mut total = Rollup {
        lots_sold: 0,
        total_sales: Money::ZERO,
        bonuses: Money::ZERO,
        total_real: Money::ZERO,
        payments: Money::ZERO,
        admin_fees: Money::ZERO,
        sales_fees: Money::ZERO,
        net_payments: Money::ZERO,
        outstanding: Money::ZERO,
        paid_percentage: Decimal::ZERO,
    };

    for s in summaries {
        total.lots_sold += s.lots_sold;
        total.total_sales += s.total_sales;
        total.bonuses += s.bonuses;
        total.payments += s.payments;
        total.admin_fees += s.admin_fees;
        total.sales_fees += s.sales_fees;
    }

    total.total_real = total.total_sales - total.bonuses;
    total.net_payments = total.payments - total.admin_fees - total.sales_fees;
    total.outstanding = total.total_real - total.net_payments;
    if total.total_real.0 > Decimal::ZERO {
        total.paid_percentage = total.net_payments.0 / total.total_real.0 * dec!(100);
    }
    total
}

/// Buckets movements into calendar months, oldest first.
pub fn monthly_cash_flow(movements: &[CashMovement]) -> Vec<MonthlyFlow> {
    let mut by_month: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

    for m in movements {
        let slot = by_month
            .entry((m.date.year(), m.date.month()))
            .or_insert((Money::ZERO, Money::ZERO));
        match m.kind {
            MovementKind::Income => slot.0 += m.amount,
            MovementKind::Expense => slot.1 += m.amount,
        }
    }

    by_month
        .into_iter()
        .map(|((year, month), (inflow, outflow))| MonthlyFlow {
            year,
            month,
            inflow,
            outflow,
        })
        .collect()
}
