use crate::domain::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A signed sales contract: one client, one lot, one financing plan.
///
/// `total` is the gross contract figure (price per m² times area) before the
/// sales bonus; the bonus and both administrative fees are stored alongside
/// it so the reports can reconstruct the net figures. At most one sale may
/// exist per lot.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Sale {
    pub id: u32,
    pub client_id: u32,
    pub lot_id: u32,
    pub date: NaiveDate,
    pub total: Money,
    pub bonus: Money,
    /// 2% administration fee on the post-bonus total.
    pub admin_fee: Money,
    /// 3% sales commission on the post-bonus total.
    pub sales_fee: Money,
    pub installments: u32,
    pub monthly_payment: Money,
    pub price_per_m2: Money,
}

impl Sale {
    /// Contract figure after the sales bonus, the base for every
    /// percentage downstream.
    pub fn net_total(&self) -> Money {
        self.total - self.bonus
    }

    pub fn is_single_payment(&self) -> bool {
        self.installments == 1
    }
}
