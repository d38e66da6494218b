use crate::domain::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Transfer,
    Cash,
    Cheque,
}

/// A single recorded payment against a sale's outstanding balance.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub id: u32,
    pub sale_id: u32,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub amount: Money,
    #[serde(default)]
    pub note: Option<String>,
}
