use crate::domain::money::Money;
use crate::error::{Result, SalesError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Income,
    Expense,
}

/// A cash-flow entry (income or expense) in the development's books.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CashMovement {
    pub id: u32,
    pub kind: MovementKind,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default)]
    pub receipt: String,
    pub method: String,
}

impl CashMovement {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(SalesError::validation("movement description is required"));
        }
        if self.method.trim().is_empty() {
            return Err(SalesError::validation("movement payment method is required"));
        }
        if self.amount.0 <= Decimal::ZERO {
            return Err(SalesError::validation("movement amount must be positive"));
        }
        Ok(())
    }
}

/// A catalog entry classifying expenses as fixed or variable.
/// Descriptions are unique across the catalog.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ExpenseType {
    pub id: u32,
    pub description: String,
    pub fixed: bool,
}

impl ExpenseType {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(SalesError::validation(
                "expense type description is required",
            ));
        }
        Ok(())
    }
}
