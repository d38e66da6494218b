use crate::error::{Result, SalesError};
use serde::{Deserialize, Serialize};

/// A buyer on record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Client {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Required-field check applied before any persistence.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(SalesError::validation(
                "client first and last name are required",
            ));
        }
        Ok(())
    }
}
