use crate::error::{Result, SalesError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    Available,
    Sold,
    Reserved,
    Donated,
}

/// A parcel of land in the development.
///
/// `folio` is the business key used on the plot map and in every listing;
/// two lots never share one. Area is in square meters.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Lot {
    pub id: u32,
    pub folio: String,
    pub block: String,
    pub phase: String,
    pub number: String,
    pub area: Decimal,
    pub owner: String,
    pub status: LotStatus,
}

impl Lot {
    pub fn validate(&self) -> Result<()> {
        if self.folio.trim().is_empty() {
            return Err(SalesError::validation("lot folio is required"));
        }
        if self.area <= Decimal::ZERO {
            return Err(SalesError::validation("lot area must be positive"));
        }
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.status == LotStatus::Available
    }
}
