pub mod dashboard;
pub mod ledger;
