pub mod aging;
pub mod client;
pub mod lot;
pub mod money;
pub mod movement;
pub mod payment;
pub mod ports;
pub mod pricing;
pub mod sale;
