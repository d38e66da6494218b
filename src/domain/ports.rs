use crate::domain::client::Client;
use crate::domain::lot::Lot;
use crate::domain::movement::{CashMovement, ExpenseType};
use crate::domain::payment::Payment;
use crate::domain::sale::Sale;
use crate::error::Result;
use async_trait::async_trait;

pub type ClientStoreBox = Box<dyn ClientStore>;
pub type LotStoreBox = Box<dyn LotStore>;
pub type SaleStoreBox = Box<dyn SaleStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type ExpenseTypeStoreBox = Box<dyn ExpenseTypeStore>;
pub type MovementStoreBox = Box<dyn MovementStore>;

#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn store(&self, client: Client) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<Client>>;
    async fn all(&self) -> Result<Vec<Client>>;
}

#[async_trait]
pub trait LotStore: Send + Sync {
    async fn store(&self, lot: Lot) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<Lot>>;
    async fn all(&self) -> Result<Vec<Lot>>;
    async fn find_by_folio(&self, folio: &str) -> Result<Option<Lot>>;
}

#[async_trait]
pub trait SaleStore: Send + Sync {
    async fn store(&self, sale: Sale) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<Sale>>;
    async fn all(&self) -> Result<Vec<Sale>>;
    async fn find_by_lot(&self, lot_id: u32) -> Result<Option<Sale>>;
    async fn delete(&self, id: u32) -> Result<()>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn by_sale(&self, sale_id: u32) -> Result<Vec<Payment>>;
    async fn all(&self) -> Result<Vec<Payment>>;
    async fn delete_by_sale(&self, sale_id: u32) -> Result<()>;
}

#[async_trait]
pub trait ExpenseTypeStore: Send + Sync {
    async fn store(&self, expense_type: ExpenseType) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<ExpenseType>>;
    async fn all(&self) -> Result<Vec<ExpenseType>>;
    async fn find_by_description(&self, description: &str) -> Result<Option<ExpenseType>>;
    async fn delete(&self, id: u32) -> Result<()>;
}

#[async_trait]
pub trait MovementStore: Send + Sync {
    async fn store(&self, movement: CashMovement) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<CashMovement>>;
    async fn all(&self) -> Result<Vec<CashMovement>>;
    async fn delete(&self, id: u32) -> Result<()>;
}
