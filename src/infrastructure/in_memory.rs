use crate::domain::client::Client;
use crate::domain::lot::Lot;
use crate::domain::movement::{CashMovement, ExpenseType};
use crate::domain::payment::Payment;
use crate::domain::ports::{
    ClientStore, ExpenseTypeStore, LotStore, MovementStore, PaymentStore, SaleStore,
};
use crate::domain::sale::Sale;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory client store backed by `Arc<RwLock<HashMap>>`.
#[derive(Default, Clone)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<u32, Client>>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn store(&self, client: Client) -> Result<()> {
        let mut clients = self.clients.write().await;
        clients.insert(client.id, client);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Client>> {
        let clients = self.clients.read().await;
        let mut all: Vec<_> = clients.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryLotStore {
    lots: Arc<RwLock<HashMap<u32, Lot>>>,
}

impl InMemoryLotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LotStore for InMemoryLotStore {
    async fn store(&self, lot: Lot) -> Result<()> {
        let mut lots = self.lots.write().await;
        lots.insert(lot.id, lot);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<Lot>> {
        let lots = self.lots.read().await;
        Ok(lots.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Lot>> {
        let lots = self.lots.read().await;
        let mut all: Vec<_> = lots.values().cloned().collect();
        all.sort_by_key(|l| l.id);
        Ok(all)
    }

    async fn find_by_folio(&self, folio: &str) -> Result<Option<Lot>> {
        let lots = self.lots.read().await;
        Ok(lots.values().find(|l| l.folio == folio).cloned())
    }
}

#[derive(Default, Clone)]
pub struct InMemorySaleStore {
    sales: Arc<RwLock<HashMap<u32, Sale>>>,
}

impl InMemorySaleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaleStore for InMemorySaleStore {
    async fn store(&self, sale: Sale) -> Result<()> {
        let mut sales = self.sales.write().await;
        sales.insert(sale.id, sale);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<Sale>> {
        let sales = self.sales.read().await;
        Ok(sales.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Sale>> {
        let sales = self.sales.read().await;
        let mut all: Vec<_> = sales.values().cloned().collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn find_by_lot(&self, lot_id: u32) -> Result<Option<Sale>> {
        let sales = self.sales.read().await;
        Ok(sales.values().find(|s| s.lot_id == lot_id).cloned())
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let mut sales = self.sales.write().await;
        sales.remove(&id);
        Ok(())
    }
}

/// Payments are keyed by id but always queried by sale, so the map stays
/// flat and `by_sale` filters.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<u32, Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn by_sale(&self, sale_id: u32) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        let mut matching: Vec<_> = payments
            .values()
            .filter(|p| p.sale_id == sale_id)
            .cloned()
            .collect();
        matching.sort_by_key(|p| (p.date, p.id));
        Ok(matching)
    }

    async fn all(&self) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        let mut all: Vec<_> = payments.values().cloned().collect();
        all.sort_by_key(|p| (p.date, p.id));
        Ok(all)
    }

    async fn delete_by_sale(&self, sale_id: u32) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.retain(|_, p| p.sale_id != sale_id);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryExpenseTypeStore {
    expense_types: Arc<RwLock<HashMap<u32, ExpenseType>>>,
}

impl InMemoryExpenseTypeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseTypeStore for InMemoryExpenseTypeStore {
    async fn store(&self, expense_type: ExpenseType) -> Result<()> {
        let mut expense_types = self.expense_types.write().await;
        expense_types.insert(expense_type.id, expense_type);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<ExpenseType>> {
        let expense_types = self.expense_types.read().await;
        Ok(expense_types.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<ExpenseType>> {
        let expense_types = self.expense_types.read().await;
        let mut all: Vec<_> = expense_types.values().cloned().collect();
        all.sort_by_key(|e| e.id);
        Ok(all)
    }

    async fn find_by_description(&self, description: &str) -> Result<Option<ExpenseType>> {
        let expense_types = self.expense_types.read().await;
        Ok(expense_types
            .values()
            .find(|e| e.description == description)
            .cloned())
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let mut expense_types = self.expense_types.write().await;
        expense_types.remove(&id);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryMovementStore {
    movements: Arc<RwLock<HashMap<u32, CashMovement>>>,
}

impl InMemoryMovementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovementStore for InMemoryMovementStore {
    async fn store(&self, movement: CashMovement) -> Result<()> {
        let mut movements = self.movements.write().await;
        movements.insert(movement.id, movement);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<CashMovement>> {
        let movements = self.movements.read().await;
        Ok(movements.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<CashMovement>> {
        let movements = self.movements.read().await;
        let mut all: Vec<_> = movements.values().cloned().collect();
        all.sort_by_key(|m| (m.date, m.id));
        Ok(all)
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let mut movements = self.movements.write().await;
        movements.remove(&id);
        Ok(())
    }
}
