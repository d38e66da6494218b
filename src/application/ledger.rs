use crate::domain::aging::{self, AgingStatus, ScheduleStatus};
use crate::domain::client::Client;
use crate::domain::lot::{Lot, LotStatus};
use crate::domain::money::{Amount, Money};
use crate::domain::movement::{CashMovement, ExpenseType, MovementKind};
use crate::domain::payment::{Payment, PaymentMethod};
use crate::domain::ports::{
    ClientStoreBox, ExpenseTypeStoreBox, LotStoreBox, MovementStoreBox, PaymentStoreBox,
    SaleStoreBox,
};
use crate::domain::pricing::{self, DownPayment, QuoteInput};
use crate::domain::sale::Sale;
use crate::error::{Result, SalesError};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Request to register a sale. Lot area is read from the lot itself, so the
/// caller only provides the form inputs.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub client_id: u32,
    pub lot_id: u32,
    pub date: NaiveDate,
    pub base_price_per_m2: Decimal,
    pub corner: bool,
    pub park: bool,
    pub sales_bonus: bool,
    pub installments: u32,
    pub down_payment: DownPayment,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub sale_id: u32,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub note: Option<String>,
}

/// The summary cards shown on a sale's payment history screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sale_id: u32,
    pub total: Money,
    pub monthly_payment: Money,
    pub paid: Money,
    pub remaining: Money,
}

/// A sale with both payment-status classifications attached. Computed fresh
/// on every request; neither status is ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleStatus {
    pub sale: Sale,
    pub total_paid: Money,
    pub aging: AgingStatus,
    pub schedule: ScheduleStatus,
}

#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    pub kind: Option<MovementKind>,
    /// Inclusive lower bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to: Option<NaiveDate>,
}

/// Orchestrates every mutation of the books: validates first, persists
/// second, and never retries. Owns the storage backends behind the domain
/// ports.
pub struct SalesLedger {
    clients: ClientStoreBox,
    lots: LotStoreBox,
    sales: SaleStoreBox,
    payments: PaymentStoreBox,
    expense_types: ExpenseTypeStoreBox,
    movements: MovementStoreBox,
}

impl SalesLedger {
    pub fn new(
        clients: ClientStoreBox,
        lots: LotStoreBox,
        sales: SaleStoreBox,
        payments: PaymentStoreBox,
        expense_types: ExpenseTypeStoreBox,
        movements: MovementStoreBox,
    ) -> Self {
        Self {
            clients,
            lots,
            sales,
            payments,
            expense_types,
            movements,
        }
    }

    /// Ledger over fresh in-memory stores.
    pub fn in_memory() -> Self {
        use crate::infrastructure::in_memory::*;
        Self::new(
            Box::new(InMemoryClientStore::new()),
            Box::new(InMemoryLotStore::new()),
            Box::new(InMemorySaleStore::new()),
            Box::new(InMemoryPaymentStore::new()),
            Box::new(InMemoryExpenseTypeStore::new()),
            Box::new(InMemoryMovementStore::new()),
        )
    }

    // ----- clients -----

    pub async fn add_client(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
    ) -> Result<Client> {
        let id = next_id(self.clients.all().await?.iter().map(|c| c.id));
        let client = Client {
            id,
            first_name,
            last_name,
            email,
            phone,
        };
        client.validate()?;
        self.clients.store(client.clone()).await?;
        Ok(client)
    }

    pub async fn update_client(&self, client: Client) -> Result<()> {
        client.validate()?;
        if self.clients.get(client.id).await?.is_none() {
            return Err(SalesError::not_found("client", client.id));
        }
        self.clients.store(client).await
    }

    pub async fn clients(&self) -> Result<Vec<Client>> {
        self.clients.all().await
    }

    /// Case-insensitive search on the full name, as the client screen does.
    pub async fn search_clients(&self, query: &str) -> Result<Vec<Client>> {
        let query = query.to_lowercase();
        Ok(self
            .clients
            .all()
            .await?
            .into_iter()
            .filter(|c| c.full_name().to_lowercase().contains(&query))
            .collect())
    }

    // ----- lots -----

    pub async fn add_lot(&self, mut lot: Lot) -> Result<Lot> {
        lot.id = next_id(self.lots.all().await?.iter().map(|l| l.id));
        lot.validate()?;
        if self.lots.find_by_folio(&lot.folio).await?.is_some() {
            return Err(SalesError::duplicate("lot", lot.folio));
        }
        self.lots.store(lot.clone()).await?;
        Ok(lot)
    }

    pub async fn update_lot(&self, lot: Lot) -> Result<()> {
        lot.validate()?;
        if self.lots.get(lot.id).await?.is_none() {
            return Err(SalesError::not_found("lot", lot.id));
        }
        if let Some(existing) = self.lots.find_by_folio(&lot.folio).await?
            && existing.id != lot.id
        {
            return Err(SalesError::duplicate("lot", lot.folio));
        }
        self.lots.store(lot).await
    }

    pub async fn lots(&self) -> Result<Vec<Lot>> {
        self.lots.all().await
    }

    pub async fn available_lots(&self) -> Result<Vec<Lot>> {
        Ok(self
            .lots
            .all()
            .await?
            .into_iter()
            .filter(Lot::is_available)
            .collect())
    }

    // ----- sales -----

    /// Registers a sale: validates the references and the lot's
    /// availability, prices the contract, persists it and marks the lot
    /// sold. Nothing is written when any validation fails.
    pub async fn create_sale(&self, request: NewSale) -> Result<Sale> {
        if self.clients.get(request.client_id).await?.is_none() {
            return Err(SalesError::not_found("client", request.client_id));
        }
        let mut lot = self
            .lots
            .get(request.lot_id)
            .await?
            .ok_or(SalesError::not_found("lot", request.lot_id))?;
        if !lot.is_available() {
            return Err(SalesError::validation(format!(
                "lot {} is not available",
                lot.folio
            )));
        }
        if self.sales.find_by_lot(lot.id).await?.is_some() {
            return Err(SalesError::duplicate("sale for lot", lot.folio));
        }

        let quote = pricing::quote(&QuoteInput {
            base_price_per_m2: request.base_price_per_m2,
            area: lot.area,
            corner: request.corner,
            park: request.park,
            sales_bonus: request.sales_bonus,
            installments: request.installments,
            down_payment: request.down_payment,
        })?;

        let sale = Sale {
            id: next_id(self.sales.all().await?.iter().map(|s| s.id)),
            client_id: request.client_id,
            lot_id: request.lot_id,
            date: request.date,
            total: quote.gross_total,
            bonus: quote.bonus,
            admin_fee: quote.admin_fee,
            sales_fee: quote.sales_fee,
            installments: request.installments,
            monthly_payment: quote.monthly_payment,
            price_per_m2: quote.price_per_m2,
        };
        self.sales.store(sale.clone()).await?;

        lot.status = LotStatus::Sold;
        self.lots.store(lot).await?;
        Ok(sale)
    }

    /// Removes a sale together with its payment history and returns the lot
    /// to the available pool.
    pub async fn delete_sale(&self, sale_id: u32) -> Result<()> {
        let sale = self
            .sales
            .get(sale_id)
            .await?
            .ok_or(SalesError::not_found("sale", sale_id))?;

        self.payments.delete_by_sale(sale_id).await?;
        self.sales.delete(sale_id).await?;

        if let Some(mut lot) = self.lots.get(sale.lot_id).await? {
            lot.status = LotStatus::Available;
            self.lots.store(lot).await?;
        }
        Ok(())
    }

    pub async fn sales(&self) -> Result<Vec<Sale>> {
        self.sales.all().await
    }

    pub async fn record_payment(&self, request: NewPayment) -> Result<Payment> {
        if self.sales.get(request.sale_id).await?.is_none() {
            return Err(SalesError::not_found("sale", request.sale_id));
        }
        let amount = Amount::new(request.amount)?;
        let payment = Payment {
            id: next_id(self.payments.all().await?.iter().map(|p| p.id)),
            sale_id: request.sale_id,
            date: request.date,
            method: request.method,
            amount: amount.into(),
            note: request.note,
        };
        self.payments.store(payment.clone()).await?;
        Ok(payment)
    }

    pub async fn payments_for(&self, sale_id: u32) -> Result<Vec<Payment>> {
        self.payments.by_sale(sale_id).await
    }

    pub async fn statement(&self, sale_id: u32) -> Result<Statement> {
        let sale = self
            .sales
            .get(sale_id)
            .await?
            .ok_or(SalesError::not_found("sale", sale_id))?;
        let paid = aging::total_paid(&self.payments.by_sale(sale_id).await?);
        Ok(Statement {
            sale_id,
            total: sale.total,
            monthly_payment: sale.monthly_payment,
            paid,
            remaining: sale.total - paid,
        })
    }

    /// Every sale with both classifications, recomputed as of `today`.
    pub async fn sale_statuses(&self, today: NaiveDate) -> Result<Vec<SaleStatus>> {
        let mut statuses = Vec::new();
        for sale in self.sales.all().await? {
            let payments = self.payments.by_sale(sale.id).await?;
            let aging_status = aging::classify_aging(sale.total, &payments, sale.date, today);
            let schedule = aging::classify_schedule(
                sale.total,
                sale.bonus,
                &payments,
                sale.date,
                sale.installments,
                today,
            );
            statuses.push(SaleStatus {
                total_paid: aging::total_paid(&payments),
                sale,
                aging: aging_status,
                schedule,
            });
        }
        Ok(statuses)
    }

    // ----- expense catalog -----

    pub async fn add_expense_type(&self, description: String, fixed: bool) -> Result<ExpenseType> {
        let entry = ExpenseType {
            id: next_id(self.expense_types.all().await?.iter().map(|e| e.id)),
            description,
            fixed,
        };
        entry.validate()?;
        if self
            .expense_types
            .find_by_description(&entry.description)
            .await?
            .is_some()
        {
            return Err(SalesError::duplicate("expense type", entry.description));
        }
        self.expense_types.store(entry.clone()).await?;
        Ok(entry)
    }

    pub async fn update_expense_type(&self, entry: ExpenseType) -> Result<()> {
        entry.validate()?;
        if self.expense_types.get(entry.id).await?.is_none() {
            return Err(SalesError::not_found("expense type", entry.id));
        }
        if let Some(existing) = self
            .expense_types
            .find_by_description(&entry.description)
            .await?
            && existing.id != entry.id
        {
            return Err(SalesError::duplicate("expense type", entry.description));
        }
        self.expense_types.store(entry).await
    }

    pub async fn delete_expense_type(&self, id: u32) -> Result<()> {
        if self.expense_types.get(id).await?.is_none() {
            return Err(SalesError::not_found("expense type", id));
        }
        self.expense_types.delete(id).await
    }

    /// `fixed: None` lists everything, `Some(true)` only fixed expenses,
    /// `Some(false)` only variable ones.
    pub async fn expense_types(&self, fixed: Option<bool>) -> Result<Vec<ExpenseType>> {
        Ok(self
            .expense_types
            .all()
            .await?
            .into_iter()
            .filter(|e| fixed.is_none_or(|f| e.fixed == f))
            .collect())
    }

    // ----- cash movements -----

    pub async fn add_movement(&self, mut movement: CashMovement) -> Result<CashMovement> {
        movement.id = next_id(self.movements.all().await?.iter().map(|m| m.id));
        movement.validate()?;
        self.movements.store(movement.clone()).await?;
        Ok(movement)
    }

    pub async fn update_movement(&self, movement: CashMovement) -> Result<()> {
        movement.validate()?;
        if self.movements.get(movement.id).await?.is_none() {
            return Err(SalesError::not_found("movement", movement.id));
        }
        self.movements.store(movement).await
    }

    pub async fn delete_movement(&self, id: u32) -> Result<()> {
        if self.movements.get(id).await?.is_none() {
            return Err(SalesError::not_found("movement", id));
        }
        self.movements.delete(id).await
    }

    pub async fn movements(&self, filter: &MovementFilter) -> Result<Vec<CashMovement>> {
        Ok(self
            .movements
            .all()
            .await?
            .into_iter()
            .filter(|m| {
                filter.kind.is_none_or(|k| m.kind == k)
                    && filter.from.is_none_or(|from| m.date >= from)
                    && filter.to.is_none_or(|to| m.date <= to)
            })
            .collect())
    }
}

fn next_id(existing: impl Iterator<Item = u32>) -> u32 {
    existing.max().map_or(1, |max| max + 1)
}
