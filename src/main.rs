use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use terraventa::application::dashboard;
use terraventa::application::ledger::SalesLedger;
use terraventa::domain::lot::Lot;
use terraventa::domain::movement::CashMovement;
use terraventa::domain::payment::Payment;
use terraventa::domain::ports::{PaymentStore, SaleStore};
use terraventa::domain::pricing::{self, DownPayment, QuoteInput};
use terraventa::domain::sale::Sale;
use terraventa::infrastructure::in_memory::{
    InMemoryClientStore, InMemoryExpenseTypeStore, InMemoryLotStore, InMemoryMovementStore,
    InMemoryPaymentStore, InMemorySaleStore,
};
use terraventa::interfaces::csv::reader::RecordReader;
use terraventa::interfaces::csv::report_writer::{
    CashFlowWriter, DashboardWriter, StatusReportWriter,
};
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a prospective sale and print the financing breakdown
    Quote {
        /// Base price per m²
        #[arg(long)]
        base_price: Decimal,

        /// Lot area in m²
        #[arg(long)]
        area: Decimal,

        /// Corner-lot surcharge applies
        #[arg(long)]
        corner: bool,

        /// Park-adjacency surcharge applies
        #[arg(long)]
        park: bool,

        /// Grant the fixed sales bonus
        #[arg(long)]
        bonus: bool,

        /// Number of installments (1-36)
        #[arg(long, default_value_t = 12)]
        installments: u32,

        /// Manual down payment; omitted means the automatic 25%
        #[arg(long)]
        down_payment: Option<Decimal>,

        /// Emit the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Payment-status report over sale and payment records
    Report {
        /// Sales CSV file
        #[arg(long)]
        sales: PathBuf,

        /// Payments CSV file
        #[arg(long)]
        payments: PathBuf,

        /// Report date; defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Monthly inflow/outflow totals from the cash-movement book
    Cashflow {
        /// Movements CSV file
        #[arg(long)]
        movements: PathBuf,
    },

    /// Per-owner sales summary with the overall rollup
    Dashboard {
        /// Sales CSV file
        #[arg(long)]
        sales: PathBuf,

        /// Lots CSV file
        #[arg(long)]
        lots: PathBuf,

        /// Payments CSV file
        #[arg(long)]
        payments: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Quote {
            base_price,
            area,
            corner,
            park,
            bonus,
            installments,
            down_payment,
            json,
        } => {
            let quote = pricing::quote(&QuoteInput {
                base_price_per_m2: base_price,
                area,
                corner,
                park,
                sales_bonus: bonus,
                installments,
                down_payment: down_payment.map_or(DownPayment::Automatic, DownPayment::Manual),
            })
            .into_diagnostic()?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&quote).into_diagnostic()?
                );
            } else {
                println!("price per m2:    {}", quote.price_per_m2);
                println!("gross total:     {}", quote.gross_total);
                println!("bonus:           {}", quote.bonus);
                println!("net total:       {}", quote.net_total);
                println!("down payment:    {}", quote.down_payment);
                println!("financed:        {}", quote.financed);
                if quote.single_payment {
                    println!("single payment:  {}", quote.financed);
                } else {
                    println!("monthly payment: {}", quote.monthly_payment);
                }
                println!("admin fee (2%):  {}", quote.admin_fee);
                println!("sales fee (3%):  {}", quote.sales_fee);
            }
        }

        Command::Report {
            sales,
            payments,
            as_of,
        } => {
            let sale_store = InMemorySaleStore::new();
            for sale in read_records::<Sale>(&sales).into_diagnostic()? {
                sale_store.store(sale).await.into_diagnostic()?;
            }
            let payment_store = InMemoryPaymentStore::new();
            for payment in read_records::<Payment>(&payments).into_diagnostic()? {
                payment_store.store(payment).await.into_diagnostic()?;
            }

            let ledger = SalesLedger::new(
                Box::new(InMemoryClientStore::new()),
                Box::new(InMemoryLotStore::new()),
                Box::new(sale_store),
                Box::new(payment_store),
                Box::new(InMemoryExpenseTypeStore::new()),
                Box::new(InMemoryMovementStore::new()),
            );

            let today = as_of.unwrap_or_else(|| Local::now().date_naive());
            let statuses = ledger.sale_statuses(today).await.into_diagnostic()?;

            let stdout = io::stdout();
            let mut writer = StatusReportWriter::new(stdout.lock());
            writer.write_statuses(&statuses).into_diagnostic()?;
        }

        Command::Cashflow { movements } => {
            let movements = read_records::<CashMovement>(&movements).into_diagnostic()?;
            let flows = dashboard::monthly_cash_flow(&movements);

            let stdout = io::stdout();
            let mut writer = CashFlowWriter::new(stdout.lock());
            writer.write_flows(&flows).into_diagnostic()?;
        }

        Command::Dashboard {
            sales,
            lots,
            payments,
        } => {
            let sales = read_records::<Sale>(&sales).into_diagnostic()?;
            let lots = read_records::<Lot>(&lots).into_diagnostic()?;
            let payments = read_records::<Payment>(&payments).into_diagnostic()?;

            let summaries = dashboard::owner_summaries(&sales, &lots, &payments);
            let totals = dashboard::rollup(&summaries);

            let stdout = io::stdout();
            let mut writer = DashboardWriter::new(stdout.lock());
            writer.write_summaries(&summaries).into_diagnostic()?;

            println!();
            println!("lots sold:       {}", totals.lots_sold);
            println!("total sales:     {}", totals.total_sales);
            println!("bonuses:         {}", totals.bonuses);
            println!("total real:      {}", totals.total_real);
            println!("payments:        {}", totals.payments);
            println!("admin fees:      {}", totals.admin_fees);
            println!("sales fees:      {}", totals.sales_fees);
            println!("net payments:    {}", totals.net_payments);
            println!("outstanding:     {}", totals.outstanding);
            println!("paid:            {:.0}%", totals.paid_percentage);
        }
    }

    Ok(())
}

/// Reads every well-formed record from a CSV file, logging and skipping the
/// rows that fail to parse so one bad line never sinks a whole report.
fn read_records<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Vec<T>, terraventa::error::SalesError> {
    let file = File::open(path)?;
    let reader = RecordReader::<_, T>::new(file);
    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!(file = %path.display(), "skipping malformed record: {e}"),
        }
    }
    Ok(records)
}
