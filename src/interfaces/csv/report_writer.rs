use crate::application::dashboard::{MonthlyFlow, OwnerSummary};
use crate::application::ledger::SaleStatus;
use crate::error::Result;
use std::io::Write;

/// Writes the aging report: one row per sale with both status columns.
pub struct StatusReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatusReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_statuses(&mut self, statuses: &[SaleStatus]) -> Result<()> {
        self.writer.write_record([
            "sale",
            "client",
            "lot",
            "date",
            "total",
            "paid",
            "aging",
            "days_late",
            "schedule",
        ])?;
        for status in statuses {
            self.writer.write_record([
                status.sale.id.to_string(),
                status.sale.client_id.to_string(),
                status.sale.lot_id.to_string(),
                status.sale.date.to_string(),
                status.sale.total.to_string(),
                status.total_paid.to_string(),
                status.aging.label().to_string(),
                status.aging.days_late().to_string(),
                status.schedule.label().to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the per-owner dashboard table.
pub struct DashboardWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DashboardWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summaries(&mut self, summaries: &[OwnerSummary]) -> Result<()> {
        self.writer.write_record([
            "owner",
            "lots_sold",
            "total_sales",
            "bonuses",
            "admin_fees",
            "sales_fees",
            "payments",
        ])?;
        for s in summaries {
            self.writer.write_record([
                s.owner.clone(),
                s.lots_sold.to_string(),
                s.total_sales.to_string(),
                s.bonuses.to_string(),
                s.admin_fees.to_string(),
                s.sales_fees.to_string(),
                s.payments.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the monthly cash-flow table, oldest month first.
pub struct CashFlowWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CashFlowWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_flows(&mut self, flows: &[MonthlyFlow]) -> Result<()> {
        self.writer
            .write_record(["month", "inflow", "outflow"])?;
        for f in flows {
            self.writer.write_record([
                format!("{:04}-{:02}", f.year, f.month),
                f.inflow.to_string(),
                f.outflow.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
