use std::io::Error;
use std::path::Path;

pub const SALES_HEADER: [&str; 11] = [
    "id",
    "client_id",
    "lot_id",
    "date",
    "total",
    "bonus",
    "admin_fee",
    "sales_fee",
    "installments",
    "monthly_payment",
    "price_per_m2",
];

pub const PAYMENTS_HEADER: [&str; 6] = ["id", "sale_id", "date", "method", "amount", "note"];

pub const LOTS_HEADER: [&str; 8] = [
    "id", "folio", "block", "phase", "number", "area", "owner", "status",
];

pub const MOVEMENTS_HEADER: [&str; 7] = [
    "id",
    "kind",
    "description",
    "amount",
    "date",
    "receipt",
    "method",
];

pub fn write_csv(path: &Path, header: &[&str], rows: &[&[&str]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(*row)?;
    }
    wtr.flush()?;
    Ok(())
}
