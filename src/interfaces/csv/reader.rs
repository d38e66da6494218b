use crate::domain::lot::Lot;
use crate::domain::movement::CashMovement;
use crate::domain::payment::Payment;
use crate::domain::sale::Sale;
use crate::error::SalesError;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::marker::PhantomData;

/// Streaming CSV reader for one record type. Fields are trimmed and short
/// rows tolerated, so hand-edited exports still parse.
pub struct RecordReader<R: Read, T> {
    reader: csv::Reader<R>,
    _record: PhantomData<T>,
}

impl<R: Read, T: DeserializeOwned> RecordReader<R, T> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self {
            reader,
            _record: PhantomData,
        }
    }

    pub fn records(self) -> impl Iterator<Item = Result<T, SalesError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SalesError::from))
    }
}

pub type SaleReader<R> = RecordReader<R, Sale>;
pub type PaymentReader<R> = RecordReader<R, Payment>;
pub type LotReader<R> = RecordReader<R, Lot>;
pub type MovementReader<R> = RecordReader<R, CashMovement>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sale_reader_valid_stream() {
        let data = "id,client_id,lot_id,date,total,bonus,admin_fee,sales_fee,installments,monthly_payment,price_per_m2\n\
                    1, 1, 1, 2025-03-01, 60000, 15000, 900, 1350, 12, 2812.50, 600\n\
                    2, 2, 2, 2025-04-01, 50000, 0, 1000, 1500, 24, 1562.50, 500";
        let reader = SaleReader::new(data.as_bytes());
        let sales: Vec<_> = reader.records().collect::<Result<Vec<Sale>, _>>().unwrap();

        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].total, Money::new(dec!(60000)));
        assert_eq!(sales[0].monthly_payment, Money::new(dec!(2812.50)));
        assert_eq!(sales[1].installments, 24);
    }

    #[test]
    fn test_reader_malformed_row_is_an_error_not_a_panic() {
        let data = "id,sale_id,date,method,amount,note\n1, 1, not-a-date, cash, 100,";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<_> = reader.records().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }

    #[test]
    fn test_movement_reader_short_rows_tolerated() {
        // No note/receipt columns beyond the header's minimum set.
        let data = "id,kind,description,amount,date,receipt,method\n\
                    1, income, Enganche, 15000, 2025-04-02, , Transferencia";
        let reader = MovementReader::new(data.as_bytes());
        let movements: Vec<_> = reader
            .records()
            .collect::<Result<Vec<CashMovement>, _>>()
            .unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].receipt, "");
    }
}
