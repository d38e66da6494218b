use crate::domain::money::Money;
use crate::error::{Result, SalesError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Flat surcharge per m² for a corner lot.
pub const CORNER_SURCHARGE: Decimal = dec!(100);
/// Flat surcharge per m² for park adjacency.
pub const PARK_SURCHARGE: Decimal = dec!(100);
/// Fixed sales bonus deducted from the gross total when granted.
pub const SALES_BONUS: Decimal = dec!(15000);
/// Automatic down payment fraction of the post-bonus total.
pub const AUTO_DOWN_PAYMENT_RATE: Decimal = dec!(0.25);
/// Administration fee rate on the post-bonus total.
pub const ADMIN_FEE_RATE: Decimal = dec!(0.02);
/// Sales commission rate on the post-bonus total.
pub const SALES_FEE_RATE: Decimal = dec!(0.03);

pub const MAX_INSTALLMENTS: u32 = 36;

/// How the down payment is chosen on the sale form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DownPayment {
    /// 25% of the post-bonus total.
    Automatic,
    /// Operator-supplied figure.
    Manual(Decimal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInput {
    pub base_price_per_m2: Decimal,
    pub area: Decimal,
    pub corner: bool,
    pub park: bool,
    pub sales_bonus: bool,
    pub installments: u32,
    pub down_payment: DownPayment,
}

/// The financing breakdown shown on the sale form and persisted with the
/// sale. Figures keep full decimal precision; rounding is left to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub price_per_m2: Money,
    pub gross_total: Money,
    pub bonus: Money,
    pub net_total: Money,
    pub down_payment: Money,
    pub financed: Money,
    pub monthly_payment: Money,
    pub admin_fee: Money,
    pub sales_fee: Money,
    /// True when the plan is one installment: the sale settles in a single
    /// full payment instead of a recurring monthly figure.
    pub single_payment: bool,
}

/// Surcharge per m² for the chosen installment count. Tiers are inclusive
/// of their upper bound.
fn installment_surcharge(installments: u32) -> Decimal {
    match installments {
        1..=12 => dec!(100),
        13..=24 => dec!(200),
        _ => dec!(300),
    }
}

/// Computes the full financing breakdown for a prospective sale.
///
/// The adjusted price per m² carries the corner, park and installment-tier
/// surcharges; the sales bonus comes off the gross total before the down
/// payment, the monthly installment and both fees are derived.
pub fn quote(input: &QuoteInput) -> Result<Quote> {
    if input.base_price_per_m2 <= Decimal::ZERO {
        return Err(SalesError::validation("base price per m2 must be positive"));
    }
    if input.area <= Decimal::ZERO {
        return Err(SalesError::validation("lot area must be positive"));
    }
    if input.installments == 0 || input.installments > MAX_INSTALLMENTS {
        return Err(SalesError::validation(format!(
            "number of installments must be between 1 and {MAX_INSTALLMENTS}"
        )));
    }

    let mut price_per_m2 = input.base_price_per_m2;
    if input.corner {
        price_per_m2 += CORNER_SURCHARGE;
    }
    if input.park {
        price_per_m2 += PARK_SURCHARGE;
    }
    price_per_m2 += installment_surcharge(input.installments);

    let gross_total = price_per_m2 * input.area;
    let bonus = if input.sales_bonus {
        SALES_BONUS
    } else {
        Decimal::ZERO
    };
    let net_total = gross_total - bonus;

    let down_payment = match input.down_payment {
        DownPayment::Automatic => net_total * AUTO_DOWN_PAYMENT_RATE,
        DownPayment::Manual(value) => {
            if value < Decimal::ZERO {
                return Err(SalesError::validation("down payment cannot be negative"));
            }
            if value > net_total {
                return Err(SalesError::validation(
                    "down payment cannot exceed the post-bonus total",
                ));
            }
            value
        }
    };

    let financed = net_total - down_payment;
    let monthly_payment = financed / Decimal::from(input.installments);

    Ok(Quote {
        price_per_m2: Money::new(price_per_m2),
        gross_total: Money::new(gross_total),
        bonus: Money::new(bonus),
        net_total: Money::new(net_total),
        down_payment: Money::new(down_payment),
        financed: Money::new(financed),
        monthly_payment: Money::new(monthly_payment),
        admin_fee: Money::new(net_total * ADMIN_FEE_RATE),
        sales_fee: Money::new(net_total * SALES_FEE_RATE),
        single_payment: input.installments == 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> QuoteInput {
        QuoteInput {
            base_price_per_m2: dec!(500),
            area: dec!(100),
            corner: false,
            park: false,
            sales_bonus: false,
            installments: 12,
            down_payment: DownPayment::Automatic,
        }
    }

    #[test]
    fn test_quote_without_bonus() {
        let q = quote(&base_input()).unwrap();
        assert_eq!(q.price_per_m2, Money::new(dec!(600)));
        assert_eq!(q.gross_total, Money::new(dec!(60000)));
        assert_eq!(q.net_total, Money::new(dec!(60000)));
        assert_eq!(q.down_payment, Money::new(dec!(15000)));
        assert_eq!(q.financed, Money::new(dec!(45000)));
        assert_eq!(q.monthly_payment, Money::new(dec!(3750)));
        assert!(!q.single_payment);
    }

    #[test]
    fn test_quote_with_bonus() {
        let q = quote(&QuoteInput {
            sales_bonus: true,
            ..base_input()
        })
        .unwrap();
        assert_eq!(q.gross_total, Money::new(dec!(60000)));
        assert_eq!(q.bonus, Money::new(dec!(15000)));
        assert_eq!(q.net_total, Money::new(dec!(45000)));
        assert_eq!(q.down_payment, Money::new(dec!(11250)));
        assert_eq!(q.financed, Money::new(dec!(33750)));
        assert_eq!(q.monthly_payment, Money::new(dec!(2812.5)));
    }

    #[test]
    fn test_corner_and_park_surcharges() {
        let q = quote(&QuoteInput {
            corner: true,
            park: true,
            ..base_input()
        })
        .unwrap();
        assert_eq!(q.price_per_m2, Money::new(dec!(800)));
        assert_eq!(q.gross_total, Money::new(dec!(80000)));
    }

    #[test]
    fn test_installment_tier_boundaries() {
        assert_eq!(installment_surcharge(1), dec!(100));
        assert_eq!(installment_surcharge(12), dec!(100));
        assert_eq!(installment_surcharge(13), dec!(200));
        assert_eq!(installment_surcharge(24), dec!(200));
        assert_eq!(installment_surcharge(25), dec!(300));
        assert_eq!(installment_surcharge(36), dec!(300));
    }

    #[test]
    fn test_down_payment_plus_financed_equals_net_total() {
        for installments in [1, 6, 13, 25, 36] {
            let q = quote(&QuoteInput {
                installments,
                sales_bonus: true,
                ..base_input()
            })
            .unwrap();
            assert_eq!(q.down_payment + q.financed, q.net_total);
            assert_eq!(
                (q.monthly_payment.0 * Decimal::from(installments)).round_dp(8),
                q.financed.0.round_dp(8)
            );
        }
    }

    #[test]
    fn test_single_installment_is_one_full_payment() {
        let q = quote(&QuoteInput {
            installments: 1,
            ..base_input()
        })
        .unwrap();
        assert!(q.single_payment);
        assert_eq!(q.monthly_payment, q.financed);
    }

    #[test]
    fn test_manual_down_payment() {
        let q = quote(&QuoteInput {
            down_payment: DownPayment::Manual(dec!(20000)),
            ..base_input()
        })
        .unwrap();
        assert_eq!(q.down_payment, Money::new(dec!(20000)));
        assert_eq!(q.financed, Money::new(dec!(40000)));
    }

    #[test]
    fn test_manual_down_payment_bounds() {
        assert!(
            quote(&QuoteInput {
                down_payment: DownPayment::Manual(dec!(-1)),
                ..base_input()
            })
            .is_err()
        );
        assert!(
            quote(&QuoteInput {
                down_payment: DownPayment::Manual(dec!(60001)),
                ..base_input()
            })
            .is_err()
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(
            quote(&QuoteInput {
                base_price_per_m2: dec!(0),
                ..base_input()
            })
            .is_err()
        );
        assert!(
            quote(&QuoteInput {
                area: dec!(-10),
                ..base_input()
            })
            .is_err()
        );
        assert!(
            quote(&QuoteInput {
                installments: 0,
                ..base_input()
            })
            .is_err()
        );
        assert!(
            quote(&QuoteInput {
                installments: 37,
                ..base_input()
            })
            .is_err()
        );
    }

    #[test]
    fn test_fee_percentages_of_net_total() {
        let q = quote(&QuoteInput {
            sales_bonus: true,
            ..base_input()
        })
        .unwrap();
        assert_eq!(q.admin_fee, Money::new(dec!(900.00)));
        assert_eq!(q.sales_fee, Money::new(dec!(1350.00)));
    }
}
