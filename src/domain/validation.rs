// src/domain/validation.rs

use crate::domain::search::{DownPaymentMode, NewSearch, TermUnit};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

pub const MAX_MORTGAGE_TERM_YEARS: i64 = 40;
pub const MAX_MORTGAGE_TERM_MONTHS: i64 = MAX_MORTGAGE_TERM_YEARS * 12;

/// Decimal places kept for money columns.
pub const MONEY_DECIMAL_PLACES: u32 = 2;
/// Decimal places kept for the interest rate column.
pub const RATE_DECIMAL_PLACES: u32 = 3;
/// Total digits allowed in a money column.
pub const MONEY_MAX_DIGITS: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Purchase price must be at least 1.00")]
    PurchasePriceTooLow,

    #[error("Down payment can't be negative")]
    NegativeDownPayment,

    #[error("Mortgage term must be at least 1")]
    TermTooShort,

    #[error("Interest rate must be between 0 and 100")]
    InterestRateOutOfRange,

    #[error("Ensure that there are no more than {places} decimal places in {field}")]
    TooManyDecimalPlaces { field: &'static str, places: u32 },

    #[error("Ensure that there are no more than {digits} digits in {field}")]
    TooManyDigits { field: &'static str, digits: u32 },

    #[error("Down payment can't be greater than / equal to purchase price")]
    DownPaymentTooHigh,

    #[error("Purchase price can't be lesser than / equal to down payment")]
    DownPaymentExceedsPrice,

    #[error("Mortgage term months can't be greater than 480")]
    TermTooLongMonths,

    #[error("Mortgage term years can't be greater than 40")]
    TermTooLongYears,
}

/// Check a search against the column rules, then the cross-field rules.
/// Stops at the first failure.
pub fn validate(search: &NewSearch) -> Result<(), ValidationError> {
    if search.purchase_price < Decimal::ONE {
        return Err(ValidationError::PurchasePriceTooLow);
    }
    check_precision(
        search.purchase_price,
        "purchase price",
        MONEY_DECIMAL_PLACES,
        MONEY_MAX_DIGITS,
    )?;

    if search.down_payment < Decimal::ZERO {
        return Err(ValidationError::NegativeDownPayment);
    }
    check_precision(
        search.down_payment,
        "down payment",
        MONEY_DECIMAL_PLACES,
        MONEY_MAX_DIGITS,
    )?;

    if search.term < 1 {
        return Err(ValidationError::TermTooShort);
    }

    if search.interest_rate < Decimal::ZERO || search.interest_rate > dec!(100) {
        return Err(ValidationError::InterestRateOutOfRange);
    }
    if search.interest_rate.normalize().scale() > RATE_DECIMAL_PLACES {
        return Err(ValidationError::TooManyDecimalPlaces {
            field: "interest rate",
            places: RATE_DECIMAL_PLACES,
        });
    }

    if search.down_payment_mode == DownPaymentMode::Percentage && search.down_payment >= dec!(100)
    {
        return Err(ValidationError::DownPaymentTooHigh);
    }

    if search.purchase_price <= search.down_payment_amount() {
        return Err(ValidationError::DownPaymentExceedsPrice);
    }

    match search.term_unit {
        TermUnit::Months if search.term > MAX_MORTGAGE_TERM_MONTHS => {
            Err(ValidationError::TermTooLongMonths)
        }
        TermUnit::Years if search.term > MAX_MORTGAGE_TERM_YEARS => {
            Err(ValidationError::TermTooLongYears)
        }
        _ => Ok(()),
    }
}

fn check_precision(
    value: Decimal,
    field: &'static str,
    places: u32,
    digits: u32,
) -> Result<(), ValidationError> {
    if value.normalize().scale() > places {
        return Err(ValidationError::TooManyDecimalPlaces { field, places });
    }

    // Integer part may use whatever the decimal places leave over.
    let limit = Decimal::from(10_i64.pow(digits - places));
    if value.abs() >= limit {
        return Err(ValidationError::TooManyDigits { field, digits });
    }
    Ok(())
}
