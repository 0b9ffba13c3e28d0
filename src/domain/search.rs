// src/domain/search.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// How the down payment value should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownPaymentMode {
    Percentage,
    #[default]
    Amount,
}

impl DownPaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownPaymentMode::Percentage => "percentage",
            DownPaymentMode::Amount => "amount",
        }
    }
}

impl FromStr for DownPaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "percentage" => Ok(DownPaymentMode::Percentage),
            "amount" => Ok(DownPaymentMode::Amount),
            other => Err(format!("unknown down payment mode: {other}")),
        }
    }
}

/// Unit the mortgage term was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermUnit {
    Months,
    #[default]
    Years,
}

impl TermUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermUnit::Months => "months",
            TermUnit::Years => "years",
        }
    }
}

impl FromStr for TermUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "months" => Ok(TermUnit::Months),
            "years" => Ok(TermUnit::Years),
            other => Err(format!("unknown mortgage term unit: {other}")),
        }
    }
}

/// User-supplied search input, before any derived field exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSearch {
    pub purchase_price: Decimal,
    pub down_payment_mode: DownPaymentMode,
    pub down_payment: Decimal,
    pub term_unit: TermUnit,
    pub term: i64,
    pub interest_rate: Decimal,
}

impl NewSearch {
    /// Down payment in currency units, whatever mode it was entered in.
    pub fn down_payment_amount(&self) -> Decimal {
        match self.down_payment_mode {
            DownPaymentMode::Percentage => self.purchase_price * self.down_payment / dec!(100),
            DownPaymentMode::Amount => self.down_payment,
        }
    }

    pub fn loan_amount(&self) -> Decimal {
        self.purchase_price - self.down_payment_amount()
    }

    pub fn term_years(&self) -> Decimal {
        let term = Decimal::from(self.term);
        match self.term_unit {
            TermUnit::Months => term / dec!(12),
            TermUnit::Years => term,
        }
    }
}

impl fmt::Display for NewSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "purchase - {}, down-payment - ", self.purchase_price)?;
        match self.down_payment_mode {
            DownPaymentMode::Amount => write!(f, "${}, ", self.down_payment)?,
            DownPaymentMode::Percentage => write!(f, "{}%, ", self.down_payment)?,
        }
        write!(f, "mortgage term - {} {}", self.term, self.term_unit.as_str())
    }
}

/// Totals derived from the calculator response.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanTotals {
    pub total_loan_amount: Decimal,
    pub monthly_payment: Decimal,
    pub total_amount_paid: Decimal,
    pub total_interest_paid: Decimal,
}

/// A persisted search row.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    pub id: i64,
    pub search: NewSearch,
    /// `None` only for rows written without a calculator result.
    pub totals: Option<LoanTotals>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for SearchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.search.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(mode: DownPaymentMode, down: Decimal, unit: TermUnit, term: i64) -> NewSearch {
        NewSearch {
            purchase_price: dec!(400000.00),
            down_payment_mode: mode,
            down_payment: down,
            term_unit: unit,
            term,
            interest_rate: dec!(3.5),
        }
    }

    #[test]
    fn percentage_down_payment_is_share_of_price() {
        let s = search(DownPaymentMode::Percentage, dec!(20), TermUnit::Years, 30);
        assert_eq!(s.down_payment_amount(), dec!(80000));
        assert_eq!(s.loan_amount(), dec!(320000));
    }

    #[test]
    fn amount_down_payment_is_taken_as_is() {
        let s = search(DownPaymentMode::Amount, dec!(200000), TermUnit::Years, 30);
        assert_eq!(s.loan_amount(), dec!(200000));
    }

    #[test]
    fn months_are_converted_to_years() {
        let s = search(DownPaymentMode::Amount, dec!(0), TermUnit::Months, 360);
        assert_eq!(s.term_years(), dec!(30));

        let s = search(DownPaymentMode::Amount, dec!(0), TermUnit::Months, 18);
        assert_eq!(s.term_years(), dec!(1.5));
    }

    #[test]
    fn display_matches_mode() {
        let s = search(DownPaymentMode::Amount, dec!(200000.00), TermUnit::Years, 30);
        assert_eq!(
            s.to_string(),
            "purchase - 400000.00, down-payment - $200000.00, mortgage term - 30 years"
        );

        let s = search(DownPaymentMode::Percentage, dec!(20.00), TermUnit::Months, 360);
        assert_eq!(
            s.to_string(),
            "purchase - 400000.00, down-payment - 20.00%, mortgage term - 360 months"
        );
    }

    #[test]
    fn modes_parse_from_form_values() {
        assert_eq!("percentage".parse::<DownPaymentMode>(), Ok(DownPaymentMode::Percentage));
        assert_eq!(" amount ".parse::<DownPaymentMode>(), Ok(DownPaymentMode::Amount));
        assert!("percent".parse::<DownPaymentMode>().is_err());
        assert_eq!("months".parse::<TermUnit>(), Ok(TermUnit::Months));
        assert!("weeks".parse::<TermUnit>().is_err());
    }
}
