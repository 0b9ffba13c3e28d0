mod calculator_error;
mod client;
mod models;

pub use calculator_error::EnrichError;
pub use client::NinjaCalculator;
pub use models::{parse_quote, MortgageQuote};

use rust_decimal::Decimal;

/// Anything that can price a mortgage.
///
/// The HTTP client is the production implementation; tests plug in stubs.
pub trait MortgageCalculator: Send + Sync {
    fn quote(
        &self,
        loan_amount: Decimal,
        interest_rate: Decimal,
        term_years: Decimal,
    ) -> Result<MortgageQuote, EnrichError>;
}
