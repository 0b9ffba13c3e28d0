// src/domain/enrich.rs

use crate::calculator::{EnrichError, MortgageCalculator};
use crate::domain::search::{LoanTotals, NewSearch};
use std::sync::Arc;

/// A search together with the totals the calculator produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSearch {
    pub search: NewSearch,
    pub totals: LoanTotals,
}

/// Fills in the derived loan totals for a search.
#[derive(Clone)]
pub struct Enricher {
    calculator: Arc<dyn MortgageCalculator>,
}

impl Enricher {
    pub fn new(calculator: Arc<dyn MortgageCalculator>) -> Self {
        Self { calculator }
    }

    /// One calculator call per search; errors are passed straight up.
    pub fn enrich(&self, search: NewSearch) -> Result<EnrichedSearch, EnrichError> {
        let loan = search.loan_amount();
        let term_years = search.term_years();

        let quote = self
            .calculator
            .quote(loan, search.interest_rate, term_years)?;

        let totals = LoanTotals {
            total_loan_amount: loan,
            monthly_payment: quote.monthly_payment,
            total_amount_paid: loan + quote.total_interest_paid,
            total_interest_paid: quote.total_interest_paid,
        };

        Ok(EnrichedSearch { search, totals })
    }
}
