use crate::calculator::{EnrichError, MortgageCalculator, MortgageQuote};
use crate::db::connection::{init_db, Database};
use crate::domain::{DownPaymentMode, Enricher, NewSearch, SearchService, TermUnit};
use astra::Response;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Read;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Calculator double that always answers with the same quote.
pub struct StubCalculator {
    quote: MortgageQuote,
    calls: Mutex<Vec<(Decimal, Decimal, Decimal)>>,
}

impl StubCalculator {
    pub fn new(monthly_payment: Decimal, total_interest_paid: Decimal) -> Self {
        Self {
            quote: MortgageQuote {
                monthly_payment,
                total_interest_paid,
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// (loan amount, interest rate, term years) for every call so far.
    pub fn calls(&self) -> Vec<(Decimal, Decimal, Decimal)> {
        self.calls.lock().unwrap().clone()
    }
}

impl MortgageCalculator for StubCalculator {
    fn quote(
        &self,
        loan_amount: Decimal,
        interest_rate: Decimal,
        term_years: Decimal,
    ) -> Result<MortgageQuote, EnrichError> {
        self.calls
            .lock()
            .unwrap()
            .push((loan_amount, interest_rate, term_years));
        Ok(self.quote.clone())
    }
}

/// Calculator double that never answers in time.
pub struct FailingCalculator;

impl MortgageCalculator for FailingCalculator {
    fn quote(&self, _: Decimal, _: Decimal, _: Decimal) -> Result<MortgageQuote, EnrichError> {
        Err(EnrichError::Timeout(5))
    }
}

/// Fresh database on disk using the production schema.
/// Keep the `TempDir` alive for as long as the database is used.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
    let db = Database::new(dir.path().join("test_db.sqlite3"));

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

pub fn service_with(calculator: Arc<dyn MortgageCalculator>) -> (TempDir, SearchService) {
    let (dir, db) = init_test_db();
    (dir, SearchService::new(db, Enricher::new(calculator)))
}

/// The 400k / 3.5% / 30 year search used throughout the tests.
pub fn sample_search(mode: DownPaymentMode, down_payment: Decimal) -> NewSearch {
    NewSearch {
        purchase_price: dec!(400000),
        down_payment_mode: mode,
        down_payment,
        term_unit: TermUnit::Years,
        term: 30,
        interest_rate: dec!(3.5),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
