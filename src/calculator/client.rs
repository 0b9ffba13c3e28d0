// client.rs
use crate::calculator::{parse_quote, EnrichError, MortgageCalculator, MortgageQuote};
use crate::config::CalculatorConfig;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::debug;

/// Fractional years are sent with at most this many decimal places.
const TERM_YEARS_DECIMAL_PLACES: u32 = 6;

/// Client for the API Ninjas mortgage calculator.
pub struct NinjaCalculator {
    client: Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl NinjaCalculator {
    pub fn new(cfg: &CalculatorConfig) -> Result<Self, EnrichError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| EnrichError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone(),
            timeout_secs: cfg.timeout_secs,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> EnrichError {
        if err.is_timeout() {
            EnrichError::Timeout(self.timeout_secs)
        } else {
            EnrichError::Network(err.to_string())
        }
    }
}

impl MortgageCalculator for NinjaCalculator {
    fn quote(
        &self,
        loan_amount: Decimal,
        interest_rate: Decimal,
        term_years: Decimal,
    ) -> Result<MortgageQuote, EnrichError> {
        let term_years = term_years.round_dp(TERM_YEARS_DECIMAL_PLACES).normalize();

        debug!(%loan_amount, %interest_rate, %term_years, "requesting mortgage quote");

        let resp = self
            .client
            .get(&self.base_url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("loan_amount", loan_amount.normalize().to_string()),
                ("interest_rate", interest_rate.normalize().to_string()),
                ("duration_years", term_years.to_string()),
            ])
            .send()
            .map_err(|e| self.map_send_error(e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(EnrichError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().map_err(|e| self.map_send_error(e))?;
        parse_quote(&body)
    }
}
