// src/forms.rs
use crate::domain::{DownPaymentMode, NewSearch, TermUnit};
use crate::errors::ServerError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw search form fields, kept as typed so the form can be re-rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub purchase_price: String,
    pub down_payment_in: String,
    pub down_payment: String,
    pub mortgage_term_unit: String,
    pub mortgage_term: String,
    pub interest_rate: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            purchase_price: String::new(),
            down_payment_in: DownPaymentMode::default().as_str().to_string(),
            down_payment: String::new(),
            mortgage_term_unit: TermUnit::default().as_str().to_string(),
            mortgage_term: String::new(),
            interest_rate: String::new(),
        }
    }
}

impl SearchForm {
    /// Parse an `application/x-www-form-urlencoded` body. Unknown keys are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let value = value.trim().to_string();
            match key.as_ref() {
                "purchase_price" => form.purchase_price = value,
                "down_payment_in" => form.down_payment_in = value,
                "down_payment" => form.down_payment = value,
                "mortgage_term_unit" => form.mortgage_term_unit = value,
                "mortgage_term" => form.mortgage_term = value,
                "interest_rate" => form.interest_rate = value,
                _ => {}
            }
        }
        form
    }

    /// Type the raw fields. Business rules are checked later by `validate`.
    pub fn to_new_search(&self) -> Result<NewSearch, ServerError> {
        Ok(NewSearch {
            purchase_price: parse_decimal("purchase price", &self.purchase_price)?,
            down_payment_mode: DownPaymentMode::from_str(&self.down_payment_in)
                .map_err(ServerError::BadRequest)?,
            down_payment: parse_decimal("down payment", &self.down_payment)?,
            term_unit: TermUnit::from_str(&self.mortgage_term_unit)
                .map_err(ServerError::BadRequest)?,
            term: self.mortgage_term.parse().map_err(|_| {
                ServerError::BadRequest(format!(
                    "mortgage term must be a whole number, got {:?}",
                    self.mortgage_term
                ))
            })?,
            interest_rate: parse_decimal("interest rate", &self.interest_rate)?,
        })
    }
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, ServerError> {
    if raw.is_empty() {
        return Err(ServerError::BadRequest(format!("{field} is required")));
    }
    Decimal::from_str(raw)
        .map_err(|_| ServerError::BadRequest(format!("{field} must be a number, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_a_complete_form() {
        let form = SearchForm::from_urlencoded(
            b"purchase_price=400000&down_payment_in=percentage&down_payment=20.00\
              &mortgage_term_unit=years&mortgage_term=30&interest_rate=3.5&csrf=x",
        );

        let search = form.to_new_search().unwrap();
        assert_eq!(search.purchase_price, dec!(400000));
        assert_eq!(search.down_payment_mode, DownPaymentMode::Percentage);
        assert_eq!(search.down_payment, dec!(20));
        assert_eq!(search.term_unit, TermUnit::Years);
        assert_eq!(search.term, 30);
        assert_eq!(search.interest_rate, dec!(3.5));
    }

    #[test]
    fn missing_modes_fall_back_to_defaults() {
        let form = SearchForm::from_urlencoded(
            b"purchase_price=20&down_payment=10&mortgage_term=40&interest_rate=3.5",
        );

        let search = form.to_new_search().unwrap();
        assert_eq!(search.down_payment_mode, DownPaymentMode::Amount);
        assert_eq!(search.term_unit, TermUnit::Years);
    }

    #[test]
    fn bad_numbers_are_bad_requests() {
        let form = SearchForm::from_urlencoded(
            b"purchase_price=lots&down_payment=10&mortgage_term=40&interest_rate=3.5",
        );
        assert!(matches!(form.to_new_search(), Err(ServerError::BadRequest(_))));

        let form = SearchForm::from_urlencoded(
            b"purchase_price=20&down_payment=10&mortgage_term=2.5&interest_rate=3.5",
        );
        assert!(matches!(form.to_new_search(), Err(ServerError::BadRequest(_))));

        let form = SearchForm::from_urlencoded(
            b"purchase_price=20&down_payment=10&mortgage_term=40&interest_rate=",
        );
        assert!(matches!(form.to_new_search(), Err(ServerError::BadRequest(_))));

        let form = SearchForm::from_urlencoded(
            b"purchase_price=20&down_payment_in=bitcoin&down_payment=10&mortgage_term=40&interest_rate=1",
        );
        assert!(matches!(form.to_new_search(), Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn values_are_url_decoded_and_trimmed() {
        let form = SearchForm::from_urlencoded(b"purchase_price=+1500.50+&interest_rate=4%2E25");
        assert_eq!(form.purchase_price, "1500.50");
        assert_eq!(form.interest_rate, "4.25");
    }
}
