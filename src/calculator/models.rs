use crate::calculator::EnrichError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The two numbers we keep from a calculator answer.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageQuote {
    pub monthly_payment: Decimal,
    pub total_interest_paid: Decimal,
}

#[derive(Debug, Deserialize)]
struct CalculatorResponse {
    monthly_payment: PaymentBreakdown,
    total_interest_paid: Decimal,
}

#[derive(Debug, Deserialize)]
struct PaymentBreakdown {
    total: Decimal,
}

/// Parse a calculator response body.
///
/// Extra fields (annual payment, mortgage/tax/insurance split) are ignored.
pub fn parse_quote(body: &str) -> Result<MortgageQuote, EnrichError> {
    let resp: CalculatorResponse =
        serde_json::from_str(body).map_err(|e| EnrichError::MalformedPayload(e.to_string()))?;

    if resp.monthly_payment.total < Decimal::ZERO || resp.total_interest_paid < Decimal::ZERO {
        return Err(EnrichError::MalformedPayload(
            "negative amounts in response".into(),
        ));
    }

    Ok(MortgageQuote {
        monthly_payment: resp.monthly_payment.total,
        total_interest_paid: resp.total_interest_paid,
    })
}
