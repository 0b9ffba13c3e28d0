use thiserror::Error;

/// Failures talking to the mortgage calculator.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Calculator request failed: {0}")]
    Network(String),

    #[error("Calculator did not answer within {0} seconds")]
    Timeout(u64),

    #[error("Calculator returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected calculator response: {0}")]
    MalformedPayload(String),
}
