pub mod enrich;
pub mod search;
pub mod service;
pub mod validation;

pub use enrich::{EnrichedSearch, Enricher};
pub use search::{DownPaymentMode, LoanTotals, NewSearch, SearchRecord, TermUnit};
pub use service::SearchService;
pub use validation::{validate, ValidationError};
