pub mod html;
pub mod redirect;

use crate::errors::ServerError;
use astra::Response;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

// Normal HTML response
pub use html::{html_response, html_response_with_status};
pub use redirect::redirect;
