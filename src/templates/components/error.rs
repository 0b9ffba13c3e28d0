use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Validation(e) => e.to_string(),
        ServerError::Conflict(msg) => format!("Conflict: {msg}"),
        ServerError::Enrich(e) => {
            format!("The mortgage calculator is unavailable, nothing was saved. ({e})")
        }
        ServerError::DbError(msg) => {
            error!("Database error: {msg}");
            "A database error occurred".to_string()
        }
        ServerError::InternalError => {
            error!("Internal server error");
            "Internal Server Error".to_string()
        }
    };

    render_error(status, &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let html = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to search" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
