use crate::domain::SearchService;
use crate::errors::ServerError;
use crate::forms::SearchForm;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::templates::pages::{home_page, search_page};
use astra::Request;
use std::io::Read;
use tracing::debug;

/// Larger form bodies are cut off; the search form is a few hundred bytes.
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, svc: &SearchService) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page(&SearchForm::default(), None)),
        ("POST", "/searches") => create_search(req, svc),
        ("GET", p) if p.starts_with("/searches/") => show_search(p, svc),
        _ => Err(ServerError::NotFound),
    }
}

fn create_search(req: Request, svc: &SearchService) -> ResultResp {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;

    let form = SearchForm::from_urlencoded(&body);

    match form.to_new_search().and_then(|search| svc.create(search)) {
        Ok(record) => redirect(&format!("/searches/{}", record.id)),
        // Input problems go back to the form with what the user typed.
        Err(ServerError::Validation(e)) => {
            html_response_with_status(400, home_page(&form, Some(&e.to_string())))
        }
        Err(ServerError::BadRequest(msg)) => {
            html_response_with_status(400, home_page(&form, Some(&msg)))
        }
        Err(e) => Err(e),
    }
}

fn show_search(path: &str, svc: &SearchService) -> ResultResp {
    let id: i64 = path
        .strip_prefix("/searches/")
        .and_then(|raw| raw.trim_end_matches('/').parse().ok())
        .ok_or(ServerError::NotFound)?;

    let record = svc.get(id)?;
    html_response(search_page(&record))
}
