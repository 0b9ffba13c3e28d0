use maud::{html, Markup};

pub mod card;
pub mod error;

pub use card::card;
pub use error::html_error_response;

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" type="submit" { (label) }
    }
}

/// Two-column row for read-only values.
pub fn detail_row(label: &str, value: Markup) -> Markup {
    html! {
        tr {
            th style="padding: 8px; text-align: left; border-bottom: 1px solid #f3f4f6;" { (label) }
            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (value) }
        }
    }
}
