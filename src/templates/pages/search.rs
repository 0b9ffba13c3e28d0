use crate::domain::{DownPaymentMode, SearchRecord};
use crate::templates::components::detail_row;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn search_page(record: &SearchRecord) -> Markup {
    let search = &record.search;

    desktop_layout(
        &format!("Search #{}", record.id),
        html! {
            main class="container" {
                h1 { "Search #" (record.id) }
                p class="lead" { (record) }

                (card("Inputs", html! {
                    table style="width: 100%; border-collapse: collapse;" {
                        tbody {
                            (detail_row("Purchase price", html! { "$" (search.purchase_price) }))
                            (detail_row("Down payment", html! {
                                @match search.down_payment_mode {
                                    DownPaymentMode::Amount => { "$" (search.down_payment) }
                                    DownPaymentMode::Percentage => { (search.down_payment) "%" }
                                }
                            }))
                            (detail_row("Mortgage term", html! { (search.term) " " (search.term_unit.as_str()) }))
                            (detail_row("Interest rate", html! { (search.interest_rate) "%" }))
                        }
                    }
                }))

                (card("Loan totals", html! {
                    @if let Some(totals) = &record.totals {
                        table style="width: 100%; border-collapse: collapse;" {
                            tbody {
                                (detail_row("Total loan amount", html! { "$" (totals.total_loan_amount) }))
                                (detail_row("Monthly payment", html! { "$" (totals.monthly_payment) }))
                                (detail_row("Total amount paid over the course of the loan", html! { "$" (totals.total_amount_paid) }))
                                (detail_row("Total interest paid over the course of the loan", html! { "$" (totals.total_interest_paid) }))
                            }
                        }
                    } @else {
                        p style="color: #6b7280; font-style: italic;" { "Not calculated" }
                    }
                }))

                p style="color: #6b7280; font-size: 0.9em;" {
                    "Recorded " (record.created_at.format("%Y-%m-%d %H:%M UTC"))
                }
            }
        },
    )
}
