// templates/pages/home.rs

use crate::forms::SearchForm;
use crate::templates::{components::button, desktop_layout};
use maud::{html, Markup};

const INPUT_STYLE: &str = "padding: 6px; border: 1px solid #ccc; border-radius: 4px;";

/// The search form, optionally refilled with a previous submission.
pub fn home_page(form: &SearchForm, error: Option<&str>) -> Markup {
    desktop_layout(
        "New search",
        html! {
            main class="container narrow" {
                h1 { "Mortgage calculator" }

                @if let Some(msg) = error {
                    div class="alert alert-error" role="alert" style="color: #dc2626; margin-bottom: 1rem;" {
                        (msg)
                    }
                }

                form action="/searches" method="post" style="display: grid; gap: 12px; max-width: 420px;" {
                    label {
                        "Purchase price"
                        input type="number" name="purchase_price" min="1" step="0.01"
                            value=(form.purchase_price) style=(INPUT_STYLE) required;
                    }

                    label {
                        "Enter down payment as amount or percentage"
                        select name="down_payment_in" style=(INPUT_STYLE) {
                            option value="amount" selected[form.down_payment_in == "amount"] { "Amount ($)" }
                            option value="percentage" selected[form.down_payment_in == "percentage"] { "Percentage (%)" }
                        }
                    }

                    label {
                        "Down payment"
                        input type="number" name="down_payment" min="0" step="0.01"
                            value=(form.down_payment) style=(INPUT_STYLE) required;
                    }

                    label {
                        "Enter mortgage term in months or years"
                        select name="mortgage_term_unit" style=(INPUT_STYLE) {
                            option value="years" selected[form.mortgage_term_unit == "years"] { "Years" }
                            option value="months" selected[form.mortgage_term_unit == "months"] { "Months" }
                        }
                    }

                    label {
                        "Mortgage term"
                        input type="number" name="mortgage_term" min="1" step="1"
                            value=(form.mortgage_term) style=(INPUT_STYLE) required;
                    }

                    label {
                        "Interest rate (%)"
                        input type="number" name="interest_rate" min="0" max="100" step="0.001"
                            value=(form.interest_rate) style=(INPUT_STYLE) required;
                    }

                    (button("Calculate"))
                }
            }
        },
    )
}
