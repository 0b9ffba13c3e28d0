// src/db/searches.rs
use crate::domain::validation::{MONEY_DECIMAL_PLACES, RATE_DECIMAL_PLACES};
use crate::domain::{
    DownPaymentMode, EnrichedSearch, LoanTotals, NewSearch, SearchRecord, TermUnit,
};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{ffi, params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

const SEARCH_COLUMNS: &str = r#"
    id,
    purchase_price,
    down_payment_in,
    down_payment,
    mortgage_term_unit,
    mortgage_term,
    interest_rate,
    total_loan_amt,
    monthly_payment,
    total_amt_paid,
    total_interest_paid,
    created_at
"#;

/// Text form used for storage and for the unique constraint.
fn canonical(value: Decimal, scale: u32) -> String {
    let mut v = value.round_dp(scale);
    v.rescale(scale);
    v.to_string()
}

fn money(value: Decimal) -> String {
    canonical(value, MONEY_DECIMAL_PLACES)
}

fn conversion_error(
    idx: usize,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err.into())
}

fn decimal_at(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text).map_err(|e| conversion_error(idx, e))
}

fn optional_decimal_at(row: &Row, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| Decimal::from_str(&t).map_err(|e| conversion_error(idx, e)))
        .transpose()
}

fn row_to_record(row: &Row) -> rusqlite::Result<SearchRecord> {
    let mode: String = row.get(2)?;
    let unit: String = row.get(4)?;

    let search = NewSearch {
        purchase_price: decimal_at(row, 1)?,
        down_payment_mode: DownPaymentMode::from_str(&mode).map_err(|e| conversion_error(2, e))?,
        down_payment: decimal_at(row, 3)?,
        term_unit: TermUnit::from_str(&unit).map_err(|e| conversion_error(4, e))?,
        term: row.get(5)?,
        interest_rate: decimal_at(row, 6)?,
    };

    // Totals are written together; a row missing any of them has none.
    let totals = match (
        optional_decimal_at(row, 7)?,
        optional_decimal_at(row, 8)?,
        optional_decimal_at(row, 9)?,
        optional_decimal_at(row, 10)?,
    ) {
        (Some(loan), Some(monthly), Some(paid), Some(interest)) => Some(LoanTotals {
            total_loan_amount: loan,
            monthly_payment: monthly,
            total_amount_paid: paid,
            total_interest_paid: interest,
        }),
        _ => None,
    };

    Ok(SearchRecord {
        id: row.get(0)?,
        search,
        totals,
        created_at: row.get(11)?,
    })
}

/// Id of a stored search with exactly these inputs, if any.
pub fn find_duplicate(conn: &Connection, search: &NewSearch) -> Result<Option<i64>, ServerError> {
    conn.query_row(
        r#"
        select id
        from searches
        where purchase_price = ?
          and down_payment_in = ?
          and down_payment = ?
          and mortgage_term_unit = ?
          and mortgage_term = ?
          and interest_rate = ?
        "#,
        params![
            money(search.purchase_price),
            search.down_payment_mode.as_str(),
            money(search.down_payment),
            search.term_unit.as_str(),
            search.term,
            canonical(search.interest_rate, RATE_DECIMAL_PLACES),
        ],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("duplicate lookup failed: {e}")))
}

/// Insert an enriched search. A repeated input tuple is a `Conflict`.
pub fn insert_search(
    conn: &Connection,
    enriched: &EnrichedSearch,
    now: DateTime<Utc>,
) -> Result<SearchRecord, ServerError> {
    let search = &enriched.search;
    let totals = &enriched.totals;

    conn.execute(
        r#"
        insert into searches (
            purchase_price, down_payment_in, down_payment,
            mortgage_term_unit, mortgage_term, interest_rate,
            total_loan_amt, monthly_payment, total_amt_paid, total_interest_paid,
            created_at
        )
        values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            money(search.purchase_price),
            search.down_payment_mode.as_str(),
            money(search.down_payment),
            search.term_unit.as_str(),
            search.term,
            canonical(search.interest_rate, RATE_DECIMAL_PLACES),
            money(totals.total_loan_amount),
            money(totals.monthly_payment),
            money(totals.total_amount_paid),
            money(totals.total_interest_paid),
            now,
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            ServerError::Conflict("an identical search already exists".into())
        }
        other => ServerError::DbError(format!("insert search failed: {other}")),
    })?;

    let id = conn.last_insert_rowid();
    get_search(conn, id)?.ok_or(ServerError::InternalError)
}

pub fn get_search(conn: &Connection, id: i64) -> Result<Option<SearchRecord>, ServerError> {
    conn.query_row(
        &format!("select {SEARCH_COLUMNS} from searches where id = ?"),
        params![id],
        row_to_record,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load search failed: {e}")))
}
