// src/domain/service.rs
use crate::db::{searches as db_searches, Database};
use crate::domain::{validate, Enricher, NewSearch, SearchRecord};
use crate::errors::ServerError;
use chrono::Utc;
use tracing::{info, warn};

/// Everything a request handler needs to record and show searches.
#[derive(Clone)]
pub struct SearchService {
    db: Database,
    enricher: Enricher,
}

impl SearchService {
    pub fn new(db: Database, enricher: Enricher) -> Self {
        Self { db, enricher }
    }

    #[cfg(test)]
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Record a new search:
    /// - validate the input
    /// - refuse an input tuple that is already stored
    /// - ask the calculator for the derived totals
    /// - insert the row
    ///
    /// Nothing is written unless every step succeeds.
    pub fn create(&self, search: NewSearch) -> Result<SearchRecord, ServerError> {
        validate(&search)?;

        if let Some(existing) = self
            .db
            .with_conn(|conn| db_searches::find_duplicate(conn, &search))?
        {
            warn!(existing, %search, "duplicate search rejected");
            return Err(ServerError::Conflict(format!(
                "an identical search already exists (#{existing})"
            )));
        }

        let enriched = self.enricher.enrich(search).map_err(|e| {
            warn!(error = %e, "mortgage calculator failed, search not saved");
            ServerError::from(e)
        })?;

        let record = self
            .db
            .with_conn(|conn| db_searches::insert_search(conn, &enriched, Utc::now()))?;

        info!(id = record.id, search = %record, "search recorded");
        Ok(record)
    }

    pub fn get(&self, id: i64) -> Result<SearchRecord, ServerError> {
        self.db
            .with_conn(|conn| db_searches::get_search(conn, id))?
            .ok_or(ServerError::NotFound)
    }
}
