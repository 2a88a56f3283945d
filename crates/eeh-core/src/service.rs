//! Assessment Service: submit and fetch over a snapshot store
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::data_model::AssessmentReceipt;
use crate::error::EehError;
use crate::normalizer::Form34Submission;
use crate::snapshot::build_snapshot;
use crate::store::{InMemorySnapshotStore, SnapshotStore, StoredSnapshot};
use crate::token::Token;

pub struct AssessmentService {
    store: Box<dyn SnapshotStore>,
}

impl AssessmentService {
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Service backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemorySnapshotStore::new()))
    }

    /// Build a snapshot for the submission and store it under a new token
    pub fn submit(&self, submission: Form34Submission) -> Result<AssessmentReceipt, EehError> {
        let token = Token::generate();
        let snapshot = build_snapshot(&token, Utc::now(), submission);

        let stored = self.store.put(token.clone(), snapshot).map_err(|e| {
            error!(token = %token, error = %e, "failed to store assessment");
            e
        })?;

        info!(
            token = %token,
            stored = self.store.len(),
            "assessment stored"
        );

        let meta = &stored.snapshot.meta;
        Ok(AssessmentReceipt {
            token: meta.token.clone(),
            engine_version: meta.engine_version.clone(),
            schema_version: meta.schema_version.clone(),
        })
    }

    /// Look a snapshot up; unknown tokens are `NotFound`
    pub fn fetch(&self, token: &str) -> Result<Arc<StoredSnapshot>, EehError> {
        match self.store.get(token) {
            Ok(stored) => {
                debug!(token, "assessment served");
                Ok(stored)
            }
            Err(e) => {
                warn!(token, "assessment not found");
                Err(e)
            }
        }
    }

    pub fn stored_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_then_fetch() {
        let service = AssessmentService::in_memory();
        let receipt = service.submit(Form34Submission::default()).unwrap();

        assert!(Token::is_well_formed(&receipt.token));
        assert_eq!(receipt.engine_version, "crs-2026.01");
        assert_eq!(receipt.schema_version, "1.0");

        let stored = service.fetch(&receipt.token).unwrap();
        assert_eq!(stored.snapshot.meta.token, receipt.token);
        assert_eq!(service.stored_count(), 1);
    }

    #[test]
    fn test_fetch_unknown_token() {
        let service = AssessmentService::in_memory();
        let err = service.fetch("eeh_0123456789abcdef0123456789abcdef").unwrap_err();
        assert!(matches!(err, EehError::NotFound(_)));
    }

    #[test]
    fn test_fresh_services_do_not_share_state() {
        let first = AssessmentService::in_memory();
        let second = AssessmentService::in_memory();

        let receipt = first.submit(Form34Submission::default()).unwrap();
        assert!(first.fetch(&receipt.token).is_ok());
        assert!(second.fetch(&receipt.token).is_err());
    }
}
