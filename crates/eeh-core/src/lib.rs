//! EEH Core: Form 34 normalization, assessment snapshots and the token store
//!
//! A submission is normalized, turned into an immutable snapshot and kept in
//! a token-indexed store until the process exits.

pub mod data_model;
pub mod error;
pub mod normalizer;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod token;

pub use data_model::{AssessmentReceipt, Snapshot, SnapshotMeta};
pub use error::EehError;
pub use normalizer::{normalize, parse_submission, Form34Submission};
pub use service::AssessmentService;
pub use snapshot::build_snapshot;
pub use store::{InMemorySnapshotStore, SnapshotStore, StoredSnapshot};
pub use token::Token;

/// Scoring engine tag stamped on every snapshot
pub const ENGINE_VERSION: &str = "crs-2026.01";

/// Form 34 schema version understood by the normalizer
pub const SCHEMA_VERSION: &str = "1.0";
