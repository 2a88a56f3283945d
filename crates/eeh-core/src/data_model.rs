//! Data Model: Snapshot, SnapshotMeta, AssessmentReceipt
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalizer::Form34Submission;

/// Immutable result of one assessment submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    /// Normalized submission as it was accepted
    pub input: Form34Submission,
    pub crs: CrsSummary,
    pub breakdown: Breakdown,
    pub eligibility: Eligibility,
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub token: String,
    /// Scoring engine tag (ex: "crs-2026.01")
    pub engine_version: String,
    pub schema_version: String,
    #[serde(with = "naive_utc")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsSummary {
    pub total: u32,
    pub core_human_capital: u32,
    pub spouse_factors: u32,
    pub skill_transferability: u32,
    pub additional: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub age: u32,
    pub education: u32,
    pub language: LanguagePoints,
    pub work: WorkPoints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePoints {
    pub listening: u32,
    pub reading: u32,
    pub writing: u32,
    pub speaking: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPoints {
    pub foreign: u32,
    pub canadian: u32,
}

/// Program eligibility flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Federal Skilled Worker
    pub fsw: bool,
    /// Canadian Experience Class
    pub cec: bool,
    /// Federal Skilled Trades
    pub fst: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub best_stream: String,
    pub priority_actions: Vec<String>,
    pub risk_flags: Vec<String>,
    pub checklist: Vec<String>,
}

/// What the caller gets back after a successful submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReceipt {
    pub token: String,
    pub engine_version: String,
    pub schema_version: String,
}

/// `created_at` is written as a UTC timestamp without offset, microsecond
/// precision: `2026-01-05T09:30:12.123456`.
mod naive_utc {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.naive_utc().format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
