//! Snapshot Builder
//!
//! Every computed field is a fixed placeholder. The result depends on the
//! token and the creation time only; the submission is echoed back under
//! `input` and has no influence on scores, flags or roadmap.

use chrono::{DateTime, Utc};

use crate::data_model::{
    Breakdown, CrsSummary, Eligibility, LanguagePoints, Roadmap, Snapshot, SnapshotMeta,
    WorkPoints,
};
use crate::normalizer::Form34Submission;
use crate::token::Token;
use crate::{ENGINE_VERSION, SCHEMA_VERSION};

const BEST_STREAM: &str = "Federal Skilled Worker";

const PRIORITY_ACTIONS: &[&str] = &["Improve IELTS listening to CLB 9", "Complete spouse ECA"];

const RISK_FLAGS: &[&str] = &["Age points will reduce in 8 months"];

const CHECKLIST: &[&str] = &[
    "Language test results",
    "Educational Credential Assessment",
    "Proof of funds",
    "Police clearance certificates",
];

pub fn build_snapshot(
    token: &Token,
    created_at: DateTime<Utc>,
    input: Form34Submission,
) -> Snapshot {
    Snapshot {
        meta: SnapshotMeta {
            token: token.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            created_at,
        },
        input,
        crs: CrsSummary {
            total: 462,
            core_human_capital: 298,
            spouse_factors: 32,
            skill_transferability: 100,
            additional: 32,
        },
        breakdown: Breakdown {
            age: 77,
            education: 120,
            language: LanguagePoints {
                listening: 31,
                reading: 23,
                writing: 23,
                speaking: 23,
            },
            work: WorkPoints {
                foreign: 50,
                canadian: 0,
            },
        },
        eligibility: Eligibility {
            fsw: true,
            cec: false,
            fst: false,
        },
        roadmap: Roadmap {
            best_stream: BEST_STREAM.to_string(),
            priority_actions: to_owned(PRIORITY_ACTIONS),
            risk_flags: to_owned(RISK_FLAGS),
            checklist: to_owned(CHECKLIST),
        },
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
