//! Assessment tokens: `eeh_` followed by 32 lowercase hex characters
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

const PREFIX: &str = "eeh_";
const HEX_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Fresh random token backed by a v4 UUID
    pub fn generate() -> Self {
        Token(format!("{}{}", PREFIX, Uuid::new_v4().simple()))
    }

    /// Accepts only strings in the canonical token form
    pub fn parse(raw: &str) -> Option<Self> {
        Self::is_well_formed(raw).then(|| Token(raw.to_string()))
    }

    pub fn is_well_formed(raw: &str) -> bool {
        raw.strip_prefix(PREFIX).is_some_and(|hex| {
            hex.len() == HEX_LEN && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets the store look entries up with a plain `&str` from the URL path.
impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
