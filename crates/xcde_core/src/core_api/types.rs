use serde::{Deserialize, Serialize};

use super::error::CoreError;
use crate::tier::ArtTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberEntry {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub level: u32,
    pub experience: u32,
    pub ap: u32,
}

/// One art record. `tier` is `None` when `tier_raw` is not a known tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtEntry {
    pub index: usize,
    pub level: u8,
    pub tier_raw: u8,
    pub tier: Option<ArtTier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFailure {
    pub id: i64,
    pub error: CoreError,
}

/// Outcome of a lenient party-wide level edit. Failures were skipped, not
/// returned as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelBatchReport {
    pub updated: Vec<i64>,
    pub failures: Vec<MemberFailure>,
}

impl LevelBatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
