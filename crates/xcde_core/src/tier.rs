use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core_api::CoreError;

/// Highest level an art can be trained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtTier {
    Beginner,
    Intermediate,
    Expert,
    Master,
}

impl ArtTier {
    pub const BEGINNER_RAW: u8 = 0;
    pub const INTERMEDIATE_RAW: u8 = 1;
    pub const EXPERT_RAW: u8 = 2;
    pub const MASTER_RAW: u8 = 3;

    pub fn raw(&self) -> u8 {
        match *self {
            Self::Beginner => Self::BEGINNER_RAW,
            Self::Intermediate => Self::INTERMEDIATE_RAW,
            Self::Expert => Self::EXPERT_RAW,
            Self::Master => Self::MASTER_RAW,
        }
    }

    pub fn max_level(&self) -> u8 {
        match *self {
            Self::Beginner => 4,
            Self::Intermediate => 7,
            Self::Expert => 10,
            Self::Master => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Beginner => "IV_BEGINNER",
            Self::Intermediate => "VII_INTERMEDIATE",
            Self::Expert => "X_EXPERT",
            Self::Master => "XII_MASTER",
        }
    }
}

impl TryFrom<u8> for ArtTier {
    type Error = CoreError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            Self::BEGINNER_RAW => Ok(Self::Beginner),
            Self::INTERMEDIATE_RAW => Ok(Self::Intermediate),
            Self::EXPERT_RAW => Ok(Self::Expert),
            Self::MASTER_RAW => Ok(Self::Master),
            other => Err(CoreError::decode(format!(
                "{other} is not a valid art tier, expected 0-3"
            ))),
        }
    }
}

impl fmt::Display for ArtTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier argument accepted by the tier setters.
///
/// `Raw` values are range checked when resolved; `Tier` values are already
/// valid by construction and pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierInput {
    Raw(i64),
    Tier(ArtTier),
}

impl TierInput {
    pub fn resolve(self) -> Result<ArtTier, CoreError> {
        match self {
            Self::Tier(tier) => Ok(tier),
            Self::Raw(raw) => u8::try_from(raw)
                .ok()
                .and_then(|raw| ArtTier::try_from(raw).ok())
                .ok_or_else(|| {
                    CoreError::out_of_range(format!(
                        "max unlock level must be between 0 and 3, got {raw}"
                    ))
                }),
        }
    }
}

impl From<ArtTier> for TierInput {
    fn from(tier: ArtTier) -> Self {
        Self::Tier(tier)
    }
}

impl From<i64> for TierInput {
    fn from(raw: i64) -> Self {
        Self::Raw(raw)
    }
}
