//! The three extraction types the analytics service can report on.

use crate::utils::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of named item to rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Entities,
    Concepts,
    Keywords,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 3] = [
        AnalysisType::Entities,
        AnalysisType::Concepts,
        AnalysisType::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Entities => "entities",
            AnalysisType::Concepts => "concepts",
            AnalysisType::Keywords => "keywords",
        }
    }

    /// Key holding the item records under `source.enriched.url`
    pub fn response_key(&self) -> &'static str {
        self.as_str()
    }

    /// Entities carry a per-document `count`; the others count one per appearance
    pub fn counts_occurrences(&self) -> bool {
        matches!(self, AnalysisType::Entities)
    }
}

impl std::str::FromStr for AnalysisType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entities" => Ok(Self::Entities),
            "concepts" => Ok(Self::Concepts),
            "keywords" => Ok(Self::Keywords),
            other => Err(InputError::UnknownAnalysisType(other.to_string())),
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
