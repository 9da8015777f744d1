//! Scheduling conflict model

use super::ClassOffering;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two offerings that occupy the same calendar time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Id of the earlier offering in input order
    pub offering_id1: u32,

    /// Id of the later offering in input order
    pub offering_id2: u32,

    /// Name of the earlier offering
    pub name1: String,

    /// Name of the later offering
    pub name2: String,

    /// Human-readable explanation (e.g., "Both scheduled for Block A")
    pub reason: String,
}

impl Conflict {
    /// Create a conflict between two offerings
    #[must_use]
    pub fn between(first: &ClassOffering, second: &ClassOffering, reason: String) -> Self {
        Self {
            offering_id1: first.id,
            offering_id2: second.id,
            name1: first.name.clone(),
            name2: second.name.clone(),
            reason,
        }
    }

    /// Whether this conflict involves the given offering id
    #[must_use]
    pub const fn involves(&self, offering_id: u32) -> bool {
        self.offering_id1 == offering_id || self.offering_id2 == offering_id
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}: {}", self.name1, self.name2, self.reason)
    }
}
