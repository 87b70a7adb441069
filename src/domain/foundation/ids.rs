//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a respondent taking the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RespondentId(Uuid);

impl RespondentId {
    /// Creates a new random RespondentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RespondentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RespondentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RespondentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RespondentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respondent_id_new_generates_unique_ids() {
        assert_ne!(RespondentId::new(), RespondentId::new());
    }

    #[test]
    fn respondent_id_round_trips_through_string() {
        let id = RespondentId::new();
        let parsed: RespondentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn respondent_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<RespondentId>().is_err());
    }

    #[test]
    fn respondent_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = RespondentId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
        assert_eq!(id.as_uuid(), &uuid);
    }
}
