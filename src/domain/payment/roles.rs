//! Role assignment within a matched pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Which respondents' decisions are binding for the pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAssignment {
    /// Position one decides for both; position two is passive.
    #[default]
    Fixed,

    /// Both decide; one decision is drawn 50/50 to bind both.
    Uncertain,

    /// Both decide; both decisions bind, each paying out independently.
    Double,
}

impl RoleAssignment {
    /// Role of the respondent at `position` while answering.
    pub fn role_of(&self, position: PairPosition) -> Role {
        match (self, position) {
            (RoleAssignment::Fixed, PairPosition::Second) => Role::Passive,
            _ => Role::Active,
        }
    }

    /// True if a binding respondent must be drawn before payment.
    pub fn requires_binding_draw(&self) -> bool {
        matches!(self, RoleAssignment::Uncertain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleAssignment::Fixed => "fixed",
            RoleAssignment::Uncertain => "uncertain",
            RoleAssignment::Double => "double",
        }
    }
}

impl fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleAssignment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(RoleAssignment::Fixed),
            "uncertain" => Ok(RoleAssignment::Uncertain),
            "double" => Ok(RoleAssignment::Double),
            other => Err(ValidationError::invalid_format(
                "role_assignment",
                format!("expected fixed, uncertain or double, got '{}'", other),
            )),
        }
    }
}

/// Whether a respondent's own decisions can bind, or they only receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Active,
    Passive,
}

/// Seat of a respondent within the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPosition {
    First,
    Second,
}

impl PairPosition {
    pub const ALL: [PairPosition; 2] = [PairPosition::First, PairPosition::Second];

    pub fn partner(&self) -> PairPosition {
        match self {
            PairPosition::First => PairPosition::Second,
            PairPosition::Second => PairPosition::First,
        }
    }

    /// 1-based seat number.
    pub fn number(&self) -> u8 {
        match self {
            PairPosition::First => 1,
            PairPosition::Second => 2,
        }
    }
}

impl fmt::Display for PairPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "respondent {}", self.number())
    }
}
