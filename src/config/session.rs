//! Pair and presentation settings

use serde::Deserialize;

use crate::domain::payment::RoleAssignment;

/// How decisions within a pair become binding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoleSettings {
    #[serde(default)]
    pub assignment: RoleAssignment,
}

/// Per-respondent display randomization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresentationSettings {
    /// Draw the x/y list order 50/50 per respondent
    #[serde(default = "default_counterbalance")]
    pub counterbalance: bool,

    /// Shuffle the rows within each list
    #[serde(default)]
    pub shuffle_rows: bool,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            counterbalance: default_counterbalance(),
            shuffle_rows: false,
        }
    }
}

fn default_counterbalance() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_settings_default_to_fixed() {
        assert_eq!(RoleSettings::default().assignment, RoleAssignment::Fixed);
    }

    #[test]
    fn presentation_defaults() {
        let settings: PresentationSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.counterbalance);
        assert!(!settings.shuffle_rows);
        assert_eq!(settings, PresentationSettings::default());
    }

    #[test]
    fn role_assignment_deserializes_lowercase() {
        let settings: RoleSettings =
            serde_json::from_str(r#"{ "assignment": "double" }"#).unwrap();
        assert_eq!(settings.assignment, RoleAssignment::Double);
    }
}
