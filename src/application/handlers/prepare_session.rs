//! PrepareSessionHandler - Builds the shared instrument for a session.

use std::sync::Arc;

use tracing::info;

use crate::config::{AppConfig, ConfigError, PresentationSettings};
use crate::domain::foundation::RespondentId;
use crate::domain::instrument::{DecisionLists, ListGenerator, PresentationPlan};
use crate::domain::payment::RoleAssignment;
use crate::ports::RandomSource;

/// Everything fixed at session start: the lists every respondent answers,
/// the role assignment and the presentation settings.
#[derive(Debug, Clone)]
pub struct PreparedSession {
    pub lists: Arc<DecisionLists>,
    pub role_assignment: RoleAssignment,
    pub presentation: PresentationSettings,
}

impl PreparedSession {
    /// Draws the display plan for one respondent.
    pub fn presentation_for(
        &self,
        respondent_id: RespondentId,
        rng: &mut dyn RandomSource,
    ) -> PresentationPlan {
        let plan = PresentationPlan::draw(
            &self.lists,
            self.presentation.counterbalance,
            self.presentation.shuffle_rows,
            rng,
        );
        info!(
            respondent_id = %respondent_id,
            ordering = ?plan.ordering,
            "Assigned presentation plan"
        );
        plan
    }
}

/// Handler for session preparation.
#[derive(Debug, Default)]
pub struct PrepareSessionHandler;

impl PrepareSessionHandler {
    pub fn new() -> Self {
        Self
    }

    /// Validates the configuration and generates the decision lists.
    ///
    /// # Errors
    ///
    /// `ConfigError::ValidationFailed` if the parametrization is invalid.
    pub fn handle(&self, config: &AppConfig) -> Result<PreparedSession, ConfigError> {
        let configuration = config.validate()?;
        let lists = ListGenerator::generate(&configuration);

        info!(
            lists = lists.list_count(),
            rows_per_list = lists.rows_per_list(),
            role_assignment = %config.roles.assignment,
            "Prepared session"
        );

        Ok(PreparedSession {
            lists: Arc::new(lists),
            role_assignment: config.roles.assignment,
            presentation: config.presentation.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedRandomSource;
    use crate::config::InstrumentSettings;
    use crate::domain::instrument::ListOrdering;

    #[test]
    fn prepares_canonical_session() {
        let session = PrepareSessionHandler::new()
            .handle(&AppConfig::default())
            .unwrap();
        assert_eq!(session.lists.list_count(), 1);
        assert_eq!(session.lists.rows_per_list(), 5);
        assert_eq!(session.role_assignment, RoleAssignment::Fixed);
    }

    #[test]
    fn rejects_invalid_parametrization() {
        let config = AppConfig {
            instrument: InstrumentSettings {
                test_size: 4,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            PrepareSessionHandler::new().handle(&config),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn presentation_follows_settings() {
        let mut config = AppConfig::default();
        config.presentation.counterbalance = false;
        config.presentation.shuffle_rows = true;
        let session = PrepareSessionHandler::new().handle(&config).unwrap();

        // Permutation draws only; no coin flip for ordering.
        let mut rng = ScriptedRandomSource::new(vec![0]);
        let plan = session.presentation_for(RespondentId::new(), &mut rng);
        assert_eq!(plan.ordering, ListOrdering::XFirst);
        assert_eq!(rng.draws_made(), 8);
    }
}
