//! Session Summary - aggregates evaluations across respondents for reporting.
//!
//! Produces data only; rendering is left to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Archetype, IntervalEstimate, RespondentEvaluation};
use crate::domain::foundation::RespondentId;

/// A distinct (x, y) score pair and how many respondents share it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBubble {
    pub x: f64,
    pub y: f64,
    pub count: usize,
}

/// Respondents per sign quadrant of the score plane.
///
/// A positive x-score reads as benevolence when ahead, a positive y-score
/// as benevolence when behind. Pairs on an axis count in no quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantCounts {
    /// x < 0 and y > 0
    pub malevolent_ahead_benevolent_behind: usize,
    /// x > 0 and y > 0
    pub benevolent_both: usize,
    /// x > 0 and y < 0
    pub benevolent_ahead_malevolent_behind: usize,
    /// x < 0 and y < 0
    pub malevolent_both: usize,
}

impl QuadrantCounts {
    /// Counts in reporting order.
    pub fn as_array(&self) -> [usize; 4] {
        [
            self.malevolent_ahead_benevolent_behind,
            self.benevolent_both,
            self.benevolent_ahead_malevolent_behind,
            self.malevolent_both,
        ]
    }

    fn record(&mut self, x: f64, y: f64) {
        match (x, y) {
            (x, y) if x < 0.0 && y > 0.0 => self.malevolent_ahead_benevolent_behind += 1,
            (x, y) if x > 0.0 && y > 0.0 => self.benevolent_both += 1,
            (x, y) if x > 0.0 && y < 0.0 => self.benevolent_ahead_malevolent_behind += 1,
            (x, y) if x < 0.0 && y < 0.0 => self.malevolent_both += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeFrequency {
    pub archetype: Archetype,
    pub count: usize,
}

/// All estimates of one respondent, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub respondent_id: RespondentId,
    pub x_score: Option<f64>,
    pub y_score: Option<f64>,
    pub archetype: Option<Archetype>,
    pub sigma: IntervalEstimate,
    pub gamma: IntervalEstimate,
    pub wtp_disadvantageous: IntervalEstimate,
    pub wtp_advantageous: IntervalEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub respondents: usize,
    pub score_bubbles: Vec<ScoreBubble>,
    pub quadrants: QuadrantCounts,
    pub archetype_frequencies: Vec<ArchetypeFrequency>,
    pub rows: Vec<SummaryRow>,
}

impl SessionSummary {
    /// Aggregates a batch of evaluations.
    ///
    /// Only respondents with both scores defined enter the bubble and
    /// quadrant counts. Bubbles are ordered by x, then y.
    pub fn from_evaluations(evaluations: &[RespondentEvaluation]) -> Self {
        // Scores are half-integers, so doubling gives exact integer keys.
        let mut bubbles: BTreeMap<(i64, i64), usize> = BTreeMap::new();
        let mut quadrants = QuadrantCounts::default();
        let mut archetypes: BTreeMap<Archetype, usize> = BTreeMap::new();

        for entry in evaluations {
            let evaluation = &entry.evaluation;
            if let Some((x, y)) = evaluation.scores.pair() {
                *bubbles.entry((half_key(x), half_key(y))).or_insert(0) += 1;
                quadrants.record(x, y);
            }
            if let Some(archetype) = evaluation.archetype {
                *archetypes.entry(archetype).or_insert(0) += 1;
            }
        }

        let score_bubbles = bubbles
            .into_iter()
            .map(|((x, y), count)| ScoreBubble {
                x: x as f64 / 2.0,
                y: y as f64 / 2.0,
                count,
            })
            .collect();

        let archetype_frequencies = Archetype::ALL
            .iter()
            .map(|archetype| ArchetypeFrequency {
                archetype: *archetype,
                count: archetypes.get(archetype).copied().unwrap_or(0),
            })
            .collect();

        let rows = evaluations
            .iter()
            .map(|entry| {
                let evaluation = &entry.evaluation;
                SummaryRow {
                    respondent_id: entry.respondent_id,
                    x_score: evaluation.scores.x,
                    y_score: evaluation.scores.y,
                    archetype: evaluation.archetype,
                    sigma: evaluation.parameters.sigma,
                    gamma: evaluation.parameters.gamma,
                    wtp_disadvantageous: evaluation.parameters.wtp_disadvantageous,
                    wtp_advantageous: evaluation.parameters.wtp_advantageous,
                }
            })
            .collect();

        Self {
            respondents: evaluations.len(),
            score_bubbles,
            quadrants,
            archetype_frequencies,
            rows,
        }
    }

    /// Archetype counts in table order.
    pub fn archetype_counts(&self) -> Vec<usize> {
        self.archetype_frequencies.iter().map(|f| f.count).collect()
    }
}

fn half_key(score: f64) -> i64 {
    (score * 2.0).round() as i64
}
