//! Document-level confidence and severity.

use crate::config::SeverityThresholds;
use crate::finding::Severity;
use crate::scored::Scored;

/// Weight given to the strongest single contradiction.
pub const PEAK_WEIGHT: f64 = 0.8;

/// Blends per-contradiction confidences into one document score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateScorer {
    thresholds: SeverityThresholds,
}

impl AggregateScorer {
    pub fn new(thresholds: SeverityThresholds) -> Self {
        Self { thresholds }
    }

    /// `max(mean, 0.8 * max)` of the confidences, with the severity it maps
    /// to. No confidences scores zero with severity info.
    pub fn score(&self, confidences: &[f64]) -> Scored<Severity> {
        if confidences.is_empty() {
            return Scored::blended(Severity::Info, 0.0);
        }

        let mean = confidences.iter().sum::<f64>() / confidences.len() as f64;
        let peak = confidences.iter().copied().fold(f64::MIN, f64::max);
        let confidence = mean.max(PEAK_WEIGHT * peak);

        Scored::blended(self.thresholds.classify(confidence), confidence)
    }
}
