use super::composer::compose;
use super::diagnostics::diagnose;
use super::thresholds::ThresholdTable;
use crate::classifier::FertilityClassifier;
use crate::error::Result;
use crate::models::{
    ClassificationOutcome, EvaluationResult, FertilityLabel, SoilParameter, SoilSample,
};
use std::collections::HashMap;

/// Orchestrates one evaluation: validate, classify, diagnose, compose.
///
/// Holds the injected classifier and the threshold table; both are read-only
/// after construction, so `evaluate` is re-entrant and safe to call from
/// concurrent requests.
pub struct DecisionEngine {
    classifier: Box<dyn FertilityClassifier>,
    thresholds: ThresholdTable,
}

impl DecisionEngine {
    pub fn new(classifier: Box<dyn FertilityClassifier>) -> Self {
        Self {
            classifier,
            thresholds: ThresholdTable::default(),
        }
    }

    pub fn with_thresholds(
        classifier: Box<dyn FertilityClassifier>,
        thresholds: ThresholdTable,
    ) -> Self {
        Self {
            classifier,
            thresholds,
        }
    }

    /// Runs the full pipeline over one raw parameter map.
    ///
    /// The diagnostic pass only runs for an infertile classification; for a
    /// fertile one the findings list is empty by definition.
    pub fn evaluate(&self, raw: &HashMap<SoilParameter, f64>) -> Result<EvaluationResult> {
        let sample = SoilSample::validate(raw)?;

        let label = self.classifier.classify_label(&sample)?;
        let probabilities = self.classifier.classify_confidence(&sample)?;
        let outcome = ClassificationOutcome::new(label, probabilities.max() * 100.0);

        let findings = match label {
            FertilityLabel::NotFertile => diagnose(&sample, &self.thresholds),
            FertilityLabel::Fertile => Vec::new(),
        };

        let recommendation = compose(&outcome, &findings);

        Ok(EvaluationResult {
            sample,
            outcome,
            findings,
            recommendation,
            evaluated_at: chrono::Utc::now(),
        })
    }
}
