use super::forest::ForestModel;
use super::FertilityClassifier;
use crate::error::{Result, SoilSenseError};
use crate::models::{ClassProbabilities, FertilityLabel, SoilSample};
use std::path::Path;

/// Lifecycle of the loaded artifact: one load attempt at start-up, then
/// either usable for the rest of the process or permanently unavailable.
/// There is no reload path.
#[derive(Debug)]
enum AdapterState {
    Loaded(ForestModel),
    Unavailable(String),
}

/// Production [`FertilityClassifier`] backed by the trained forest artifact.
///
/// Construction never fails: a missing or corrupt artifact yields an adapter
/// in `Unavailable` state whose every classification call returns
/// `ModelUnavailable`. The loaded model is immutable, so a shared reference
/// can serve concurrent evaluations without locking.
#[derive(Debug)]
pub struct ClassifierAdapter {
    state: AdapterState,
}

impl ClassifierAdapter {
    /// Attempts the one-time artifact load.
    pub fn load(path: &Path) -> Self {
        match ForestModel::load(path) {
            Ok(model) => {
                tracing::info!(
                    "Loaded fertility model from {} ({} trees)",
                    path.display(),
                    model.trees.len()
                );
                Self {
                    state: AdapterState::Loaded(model),
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load fertility model from {}: {}", path.display(), e);
                Self {
                    state: AdapterState::Unavailable(format!("{} ({})", path.display(), e)),
                }
            }
        }
    }

    pub fn from_model(model: ForestModel) -> Self {
        Self {
            state: AdapterState::Loaded(model),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: AdapterState::Unavailable(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, AdapterState::Loaded(_))
    }

    /// Why the adapter is unusable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            AdapterState::Loaded(_) => None,
            AdapterState::Unavailable(reason) => Some(reason),
        }
    }

    fn model(&self) -> Result<&ForestModel> {
        match &self.state {
            AdapterState::Loaded(model) => Ok(model),
            AdapterState::Unavailable(reason) => {
                Err(SoilSenseError::ModelUnavailable(reason.clone()))
            }
        }
    }
}

impl FertilityClassifier for ClassifierAdapter {
    fn classify_label(&self, sample: &SoilSample) -> Result<FertilityLabel> {
        Ok(self.model()?.predict_proba(sample.feature_vector()).label())
    }

    fn classify_confidence(&self, sample: &SoilSample) -> Result<ClassProbabilities> {
        Ok(self.model()?.predict_proba(sample.feature_vector()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilParameter;
    use std::collections::HashMap;

    fn sample() -> SoilSample {
        let raw: HashMap<SoilParameter, f64> = SoilParameter::ALL
            .iter()
            .map(|p| (*p, p.typical_value()))
            .collect();
        SoilSample::validate(&raw).unwrap()
    }

    #[test]
    fn unavailable_adapter_rejects_every_call() {
        let adapter = ClassifierAdapter::unavailable("artifact missing");
        assert!(!adapter.is_available());
        assert_eq!(adapter.unavailable_reason(), Some("artifact missing"));

        let sample = sample();
        assert!(matches!(
            adapter.classify_label(&sample),
            Err(SoilSenseError::ModelUnavailable(_))
        ));
        assert!(matches!(
            adapter.classify_confidence(&sample),
            Err(SoilSenseError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn load_missing_file_yields_unavailable() {
        let adapter = ClassifierAdapter::load(Path::new("/nonexistent/forest.json"));
        assert!(!adapter.is_available());
        assert!(adapter.unavailable_reason().is_some());
    }

    #[test]
    fn loaded_adapter_classifies() {
        let json = r#"{
            "n_features": 12,
            "trees": [{"nodes": [{"feature": -1, "proba": [0.1, 0.9]}]}]
        }"#;
        let adapter = ClassifierAdapter::from_model(ForestModel::from_json(json).unwrap());
        assert!(adapter.is_available());
        assert!(adapter.unavailable_reason().is_none());

        let sample = sample();
        assert_eq!(
            adapter.classify_label(&sample).unwrap(),
            FertilityLabel::Fertile
        );
        let proba = adapter.classify_confidence(&sample).unwrap();
        assert!((proba.not_fertile + proba.fertile - 1.0).abs() < 1e-9);
    }

    #[test]
    fn classification_is_deterministic() {
        let json = r#"{
            "n_features": 12,
            "trees": [
                {"nodes": [
                    {"feature": 3, "threshold": 5.95, "left": 1, "right": 2},
                    {"feature": -1, "proba": [0.8, 0.2]},
                    {"feature": -1, "proba": [0.3, 0.7]}
                ]}
            ]
        }"#;
        let adapter = ClassifierAdapter::from_model(ForestModel::from_json(json).unwrap());
        let sample = sample();
        let first = adapter.classify_confidence(&sample).unwrap();
        for _ in 0..10 {
            assert_eq!(adapter.classify_confidence(&sample).unwrap(), first);
        }
    }
}
