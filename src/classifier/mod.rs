pub mod adapter;
pub mod forest;

pub use adapter::ClassifierAdapter;
pub use forest::ForestModel;

use crate::error::Result;
use crate::models::{ClassProbabilities, FertilityLabel, SoilSample};

/// Capability interface over the trained fertility classifier.
///
/// Implementations take a validated [`SoilSample`], never a raw vector, so
/// feature ordering is enforced by construction. Both operations are pure
/// for a fixed loaded model.
pub trait FertilityClassifier: Send + Sync {
    /// Predicted label for the sample.
    fn classify_label(&self, sample: &SoilSample) -> Result<FertilityLabel>;

    /// Per-label probabilities, summing to 1.
    fn classify_confidence(&self, sample: &SoilSample) -> Result<ClassProbabilities>;
}

/// Classifier returning a fixed answer regardless of input. Test double for
/// everything downstream of the adapter; also handy for dry runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier {
    probabilities: ClassProbabilities,
}

impl FixedClassifier {
    pub fn new(not_fertile: f64, fertile: f64) -> Self {
        Self {
            probabilities: ClassProbabilities::new(not_fertile, fertile),
        }
    }

    pub fn fertile(confidence_percent: f64) -> Self {
        let p = confidence_percent / 100.0;
        Self::new(1.0 - p, p)
    }

    pub fn not_fertile(confidence_percent: f64) -> Self {
        let p = confidence_percent / 100.0;
        Self::new(p, 1.0 - p)
    }
}

impl FertilityClassifier for FixedClassifier {
    fn classify_label(&self, _sample: &SoilSample) -> Result<FertilityLabel> {
        Ok(self.probabilities.label())
    }

    fn classify_confidence(&self, _sample: &SoilSample) -> Result<ClassProbabilities> {
        Ok(self.probabilities)
    }
}
