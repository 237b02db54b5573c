use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilityLabel {
    Fertile,
    NotFertile,
}

impl FertilityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FertilityLabel::Fertile => "Fertile",
            FertilityLabel::NotFertile => "Not Fertile",
        }
    }

    pub fn is_fertile(&self) -> bool {
        matches!(self, FertilityLabel::Fertile)
    }
}

impl std::fmt::Display for FertilityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-label probability pair as reported by the classifier.
///
/// Class order follows the trained model: index 0 is NotFertile, index 1 is
/// Fertile. The two values sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub not_fertile: f64,
    pub fertile: f64,
}

impl ClassProbabilities {
    pub fn new(not_fertile: f64, fertile: f64) -> Self {
        Self {
            not_fertile,
            fertile,
        }
    }

    /// Probability of whichever label the model favors.
    pub fn max(&self) -> f64 {
        self.not_fertile.max(self.fertile)
    }

    /// Argmax label. Ties resolve to NotFertile, the model's first class.
    pub fn label(&self) -> FertilityLabel {
        if self.fertile > self.not_fertile {
            FertilityLabel::Fertile
        } else {
            FertilityLabel::NotFertile
        }
    }
}

/// Classification result for one sample: the predicted label and the model's
/// certainty in that label, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    pub label: FertilityLabel,
    /// 100 x the highest class probability, whichever label won.
    pub confidence: f64,
}

impl ClassificationOutcome {
    pub fn new(label: FertilityLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    pub fn from_probabilities(probabilities: ClassProbabilities) -> Self {
        Self {
            label: probabilities.label(),
            confidence: probabilities.max() * 100.0,
        }
    }
}
