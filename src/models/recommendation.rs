use super::outcome::ClassificationOutcome;
use super::parameter::SoilParameter;
use super::sample::SoilSample;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Advisory,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Advisory => "Advisory",
            Severity::Warning => "Warning",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Advisory => "->",
            Severity::Warning => "!",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parameter flagged outside its ideal agronomic range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticFinding {
    pub parameter: SoilParameter,
    pub observed: f64,
    /// Human-readable ideal, e.g. "minimum ideal: 20" or "ideal: 6-7".
    pub expected: String,
}

impl DiagnosticFinding {
    pub fn new(parameter: SoilParameter, observed: f64, expected: impl Into<String>) -> Self {
        Self {
            parameter,
            observed,
            expected: expected.into(),
        }
    }
}

impl std::fmt::Display for DiagnosticFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (observed: {}, {})",
            self.parameter, self.observed, self.expected
        )
    }
}

/// Guidance composed from the classification outcome and any findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub headline: String,
    pub actions: Vec<String>,
    /// Parameters outside their ideal range, in table order. Empty for a
    /// fertile outcome.
    pub flagged: Vec<DiagnosticFinding>,
    /// Set when the sample was judged infertile but no single parameter
    /// breached its threshold.
    pub note: Option<String>,
}

impl Recommendation {
    pub fn new(severity: Severity, headline: impl Into<String>) -> Self {
        Self {
            severity,
            headline: headline.into(),
            actions: Vec::new(),
            flagged: Vec::new(),
            note: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn with_flagged(mut self, findings: Vec<DiagnosticFinding>) -> Self {
        self.flagged = findings;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Everything one `evaluate` call produced. Read once by the presentation
/// layer and discarded; owns copies of all constituent data.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub sample: SoilSample,
    pub outcome: ClassificationOutcome,
    pub findings: Vec<DiagnosticFinding>,
    pub recommendation: Recommendation,
    pub evaluated_at: DateTime<Utc>,
}
