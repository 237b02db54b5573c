use super::thresholds::{PH_IDEAL_HIGH, PH_IDEAL_LOW};
use crate::models::{
    ClassificationOutcome, DiagnosticFinding, Recommendation, Severity, SoilParameter,
};

/// Builds the guidance returned with every evaluation.
///
/// Total over its inputs: a fertile outcome gets the fixed maintenance
/// template, an infertile one gets the remediation template plus the
/// flagged-parameter report. Never fails.
pub fn compose(outcome: &ClassificationOutcome, findings: &[DiagnosticFinding]) -> Recommendation {
    if outcome.label.is_fertile() {
        maintenance()
    } else {
        remediation(findings)
    }
}

fn maintenance() -> Recommendation {
    Recommendation::new(Severity::Info, "Soil is in fertile condition")
        .with_action("Maintain organic matter levels with regular compost or manure additions")
        .with_action("Rotate crops to keep the nutrient balance intact")
        .with_action("Select high-value crops suited to the soil's characteristics")
        .with_action("Re-test soil parameters periodically (every 3-6 months)")
}

fn remediation(findings: &[DiagnosticFinding]) -> Recommendation {
    let mut rec = Recommendation::new(Severity::Warning, "Soil needs remediation")
        .with_action("Apply organic fertilizer (compost or manure) at 5-10 tons per hectare");

    if let Some(action) = ph_correction(findings) {
        rec = rec.with_action(action);
    }

    rec = rec
        .with_action(
            "Apply balanced fertilizer for the deficiencies found: urea/ZA for nitrogen, \
             SP-36/rock phosphate for phosphorus, KCl/ZK for potassium",
        )
        .with_action("Consult a soil specialist for a more detailed analysis");

    if findings.is_empty() {
        rec = rec.with_note(
            "No individual parameter breached its threshold; the combination of \
             factors still assesses as infertile",
        );
    }

    rec.with_flagged(findings.to_vec())
}

/// The pH correction branch: lime below the ideal range, sulfur above it.
/// No pH finding means no correction to suggest.
fn ph_correction(findings: &[DiagnosticFinding]) -> Option<String> {
    let ph = findings
        .iter()
        .find(|f| f.parameter == SoilParameter::Ph)?;
    if ph.observed < PH_IDEAL_LOW {
        Some(format!(
            "Raise soil pH (currently {}) by adding agricultural lime",
            ph.observed
        ))
    } else if ph.observed > PH_IDEAL_HIGH {
        Some(format!(
            "Lower soil pH (currently {}) with elemental sulfur or additional organic matter",
            ph.observed
        ))
    } else {
        None
    }
}
