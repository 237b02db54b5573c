use crate::models::{EvaluationResult, FertilityLabel};
use std::fmt::Write;

const METER_WIDTH: usize = 20;

/// Renders an evaluation as a plain-text report: banner, confidence meter,
/// input table, flagged parameters, and the recommendation.
pub fn render(result: &EvaluationResult) -> String {
    let mut out = String::new();

    let banner = match result.outcome.label {
        FertilityLabel::Fertile => "FERTILE",
        FertilityLabel::NotFertile => "NOT FERTILE",
    };
    let _ = writeln!(out, "Soil Fertility Assessment");
    let _ = writeln!(out, "=========================");
    let _ = writeln!(out, "Result:     {}", banner);
    let _ = writeln!(
        out,
        "Confidence: {:.1}% {}",
        result.outcome.confidence,
        meter(result.outcome.confidence)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Input parameters");
    let _ = writeln!(out, "----------------");
    for (param, value) in result.sample.iter() {
        let _ = writeln!(
            out,
            "  {:<4} {:>8.1}  {}",
            param.as_str(),
            value,
            param.unit()
        );
    }
    let _ = writeln!(out);

    if !result.findings.is_empty() {
        let _ = writeln!(out, "Parameters outside ideal range");
        let _ = writeln!(out, "------------------------------");
        for finding in &result.findings {
            let _ = writeln!(out, "  - {}", finding);
        }
        let _ = writeln!(out);
    }

    let rec = &result.recommendation;
    let _ = writeln!(out, "Recommendation: {}", rec.headline);
    for action in &rec.actions {
        let _ = writeln!(out, "  {} {}", rec.severity.symbol(), action);
    }
    if let Some(note) = &rec.note {
        let _ = writeln!(out, "  Note: {}", note);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Use laboratory measurements for best accuracy; this prediction is \
         initial guidance, not a substitute for field assessment."
    );

    out
}

fn meter(confidence: f64) -> String {
    let filled = ((confidence / 100.0) * METER_WIDTH as f64).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::FixedClassifier;
    use crate::logic::DecisionEngine;
    use crate::models::SoilParameter;
    use std::collections::HashMap;

    fn raw() -> HashMap<SoilParameter, f64> {
        SoilParameter::ALL
            .iter()
            .map(|p| (*p, p.typical_value()))
            .collect()
    }

    #[test]
    fn fertile_report_contents() {
        let engine = DecisionEngine::new(Box::new(FixedClassifier::fertile(92.3)));
        let text = render(&engine.evaluate(&raw()).unwrap());

        assert!(text.contains("FERTILE"));
        assert!(text.contains("92.3%"));
        assert!(text.contains("pH"));
        assert!(text.contains("Recommendation"));
        assert!(!text.contains("outside ideal range"));
    }

    #[test]
    fn infertile_report_lists_findings() {
        let mut raw = raw();
        raw.insert(SoilParameter::N, 5.0);
        let engine = DecisionEngine::new(Box::new(FixedClassifier::not_fertile(81.0)));
        let text = render(&engine.evaluate(&raw).unwrap());

        assert!(text.contains("NOT FERTILE"));
        assert!(text.contains("outside ideal range"));
        assert!(text.contains("minimum ideal: 20"));
    }

    #[test]
    fn infertile_without_findings_shows_note() {
        let engine = DecisionEngine::new(Box::new(FixedClassifier::not_fertile(65.0)));
        let text = render(&engine.evaluate(&raw()).unwrap());
        assert!(text.contains("Note:"));
        assert!(text.contains("No individual parameter breached"));
    }

    #[test]
    fn meter_bounds() {
        assert_eq!(meter(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(meter(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(meter(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }
}
