use super::thresholds::ThresholdTable;
use crate::models::{DiagnosticFinding, SoilSample};

/// Compares a sample against the threshold table and reports every
/// out-of-range parameter, in table order.
///
/// Run only for samples classified infertile; the findings support
/// remediation and are not a fertility judgment of their own. An empty
/// result is meaningful: the combination was judged infertile even though
/// every checked parameter is individually in range.
pub fn diagnose(sample: &SoilSample, table: &ThresholdTable) -> Vec<DiagnosticFinding> {
    table
        .iter()
        .filter_map(|(param, rule)| {
            let observed = sample.get(*param);
            if rule.passes(observed) {
                None
            } else {
                Some(DiagnosticFinding::new(*param, observed, rule.expectation()))
            }
        })
        .collect()
}
