use crate::models::SoilParameter;

/// Ideal-range definition for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdRule {
    /// Passes when value >= bound.
    Minimum(f64),
    /// Passes when low <= value <= high.
    Range { low: f64, high: f64 },
}

impl ThresholdRule {
    pub fn passes(&self, value: f64) -> bool {
        match self {
            ThresholdRule::Minimum(bound) => value >= *bound,
            ThresholdRule::Range { low, high } => value >= *low && value <= *high,
        }
    }

    /// The description attached to a finding when the rule fails.
    pub fn expectation(&self) -> String {
        match self {
            ThresholdRule::Minimum(bound) => format!("minimum ideal: {}", bound),
            ThresholdRule::Range { low, high } => format!("ideal: {}-{}", low, high),
        }
    }
}

/// Immutable per-parameter threshold reference data, iterated in a fixed
/// order. Parameters without an entry (S, EC, Cu, B) are never flagged.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    rules: Vec<(SoilParameter, ThresholdRule)>,
}

/// Ideal pH range, shared with the composer's correction branching.
pub const PH_IDEAL_LOW: f64 = 6.0;
pub const PH_IDEAL_HIGH: f64 = 7.0;

impl ThresholdTable {
    /// The default agronomic table. Order here is the table iteration order
    /// and therefore the finding order.
    pub fn agronomic_defaults() -> Self {
        Self {
            rules: vec![
                (SoilParameter::N, ThresholdRule::Minimum(20.0)),
                (SoilParameter::P, ThresholdRule::Minimum(15.0)),
                (SoilParameter::K, ThresholdRule::Minimum(20.0)),
                (
                    SoilParameter::Ph,
                    ThresholdRule::Range {
                        low: PH_IDEAL_LOW,
                        high: PH_IDEAL_HIGH,
                    },
                ),
                (SoilParameter::OC, ThresholdRule::Minimum(1.5)),
                (SoilParameter::Zn, ThresholdRule::Minimum(2.0)),
                (SoilParameter::Fe, ThresholdRule::Minimum(4.5)),
                (SoilParameter::Mn, ThresholdRule::Minimum(2.0)),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SoilParameter, ThresholdRule)> {
        self.rules.iter()
    }

    pub fn rule_for(&self, param: SoilParameter) -> Option<ThresholdRule> {
        self.rules
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, rule)| *rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::agronomic_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_rule_boundary_inclusive() {
        let rule = ThresholdRule::Minimum(20.0);
        assert!(rule.passes(20.0));
        assert!(rule.passes(20.1));
        assert!(!rule.passes(19.9));
    }

    #[test]
    fn range_rule_boundaries_inclusive() {
        let rule = ThresholdRule::Range { low: 6.0, high: 7.0 };
        assert!(rule.passes(6.0));
        assert!(rule.passes(7.0));
        assert!(rule.passes(6.5));
        assert!(!rule.passes(5.99));
        assert!(!rule.passes(7.01));
    }

    #[test]
    fn expectation_text() {
        assert_eq!(
            ThresholdRule::Minimum(20.0).expectation(),
            "minimum ideal: 20"
        );
        assert_eq!(
            ThresholdRule::Minimum(4.5).expectation(),
            "minimum ideal: 4.5"
        );
        assert_eq!(
            ThresholdRule::Range { low: 6.0, high: 7.0 }.expectation(),
            "ideal: 6-7"
        );
    }

    #[test]
    fn default_table_order() {
        let table = ThresholdTable::agronomic_defaults();
        let order: Vec<SoilParameter> = table.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            order,
            vec![
                SoilParameter::N,
                SoilParameter::P,
                SoilParameter::K,
                SoilParameter::Ph,
                SoilParameter::OC,
                SoilParameter::Zn,
                SoilParameter::Fe,
                SoilParameter::Mn,
            ]
        );
    }

    #[test]
    fn unruled_parameters_have_no_entry() {
        let table = ThresholdTable::agronomic_defaults();
        for param in [
            SoilParameter::S,
            SoilParameter::EC,
            SoilParameter::Cu,
            SoilParameter::B,
        ] {
            assert!(table.rule_for(param).is_none(), "{:?} should be unruled", param);
        }
    }

    #[test]
    fn default_table_values() {
        let table = ThresholdTable::agronomic_defaults();
        assert_eq!(
            table.rule_for(SoilParameter::N),
            Some(ThresholdRule::Minimum(20.0))
        );
        assert_eq!(
            table.rule_for(SoilParameter::Fe),
            Some(ThresholdRule::Minimum(4.5))
        );
        assert_eq!(
            table.rule_for(SoilParameter::Ph),
            Some(ThresholdRule::Range { low: 6.0, high: 7.0 })
        );
    }
}
