use super::parameter::SoilParameter;
use crate::error::{Result, SoilSenseError};
use serde::Serialize;
use std::collections::HashMap;

/// A validated soil sample: all twelve parameters, finite, non-negative,
/// pH within [0,14], stored in canonical order.
///
/// Construction goes through [`SoilSample::validate`] only, so any value of
/// this type is safe to hand to the classifier as-is. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilSample {
    values: [f64; SoilParameter::COUNT],
}

impl SoilSample {
    /// Validates a raw parameter map into a sample.
    ///
    /// Fails with `MissingParameter` naming every absent key, or with
    /// `OutOfDomain` on the first negative, non-finite, or out-of-bounds pH
    /// value. Input ordering is irrelevant; the result is always canonical.
    pub fn validate(raw: &HashMap<SoilParameter, f64>) -> Result<Self> {
        let missing: Vec<&str> = SoilParameter::ALL
            .iter()
            .filter(|p| !raw.contains_key(*p))
            .map(|p| p.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(SoilSenseError::MissingParameter(missing.join(", ")));
        }

        let mut values = [0.0; SoilParameter::COUNT];
        for param in SoilParameter::ALL {
            let value = raw[&param];
            if !value.is_finite() {
                return Err(SoilSenseError::OutOfDomain {
                    parameter: param,
                    value,
                    reason: "value must be finite",
                });
            }
            if value < 0.0 {
                return Err(SoilSenseError::OutOfDomain {
                    parameter: param,
                    value,
                    reason: "value must not be negative",
                });
            }
            if param == SoilParameter::Ph && value > 14.0 {
                return Err(SoilSenseError::OutOfDomain {
                    parameter: param,
                    value,
                    reason: "pH must be within 0-14",
                });
            }
            values[param.index()] = value;
        }

        Ok(Self { values })
    }

    pub fn get(&self, param: SoilParameter) -> f64 {
        self.values[param.index()]
    }

    /// The canonical 12-element feature vector.
    pub fn feature_vector(&self) -> &[f64; SoilParameter::COUNT] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (SoilParameter, f64)> + '_ {
        SoilParameter::ALL.iter().map(|p| (*p, self.values[p.index()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn full_map() -> HashMap<SoilParameter, f64> {
        SoilParameter::ALL
            .iter()
            .map(|p| (*p, p.typical_value()))
            .collect()
    }

    #[test]
    fn validate_accepts_complete_sample() {
        let sample = SoilSample::validate(&full_map()).unwrap();
        assert_eq!(sample.get(SoilParameter::N), 20.0);
        assert_eq!(sample.get(SoilParameter::Ph), 6.5);
        assert_eq!(sample.get(SoilParameter::B), 0.5);
    }

    #[test]
    fn validate_reports_all_missing_parameters() {
        let mut raw = full_map();
        raw.remove(&SoilParameter::Zn);
        raw.remove(&SoilParameter::B);
        match SoilSample::validate(&raw) {
            Err(SoilSenseError::MissingParameter(msg)) => {
                assert!(msg.contains("Zn"), "message was: {}", msg);
                assert!(msg.contains("B"), "message was: {}", msg);
            }
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_each_missing_key() {
        for param in SoilParameter::ALL {
            let mut raw = full_map();
            raw.remove(&param);
            assert!(
                matches!(
                    SoilSample::validate(&raw),
                    Err(SoilSenseError::MissingParameter(_))
                ),
                "missing {:?} was not rejected",
                param
            );
        }
    }

    #[test]
    fn validate_rejects_negative_values() {
        let mut raw = full_map();
        raw.insert(SoilParameter::Fe, -0.1);
        assert!(matches!(
            SoilSample::validate(&raw),
            Err(SoilSenseError::OutOfDomain { parameter: SoilParameter::Fe, .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut raw = full_map();
            raw.insert(SoilParameter::OC, bad);
            assert!(matches!(
                SoilSample::validate(&raw),
                Err(SoilSenseError::OutOfDomain { .. })
            ));
        }
    }

    #[test]
    fn validate_ph_bounds() {
        let mut raw = full_map();
        raw.insert(SoilParameter::Ph, 14.0);
        assert!(SoilSample::validate(&raw).is_ok());

        raw.insert(SoilParameter::Ph, 14.1);
        assert!(matches!(
            SoilSample::validate(&raw),
            Err(SoilSenseError::OutOfDomain { parameter: SoilParameter::Ph, .. })
        ));

        raw.insert(SoilParameter::Ph, 0.0);
        assert!(SoilSample::validate(&raw).is_ok());
    }

    #[test]
    fn canonical_ordering_is_input_order_independent() {
        let forward = full_map();
        // Build the same map by inserting in reverse canonical order.
        let mut reversed = HashMap::new();
        for p in SoilParameter::ALL.iter().rev() {
            reversed.insert(*p, p.typical_value());
        }
        let a = SoilSample::validate(&forward).unwrap();
        let b = SoilSample::validate(&reversed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.feature_vector(), b.feature_vector());
    }

    #[test]
    fn feature_vector_follows_canonical_order() {
        let sample = SoilSample::validate(&full_map()).unwrap();
        let vector = sample.feature_vector();
        assert_eq!(vector[0], 20.0); // N
        assert_eq!(vector[3], 6.5); // pH
        assert_eq!(vector[11], 0.5); // B
    }
}
