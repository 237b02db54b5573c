use serde::{Deserialize, Serialize};

/// One of the twelve soil-chemistry measurements the engine consumes.
///
/// Variant order is the canonical feature order: every vector handed to the
/// classifier uses it, regardless of how the caller supplied the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilParameter {
    N,
    P,
    K,
    #[serde(rename = "pH")]
    Ph,
    EC,
    OC,
    S,
    Zn,
    Fe,
    Cu,
    Mn,
    B,
}

impl SoilParameter {
    /// All twelve parameters in canonical order.
    pub const ALL: [SoilParameter; 12] = [
        SoilParameter::N,
        SoilParameter::P,
        SoilParameter::K,
        SoilParameter::Ph,
        SoilParameter::EC,
        SoilParameter::OC,
        SoilParameter::S,
        SoilParameter::Zn,
        SoilParameter::Fe,
        SoilParameter::Cu,
        SoilParameter::Mn,
        SoilParameter::B,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in the canonical feature vector.
    pub fn index(&self) -> usize {
        match self {
            SoilParameter::N => 0,
            SoilParameter::P => 1,
            SoilParameter::K => 2,
            SoilParameter::Ph => 3,
            SoilParameter::EC => 4,
            SoilParameter::OC => 5,
            SoilParameter::S => 6,
            SoilParameter::Zn => 7,
            SoilParameter::Fe => 8,
            SoilParameter::Cu => 9,
            SoilParameter::Mn => 10,
            SoilParameter::B => 11,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilParameter::N => "N",
            SoilParameter::P => "P",
            SoilParameter::K => "K",
            SoilParameter::Ph => "pH",
            SoilParameter::EC => "EC",
            SoilParameter::OC => "OC",
            SoilParameter::S => "S",
            SoilParameter::Zn => "Zn",
            SoilParameter::Fe => "Fe",
            SoilParameter::Cu => "Cu",
            SoilParameter::Mn => "Mn",
            SoilParameter::B => "B",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            SoilParameter::N => "Nitrogen",
            SoilParameter::P => "Phosphorus",
            SoilParameter::K => "Potassium",
            SoilParameter::Ph => "pH",
            SoilParameter::EC => "Electrical Conductivity",
            SoilParameter::OC => "Organic Carbon",
            SoilParameter::S => "Sulfur",
            SoilParameter::Zn => "Zinc",
            SoilParameter::Fe => "Iron",
            SoilParameter::Cu => "Copper",
            SoilParameter::Mn => "Manganese",
            SoilParameter::B => "Boron",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SoilParameter::Ph => "0-14",
            SoilParameter::EC => "dS/m",
            SoilParameter::OC => "%",
            _ => "mg/kg",
        }
    }

    /// Typical lab value, used to pre-fill interactive input.
    pub fn typical_value(&self) -> f64 {
        match self {
            SoilParameter::N => 20.0,
            SoilParameter::P => 15.0,
            SoilParameter::K => 25.0,
            SoilParameter::Ph => 6.5,
            SoilParameter::EC => 0.5,
            SoilParameter::OC => 1.5,
            SoilParameter::S => 10.0,
            SoilParameter::Zn => 2.0,
            SoilParameter::Fe => 5.0,
            SoilParameter::Cu => 1.0,
            SoilParameter::Mn => 4.0,
            SoilParameter::B => 0.5,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "nitrogen" => Some(SoilParameter::N),
            "p" | "phosphorus" => Some(SoilParameter::P),
            "k" | "potassium" => Some(SoilParameter::K),
            "ph" => Some(SoilParameter::Ph),
            "ec" | "electrical conductivity" => Some(SoilParameter::EC),
            "oc" | "organic carbon" => Some(SoilParameter::OC),
            "s" | "sulfur" => Some(SoilParameter::S),
            "zn" | "zinc" => Some(SoilParameter::Zn),
            "fe" | "iron" => Some(SoilParameter::Fe),
            "cu" | "copper" => Some(SoilParameter::Cu),
            "mn" | "manganese" => Some(SoilParameter::Mn),
            "b" | "boron" => Some(SoilParameter::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
