//! Die types and their static specifications.
//!
//! Zar supports the six standard polyhedral dice. Each die type carries a
//! fixed face count and a display scale used when the renderer shows its mesh.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A supported polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    /// Four-sided die (tetrahedron).
    D4,
    /// Six-sided die (cube).
    D6,
    /// Eight-sided die (octahedron).
    D8,
    /// Ten-sided die (golden-ratio trapezohedron approximation).
    D10,
    /// Twelve-sided die (dodecahedron).
    D12,
    /// Twenty-sided die (icosahedron).
    D20,
}

impl DieType {
    /// Every supported die, in ascending face order.
    pub const ALL: [DieType; 6] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
    ];

    /// Returns the number of faces (and the highest rollable value).
    pub fn faces(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Look up the die type for a face count.
    pub fn from_faces(faces: u32) -> DiceResult<Self> {
        match faces {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            n => Err(DiceError::UnsupportedDieType(n)),
        }
    }

    /// The static specification for this die type.
    pub fn spec(self) -> DieSpec {
        let display_scale = match self {
            Self::D4 => 1.2,
            Self::D6 => 1.0,
            Self::D8 => 1.1,
            Self::D10 => 1.2,
            Self::D12 => 0.9,
            Self::D20 => 0.85,
        };
        DieSpec {
            die: self,
            display_scale,
        }
    }

    /// Upper-case label used in batch reports ("D20").
    pub fn label(self) -> String {
        self.to_string().to_uppercase()
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces())
    }
}

impl FromStr for DieType {
    type Err = DiceError;

    /// Parse a die from a tag like "d20" or "D6".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        let faces = tag
            .strip_prefix('d')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| DiceError::UnknownDie(s.to_string()))?;
        Self::from_faces(faces).map_err(|_| DiceError::UnknownDie(s.to_string()))
    }
}

/// Immutable per-type description of a die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieSpec {
    /// The die described.
    pub die: DieType,
    /// Uniform scale applied to the mesh when displayed. Always positive.
    pub display_scale: f64,
}

impl DieSpec {
    /// Number of logical faces on the die.
    pub fn face_count(&self) -> u32 {
        self.die.faces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_faces() {
        assert_eq!(DieType::D4.faces(), 4);
        assert_eq!(DieType::D6.faces(), 6);
        assert_eq!(DieType::D8.faces(), 8);
        assert_eq!(DieType::D10.faces(), 10);
        assert_eq!(DieType::D12.faces(), 12);
        assert_eq!(DieType::D20.faces(), 20);
    }

    #[test]
    fn from_faces_round_trips() {
        for die in DieType::ALL {
            assert_eq!(DieType::from_faces(die.faces()).unwrap(), die);
        }
    }

    #[test]
    fn from_faces_rejects_unsupported() {
        for n in [0, 1, 2, 3, 5, 7, 100] {
            assert!(matches!(
                DieType::from_faces(n),
                Err(DiceError::UnsupportedDieType(m)) if m == n
            ));
        }
    }

    #[test]
    fn parse_tags() {
        assert_eq!("d20".parse::<DieType>().unwrap(), DieType::D20);
        assert_eq!(" D6 ".parse::<DieType>().unwrap(), DieType::D6);
        assert!(matches!(
            "d7".parse::<DieType>(),
            Err(DiceError::UnknownDie(_))
        ));
        assert!("foo".parse::<DieType>().is_err());
        assert!("d".parse::<DieType>().is_err());
    }

    #[test]
    fn display_and_label() {
        assert_eq!(DieType::D10.to_string(), "d10");
        assert_eq!(DieType::D10.label(), "D10");
    }

    #[test]
    fn all_is_ascending() {
        let mut sorted = DieType::ALL;
        sorted.sort();
        assert_eq!(sorted, DieType::ALL);
    }

    #[test]
    fn display_scales_positive() {
        for die in DieType::ALL {
            let spec = die.spec();
            assert!(spec.display_scale > 0.0);
            assert_eq!(spec.face_count(), die.faces());
        }
        assert!((DieType::D20.spec().display_scale - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_uses_tags() {
        let json = serde_json::to_string(&DieType::D12).unwrap();
        assert_eq!(json, "\"d12\"");
        let back: DieType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DieType::D12);
    }
}
