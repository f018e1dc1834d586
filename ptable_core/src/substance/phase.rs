//! Substance phase at standard conditions.

use serde::{Deserialize, Serialize};

/// Physical state of a substance.
///
/// Parsed from the raw `phase` field of the dataset by exact match. Anything
/// other than `"Solid"`, `"Liquid"` or `"Gas"`, including a missing or `null`
/// field, is `Undetermined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>")]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    /// Could be any of the above; the dataset does not say
    #[default]
    Undetermined,
}

impl Phase {
    /// All phases, in display order
    pub const ALL: [Phase; 4] = [Phase::Solid, Phase::Liquid, Phase::Gas, Phase::Undetermined];

    /// Map a raw dataset label to a phase
    pub fn from_label(label: &str) -> Self {
        match label {
            "Solid" => Phase::Solid,
            "Liquid" => Phase::Liquid,
            "Gas" => Phase::Gas,
            _ => Phase::Undetermined,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
            Phase::Undetermined => "Undetermined",
        }
    }

    /// True unless the phase is `Undetermined`
    pub fn is_determined(&self) -> bool {
        !matches!(self, Phase::Undetermined)
    }
}

impl From<&str> for Phase {
    fn from(label: &str) -> Self {
        Phase::from_label(label)
    }
}

impl From<Option<String>> for Phase {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(Phase::from_label).unwrap_or_default()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(Phase::from_label("Solid"), Phase::Solid);
        assert_eq!(Phase::from_label("Liquid"), Phase::Liquid);
        assert_eq!(Phase::from_label("Gas"), Phase::Gas);
    }

    #[test]
    fn test_unknown_labels_are_undetermined() {
        assert_eq!(Phase::from_label("Plasma"), Phase::Undetermined);
        assert_eq!(Phase::from_label(""), Phase::Undetermined);
        // Matching is exact
        assert_eq!(Phase::from_label("solid"), Phase::Undetermined);
        assert_eq!(Phase::from(None), Phase::Undetermined);
    }

    #[test]
    fn test_deserialize() {
        let phase: Phase = serde_json::from_str("\"Gas\"").unwrap();
        assert_eq!(phase, Phase::Gas);

        let phase: Phase = serde_json::from_str("null").unwrap();
        assert_eq!(phase, Phase::Undetermined);

        let phase: Phase = serde_json::from_str("\"Supercritical\"").unwrap();
        assert_eq!(phase, Phase::Undetermined);
    }

    #[test]
    fn test_serialize_roundtrip() {
        for phase in Phase::ALL {
            let json = serde_json::to_string(&phase).unwrap();
            let parsed: Phase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, parsed);
        }
    }

    #[test]
    fn test_is_determined() {
        assert!(Phase::Liquid.is_determined());
        assert!(!Phase::default().is_determined());
    }
}
