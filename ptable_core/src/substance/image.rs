//! Substance image metadata

use serde::{Deserialize, Serialize};

/// Reference photograph of a substance with its licensing attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceImage {
    pub title: String,
    pub url: String,
    pub attribution: String,
}

impl std::fmt::Display for SubstanceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title, self.url)
    }
}
