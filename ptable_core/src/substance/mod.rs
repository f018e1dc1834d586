//! # Substances
//!
//! Data model for a single periodic table entry. Field names follow the
//! dataset's snake_case keys so records deserialize straight from the
//! embedded JSON.
//!
//! ## Example
//!
//! ```rust
//! use ptable_core::substance::Phase;
//!
//! let helium = ptable_core::get_by_symbol("he").unwrap();
//! assert_eq!(helium.name, "Helium");
//! assert_eq!(helium.phase, Phase::Gas);
//! assert_eq!(helium.to_string(), "[2] [Period 1, Group 18] Helium");
//! ```

pub mod image;
pub mod phase;

pub use image::SubstanceImage;
pub use phase::Phase;

use serde::{Deserialize, Serialize};

/// One chemical element as recorded in the dataset.
///
/// Temperatures are in kelvin. Density is g/L for gases and g/cm³ otherwise.
/// Ionization energies and electron affinity are in kJ/mol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substance {
    pub name: String,
    pub appearance: Option<String>,
    pub atomic_mass: f64,
    /// Boiling point (K)
    pub boil: Option<f64>,
    pub category: String,
    pub density: Option<f64>,
    pub discovered_by: Option<String>,
    /// Melting point (K)
    pub melt: Option<f64>,
    /// Molar heat capacity, J/(mol·K)
    pub molar_heat: Option<f64>,
    pub named_by: Option<String>,
    /// Atomic number
    pub number: u32,
    /// Table row
    pub period: u32,
    /// Table column; lanthanides and actinides are filed under group 3
    pub group: u32,
    #[serde(default)]
    pub phase: Phase,
    /// Where the data was obtained
    pub source: String,
    pub bohr_model_image: Option<String>,
    pub bohr_model_3d: Option<String>,
    pub spectral_img: Option<String>,
    pub summary: String,
    pub symbol: String,
    /// Column in the standard (18-column) layout
    pub xpos: u32,
    /// Row in the standard layout; the f-block rows are 9 and 10
    pub ypos: u32,
    /// Column in the wide (32-column) layout
    pub wxpos: u32,
    pub wypos: u32,
    /// Electrons per shell, innermost first
    pub shells: Vec<u32>,
    pub electron_configuration: String,
    /// Noble-gas shorthand, e.g. `[Ar] 3d6 4s2`
    pub electron_configuration_semantic: String,
    pub electron_affinity: Option<f64>,
    pub electronegativity_pauling: Option<f64>,
    /// Successive ionization energies
    pub ionization_energies: Vec<f64>,
    /// CPK colour as six hex digits, no leading `#`
    #[serde(rename = "cpk-hex")]
    pub cpk_hex: Option<String>,
    pub image: Option<SubstanceImage>,
    pub block: String,
}

impl Substance {
    /// Case-insensitive exact match on the name
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Case-insensitive exact match on the symbol
    pub fn has_symbol(&self, symbol: &str) -> bool {
        eq_ignore_case(&self.symbol, symbol)
    }

    /// Check if this substance sits at the given table position
    pub fn is_at(&self, period: u32, group: u32) -> bool {
        self.period == period && self.group == group
    }

    /// Total electron count across all shells
    pub fn electron_count(&self) -> u32 {
        self.shells.iter().sum()
    }

    /// Electrons in the outermost shell
    pub fn valence_shell_electrons(&self) -> Option<u32> {
        self.shells.last().copied()
    }

    /// First ionization energy, if known
    pub fn first_ionization_energy(&self) -> Option<f64> {
        self.ionization_energies.first().copied()
    }

    /// CPK colour with a leading `#`, ready for display
    pub fn color(&self) -> Option<String> {
        self.cpk_hex.as_ref().map(|hex| format!("#{}", hex))
    }
}

impl std::fmt::Display for Substance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] [Period {}, Group {}] {}",
            self.number, self.period, self.group, self.name
        )
    }
}

/// Unicode-aware case-insensitive equality without allocating.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
