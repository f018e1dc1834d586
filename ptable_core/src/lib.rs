//! # ptable_core - Periodic Table Dataset
//!
//! `ptable_core` gives read-only, typed access to a fixed periodic table
//! dataset. The dataset and its JSON Schema are embedded in the binary,
//! validated once on first use, and cached for the life of the process.
//!
//! ## Design Philosophy
//!
//! - **Validated**: the document must pass its schema before any record is used
//! - **Immutable**: records are handed out as `&'static` references, never mutated
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types with stable codes
//!
//! ## Quick Start
//!
//! ```rust
//! use ptable_core::{get_by_atomic_number, get_by_name, get_by_position, TableError};
//!
//! let hydrogen = get_by_name("hydrogen").unwrap();
//! assert_eq!(hydrogen.symbol, "H");
//!
//! let helium = &get_by_position(1, 18).unwrap()[0];
//! assert_eq!(helium.number, 2);
//!
//! assert!(matches!(get_by_atomic_number(120), Err(TableError::OutOfRange { .. })));
//! ```
//!
//! ## Modules
//!
//! - [`table`] - Lookups and the process-wide table
//! - [`substance`] - Substance records, images, and phases
//! - [`loader`] - Embedded assets and schema validation
//! - [`errors`] - Structured error types

pub mod errors;
pub mod loader;
pub mod substance;
pub mod table;

// Re-export commonly used types at crate root for convenience
pub use errors::{TableError, TableResult};
pub use substance::{Phase, Substance, SubstanceImage};
pub use table::{
    all, find_by_atomic_number, find_by_name, find_by_position, find_by_symbol,
    get_by_atomic_number, get_by_name, get_by_position, get_by_symbol, table, PeriodicTable,
};
