//! # Dataset Loader
//!
//! Reads the periodic table document and its JSON Schema from the assets
//! embedded at compile time, validates the document, and deserializes the
//! `elements` array into [`Substance`] records.
//!
//! Loading fails if:
//! - either asset is missing ([`TableError::MissingAsset`])
//! - the document violates the schema ([`TableError::SchemaValidation`]); every
//!   violation is reported, not just the first
//! - the records are unusable after validation, e.g. two records share an
//!   atomic number, name, or symbol ([`TableError::InvalidDataset`])

use std::collections::HashSet;

use rust_embed::RustEmbed;
use serde_json::Value;

use crate::errors::{TableError, TableResult};
use crate::substance::Substance;

/// Path of the periodic table document inside the embedded assets
pub const DATASET_PATH: &str = "periodic_table.json";

/// Path of the JSON Schema inside the embedded assets
pub const SCHEMA_PATH: &str = "periodic_table.schema.json";

#[derive(RustEmbed)]
#[folder = "data/"]
struct DataAssets;

/// Read an embedded asset as UTF-8 text
pub fn embedded_text(path: &str) -> TableResult<String> {
    let file = DataAssets::get(path).ok_or_else(|| TableError::missing_asset(path))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|e| TableError::invalid_dataset(format!("{} is not valid UTF-8: {}", path, e)))
}

/// Load and validate the embedded dataset
pub fn load_embedded() -> TableResult<Vec<Substance>> {
    let schema = embedded_text(SCHEMA_PATH)?;
    let document = embedded_text(DATASET_PATH)?;
    load_from_str(&schema, &document)
}

/// Run the full load pipeline over caller-supplied schema and document text
pub fn load_from_str(schema: &str, document: &str) -> TableResult<Vec<Substance>> {
    let schema: Value = serde_json::from_str(schema)
        .map_err(|e| TableError::invalid_dataset(format!("schema is not valid JSON: {}", e)))?;
    let document: Value = serde_json::from_str(document)?;

    log::debug!("validating periodic table document against schema");
    if let Err(err) = validate(&schema, &document) {
        log::error!("{}", err);
        return Err(err);
    }

    let substances = deserialize_elements(document)?;
    check_unique(&substances)?;

    log::info!("loaded {} substances", substances.len());
    Ok(substances)
}

/// Validate a document against a JSON Schema, collecting every violation
pub fn validate(schema: &Value, document: &Value) -> TableResult<()> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| TableError::invalid_dataset(format!("schema does not compile: {}", e)))?;

    let errors: Vec<String> = validator
        .iter_errors(document)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TableError::schema_validation(errors))
    }
}

fn deserialize_elements(document: Value) -> TableResult<Vec<Substance>> {
    let Value::Object(mut root) = document else {
        return Err(TableError::invalid_dataset("document root is not an object"));
    };
    let elements = root
        .remove("elements")
        .ok_or_else(|| TableError::invalid_dataset("document has no 'elements' array"))?;

    Ok(serde_json::from_value(elements)?)
}

/// Atomic numbers, names and symbols must each identify at most one record.
/// Names and symbols are compared case-insensitively, matching the lookups.
fn check_unique(substances: &[Substance]) -> TableResult<()> {
    let mut numbers = HashSet::new();
    let mut names = HashSet::new();
    let mut symbols = HashSet::new();

    for substance in substances {
        if !numbers.insert(substance.number) {
            return Err(duplicate("atomic number", &substance.number.to_string()));
        }
        if !names.insert(substance.name.to_lowercase()) {
            return Err(duplicate("name", &substance.name));
        }
        if !symbols.insert(substance.symbol.to_lowercase()) {
            return Err(duplicate("symbol", &substance.symbol));
        }
    }
    Ok(())
}

fn duplicate(key: &str, value: &str) -> TableError {
    TableError::invalid_dataset(format!("duplicate {} '{}'", key, value))
}
