//! # Periodic Table Queries
//!
//! [`PeriodicTable`] owns the loaded records and answers four kinds of
//! lookup: by name, by symbol, by atomic number, and by period/group
//! position. Each comes in two forms:
//!
//! - `find_*` validates its input and returns `None` (or an empty `Vec`) on
//!   a miss
//! - `get_*` validates its input and returns [`TableError::NotFound`] on a
//!   miss
//!
//! Name and symbol matches are case-insensitive and exact. Numeric inputs are
//! bounds-checked before the scan, so out-of-range values never reach it.
//!
//! The free functions at the bottom of this module query a process-wide table
//! that is loaded from the embedded assets on first use. Initialization runs
//! at most once even under concurrent first access.

use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;

use crate::errors::{TableError, TableResult};
use crate::loader;
use crate::substance::Substance;

/// Valid atomic numbers (Hydrogen through Ununennium)
pub const ATOMIC_NUMBERS: RangeInclusive<u32> = 1..=119;

/// Valid periods (table rows)
pub const PERIODS: RangeInclusive<u32> = 1..=8;

/// Valid groups (table columns)
pub const GROUPS: RangeInclusive<u32> = 1..=18;

/// Immutable, validated set of periodic table records in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTable {
    substances: Vec<Substance>,
}

impl PeriodicTable {
    /// Load the table from the embedded dataset and schema
    pub fn load_embedded() -> TableResult<Self> {
        Ok(PeriodicTable {
            substances: loader::load_embedded()?,
        })
    }

    /// Load a table from schema and document text, with the same validation
    /// as the embedded load
    pub fn from_json_str(schema: &str, document: &str) -> TableResult<Self> {
        Ok(PeriodicTable {
            substances: loader::load_from_str(schema, document)?,
        })
    }

    /// All substances in dataset order
    pub fn all(&self) -> &[Substance] {
        &self.substances
    }

    /// Number of substances in the table
    pub fn len(&self) -> usize {
        self.substances.len()
    }

    /// True when the table holds no substances
    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }

    /// Iterate over substances in dataset order
    pub fn iter(&self) -> std::slice::Iter<'_, Substance> {
        self.substances.iter()
    }

    /// Find a substance by name (case-insensitive)
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidArgument`] if `name` is empty.
    pub fn find_by_name(&self, name: &str) -> TableResult<Option<&Substance>> {
        require_non_empty("name", name)?;
        Ok(self.substances.iter().find(|s| s.has_name(name)))
    }

    /// Get a substance by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> TableResult<&Substance> {
        self.find_by_name(name)?
            .ok_or_else(|| TableError::not_found("name", name))
    }

    /// Find a substance by symbol (case-insensitive)
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidArgument`] if `symbol` is empty.
    pub fn find_by_symbol(&self, symbol: &str) -> TableResult<Option<&Substance>> {
        require_non_empty("symbol", symbol)?;
        Ok(self.substances.iter().find(|s| s.has_symbol(symbol)))
    }

    /// Get a substance by symbol (case-insensitive)
    pub fn get_by_symbol(&self, symbol: &str) -> TableResult<&Substance> {
        self.find_by_symbol(symbol)?
            .ok_or_else(|| TableError::not_found("symbol", symbol))
    }

    /// Find a substance by atomic number
    ///
    /// # Errors
    ///
    /// [`TableError::OutOfRange`] unless `number` is in [`ATOMIC_NUMBERS`].
    pub fn find_by_atomic_number(&self, number: u32) -> TableResult<Option<&Substance>> {
        require_in_range("atomic_number", number, &ATOMIC_NUMBERS)?;
        Ok(self.substances.iter().find(|s| s.number == number))
    }

    /// Get a substance by atomic number
    pub fn get_by_atomic_number(&self, number: u32) -> TableResult<&Substance> {
        self.find_by_atomic_number(number)?
            .ok_or_else(|| TableError::not_found("atomic number", number))
    }

    /// Find every substance at a period/group position.
    ///
    /// Usually zero or one record, but the lanthanides and actinides all sit
    /// in group 3 of their period.
    ///
    /// # Errors
    ///
    /// [`TableError::OutOfRange`] unless `period` is in [`PERIODS`] and
    /// `group` is in [`GROUPS`].
    pub fn find_by_position(&self, period: u32, group: u32) -> TableResult<Vec<&Substance>> {
        require_in_range("period", period, &PERIODS)?;
        require_in_range("group", group, &GROUPS)?;
        Ok(self
            .substances
            .iter()
            .filter(|s| s.is_at(period, group))
            .collect())
    }

    /// Get every substance at a period/group position; fails if there are none
    pub fn get_by_position(&self, period: u32, group: u32) -> TableResult<Vec<&Substance>> {
        let substances = self.find_by_position(period, group)?;
        if substances.is_empty() {
            return Err(TableError::not_found(
                "period-group position",
                format!("{}, {}", period, group),
            ));
        }
        Ok(substances)
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Substance;
    type IntoIter = std::slice::Iter<'a, Substance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn require_non_empty(field: &str, value: &str) -> TableResult<()> {
    if value.is_empty() {
        return Err(TableError::invalid_argument(
            field,
            format!("substance {} is not provided", field),
        ));
    }
    Ok(())
}

fn require_in_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> TableResult<()> {
    if !range.contains(&value) {
        return Err(TableError::out_of_range(
            field,
            value,
            *range.start(),
            *range.end(),
        ));
    }
    Ok(())
}

// ============================================================================
// Process-wide table
// ============================================================================

static TABLE: OnceCell<PeriodicTable> = OnceCell::new();

/// The process-wide table, loaded from the embedded assets on first call.
///
/// If loading fails nothing is cached and the error is returned again on the
/// next call.
pub fn table() -> TableResult<&'static PeriodicTable> {
    TABLE.get_or_try_init(PeriodicTable::load_embedded)
}

/// All substances in dataset order
pub fn all() -> TableResult<&'static [Substance]> {
    Ok(table()?.all())
}

/// See [`PeriodicTable::find_by_name`]
pub fn find_by_name(name: &str) -> TableResult<Option<&'static Substance>> {
    table()?.find_by_name(name)
}

/// See [`PeriodicTable::get_by_name`]
pub fn get_by_name(name: &str) -> TableResult<&'static Substance> {
    table()?.get_by_name(name)
}

/// See [`PeriodicTable::find_by_symbol`]
pub fn find_by_symbol(symbol: &str) -> TableResult<Option<&'static Substance>> {
    table()?.find_by_symbol(symbol)
}

/// See [`PeriodicTable::get_by_symbol`]
pub fn get_by_symbol(symbol: &str) -> TableResult<&'static Substance> {
    table()?.get_by_symbol(symbol)
}

/// See [`PeriodicTable::find_by_atomic_number`]
pub fn find_by_atomic_number(number: u32) -> TableResult<Option<&'static Substance>> {
    table()?.find_by_atomic_number(number)
}

/// See [`PeriodicTable::get_by_atomic_number`]
pub fn get_by_atomic_number(number: u32) -> TableResult<&'static Substance> {
    table()?.get_by_atomic_number(number)
}

/// See [`PeriodicTable::find_by_position`]
pub fn find_by_position(period: u32, group: u32) -> TableResult<Vec<&'static Substance>> {
    table()?.find_by_position(period, group)
}

/// See [`PeriodicTable::get_by_position`]
pub fn get_by_position(period: u32, group: u32) -> TableResult<Vec<&'static Substance>> {
    table()?.get_by_position(period, group)
}
