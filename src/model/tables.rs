use std::collections::BTreeMap;

use crate::model::domain::Domain;

/// Standardized score used for any raw sum the table has no entry for.
pub const FALLBACK_STANDARDIZED: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: BTreeMap<u32, u32>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous score when the key was already present.
    pub fn insert(&mut self, raw_sum: u32, standardized: u32) -> Option<u32> {
        self.entries.insert(raw_sum, standardized)
    }

    pub fn get(&self, raw_sum: u32) -> Option<u32> {
        self.entries.get(&raw_sum).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_range(&self) -> Option<(u32, u32)> {
        let lo = self.entries.keys().next()?;
        let hi = self.entries.keys().next_back()?;
        Some((*lo, *hi))
    }
}

impl FromIterator<(u32, u32)> for LookupTable {
    fn from_iter<T: IntoIterator<Item = (u32, u32)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaleTables {
    verbal: LookupTable,
    quantitative: LookupTable,
    english: LookupTable,
}

impl ScaleTables {
    /// Tables are sparse; an empty one scales every raw sum to the fallback.
    pub fn new(verbal: LookupTable, quantitative: LookupTable, english: LookupTable) -> Self {
        Self {
            verbal,
            quantitative,
            english,
        }
    }

    pub fn table(&self, domain: Domain) -> &LookupTable {
        match domain {
            Domain::Verbal => &self.verbal,
            Domain::Quantitative => &self.quantitative,
            Domain::English => &self.english,
        }
    }
}
