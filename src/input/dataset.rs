use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;
use crate::model::domain::Domain;
use crate::model::tables::{FALLBACK_STANDARDIZED, LookupTable, ScaleTables};

/// One row of the raw-to-scaled conversion dataset.
///
/// `index` is the raw sum; a null or missing score means the domain has no
/// entry for that raw sum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScaleRecord {
    pub index: i64,
    #[serde(rename = "vTable", default)]
    pub verbal: Option<f64>,
    #[serde(rename = "qTable", default)]
    pub quantitative: Option<f64>,
    #[serde(rename = "eTable", default)]
    pub english: Option<f64>,
}

impl ScaleRecord {
    fn score(&self, domain: Domain) -> Option<f64> {
        match domain {
            Domain::Verbal => self.verbal,
            Domain::Quantitative => self.quantitative,
            Domain::English => self.english,
        }
    }
}

pub fn load_scale_tables(path: &Path) -> Result<ScaleTables, InputError> {
    let reader = open_maybe_gz(path)?;
    let records: Vec<ScaleRecord> =
        serde_json::from_reader(reader).map_err(|source| InputError::Json {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(
        "read {} conversion rows from {}",
        records.len(),
        path.display()
    );
    tables_from_records(&records)
}

pub fn tables_from_records(records: &[ScaleRecord]) -> Result<ScaleTables, InputError> {
    let mut verbal = LookupTable::new();
    let mut quantitative = LookupTable::new();
    let mut english = LookupTable::new();

    for (row, record) in records.iter().enumerate() {
        if record.verbal.is_none() && record.quantitative.is_none() && record.english.is_none() {
            tracing::warn!(
                "conversion row {} (index {}) has no scores; skipping",
                row,
                record.index
            );
            continue;
        }
        let index = u32::try_from(record.index).map_err(|_| InputError::InvalidRecord {
            row,
            reason: format!("index {} is not a non-negative raw sum", record.index),
        })?;

        for (domain, table) in [
            (Domain::Verbal, &mut verbal),
            (Domain::Quantitative, &mut quantitative),
            (Domain::English, &mut english),
        ] {
            let Some(value) = record.score(domain) else {
                continue;
            };
            let score = whole_score(row, domain, value)?;
            if table.insert(index, score).is_some() {
                return Err(InputError::DuplicateIndex { domain, index, row });
            }
        }
    }

    for (domain, table) in [
        (Domain::Verbal, &verbal),
        (Domain::Quantitative, &quantitative),
        (Domain::English, &english),
    ] {
        if table.is_empty() {
            tracing::warn!(
                "{} table has no entries; every {} raw sum scales to {}",
                domain,
                domain,
                FALLBACK_STANDARDIZED
            );
        } else if let Some((lo, hi)) = table.key_range() {
            tracing::info!(
                "{} table: {} entries, raw sums {}..={}",
                domain,
                table.len(),
                lo,
                hi
            );
        }
    }

    Ok(ScaleTables::new(verbal, quantitative, english))
}

fn whole_score(row: usize, domain: Domain, value: f64) -> Result<u32, InputError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(InputError::InvalidRecord {
            row,
            reason: format!("{domain} score {value} is not a whole non-negative number"),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/dataset.rs"]
mod tests;
