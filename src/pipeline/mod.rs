pub mod stage1_validate;
pub mod stage2_select;
pub mod stage3_scale;
pub mod stage4_compose;
pub mod stage5_band;
pub mod stage6_percentile;
pub mod stage7_report;

use serde::Serialize;
use thiserror::Error;

use crate::model::TableError;
use crate::model::composites::{CompositeKind, Composites};
use crate::model::domain::Domain;
use crate::model::percentiles::PercentileTable;
use crate::model::ranges::RangeTable;
use crate::model::tables::ScaleTables;
use crate::pipeline::stage1_validate::{ValidationError, run_stage1};
use crate::pipeline::stage2_select::{PairPicker, select_two};
use crate::pipeline::stage3_scale::scale;
use crate::pipeline::stage4_compose::{Standardized, run_stage4};
use crate::pipeline::stage5_band::{band, round_half_up};
use crate::pipeline::stage6_percentile::{percentile_below, percentile_text};

/// Raw sub-scores per domain; `None` marks an empty slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPools {
    pub verbal: Vec<Option<f64>>,
    pub quantitative: Vec<Option<f64>>,
    pub english: Vec<Option<f64>>,
}

impl RawPools {
    pub fn pool(&self, domain: Domain) -> &[Option<f64>] {
        match domain {
            Domain::Verbal => &self.verbal,
            Domain::Quantitative => &self.quantitative,
            Domain::English => &self.english,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawSums {
    pub verbal: f64,
    pub quantitative: f64,
    pub english: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeOutcome {
    pub kind: CompositeKind,
    pub composite: f64,
    pub rounded: i64,
    pub label: &'static str,
    pub percentile_below: u8,
    pub percentile_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub general: CompositeOutcome,
    pub humanities: CompositeOutcome,
    pub science: CompositeOutcome,
    pub raw_sums: RawSums,
    pub standardized: Standardized,
}

impl PipelineResult {
    pub fn outcomes(&self) -> [&CompositeOutcome; 3] {
        [&self.general, &self.humanities, &self.science]
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("pair picker returned an invalid selection for {0}")]
    InvalidPick(Domain),
    #[error("band label {0:?} has no percentile estimate")]
    UnmappedBand(&'static str),
}

/// Immutable scoring configuration: conversion tables plus band and percentile tables.
///
/// Built once before the first run and shared by reference afterwards.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    tables: ScaleTables,
    ranges: RangeTable,
    percentiles: PercentileTable,
}

impl ScoringPipeline {
    /// Rejects band tables whose labels the percentile table cannot resolve.
    pub fn new(
        tables: ScaleTables,
        ranges: RangeTable,
        percentiles: PercentileTable,
    ) -> Result<Self, TableError> {
        for label in ranges.labels() {
            if percentile_below(&percentiles, label).is_none() {
                return Err(TableError::UnmappedLabel(label.to_string()));
            }
        }
        Ok(Self {
            tables,
            ranges,
            percentiles,
        })
    }

    pub fn standard(tables: ScaleTables) -> Result<Self, TableError> {
        Self::new(tables, RangeTable::standard()?, PercentileTable::standard()?)
    }

    pub fn run(
        &self,
        pools: &RawPools,
        picker: &mut dyn PairPicker,
    ) -> Result<PipelineResult, PipelineError> {
        run_stage1(pools)?;

        let raw_verbal = select_domain(pools, Domain::Verbal, picker)?;
        let raw_quant = select_domain(pools, Domain::Quantitative, picker)?;
        let raw_english = select_domain(pools, Domain::English, picker)?;

        let standardized = Standardized {
            verbal: scale(self.tables.table(Domain::Verbal), raw_verbal),
            quantitative: scale(self.tables.table(Domain::Quantitative), raw_quant),
            english: scale(self.tables.table(Domain::English), raw_english),
        };
        tracing::debug!(
            "standardized scores: verbal={}, quantitative={}, english={}",
            standardized.verbal,
            standardized.quantitative,
            standardized.english
        );

        let composites = run_stage4(standardized);

        Ok(PipelineResult {
            general: self.outcome(CompositeKind::General, &composites)?,
            humanities: self.outcome(CompositeKind::Humanities, &composites)?,
            science: self.outcome(CompositeKind::Science, &composites)?,
            raw_sums: RawSums {
                verbal: raw_verbal,
                quantitative: raw_quant,
                english: raw_english,
            },
            standardized,
        })
    }

    fn outcome(
        &self,
        kind: CompositeKind,
        composites: &Composites,
    ) -> Result<CompositeOutcome, PipelineError> {
        let composite = composites.get(kind);
        let label = band(&self.ranges, composite);
        let below = percentile_below(&self.percentiles, label);
        let text = percentile_text(&self.percentiles, label);
        debug_assert!(below.is_some(), "band label {label:?} has no percentile");
        match (below, text) {
            (Some(percentile_below), Some(percentile_text)) => Ok(CompositeOutcome {
                kind,
                composite,
                rounded: round_half_up(composite),
                label,
                percentile_below,
                percentile_text,
            }),
            _ => Err(PipelineError::UnmappedBand(label)),
        }
    }
}

fn select_domain(
    pools: &RawPools,
    domain: Domain,
    picker: &mut dyn PairPicker,
) -> Result<f64, PipelineError> {
    let raw_sum =
        select_two(pools.pool(domain), picker).ok_or(PipelineError::InvalidPick(domain))?;
    tracing::debug!("{} raw sum: {}", domain, raw_sum);
    Ok(raw_sum)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
