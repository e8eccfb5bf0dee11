use serde::Serialize;

use crate::model::percentiles::PercentileTable;
use crate::model::ranges::{CEILING_LABEL, FLOOR_LABEL, FLOOR_MAX, RangeTable};
use crate::pipeline::PipelineResult;
use crate::pipeline::stage1_validate::{ValidationError, ValidationIssue};
use crate::pipeline::stage6_percentile::percentile_below;

#[derive(Debug, Serialize)]
struct ResultDocument<'a> {
    tool: &'static str,
    version: &'static str,
    status: &'static str,
    #[serde(flatten)]
    result: &'a PipelineResult,
}

#[derive(Debug, Serialize)]
struct ValidationDocument<'a> {
    tool: &'static str,
    version: &'static str,
    status: &'static str,
    issues: &'a [ValidationIssue],
}

#[derive(Debug, Serialize)]
struct BandRow {
    min_rounded: Option<i64>,
    max_rounded: Option<i64>,
    label: &'static str,
    percentile_below: Option<u8>,
}

pub fn render_result_json(result: &PipelineResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ResultDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
        result,
    })
}

pub fn render_validation_json(err: &ValidationError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ValidationDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "invalid",
        issues: &err.issues,
    })
}

pub fn render_bands_json(
    ranges: &RangeTable,
    percentiles: &PercentileTable,
) -> serde_json::Result<String> {
    let mut rows = Vec::with_capacity(ranges.ranges().len() + 2);
    rows.push(BandRow {
        min_rounded: None,
        max_rounded: Some(FLOOR_MAX),
        label: FLOOR_LABEL,
        percentile_below: percentile_below(percentiles, FLOOR_LABEL),
    });
    for range in ranges.ranges() {
        rows.push(BandRow {
            min_rounded: Some(range.lo),
            max_rounded: Some(range.hi),
            label: range.label,
            percentile_below: percentile_below(percentiles, range.label),
        });
    }
    rows.push(BandRow {
        min_rounded: Some(ranges.highest() + 1),
        max_rounded: None,
        label: CEILING_LABEL,
        percentile_below: percentile_below(percentiles, CEILING_LABEL),
    });
    serde_json::to_string_pretty(&rows)
}
