use crate::model::percentiles::{CEILING_PERCENT, FLOOR_PERCENT, PercentileTable};
use crate::model::ranges::{CEILING_LABEL, FLOOR_LABEL, FLOOR_MAX, RangeTable};
use crate::pipeline::PipelineResult;
use crate::pipeline::stage1_validate::ValidationError;
use crate::pipeline::stage6_percentile::percentile_below;
use crate::report::{format_composite, format_raw};

pub fn render_result_text(result: &PipelineResult) -> String {
    let mut out = String::new();

    out.push_str("Composite Score Estimates\n");
    out.push_str("=========================\n\n");

    for outcome in result.outcomes() {
        out.push_str(&format!(
            "{}: {}\n",
            outcome.kind.name(),
            outcome.label
        ));
        out.push_str(&format!(
            "  composite {} (rounded {})\n",
            format_composite(outcome.composite),
            outcome.rounded
        ));
        out.push_str(&format!("  {}\n\n", outcome.percentile_text));
    }

    out.push_str(&format!(
        "Standardized Scores: Quantitative {}, Verbal {}, English {}\n",
        result.standardized.quantitative, result.standardized.verbal, result.standardized.english
    ));
    out.push_str(&format!(
        "Used Raw Totals: Quantitative {}, Verbal {}, English {}\n",
        format_raw(result.raw_sums.quantitative),
        format_raw(result.raw_sums.verbal),
        format_raw(result.raw_sums.english)
    ));
    out
}

pub fn render_validation_text(err: &ValidationError) -> String {
    let mut out = String::new();
    out.push_str("Invalid raw scores; nothing was calculated.\n");
    let domains: Vec<&str> = err.domains().iter().map(|d| d.name()).collect();
    out.push_str(&format!("Check: {}\n", domains.join(", ")));
    for issue in &err.issues {
        out.push_str(&format!("  - {issue}\n"));
    }
    out
}

pub fn render_bands_text(ranges: &RangeTable, percentiles: &PercentileTable) -> String {
    let mut out = String::new();
    out.push_str("rounded\tband\tpercentile_below\n");
    out.push_str(&format!(
        "<= {}\t{}\t{}\n",
        FLOOR_MAX, FLOOR_LABEL, FLOOR_PERCENT
    ));
    for range in ranges.ranges() {
        let below = percentile_below(percentiles, range.label)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{}-{}\t{}\t{}\n",
            range.lo, range.hi, range.label, below
        ));
    }
    out.push_str(&format!(
        ">= {}\t{}\t{}\n",
        ranges.highest() + 1,
        CEILING_LABEL,
        CEILING_PERCENT
    ));
    out
}
