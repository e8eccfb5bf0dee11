use crate::model::percentiles::{CEILING_PERCENT, FLOOR_PERCENT, PercentileTable};
use crate::model::ranges::{CEILING_LABEL, FLOOR_LABEL};

const LABEL_SEPARATOR: &str = " - ";

/// Lower bound of a `"lo - hi"` label.
pub fn parse_lower_bound(label: &str) -> Option<i64> {
    label.split(LABEL_SEPARATOR).next()?.trim().parse().ok()
}

pub fn percentile_below(table: &PercentileTable, label: &str) -> Option<u8> {
    match label {
        FLOOR_LABEL => Some(FLOOR_PERCENT),
        CEILING_LABEL => Some(CEILING_PERCENT),
        _ => table.below_for(parse_lower_bound(label)?),
    }
}

pub fn percentile_text(table: &PercentileTable, label: &str) -> Option<String> {
    let below = percentile_below(table, label)?;
    let text = if label == FLOOR_LABEL || label == CEILING_LABEL {
        format!("Approximately {below}% scored below this score.")
    } else {
        format!("Approximately {below}% of examinees scored below this range.")
    };
    Some(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_percentile.rs"]
mod tests;
