use crate::model::ranges::{CEILING_LABEL, FLOOR_LABEL, FLOOR_MAX, RangeTable};

/// Rounds halves towards positive infinity.
///
/// NaN saturates to 0 and infinities to the `i64` limits, which keeps
/// [`band`] total.
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

pub fn band(table: &RangeTable, composite: f64) -> &'static str {
    let rounded = round_half_up(composite);
    if rounded <= FLOOR_MAX {
        return FLOOR_LABEL;
    }
    match table.find(rounded) {
        Some(range) => range.label,
        None => CEILING_LABEL,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_band.rs"]
mod tests;
