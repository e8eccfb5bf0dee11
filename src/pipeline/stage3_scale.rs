use crate::model::tables::{FALLBACK_STANDARDIZED, LookupTable};

/// Exact-key lookup with a flat fallback; neighbouring keys are never consulted.
pub fn scale(table: &LookupTable, raw_sum: f64) -> u32 {
    raw_sum_key(raw_sum)
        .and_then(|key| table.get(key))
        .unwrap_or(FALLBACK_STANDARDIZED)
}

/// Only whole, non-negative sums can name a table row.
fn raw_sum_key(raw_sum: f64) -> Option<u32> {
    if raw_sum.is_finite() && raw_sum >= 0.0 && raw_sum.fract() == 0.0 && raw_sum <= u32::MAX as f64
    {
        Some(raw_sum as u32)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scale.rs"]
mod tests;
