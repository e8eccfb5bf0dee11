use serde::Serialize;

use crate::model::composites::{COMPOSITE_DENOMINATOR, CompositeKind, Composites};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standardized {
    pub verbal: u32,
    pub quantitative: u32,
    pub english: u32,
}

pub fn weighted(kind: CompositeKind, scores: Standardized) -> f64 {
    let w = kind.weights();
    let total = w.verbal as f64 * scores.verbal as f64
        + w.quantitative as f64 * scores.quantitative as f64
        + w.english as f64 * scores.english as f64;
    total / COMPOSITE_DENOMINATOR
}

pub fn run_stage4(scores: Standardized) -> Composites {
    Composites {
        general: weighted(CompositeKind::General, scores),
        humanities: weighted(CompositeKind::Humanities, scores),
        science: weighted(CompositeKind::Science, scores),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_compose.rs"]
mod tests;
