use crate::model::TableError;

pub const FLOOR_PERCENT: u8 = 0;
pub const CEILING_PERCENT: u8 = 97;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileStep {
    /// Largest band lower bound this step covers.
    pub max: i64,
    pub below: u8,
}

impl PercentileStep {
    pub const fn new(max: i64, below: u8) -> Self {
        Self { max, below }
    }
}

const STANDARD_STEPS: &[PercentileStep] = &[
    PercentileStep::new(349, 0),
    PercentileStep::new(374, 6),
    PercentileStep::new(399, 10),
    PercentileStep::new(424, 15),
    PercentileStep::new(449, 20),
    PercentileStep::new(474, 26),
    PercentileStep::new(499, 33),
    PercentileStep::new(524, 40),
    PercentileStep::new(549, 47),
    PercentileStep::new(574, 54),
    PercentileStep::new(599, 61),
    PercentileStep::new(624, 68),
    PercentileStep::new(649, 76),
    PercentileStep::new(674, 83),
    PercentileStep::new(699, 89),
    PercentileStep::new(724, 94),
    PercentileStep::new(800, 97),
];

#[derive(Debug, Clone)]
pub struct PercentileTable {
    steps: Vec<PercentileStep>,
}

impl PercentileTable {
    /// Thresholds must be strictly ascending and percents non-decreasing,
    /// otherwise the first-match scan stops being monotonic.
    pub fn new(steps: Vec<PercentileStep>) -> Result<Self, TableError> {
        if steps.is_empty() {
            return Err(TableError::EmptyPercentiles);
        }
        for step in &steps {
            if step.below > 100 {
                return Err(TableError::PercentOutOfRange(step.below));
            }
        }
        for pair in steps.windows(2) {
            if pair[1].max <= pair[0].max {
                return Err(TableError::UnorderedThreshold {
                    previous: pair[0].max,
                    next: pair[1].max,
                });
            }
            if pair[1].below < pair[0].below {
                return Err(TableError::DecreasingPercent {
                    threshold: pair[1].max,
                });
            }
        }
        Ok(Self { steps })
    }

    pub fn standard() -> Result<Self, TableError> {
        Self::new(STANDARD_STEPS.to_vec())
    }

    pub fn below_for(&self, lower_bound: i64) -> Option<u8> {
        self.steps
            .iter()
            .find(|s| lower_bound <= s.max)
            .map(|s| s.below)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/percentiles.rs"]
mod tests;
