pub mod composites;
pub mod domain;
pub mod percentiles;
pub mod ranges;
pub mod tables;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("band table has no intervals")]
    EmptyRanges,
    #[error("band intervals are not contiguous: expected lower bound {expected}, found {found}")]
    RangeGap { expected: i64, found: i64 },
    #[error("band interval {lo}..={hi} is inverted")]
    InvertedRange { lo: i64, hi: i64 },
    #[error("band label {0:?} is empty or collides with a sentinel label")]
    BadLabel(String),
    #[error("band label {0:?} appears more than once")]
    DuplicateLabel(String),
    #[error("percentile table has no thresholds")]
    EmptyPercentiles,
    #[error("percentile thresholds out of order: {previous} followed by {next}")]
    UnorderedThreshold { previous: i64, next: i64 },
    #[error("percentile at threshold {threshold} is lower than the one before it")]
    DecreasingPercent { threshold: i64 },
    #[error("percentile {0} is above 100")]
    PercentOutOfRange(u8),
    #[error("band label {0:?} has no percentile estimate")]
    UnmappedLabel(String),
}
