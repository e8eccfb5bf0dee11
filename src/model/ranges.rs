use crate::model::TableError;

pub const FLOOR_LABEL: &str = "200";
pub const CEILING_LABEL: &str = "800";

/// Rounded composites at or below this value land in the floor band.
pub const FLOOR_MAX: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandRange {
    pub lo: i64,
    pub hi: i64,
    pub label: &'static str,
}

impl BandRange {
    pub const fn new(lo: i64, hi: i64, label: &'static str) -> Self {
        Self { lo, hi, label }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

const STANDARD_RANGES: &[BandRange] = &[
    BandRange::new(51, 55, "221 - 248"),
    BandRange::new(56, 60, "249 - 276"),
    BandRange::new(61, 65, "277 - 304"),
    BandRange::new(66, 70, "305 - 333"),
    BandRange::new(71, 75, "334 - 361"),
    BandRange::new(76, 80, "362 - 389"),
    BandRange::new(81, 85, "390 - 418"),
    BandRange::new(86, 90, "419 - 446"),
    BandRange::new(91, 95, "447 - 474"),
    BandRange::new(96, 100, "475 - 503"),
    BandRange::new(101, 105, "504 - 531"),
    BandRange::new(106, 110, "532 - 559"),
    BandRange::new(111, 115, "560 - 587"),
    BandRange::new(116, 120, "588 - 616"),
    BandRange::new(121, 125, "617 - 644"),
    BandRange::new(126, 130, "645 - 672"),
    BandRange::new(131, 135, "673 - 701"),
    BandRange::new(136, 140, "702 - 729"),
    BandRange::new(141, 145, "730 - 761"),
    BandRange::new(146, 149, "762 - 795"),
];

/// Ordered band intervals between the floor and ceiling sentinels.
///
/// Construction guarantees the intervals start right above [`FLOOR_MAX`],
/// are non-empty, and follow each other without gaps or overlap, so every
/// integer in `[lowest, highest]` belongs to exactly one interval.
#[derive(Debug, Clone)]
pub struct RangeTable {
    ranges: Vec<BandRange>,
}

impl RangeTable {
    pub fn new(ranges: Vec<BandRange>) -> Result<Self, TableError> {
        let first = ranges.first().ok_or(TableError::EmptyRanges)?;
        if first.lo != FLOOR_MAX + 1 {
            return Err(TableError::RangeGap {
                expected: FLOOR_MAX + 1,
                found: first.lo,
            });
        }

        let mut expected_lo = first.lo;
        for (idx, range) in ranges.iter().enumerate() {
            if range.lo != expected_lo {
                return Err(TableError::RangeGap {
                    expected: expected_lo,
                    found: range.lo,
                });
            }
            if range.hi < range.lo {
                return Err(TableError::InvertedRange {
                    lo: range.lo,
                    hi: range.hi,
                });
            }
            let label = range.label.trim();
            if label.is_empty() || label == FLOOR_LABEL || label == CEILING_LABEL {
                return Err(TableError::BadLabel(range.label.to_string()));
            }
            if ranges[..idx].iter().any(|r| r.label == range.label) {
                return Err(TableError::DuplicateLabel(range.label.to_string()));
            }
            expected_lo = range.hi + 1;
        }

        Ok(Self { ranges })
    }

    pub fn standard() -> Result<Self, TableError> {
        Self::new(STANDARD_RANGES.to_vec())
    }

    pub fn ranges(&self) -> &[BandRange] {
        &self.ranges
    }

    pub fn highest(&self) -> i64 {
        self.ranges[self.ranges.len() - 1].hi
    }

    pub fn find(&self, rounded: i64) -> Option<&BandRange> {
        self.ranges.iter().find(|r| r.contains(rounded))
    }

    /// Every label this table can produce, sentinels included, in ascending order.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(self.ranges.len() + 2);
        out.push(FLOOR_LABEL);
        out.extend(self.ranges.iter().map(|r| r.label));
        out.push(CEILING_LABEL);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ranges.rs"]
mod tests;
