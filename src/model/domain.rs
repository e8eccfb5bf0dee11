use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Verbal,
    Quantitative,
    English,
}

impl Domain {
    /// Highest raw item count a single sub-score may carry.
    pub fn max_raw(self) -> f64 {
        match self {
            Domain::Verbal => 20.0,
            Domain::Quantitative => 20.0,
            Domain::English => 22.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Domain::Verbal => "Verbal",
            Domain::Quantitative => "Quantitative",
            Domain::English => "English",
        }
    }
}

/// Validation reports domains in this order.
pub fn domain_order() -> &'static [Domain] {
    &[Domain::Quantitative, Domain::Verbal, Domain::English]
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
