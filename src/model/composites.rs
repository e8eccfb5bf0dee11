use serde::Serialize;

pub const COMPOSITE_DENOMINATOR: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
    General,
    Humanities,
    Science,
}

/// Per-domain weights in (verbal, quantitative, english) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeWeights {
    pub verbal: u32,
    pub quantitative: u32,
    pub english: u32,
}

impl CompositeKind {
    pub fn weights(self) -> CompositeWeights {
        match self {
            CompositeKind::General => CompositeWeights {
                verbal: 2,
                quantitative: 2,
                english: 1,
            },
            CompositeKind::Humanities => CompositeWeights {
                verbal: 3,
                quantitative: 1,
                english: 1,
            },
            CompositeKind::Science => CompositeWeights {
                verbal: 1,
                quantitative: 3,
                english: 1,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompositeKind::General => "General",
            CompositeKind::Humanities => "Humanities",
            CompositeKind::Science => "Science",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Composites {
    pub general: f64,
    pub humanities: f64,
    pub science: f64,
}

impl Composites {
    pub fn get(&self, kind: CompositeKind) -> f64 {
        match kind {
            CompositeKind::General => self.general,
            CompositeKind::Humanities => self.humanities,
            CompositeKind::Science => self.science,
        }
    }
}
