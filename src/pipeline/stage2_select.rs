use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the pair used when a pool holds more than two present scores.
///
/// Implementations return two distinct positions in `0..len`. The selector
/// only consults the picker when `len > 2`.
pub trait PairPicker {
    fn pick_pair(&mut self, len: usize) -> (usize, usize);
}

impl<F> PairPicker for F
where
    F: FnMut(usize) -> (usize, usize),
{
    fn pick_pair(&mut self, len: usize) -> (usize, usize) {
        self(len)
    }
}

/// Uniform pair selection backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PairPicker for RandomPicker<R> {
    fn pick_pair(&mut self, len: usize) -> (usize, usize) {
        let picked = rand::seq::index::sample(&mut self.rng, len, 2);
        (picked.index(0), picked.index(1))
    }
}

pub fn present_values(pool: &[Option<f64>]) -> Vec<f64> {
    pool.iter().filter_map(|v| *v).collect()
}

/// Sums two present scores from `pool`.
///
/// Exactly two present scores are summed as-is. With more, the picker
/// chooses the pair, even when the extra scores are duplicates. Returns
/// `None` for fewer than two present scores or an invalid pick.
pub fn select_two(pool: &[Option<f64>], picker: &mut dyn PairPicker) -> Option<f64> {
    let values = present_values(pool);
    match values.len() {
        0 | 1 => None,
        2 => Some(values[0] + values[1]),
        len => {
            let (a, b) = picker.pick_pair(len);
            if a == b {
                return None;
            }
            Some(values.get(a)? + values.get(b)?)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_select.rs"]
mod tests;
