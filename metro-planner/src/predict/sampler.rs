//! Sources of situational conditions for enrichment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Condition;

/// The fixed pool of (weather, holiday, event) tuples that
/// [`RandomSampler`] draws from.
pub const CONDITION_POOL: [(&str, &str, &str); 5] = [
    ("Clear", "No", "None"),
    ("Rain", "No", "None"),
    ("Cloudy", "No", "None"),
    ("Clear", "No", "Stadium Match"),
    ("Clear", "Festival", "None"),
];

/// Supplies a condition for each departure being enriched.
///
/// This abstraction allows enrichment to be tested with deterministic
/// conditions.
pub trait ConditionSampler {
    fn sample(&mut self) -> Condition;
}

/// Draws uniformly from [`CONDITION_POOL`], independently per call.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionSampler for RandomSampler {
    fn sample(&mut self) -> Condition {
        let idx = self.rng.gen_range(0..CONDITION_POOL.len());
        let (weather, holiday, event) = CONDITION_POOL[idx];
        Condition::new(weather, holiday, event)
    }
}

/// Always returns the same condition.
#[derive(Debug, Clone)]
pub struct FixedSampler(pub Condition);

impl ConditionSampler for FixedSampler {
    fn sample(&mut self) -> Condition {
        self.0.clone()
    }
}

/// Returns the given conditions in order, starting over after the last.
#[derive(Debug, Clone)]
pub struct CyclingSampler {
    conditions: Vec<Condition>,
    next: usize,
}

impl CyclingSampler {
    /// An empty list cycles the clear-day condition.
    pub fn new(conditions: Vec<Condition>) -> Self {
        let conditions = if conditions.is_empty() {
            vec![Condition::clear()]
        } else {
            conditions
        };
        Self {
            conditions,
            next: 0,
        }
    }
}

impl ConditionSampler for CyclingSampler {
    fn sample(&mut self) -> Condition {
        let condition = self.conditions[self.next].clone();
        self.next = (self.next + 1) % self.conditions.len();
        condition
    }
}
