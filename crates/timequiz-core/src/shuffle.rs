//! Question-order randomization.
//!
//! The shuffler owns its random source so callers can pick between a
//! clock-seeded run and a fixed seed that reproduces the same order.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::model::QuestionSet;

/// Produces uniformly random orderings of a `QuestionSet`.
#[derive(Debug, Clone)]
pub struct Shuffler {
    seed: u64,
    rng: StdRng,
}

impl Shuffler {
    /// Seed from the current wall-clock time, so separate runs diverge.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    /// Deterministic shuffler; the same seed yields the same permutations.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this shuffler was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle(&mut self, set: &mut QuestionSet) {
        set.shuffle_with(&mut self.rng);
        tracing::debug!(seed = self.seed, len = set.len(), "shuffled question set");
    }

    pub fn shuffled(&mut self, set: &QuestionSet) -> QuestionSet {
        let mut copy = set.clone();
        self.shuffle(&mut copy);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn numbered(n: u32) -> QuestionSet {
        QuestionSet::from_pairs((1..=n).map(|i| (format!("{i}+{i}"), (i * 2).to_string())))
            .unwrap()
    }

    fn order(set: &QuestionSet) -> Vec<u32> {
        set.iter().map(|q| q.id()).collect()
    }

    #[test]
    fn preserves_every_question_exactly_once() {
        let set = numbered(25);
        let shuffled = Shuffler::seeded(42).shuffled(&set);

        let mut ids = order(&shuffled);
        ids.sort_unstable();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());

        let original: HashSet<_> = set.iter().cloned().collect();
        let after: HashSet<_> = shuffled.iter().cloned().collect();
        assert_eq!(original, after);
    }

    #[test]
    fn same_seed_same_order() {
        let set = numbered(10);
        let a = Shuffler::seeded(99).shuffled(&set);
        let b = Shuffler::seeded(99).shuffled(&set);
        assert_eq!(order(&a), order(&b));
    }

    #[test]
    fn different_seeds_diverge() {
        let set = numbered(8);
        let orders: HashSet<Vec<u32>> = (0..20u64)
            .map(|seed| order(&Shuffler::seeded(seed).shuffled(&set)))
            .collect();
        assert!(orders.len() > 1, "20 seeds produced a single order");
    }

    #[test]
    fn single_question_is_unchanged() {
        let set = numbered(1);
        let shuffled = Shuffler::from_clock().shuffled(&set);
        assert_eq!(shuffled, set);
    }

    #[test]
    fn seed_is_reported() {
        assert_eq!(Shuffler::seeded(5).seed(), 5);
    }
}
