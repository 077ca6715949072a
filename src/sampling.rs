//! Round-count sampling.
//!
//! ⚠️ The sampled count is the whole secret, and the range holds a few
//! dozen values. Uniform sampling does not change that.

use std::ops::RangeInclusive;

use rand::Rng;

/// Draw a round count uniformly from `range`. The range must be non-empty.
pub fn sample_rounds<R: Rng>(rng: &mut R, range: &RangeInclusive<usize>) -> usize {
    rng.gen_range(range.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ROUNDS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = sample_rounds(&mut rng, &ROUNDS);
            assert!(ROUNDS.contains(&r), "sampled {} outside range", r);
        }
    }

    #[test]
    fn test_samples_cover_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: Vec<usize> = (0..5000).map(|_| sample_rounds(&mut rng, &ROUNDS)).collect();
        assert!(seen.contains(ROUNDS.start()));
        assert!(seen.contains(ROUNDS.end()));
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_rounds(&mut rng, &(30..=30)), 30);
    }
}
