//! Parallel validation of many independent sequences.

use hh_core::{HhResult, RawDegree};
use rayon::prelude::*;

use crate::havel_hakimi::Validator;

impl Validator {
    /// Check every sequence in parallel. Results keep the input order.
    pub fn check_batch<S>(&self, sequences: &[S]) -> Vec<HhResult<bool>>
    where
        S: AsRef<[RawDegree]> + Sync,
    {
        sequences
            .par_iter()
            .map(|seq| self.check(seq.as_ref()))
            .collect()
    }
}

/// [`Validator::check_batch`] with the default configuration.
pub fn validate_batch<S>(sequences: &[S]) -> Vec<HhResult<bool>>
where
    S: AsRef<[RawDegree]> + Sync,
{
    Validator::default().check_batch(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hh_core::HhError;

    #[test]
    fn batch_keeps_order_and_errors() {
        let sequences: Vec<Vec<RawDegree>> = vec![
            vec![3, 3, 1, 1, 1, 1],
            vec![4, 4, 1, 1],
            vec![],
            vec![1, -1],
        ];
        let results = validate_batch(&sequences);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0], Ok(true));
        assert_eq!(results[1], Ok(false));
        assert_eq!(results[2], Ok(true));
        assert_eq!(results[3], Err(HhError::NegativeDegree { index: 1, value: -1 }));
    }

    #[test]
    fn batch_matches_sequential() {
        let sequences: Vec<Vec<RawDegree>> = (0..200)
            .map(|i| (0..(i % 9)).map(|j| ((i + j) % 5) as RawDegree).collect())
            .collect();
        let validator = Validator::default();
        let parallel = validator.check_batch(&sequences);
        for (seq, result) in sequences.iter().zip(parallel) {
            assert_eq!(result, validator.check(seq));
        }
    }
}
