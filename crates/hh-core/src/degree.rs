//! Degree types and the degree-source collaborator interface.

/// A degree as supplied by a caller. Signed so malformed input can be reported.
pub type RawDegree = i64;

/// A validated, non-negative degree.
pub type Degree = usize;

/// Anything that can produce an ordered degree sequence.
///
/// Order is not significant to graphicality, but implementations should
/// enumerate vertices consistently so reports are reproducible.
pub trait DegreeSource {
    /// Number of vertices the sequence describes.
    fn vertex_count(&self) -> usize;

    /// One degree per vertex, in enumeration order.
    fn degree_sequence(&self) -> Vec<RawDegree>;
}

impl DegreeSource for [RawDegree] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn degree_sequence(&self) -> Vec<RawDegree> {
        self.to_vec()
    }
}

impl DegreeSource for Vec<RawDegree> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn degree_sequence(&self) -> Vec<RawDegree> {
        self.clone()
    }
}

impl<const N: usize> DegreeSource for [RawDegree; N] {
    fn vertex_count(&self) -> usize {
        N
    }

    fn degree_sequence(&self) -> Vec<RawDegree> {
        self.to_vec()
    }
}

impl<T: DegreeSource + ?Sized> DegreeSource for &T {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn degree_sequence(&self) -> Vec<RawDegree> {
        (**self).degree_sequence()
    }
}

/// Parity of the total degree, computed without summing (no overflow).
///
/// Negative values contribute their absolute parity, which equals their parity.
pub fn sum_is_even(degrees: &[RawDegree]) -> bool {
    degrees.iter().fold(true, |even, &d| even ^ (d & 1 != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_sources() {
        let v: Vec<RawDegree> = vec![3, 3, 1, 1, 1, 1];
        assert_eq!(v.vertex_count(), 6);
        assert_eq!(v.degree_sequence(), v);

        let arr = [1_i64, 2, 3];
        assert_eq!(arr.vertex_count(), 3);
        assert_eq!(arr[..].degree_sequence(), vec![1, 2, 3]);
        assert_eq!((&arr).degree_sequence(), vec![1, 2, 3]);
    }

    #[test]
    fn parity() {
        assert!(sum_is_even(&[]));
        assert!(sum_is_even(&[1, 2, 3]));
        assert!(!sum_is_even(&[1, 2, 4]));
        assert!(!sum_is_even(&[-1]));
        assert!(sum_is_even(&[-1, 1]));
        assert!(sum_is_even(&[i64::MAX, i64::MAX]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parity_matches_sum(degrees in prop::collection::vec(-1000_i64..1000, 0..32)) {
            let sum: i64 = degrees.iter().sum();
            prop_assert_eq!(sum_is_even(&degrees), sum % 2 == 0);
        }
    }
}
