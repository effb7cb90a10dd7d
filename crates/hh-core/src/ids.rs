use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used across the graph layer.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Largest index an Id can represent.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// Returns None for `u32::MAX`, which has no index+1.
    pub fn try_from_index(index: u32) -> Option<Self> {
        NonZeroU32::new(index.wrapping_add(1)).map(Self)
    }

    /// Infallible form of [`try_from_index`](Self::try_from_index).
    ///
    /// Indices above `MAX_INDEX` are clamped to `MAX_INDEX`; allocators that
    /// hand out fresh IDs must use `try_from_index` instead.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index.min(Self::MAX_INDEX)))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for slice access.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Vertex handle handed out by the graph builder.
pub type VertexId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(id.slot(), i as usize);
        }
    }

    #[test]
    fn last_index_has_no_id() {
        assert_eq!(Id::try_from_index(u32::MAX), None);
        let last = Id::try_from_index(Id::MAX_INDEX).unwrap();
        assert_eq!(last.index(), Id::MAX_INDEX);
        assert_ne!(Id::try_from_index(Id::MAX_INDEX - 1), Some(last));
        assert_eq!(Id::try_from_index(0), Some(Id::from_index(0)));
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn display_uses_index() {
        assert_eq!(format!("{}", Id::from_index(7)), "7");
        assert_eq!(format!("{:?}", Id::from_index(7)), "Id(7)");
    }
}
