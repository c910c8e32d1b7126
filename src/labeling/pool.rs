//! Candidate labels offered to the search

/// Largest node count whose odd labels all fit in a `u32`
pub const MAX_NODES: usize = 1 << 31;

/// Label values in ascending order, without repeats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool(Vec<u32>);

impl CandidatePool {
    /// The first `n` odd numbers: 1, 3, 5, ..., 2n - 1.
    ///
    /// `None` when `n` exceeds [`MAX_NODES`].
    pub fn odd(n: usize) -> Option<Self> {
        if n > MAX_NODES {
            return None;
        }
        let n = u32::try_from(n).ok()?;
        Some(Self((0..n).map(|i| 2 * i + 1).collect()))
    }

    /// An arbitrary pool; values are sorted and deduplicated
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let mut values: Vec<u32> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}
