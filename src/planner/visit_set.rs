//! Fixed-width visited-destination set.

/// A set of visited destination indices, stored as a `u64` bitmask.
///
/// The fixed width caps supported destination counts at 64 (enforced by the
/// sequencer's input validation) and gives O(1) hashing and equality for the
/// A* dedup table.
///
/// # Examples
///
/// ```
/// use route_sequencer::planner::VisitSet;
///
/// let set = VisitSet::new().with(0).with(2);
/// assert!(set.contains(0));
/// assert!(!set.contains(1));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.unvisited(3).collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisitSet(u64);

impl VisitSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// Returns a copy of the set with `index` marked visited.
    pub fn with(self, index: usize) -> Self {
        Self(self.0 | 1 << index)
    }

    /// Returns `true` if `index` has been visited.
    pub fn contains(self, index: usize) -> bool {
        self.0 >> index & 1 == 1
    }

    /// Number of visited destinations.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if nothing has been visited.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if all of the first `count` destinations are visited.
    pub fn is_full(self, count: usize) -> bool {
        self.len() == count
    }

    /// Iterates the unvisited indices below `count`, ascending.
    pub fn unvisited(self, count: usize) -> impl Iterator<Item = usize> {
        (0..count).filter(move |&i| !self.contains(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = VisitSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.is_full(0));
        assert!(!set.is_full(1));
    }

    #[test]
    fn test_with_and_contains() {
        let set = VisitSet::new().with(3).with(63);
        assert!(set.contains(3));
        assert!(set.contains(63));
        assert!(!set.contains(0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_with_is_idempotent() {
        let set = VisitSet::new().with(5).with(5);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_unvisited_order() {
        let set = VisitSet::new().with(1);
        assert_eq!(set.unvisited(4).collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn test_equal_sets_regardless_of_insertion_order() {
        assert_eq!(VisitSet::new().with(1).with(4), VisitSet::new().with(4).with(1));
    }
}
