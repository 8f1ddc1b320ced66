//! The contract every searchable puzzle state satisfies.
//!
//! The solver never looks inside a configuration. It only asks whether a
//! value is a goal, what its neighbors are, and relies on `Eq` + `Hash` to
//! deduplicate states it has already seen.

use std::hash::Hash;

/// One immutable state in a puzzle's state space.
///
/// Implementors must keep `Eq` and `Hash` consistent: two configurations
/// with the same puzzle-significant state compare equal and hash equally.
/// Fields that are shared by every state of one puzzle (a target string, an
/// alphabet) should be left out of both.
pub trait Configuration: Clone + Eq + Hash {
    /// Whether this configuration solves the puzzle.
    fn is_goal(&self) -> bool;

    /// Every configuration reachable in exactly one move.
    ///
    /// The order must be stable for a given value, since it decides which
    /// path the solver reports when several shortest paths exist. An empty
    /// vector marks a dead end.
    fn neighbors(&self) -> Vec<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    /// A counter that moves up by one until it reaches its limit.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Counter {
        value: u32,
        limit: u32,
    }

    impl Configuration for Counter {
        fn is_goal(&self) -> bool {
            self.value == self.limit
        }

        fn neighbors(&self) -> Vec<Self> {
            if self.value < self.limit {
                vec![Counter {
                    value: self.value + 1,
                    limit: self.limit,
                }]
            } else {
                Vec::new()
            }
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_configurations_hash_equally() {
        let a = Counter { value: 3, limit: 5 };
        let b = Counter { value: 3, limit: 5 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_neighbors_are_fresh_values() {
        let start = Counter { value: 0, limit: 2 };
        let next = start.neighbors();
        assert_eq!(next, vec![Counter { value: 1, limit: 2 }]);
        assert_eq!(start.value, 0);
        assert!(Counter { value: 2, limit: 2 }.neighbors().is_empty());
    }
}
