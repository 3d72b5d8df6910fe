/*!
# Configuration

A graph is configured once at construction. Settings follow the *Setter* pattern used by the
generators: start from [`GraphConfig::new`] (or `Default`) and chain setters.

```
use friendgraph::prelude::*;

let graph = FriendGraph::with_config(GraphConfig::new().capacity(5));
assert_eq!(graph.capacity(), 5);
```
*/

/// Maximum number of people if nothing else is configured
pub const DEFAULT_CAPACITY: usize = 20;

/// Settings of a [`SocialGraph`](crate::repr::SocialGraph)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GraphConfig {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of people.
    /// ** Panics if `capacity == 0` **
    pub fn capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "A graph must be able to hold at least one person!");
        self.capacity = capacity;
        self
    }

    /// Returns the configured maximum number of people
    pub fn max_people(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(GraphConfig::default().max_people(), DEFAULT_CAPACITY);
        assert_eq!(GraphConfig::new().capacity(3).max_people(), 3);
    }

    #[test]
    #[should_panic]
    fn zero_capacity() {
        let _ = GraphConfig::new().capacity(0);
    }
}
