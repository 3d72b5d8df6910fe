use std::{
    iter::{Copied, Rev},
    slice::Iter,
};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified person.
///
/// A Neighborhood is **ordered**: [`Neighborhood::neighbors`] yields the most recently added
/// friend first. Removing a friend keeps the relative order of the remaining ones.
pub trait Neighborhood: Clone + Default {
    /// Creates an empty Neighborhood
    fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors, most recently added first
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Reserves space for `additional` more neighbors without changing the Neighborhood
    fn try_reserve(&mut self, additional: usize) -> Result<()>;

    /// Adds a neighbor in front of all others without checking if it exists beforehand.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Decrements every neighbor `> removed` by one.
    /// Must only be called once `removed` itself is no longer a neighbor.
    fn renumber_after_removal(&mut self, removed: Node);
}

/// Both representations keep neighbors in insertion order and iterate them in reverse.
/// This gives most-recent-first iteration with `O(1)` insertion.
macro_rules! impl_vec_neighborhood {
    () => {
        fn num_of_neighbors(&self) -> NumNodes {
            self.0.len() as NumNodes
        }

        type NeighborhoodIter<'a>
            = Rev<Copied<Iter<'a, Node>>>
        where
            Self: 'a;

        fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
            self.0.iter().copied().rev()
        }

        fn add_neighbor(&mut self, u: Node) {
            self.0.push(u);
        }

        fn try_remove_neighbor(&mut self, u: Node) -> bool {
            if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
                self.0.remove(pos);
                true
            } else {
                false
            }
        }

        fn renumber_after_removal(&mut self, removed: Node) {
            for x in self.0.iter_mut() {
                debug_assert_ne!(*x, removed);
                if *x > removed {
                    *x -= 1;
                }
            }
        }
    };
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    impl_vec_neighborhood!();

    fn try_reserve(&mut self, additional: usize) -> Result<()> {
        Ok(self.0.try_reserve(additional)?)
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if most people only have a few friends.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    impl_vec_neighborhood!();

    fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.0
            .try_reserve(additional)
            .map_err(|e| GraphError::OutOfMemory(format!("{e:?}")))
    }
}
