//! Union-find (disjoint set union) over substation labels.
//!
//! Kruskal's algorithm tracks connected components by merging the endpoint
//! sets of each accepted link. This module provides the union-find structure
//! used for those merges, keyed by substation label so the engine never has
//! to expose slot indices to callers.

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

/// A label was queried that is not part of the set the structure was built
/// over.
///
/// Seeing this from [`crate::minimum_spanning_forest`] indicates a logic
/// error rather than bad user input: the engine builds the registry node set
/// and the union-find from the same link list.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("substation `{node}` is not part of this disjoint set")]
pub struct UnknownNode {
    /// The label that was not found.
    pub node: Arc<str>,
}

/// Union-find over a fixed set of substation labels.
///
/// Every label starts as its own root with rank 0. `find` flattens the
/// traversed path onto the root; `union` attaches the lower-rank root under
/// the higher-rank one, the first argument winning rank ties. Together these
/// keep the forest shallow enough that repeated queries stay near-constant,
/// and, more importantly for the algorithm, guarantee a single canonical
/// root per connected component.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use gridspan_core::DisjointSet;
///
/// let labels = ["north", "south", "east"].map(Arc::<str>::from);
/// let mut sets = DisjointSet::new(labels);
/// assert!(sets.union("north", "south")?);
/// assert!(!sets.union("south", "north")?);
/// assert_eq!(sets.find("south")?.as_ref(), "north");
/// # Ok::<(), gridspan_core::UnknownNode>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    slots: HashMap<Arc<str>, usize>,
    labels: Vec<Arc<str>>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Builds the structure over the given labels. Repeated labels collapse
    /// into a single entry.
    #[must_use]
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Arc<str>>,
    {
        let mut slots = HashMap::new();
        let mut labels: Vec<Arc<str>> = Vec::new();
        for label in nodes {
            if slots.contains_key(&label) {
                continue;
            }
            slots.insert(Arc::clone(&label), labels.len());
            labels.push(label);
        }
        let parent = (0..labels.len()).collect();
        let rank = vec![0; labels.len()];
        Self {
            slots,
            labels,
            parent,
            rank,
        }
    }

    /// Returns the number of labels the structure was built over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the structure was built over no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns whether `node` was part of the initial label set.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.slots.contains_key(node)
    }

    /// Returns the representative label of `node`'s set.
    ///
    /// Every slot visited on the way to the root is re-pointed directly at
    /// the root before returning.
    ///
    /// # Errors
    /// Returns [`UnknownNode`] when `node` was not part of the initial set.
    pub fn find(&mut self, node: &str) -> Result<Arc<str>, UnknownNode> {
        let slot = self.slot_of(node)?;
        let root = self.find_slot(slot);
        Ok(Arc::clone(&self.labels[root]))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both are already in the same set (the merge is a
    /// no-op) and `true` when a merge occurred. On a rank tie the root of
    /// `left` becomes the representative and its rank increments.
    ///
    /// # Errors
    /// Returns [`UnknownNode`] when either label was not part of the initial
    /// set; the structure is unchanged in that case.
    pub fn union(&mut self, left: &str, right: &str) -> Result<bool, UnknownNode> {
        let left_slot = self.slot_of(left)?;
        let right_slot = self.slot_of(right)?;
        let mut left_root = self.find_slot(left_slot);
        let mut right_root = self.find_slot(right_slot);
        if left_root == right_root {
            return Ok(false);
        }
        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
        Ok(true)
    }

    fn slot_of(&self, node: &str) -> Result<usize, UnknownNode> {
        self.slots
            .get(node)
            .copied()
            .ok_or_else(|| UnknownNode {
                node: Arc::from(node),
            })
    }

    fn find_slot(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}
