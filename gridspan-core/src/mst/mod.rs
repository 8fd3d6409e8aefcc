//! Minimum spanning tree construction over the candidate-link registry.
//!
//! This module implements sequential Kruskal: sort the candidates by length,
//! walk them in order, and accept every link whose endpoints are not yet
//! connected. Planning graphs hold a few dozen substations at most, so the
//! sequential formulation is the whole story: there is no parallel edge
//! sort or striped locking to coordinate.

mod union_find;

#[cfg(test)]
mod property;

use tracing::{debug, instrument};

use crate::{registry::EdgeRegistry, report::MstReport};

pub use self::union_find::{DisjointSet, UnknownNode};

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The registry held no candidate links; nothing was computed.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// The union-find was queried with a substation outside the registry's
    /// node set. An internal invariant violation, not a user error.
    #[error(transparent)]
    UnknownNode(#[from] UnknownNode),
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::UnknownNode(_) => MstErrorCode::UnknownNode,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The registry held no candidate links.
    EmptyGraph,
    /// The union-find was queried with an unknown substation.
    UnknownNode,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::UnknownNode => "UNKNOWN_NODE",
        }
    }
}

/// Computes a minimum spanning forest of the registered candidate links.
///
/// Candidates are considered in ascending length order; two links of equal
/// length keep their registration order (the sort is stable over the
/// insertion-ordered list). When the candidate graph is connected the result
/// is a spanning tree with exactly `node_count - 1` links; otherwise one
/// tree per connected component is produced and the report's component
/// count says how many. The registry itself is left untouched: the engine
/// works on a snapshot and builds a fresh [`DisjointSet`] per call.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when the registry holds no links, and
/// [`MstError::UnknownNode`] if the union-find ever disagrees with the
/// registry's node set (a logic error, not a user input problem).
///
/// # Examples
/// ```
/// use gridspan_core::{EdgeRegistry, minimum_spanning_forest};
///
/// let mut registry = EdgeRegistry::new();
/// registry.add_link("depot", "harbour", 5.0)?;
/// registry.add_link("harbour", "airport", 3.0)?;
/// registry.add_link("depot", "airport", 10.0)?;
///
/// let report = minimum_spanning_forest(&registry)?;
/// assert_eq!(report.selected().len(), 2);
/// assert!((report.efficiency() - 100.0 * (1.0 - 8.0 / 18.0)).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(registry),
    fields(links = registry.len(), nodes = registry.node_count()),
)]
pub fn minimum_spanning_forest(registry: &EdgeRegistry) -> Result<MstReport, MstError> {
    if registry.is_empty() {
        return Err(MstError::EmptyGraph);
    }

    let nodes = registry.nodes();
    let mut candidates = registry.links().to_vec();
    // Stable sort: equal lengths keep registration order.
    candidates.sort_by(|a, b| a.length().total_cmp(&b.length()));

    let mut components = DisjointSet::new(nodes.iter().cloned());
    let spanning_len = nodes.len().saturating_sub(1);
    let mut selected = Vec::with_capacity(spanning_len);

    for link in candidates {
        if components.union(link.left(), link.right())? {
            selected.push(link);
        }
        // The forest is complete once n - 1 links are in; the remaining
        // candidates could only close cycles.
        if selected.len() == spanning_len {
            break;
        }
    }

    let report = MstReport::new(selected, nodes.len(), registry.total_length());
    debug!(
        selected = report.selected().len(),
        components = report.component_count(),
        "spanning forest complete"
    );
    Ok(report)
}
