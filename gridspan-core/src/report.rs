//! Report types for spanning-forest computations.

use crate::registry::Link;

/// The outcome of a minimum spanning forest computation.
///
/// When the candidate graph is connected the forest is a single spanning
/// tree; otherwise one tree per connected component is produced and
/// [`MstReport::component_count`] exceeds one. Totals are accumulated in
/// `f64` so reporting does not lose precision over many `f32` lengths.
///
/// # Examples
/// ```
/// use gridspan_core::{EdgeRegistry, minimum_spanning_forest};
///
/// let mut registry = EdgeRegistry::new();
/// registry.add_link("A", "B", 5.0)?;
/// registry.add_link("B", "C", 3.0)?;
/// registry.add_link("A", "C", 10.0)?;
///
/// let report = minimum_spanning_forest(&registry)?;
/// assert!(report.is_tree());
/// assert_eq!(report.selected().len(), 2);
/// assert!((report.total_mst() - 8.0).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MstReport {
    selected: Vec<Link>,
    component_count: usize,
    total_all: f64,
    total_mst: f64,
}

impl MstReport {
    pub(crate) fn new(selected: Vec<Link>, node_count: usize, total_all: f64) -> Self {
        let total_mst = selected.iter().map(|link| f64::from(link.length())).sum();
        let component_count = node_count.saturating_sub(selected.len());
        Self {
            selected,
            component_count,
            total_all,
            total_mst,
        }
    }

    /// Returns the selected links in ascending length order.
    #[must_use]
    #[rustfmt::skip]
    pub fn selected(&self) -> &[Link] { &self.selected }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the total length of every registered candidate link, in metres.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_all(&self) -> f64 { self.total_all }

    /// Returns the total length of the selected links, in metres.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_mst(&self) -> f64 { self.total_mst }

    /// Returns the percentage of candidate cable length avoided by building
    /// only the selected links.
    ///
    /// `0` when no candidate length was registered.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        if self.total_all > 0.0 {
            100.0 * (1.0 - self.total_mst / self.total_all)
        } else {
            0.0
        }
    }
}
