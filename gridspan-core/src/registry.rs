//! Candidate-link registry for the planning graph.
//!
//! The registry is the mutable input surface of the planner: callers add
//! candidate cable runs one at a time (or in bulk from a
//! [`LinkSource`](crate::LinkSource)) and hand the populated registry to
//! [`crate::minimum_spanning_forest`]. Validation happens here, before the
//! algorithm ever sees an edge, mirroring the registry's role as the single
//! owner of graph state.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    error::{IngestError, RegistryError},
    source::LinkSource,
};

/// A single undirected candidate link between two substations.
///
/// `(u, v, w)` and `(v, u, w)` denote the same connection; the registry
/// rejects the second as a duplicate regardless of weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    left: Arc<str>,
    right: Arc<str>,
    length: f32,
}

impl Link {
    /// Returns the endpoint named first at registration.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Returns the endpoint named second at registration.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Returns the cable length in metres.
    #[must_use]
    #[rustfmt::skip]
    pub fn length(&self) -> f32 { self.length }

    pub(crate) fn endpoints(&self) -> [&Arc<str>; 2] {
        [&self.left, &self.right]
    }

    fn connects(&self, a: &str, b: &str) -> bool {
        (self.left.as_ref() == a && self.right.as_ref() == b)
            || (self.left.as_ref() == b && self.right.as_ref() == a)
    }
}

/// Counters describing a bulk ingestion pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IngestSummary {
    registered: usize,
    skipped_duplicates: usize,
}

impl IngestSummary {
    /// Returns how many links the pass added to the registry.
    #[must_use]
    #[rustfmt::skip]
    pub fn registered(&self) -> usize { self.registered }

    /// Returns how many records were skipped as already-registered pairs.
    #[must_use]
    #[rustfmt::skip]
    pub fn skipped_duplicates(&self) -> usize { self.skipped_duplicates }
}

/// Insertion-ordered store of candidate links and the substations they touch.
///
/// The substation set is a view computed from the link list. It is never
/// stored separately, so it cannot drift from the edges that define it.
///
/// # Examples
/// ```
/// use gridspan_core::EdgeRegistry;
///
/// let mut registry = EdgeRegistry::new();
/// registry.add_link("Harbour", "Airport", 420.0)?;
/// registry.add_link("Harbour", "Hospital", 180.0)?;
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.node_count(), 3);
/// assert!((registry.total_length() - 600.0).abs() < 1e-6);
/// # Ok::<(), gridspan_core::RegistryError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EdgeRegistry {
    links: Vec<Link>,
}

impl EdgeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a candidate link and returns its display index.
    ///
    /// Endpoint labels are trimmed before validation. The call is atomic: on
    /// any error the registry is unchanged.
    ///
    /// # Errors
    /// Returns [`RegistryError::EmptyEndpoint`] when either trimmed label is
    /// empty, [`RegistryError::SelfLoop`] when both name the same substation,
    /// [`RegistryError::NonFiniteLength`] / [`RegistryError::NegativeLength`]
    /// for unusable lengths, and [`RegistryError::DuplicateLink`] when the
    /// unordered pair is already registered (informational; see
    /// [`RegistryError::is_duplicate`]).
    pub fn add_link(
        &mut self,
        left: &str,
        right: &str,
        length: f32,
    ) -> Result<usize, RegistryError> {
        let left = left.trim();
        let right = right.trim();

        if left.is_empty() || right.is_empty() {
            return Err(RegistryError::EmptyEndpoint);
        }
        if left == right {
            return Err(RegistryError::SelfLoop {
                node: Arc::from(left),
            });
        }
        if !length.is_finite() {
            return Err(RegistryError::NonFiniteLength {
                left: Arc::from(left),
                right: Arc::from(right),
            });
        }
        if length < 0.0 {
            return Err(RegistryError::NegativeLength {
                left: Arc::from(left),
                right: Arc::from(right),
                length,
            });
        }
        if self.links.iter().any(|link| link.connects(left, right)) {
            return Err(RegistryError::DuplicateLink {
                left: Arc::from(left),
                right: Arc::from(right),
            });
        }

        let index = self.links.len();
        self.links.push(Link {
            left: Arc::from(left),
            right: Arc::from(right),
            length,
        });
        debug!(left, right, length, index, "registered candidate link");
        Ok(index)
    }

    /// Registers every record yielded by `source`.
    ///
    /// Already-registered pairs are skipped and counted rather than treated
    /// as failures; malformed records abort the pass with the source name
    /// attached. Links registered before an abort remain registered, since
    /// each individual `add_link` is atomic.
    ///
    /// # Errors
    /// Returns [`IngestError::Source`] when the source fails to yield a
    /// record and [`IngestError::Rejected`] when the registry rejects a
    /// record as malformed.
    pub fn extend_from_source<S: LinkSource>(
        &mut self,
        source: &S,
    ) -> Result<IngestSummary, IngestError> {
        let mut summary = IngestSummary::default();
        for index in 0..source.len() {
            let record = source.link(index).map_err(|error| IngestError::Source {
                source_name: Arc::from(source.name()),
                error,
            })?;
            match self.add_link(record.left(), record.right(), record.length()) {
                Ok(_) => summary.registered += 1,
                Err(error) if error.is_duplicate() => {
                    warn!(
                        source = source.name(),
                        %error,
                        "skipping duplicate candidate link"
                    );
                    summary.skipped_duplicates += 1;
                }
                Err(error) => {
                    return Err(IngestError::Rejected {
                        source_name: Arc::from(source.name()),
                        error,
                    });
                }
            }
        }
        Ok(summary)
    }

    /// Removes every registered link. Idempotent.
    pub fn clear(&mut self) {
        self.links.clear();
    }

    /// Returns the registered links in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn links(&self) -> &[Link] { &self.links }

    /// Returns the number of registered links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns whether no links are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the sum of all registered lengths in metres, `0` when empty.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.links
            .iter()
            .map(|link| f64::from(link.length))
            .sum()
    }

    /// Returns the substations referenced by the current links, in first
    /// appearance order.
    ///
    /// This is a computed view over the link list; a cleared registry has no
    /// substations.
    #[must_use]
    pub fn nodes(&self) -> Vec<Arc<str>> {
        let mut nodes: Vec<Arc<str>> = Vec::new();
        for link in &self.links {
            for endpoint in link.endpoints() {
                if !nodes.iter().any(|known| known == endpoint) {
                    nodes.push(Arc::clone(endpoint));
                }
            }
        }
        nodes
    }

    /// Returns the number of distinct substations referenced by the links.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{
        error::{IngestError, LinkSourceError, RegistryError},
        source::{LinkRecord, LinkSource},
    };

    use super::EdgeRegistry;

    fn populated() -> EdgeRegistry {
        let mut registry = EdgeRegistry::new();
        registry
            .add_link("depot", "harbour", 5.0)
            .expect("first link must register");
        registry
            .add_link("harbour", "airport", 3.0)
            .expect("second link must register");
        registry
    }

    #[test]
    fn add_link_returns_display_indices_in_order() {
        let mut registry = EdgeRegistry::new();
        let first = registry.add_link("a", "b", 1.0).expect("must register");
        let second = registry.add_link("b", "c", 2.0).expect("must register");
        assert_eq!((first, second), (0, 1));
    }

    #[test]
    fn add_link_trims_endpoint_labels() {
        let mut registry = EdgeRegistry::new();
        registry
            .add_link("  depot ", "harbour\t", 5.0)
            .expect("trimmed labels must register");
        let link = &registry.links()[0];
        assert_eq!((link.left(), link.right()), ("depot", "harbour"));
    }

    #[test]
    fn rejects_self_loop() {
        let mut registry = EdgeRegistry::new();
        let err = registry
            .add_link("depot", "depot", 5.0)
            .expect_err("self-loop must be rejected");
        assert!(matches!(err, RegistryError::SelfLoop { .. }));
        assert!(err.is_invalid_link());
        assert!(registry.is_empty());
    }

    #[rstest]
    #[case::left_empty("", "harbour")]
    #[case::right_empty("depot", "")]
    #[case::whitespace_only("   ", "harbour")]
    fn rejects_empty_endpoints(#[case] left: &str, #[case] right: &str) {
        let mut registry = EdgeRegistry::new();
        let err = registry
            .add_link(left, right, 5.0)
            .expect_err("empty endpoint must be rejected");
        assert!(matches!(err, RegistryError::EmptyEndpoint));
    }

    #[rstest]
    #[case::nan(f32::NAN)]
    #[case::infinite(f32::INFINITY)]
    fn rejects_non_finite_lengths(#[case] length: f32) {
        let mut registry = EdgeRegistry::new();
        let err = registry
            .add_link("depot", "harbour", length)
            .expect_err("non-finite length must be rejected");
        assert!(matches!(err, RegistryError::NonFiniteLength { .. }));
    }

    #[test]
    fn rejects_negative_length() {
        let mut registry = EdgeRegistry::new();
        let err = registry
            .add_link("depot", "harbour", -1.0)
            .expect_err("negative length must be rejected");
        assert!(matches!(err, RegistryError::NegativeLength { .. }));
    }

    #[rstest]
    #[case::same_orientation("depot", "harbour")]
    #[case::reversed_orientation("harbour", "depot")]
    fn rejects_duplicate_pair_regardless_of_orientation_and_weight(
        #[case] left: &str,
        #[case] right: &str,
    ) {
        let mut registry = populated();
        let err = registry
            .add_link(left, right, 99.0)
            .expect_err("duplicate pair must be rejected");
        assert!(err.is_duplicate());
        // The registry keeps the original entry.
        assert_eq!(registry.len(), 2);
        assert!((registry.links()[0].length() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut registry = populated();
        registry.clear();
        let after_once = (registry.len(), registry.node_count(), registry.total_length());
        registry.clear();
        let after_twice = (registry.len(), registry.node_count(), registry.total_length());
        assert_eq!(after_once, (0, 0, 0.0));
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn total_length_sums_registered_links() {
        let registry = populated();
        assert!((registry.total_length() - 8.0).abs() < 1e-9);
        assert_eq!(EdgeRegistry::new().total_length(), 0.0);
    }

    #[test]
    fn nodes_are_derived_in_first_appearance_order() {
        let registry = populated();
        let node_handles = registry.nodes();
        let nodes: Vec<&str> = node_handles.iter().map(AsRef::as_ref).collect();
        assert_eq!(nodes, ["depot", "harbour", "airport"]);
        assert_eq!(registry.node_count(), 3);
    }

    struct RecordedPlan {
        records: Vec<LinkRecord>,
    }

    impl LinkSource for RecordedPlan {
        fn len(&self) -> usize {
            self.records.len()
        }

        fn name(&self) -> &str {
            "recorded"
        }

        fn link(&self, index: usize) -> Result<LinkRecord, LinkSourceError> {
            self.records
                .get(index)
                .cloned()
                .ok_or(LinkSourceError::OutOfBounds { index })
        }
    }

    #[test]
    fn extend_from_source_registers_and_skips_duplicates() {
        let plan = RecordedPlan {
            records: vec![
                LinkRecord::new("depot", "harbour", 5.0),
                LinkRecord::new("harbour", "depot", 7.0),
                LinkRecord::new("harbour", "airport", 3.0),
            ],
        };
        let mut registry = EdgeRegistry::new();
        let summary = registry
            .extend_from_source(&plan)
            .expect("ingestion must succeed");
        assert_eq!(summary.registered(), 2);
        assert_eq!(summary.skipped_duplicates(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn extend_from_source_aborts_on_malformed_record() {
        let plan = RecordedPlan {
            records: vec![
                LinkRecord::new("depot", "harbour", 5.0),
                LinkRecord::new("loop", "loop", 1.0),
            ],
        };
        let mut registry = EdgeRegistry::new();
        let err = registry
            .extend_from_source(&plan)
            .expect_err("self-loop record must abort ingestion");
        assert!(matches!(
            err,
            IngestError::Rejected {
                error: RegistryError::SelfLoop { .. },
                ..
            }
        ));
        // Records ahead of the failure stay registered.
        assert_eq!(registry.len(), 1);
    }

    struct FailingPlan;

    impl LinkSource for FailingPlan {
        fn len(&self) -> usize {
            1
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn link(&self, index: usize) -> Result<LinkRecord, LinkSourceError> {
            Err(LinkSourceError::OutOfBounds { index })
        }
    }

    #[test]
    fn extend_from_source_wraps_source_failures_with_name() {
        let mut registry = EdgeRegistry::new();
        let err = registry
            .extend_from_source(&FailingPlan)
            .expect_err("source failure must propagate");
        match err {
            IngestError::Source { source_name, error } => {
                assert_eq!(source_name.as_ref(), "failing");
                assert_eq!(error, LinkSourceError::OutOfBounds { index: 0 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
