//! Link source abstractions for the gridspan core runtime.

use crate::error::LinkSourceError;

/// A raw candidate link yielded by a [`LinkSource`] before registry
/// validation.
///
/// Records carry whatever the source read; semantic validation (self-loops,
/// negative lengths, duplicates) happens when the record reaches
/// [`crate::EdgeRegistry::add_link`].
#[derive(Clone, Debug, PartialEq)]
pub struct LinkRecord {
    left: String,
    right: String,
    length: f32,
}

impl LinkRecord {
    /// Creates a record from the raw endpoint labels and length in metres.
    #[must_use]
    pub fn new(left: impl Into<String>, right: impl Into<String>, length: f32) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            length,
        }
    }

    /// Returns the left endpoint label as read from the source.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Returns the right endpoint label as read from the source.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Returns the cable length in metres.
    #[must_use]
    #[rustfmt::skip]
    pub fn length(&self) -> f32 { self.length }
}

/// Abstraction over an ordered collection of candidate links.
///
/// Implementations parse or otherwise produce candidate cable runs; the
/// registry ingests them with [`crate::EdgeRegistry::extend_from_source`]
/// without the core taking a dependency on any file format.
///
/// # Examples
/// ```
/// use gridspan_core::{LinkRecord, LinkSource, LinkSourceError};
///
/// struct Fixed(Vec<LinkRecord>);
///
/// impl LinkSource for Fixed {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "fixed" }
///     fn link(&self, index: usize) -> Result<LinkRecord, LinkSourceError> {
///         self.0.get(index).cloned().ok_or(LinkSourceError::OutOfBounds { index })
///     }
/// }
///
/// let source = Fixed(vec![LinkRecord::new("north", "south", 120.0)]);
/// assert_eq!(source.len(), 1);
/// assert_eq!(source.link(0)?.left(), "north");
/// # Ok::<(), LinkSourceError>(())
/// ```
pub trait LinkSource {
    /// Returns the number of candidate links in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no candidate links.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name for error reporting and logging.
    fn name(&self) -> &str;

    /// Yields the candidate link at `index`, in source order.
    ///
    /// # Errors
    /// Implementations must return [`LinkSourceError::OutOfBounds`] for
    /// indices at or beyond [`LinkSource::len`].
    fn link(&self, index: usize) -> Result<LinkRecord, LinkSourceError>;
}
