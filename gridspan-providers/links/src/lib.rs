//! Link-plan provider for line-based UTF-8 candidate-link listings.
//!
//! Parses the plan format used to describe candidate cable runs between
//! substations (one `left;right;length` entry per line, with `#` comments
//! and blank lines ignored) and exposes the result as a
//! [`LinkSource`] for registry ingestion. Parsing is purely syntactic:
//! self-loops, negative lengths, and duplicates are the registry's call, so
//! a plan that parses here can still be rejected there.

use std::io::BufRead;
use std::num::ParseFloatError;

use gridspan_core::{LinkRecord, LinkSource, LinkSourceError};
use thiserror::Error;

/// Errors raised while parsing a link plan.
#[derive(Debug, Error)]
pub enum LinkPlanError {
    /// Reading from the underlying source failed.
    #[error("failed to read plan line {line}: {source}")]
    Io {
        /// One-based line number at which the read failed.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line did not contain the three `;`-separated fields.
    #[error("plan line {line} must read `left;right;length` (got `{content}`)")]
    MalformedLine {
        /// One-based line number of the malformed entry.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// The length field did not parse as a number.
    #[error("plan line {line} has a non-numeric length `{value}`")]
    InvalidLength {
        /// One-based line number of the offending entry.
        line: usize,
        /// The raw length field, trimmed.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// The plan contained no candidate links.
    #[error("link plan contains no candidate links")]
    EmptyPlan,
}

/// A parsed candidate-link plan.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use gridspan_providers_links::LinkPlan;
///
/// let plan = LinkPlan::try_from_reader(
///     "demo",
///     Cursor::new("# ring main\nHarbour;Airport;420\nAirport;Hospital;180.5\n"),
/// )?;
/// assert_eq!(plan.records().len(), 2);
/// assert_eq!(plan.records()[0].left(), "Harbour");
/// # Ok::<(), gridspan_providers_links::LinkPlanError>(())
/// ```
#[derive(Debug)]
pub struct LinkPlan {
    name: String,
    records: Vec<LinkRecord>,
}

impl LinkPlan {
    /// Parses a plan from `reader`.
    ///
    /// # Errors
    /// Returns [`LinkPlanError::Io`] when a line cannot be read,
    /// [`LinkPlanError::MalformedLine`] / [`LinkPlanError::InvalidLength`]
    /// for entries that do not match the format, and
    /// [`LinkPlanError::EmptyPlan`] when no entries survive comment and
    /// blank-line stripping.
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, LinkPlanError> {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|source| LinkPlanError::Io {
                line: number,
                source,
            })?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            records.push(parse_entry(number, content)?);
        }
        if records.is_empty() {
            return Err(LinkPlanError::EmptyPlan);
        }
        Ok(Self {
            name: name.into(),
            records,
        })
    }

    /// Returns the parsed records in plan order.
    #[must_use]
    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }
}

fn parse_entry(number: usize, content: &str) -> Result<LinkRecord, LinkPlanError> {
    let mut fields = content.splitn(3, ';');
    let (Some(left), Some(right), Some(length)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(LinkPlanError::MalformedLine {
            line: number,
            content: content.to_owned(),
        });
    };

    let length = length.trim();
    let length = length
        .parse::<f32>()
        .map_err(|source| LinkPlanError::InvalidLength {
            line: number,
            value: length.to_owned(),
            source,
        })?;

    Ok(LinkRecord::new(left.trim(), right.trim(), length))
}

impl LinkSource for LinkPlan {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn link(&self, index: usize) -> Result<LinkRecord, LinkSourceError> {
        self.records
            .get(index)
            .cloned()
            .ok_or(LinkSourceError::OutOfBounds { index })
    }
}
