//! Gridspan core library.
//!
//! Plans minimum-cost cabling for small electrical-distribution networks.
//! Candidate links between substations are collected in an [`EdgeRegistry`];
//! [`minimum_spanning_forest`] then selects the cheapest subset of links that
//! keeps every referenced substation connected and reports how much cable the
//! selection saves relative to building every candidate.
//!
//! The library is deliberately synchronous and lock-free: registries hold a
//! few dozen links at most, and the `&mut self` mutation surface already
//! forces callers to serialise registry updates against spanning-tree
//! computations.

mod error;
mod mst;
mod registry;
mod report;
mod source;

pub use crate::{
    error::{
        IngestError, IngestErrorCode, LinkSourceError, LinkSourceErrorCode, RegistryError,
        RegistryErrorCode,
    },
    mst::{DisjointSet, MstError, MstErrorCode, UnknownNode, minimum_spanning_forest},
    registry::{EdgeRegistry, IngestSummary, Link},
    report::MstReport,
    source::{LinkRecord, LinkSource},
};
