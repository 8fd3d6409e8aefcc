//! Property-based tests for the Kruskal spanning-forest engine.
//!
//! Verifies the engine against an independent Prim's-algorithm oracle and
//! validates structural invariants (acyclicity, edge count, ascending
//! selection order, metric bounds) across generated graph topologies with
//! varied length distributions.

mod oracle;
mod strategies;
