//! Fixture generation for spanning-forest property tests.
//!
//! Builds registries with varied length distributions from seeded
//! [`SmallRng`] instances so every failure reproduces from its seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::EdgeRegistry;

/// Minimum substation count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum substation count for generated graphs.
const MAX_NODES: usize = 12;

/// Length distributions the generators cover.
///
/// `ManyIdentical` is the important stress case: it exercises the stable
/// tie-break, where any misordering would surface as a total-weight mismatch
/// against the oracle or a broken ascending-selection invariant.
#[derive(Clone, Copy, Debug)]
pub(super) enum LengthDistribution {
    /// Lengths drawn from a wide continuous range; ties are unlikely.
    Unique,
    /// Lengths drawn from a two-value set; ties are the norm.
    ManyIdentical,
    /// Two node blocks with no links between them.
    Disconnected,
}

pub(super) fn generate_registry(distribution: LengthDistribution, seed: u64) -> EdgeRegistry {
    let mut rng = SmallRng::seed_from_u64(seed);
    match distribution {
        LengthDistribution::Unique => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            generate_block(&mut rng, 0, node_count, unique_length)
        }
        LengthDistribution::ManyIdentical => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            generate_block(&mut rng, 0, node_count, identical_length)
        }
        LengthDistribution::Disconnected => {
            let left = rng.gen_range(MIN_NODES..=MAX_NODES / 2);
            let right = rng.gen_range(MIN_NODES..=MAX_NODES / 2);
            let mut registry = generate_block(&mut rng, 0, left, unique_length);
            let island = generate_block(&mut rng, left, right, unique_length);
            for link in island.links() {
                registry
                    .add_link(link.left(), link.right(), link.length())
                    .expect("island links must register");
            }
            registry
        }
    }
}

fn unique_length(rng: &mut SmallRng) -> f32 {
    rng.gen_range(1.0..500.0)
}

fn identical_length(rng: &mut SmallRng) -> f32 {
    if rng.gen_bool(0.5) { 1.0 } else { 2.5 }
}

/// Generates one probabilistically connected block over `node_count`
/// substations labelled from `first_label` upward, guaranteeing at least one
/// link so the block never collapses to an empty registry.
fn generate_block(
    rng: &mut SmallRng,
    first_label: usize,
    node_count: usize,
    mut length: impl FnMut(&mut SmallRng) -> f32,
) -> EdgeRegistry {
    let label = |offset: usize| format!("s{:02}", first_label + offset);
    let edge_probability = rng.gen_range(0.3..0.8);
    let mut registry = EdgeRegistry::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                registry
                    .add_link(&label(i), &label(j), length(rng))
                    .expect("generated pairs are unique");
            }
        }
    }

    if registry.is_empty() {
        registry
            .add_link(&label(0), &label(1), length(rng))
            .expect("fallback link must register");
    }

    registry
}
