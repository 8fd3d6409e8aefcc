//! Independent Prim's-algorithm oracle for spanning-forest verification.
//!
//! Prim grows each component from a seed substation by repeatedly taking the
//! cheapest frontier edge, which shares no code with the Kruskal engine
//! under test. Every minimum spanning forest of a graph has the same total
//! weight, so the totals must agree even when the selected edge sets differ
//! under ties.

use crate::EdgeRegistry;

/// Result of the Prim oracle over one registry.
pub(super) struct OracleForest {
    /// Total selected length, accumulated as `f64` for precision.
    pub total_length: f64,
    /// Number of selected edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

pub(super) fn prim_spanning_forest(registry: &EdgeRegistry) -> OracleForest {
    let nodes = registry.nodes();
    let index_of = |label: &str| {
        nodes
            .iter()
            .position(|node| node.as_ref() == label)
            .expect("registry links only reference registry nodes")
    };

    let mut adjacency: Vec<Vec<(usize, f32)>> = vec![Vec::new(); nodes.len()];
    for link in registry.links() {
        let left = index_of(link.left());
        let right = index_of(link.right());
        adjacency[left].push((right, link.length()));
        adjacency[right].push((left, link.length()));
    }

    let mut visited = vec![false; nodes.len()];
    let mut total_length = 0.0_f64;
    let mut edge_count = 0;
    let mut component_count = 0;

    for start in 0..nodes.len() {
        if visited[start] {
            continue;
        }
        component_count += 1;
        visited[start] = true;

        let mut frontier: Vec<(f32, usize)> = adjacency[start]
            .iter()
            .map(|&(to, length)| (length, to))
            .collect();

        loop {
            let best = frontier
                .iter()
                .enumerate()
                .filter(|(_, candidate)| !visited[candidate.1])
                .min_by(|(_, a), (_, b)| a.0.total_cmp(&b.0))
                .map(|(index, _)| index);
            let Some(best) = best else { break };

            let (length, to) = frontier.swap_remove(best);
            visited[to] = true;
            total_length += f64::from(length);
            edge_count += 1;
            frontier.extend(adjacency[to].iter().map(|&(next, weight)| (weight, next)));
        }
    }

    OracleForest {
        total_length,
        edge_count,
        component_count,
    }
}
