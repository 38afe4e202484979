use dataid_canonical::{sort_key, EmptyValues, SortKey};
use std::collections::BTreeSet;
use tracing::debug;

use crate::dsu::DisjointSet;
use crate::graph::{build_graph, CooccurrenceGraph};
use crate::table::{GroupRow, GroupTable, ObservationTable};

/// Partitions the graph into groups.
///
/// Connected components come first, numbered `0..k` by their smallest
/// vertex, members in vertex order. Singleton candidates that are not part
/// of any component follow, numbered from `k` in ascending value order.
/// Without edges every singleton candidate is its own group.
pub fn group(graph: &CooccurrenceGraph) -> GroupTable {
    let mut rows: Vec<GroupRow> = Vec::new();

    let mut dsu = DisjointSet::new(graph.vertices.len());
    for &(a, b) in &graph.edges {
        dsu.union(a, b);
    }
    let components = if graph.edges.is_empty() {
        Vec::new()
    } else {
        dsu.components()
    };
    for (group_id, members) in components.iter().enumerate() {
        for &member in members {
            rows.push(GroupRow {
                group_id: group_id as u64,
                value: graph.vertices[member].clone(),
            });
        }
    }

    let grouped: BTreeSet<SortKey> = graph.vertices.iter().map(sort_key).collect();
    let next_id = components.len() as u64;
    let remaining = graph
        .singletons
        .iter()
        .filter(|value| !grouped.contains(&sort_key(value)));
    for (offset, value) in remaining.enumerate() {
        rows.push(GroupRow {
            group_id: next_id + offset as u64,
            value: value.clone(),
        });
    }

    debug!(
        components = components.len(),
        rows = rows.len(),
        "grouped co-occurring values"
    );
    GroupTable::new(rows)
}

/// Builds the graph of `table` with the default missing-value list and groups it.
pub fn find_groups(table: &ObservationTable) -> GroupTable {
    group(&build_graph(table, &EmptyValues::default()))
}
