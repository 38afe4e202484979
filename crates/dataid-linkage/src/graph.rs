use dataid_canonical::{compare, sort_key, EmptyValues, SortKey, Value, ValueKind};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use crate::table::ObservationTable;

/// Undirected co-occurrence graph plus the values seen alone.
///
/// Vertices are sorted in natural value order and deduplicated;
/// edges are index pairs `(lo, hi)` into `vertices`, sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CooccurrenceGraph {
    /// Every value that is an endpoint of some edge.
    pub vertices: Vec<Value>,
    /// Unordered vertex pairs, stored with the lower index first.
    pub edges: Vec<(usize, usize)>,
    /// Values observed without a partner in at least one row, sorted.
    ///
    /// May still contain edge endpoints; grouping discards those.
    pub singletons: Vec<Value>,
}

impl CooccurrenceGraph {
    /// True when no row contributed a value.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.singletons.is_empty()
    }

    /// Edges as value pairs.
    pub fn edge_values(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (&self.vertices[a], &self.vertices[b]))
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn kind_class(value: &Value) -> u8 {
    match value.kind() {
        ValueKind::Float => ValueKind::Int.rank(),
        kind => kind.rank(),
    }
}

/// Orders values naturally: numbers numerically, strings by code point.
///
/// Different kinds follow the rank table, with floats ranked alongside
/// integers. Ties fall back to [`compare`].
fn natural_order(a: &Value, b: &Value) -> Ordering {
    let natural = match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Datetime(x), Value::Datetime(y)) => x.cmp(y),
        (Value::Bytes(x), Value::Bytes(y)) => x.cmp(y),
        _ => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => kind_class(a).cmp(&kind_class(b)),
        },
    };
    natural.then_with(|| compare(a, b))
}

fn sort_dedup(values: &mut Vec<Value>) {
    values.sort_by(natural_order);
    values.dedup_by(|a, b| compare(a, b) == Ordering::Equal);
}

/// Builds the co-occurrence graph of `table`.
///
/// Cells that are absent or match `empty` are dropped; rows left with no
/// value are skipped. A row with one distinct value makes it a singleton
/// candidate; a row with several yields every unordered pair as an edge.
pub fn build_graph(table: &ObservationTable, empty: &EmptyValues) -> CooccurrenceGraph {
    let mut singletons: Vec<Value> = Vec::new();
    let mut pairs: Vec<(Value, Value)> = Vec::new();

    for row in table.rows() {
        let mut present: Vec<Value> = row
            .iter()
            .flatten()
            .filter(|cell| !empty.is_empty(cell, true))
            .cloned()
            .collect();
        sort_dedup(&mut present);

        match present.len() {
            0 => {}
            1 => singletons.extend(present),
            _ => {
                for (i, a) in present.iter().enumerate() {
                    for b in &present[i + 1..] {
                        pairs.push((a.clone(), b.clone()));
                    }
                }
            }
        }
    }

    let mut vertices: Vec<Value> = pairs
        .iter()
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect();
    sort_dedup(&mut vertices);
    sort_dedup(&mut singletons);

    let index: BTreeMap<SortKey, usize> = vertices
        .iter()
        .enumerate()
        .map(|(idx, v)| (sort_key(v), idx))
        .collect();
    let mut edges: Vec<(usize, usize)> = pairs
        .iter()
        .filter_map(|(a, b)| Some((*index.get(&sort_key(a))?, *index.get(&sort_key(b))?)))
        .collect();
    edges.sort_unstable();
    edges.dedup();

    debug!(
        rows = table.len(),
        vertices = vertices.len(),
        edges = edges.len(),
        singletons = singletons.len(),
        "built co-occurrence graph"
    );

    CooccurrenceGraph {
        vertices,
        edges,
        singletons,
    }
}
