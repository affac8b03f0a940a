//! Loading boundary: compile a JSON adjacency payload into an [`AdjacencyGraph`].
//!
//! The accepted shape is a single object whose keys are node identifiers and
//! whose values are arrays of neighbor identifiers:
//!
//! ```json
//! {"1": [2, 3], "2": ["4"], "3": [4], "4": [5]}
//! ```
//!
//! Neighbors may be strings or integers; integers are rendered in decimal so
//! `4` and `"4"` name the same node. Key order is preserved and becomes the
//! graph's node order. Fail-closed: no partial graph is returned.

use serde_json::Value;

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::GraphError;

/// Parse JSON bytes and compile them into a graph with `String` identifiers.
///
/// # Errors
///
/// Returns [`GraphError::InvalidJson`] if the bytes do not parse, or any
/// error from [`graph_from_value`].
pub fn graph_from_json(bytes: &[u8]) -> Result<AdjacencyGraph<String>, GraphError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| GraphError::InvalidJson {
        detail: e.to_string(),
    })?;
    graph_from_value(&value)
}

/// Compile an already-parsed JSON value into a graph.
///
/// # Errors
///
/// Returns [`GraphError::NotAnObject`], [`GraphError::NeighborsNotArray`] or
/// [`GraphError::InvalidIdentifier`] when the value does not have the
/// adjacency shape.
pub fn graph_from_value(value: &Value) -> Result<AdjacencyGraph<String>, GraphError> {
    let Value::Object(map) = value else {
        return Err(GraphError::NotAnObject {
            found: kind_of(value).into(),
        });
    };

    let mut graph = AdjacencyGraph::new();
    for (node, neighbors) in map {
        let Value::Array(items) = neighbors else {
            return Err(GraphError::NeighborsNotArray {
                node: node.clone(),
                found: kind_of(neighbors).into(),
            });
        };
        graph.add_node(node.clone());
        for item in items {
            let neighbor = identifier(item).ok_or_else(|| GraphError::InvalidIdentifier {
                node: node.clone(),
                found: kind_of(item).into(),
            })?;
            graph.add_edge(node.clone(), neighbor);
        }
    }
    Ok(graph)
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
