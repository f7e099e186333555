//! Graph and grid searches.
//!
//! Both structures implement [`SearchSpace`]; the traces in [`search`] only
//! see neighbor lists and a way to draw the current state.

pub mod grid;
pub mod search;

pub use search::SearchSpace;

use crate::data::GraphRecord;
use crate::error::InputError;
use crate::layout::LayoutConfig;
use crate::model::{Element, Frame, Position, format_number};
use ahash::{AHashMap, AHashSet};
use std::collections::BTreeMap;
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub value: Option<f64>,
    pub position: Position,
}

/// An adjacency-list graph with ascending neighbor order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    adjacency: BTreeMap<String, Vec<String>>,
    /// Edges as given, deduplicated; these are the links that get drawn.
    edges: Vec<(String, String)>,
    directed: bool,
}

impl Graph {
    /// Validates `record` and lays out nodes without coordinates on a circle.
    pub fn from_record(record: &GraphRecord, directed: bool, config: &LayoutConfig) -> Result<Self, InputError> {
        if record.nodes.is_empty() {
            return Err(InputError::EmptyGraph);
        }
        let Some(edge_list) = &record.edges else {
            return Err(InputError::MissingEdges);
        };

        let mut adjacency: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for node in &record.nodes {
            if adjacency.insert(node.id.clone(), Vec::new()).is_some() {
                return Err(InputError::DuplicateId(node.id.clone()));
            }
        }

        let mut edges = Vec::new();
        let mut seen_edges = AHashSet::new();
        for edge in edge_list {
            if !adjacency.contains_key(&edge.source) || !adjacency.contains_key(&edge.target) {
                return Err(InputError::DanglingEdge {
                    source_id: edge.source.clone(),
                    target_id: edge.target.clone(),
                });
            }
            let key = if directed || edge.source <= edge.target {
                (edge.source.clone(), edge.target.clone())
            } else {
                (edge.target.clone(), edge.source.clone())
            };
            if !seen_edges.insert(key) {
                continue;
            }
            edges.push((edge.source.clone(), edge.target.clone()));
            if let Some(list) = adjacency.get_mut(&edge.source) {
                list.push(edge.target.clone());
            }
            if !directed {
                if let Some(list) = adjacency.get_mut(&edge.target) {
                    list.push(edge.source.clone());
                }
            }
        }
        for list in adjacency.values_mut() {
            list.sort();
            list.dedup();
        }

        let count = record.nodes.len();
        let center = config.origin.offset(config.graph_radius, config.graph_radius);
        let nodes = record
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let position = match (node.x, node.y) {
                    (Some(x), Some(y)) => Position::new(x, y),
                    _ => {
                        let angle = 2.0 * PI * i as f64 / count as f64 - PI / 2.0;
                        center.offset(config.graph_radius * angle.cos(), config.graph_radius * angle.sin())
                    }
                };
                GraphNode {
                    id: node.id.clone(),
                    value: node.value,
                    position,
                }
            })
            .collect();

        Ok(Self {
            nodes,
            adjacency,
            edges,
            directed,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }
}

impl SearchSpace for Graph {
    fn neighbors(&self, id: &str) -> Vec<String> {
        self.adjacency.get(id).cloned().unwrap_or_default()
    }

    fn directed(&self) -> bool {
        self.directed
    }

    fn elements(&self, distances: &AHashMap<String, f64>, config: &LayoutConfig) -> Vec<Element> {
        let mut targets: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for (source, target) in &self.edges {
            targets.entry(source.as_str()).or_default().push(target.as_str());
        }
        self.nodes
            .iter()
            .map(|node| {
                let mut element = Element::node(node.id.clone(), node.value, node.position, config.node_radius);
                if let Some(d) = distances.get(&node.id) {
                    element = element.with_description(format!("d = {}", format_number(*d)));
                }
                for target in targets.get(node.id.as_str()).into_iter().flatten() {
                    element = element.with_target(*target);
                }
                element
            })
            .collect()
    }
}

fn endpoints(graph: &Graph, start: &str, end: &str) -> Result<(), InputError> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(InputError::UnknownNode(id.to_string()));
        }
    }
    Ok(())
}

/// Breadth-first search from `start` to `end`, one node per step.
pub fn bfs(
    record: &GraphRecord,
    start: &str,
    end: &str,
    directed: bool,
    config: &LayoutConfig,
) -> Result<Vec<Frame>, InputError> {
    let graph = Graph::from_record(record, directed, config)?;
    endpoints(&graph, start, end)?;
    Ok(search::bfs(&graph, start, end, config))
}

/// Depth-first search from `start` to `end`.
pub fn dfs(
    record: &GraphRecord,
    start: &str,
    end: &str,
    directed: bool,
    config: &LayoutConfig,
) -> Result<Vec<Frame>, InputError> {
    let graph = Graph::from_record(record, directed, config)?;
    endpoints(&graph, start, end)?;
    Ok(search::dfs(&graph, start, end, config))
}
