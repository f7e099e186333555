use crate::error::InputError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// One entry of a flat source list. Grid inputs spell the value `val`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(default, alias = "val")]
    pub value: Option<f64>,
}

impl Record {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value: Some(value),
        }
    }

    pub fn hole(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }
}

/// A graph node. Coordinates are optional; missing ones get a circular layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GraphNodeRecord {
    pub id: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    #[serde(alias = "from")]
    pub source: String,
    #[serde(alias = "to")]
    pub target: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GraphRecord {
    #[serde(default)]
    pub nodes: Vec<GraphNodeRecord>,
    /// `None` when the input omits the list; an edgeless graph spells it `[]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeRecord>>,
}

impl GraphRecord {
    /// Builds a graph from edge pairs, creating nodes in first-seen order.
    pub fn from_edges(edges: &[(&str, &str)]) -> Self {
        let mut seen = AHashSet::new();
        let mut nodes = Vec::new();
        for (u, v) in edges {
            for id in [u, v] {
                if seen.insert(*id) {
                    nodes.push(GraphNodeRecord {
                        id: id.to_string(),
                        value: None,
                        x: None,
                        y: None,
                    });
                }
            }
        }
        Self {
            nodes,
            edges: Some(
                edges
                    .iter()
                    .map(|(u, v)| EdgeRecord {
                        source: u.to_string(),
                        target: v.to_string(),
                    })
                    .collect(),
            ),
        }
    }
}

/// The data an action runs on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Input {
    Records(Vec<Record>),
    Graph(GraphRecord),
}

impl Input {
    /// Records named `n0, n1, ...` holding `values` in order.
    pub fn from_values(values: &[f64]) -> Self {
        Input::Records(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Record::new(format!("n{}", i), *v))
                .collect(),
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Input::Records(_) => "flat record",
            Input::Graph(_) => "graph",
        }
    }

    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Input::Records(records) => Some(records),
            Input::Graph(_) => None,
        }
    }

    pub fn graph(&self) -> Option<&GraphRecord> {
        match self {
            Input::Graph(graph) => Some(graph),
            Input::Records(_) => None,
        }
    }
}

/// Rejects record lists whose ids are not unique.
pub fn ensure_unique_ids(records: &[Record]) -> Result<(), InputError> {
    let mut seen = AHashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(InputError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
