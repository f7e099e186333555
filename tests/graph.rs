//! Tests for graph and grid searches.
mod common;
use common::*;
use kiseki::graph::grid::{self, Grid, WALL};
use kiseki::graph::{self, Graph, SearchSpace};
use kiseki::prelude::*;
use pretty_assertions::assert_eq;

fn popped(frames: &[Frame]) -> Vec<&str> {
    frames
        .iter()
        .filter(|f| f.action_tag == Some(ActionTag::Pop))
        .filter_map(|f| f.variable("u").and_then(|v| v.as_text()))
        .collect()
}

// Graph

#[test]
fn test_neighbors_are_sorted_and_undirected_by_default() {
    let config = LayoutConfig::default();
    let graph = Graph::from_record(&diamond(), false, &config).unwrap();
    assert_eq!(graph.neighbors("C"), vec!["B".to_string(), "D".to_string()]);
    let directed = Graph::from_record(&diamond(), true, &config).unwrap();
    assert!(directed.neighbors("C").is_empty());
}

#[test]
fn test_dangling_edges_are_rejected() {
    let mut record = diamond();
    record.edges.get_or_insert_with(Vec::new).push(EdgeRecord {
        source: "A".to_string(),
        target: "Z".to_string(),
    });
    assert!(matches!(
        Graph::from_record(&record, false, &LayoutConfig::default()),
        Err(InputError::DanglingEdge { .. })
    ));
}

#[test]
fn test_missing_edge_list_is_rejected() {
    let mut record = diamond();
    record.edges = None;
    assert_eq!(
        Graph::from_record(&record, false, &LayoutConfig::default()),
        Err(InputError::MissingEdges)
    );

    record.edges = Some(Vec::new());
    let graph = Graph::from_record(&record, false, &LayoutConfig::default()).unwrap();
    assert!(graph.neighbors("A").is_empty());
}

#[test]
fn test_empty_node_list_wins_over_missing_edges() {
    let result = graph::bfs(&GraphRecord::default(), "A", "A", false, &LayoutConfig::default());
    assert_eq!(result, Err(InputError::EmptyGraph));
}

#[test]
fn test_graph_bfs_finds_a_shortest_path() {
    let frames = graph::bfs(&diamond(), "A", "C", false, &LayoutConfig::default()).unwrap();
    let last = frames.last().unwrap();
    assert_eq!(last.action_tag, Some(ActionTag::PathFound));
    assert_eq!(last.variable("distance").and_then(|v| v.as_number()), Some(2.0));
    assert_eq!(last.variable("path").and_then(|v| v.as_text()), Some("A -> B -> C"));
    assert_eq!(last.element("C").unwrap().status, Status::Complete);
    assert_eq!(last.link("A", "B").unwrap().status, Some(LinkStatus::Complete));
}

#[test]
fn test_graph_dfs_pops_neighbors_in_ascending_order() {
    let record = GraphRecord::from_edges(&[("A", "C"), ("A", "B"), ("B", "D"), ("C", "D")]);
    let frames = graph::dfs(&record, "A", "D", false, &LayoutConfig::default()).unwrap();
    assert_eq!(popped(&frames), vec!["A", "B", "D"]);
    assert_eq!(
        frames.last().unwrap().variable("depth").and_then(|v| v.as_number()),
        Some(2.0)
    );
}

#[test]
fn test_unknown_endpoints_are_input_errors() {
    let result = graph::bfs(&diamond(), "A", "Q", false, &LayoutConfig::default());
    assert_eq!(result, Err(InputError::UnknownNode("Q".to_string())));
}

// Grid

#[test]
fn test_grid_neighbors_skip_walls_and_borders() {
    let grid = Grid::new(&maze(), 3).unwrap();
    assert_eq!(grid.neighbors("c0"), vec!["c3".to_string()]);
    assert_eq!(grid.neighbors("c7"), vec!["c8".to_string(), "c6".to_string()]);
    assert!(grid.is_wall(1));
    assert!(!grid.directed());
}

#[test]
fn test_grid_bfs_goes_around_the_wall() {
    let frames = grid::bfs(&maze(), 3, "c0", "c2", &LayoutConfig::default()).unwrap();
    let last = frames.last().unwrap();
    assert_eq!(last.action_tag, Some(ActionTag::PathFound));
    assert_eq!(last.variable("distance").and_then(|v| v.as_number()), Some(6.0));
    assert_eq!(last.element("c1").unwrap().status, Status::wall());
    assert_eq!(last.element("c8").unwrap().value, Some(4.0));
}

#[test]
fn test_grid_unreachable_end_is_not_found() {
    let mut cells = maze();
    cells[7].value = Some(WALL);
    let frames = grid::dfs(&cells, 3, "c0", "c2", &LayoutConfig::default()).unwrap();
    assert_eq!(frames.last().unwrap().action_tag, Some(ActionTag::NotFound));
}

#[test]
fn test_grid_zero_columns_is_rejected() {
    assert_eq!(
        grid::bfs(&maze(), 0, "c0", "c2", &LayoutConfig::default()),
        Err(InputError::ZeroColumns)
    );
}
