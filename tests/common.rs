//! Common test utilities for building inputs and actions.
use kiseki::prelude::*;

/// `[50, 30, 70, 60, 80, 65]`: root 50, a leaf on the left and a right
/// subtree deep enough for a successor search.
#[allow(dead_code)]
pub const BST_VALUES: [f64; 6] = [50.0, 30.0, 70.0, 60.0, 80.0, 65.0];

/// The diamond `A-B, B-C, A-D, D-C`.
#[allow(dead_code)]
pub fn diamond() -> GraphRecord {
    GraphRecord::from_edges(&[("A", "B"), ("B", "C"), ("A", "D"), ("D", "C")])
}

/// The diamond plus an isolated node `E`.
#[allow(dead_code)]
pub fn diamond_with_island() -> GraphRecord {
    let mut graph = diamond();
    graph.nodes.push(GraphNodeRecord {
        id: "E".to_string(),
        value: None,
        x: Some(0.0),
        y: Some(0.0),
    });
    graph
}

/// 3x3 maze with walls at `c1` and `c4`:
///
/// ```text
/// . # .
/// . # .
/// . . .
/// ```
#[allow(dead_code)]
pub fn maze() -> Vec<Record> {
    (0..9)
        .map(|i| Record::new(format!("c{}", i), if i == 1 || i == 4 { 1.0 } else { 0.0 }))
        .collect()
}

/// Level-order tree `[1, 2, 3, null, 5]`.
#[allow(dead_code)]
pub fn level_order_tree() -> Input {
    Input::Records(vec![
        Record::new("t0", 1.0),
        Record::new("t1", 2.0),
        Record::new("t2", 3.0),
        Record::hole("t3"),
        Record::new("t4", 5.0),
    ])
}

#[allow(dead_code)]
pub fn values(values: &[f64]) -> Input {
    Input::from_values(values)
}

#[allow(dead_code)]
pub fn empty() -> Input {
    Input::Records(Vec::new())
}

#[allow(dead_code)]
pub fn list(op: ListOp, tail_pointer: bool) -> Action {
    Action::LinkedList(ListAction { op, tail_pointer })
}

#[allow(dead_code)]
pub fn graph_search(op: Algorithm, start: &str, end: &str, directed: bool) -> Action {
    Action::Graph(GraphAction {
        op,
        start: start.to_string(),
        end: end.to_string(),
        directed,
    })
}

#[allow(dead_code)]
pub fn grid_search(op: Algorithm, start: &str, end: &str) -> Action {
    Action::Grid(GridAction {
        op,
        cols: 3,
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Every operation on well-formed input, including the not-found,
/// invalid-index and underflow paths.
#[allow(dead_code)]
pub fn catalogue() -> Vec<(Input, Action)> {
    let mut cases = Vec::new();

    let array = values(&[10.0, 20.0, 30.0]);
    for op in [
        ArrayOp::Insert { index: 1, value: 15.0 },
        ArrayOp::Insert { index: 3, value: 40.0 },
        ArrayOp::Insert { index: 9, value: 1.0 },
        ArrayOp::Delete { index: 1 },
        ArrayOp::Delete { index: -1 },
        ArrayOp::Search { value: 30.0 },
        ArrayOp::Search { value: 99.0 },
    ] {
        cases.push((array.clone(), Action::Array(op)));
    }

    let chain = values(&[1.0, 2.0, 3.0]);
    for tail_pointer in [false, true] {
        for op in [
            ListOp::InsertHead { value: 9.0 },
            ListOp::InsertTail { value: 9.0 },
            ListOp::InsertAt { index: 1, value: 9.0 },
            ListOp::InsertAt { index: 3, value: 9.0 },
            ListOp::InsertAt { index: 7, value: 9.0 },
            ListOp::DeleteHead,
            ListOp::DeleteTail,
            ListOp::DeleteAt { index: 1 },
            ListOp::DeleteAt { index: 5 },
            ListOp::Search { value: 3.0 },
            ListOp::Search { value: 8.0 },
        ] {
            cases.push((chain.clone(), list(op, tail_pointer)));
        }
        cases.push((values(&[4.0]), list(ListOp::DeleteTail, tail_pointer)));
        cases.push((empty(), list(ListOp::InsertHead { value: 1.0 }, tail_pointer)));
        cases.push((empty(), list(ListOp::InsertTail { value: 1.0 }, tail_pointer)));
        cases.push((empty(), list(ListOp::DeleteHead, tail_pointer)));
    }

    for op in [StackOp::Push { value: 7.0 }, StackOp::Pop, StackOp::Peek] {
        cases.push((values(&[1.0, 2.0]), Action::Stack(op)));
        cases.push((empty(), Action::Stack(op)));
    }

    for op in [QueueOp::Enqueue { value: 4.0 }, QueueOp::Dequeue, QueueOp::Peek] {
        cases.push((values(&[1.0, 2.0, 3.0]), Action::Queue(op)));
        cases.push((empty(), Action::Queue(op)));
    }

    for mode in [
        TraversalOrder::Preorder,
        TraversalOrder::Inorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
    ] {
        cases.push((level_order_tree(), Action::Traversal { mode }));
        cases.push((empty(), Action::Traversal { mode }));
    }

    let tree = values(&BST_VALUES);
    for op in [
        BstOp::Insert { value: 40.0 },
        BstOp::Insert { value: 50.0 },
        BstOp::Delete { value: 30.0 },
        BstOp::Delete { value: 80.0 },
        BstOp::Delete { value: 60.0 },
        BstOp::Delete { value: 50.0 },
        BstOp::Delete { value: 99.0 },
        BstOp::Search { value: 65.0 },
        BstOp::Search { value: 1.0 },
        BstOp::Min,
        BstOp::Max,
        BstOp::Floor { value: 62.0 },
        BstOp::Floor { value: 1.0 },
        BstOp::Ceil { value: 62.0 },
        BstOp::Ceil { value: 100.0 },
        BstOp::Ceil { value: 70.0 },
    ] {
        cases.push((tree.clone(), Action::Bst(op)));
    }
    cases.push((values(&[5.0, 5.0]), Action::Bst(BstOp::Delete { value: 5.0 })));
    cases.push((empty(), Action::Bst(BstOp::Insert { value: 5.0 })));
    cases.push((empty(), Action::Bst(BstOp::Floor { value: 5.0 })));

    for op in [Algorithm::Bfs, Algorithm::Dfs] {
        cases.push((Input::Graph(diamond()), graph_search(op, "A", "C", false)));
        cases.push((Input::Graph(diamond()), graph_search(op, "A", "A", false)));
        cases.push((Input::Graph(diamond()), graph_search(op, "C", "A", true)));
        cases.push((Input::Graph(diamond_with_island()), graph_search(op, "A", "E", false)));
        cases.push((Input::Records(maze()), grid_search(op, "c0", "c2")));
        cases.push((Input::Records(maze()), grid_search(op, "c0", "c1")));
    }

    cases
}
