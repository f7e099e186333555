//! Tests for the tree arena and the traversal and BST simulators.
use kiseki::frame::Layout;
use kiseki::prelude::*;
use kiseki::tree::logic::TreeView;
use kiseki::tree::{Bound, Extreme, LogicTree, Side, bst, traversal};
use pretty_assertions::assert_eq;

fn records(values: &[f64]) -> Vec<Record> {
    Input::from_values(values).records().unwrap_or_default().to_vec()
}

fn final_values(frames: &[Frame]) -> Vec<f64> {
    let mut values: Vec<f64> = frames
        .last()
        .unwrap()
        .elements
        .iter()
        .filter(|e| e.is_node())
        .filter_map(|e| e.value)
        .collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

fn output(frames: &[Frame]) -> String {
    frames
        .last()
        .and_then(|f| f.variable("output"))
        .and_then(|v| v.as_text())
        .unwrap()
        .to_string()
}

fn traverse(values: &[f64], order: TraversalOrder) -> Vec<Frame> {
    traversal::traverse(&records(values), order, &LayoutConfig::default()).unwrap()
}

// Arena

#[test]
fn test_duplicates_bump_the_count() {
    let tree = LogicTree::bst_from_records(&records(&[5.0, 3.0, 5.0, 8.0])).unwrap();
    let counted: Vec<(f64, u32)> = tree
        .inorder()
        .into_iter()
        .map(|i| (tree.value(i), tree.node(i).count))
        .collect();
    assert_eq!(counted, vec![(3.0, 1), (5.0, 2), (8.0, 1)]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_level_order_skips_orphans() {
    let input = vec![
        Record::new("a", 1.0),
        Record::hole("b"),
        Record::new("c", 3.0),
        Record::new("d", 4.0),
    ];
    let tree = LogicTree::from_level_order(&input).unwrap();
    let ids: Vec<&str> = tree.preorder().into_iter().map(|i| tree.id(i)).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_parent_lookup_walks_from_the_root() {
    let tree = LogicTree::bst_from_records(&records(&[50.0, 30.0, 70.0, 40.0])).unwrap();
    let forty = tree.inorder()[1];
    let (parent, side) = tree.parent_of(forty).unwrap();
    assert_eq!(tree.value(parent), 30.0);
    assert_eq!(side, Side::Right);
    assert_eq!(tree.parent_of(tree.root().unwrap()), None);
}

#[test]
fn test_tree_layout_orders_nodes_left_to_right() {
    let tree = LogicTree::bst_from_records(&records(&[2.0, 1.0, 3.0])).unwrap();
    let elements = TreeView::new(&tree).layout(&LayoutConfig::default());
    let x = |id: &str| elements.iter().find(|e| e.id == id).unwrap().position.x;
    assert!(x("n1") < x("n0"));
    assert!(x("n0") < x("n2"));
    assert_eq!(elements[0].targets(), ["n1".to_string(), "n2".to_string()]);
}

// Traversal

#[test]
fn test_each_order_visits_in_its_sequence() {
    let values = [4.0, 2.0, 6.0, 1.0, 3.0];
    assert_eq!(output(&traverse(&values, TraversalOrder::Preorder)), "[4, 2, 1, 3, 6]");
    assert_eq!(output(&traverse(&values, TraversalOrder::Inorder)), "[1, 2, 3, 4, 6]");
    assert_eq!(output(&traverse(&values, TraversalOrder::Postorder)), "[1, 3, 2, 6, 4]");
    assert_eq!(output(&traverse(&values, TraversalOrder::LevelOrder)), "[4, 2, 6, 1, 3]");
}

#[test]
fn test_recursive_orders_show_null_children() {
    let frames = traverse(&[1.0], TraversalOrder::Inorder);
    let tags: Vec<ActionTag> = frames.iter().filter_map(|f| f.action_tag).collect();
    assert_eq!(
        tags,
        vec![
            ActionTag::Call,
            ActionTag::NullChild,
            ActionTag::Visit,
            ActionTag::NullChild,
            ActionTag::Return,
            ActionTag::Done
        ]
    );
    assert!(frames[1].element("null").is_some());
    assert!(frames[2].element("null").is_none());
}

#[test]
fn test_call_stack_is_drawn_under_the_tree() {
    let frames = traverse(&[1.0, 2.0], TraversalOrder::Preorder);
    let boxes = |f: &Frame| f.elements.iter().filter(|e| e.is_box()).count();
    assert_eq!(frames.iter().map(boxes).max(), Some(2));
    assert_eq!(boxes(frames.last().unwrap()), 0);
}

#[test]
fn test_empty_tree_finishes_immediately() {
    let frames = traverse(&[], TraversalOrder::LevelOrder);
    assert_eq!(frames.len(), 2);
    assert_eq!(output(&frames), "[]");
}

// Binary search tree

#[test]
fn test_bst_insert_marks_the_path_complete() {
    let frames = bst::insert(&records(&[50.0, 30.0, 70.0]), 40.0, &LayoutConfig::default()).unwrap();
    let last = frames.last().unwrap();
    assert_eq!(final_values(&frames), vec![30.0, 40.0, 50.0, 70.0]);
    let placed = last.elements.iter().find(|e| e.value == Some(40.0)).unwrap();
    assert_eq!(last.link("n1", &placed.id).unwrap().status, Some(LinkStatus::Complete));
    assert_eq!(last.link("n0", "n1").unwrap().status, Some(LinkStatus::Complete));
    assert_eq!(last.link("n0", "n2").unwrap().status, None);
}

#[test]
fn test_bst_duplicate_insert_counts() {
    let frames = bst::insert(&records(&[5.0]), 5.0, &LayoutConfig::default()).unwrap();
    assert!(frames.iter().any(|f| f.action_tag == Some(ActionTag::Equal)));
    assert_eq!(frames.last().unwrap().element("n0").unwrap().description, "x2");
}

#[test]
fn test_bst_delete_with_two_children_uses_the_successor() {
    let frames = bst::delete(
        &records(&[50.0, 30.0, 70.0, 60.0, 80.0, 65.0]),
        50.0,
        &LayoutConfig::default(),
    )
    .unwrap();
    assert!(frames.iter().any(|f| f.action_tag == Some(ActionTag::CopySuccessor)));
    assert_eq!(final_values(&frames), vec![30.0, 60.0, 65.0, 70.0, 80.0]);
    assert_eq!(frames.last().unwrap().element("n0").unwrap().value, Some(60.0));
}

#[test]
fn test_bst_delete_of_a_missing_value_is_not_found() {
    let frames = bst::delete(&records(&[2.0, 1.0]), 9.0, &LayoutConfig::default()).unwrap();
    assert_eq!(frames.last().unwrap().action_tag, Some(ActionTag::NotFound));
    assert_eq!(final_values(&frames), vec![1.0, 2.0]);
}

#[test]
fn test_bst_min_of_an_empty_tree_is_an_input_error() {
    let result = bst::extreme(&[], Extreme::Min, &LayoutConfig::default());
    assert_eq!(result, Err(InputError::EmptyStructure("min")));
}

#[test]
fn test_bst_floor_and_ceil_pick_the_nearest_values() {
    let values = records(&[20.0, 10.0, 30.0, 25.0]);
    let config = LayoutConfig::default();
    let result = |frames: Vec<Frame>| frames.last().unwrap().variable("result").and_then(|v| v.as_number());
    assert_eq!(result(bst::bound(&values, 27.0, Bound::Floor, &config).unwrap()), Some(25.0));
    assert_eq!(result(bst::bound(&values, 27.0, Bound::Ceil, &config).unwrap()), Some(30.0));
    assert_eq!(result(bst::bound(&values, 5.0, Bound::Floor, &config).unwrap()), None);
    assert_eq!(result(bst::bound(&values, 10.0, Bound::Ceil, &config).unwrap()), Some(10.0));
}
