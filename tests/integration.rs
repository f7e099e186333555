//! Integration tests for Kiseki
//!
//! End-to-end tests that run actions through the public entry points and
//! check the frames a renderer would receive.
//!
mod common;
use common::*;
use kiseki::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn last(frames: &[Frame]) -> &Frame {
        frames.last().expect("trace should not be empty")
    }

    fn number(frame: &Frame, name: &str) -> Option<f64> {
        frame.variable(name).and_then(|v| v.as_number())
    }

    #[test]
    fn test_bst_insert_places_the_new_node_under_its_parent() {
        let frames = generate_frames(&values(&[50.0, 30.0, 70.0]), &Action::Bst(BstOp::Insert { value: 40.0 }));
        let end = last(&frames);

        let mut node_values: Vec<f64> = end.elements.iter().filter(|e| e.is_node()).filter_map(|e| e.value).collect();
        node_values.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(node_values, vec![30.0, 40.0, 50.0, 70.0]);

        let placed = end
            .elements
            .iter()
            .find(|e| e.is_node() && e.value == Some(40.0))
            .expect("40 should be in the tree");
        assert_eq!(end.link("n1", &placed.id).map(|l| l.status), Some(Some(LinkStatus::Complete)));
        assert_eq!(end.action_tag, Some(ActionTag::Complete));
    }

    #[test]
    fn test_array_delete_shifts_the_tail_left() {
        let frames = generate_frames(&values(&[10.0, 20.0, 30.0]), &Action::Array(ArrayOp::Delete { index: 1 }));
        let end = last(&frames);
        assert_eq!(end.box_values(), vec![Some(10.0), Some(30.0)]);
        assert_eq!(number(end, "removed"), Some(20.0));
        assert_eq!(number(end, "length"), Some(2.0));
    }

    #[test]
    fn test_graph_bfs_finds_a_shortest_path() {
        let frames = generate_frames(&Input::Graph(diamond()), &graph_search(Algorithm::Bfs, "A", "C", false));
        let end = last(&frames);
        assert_eq!(end.action_tag, Some(ActionTag::PathFound));
        assert_eq!(number(end, "distance"), Some(2.0));
        let path = end.variable("path").and_then(|v| v.as_text()).unwrap_or_default();
        assert!(path == "A -> B -> C" || path == "A -> D -> C", "unexpected path {}", path);
    }

    #[test]
    fn test_queue_dequeue_returns_the_front() {
        let frames = generate_frames(&values(&[1.0, 2.0, 3.0]), &Action::Queue(QueueOp::Dequeue));
        let end = last(&frames);
        assert_eq!(end.box_values(), vec![Some(2.0), Some(3.0)]);
        assert_eq!(number(end, "returned"), Some(1.0));
    }

    #[test]
    fn test_identical_calls_yield_identical_frames() {
        let engine = Engine::default();
        for (input, action) in catalogue() {
            let first = engine.generate(&input, &action);
            let second = engine.generate(&input, &action);
            assert!(!first.is_empty(), "{:?} produced no frames", action);
            assert_eq!(first, second, "{:?} is not deterministic", action);
        }
    }

    #[test]
    fn test_every_emitted_tag_has_code_lines() {
        for (input, action) in catalogue() {
            let operation = action.operation();
            for frame in generate_frames(&input, &action) {
                let tag = frame.action_tag.expect("every frame carries a tag");
                let lines = operation.code_lines(tag);
                assert!(lines.is_some(), "{} emitted unmapped tag {}", operation, tag);
                let listing_len = operation.pseudocode().len();
                for line in lines.unwrap_or_default() {
                    assert!(
                        (1..=listing_len).contains(line),
                        "{} maps {} to line {} of {}",
                        operation,
                        tag,
                        line,
                        listing_len
                    );
                }
            }
        }
    }

    #[test]
    fn test_statuses_stay_in_the_known_vocabulary() {
        let allowed = [Status::visited(), Status::wall()];
        for (input, action) in catalogue() {
            for frame in generate_frames(&input, &action) {
                for element in &frame.elements {
                    assert!(
                        element.status.is_builtin() || allowed.contains(&element.status),
                        "{:?} used status {}",
                        action,
                        element.status
                    );
                }
            }
        }
    }

    #[test]
    fn test_links_and_step_numbers_are_consistent() {
        for (input, action) in catalogue() {
            let frames = generate_frames(&input, &action);
            for (i, frame) in frames.iter().enumerate() {
                assert_eq!(frame.step_number, i);
                for link in &frame.links {
                    assert!(frame.element(&link.source_id).is_some(), "{:?}: {}", action, link.key);
                    assert!(frame.element(&link.target_id).is_some(), "{:?}: {}", action, link.key);
                }
            }
        }
    }

    #[test]
    fn test_invalid_index_leaves_the_array_untouched() {
        let frames = generate_frames(&values(&[1.0, 2.0]), &Action::Array(ArrayOp::Insert { index: 5, value: 9.0 }));
        assert_eq!(frames.len(), 2);
        let end = last(&frames);
        assert_eq!(end.action_tag, Some(ActionTag::InvalidIndex));
        assert_eq!(end.box_values(), vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_underflow_is_reported_in_frames() {
        let frames = generate_frames(&empty(), &Action::Stack(StackOp::Pop));
        let tags: Vec<_> = frames.iter().filter_map(|f| f.action_tag).collect();
        assert_eq!(tags, vec![ActionTag::Init, ActionTag::Underflow]);
    }

    #[test]
    fn test_not_found_sets_found_false() {
        let frames = generate_frames(&values(&BST_VALUES), &Action::Bst(BstOp::Search { value: 1.0 }));
        let end = last(&frames);
        assert_eq!(end.action_tag, Some(ActionTag::NotFound));
        assert_eq!(end.variable("found").and_then(|v| v.as_bool()), Some(false));
    }

    #[test]
    fn test_malformed_inputs_yield_no_frames() {
        let engine = Engine::default();
        let no_edges: Input =
            serde_json::from_str(r#"{"nodes":[{"id":"A"},{"id":"B"}]}"#).expect("graph without edges parses");
        let cases = vec![
            (Input::Graph(GraphRecord::default()), graph_search(Algorithm::Bfs, "A", "B", false)),
            (no_edges.clone(), graph_search(Algorithm::Bfs, "A", "A", false)),
            (no_edges, graph_search(Algorithm::Dfs, "A", "B", false)),
            (Input::Graph(diamond()), graph_search(Algorithm::Dfs, "A", "Z", false)),
            (values(&[1.0]), graph_search(Algorithm::Bfs, "n0", "n0", false)),
            (Input::Graph(diamond()), Action::Array(ArrayOp::Search { value: 1.0 })),
            (
                Input::Records(maze()),
                Action::Grid(GridAction {
                    op: Algorithm::Bfs,
                    cols: 0,
                    start: "c0".to_string(),
                    end: "c2".to_string(),
                }),
            ),
            (empty(), Action::Bst(BstOp::Min)),
            (empty(), Action::Bst(BstOp::Max)),
        ];
        for (input, action) in cases {
            assert!(generate_frames(&input, &action).is_empty(), "{:?}", action);
            assert!(engine.try_generate(&input, &action).is_err(), "{:?}", action);
        }
    }

    #[test]
    fn test_graph_without_edges_key_is_rejected_but_empty_list_traces() {
        let missing: Input = serde_json::from_str(r#"{"nodes":[{"id":"A"},{"id":"B"}]}"#).expect("parses");
        assert_eq!(missing.graph().map(|g| g.edges.is_none()), Some(true));
        assert_eq!(
            Engine::default().try_generate(&missing, &graph_search(Algorithm::Bfs, "A", "A", false)),
            Err(InputError::MissingEdges)
        );

        let edgeless: Input = serde_json::from_str(r#"{"nodes":[{"id":"A"},{"id":"B"}],"edges":[]}"#).expect("parses");
        let frames = generate_frames(&edgeless, &graph_search(Algorithm::Bfs, "A", "B", false));
        assert_eq!(last(&frames).action_tag, Some(ActionTag::NotFound));
    }

    #[test]
    fn test_grid_bfs_reports_the_maze_distance() {
        let frames = generate_frames(&Input::Records(maze()), &grid_search(Algorithm::Bfs, "c0", "c2"));
        let end = last(&frames);
        assert_eq!(end.action_tag, Some(ActionTag::PathFound));
        assert_eq!(number(end, "distance"), Some(6.0));
        assert!(frames.iter().any(|f| f.action_tag == Some(ActionTag::ExpandLayer)));
    }

    #[test]
    fn test_traversal_outputs_every_order() {
        let expected = [
            (TraversalOrder::Preorder, "[1, 2, 5, 3]"),
            (TraversalOrder::Inorder, "[2, 5, 1, 3]"),
            (TraversalOrder::Postorder, "[5, 2, 3, 1]"),
            (TraversalOrder::LevelOrder, "[1, 2, 3, 5]"),
        ];
        for (mode, output) in expected {
            let frames = generate_frames(&level_order_tree(), &Action::Traversal { mode });
            let end = last(&frames);
            assert_eq!(end.action_tag, Some(ActionTag::Done));
            assert_eq!(end.variable("output").and_then(|v| v.as_text()), Some(output), "{}", mode);
        }
    }

    #[test]
    fn test_scenario_file_runs_end_to_end() {
        let scenario = Scenario::new(values(&[3.0, 1.0]), Action::Stack(StackOp::Push { value: 4.0 }));
        let path = std::env::temp_dir().join("kiseki_integration_scenario.json");
        fs::write(&path, scenario.to_json().expect("serialize scenario")).expect("write scenario");

        let loaded = Scenario::from_file(path.to_str().expect("utf-8 temp path")).expect("load scenario");
        assert_eq!(loaded, scenario);

        let frames = Engine::builder()
            .build()
            .try_generate(&loaded.input, &loaded.action)
            .expect("stack push succeeds");
        assert_eq!(last(&frames).box_values(), vec![Some(3.0), Some(1.0), Some(4.0)]);

        let transcript = TraceFormatter::format_frames(&frames, Some(loaded.action.operation()));
        assert!(transcript.contains("complete"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_frames_serialize_to_json() {
        let frames = generate_frames(&values(&[1.0, 2.0]), &Action::Queue(QueueOp::Peek));
        let json = serde_json::to_string(&frames).expect("frames serialize");
        let back: Vec<Frame> = serde_json::from_str(&json).expect("frames deserialize");
        assert_eq!(back, frames);
    }

    #[test]
    fn test_palette_resolves_emitted_statuses() {
        let palette = Palette::new().with_color("visited", "#123456");
        assert_eq!(palette.resolve(&Status::visited()), "#123456");
        assert_ne!(palette.resolve(&Status::Target), palette.resolve(&Status::Complete));
    }
}
