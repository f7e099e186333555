//! Unit tests for the frame model, frame building, highlighting and input data.
mod common;
use common::*;
use kiseki::data::ensure_unique_ids;
use kiseki::frame::{
    FrameSink, Layout, LinkTracker, Step, StatusOverrides, build_frame, fresh_id, list_text, overrides, values_text,
};
use kiseki::model::FALLBACK_COLOR;
use kiseki::prelude::*;
use pretty_assertions::assert_eq;

/// Two nodes, `a -> b`, plus a relation to an element that is never drawn.
struct Pair;

impl Layout for Pair {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element> {
        vec![
            Element::node("a", Some(1.0), Position::default(), config.node_radius)
                .with_target("b")
                .with_target("ghost"),
            Element::node("b", Some(2.0), Position::new(1.0, 0.0), config.node_radius),
        ]
    }
}

// Model

#[test]
fn test_value_display() {
    assert_eq!(Value::Number(42.0).to_string(), "42");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::from(None::<f64>).to_string(), "null");
}

#[test]
fn test_value_serializes_untagged() {
    assert_eq!(serde_json::to_string(&Value::from("A")).unwrap(), "\"A\"");
    assert_eq!(serde_json::to_string(&Value::from(3usize)).unwrap(), "3.0");
}

#[test]
fn test_builtin_statuses_parse_back() {
    for status in [
        Status::Unfinished,
        Status::Prepare,
        Status::Target,
        Status::Complete,
        Status::Inactive,
    ] {
        assert_eq!(Status::from(status.as_str()), status);
    }
}

#[test]
fn test_unknown_statuses_become_custom() {
    assert_eq!(Status::from("visited"), Status::visited());
    assert!(!Status::wall().is_builtin());
    assert_eq!(serde_json::to_string(&Status::wall()).unwrap(), "\"wall\"");
}

#[test]
fn test_new_elements_start_unfinished() {
    assert_eq!(Status::default(), Status::Unfinished);
    let node = Element::node("a", None, Position::default(), 10.0);
    assert_eq!(node.status, Status::Unfinished);
}

#[test]
fn test_palette_custom_map_wins_over_defaults() {
    let palette = Palette::new().with_color("target", "#000000");
    assert_eq!(palette.resolve(&Status::Target), "#000000");
    assert_eq!(palette.resolve(&Status::Complete), "#34d399");
}

#[test]
fn test_palette_unknown_tags_fall_back_to_gray() {
    let palette = Palette::new();
    assert_eq!(palette.resolve(&Status::from("mystery")), FALLBACK_COLOR);
    assert_eq!(palette.resolve(&Status::wall()), "#374151");
}

// Frame building

#[test]
fn test_overrides_and_link_statuses_are_applied() {
    let config = LayoutConfig::default();
    let mut tracker = LinkTracker::new();
    tracker.set("a", "b", LinkStatus::Path, true);
    let statuses = overrides([("b", Status::Target)]);

    let frame = build_frame(
        3,
        &Pair,
        &config,
        &statuses,
        &tracker,
        Step::new(ActionTag::Init, "hello").var("x", 1.0),
    );

    assert_eq!(frame.step_number, 3);
    assert_eq!(frame.element("a").unwrap().status, Status::Unfinished);
    assert_eq!(frame.element("b").unwrap().status, Status::Target);
    // The ghost relation is dropped.
    assert_eq!(frame.links.len(), 1);
    assert_eq!(frame.links[0].key, "a->b");
    assert_eq!(frame.links[0].status, Some(LinkStatus::Path));
    assert_eq!(frame.variable("x"), Some(&Value::Number(1.0)));
}

#[test]
fn test_sink_numbers_frames_densely() {
    let config = LayoutConfig::default();
    let tracker = LinkTracker::new();
    let mut sink = FrameSink::new(&config);
    sink.emit(&Pair, &StatusOverrides::new(), &tracker, Step::default());
    sink.emit(&Pair, &StatusOverrides::new(), &tracker, Step::default());
    let frames = sink.finish();
    assert_eq!(frames.iter().map(|f| f.step_number).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_emitted_frames_keep_their_link_status() {
    let config = LayoutConfig::default();
    let mut tracker = LinkTracker::new();
    let mut sink = FrameSink::new(&config);
    tracker.set("a", "b", LinkStatus::Path, true);
    sink.emit(&Pair, &StatusOverrides::new(), &tracker, Step::default());
    tracker.set("a", "b", LinkStatus::Complete, true);
    sink.emit(&Pair, &StatusOverrides::new(), &tracker, Step::default());

    let frames = sink.finish();
    assert_eq!(frames[0].link("a", "b").unwrap().status, Some(LinkStatus::Path));
    assert_eq!(frames[1].link("a", "b").unwrap().status, Some(LinkStatus::Complete));
}

#[test]
fn test_undirected_link_status_covers_both_directions() {
    let mut tracker = LinkTracker::new();
    tracker.set("a", "b", LinkStatus::Visited, false);
    assert_eq!(tracker.get("a", "b"), Some(LinkStatus::Visited));
    assert_eq!(tracker.get("b", "a"), Some(LinkStatus::Visited));

    tracker.unset("b", "a", false);
    assert_eq!(tracker.get("a", "b"), None);
    assert_eq!(tracker.get("b", "a"), None);
}

#[test]
fn test_directed_link_status_covers_one_direction() {
    let mut tracker = LinkTracker::new();
    tracker.set("a", "b", LinkStatus::Path, true);
    assert_eq!(tracker.get("a", "b"), Some(LinkStatus::Path));
    assert_eq!(tracker.get("b", "a"), None);
}

#[test]
fn test_fresh_ids_skip_taken_names() {
    let taken = ["new", "new-2"];
    assert_eq!(fresh_id("new", |c| taken.contains(&c)), "new-3");
    assert_eq!(fresh_id("node", |c| taken.contains(&c)), "node");
}

#[test]
fn test_value_lists_render_holes() {
    assert_eq!(values_text(&[Some(1.0), None, Some(2.5)]), "[1, _, 2.5]");
    assert_eq!(list_text(Vec::<String>::new()), "[]");
}

// Layout

#[test]
fn test_partial_layout_json_keeps_defaults() {
    let config = LayoutConfig::from_json(r#"{ "box_width": 10.0 }"#).unwrap();
    assert_eq!(config.box_width, 10.0);
    assert_eq!(config.box_height, LayoutConfig::default().box_height);
}

#[test]
fn test_slots_advance_by_width_and_gap() {
    let config = LayoutConfig::default();
    let first = config.slot(0);
    let second = config.slot(1);
    assert_eq!(second.x - first.x, config.box_width + config.box_gap);
    assert_eq!(first.y, second.y);
}

// Highlighting

#[test]
fn test_every_mapped_line_exists_in_its_listing() {
    let all_tags: Vec<ActionTag> = serde_json::from_str(
        r#"["init","complete","invalid_index","underflow","not_found","found","compare",
            "grow","prepare_shift","shift","assign","select","remove_last",
            "create_node","traverse","relink","update_head","update_tail","clear","remove",
            "prepare","slot_update","call","visit","null_child","return","enqueue_root",
            "dequeue","enqueue_children","done","place_root","equal","descend","place",
            "decrement","replace","remove_child","successor_step","copy_successor","update",
            "check_end","explore","visit_neighbors","path_found","expand_layer","pop",
            "push_neighbors"]"#,
    )
    .unwrap();

    for op in Operation::all() {
        let listing_len = op.pseudocode().len();
        for tag in &all_tags {
            if let Some(lines) = op.code_lines(*tag) {
                assert!(!lines.is_empty(), "{} maps {} to no lines", op, tag);
                for line in lines {
                    assert!(
                        (1..=listing_len).contains(line),
                        "{} maps {} to line {} of {}",
                        op,
                        tag,
                        line,
                        listing_len
                    );
                }
            }
        }
    }
}

#[test]
fn test_tag_display_matches_the_wire_name() {
    assert_eq!(ActionTag::PrepareShift.to_string(), "prepare_shift");
    assert_eq!(ActionTag::Init.to_string(), "init");
    for (input, action) in catalogue() {
        for frame in generate_frames(&input, &action) {
            let tag = frame.action_tag.expect("every frame carries a tag");
            let wire = serde_json::to_value(tag).unwrap();
            assert_eq!(wire.as_str(), Some(tag.as_str()));
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }
}

#[test]
fn test_tail_variants_have_distinct_listings() {
    let plain = Operation::ListInsertTail { tail_pointer: false };
    let tail = Operation::ListInsertTail { tail_pointer: true };
    assert_ne!(plain.pseudocode(), tail.pseudocode());
    assert!(plain.code_lines(ActionTag::UpdateTail).is_none());
    assert_eq!(tail.code_lines(ActionTag::UpdateTail), Some(&[5usize][..]));
}

// Input data

#[test]
fn test_grid_cells_use_val_alias() {
    let input: Input = serde_json::from_str(r#"[{"id":"c0","val":1},{"id":"c1","val":0}]"#).unwrap();
    let records = input.records().unwrap();
    assert_eq!(records[0].value, Some(1.0));
    assert_eq!(records[1].value, Some(0.0));
}

#[test]
fn test_graph_input_is_detected() {
    let input: Input =
        serde_json::from_str(r#"{"nodes":[{"id":"A"},{"id":"B"}],"edges":[{"source":"A","target":"B"}]}"#).unwrap();
    assert_eq!(input.kind(), "graph");
    assert_eq!(input.graph().and_then(|g| g.edges.as_ref()).map(Vec::len), Some(1));
}

#[test]
fn test_missing_edge_list_survives_a_round_trip() {
    let input: Input = serde_json::from_str(r#"{"nodes":[{"id":"A"}]}"#).unwrap();
    let json = serde_json::to_string(&input).unwrap();
    assert!(!json.contains("edges"));
    let back: Input = serde_json::from_str(&json).unwrap();
    assert_eq!(back.graph().map(|g| g.edges.is_none()), Some(true));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let records = vec![Record::new("a", 1.0), Record::new("a", 2.0)];
    assert_eq!(ensure_unique_ids(&records), Err(InputError::DuplicateId("a".to_string())));
}

#[test]
fn test_scenario_round_trips_through_json() {
    let scenario = Scenario::new(values(&[50.0, 30.0]), Action::Bst(BstOp::Insert { value: 40.0 }));
    let json = scenario.to_json().unwrap();
    assert_eq!(Scenario::from_json(&json).unwrap(), scenario);
}

#[test]
fn test_missing_scenario_file_reports_the_path() {
    let err = Scenario::from_file("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_loaded_scenario_runs() {
    let scenario = Scenario::from_json(
        r#"{"input":[{"id":"a","value":1},{"id":"b","value":2}],"action":{"structure":"queue","op":"dequeue"}}"#,
    )
    .unwrap();
    let frames = generate_frames(&scenario.input, &scenario.action);
    assert_eq!(frames.last().unwrap().box_values(), vec![Some(2.0)]);
}

// Engine and transcripts

#[test]
fn test_actions_parse_from_tagged_json() {
    let action: Action = serde_json::from_str(
        r#"{"structure":"linked_list","op":"insert_at","index":1,"value":5,"tail_pointer":true}"#,
    )
    .unwrap();
    assert_eq!(
        action,
        Action::LinkedList(ListAction {
            op: ListOp::InsertAt { index: 1, value: 5.0 },
            tail_pointer: true,
        })
    );
    assert_eq!(action.operation(), Operation::ListInsertAt { tail_pointer: true });

    let action: Action = serde_json::from_str(r#"{"structure":"stack","op":"pop"}"#).unwrap();
    assert_eq!(action, Action::Stack(StackOp::Pop));

    let action: Action = serde_json::from_str(r#"{"structure":"graph","op":"bfs","start":"A","end":"B"}"#).unwrap();
    assert_eq!(action.operation(), Operation::GraphBfs);
}

#[test]
fn test_wrong_input_shape_gives_no_frames() {
    let input = Input::Graph(GraphRecord::from_edges(&[("A", "B")]));
    let action = Action::Array(ArrayOp::Delete { index: 0 });
    assert!(generate_frames(&input, &action).is_empty());
    assert!(matches!(
        Engine::default().try_generate(&input, &action),
        Err(InputError::ShapeMismatch {
            expected: "flat record",
            ..
        })
    ));
}

#[test]
fn test_builder_sets_the_scale_group() {
    let engine = Engine::builder().with_scale_group("bars").build();
    let frames = engine.generate(&values(&[3.0]), &Action::Array(ArrayOp::Search { value: 3.0 }));
    let slot = frames[0].element("slot-0").unwrap();
    assert_eq!(
        slot.shape,
        Shape::Box {
            width: 48.0,
            height: 48.0,
            scale_group: Some("bars".to_string()),
        }
    );
}

#[test]
fn test_transcript_shows_tags_code_and_variables() {
    let action = Action::Stack(StackOp::Push { value: 7.0 });
    let frames = generate_frames(&values(&[1.0]), &action);
    let text = TraceFormatter::format_frames(&frames, Some(action.operation()));

    assert!(text.starts_with("== stack push (4 frames) ==\n"));
    assert!(text.contains("[0] init: Push 7\n"));
    assert!(text.contains(" 3 | stack[stack.top] = value\n"));
    assert!(text.contains("vars: contents = [1, 7], size = 2"));
}
