use crate::data::{Record, ensure_unique_ids};
use crate::error::InputError;
use crate::frame::{FrameSink, Layout, LinkTracker, Step, StatusOverrides, fresh_id, list_text, overrides};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Element, Frame, LinkStatus, Status, format_number};

#[derive(Debug, Clone)]
struct ListNode {
    id: String,
    value: Option<f64>,
    next: Option<String>,
    /// Drawn below the row while it is not (or no longer) part of the chain.
    detached: bool,
}

/// Nodes in display order plus the head/tail pointers.
///
/// Display order equals chain order for attached nodes; `next` pointers are
/// stored explicitly so half-finished relinks can be shown.
struct ListSnapshot<'a> {
    nodes: &'a [ListNode],
    head: Option<&'a str>,
    tail: Option<&'a str>,
    show_tail: bool,
    cursor: Option<(&'static str, &'a str)>,
}

impl ListSnapshot<'_> {
    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

impl Layout for ListSnapshot<'_> {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element> {
        let mut elements: Vec<Element> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let mut position = config.chain(i);
                if node.detached {
                    position = position.offset(0.0, config.level_height);
                }
                let element = Element::node(node.id.clone(), node.value, position, config.node_radius);
                match &node.next {
                    Some(next) => element.with_target(next.clone()),
                    None => element,
                }
            })
            .collect();

        let anchor = |id: Option<&str>| {
            let index = id.and_then(|id| self.index_of(id));
            match index {
                Some(i) => config.chain(i),
                None => config.chain(0).offset(-config.node_spacing, 0.0),
            }
        };

        let head = anchor(self.head).offset(0.0, -config.pointer_offset);
        elements.push(Element::pointer("head", pointer_label("head", self.head), head));
        if self.show_tail {
            let tail = anchor(self.tail).offset(0.0, config.pointer_offset);
            elements.push(Element::pointer("tail", pointer_label("tail", self.tail), tail));
        }
        if let Some((label, id)) = self.cursor {
            let position = anchor(Some(id)).offset(0.0, -2.0 * config.pointer_offset);
            elements.push(Element::pointer("cursor", label, position));
        }
        elements
    }
}

fn pointer_label(name: &str, target: Option<&str>) -> String {
    match target {
        Some(_) => name.to_string(),
        None => format!("{} = null", name),
    }
}

/// Which end or position an insert or delete works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPosition {
    Head,
    Tail,
    Index(i64),
}

struct ListTrace<'a> {
    nodes: Vec<ListNode>,
    head: Option<String>,
    tail: Option<String>,
    tail_pointer: bool,
    sink: FrameSink<'a>,
    links: LinkTracker,
}

impl<'a> ListTrace<'a> {
    fn new(records: &[Record], tail_pointer: bool, config: &'a LayoutConfig) -> Result<Self, InputError> {
        ensure_unique_ids(records)?;
        let nodes: Vec<ListNode> = records
            .iter()
            .enumerate()
            .map(|(i, r)| ListNode {
                id: r.id.clone(),
                value: r.value,
                next: records.get(i + 1).map(|n| n.id.clone()),
                detached: false,
            })
            .collect();
        Ok(Self {
            head: nodes.first().map(|n| n.id.clone()),
            tail: nodes.last().map(|n| n.id.clone()),
            nodes,
            tail_pointer,
            sink: FrameSink::new(config),
            links: LinkTracker::new(),
        })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: &str) -> Option<&ListNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut ListNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    fn next_of(&self, id: &str) -> Option<String> {
        self.node(id).and_then(|n| n.next.clone())
    }

    fn set_next(&mut self, id: &str, next: Option<String>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    fn set_detached(&mut self, id: &str, detached: bool) {
        if let Some(node) = self.node_mut(id) {
            node.detached = detached;
        }
    }

    fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|n| n.id != id);
    }

    fn chain_values(&self) -> Vec<String> {
        let mut values = Vec::new();
        let mut curr = self.head.clone();
        while let Some(id) = curr {
            let Some(node) = self.node(&id) else { break };
            values.push(node.value.map_or_else(|| "_".to_string(), format_number));
            curr = node.next.clone();
            if values.len() > self.nodes.len() {
                break;
            }
        }
        values
    }

    fn emit(&mut self, statuses: StatusOverrides, cursor: Option<(&'static str, &str)>, step: Step) {
        let snapshot = ListSnapshot {
            nodes: &self.nodes,
            head: self.head.as_deref(),
            tail: self.tail.as_deref(),
            show_tail: self.tail_pointer,
            cursor,
        };
        let step = step
            .var("list", list_text(self.chain_values()))
            .var("length", self.nodes.iter().filter(|n| !n.detached).count());
        self.sink.emit(&snapshot, &statuses, &self.links, step);
    }

    fn create_node(&mut self, value: f64, at: usize) -> String {
        let id = fresh_id("new", |c| self.nodes.iter().any(|n| n.id == c));
        self.nodes.insert(
            at,
            ListNode {
                id: id.clone(),
                value: Some(value),
                next: None,
                detached: true,
            },
        );
        self.emit(
            overrides([(id.clone(), Status::Target)]),
            None,
            Step::new(
                ActionTag::CreateNode,
                format!("node = new Node({})", format_number(value)),
            ),
        );
        id
    }

    /// Walks `steps` nodes from the head, one frame per step, and returns the
    /// id the cursor ends on.
    fn walk(&mut self, label: &'static str, steps: usize) -> Option<String> {
        let mut curr = self.head.clone()?;
        let mut passed: Vec<String> = Vec::new();
        self.emit(
            overrides([(curr.clone(), Status::Target)]),
            Some((label, curr.as_str())),
            Step::new(ActionTag::Traverse, format!("{} = head", label)),
        );
        for _ in 0..steps {
            let next = self.next_of(&curr)?;
            self.links.set(&curr, &next, LinkStatus::Path, true);
            passed.push(std::mem::replace(&mut curr, next));
            let mut statuses = overrides(passed.iter().map(|id| (id.clone(), Status::Prepare)));
            statuses.insert(curr.clone(), Status::Target);
            self.emit(
                statuses,
                Some((label, curr.as_str())),
                Step::new(ActionTag::Traverse, format!("{0} = {0}.next", label)),
            );
        }
        Some(curr)
    }

    fn complete(&mut self, description: String, highlight: Option<&str>) {
        let statuses = match highlight {
            Some(id) => overrides([(id.to_string(), Status::Complete)]),
            None => StatusOverrides::new(),
        };
        self.emit(statuses, None, Step::new(ActionTag::Complete, description));
    }

    fn insert_head(&mut self, value: f64) {
        let old_head = self.head.clone();
        let id = self.create_node(value, 0);

        if let Some(old_head) = &old_head {
            self.set_next(&id, Some(old_head.clone()));
            self.links.set(&id, old_head, LinkStatus::Path, true);
            self.emit(
                overrides([(id.clone(), Status::Target)]),
                None,
                Step::new(ActionTag::Relink, "node.next = head"),
            );
        }

        self.head = Some(id.clone());
        self.set_detached(&id, false);
        self.emit(
            overrides([(id.clone(), Status::Target)]),
            None,
            Step::new(ActionTag::UpdateHead, "head = node"),
        );

        if self.tail.is_none() {
            self.tail = Some(id.clone());
            if self.tail_pointer {
                self.emit(
                    overrides([(id.clone(), Status::Target)]),
                    None,
                    Step::new(ActionTag::UpdateTail, "The list was empty, so tail = node"),
                );
            }
        }
        self.complete(format!("Inserted {} at the head", format_number(value)), Some(id.as_str()));
    }

    fn insert_tail(&mut self, value: f64) {
        let at = self.len();
        let id = self.create_node(value, at);

        let Some(last) = self.tail.clone() else {
            self.head = Some(id.clone());
            self.tail = Some(id.clone());
            self.set_detached(&id, false);
            let description = if self.tail_pointer {
                "The list was empty, so head = tail = node"
            } else {
                "The list was empty, so head = node"
            };
            self.emit(
                overrides([(id.clone(), Status::Target)]),
                None,
                Step::new(ActionTag::UpdateHead, description),
            );
            self.complete(format!("Inserted {} at the tail", format_number(value)), Some(id.as_str()));
            return;
        };

        let prev = if self.tail_pointer {
            last
        } else {
            // Stop on the last attached node; the new node has no predecessor yet.
            let steps = self.len().saturating_sub(2);
            self.walk("curr", steps).unwrap_or(last)
        };

        self.set_next(&prev, Some(id.clone()));
        self.links.set(&prev, &id, LinkStatus::Path, true);
        self.set_detached(&id, false);
        let description = if self.tail_pointer {
            "tail.next = node"
        } else {
            "curr.next = node"
        };
        self.emit(
            overrides([(prev.clone(), Status::Prepare), (id.clone(), Status::Target)]),
            None,
            Step::new(ActionTag::Relink, description),
        );

        self.tail = Some(id.clone());
        if self.tail_pointer {
            self.emit(
                overrides([(id.clone(), Status::Target)]),
                None,
                Step::new(ActionTag::UpdateTail, "tail = node"),
            );
        }
        self.complete(format!("Inserted {} at the tail", format_number(value)), Some(id.as_str()));
    }

    fn insert_middle(&mut self, index: usize, value: f64) {
        let Some(prev) = self.walk("prev", index - 1) else {
            return;
        };
        let id = self.create_node(value, index);

        let after = self.next_of(&prev);
        self.set_next(&id, after.clone());
        if let Some(after) = &after {
            self.links.set(&id, after, LinkStatus::Path, true);
        }
        self.emit(
            overrides([(prev.clone(), Status::Prepare), (id.clone(), Status::Target)]),
            Some(("prev", prev.as_str())),
            Step::new(ActionTag::Relink, "node.next = prev.next"),
        );

        self.set_next(&prev, Some(id.clone()));
        self.links.set(&prev, &id, LinkStatus::Path, true);
        self.set_detached(&id, false);
        self.emit(
            overrides([(prev.clone(), Status::Prepare), (id.clone(), Status::Target)]),
            Some(("prev", prev.as_str())),
            Step::new(ActionTag::Relink, "prev.next = node"),
        );
        self.complete(
            format!("Inserted {} at index {}", format_number(value), index),
            Some(id.as_str()),
        );
    }

    /// Removes the only node of a one-element list.
    fn clear_single(&mut self, id: &str) {
        self.head = None;
        self.tail = None;
        self.set_detached(id, true);
        let description = if self.tail_pointer {
            "The list had one node: head = tail = null"
        } else {
            "The list had one node: head = null"
        };
        self.emit(
            overrides([(id.to_string(), Status::Target)]),
            None,
            Step::new(ActionTag::Clear, description),
        );
        self.remove_node(id);
        self.emit(StatusOverrides::new(), None, Step::new(ActionTag::Remove, "Free the removed node"));
    }

    fn select(&mut self, id: &str, cursor: Option<(&'static str, &str)>) -> Option<f64> {
        let removed = self.node(id).and_then(|n| n.value);
        self.emit(
            overrides([(id.to_string(), Status::Target)]),
            cursor,
            Step::new(
                ActionTag::Select,
                format!("removed = {}", removed.map_or_else(|| "_".to_string(), format_number)),
            )
            .var("removed", removed),
        );
        removed
    }

    fn delete_head(&mut self) {
        let Some(head) = self.head.clone() else {
            return;
        };
        let removed = self.select(&head, None);

        match self.next_of(&head) {
            None => self.clear_single(&head),
            Some(next) => {
                self.head = Some(next.clone());
                self.set_detached(&head, true);
                self.emit(
                    overrides([(head.clone(), Status::Target)]),
                    None,
                    Step::new(ActionTag::UpdateHead, "head = head.next"),
                );
                self.remove_node(&head);
                self.emit(
                    StatusOverrides::new(),
                    None,
                    Step::new(ActionTag::Remove, "Free the removed node"),
                );
            }
        }
        self.complete(format!("Deleted {} from the head", value_text(removed)), None);
    }

    fn delete_tail(&mut self) {
        let Some(head) = self.head.clone() else {
            return;
        };
        if self.next_of(&head).is_none() {
            let removed = self.select(&head, None);
            self.clear_single(&head);
            self.complete(format!("Deleted {} from the tail", value_text(removed)), None);
            return;
        }

        let steps = self.len().saturating_sub(2);
        let Some(prev) = self.walk("prev", steps) else {
            return;
        };
        self.unlink_after(&prev, "tail");
    }

    fn delete_middle(&mut self, index: usize) {
        let Some(prev) = self.walk("prev", index - 1) else {
            return;
        };
        self.unlink_after(&prev, &format!("index {}", index));
    }

    /// Removes `prev.next`, keeping the tail pointer correct.
    fn unlink_after(&mut self, prev: &str, place: &str) {
        let Some(target) = self.next_of(prev) else {
            return;
        };
        let removed = self.select(&target, Some(("prev", prev)));

        let after = self.next_of(&target);
        self.set_next(prev, after.clone());
        self.links.unset(prev, &target, true);
        if let Some(after) = &after {
            self.links.set(prev, after, LinkStatus::Path, true);
        }
        self.set_detached(&target, true);
        let description = if after.is_some() {
            "prev.next = removed.next"
        } else {
            "prev.next = null"
        };
        self.emit(
            overrides([(prev.to_string(), Status::Prepare), (target.clone(), Status::Target)]),
            Some(("prev", prev)),
            Step::new(ActionTag::Relink, description),
        );

        if self.tail.as_deref() == Some(target.as_str()) {
            self.tail = Some(prev.to_string());
            if self.tail_pointer {
                self.emit(
                    overrides([(prev.to_string(), Status::Target)]),
                    Some(("prev", prev)),
                    Step::new(ActionTag::UpdateTail, "tail = prev"),
                );
            }
        }

        self.remove_node(&target);
        self.emit(
            StatusOverrides::new(),
            None,
            Step::new(ActionTag::Remove, "Free the removed node"),
        );
        self.complete(format!("Deleted {} from the {}", value_text(removed), place), None);
    }

    fn finish(self) -> Vec<Frame> {
        self.sink.finish()
    }
}

fn value_text(value: Option<f64>) -> String {
    value.map_or_else(|| "_".to_string(), format_number)
}

fn position_text(position: ListPosition) -> String {
    match position {
        ListPosition::Head => "the head".to_string(),
        ListPosition::Tail => "the tail".to_string(),
        ListPosition::Index(i) => format!("index {}", i),
    }
}

/// Inserts `value` at `position`.
pub fn insert(
    records: &[Record],
    position: ListPosition,
    value: f64,
    tail_pointer: bool,
    config: &LayoutConfig,
) -> Result<Vec<Frame>, InputError> {
    let mut trace = ListTrace::new(records, tail_pointer, config)?;
    let len = trace.len();
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(
            ActionTag::Init,
            format!("Insert {} at {}", format_number(value), position_text(position)),
        )
        .var("value", value),
    );

    match position {
        ListPosition::Head => trace.insert_head(value),
        ListPosition::Tail => trace.insert_tail(value),
        ListPosition::Index(index) if index < 0 || index as usize > len => {
            trace.emit(
                StatusOverrides::new(),
                None,
                Step::new(
                    ActionTag::InvalidIndex,
                    format!("Index {} is outside the valid range [0, {}]", index, len),
                )
                .var("index", index as f64)
                .var("error", "invalid index"),
            );
        }
        ListPosition::Index(0) => trace.insert_head(value),
        ListPosition::Index(index) if index as usize == len => trace.insert_tail(value),
        ListPosition::Index(index) => trace.insert_middle(index as usize, value),
    }
    Ok(trace.finish())
}

/// Deletes the node at `position`.
pub fn delete(
    records: &[Record],
    position: ListPosition,
    tail_pointer: bool,
    config: &LayoutConfig,
) -> Result<Vec<Frame>, InputError> {
    let mut trace = ListTrace::new(records, tail_pointer, config)?;
    let len = trace.len();
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(ActionTag::Init, format!("Delete the node at {}", position_text(position))),
    );

    match position {
        ListPosition::Head | ListPosition::Tail if len == 0 => {
            trace.emit(
                StatusOverrides::new(),
                None,
                Step::new(ActionTag::Underflow, "Cannot delete: the list is empty")
                    .var("error", "empty list"),
            );
        }
        ListPosition::Head => trace.delete_head(),
        ListPosition::Tail => trace.delete_tail(),
        ListPosition::Index(index) if index < 0 || index as usize >= len => {
            trace.emit(
                StatusOverrides::new(),
                None,
                Step::new(
                    ActionTag::InvalidIndex,
                    format!(
                        "Index {} is outside the valid range [0, {}]",
                        index,
                        len as i64 - 1
                    ),
                )
                .var("index", index as f64)
                .var("error", "invalid index"),
            );
        }
        ListPosition::Index(0) => trace.delete_head(),
        ListPosition::Index(index) => trace.delete_middle(index as usize),
    }
    Ok(trace.finish())
}

/// Walks the chain looking for `value`.
pub fn search(records: &[Record], value: f64, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = ListTrace::new(records, false, config)?;
    trace.emit(
        StatusOverrides::new(),
        None,
        Step::new(ActionTag::Init, format!("Search for {}", format_number(value))).var("value", value),
    );

    let mut curr = trace.head.clone();
    let mut passed: Vec<String> = Vec::new();
    let mut index = 0usize;
    while let Some(id) = curr {
        let mut statuses = overrides(passed.iter().map(|p| (p.clone(), Status::Inactive)));
        statuses.insert(id.clone(), Status::Target);
        let current = trace.node(&id).and_then(|n| n.value);
        trace.emit(
            statuses.clone(),
            Some(("curr", id.as_str())),
            Step::new(
                ActionTag::Compare,
                format!("Compare {} with {}", value_text(current), format_number(value)),
            )
            .var("index", index),
        );
        if current == Some(value) {
            statuses.insert(id.clone(), Status::Complete);
            trace.emit(
                statuses,
                Some(("curr", id.as_str())),
                Step::new(
                    ActionTag::Found,
                    format!("Found {} at index {}", format_number(value), index),
                )
                .var("found", true)
                .var("index", index),
            );
            return Ok(trace.finish());
        }
        if let Some(next) = trace.next_of(&id) {
            trace.links.set(&id, &next, LinkStatus::Path, true);
        }
        curr = trace.next_of(&id);
        passed.push(id);
        index += 1;
    }

    let statuses = overrides(passed.into_iter().map(|p| (p, Status::Inactive)));
    trace.emit(
        statuses,
        None,
        Step::new(
            ActionTag::NotFound,
            format!("{} is not in the list", format_number(value)),
        )
        .var("found", false),
    );
    Ok(trace.finish())
}
