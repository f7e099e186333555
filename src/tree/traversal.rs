use super::logic::{LogicTree, NodeIndex, Side, TreeView};
use crate::data::Record;
use crate::error::InputError;
use crate::frame::{FrameSink, LinkTracker, Step, StatusOverrides, list_text};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Frame, LinkStatus, Status, format_number};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    Preorder,
    Inorder,
    Postorder,
    LevelOrder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Postorder => "postorder",
            TraversalOrder::LevelOrder => "level order",
        };
        write!(f, "{}", name)
    }
}

struct TraversalTrace<'a> {
    tree: LogicTree,
    order: TraversalOrder,
    /// Call stack for the recursive orders, queue for level order.
    pending: Vec<NodeIndex>,
    visited: Vec<NodeIndex>,
    sink: FrameSink<'a>,
    links: LinkTracker,
}

impl<'a> TraversalTrace<'a> {
    fn aux_label(&self) -> &'static str {
        match self.order {
            TraversalOrder::LevelOrder => "queue",
            _ => "call stack",
        }
    }

    fn output(&self) -> String {
        list_text(self.visited.iter().map(|i| format_number(self.tree.value(*i))))
    }

    fn statuses(&self, current: Option<NodeIndex>) -> StatusOverrides {
        let mut statuses = StatusOverrides::new();
        for index in &self.pending {
            statuses.insert(self.tree.id(*index).to_string(), Status::Prepare);
        }
        for index in &self.visited {
            statuses.insert(self.tree.id(*index).to_string(), Status::Complete);
        }
        if let Some(index) = current {
            statuses.insert(self.tree.id(index).to_string(), Status::Target);
        }
        statuses
    }

    fn emit(&mut self, current: Option<NodeIndex>, null_child: Option<(Option<NodeIndex>, Side)>, step: Step) {
        let statuses = self.statuses(current);
        let label = self.aux_label();
        let pending = list_text(self.pending.iter().map(|i| format_number(self.tree.value(*i))));
        let step = step.var("output", self.output()).var(
            match self.order {
                TraversalOrder::LevelOrder => "queue",
                _ => "stack",
            },
            pending,
        );
        let mut view = TreeView::new(&self.tree).with_aux(label, &self.pending);
        if let Some((parent, side)) = null_child {
            view = view.with_null_child(parent, side);
        }
        self.sink.emit(&view, &statuses, &self.links, step);
    }

    fn recurse(&mut self, index: NodeIndex) {
        let order = self.order;
        let value = format_number(self.tree.value(index));
        self.pending.push(index);
        self.emit(
            Some(index),
            None,
            Step::new(ActionTag::Call, format!("Call {}({})", order, value)),
        );

        if order == TraversalOrder::Preorder {
            self.visit(index);
        }
        self.child(index, Side::Left);
        if order == TraversalOrder::Inorder {
            self.visit(index);
        }
        self.child(index, Side::Right);
        if order == TraversalOrder::Postorder {
            self.visit(index);
        }

        self.pending.pop();
        if let Some((parent, _)) = self.tree.parent_of(index) {
            let (parent_id, id) = (self.tree.id(parent).to_string(), self.tree.id(index).to_string());
            self.links.set(&parent_id, &id, LinkStatus::Visited, true);
        }
        self.emit(
            self.pending.last().copied(),
            None,
            Step::new(ActionTag::Return, format!("Return from {}({})", order, value)),
        );
    }

    fn child(&mut self, parent: NodeIndex, side: Side) {
        match self.tree.node(parent).child(side) {
            Some(child) => {
                let (parent_id, child_id) = (self.tree.id(parent).to_string(), self.tree.id(child).to_string());
                self.links.set(&parent_id, &child_id, LinkStatus::Path, true);
                self.recurse(child);
            }
            None => {
                let which = if side == Side::Left { "left" } else { "right" };
                let description = format!(
                    "The {} child of {} is null: return",
                    which,
                    format_number(self.tree.value(parent))
                );
                self.emit(
                    Some(parent),
                    Some((Some(parent), side)),
                    Step::new(ActionTag::NullChild, description),
                );
            }
        }
    }

    fn visit(&mut self, index: NodeIndex) {
        self.visited.push(index);
        let value = format_number(self.tree.value(index));
        self.emit(
            Some(index),
            None,
            Step::new(ActionTag::Visit, format!("Visit {}", value)).var("visited", self.tree.value(index)),
        );
    }

    fn level_order(&mut self) {
        self.pending.extend(self.tree.root());
        let description = match self.tree.root() {
            Some(root) => format!("queue = [{}]", format_number(self.tree.value(root))),
            None => "The tree is empty: queue = []".to_string(),
        };
        self.emit(None, None, Step::new(ActionTag::EnqueueRoot, description));

        while !self.pending.is_empty() {
            let index = self.pending.remove(0);
            let value = format_number(self.tree.value(index));
            self.emit(Some(index), None, Step::new(ActionTag::Dequeue, format!("node = {}", value)));
            self.visit(index);

            let node = self.tree.node(index).clone();
            let children: Vec<NodeIndex> = [node.left, node.right].into_iter().flatten().collect();
            if children.is_empty() {
                continue;
            }
            for child in &children {
                let child_id = self.tree.id(*child).to_string();
                self.links.set(&node.id, &child_id, LinkStatus::Path, true);
            }
            self.pending.extend(children.iter().copied());
            let names = list_text(children.iter().map(|c| format_number(self.tree.value(*c))));
            self.emit(
                Some(index),
                None,
                Step::new(ActionTag::EnqueueChildren, format!("Enqueue the children of {}: {}", value, names)),
            );
        }
    }

    fn run(&mut self) {
        match (self.order, self.tree.root()) {
            (TraversalOrder::LevelOrder, _) => self.level_order(),
            (_, Some(root)) => self.recurse(root),
            (order, None) => {
                self.emit(
                    None,
                    Some((None, Side::Left)),
                    Step::new(ActionTag::NullChild, format!("The tree is empty: {} returns at once", order)),
                );
            }
        }
        let output = self.output();
        self.emit(
            None,
            None,
            Step::new(ActionTag::Done, format!("{} traversal finished: {}", self.order, output)),
        );
    }
}

/// Traces `order` over a heap-indexed level-order array.
pub fn traverse(records: &[Record], order: TraversalOrder, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = TraversalTrace {
        tree: LogicTree::from_level_order(records)?,
        order,
        pending: Vec::new(),
        visited: Vec::new(),
        sink: FrameSink::new(config),
        links: LinkTracker::new(),
    };
    trace.run();
    Ok(trace.sink.finish())
}
