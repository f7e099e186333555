use super::logic::{LogicTree, NodeIndex, Side, TreeView};
use crate::data::Record;
use crate::error::InputError;
use crate::frame::{FrameSink, LinkTracker, Step, StatusOverrides};
use crate::highlight::ActionTag;
use crate::layout::LayoutConfig;
use crate::model::{Frame, LinkStatus, Status, format_number};

/// Which bound a floor/ceil query looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Floor,
    Ceil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

struct BstTrace<'a> {
    tree: LogicTree,
    /// Nodes on the way from the root to the current node.
    path: Vec<NodeIndex>,
    sink: FrameSink<'a>,
    links: LinkTracker,
}

impl<'a> BstTrace<'a> {
    fn new(records: &[Record], config: &'a LayoutConfig) -> Result<Self, InputError> {
        Ok(Self {
            tree: LogicTree::bst_from_records(records)?,
            path: Vec::new(),
            sink: FrameSink::new(config),
            links: LinkTracker::new(),
        })
    }

    fn id(&self, index: NodeIndex) -> String {
        self.tree.id(index).to_string()
    }

    fn value_text(&self, index: NodeIndex) -> String {
        format_number(self.tree.value(index))
    }

    /// Path nodes `prepare`, `current` on top as `target`, `extra` last.
    fn statuses(&self, current: Option<NodeIndex>, extra: &[(NodeIndex, Status)]) -> StatusOverrides {
        let mut statuses = StatusOverrides::new();
        for index in &self.path {
            statuses.insert(self.id(*index), Status::Prepare);
        }
        if let Some(index) = current {
            statuses.insert(self.id(index), Status::Target);
        }
        for (index, status) in extra {
            statuses.insert(self.id(*index), status.clone());
        }
        statuses
    }

    fn emit(&mut self, statuses: StatusOverrides, step: Step) {
        let step = step.var("size", self.tree.len());
        let view = TreeView::new(&self.tree);
        self.sink.emit(&view, &statuses, &self.links, step);
    }

    /// Moves from `from` to its child on `side` and marks the edge.
    fn step_down(&mut self, from: NodeIndex, to: NodeIndex) {
        let (u, v) = (self.id(from), self.id(to));
        self.links.set(&u, &v, LinkStatus::Path, true);
        self.path.push(from);
    }

    fn mark_path_complete(&mut self, last: NodeIndex) -> StatusOverrides {
        let mut chain = self.path.clone();
        chain.push(last);
        for pair in chain.windows(2) {
            let (u, v) = (self.id(pair[0]), self.id(pair[1]));
            self.links.set(&u, &v, LinkStatus::Complete, true);
        }
        chain
            .into_iter()
            .map(|index| (self.id(index), Status::Complete))
            .collect()
    }

    fn finish(self) -> Vec<Frame> {
        self.sink.finish()
    }
}

fn side_text(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}

/// Inserts `value`, counting duplicates on the existing node.
pub fn insert(records: &[Record], value: f64, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = BstTrace::new(records, config)?;
    let shown = format_number(value);
    trace.emit(
        StatusOverrides::new(),
        Step::new(ActionTag::Init, format!("Insert {}", shown)).var("value", value),
    );

    let Some(mut curr) = trace.tree.root() else {
        let id = trace.tree.fresh_id("node");
        let root = trace.tree.add_root(id, value);
        let statuses = trace.statuses(Some(root), &[]);
        trace.emit(
            statuses,
            Step::new(ActionTag::PlaceRoot, format!("The tree is empty: {} becomes the root", shown)),
        );
        let statuses = trace.mark_path_complete(root);
        trace.emit(statuses, Step::new(ActionTag::Complete, format!("Inserted {}", shown)));
        return Ok(trace.finish());
    };

    let last = loop {
        let current = trace.tree.value(curr);
        let statuses = trace.statuses(Some(curr), &[]);
        trace.emit(
            statuses,
            Step::new(
                ActionTag::Compare,
                format!("Compare {} with {}", shown, format_number(current)),
            )
            .var("curr", current),
        );

        if value == current {
            trace.tree.node_mut(curr).count += 1;
            let count = trace.tree.node(curr).count;
            let statuses = trace.statuses(Some(curr), &[]);
            trace.emit(
                statuses,
                Step::new(
                    ActionTag::Equal,
                    format!("{} is already in the tree: count = {}", shown, count),
                )
                .var("count", count),
            );
            break curr;
        }

        let side = if value < current { Side::Left } else { Side::Right };
        let relation = if side == Side::Left { "<" } else { ">" };
        match trace.tree.node(curr).child(side) {
            Some(next) => {
                trace.step_down(curr, next);
                let statuses = trace.statuses(Some(next), &[]);
                trace.emit(
                    statuses,
                    Step::new(
                        ActionTag::Descend,
                        format!(
                            "{} {} {}: go {}",
                            shown,
                            relation,
                            format_number(current),
                            side_text(side)
                        ),
                    )
                    .var("curr", trace.tree.value(next)),
                );
                curr = next;
            }
            None => {
                let id = trace.tree.fresh_id("node");
                let placed = trace.tree.add_child(curr, side, id, value);
                trace.step_down(curr, placed);
                let statuses = trace.statuses(Some(placed), &[]);
                trace.emit(
                    statuses,
                    Step::new(
                        ActionTag::Place,
                        format!(
                            "{} {} {} and the {} child is empty: place {} there",
                            shown,
                            relation,
                            format_number(current),
                            side_text(side),
                            shown
                        ),
                    ),
                );
                break placed;
            }
        }
    };

    let statuses = trace.mark_path_complete(last);
    trace.emit(statuses, Step::new(ActionTag::Complete, format!("Inserted {}", shown)));
    Ok(trace.finish())
}

/// Compare/descend loop shared by search and delete. Returns the matching
/// node, or `None` after reaching a missing child.
fn locate(trace: &mut BstTrace, value: f64) -> Option<NodeIndex> {
    let shown = format_number(value);
    let mut curr = trace.tree.root()?;
    loop {
        let current = trace.tree.value(curr);
        let statuses = trace.statuses(Some(curr), &[]);
        trace.emit(
            statuses,
            Step::new(
                ActionTag::Compare,
                format!("Compare {} with {}", shown, format_number(current)),
            )
            .var("curr", current),
        );
        if value == current {
            return Some(curr);
        }
        let side = if value < current { Side::Left } else { Side::Right };
        let next = trace.tree.node(curr).child(side)?;
        trace.step_down(curr, next);
        let statuses = trace.statuses(Some(next), &[]);
        trace.emit(
            statuses,
            Step::new(ActionTag::Descend, format!("Go {}", side_text(side))).var("curr", trace.tree.value(next)),
        );
        curr = next;
    }
}

pub fn search(records: &[Record], value: f64, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = BstTrace::new(records, config)?;
    let shown = format_number(value);
    trace.emit(
        StatusOverrides::new(),
        Step::new(ActionTag::Init, format!("Search for {}", shown)).var("value", value),
    );

    match locate(&mut trace, value) {
        Some(found) => {
            let statuses = trace.mark_path_complete(found);
            trace.emit(
                statuses,
                Step::new(ActionTag::Found, format!("Found {}", shown)).var("found", true),
            );
        }
        None => {
            let statuses = trace.statuses(None, &[]);
            trace.emit(
                statuses,
                Step::new(ActionTag::NotFound, format!("{} is not in the tree", shown)).var("found", false),
            );
        }
    }
    Ok(trace.finish())
}

/// Deletes one occurrence of `value`.
pub fn delete(records: &[Record], value: f64, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = BstTrace::new(records, config)?;
    let shown = format_number(value);
    trace.emit(
        StatusOverrides::new(),
        Step::new(ActionTag::Init, format!("Delete {}", shown)).var("value", value),
    );

    let Some(node) = locate(&mut trace, value) else {
        let statuses = trace.statuses(None, &[]);
        trace.emit(
            statuses,
            Step::new(ActionTag::NotFound, format!("{} is not in the tree: nothing to delete", shown))
                .var("found", false),
        );
        return Ok(trace.finish());
    };

    let count = trace.tree.node(node).count;
    if count > 1 {
        trace.tree.node_mut(node).count -= 1;
        let statuses = trace.statuses(Some(node), &[]);
        trace.emit(
            statuses,
            Step::new(
                ActionTag::Decrement,
                format!("{} appears {} times: count = {}", shown, count, count - 1),
            )
            .var("count", count - 1),
        );
    } else {
        let (left, right) = {
            let n = trace.tree.node(node);
            (n.left, n.right)
        };
        if let (Some(_), Some(right)) = (left, right) {
            let successor = find_successor(&mut trace, node, right);
            let copied = trace.tree.node(successor).clone();
            {
                let target = trace.tree.node_mut(node);
                target.value = copied.value;
                target.count = copied.count;
            }
            let statuses = trace.statuses(Some(node), &[(successor, Status::Target)]);
            trace.emit(
                statuses,
                Step::new(
                    ActionTag::CopySuccessor,
                    format!("Copy the successor {} into the deleted node", format_number(copied.value)),
                ),
            );
            unlink(&mut trace, successor);
        } else {
            unlink(&mut trace, node);
        }
    }

    trace.path.clear();
    trace.emit(
        StatusOverrides::new(),
        Step::new(ActionTag::Complete, format!("Deleted {}", shown)),
    );
    Ok(trace.finish())
}

/// Leftmost node of the right subtree, one frame per step.
fn find_successor(trace: &mut BstTrace, node: NodeIndex, right: NodeIndex) -> NodeIndex {
    trace.step_down(node, right);
    let mut curr = right;
    loop {
        let statuses = trace.statuses(Some(curr), &[(node, Status::Target)]);
        trace.emit(
            statuses,
            Step::new(
                ActionTag::SuccessorStep,
                format!("Successor candidate: {}", trace.value_text(curr)),
            )
            .var("succ", trace.tree.value(curr)),
        );
        match trace.tree.node(curr).left {
            Some(left) => {
                trace.step_down(curr, left);
                curr = left;
            }
            None => return curr,
        }
    }
}

/// Removes a node with at most one child.
fn unlink(trace: &mut BstTrace, index: NodeIndex) {
    let node = trace.tree.node(index).clone();
    match node.left.or(node.right) {
        None => {
            let parent = trace.tree.parent_of(index);
            match parent {
                Some((parent, side)) => {
                    trace.tree.attach(parent, side, None);
                    let (u, v) = (trace.id(parent), node.id.clone());
                    trace.links.unset(&u, &v, true);
                }
                None => trace.tree.set_root(None),
            }
            trace.path.retain(|p| *p != index);
            let statuses = trace.statuses(parent.map(|(p, _)| p), &[]);
            trace.emit(
                statuses,
                Step::new(ActionTag::Remove, format!("{} is a leaf: remove it", format_number(node.value))),
            );
        }
        Some(child) => {
            let replacement = trace.tree.node(child).clone();
            {
                let target = trace.tree.node_mut(index);
                target.value = replacement.value;
                target.count = replacement.count;
            }
            let statuses = trace.statuses(Some(index), &[(child, Status::Inactive)]);
            trace.emit(
                statuses,
                Step::new(
                    ActionTag::Replace,
                    format!(
                        "{} has one child: copy {} up",
                        format_number(node.value),
                        format_number(replacement.value)
                    ),
                ),
            );

            {
                let target = trace.tree.node_mut(index);
                target.left = replacement.left;
                target.right = replacement.right;
            }
            let statuses = trace.statuses(Some(index), &[]);
            trace.emit(
                statuses,
                Step::new(
                    ActionTag::RemoveChild,
                    format!("Adopt the children of {} and drop it", format_number(replacement.value)),
                ),
            );
        }
    }
}

/// Walks to the leftmost or rightmost node. An empty tree has no frames.
pub fn extreme(records: &[Record], which: Extreme, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = BstTrace::new(records, config)?;
    let (name, side) = match which {
        Extreme::Min => ("min", Side::Left),
        Extreme::Max => ("max", Side::Right),
    };
    let Some(mut curr) = trace.tree.root() else {
        return Err(InputError::EmptyStructure(name));
    };

    let statuses = trace.statuses(Some(curr), &[]);
    trace.emit(
        statuses,
        Step::new(ActionTag::Init, format!("Find the {}: start at the root", name)).var("curr", trace.tree.value(curr)),
    );
    while let Some(next) = trace.tree.node(curr).child(side) {
        trace.step_down(curr, next);
        let statuses = trace.statuses(Some(next), &[]);
        trace.emit(
            statuses,
            Step::new(ActionTag::Descend, format!("Go {} to {}", side_text(side), trace.value_text(next)))
                .var("curr", trace.tree.value(next)),
        );
        curr = next;
    }

    let result = trace.tree.value(curr);
    let statuses = trace.mark_path_complete(curr);
    trace.emit(
        statuses,
        Step::new(
            ActionTag::Complete,
            format!("The {} is {}", name, format_number(result)),
        )
        .var("result", result),
    );
    Ok(trace.finish())
}

/// Floor: largest value `<= value`. Ceil: smallest value `>= value`.
pub fn bound(records: &[Record], value: f64, which: Bound, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let mut trace = BstTrace::new(records, config)?;
    let shown = format_number(value);
    let name = match which {
        Bound::Floor => "floor",
        Bound::Ceil => "ceil",
    };
    trace.emit(
        StatusOverrides::new(),
        Step::new(ActionTag::Init, format!("Find the {} of {}: best = null", name, shown))
            .var("value", value)
            .var("best", None::<f64>),
    );

    let mut best: Option<NodeIndex> = None;
    let mut curr = trace.tree.root();
    while let Some(index) = curr {
        let current = trace.tree.value(index);
        let extra: Vec<(NodeIndex, Status)> = best.map(|b| (b, Status::Complete)).into_iter().collect();
        let statuses = trace.statuses(Some(index), &extra);
        trace.emit(
            statuses,
            Step::new(ActionTag::Compare, format!("Compare {} with {}", shown, format_number(current)))
                .var("curr", current)
                .var("best", best.map(|b| trace.tree.value(b))),
        );

        if current == value {
            let statuses = trace.mark_path_complete(index);
            trace.emit(
                statuses,
                Step::new(ActionTag::Found, format!("{} is in the tree, so it is its own {}", shown, name))
                    .var("found", true)
                    .var("result", current),
            );
            return Ok(trace.finish());
        }

        // Floor keeps candidates below the target, ceil above it.
        let (candidate, side) = match which {
            Bound::Floor if value < current => (false, Side::Left),
            Bound::Floor => (true, Side::Right),
            Bound::Ceil if value > current => (false, Side::Right),
            Bound::Ceil => (true, Side::Left),
        };
        if candidate {
            best = Some(index);
            let statuses = trace.statuses(None, &[(index, Status::Complete)]);
            trace.emit(
                statuses,
                Step::new(ActionTag::Update, format!("best = {}", format_number(current))).var("best", current),
            );
        }

        curr = trace.tree.node(index).child(side);
        if let Some(next) = curr {
            trace.step_down(index, next);
            let extra: Vec<(NodeIndex, Status)> = best.map(|b| (b, Status::Complete)).into_iter().collect();
            let statuses = trace.statuses(Some(next), &extra);
            trace.emit(
                statuses,
                Step::new(ActionTag::Descend, format!("Go {}", side_text(side))).var("curr", trace.tree.value(next)),
            );
        }
    }

    match best {
        Some(index) => {
            let result = trace.tree.value(index);
            let statuses = trace.statuses(None, &[(index, Status::Complete)]);
            trace.emit(
                statuses,
                Step::new(ActionTag::Complete, format!("The {} of {} is {}", name, shown, format_number(result)))
                    .var("found", true)
                    .var("result", result),
            );
        }
        None => {
            trace.emit(
                StatusOverrides::new(),
                Step::new(ActionTag::NotFound, format!("{} has no {} in the tree", shown, name))
                    .var("found", false)
                    .var("result", None::<f64>),
            );
        }
    }
    Ok(trace.finish())
}
