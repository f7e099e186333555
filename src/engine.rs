use crate::data::{GraphRecord, Input, Record};
use crate::error::InputError;
use crate::graph::{self, grid};
use crate::highlight::Operation;
use crate::layout::LayoutConfig;
use crate::linear::{ListPosition, array, linked_list, queue, stack};
use crate::model::Frame;
use crate::tree::{Bound, Extreme, TraversalOrder, bst, traversal};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ArrayOp {
    Insert { index: i64, value: f64 },
    Delete { index: i64 },
    Search { value: f64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ListOp {
    InsertHead { value: f64 },
    InsertTail { value: f64 },
    InsertAt { index: i64, value: f64 },
    DeleteHead,
    DeleteTail,
    DeleteAt { index: i64 },
    Search { value: f64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ListAction {
    #[serde(flatten)]
    pub op: ListOp,
    #[serde(default)]
    pub tail_pointer: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StackOp {
    Push { value: f64 },
    Pop,
    Peek,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueueOp {
    Enqueue { value: f64 },
    Dequeue,
    Peek,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BstOp {
    Insert { value: f64 },
    Delete { value: f64 },
    Search { value: f64 },
    Min,
    Max,
    Floor { value: f64 },
    Ceil { value: f64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GraphAction {
    pub op: Algorithm,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub directed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridAction {
    pub op: Algorithm,
    pub cols: usize,
    pub start: String,
    pub end: String,
}

/// What to run, tagged by the structure it runs on.
///
/// ```json
/// {"structure": "bst", "op": "insert", "value": 40}
/// {"structure": "linked_list", "op": "delete_at", "index": 2, "tail_pointer": true}
/// {"structure": "graph", "op": "bfs", "start": "A", "end": "C"}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum Action {
    Array(ArrayOp),
    LinkedList(ListAction),
    Stack(StackOp),
    Queue(QueueOp),
    Traversal { mode: TraversalOrder },
    Bst(BstOp),
    Graph(GraphAction),
    Grid(GridAction),
}

impl Action {
    /// The operation whose pseudocode this action animates.
    pub fn operation(&self) -> Operation {
        match self {
            Action::Array(op) => match op {
                ArrayOp::Insert { .. } => Operation::ArrayInsert,
                ArrayOp::Delete { .. } => Operation::ArrayDelete,
                ArrayOp::Search { .. } => Operation::ArraySearch,
            },
            Action::LinkedList(ListAction { op, tail_pointer }) => {
                let tail_pointer = *tail_pointer;
                match op {
                    ListOp::InsertHead { .. } => Operation::ListInsertHead { tail_pointer },
                    ListOp::InsertTail { .. } => Operation::ListInsertTail { tail_pointer },
                    ListOp::InsertAt { .. } => Operation::ListInsertAt { tail_pointer },
                    ListOp::DeleteHead => Operation::ListDeleteHead { tail_pointer },
                    ListOp::DeleteTail => Operation::ListDeleteTail { tail_pointer },
                    ListOp::DeleteAt { .. } => Operation::ListDeleteAt { tail_pointer },
                    ListOp::Search { .. } => Operation::ListSearch,
                }
            }
            Action::Stack(op) => match op {
                StackOp::Push { .. } => Operation::StackPush,
                StackOp::Pop => Operation::StackPop,
                StackOp::Peek => Operation::StackPeek,
            },
            Action::Queue(op) => match op {
                QueueOp::Enqueue { .. } => Operation::QueueEnqueue,
                QueueOp::Dequeue => Operation::QueueDequeue,
                QueueOp::Peek => Operation::QueuePeek,
            },
            Action::Traversal { mode } => match mode {
                TraversalOrder::Preorder => Operation::Preorder,
                TraversalOrder::Inorder => Operation::Inorder,
                TraversalOrder::Postorder => Operation::Postorder,
                TraversalOrder::LevelOrder => Operation::LevelOrder,
            },
            Action::Bst(op) => match op {
                BstOp::Insert { .. } => Operation::BstInsert,
                BstOp::Delete { .. } => Operation::BstDelete,
                BstOp::Search { .. } => Operation::BstSearch,
                BstOp::Min => Operation::BstMin,
                BstOp::Max => Operation::BstMax,
                BstOp::Floor { .. } => Operation::BstFloor,
                BstOp::Ceil { .. } => Operation::BstCeil,
            },
            Action::Graph(GraphAction { op, .. }) => match op {
                Algorithm::Bfs => Operation::GraphBfs,
                Algorithm::Dfs => Operation::GraphDfs,
            },
            Action::Grid(GridAction { op, .. }) => match op {
                Algorithm::Bfs => Operation::GridBfs,
                Algorithm::Dfs => Operation::GridDfs,
            },
        }
    }
}

pub struct EngineBuilder {
    layout: LayoutConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
        }
    }

    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Draw array slots as bars that share `group`'s scale.
    pub fn with_scale_group(mut self, group: &str) -> Self {
        self.layout.scale_group = Some(group.to_string());
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            layout: self.layout,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs actions against inputs and returns their frames.
///
/// The engine holds nothing but layout settings; every call starts from a
/// fresh copy of the input, so identical calls return identical frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    layout: LayoutConfig,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Like [`Engine::try_generate`], but malformed input yields no frames
    /// and a warning in the log.
    pub fn generate(&self, input: &Input, action: &Action) -> Vec<Frame> {
        let operation = action.operation();
        match self.try_generate(input, action) {
            Ok(frames) => {
                log::debug!("Traced {} in {} frames", operation, frames.len());
                frames
            }
            Err(e) => {
                log::warn!("Cannot trace {}: {}", operation, e);
                Vec::new()
            }
        }
    }

    pub fn try_generate(&self, input: &Input, action: &Action) -> Result<Vec<Frame>, InputError> {
        let config = &self.layout;
        match action {
            Action::Array(op) => {
                let records = records(input, action)?;
                Ok(match *op {
                    ArrayOp::Insert { index, value } => array::insert(records, index, value, config),
                    ArrayOp::Delete { index } => array::delete(records, index, config),
                    ArrayOp::Search { value } => array::search(records, value, config),
                })
            }
            Action::LinkedList(ListAction { op, tail_pointer }) => {
                let records = records(input, action)?;
                let tail_pointer = *tail_pointer;
                match *op {
                    ListOp::InsertHead { value } => {
                        linked_list::insert(records, ListPosition::Head, value, tail_pointer, config)
                    }
                    ListOp::InsertTail { value } => {
                        linked_list::insert(records, ListPosition::Tail, value, tail_pointer, config)
                    }
                    ListOp::InsertAt { index, value } => {
                        linked_list::insert(records, ListPosition::Index(index), value, tail_pointer, config)
                    }
                    ListOp::DeleteHead => linked_list::delete(records, ListPosition::Head, tail_pointer, config),
                    ListOp::DeleteTail => linked_list::delete(records, ListPosition::Tail, tail_pointer, config),
                    ListOp::DeleteAt { index } => {
                        linked_list::delete(records, ListPosition::Index(index), tail_pointer, config)
                    }
                    ListOp::Search { value } => linked_list::search(records, value, config),
                }
            }
            Action::Stack(op) => {
                let records = records(input, action)?;
                match *op {
                    StackOp::Push { value } => stack::push(records, value, config),
                    StackOp::Pop => stack::pop(records, config),
                    StackOp::Peek => stack::peek(records, config),
                }
            }
            Action::Queue(op) => {
                let records = records(input, action)?;
                match *op {
                    QueueOp::Enqueue { value } => queue::enqueue(records, value, config),
                    QueueOp::Dequeue => queue::dequeue(records, config),
                    QueueOp::Peek => queue::peek(records, config),
                }
            }
            Action::Traversal { mode } => traversal::traverse(records(input, action)?, *mode, config),
            Action::Bst(op) => {
                let records = records(input, action)?;
                match *op {
                    BstOp::Insert { value } => bst::insert(records, value, config),
                    BstOp::Delete { value } => bst::delete(records, value, config),
                    BstOp::Search { value } => bst::search(records, value, config),
                    BstOp::Min => bst::extreme(records, Extreme::Min, config),
                    BstOp::Max => bst::extreme(records, Extreme::Max, config),
                    BstOp::Floor { value } => bst::bound(records, value, Bound::Floor, config),
                    BstOp::Ceil { value } => bst::bound(records, value, Bound::Ceil, config),
                }
            }
            Action::Graph(GraphAction {
                op,
                start,
                end,
                directed,
            }) => {
                let graph_record = graph_input(input, action)?;
                match op {
                    Algorithm::Bfs => graph::bfs(graph_record, start, end, *directed, config),
                    Algorithm::Dfs => graph::dfs(graph_record, start, end, *directed, config),
                }
            }
            Action::Grid(GridAction { op, cols, start, end }) => {
                let cells = records(input, action)?;
                match op {
                    Algorithm::Bfs => grid::bfs(cells, *cols, start, end, config),
                    Algorithm::Dfs => grid::dfs(cells, *cols, start, end, config),
                }
            }
        }
    }
}

fn records<'i>(input: &'i Input, action: &Action) -> Result<&'i [Record], InputError> {
    input.records().ok_or_else(|| InputError::ShapeMismatch {
        action: action.operation().to_string(),
        expected: "flat record",
        found: input.kind(),
    })
}

fn graph_input<'i>(input: &'i Input, action: &Action) -> Result<&'i GraphRecord, InputError> {
    input.graph().ok_or_else(|| InputError::ShapeMismatch {
        action: action.operation().to_string(),
        expected: "graph",
        found: input.kind(),
    })
}

/// Produces the frames of `action` on `input` with the default layout.
///
/// Never fails: malformed input gives an empty vector (see
/// [`Engine::try_generate`] for the reason).
pub fn generate_frames(input: &Input, action: &Action) -> Vec<Frame> {
    Engine::default().generate(input, action)
}
