//! Pseudocode listings and tag-to-line mappings for the code-highlight panel.
//!
//! Every traceable operation is a variant of [`Operation`]. A frame's
//! [`ActionTag`] is resolved against the operation that produced it through
//! [`Operation::code_lines`], so the engine's vocabulary and the listings live
//! in one place and are checked by the compiler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which micro-step of an operation a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTag {
    // Shared
    Init,
    Complete,
    InvalidIndex,
    Underflow,
    NotFound,
    Found,
    Compare,
    // Array
    Grow,
    PrepareShift,
    Shift,
    Assign,
    Select,
    RemoveLast,
    // Linked list
    CreateNode,
    Traverse,
    Relink,
    UpdateHead,
    UpdateTail,
    Clear,
    Remove,
    // Stack and queue
    Prepare,
    SlotUpdate,
    // Traversal
    Call,
    Visit,
    NullChild,
    Return,
    EnqueueRoot,
    Dequeue,
    EnqueueChildren,
    Done,
    // Binary search tree
    PlaceRoot,
    Equal,
    Descend,
    Place,
    Decrement,
    Replace,
    RemoveChild,
    SuccessorStep,
    CopySuccessor,
    Update,
    // Graph and grid
    CheckEnd,
    Explore,
    VisitNeighbors,
    PathFound,
    ExpandLayer,
    Pop,
    PushNeighbors,
}

impl ActionTag {
    /// The wire spelling, identical to the serde name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTag::Init => "init",
            ActionTag::Complete => "complete",
            ActionTag::InvalidIndex => "invalid_index",
            ActionTag::Underflow => "underflow",
            ActionTag::NotFound => "not_found",
            ActionTag::Found => "found",
            ActionTag::Compare => "compare",
            ActionTag::Grow => "grow",
            ActionTag::PrepareShift => "prepare_shift",
            ActionTag::Shift => "shift",
            ActionTag::Assign => "assign",
            ActionTag::Select => "select",
            ActionTag::RemoveLast => "remove_last",
            ActionTag::CreateNode => "create_node",
            ActionTag::Traverse => "traverse",
            ActionTag::Relink => "relink",
            ActionTag::UpdateHead => "update_head",
            ActionTag::UpdateTail => "update_tail",
            ActionTag::Clear => "clear",
            ActionTag::Remove => "remove",
            ActionTag::Prepare => "prepare",
            ActionTag::SlotUpdate => "slot_update",
            ActionTag::Call => "call",
            ActionTag::Visit => "visit",
            ActionTag::NullChild => "null_child",
            ActionTag::Return => "return",
            ActionTag::EnqueueRoot => "enqueue_root",
            ActionTag::Dequeue => "dequeue",
            ActionTag::EnqueueChildren => "enqueue_children",
            ActionTag::Done => "done",
            ActionTag::PlaceRoot => "place_root",
            ActionTag::Equal => "equal",
            ActionTag::Descend => "descend",
            ActionTag::Place => "place",
            ActionTag::Decrement => "decrement",
            ActionTag::Replace => "replace",
            ActionTag::RemoveChild => "remove_child",
            ActionTag::SuccessorStep => "successor_step",
            ActionTag::CopySuccessor => "copy_successor",
            ActionTag::Update => "update",
            ActionTag::CheckEnd => "check_end",
            ActionTag::Explore => "explore",
            ActionTag::VisitNeighbors => "visit_neighbors",
            ActionTag::PathFound => "path_found",
            ActionTag::ExpandLayer => "expand_layer",
            ActionTag::Pop => "pop",
            ActionTag::PushNeighbors => "push_neighbors",
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every operation the engine can trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ArrayInsert,
    ArrayDelete,
    ArraySearch,
    ListInsertHead { tail_pointer: bool },
    ListInsertTail { tail_pointer: bool },
    ListInsertAt { tail_pointer: bool },
    ListDeleteHead { tail_pointer: bool },
    ListDeleteTail { tail_pointer: bool },
    ListDeleteAt { tail_pointer: bool },
    ListSearch,
    StackPush,
    StackPop,
    StackPeek,
    QueueEnqueue,
    QueueDequeue,
    QueuePeek,
    Preorder,
    Inorder,
    Postorder,
    LevelOrder,
    BstInsert,
    BstDelete,
    BstSearch,
    BstMin,
    BstMax,
    BstFloor,
    BstCeil,
    GraphBfs,
    GraphDfs,
    GridBfs,
    GridDfs,
}

impl Operation {
    /// Every operation, including both linked-list pointer variants.
    pub fn all() -> Vec<Operation> {
        use Operation::*;
        let mut ops = vec![ArrayInsert, ArrayDelete, ArraySearch, ListSearch];
        for tail_pointer in [false, true] {
            ops.extend([
                ListInsertHead { tail_pointer },
                ListInsertTail { tail_pointer },
                ListInsertAt { tail_pointer },
                ListDeleteHead { tail_pointer },
                ListDeleteTail { tail_pointer },
                ListDeleteAt { tail_pointer },
            ]);
        }
        ops.extend([
            StackPush,
            StackPop,
            StackPeek,
            QueueEnqueue,
            QueueDequeue,
            QueuePeek,
            Preorder,
            Inorder,
            Postorder,
            LevelOrder,
            BstInsert,
            BstDelete,
            BstSearch,
            BstMin,
            BstMax,
            BstFloor,
            BstCeil,
            GraphBfs,
            GraphDfs,
            GridBfs,
            GridDfs,
        ]);
        ops
    }

    /// The pseudocode shown next to the animation. Line numbers are 1-based.
    pub fn pseudocode(&self) -> &'static [&'static str] {
        use Operation::*;
        match self {
            ArrayInsert => &[
                "insert(arr, index, value):",
                "  if index < 0 or index > arr.length: error",
                "  arr.length += 1",
                "  for i = arr.length - 1 down to index + 1:",
                "    arr[i] = arr[i - 1]",
                "  arr[index] = value",
                "  return",
            ],
            ArrayDelete => &[
                "delete(arr, index):",
                "  if index < 0 or index >= arr.length: error",
                "  removed = arr[index]",
                "  for i = index to arr.length - 2:",
                "    arr[i] = arr[i + 1]",
                "  arr.length -= 1",
                "  return removed",
            ],
            ArraySearch => &[
                "search(arr, value):",
                "  for i = 0 to arr.length - 1:",
                "    if arr[i] == value:",
                "      return i",
                "  return -1",
            ],
            ListInsertHead { tail_pointer: false } => &[
                "insertHead(list, value):",
                "  node = new Node(value)",
                "  node.next = list.head",
                "  list.head = node",
                "  return",
            ],
            ListInsertHead { tail_pointer: true } => &[
                "insertHead(list, value):",
                "  node = new Node(value)",
                "  node.next = list.head",
                "  list.head = node",
                "  if list.tail == null: list.tail = node",
                "  return",
            ],
            ListInsertTail { tail_pointer: false } => &[
                "insertTail(list, value):",
                "  node = new Node(value)",
                "  if list.head == null: list.head = node; return",
                "  curr = list.head",
                "  while curr.next != null:",
                "    curr = curr.next",
                "  curr.next = node",
                "  return",
            ],
            ListInsertTail { tail_pointer: true } => &[
                "insertTail(list, value):",
                "  node = new Node(value)",
                "  if list.head == null: list.head = list.tail = node; return",
                "  list.tail.next = node",
                "  list.tail = node",
                "  return",
            ],
            ListInsertAt { tail_pointer: false } => &[
                "insertAt(list, index, value):",
                "  if index < 0 or index > list.length: error",
                "  if index == 0: return insertHead(list, value)",
                "  if index == list.length: return insertTail(list, value)",
                "  prev = list.head",
                "  for i = 0 to index - 2: prev = prev.next",
                "  node = new Node(value)",
                "  node.next = prev.next",
                "  prev.next = node",
                "  return",
            ],
            ListInsertAt { tail_pointer: true } => &[
                "insertAt(list, index, value):",
                "  if index < 0 or index > list.length: error",
                "  if index == 0: return insertHead(list, value)",
                "  if index == list.length: return insertTail(list, value)",
                "  prev = list.head",
                "  for i = 0 to index - 2: prev = prev.next",
                "  node = new Node(value)",
                "  node.next = prev.next",
                "  prev.next = node",
                "  return",
            ],
            ListDeleteHead { tail_pointer: false } => &[
                "deleteHead(list):",
                "  if list.head == null: error",
                "  removed = list.head",
                "  list.head = list.head.next",
                "  return removed",
            ],
            ListDeleteHead { tail_pointer: true } => &[
                "deleteHead(list):",
                "  if list.head == null: error",
                "  removed = list.head",
                "  list.head = list.head.next",
                "  if list.head == null: list.tail = null",
                "  return removed",
            ],
            ListDeleteTail { tail_pointer: false } => &[
                "deleteTail(list):",
                "  if list.head == null: error",
                "  if list.head.next == null: list.head = null; return",
                "  prev = list.head",
                "  while prev.next.next != null:",
                "    prev = prev.next",
                "  removed = prev.next",
                "  prev.next = null",
                "  return removed",
            ],
            ListDeleteTail { tail_pointer: true } => &[
                "deleteTail(list):",
                "  if list.head == null: error",
                "  if list.head == list.tail: list.head = list.tail = null; return",
                "  prev = list.head",
                "  while prev.next != list.tail:",
                "    prev = prev.next",
                "  removed = list.tail",
                "  prev.next = null",
                "  list.tail = prev",
                "  return removed",
            ],
            ListDeleteAt { tail_pointer: false } => &[
                "deleteAt(list, index):",
                "  if index < 0 or index >= list.length: error",
                "  if index == 0: return deleteHead(list)",
                "  prev = list.head",
                "  for i = 0 to index - 2: prev = prev.next",
                "  removed = prev.next",
                "  prev.next = removed.next",
                "  return removed",
            ],
            ListDeleteAt { tail_pointer: true } => &[
                "deleteAt(list, index):",
                "  if index < 0 or index >= list.length: error",
                "  if index == 0: return deleteHead(list)",
                "  prev = list.head",
                "  for i = 0 to index - 2: prev = prev.next",
                "  removed = prev.next",
                "  prev.next = removed.next",
                "  if removed == list.tail: list.tail = prev",
                "  return removed",
            ],
            ListSearch => &[
                "search(list, value):",
                "  curr = list.head",
                "  while curr != null:",
                "    if curr.value == value: return curr",
                "    curr = curr.next",
                "  return null",
            ],
            StackPush => &[
                "push(stack, value):",
                "  stack.top += 1",
                "  stack[stack.top] = value",
                "  return",
            ],
            StackPop => &[
                "pop(stack):",
                "  if stack.top < 0: error",
                "  value = stack[stack.top]",
                "  stack.top -= 1",
                "  return value",
            ],
            StackPeek => &[
                "peek(stack):",
                "  if stack.top < 0: error",
                "  return stack[stack.top]",
            ],
            QueueEnqueue => &[
                "enqueue(queue, value):",
                "  queue.rear += 1",
                "  queue[queue.rear] = value",
                "  return",
            ],
            QueueDequeue => &[
                "dequeue(queue):",
                "  if queue is empty: error",
                "  value = queue[queue.front]",
                "  queue.front += 1",
                "  return value",
            ],
            QueuePeek => &[
                "peek(queue):",
                "  if queue is empty: error",
                "  return queue[queue.front]",
            ],
            Preorder => &[
                "preorder(node):",
                "  if node == null: return",
                "  visit(node)",
                "  preorder(node.left)",
                "  preorder(node.right)",
                "  return",
            ],
            Inorder => &[
                "inorder(node):",
                "  if node == null: return",
                "  inorder(node.left)",
                "  visit(node)",
                "  inorder(node.right)",
                "  return",
            ],
            Postorder => &[
                "postorder(node):",
                "  if node == null: return",
                "  postorder(node.left)",
                "  postorder(node.right)",
                "  visit(node)",
                "  return",
            ],
            LevelOrder => &[
                "levelOrder(root):",
                "  queue = [root]",
                "  while queue not empty:",
                "    node = queue.dequeue()",
                "    visit(node)",
                "    if node.left: queue.enqueue(node.left)",
                "    if node.right: queue.enqueue(node.right)",
                "  return",
            ],
            BstInsert => &[
                "insert(root, value):",
                "  if root == null: root = new Node(value); return",
                "  curr = root",
                "  loop:",
                "    if value == curr.value: curr.count += 1; return",
                "    if value < curr.value:",
                "      if curr.left == null: curr.left = new Node(value); break",
                "      curr = curr.left",
                "    else:",
                "      if curr.right == null: curr.right = new Node(value); break",
                "      curr = curr.right",
                "  return",
            ],
            BstDelete => &[
                "delete(root, value):",
                "  node = search(root, value)",
                "  if node == null: return",
                "  if node.count > 1: node.count -= 1; return",
                "  if node has no children: detach(node)",
                "  else if node has one child:",
                "    child = node.left ?? node.right",
                "    node.value, node.count = child.value, child.count",
                "    node.left, node.right = child.left, child.right",
                "  else:",
                "    succ = min(node.right)",
                "    node.value, node.count = succ.value, succ.count",
                "    delete succ from node.right",
                "  return",
            ],
            BstSearch => &[
                "search(root, value):",
                "  curr = root",
                "  while curr != null:",
                "    if value == curr.value: return curr",
                "    if value < curr.value: curr = curr.left",
                "    else: curr = curr.right",
                "  return null",
            ],
            BstMin => &[
                "min(root):",
                "  curr = root",
                "  while curr.left != null:",
                "    curr = curr.left",
                "  return curr",
            ],
            BstMax => &[
                "max(root):",
                "  curr = root",
                "  while curr.right != null:",
                "    curr = curr.right",
                "  return curr",
            ],
            BstFloor => &[
                "floor(root, value):",
                "  best = null; curr = root",
                "  while curr != null:",
                "    if curr.value == value: return curr",
                "    if value < curr.value: curr = curr.left",
                "    else: best = curr; curr = curr.right",
                "  return best",
            ],
            BstCeil => &[
                "ceil(root, value):",
                "  best = null; curr = root",
                "  while curr != null:",
                "    if curr.value == value: return curr",
                "    if value > curr.value: curr = curr.right",
                "    else: best = curr; curr = curr.left",
                "  return best",
            ],
            GraphBfs => &[
                "bfs(graph, start, end):",
                "  queue = [start]; visited = {start}; dist[start] = 0",
                "  while queue not empty:",
                "    u = queue.dequeue()",
                "    if u == end: return path(parent, end)",
                "    for v in neighbors(u):",
                "      if v not in visited:",
                "        visited.add(v); dist[v] = dist[u] + 1",
                "        parent[v] = u; queue.enqueue(v)",
                "  return not found",
            ],
            GridBfs => &[
                "bfs(grid, start, end):",
                "  frontier = [start]; visited = {start}; dist[start] = 0",
                "  while frontier not empty:",
                "    layer = frontier; frontier = []",
                "    if end in layer: return path(parent, end)",
                "    for cell in layer:",
                "      for next in openNeighbors(cell) not in visited:",
                "        visited.add(next); dist[next] = dist[cell] + 1",
                "        parent[next] = cell; frontier.push(next)",
                "  return not found",
            ],
            GraphDfs => &[
                "dfs(graph, start, end):",
                "  stack = [(start, null)]",
                "  while stack not empty:",
                "    (u, from) = stack.pop()",
                "    if u in visited: continue",
                "    visited.add(u); parent[u] = from; depth[u] = depth[from] + 1",
                "    if u == end: return path(parent, end)",
                "    for v in reversed(neighbors(u)):",
                "      if v not in visited: stack.push((v, u))",
                "  return not found",
            ],
            GridDfs => &[
                "dfs(grid, start, end):",
                "  stack = [(start, null)]",
                "  while stack not empty:",
                "    (cell, from) = stack.pop()",
                "    if cell in visited: continue",
                "    visited.add(cell); parent[cell] = from; depth[cell] = depth[from] + 1",
                "    if cell == end: return path(parent, end)",
                "    for next in reversed(openNeighbors(cell)):",
                "      if next not in visited: stack.push((next, cell))",
                "  return not found",
            ],
        }
    }

    /// Lines to highlight for `tag`, or `None` if this operation never emits it.
    pub fn code_lines(&self, tag: ActionTag) -> Option<&'static [usize]> {
        use ActionTag as T;
        use Operation::*;
        let lines: &'static [usize] = match (self, tag) {
            (ArrayInsert, T::Init) => &[1],
            (ArrayInsert, T::InvalidIndex) => &[2],
            (ArrayInsert, T::Grow) => &[3],
            (ArrayInsert, T::PrepareShift) => &[4],
            (ArrayInsert, T::Shift) => &[5],
            (ArrayInsert, T::Assign) => &[6],
            (ArrayInsert, T::Complete) => &[7],

            (ArrayDelete, T::Init) => &[1],
            (ArrayDelete, T::InvalidIndex) => &[2],
            (ArrayDelete, T::Select) => &[3],
            (ArrayDelete, T::PrepareShift) => &[4],
            (ArrayDelete, T::Shift) => &[5],
            (ArrayDelete, T::RemoveLast) => &[6],
            (ArrayDelete, T::Complete) => &[7],

            (ArraySearch, T::Init) => &[1],
            (ArraySearch, T::Compare) => &[2, 3],
            (ArraySearch, T::Found) => &[4],
            (ArraySearch, T::NotFound) => &[5],

            (ListInsertHead { .. }, T::Init) => &[1],
            (ListInsertHead { .. }, T::CreateNode) => &[2],
            (ListInsertHead { .. }, T::Relink) => &[3],
            (ListInsertHead { .. }, T::UpdateHead) => &[4],
            (ListInsertHead { tail_pointer: true }, T::UpdateTail) => &[5],
            (ListInsertHead { tail_pointer: false }, T::Complete) => &[5],
            (ListInsertHead { tail_pointer: true }, T::Complete) => &[6],

            (ListInsertTail { .. }, T::Init) => &[1],
            (ListInsertTail { .. }, T::CreateNode) => &[2],
            (ListInsertTail { .. }, T::UpdateHead) => &[3],
            (ListInsertTail { tail_pointer: false }, T::Traverse) => &[4, 5, 6],
            (ListInsertTail { tail_pointer: false }, T::Relink) => &[7],
            (ListInsertTail { tail_pointer: false }, T::Complete) => &[8],
            (ListInsertTail { tail_pointer: true }, T::Relink) => &[4],
            (ListInsertTail { tail_pointer: true }, T::UpdateTail) => &[5],
            (ListInsertTail { tail_pointer: true }, T::Complete) => &[6],

            (ListInsertAt { .. }, T::Init) => &[1],
            (ListInsertAt { .. }, T::InvalidIndex) => &[2],
            (ListInsertAt { .. }, T::UpdateHead) => &[3],
            (ListInsertAt { .. }, T::Traverse) => &[5, 6],
            (ListInsertAt { .. }, T::CreateNode) => &[7],
            (ListInsertAt { .. }, T::Relink) => &[8, 9],
            (ListInsertAt { tail_pointer: true }, T::UpdateTail) => &[4],
            (ListInsertAt { .. }, T::Complete) => &[10],

            (ListDeleteHead { .. }, T::Init) => &[1],
            (ListDeleteHead { .. }, T::Underflow) => &[2],
            (ListDeleteHead { .. }, T::Select) => &[3],
            (ListDeleteHead { .. }, T::UpdateHead) => &[4],
            (ListDeleteHead { tail_pointer: false }, T::Clear) => &[4],
            (ListDeleteHead { tail_pointer: true }, T::Clear) => &[4, 5],
            (ListDeleteHead { tail_pointer: false }, T::Remove | T::Complete) => &[5],
            (ListDeleteHead { tail_pointer: true }, T::Remove | T::Complete) => &[6],

            (ListDeleteTail { .. }, T::Init) => &[1],
            (ListDeleteTail { .. }, T::Underflow) => &[2],
            (ListDeleteTail { .. }, T::Clear) => &[3],
            (ListDeleteTail { .. }, T::Traverse) => &[4, 5, 6],
            (ListDeleteTail { .. }, T::Select) => &[7],
            (ListDeleteTail { .. }, T::Relink) => &[8],
            (ListDeleteTail { tail_pointer: true }, T::UpdateTail) => &[9],
            (ListDeleteTail { tail_pointer: false }, T::Remove | T::Complete) => &[9],
            (ListDeleteTail { tail_pointer: true }, T::Remove | T::Complete) => &[10],

            (ListDeleteAt { .. }, T::Init) => &[1],
            (ListDeleteAt { .. }, T::InvalidIndex) => &[2],
            (ListDeleteAt { .. }, T::UpdateHead | T::Clear) => &[3],
            (ListDeleteAt { .. }, T::Traverse) => &[4, 5],
            (ListDeleteAt { .. }, T::Select) => &[6],
            (ListDeleteAt { .. }, T::Relink) => &[7],
            (ListDeleteAt { tail_pointer: true }, T::UpdateTail) => &[8],
            (ListDeleteAt { tail_pointer: false }, T::Remove | T::Complete) => &[8],
            (ListDeleteAt { tail_pointer: true }, T::Remove | T::Complete) => &[9],

            (ListSearch, T::Init) => &[1, 2],
            (ListSearch, T::Compare) => &[3, 4],
            (ListSearch, T::Found) => &[4],
            (ListSearch, T::NotFound) => &[6],

            (StackPush | QueueEnqueue, T::Init) => &[1],
            (StackPush | QueueEnqueue, T::Prepare) => &[2],
            (StackPush | QueueEnqueue, T::SlotUpdate) => &[3],
            (StackPush | QueueEnqueue, T::Complete) => &[4],

            (StackPop | QueueDequeue, T::Init) => &[1],
            (StackPop | QueueDequeue, T::Underflow) => &[2],
            (StackPop | QueueDequeue, T::Prepare) => &[3],
            (StackPop | QueueDequeue, T::SlotUpdate) => &[4],
            (StackPop | QueueDequeue, T::Complete) => &[5],

            (StackPeek | QueuePeek, T::Init) => &[1],
            (StackPeek | QueuePeek, T::Underflow) => &[2],
            (StackPeek | QueuePeek, T::Prepare | T::Complete) => &[3],

            (Preorder | Inorder | Postorder, T::Call) => &[1],
            (Preorder | Inorder | Postorder, T::NullChild) => &[2],
            (Preorder, T::Visit) => &[3],
            (Inorder, T::Visit) => &[4],
            (Postorder, T::Visit) => &[5],
            (Preorder | Inorder | Postorder, T::Return | T::Done) => &[6],

            (LevelOrder, T::EnqueueRoot) => &[2],
            (LevelOrder, T::Dequeue) => &[3, 4],
            (LevelOrder, T::Visit) => &[5],
            (LevelOrder, T::EnqueueChildren) => &[6, 7],
            (LevelOrder, T::Done) => &[8],

            (BstInsert, T::Init) => &[1],
            (BstInsert, T::PlaceRoot) => &[2],
            (BstInsert, T::Compare) => &[5, 6],
            (BstInsert, T::Equal) => &[5],
            (BstInsert, T::Descend) => &[8, 11],
            (BstInsert, T::Place) => &[7, 10],
            (BstInsert, T::Complete) => &[12],

            (BstDelete, T::Init) => &[1],
            (BstDelete, T::Compare | T::Descend) => &[2],
            (BstDelete, T::NotFound) => &[3],
            (BstDelete, T::Decrement) => &[4],
            (BstDelete, T::Remove) => &[5, 13],
            (BstDelete, T::Replace) => &[7, 8, 13],
            (BstDelete, T::RemoveChild) => &[9, 13],
            (BstDelete, T::SuccessorStep) => &[11],
            (BstDelete, T::CopySuccessor) => &[12],
            (BstDelete, T::Complete) => &[14],

            (BstSearch, T::Init) => &[1, 2],
            (BstSearch, T::Compare) => &[3, 4],
            (BstSearch, T::Found) => &[4],
            (BstSearch, T::Descend) => &[5, 6],
            (BstSearch, T::NotFound) => &[7],

            (BstMin | BstMax, T::Init) => &[2],
            (BstMin | BstMax, T::Descend) => &[3, 4],
            (BstMin | BstMax, T::Complete) => &[5],

            (BstFloor | BstCeil, T::Init) => &[2],
            (BstFloor | BstCeil, T::Compare) => &[3, 4],
            (BstFloor | BstCeil, T::Found) => &[4],
            (BstFloor, T::Descend) => &[5, 6],
            (BstCeil, T::Descend) => &[5, 6],
            (BstFloor | BstCeil, T::Update) => &[6],
            (BstFloor | BstCeil, T::Complete | T::NotFound) => &[7],

            (GraphBfs, T::Init) => &[2],
            (GraphBfs, T::Dequeue) => &[3, 4],
            (GraphBfs, T::CheckEnd | T::PathFound) => &[5],
            (GraphBfs, T::Explore) => &[6, 7],
            (GraphBfs, T::VisitNeighbors) => &[8, 9],
            (GraphBfs, T::NotFound) => &[10],

            (GridBfs, T::Init) => &[2],
            (GridBfs, T::ExpandLayer) => &[3, 4],
            (GridBfs, T::CheckEnd | T::PathFound) => &[5],
            (GridBfs, T::VisitNeighbors) => &[6, 7, 8, 9],
            (GridBfs, T::NotFound) => &[10],

            (GraphDfs | GridDfs, T::Init) => &[2],
            (GraphDfs | GridDfs, T::Pop) => &[3, 4, 6],
            (GraphDfs | GridDfs, T::CheckEnd | T::PathFound) => &[7],
            (GraphDfs | GridDfs, T::PushNeighbors) => &[8, 9],
            (GraphDfs | GridDfs, T::NotFound) => &[10],

            _ => return None,
        };
        Some(lines)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Operation::*;
        let name = match self {
            ArrayInsert => "array insert",
            ArrayDelete => "array delete",
            ArraySearch => "array search",
            ListInsertHead { .. } => "list insert head",
            ListInsertTail { .. } => "list insert tail",
            ListInsertAt { .. } => "list insert at index",
            ListDeleteHead { .. } => "list delete head",
            ListDeleteTail { .. } => "list delete tail",
            ListDeleteAt { .. } => "list delete at index",
            ListSearch => "list search",
            StackPush => "stack push",
            StackPop => "stack pop",
            StackPeek => "stack peek",
            QueueEnqueue => "queue enqueue",
            QueueDequeue => "queue dequeue",
            QueuePeek => "queue peek",
            Preorder => "preorder traversal",
            Inorder => "inorder traversal",
            Postorder => "postorder traversal",
            LevelOrder => "level-order traversal",
            BstInsert => "bst insert",
            BstDelete => "bst delete",
            BstSearch => "bst search",
            BstMin => "bst min",
            BstMax => "bst max",
            BstFloor => "bst floor",
            BstCeil => "bst ceil",
            GraphBfs => "graph bfs",
            GraphDfs => "graph dfs",
            GridBfs => "grid bfs",
            GridDfs => "grid dfs",
        };
        f.write_str(name)?;
        if let ListInsertHead { tail_pointer: true }
        | ListInsertTail { tail_pointer: true }
        | ListInsertAt { tail_pointer: true }
        | ListDeleteHead { tail_pointer: true }
        | ListDeleteTail { tail_pointer: true }
        | ListDeleteAt { tail_pointer: true } = self
        {
            f.write_str(" (tail pointer)")?;
        }
        Ok(())
    }
}
