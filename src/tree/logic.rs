use crate::data::{Record, ensure_unique_ids};
use crate::error::InputError;
use crate::frame::{Layout, fresh_id};
use crate::layout::LayoutConfig;
use crate::model::{Element, Position};
use ahash::AHashMap;

pub type NodeIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub value: f64,
    /// Number of times `value` was inserted.
    pub count: u32,
    pub left: Option<NodeIndex>,
    pub right: Option<NodeIndex>,
}

impl TreeNode {
    pub fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// An index arena of binary-tree nodes.
///
/// Detached nodes stay in the arena but are no longer reachable from the
/// root, so indices held by a running simulation never dangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeIndex>,
}

impl LogicTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a BST by inserting the record values in order. Repeated
    /// values bump the count of the existing node; holes are skipped.
    pub fn bst_from_records(records: &[Record]) -> Result<Self, InputError> {
        ensure_unique_ids(records)?;
        let mut tree = Self::new();
        for record in records {
            if let Some(value) = record.value {
                tree.insert(record.id.clone(), value);
            }
        }
        Ok(tree)
    }

    /// Builds a tree from a heap-indexed level-order array: the children of
    /// slot `i` live at `2i + 1` and `2i + 2`, and holes mean "no node".
    pub fn from_level_order(records: &[Record]) -> Result<Self, InputError> {
        ensure_unique_ids(records)?;
        let mut tree = Self::new();
        let mut slots: Vec<Option<NodeIndex>> = vec![None; records.len()];
        for (i, record) in records.iter().enumerate() {
            let Some(value) = record.value else { continue };
            let parent = if i == 0 {
                None
            } else {
                let side = if i % 2 == 1 { Side::Left } else { Side::Right };
                match slots[(i - 1) / 2] {
                    Some(parent) => Some((parent, side)),
                    None => {
                        log::warn!("Skipping '{}' at slot {}: its parent slot is empty", record.id, i);
                        continue;
                    }
                }
            };
            let index = tree.push(record.id.clone(), value);
            match parent {
                Some((parent, side)) => tree.attach(parent, side, Some(index)),
                None => tree.root = Some(index),
            }
            slots[i] = Some(index);
        }
        Ok(tree)
    }

    fn push(&mut self, id: String, value: f64) -> NodeIndex {
        self.nodes.push(TreeNode {
            id,
            value,
            count: 1,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Plain BST insert without tracing. Returns the node holding `value`.
    pub fn insert(&mut self, id: String, value: f64) -> NodeIndex {
        let Some(mut curr) = self.root else {
            let index = self.push(id, value);
            self.root = Some(index);
            return index;
        };
        loop {
            let node = &self.nodes[curr];
            if value == node.value {
                self.nodes[curr].count += 1;
                return curr;
            }
            let side = if value < node.value { Side::Left } else { Side::Right };
            match node.child(side) {
                Some(next) => curr = next,
                None => return self.add_child(curr, side, id, value),
            }
        }
    }

    pub fn add_child(&mut self, parent: NodeIndex, side: Side, id: String, value: f64) -> NodeIndex {
        let index = self.push(id, value);
        self.attach(parent, side, Some(index));
        index
    }

    pub fn add_root(&mut self, id: String, value: f64) -> NodeIndex {
        let index = self.push(id, value);
        self.root = Some(index);
        index
    }

    pub fn attach(&mut self, parent: NodeIndex, side: Side, child: Option<NodeIndex>) {
        match side {
            Side::Left => self.nodes[parent].left = child,
            Side::Right => self.nodes[parent].right = child,
        }
    }

    pub fn set_root(&mut self, root: Option<NodeIndex>) {
        self.root = root;
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> &mut TreeNode {
        &mut self.nodes[index]
    }

    pub fn id(&self, index: NodeIndex) -> &str {
        &self.nodes[index].id
    }

    pub fn value(&self, index: NodeIndex) -> f64 {
        self.nodes[index].value
    }

    /// The parent of `index` and the side it hangs on, found by walking
    /// down from the root.
    pub fn parent_of(&self, index: NodeIndex) -> Option<(NodeIndex, Side)> {
        self.preorder()
            .into_iter()
            .find_map(|candidate| {
                let node = &self.nodes[candidate];
                if node.left == Some(index) {
                    Some((candidate, Side::Left))
                } else if node.right == Some(index) {
                    Some((candidate, Side::Right))
                } else {
                    None
                }
            })
    }

    /// A fresh element id that no arena node uses.
    pub fn fresh_id(&self, prefix: &str) -> String {
        fresh_id(prefix, |candidate| self.nodes.iter().any(|n| n.id == candidate))
    }

    /// Reachable nodes in preorder.
    pub fn preorder(&self) -> Vec<NodeIndex> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeIndex> = self.root.into_iter().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            let node = &self.nodes[index];
            stack.extend(node.right);
            stack.extend(node.left);
        }
        order
    }

    /// Reachable nodes in order.
    pub fn inorder(&self) -> Vec<NodeIndex> {
        let mut order = Vec::new();
        let mut stack = Vec::new();
        let mut curr = self.root;
        while curr.is_some() || !stack.is_empty() {
            while let Some(index) = curr {
                stack.push(index);
                curr = self.nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                order.push(index);
                curr = self.nodes[index].right;
            }
        }
        order
    }

    pub fn depths(&self) -> AHashMap<NodeIndex, usize> {
        let mut depths = AHashMap::new();
        let mut stack: Vec<(NodeIndex, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((index, depth)) = stack.pop() {
            depths.insert(index, depth);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        depths
    }

    pub fn len(&self) -> usize {
        self.preorder().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// Boxes drawn in a row under the tree, e.g. a call stack or a queue.
pub struct AuxRow<'a> {
    pub label: &'static str,
    pub items: &'a [NodeIndex],
}

/// A tree frame: the reachable nodes plus optional helper markers.
pub struct TreeView<'a> {
    pub tree: &'a LogicTree,
    pub aux: Option<AuxRow<'a>>,
    /// Marks the empty child slot a traversal just looked at.
    pub null_child: Option<(Option<NodeIndex>, Side)>,
}

impl<'a> TreeView<'a> {
    pub fn new(tree: &'a LogicTree) -> Self {
        Self {
            tree,
            aux: None,
            null_child: None,
        }
    }

    pub fn with_aux(mut self, label: &'static str, items: &'a [NodeIndex]) -> Self {
        self.aux = Some(AuxRow { label, items });
        self
    }

    pub fn with_null_child(mut self, parent: Option<NodeIndex>, side: Side) -> Self {
        self.null_child = Some((parent, side));
        self
    }
}

impl Layout for TreeView<'_> {
    fn layout(&self, config: &LayoutConfig) -> Vec<Element> {
        let tree = self.tree;
        let depths = tree.depths();
        let base = config.origin.offset(config.node_radius, config.node_radius);
        let positions: AHashMap<NodeIndex, Position> = tree
            .inorder()
            .into_iter()
            .enumerate()
            .map(|(rank, index)| {
                let depth = depths.get(&index).copied().unwrap_or_default();
                let position = base.offset(
                    rank as f64 * config.node_spacing,
                    depth as f64 * config.level_height,
                );
                (index, position)
            })
            .collect();

        let mut elements: Vec<Element> = tree
            .preorder()
            .into_iter()
            .map(|index| {
                let node = tree.node(index);
                let position = positions.get(&index).copied().unwrap_or(base);
                let mut element = Element::node(node.id.clone(), Some(node.value), position, config.node_radius);
                if node.count > 1 {
                    element = element.with_description(format!("x{}", node.count));
                }
                for child in [node.left, node.right].into_iter().flatten() {
                    element = element.with_target(tree.id(child).to_string());
                }
                element
            })
            .collect();

        if let Some((parent, side)) = self.null_child {
            let position = match parent.and_then(|p| positions.get(&p)) {
                Some(anchor) => {
                    let dx = config.node_spacing / 2.0;
                    let dx = if side == Side::Left { -dx } else { dx };
                    anchor.offset(dx, config.level_height)
                }
                None => base,
            };
            elements.push(Element::pointer("null", "null", position));
        }

        if let Some(aux) = &self.aux {
            let max_depth = depths.values().copied().max().unwrap_or_default();
            let row = config.origin.offset(
                0.0,
                (max_depth + 1) as f64 * config.level_height + 2.0 * config.node_radius,
            );
            elements.push(Element::pointer(
                format!("{}-label", aux.label.replace(' ', "-")),
                aux.label,
                row.offset(0.0, -config.pointer_offset / 2.0),
            ));
            for (i, index) in aux.items.iter().enumerate() {
                let position = row.offset(i as f64 * (config.box_width + config.box_gap), 0.0);
                elements.push(
                    Element::boxed(
                        format!("aux-{}", i),
                        Some(tree.value(*index)),
                        position,
                        config.box_width,
                        config.box_height,
                    )
                    .with_description(tree.id(*index).to_string()),
                );
            }
        }
        elements
    }
}
