//! A small arena-backed expression tree.
//!
//! The node kinds cover the shapes the classic inspection rules care about:
//! identifiers and literals, a handful of binary operators, the conditional
//! (ternary) expression, invocations, `typeof`-style type queries and
//! explicit parenthesization. Nodes are built bottom-up into an arena and
//! addressed by [`NodeId`] handles, so the [`TreeView`] handles are `Copy`
//! and matching never clones subtrees.

use derive_more::{From, Into};

use crate::tree::TreeView;

/// The kind/operator tag of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntaxKind {
    /// A name, with the identifier text as its value.
    Identifier,
    /// A numeric literal, with its spelling as its value.
    NumberLiteral,
    /// A string literal, with its contents as its value.
    StringLiteral,
    /// An explicitly parenthesized expression; one child.
    Parenthesized,
    /// `==`; two children.
    Equals,
    /// `!=`; two children.
    NotEquals,
    /// `+`; two children.
    Add,
    /// `*`; two children.
    Multiply,
    /// Logical negation; one child.
    Not,
    /// A ternary conditional; children are condition, then- and else-branch.
    Conditional,
    /// A call, with the callee name as its value and arguments as children.
    Invocation,
    /// A `typeof(...)`-style type query; one child.
    TypeOf,
}

/// Handle to a node of a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct NodeData {
    kind: SyntaxKind,
    value: Option<String>,
    children: Vec<NodeId>,
}

/// An expression tree stored in an arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a childless node without a value.
    pub fn leaf(&mut self, kind: SyntaxKind) -> NodeId {
        self.push(kind, None, Vec::new())
    }

    /// Add a childless node carrying a literal value.
    pub fn leaf_with_value(&mut self, kind: SyntaxKind, value: impl Into<String>) -> NodeId {
        self.push(kind, Some(value.into()), Vec::new())
    }

    /// Add a node with the given children.
    pub fn node(&mut self, kind: SyntaxKind, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.push(kind, None, children.into_iter().collect())
    }

    /// Add a node with a value and children.
    pub fn node_with_value(
        &mut self,
        kind: SyntaxKind,
        value: impl Into<String>,
        children: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        self.push(kind, Some(value.into()), children.into_iter().collect())
    }

    /// Wrap `inner` in one layer of parentheses.
    pub fn parenthesized(&mut self, inner: NodeId) -> NodeId {
        self.push(SyntaxKind::Parenthesized, None, vec![inner])
    }

    /// Declare `root` the root of the tree.
    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// The number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: SyntaxKind, value: Option<String>, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            value,
            children,
        });
        id
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0]
    }
}

impl TreeView for SyntaxTree {
    type Node = NodeId;
    type Kind = SyntaxKind;
    type Value = String;

    /// The root declared with [`SyntaxTree::set_root`].
    ///
    /// Panics if no root was declared.
    fn root(&self) -> NodeId {
        self.root.expect("syntax tree has no root")
    }

    fn kind(&self, node: &NodeId) -> SyntaxKind {
        self.data(*node).kind
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.data(*node).children.clone()
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        self.data(*node).value.clone()
    }

    fn unwrap_parens(&self, node: &NodeId) -> Option<NodeId> {
        let data = self.data(*node);
        (data.kind == SyntaxKind::Parenthesized)
            .then(|| data.children.first().copied())
            .flatten()
    }
}
