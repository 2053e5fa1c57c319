//! Read-only access to candidate syntax trees.
//!
//! The matching engine never owns or mutates the trees it inspects. Instead it
//! goes through the [`TreeView`] trait, a lens exposing the three things a
//! structural match needs from a node: its kind tag, its ordered children and
//! its optional literal value. Implement this trait once per host AST and
//! every pattern in the crate becomes available for it.

use std::fmt::Debug;
use std::iter::FusedIterator;

/// A read-only view of a syntax tree.
///
/// `Node` is a cheap handle (an arena index, a reference-counted pointer, ...)
/// identifying a node of the tree; all structural queries go through `self`.
///
/// The single `Kind` tag doubles as the operator tag of binary nodes: an
/// equality expression is simply a node whose kind is the equality operator
/// with two children.
pub trait TreeView {
    /// Handle identifying a node of the tree.
    type Node: Clone + Debug;
    /// Kind/operator tag carried by every node.
    type Kind: Copy + Eq + Debug;
    /// Literal payload carried by some leaf nodes.
    type Value: Clone + PartialEq + Debug;

    /// The root node of the tree.
    fn root(&self) -> Self::Node;

    /// The kind tag of `node`.
    fn kind(&self, node: &Self::Node) -> Self::Kind;

    /// The children of `node`, in structural order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// The literal value of `node`, if it carries one.
    fn value(&self, node: &Self::Node) -> Option<Self::Value>;

    /// If `node` is a parenthesized expression, the node it wraps.
    ///
    /// The default implementation reports no parenthesis notion at all, which
    /// makes [`Pattern::optional_parens`](crate::Pattern::optional_parens) a
    /// no-op wrapper for such trees.
    fn unwrap_parens(&self, node: &Self::Node) -> Option<Self::Node> {
        let _ = node;
        None
    }

    /// Strip all layers of parentheses off `node`.
    ///
    /// Terminates because every unwrap strictly descends into the tree.
    fn strip_parens(&self, node: &Self::Node) -> Self::Node {
        let mut node = node.clone();
        while let Some(inner) = self.unwrap_parens(&node) {
            node = inner;
        }
        node
    }

    /// Whether two subtrees are structurally equal.
    ///
    /// Two nodes are structurally equal if they agree on kind and literal
    /// value and their children are pairwise structurally equal. This is the
    /// equality used for backreference checks when a capture name is bound
    /// more than once in a single pattern.
    fn same_shape(&self, a: &Self::Node, b: &Self::Node) -> bool {
        let mut pending = vec![(a.clone(), b.clone())];
        while let Some((a, b)) = pending.pop() {
            if self.kind(&a) != self.kind(&b) || self.value(&a) != self.value(&b) {
                return false;
            }
            let (lhs, rhs) = (self.children(&a), self.children(&b));
            if lhs.len() != rhs.len() {
                return false;
            }
            pending.extend(lhs.into_iter().zip(rhs));
        }
        true
    }

    /// Iterate over the subtree rooted at `root` in pre-order.
    fn preorder(&self, root: Self::Node) -> PreOrder<'_, Self>
    where
        Self: Sized,
    {
        PreOrder::new(self, root)
    }
}

/// Iterator over a subtree in pre-order.
pub struct PreOrder<'t, T: TreeView> {
    tree: &'t T,
    stack: Vec<T::Node>,
}

impl<'t, T: TreeView> PreOrder<'t, T> {
    /// Create a pre-order traversal of the subtree rooted at `root`.
    pub fn new(tree: &'t T, root: T::Node) -> Self {
        Self {
            tree,
            stack: vec![root],
        }
    }
}

impl<'t, T: TreeView> Iterator for PreOrder<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        let children = self.tree.children(&next);
        self.stack.extend(children.into_iter().rev());
        Some(next)
    }
}

impl<'t, T: TreeView> FusedIterator for PreOrder<'t, T> {}
