//! Predicates filtering wildcard matches.
//!
//! A predicate is a boolean-valued function over a candidate node, evaluated
//! through the host's [`TreeView`]. Wildcard patterns built with
//! [`Pattern::filtered`](crate::Pattern::filtered) consult their predicate
//! and nothing else: a rejected candidate is an ordinary structural mismatch,
//! never an error.

use std::fmt::{self, Debug};

use crate::tree::TreeView;

/// A filter over candidate nodes.
pub trait NodePredicate<T: TreeView> {
    /// Whether `node` is accepted.
    fn check(&self, host: &T, node: &T::Node) -> bool;
}

/// The trivial predicate: accepts every node.
///
/// Lets patterns that never filter instantiate `Pattern<K, ()>` without
/// inventing a predicate type.
impl<T: TreeView> NodePredicate<T> for () {
    fn check(&self, _host: &T, _node: &T::Node) -> bool {
        true
    }
}

/// Ready-made predicates over a node's literal value.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValuePredicate<V> {
    /// The node carries a literal value, whatever it is.
    HasValue,
    /// The node carries exactly this literal value.
    Equals(V),
}

impl<T: TreeView> NodePredicate<T> for ValuePredicate<T::Value> {
    fn check(&self, host: &T, node: &T::Node) -> bool {
        match self {
            ValuePredicate::HasValue => host.value(node).is_some(),
            ValuePredicate::Equals(expected) => host.value(node).as_ref() == Some(expected),
        }
    }
}

impl<V: Debug> Debug for ValuePredicate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuePredicate::HasValue => write!(f, "has value"),
            ValuePredicate::Equals(v) => write!(f, "value == {v:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::concrete::expr::{SyntaxKind, SyntaxTree};

    use super::*;

    #[rstest]
    #[case(ValuePredicate::HasValue, true, true)]
    #[case(ValuePredicate::Equals("foo".to_string()), true, false)]
    #[case(ValuePredicate::Equals("1".to_string()), false, true)]
    fn value_predicates(
        #[case] predicate: ValuePredicate<String>,
        #[case] accepts_foo: bool,
        #[case] accepts_one: bool,
    ) {
        let mut tree = SyntaxTree::new();
        let foo = tree.leaf_with_value(SyntaxKind::Identifier, "foo");
        let one = tree.leaf_with_value(SyntaxKind::NumberLiteral, "1");
        let eq = tree.node(SyntaxKind::Equals, [foo, one]);
        tree.set_root(eq);

        assert_eq!(predicate.check(&tree, &foo), accepts_foo);
        assert_eq!(predicate.check(&tree, &one), accepts_one);
        // the equality node carries no literal value
        assert!(!predicate.check(&tree, &eq));
    }
}
