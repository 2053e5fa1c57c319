//! Declarative descriptions of tree shapes.
//!
//! A [`Pattern`] is an immutable value describing a shape of subtree to look
//! for, assembled from a small set of combinators: exact kind-and-children
//! checks, wildcards with optional filters, named captures, ordered
//! alternation, parenthesis-transparent wrappers and commutative binary
//! operators.
//!
//! Patterns carry no per-match state, so one instance can back unboundedly
//! many match calls, including from several threads at once. Rules typically
//! build their pattern once and share it as a module-level constant.
//!
//! Well-formedness is checked eagerly at construction: a malformed pattern
//! (such as an alternation with no alternatives) is a programming error in
//! the rule and is reported as [`InvalidPattern`] before it can ever reach a
//! matcher.

use std::fmt::{self, Debug};

use itertools::Itertools;
use thiserror::Error;

use crate::HashSet;

/// A description of a tree shape to search for.
///
/// ## Generic parameters
/// - `K`: the kind/operator tag of the host tree, matching
///   [`TreeView::Kind`](crate::TreeView::Kind).
/// - `P`: the predicate type used by wildcard filters, implementing
///   [`NodePredicate`](crate::NodePredicate). Use `()` for patterns that
///   never filter.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern<K, P> {
    shape: Shape<K, P>,
}

/// The closed set of pattern combinators.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum Shape<K, P> {
    /// Same kind tag, exact child arity, children matched in order.
    Exact {
        kind: K,
        children: Vec<Pattern<K, P>>,
    },
    /// Any single node, optionally filtered; children are not inspected.
    Wildcard { filter: Option<P> },
    /// Delegate to `inner` and record the candidate under `name` on success.
    Named {
        name: String,
        inner: Box<Pattern<K, P>>,
    },
    /// Ordered alternation; the first alternative to succeed wins.
    Choice { alternatives: Vec<Pattern<K, P>> },
    /// Strip any number of parenthesis layers, then delegate to `inner`.
    OptionalParens { inner: Box<Pattern<K, P>> },
    /// A binary node of kind `op`, with operands matched in either order.
    CommutativeBinary {
        op: K,
        left: Box<Pattern<K, P>>,
        right: Box<Pattern<K, P>>,
    },
}

/// Errors detected when constructing a pattern.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPattern {
    /// A choice needs at least one alternative; an empty one could only ever
    /// fail and would do so silently.
    #[error("choice requires at least one alternative")]
    EmptyChoice,
}

impl<K, P> Pattern<K, P> {
    fn from_shape(shape: Shape<K, P>) -> Self {
        Self { shape }
    }

    pub(crate) fn shape(&self) -> &Shape<K, P> {
        &self.shape
    }

    /// A node of kind `kind` with exactly the given child patterns.
    ///
    /// Zero children is legal and denotes a leaf kind check.
    pub fn exact(kind: K, children: impl IntoIterator<Item = Self>) -> Self {
        Self::from_shape(Shape::Exact {
            kind,
            children: children.into_iter().collect(),
        })
    }

    /// A childless node of kind `kind`. Shorthand for [`Pattern::exact`] with
    /// no children.
    pub fn leaf(kind: K) -> Self {
        Self::exact(kind, [])
    }

    /// Any single node.
    pub fn wildcard() -> Self {
        Self::from_shape(Shape::Wildcard { filter: None })
    }

    /// Any single node accepted by `filter`.
    pub fn filtered(filter: P) -> Self {
        Self::from_shape(Shape::Wildcard {
            filter: Some(filter),
        })
    }

    /// Match `inner` and record the candidate node under `name`.
    ///
    /// Reusing a name within one pattern turns the later occurrences into
    /// backreferences: they only match subtrees structurally equal to the
    /// one bound first.
    pub fn named(name: impl Into<String>, inner: Self) -> Self {
        Self::from_shape(Shape::Named {
            name: name.into(),
            inner: Box::new(inner),
        })
    }

    /// A named wildcard. Shorthand for `named(name, wildcard())`.
    pub fn capture(name: impl Into<String>) -> Self {
        Self::named(name, Self::wildcard())
    }

    /// Ordered alternation over `alternatives`.
    ///
    /// Alternatives are tried strictly in the order given and the first
    /// success is committed to, captures and all.
    pub fn try_choice(
        alternatives: impl IntoIterator<Item = Self>,
    ) -> Result<Self, InvalidPattern> {
        let alternatives: Vec<_> = alternatives.into_iter().collect();
        if alternatives.is_empty() {
            return Err(InvalidPattern::EmptyChoice);
        }
        Ok(Self::from_shape(Shape::Choice { alternatives }))
    }

    /// Match `inner` against the candidate with any number of parenthesis
    /// layers stripped. Stripping itself never fails.
    pub fn optional_parens(inner: Self) -> Self {
        Self::from_shape(Shape::OptionalParens {
            inner: Box::new(inner),
        })
    }

    /// A binary node of kind `op` whose operands match `left` and `right` in
    /// either order.
    ///
    /// The candidate is paren-stripped first. The straight pairing is tried
    /// before the swapped one and only the successful pairing contributes
    /// captures, so an ambiguous candidate such as `a == a` always reports
    /// the straight pairing's bindings.
    pub fn commutative(op: K, left: Self, right: Self) -> Self {
        Self::from_shape(Shape::CommutativeBinary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// The capture names this pattern can bind, in first-occurrence order.
    ///
    /// A name appearing several times (a backreference) is listed once.
    pub fn capture_names(&self) -> Vec<&str> {
        let mut seen = HashSet::default();
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(pattern) = stack.pop() {
            match pattern.shape() {
                Shape::Exact { children, .. } => stack.extend(children.iter().rev()),
                Shape::Wildcard { .. } => {}
                Shape::Named { name, inner } => {
                    if seen.insert(name.as_str()) {
                        names.push(name.as_str());
                    }
                    stack.push(inner);
                }
                Shape::Choice { alternatives } => stack.extend(alternatives.iter().rev()),
                Shape::OptionalParens { inner } => stack.push(inner),
                Shape::CommutativeBinary { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        names
    }
}

impl<K: Debug, P: Debug> Debug for Pattern<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape() {
            Shape::Exact { kind, children } => {
                let children = children.iter().map(|c| format!("{c:?}")).join(", ");
                write!(f, "{kind:?}({children})")
            }
            Shape::Wildcard { filter: None } => write!(f, "_"),
            Shape::Wildcard { filter: Some(p) } => write!(f, "_ if {p:?}"),
            Shape::Named { name, inner } => write!(f, "${name}@{inner:?}"),
            Shape::Choice { alternatives } => {
                let alternatives = alternatives.iter().map(|a| format!("{a:?}")).join(" | ");
                write!(f, "({alternatives})")
            }
            Shape::OptionalParens { inner } => write!(f, "paren*({inner:?})"),
            Shape::CommutativeBinary { op, left, right } => {
                write!(f, "{op:?}~({left:?}, {right:?})")
            }
        }
    }
}
