//! A matcher for a single pattern.
//!
//! This is the engine's core: one recursive function evaluating a pattern
//! against a candidate node. Matching is total and deterministic; a
//! structural mismatch is a `false` outcome, never an error. The matcher
//! only reads the candidate tree and threads an accumulating capture map
//! through the recursion.

use itertools::Itertools;

use crate::captures::{CaptureMap, MatchResult};
use crate::pattern::{Pattern, Shape};
use crate::predicate::NodePredicate;
use crate::tree::TreeView;

use super::{AnchoredMatch, PatternID, PatternMatch, TreeMatcher};

/// A matcher holding a single pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinglePatternMatcher<K, P> {
    pattern: Pattern<K, P>,
}

impl<K, P> SinglePatternMatcher<K, P> {
    /// Create a matcher from a pattern.
    pub fn new(pattern: Pattern<K, P>) -> Self {
        Self { pattern }
    }

    /// The pattern this matcher evaluates.
    pub fn pattern(&self) -> &Pattern<K, P> {
        &self.pattern
    }

    /// Evaluate the pattern against the candidate `node` of `host`.
    ///
    /// This is the per-candidate entry point rule walkers call for every
    /// node they visit.
    pub fn match_root<T>(&self, host: &T, node: &T::Node) -> MatchResult<T::Node>
    where
        T: TreeView<Kind = K>,
        P: NodePredicate<T>,
    {
        let mut captures = CaptureMap::default();
        if match_shape(host, &self.pattern, node, &mut captures) {
            MatchResult::matched(captures)
        } else {
            MatchResult::mismatch()
        }
    }
}

impl<T, P> TreeMatcher<T> for SinglePatternMatcher<T::Kind, P>
where
    T: TreeView,
    P: NodePredicate<T>,
{
    type Match = AnchoredMatch<T::Node>;

    fn find_matches<'a>(
        &'a self,
        host: &'a T,
    ) -> impl Iterator<Item = PatternMatch<Self::Match>> + 'a {
        host.preorder(host.root()).filter_map(move |node| {
            let result = self.match_root(host, &node);
            result.is_match().then(|| {
                PatternMatch::new(PatternID::default(), AnchoredMatch { root: node, result })
            })
        })
    }
}

/// Evaluate `pattern` against `node`, extending `captures` on the way.
///
/// On failure `captures` may hold bindings from sub-patterns that succeeded
/// before the failing one; callers that must not observe those (alternation,
/// commutative pairings) run each attempt against a snapshot and commit only
/// on success. A failed top-level call discards the map wholesale.
fn match_shape<T, P>(
    host: &T,
    pattern: &Pattern<T::Kind, P>,
    node: &T::Node,
    captures: &mut CaptureMap<T::Node>,
) -> bool
where
    T: TreeView,
    P: NodePredicate<T>,
{
    match pattern.shape() {
        Shape::Exact { kind, children } => {
            if host.kind(node) != *kind {
                return false;
            }
            let found = host.children(node);
            if found.len() != children.len() {
                return false;
            }
            children
                .iter()
                .zip_eq(&found)
                .all(|(child_pattern, child)| match_shape(host, child_pattern, child, captures))
        }
        Shape::Wildcard { filter } => filter.as_ref().map_or(true, |f| f.check(host, node)),
        Shape::Named { name, inner } => {
            if !match_shape(host, inner, node, captures) {
                return false;
            }
            // A repeated name is a backreference: the new binding must be
            // structurally equal to the first one.
            if let Some(previous) = captures.first(name) {
                if !host.same_shape(previous, node) {
                    return false;
                }
            }
            captures.bind(name, node.clone());
            true
        }
        Shape::Choice { alternatives } => {
            for alternative in alternatives {
                let mut attempt = captures.clone();
                if match_shape(host, alternative, node, &mut attempt) {
                    *captures = attempt;
                    return true;
                }
            }
            false
        }
        Shape::OptionalParens { inner } => {
            match_shape(host, inner, &host.strip_parens(node), captures)
        }
        Shape::CommutativeBinary { op, left, right } => {
            let node = host.strip_parens(node);
            if host.kind(&node) != *op {
                return false;
            }
            let found = host.children(&node);
            let [lhs, rhs] = found.as_slice() else {
                return false;
            };
            // Straight pairing first; only the winning pairing's captures
            // are kept.
            for (first, second) in [(lhs, rhs), (rhs, lhs)] {
                let mut attempt = captures.clone();
                if match_shape(host, left, first, &mut attempt)
                    && match_shape(host, right, second, &mut attempt)
                {
                    *captures = attempt;
                    return true;
                }
            }
            false
        }
    }
}
