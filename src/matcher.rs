//! The pattern matchers.
//!
//! The [`TreeMatcher`] trait is the interface for whole-tree matching. Two
//! implementations are provided:
//!  - [`SinglePatternMatcher`], which holds one pattern and also exposes the
//!    per-candidate [`match_root`](SinglePatternMatcher::match_root) call
//!    that rule walkers use directly,
//!  - [`NaiveManyMatcher`], which runs a whole catalogue of patterns, one
//!    [`SinglePatternMatcher`] at a time.

mod naive;
mod single_pattern;

use std::fmt::{self, Debug};

use derive_more::{From, Into};

pub use self::naive::NaiveManyMatcher;
pub use self::single_pattern::SinglePatternMatcher;

use crate::captures::MatchResult;
use crate::tree::TreeView;

/// Identify patterns with IDs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PatternID(pub usize);

impl Debug for PatternID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID({})", self.0)
    }
}

/// Match patterns on a host tree `T`.
pub trait TreeMatcher<T: TreeView> {
    /// The data returned by the matcher alongside pattern IDs.
    type Match;

    /// Find matches of all patterns over every node of `host`, visited in
    /// pre-order from the host root.
    fn find_matches<'a>(
        &'a self,
        host: &'a T,
    ) -> impl Iterator<Item = PatternMatch<Self::Match>> + 'a;
}

/// A match instance returned by a [`TreeMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PatternMatch<M> {
    /// The matching pattern ID.
    pub pattern: PatternID,

    /// Match data, such as the match position in the host.
    pub match_data: M,
}

impl<M> PatternMatch<M> {
    /// Create a new pattern match result.
    pub fn new(pattern: PatternID, match_data: M) -> Self {
        Self {
            pattern,
            match_data,
        }
    }
}

impl<M> From<(PatternID, M)> for PatternMatch<M> {
    fn from((pattern, match_data): (PatternID, M)) -> Self {
        Self::new(pattern, match_data)
    }
}

/// A successful match anchored at a candidate node.
///
/// This is the match data produced by the matchers in this crate: the
/// candidate the pattern matched at (for diagnostics) together with the
/// captures recorded along the way (for rewrites).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredMatch<N> {
    /// The candidate node the pattern matched at.
    pub root: N,
    /// The outcome of the match, captures included.
    pub result: MatchResult<N>,
}
