//! Match outcomes and the capture store.
//!
//! Every match call produces a fresh [`MatchResult`]: a success flag plus a
//! multi-valued map from capture name to the subtree(s) bound to it, in the
//! order they were recorded during the traversal. Results are immutable once
//! returned and owned by the caller that produced them.
//!
//! Captures are read in one of three modes, matching how rules consume them:
//! exactly one binding ([`MatchResult::single`]), the first binding if any
//! ([`MatchResult::first`]), or all bindings in order
//! ([`MatchResult::all`]). Asking for "the single binding" of a name that is
//! bound zero or several times is a usage error in the calling rule and is
//! reported as a [`CaptureError`] rather than silently defaulted: a quietly
//! wrong subtree would corrupt the rewrite built from it.

use smallvec::SmallVec;
use thiserror::Error;

use crate::HashMap;

/// Errors raised when a rule mis-reads captures off a match result.
///
/// These indicate a defect in the calling rule, not in the analyzed source.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaptureError {
    /// The name was never bound by the match.
    #[error("no binding for capture \"{0}\"")]
    NotCaptured(String),

    /// The name was bound more than once, so "the single binding" is
    /// ill-defined.
    #[error("capture \"{name}\" is ambiguous: bound {count} times")]
    Ambiguous {
        /// The ambiguous capture name.
        name: String,
        /// How many bindings the name has.
        count: usize,
    },
}

/// The insertion-ordered multi-map backing a match result.
///
/// Most names are bound exactly once; the inline capacity avoids a heap
/// allocation for that case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CaptureMap<N> {
    bindings: HashMap<String, SmallVec<[N; 1]>>,
}

impl<N> Default for CaptureMap<N> {
    fn default() -> Self {
        Self {
            bindings: HashMap::default(),
        }
    }
}

impl<N> CaptureMap<N> {
    /// All bindings recorded under `name`, oldest first.
    pub(crate) fn get(&self, name: &str) -> &[N] {
        self.bindings
            .get(name)
            .map(|nodes| nodes.as_slice())
            .unwrap_or(&[])
    }

    /// The earliest binding recorded under `name`.
    pub(crate) fn first(&self, name: &str) -> Option<&N> {
        self.get(name).first()
    }

    /// Record a binding. Equality against earlier bindings of the same name
    /// is the matcher's responsibility; the map just appends.
    pub(crate) fn bind(&mut self, name: &str, node: N) {
        self.bindings.entry(name.to_owned()).or_default().push(node);
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

/// The outcome of matching one pattern against one candidate node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult<N> {
    success: bool,
    captures: CaptureMap<N>,
}

impl<N> MatchResult<N> {
    /// A failed match. Carries no captures.
    pub(crate) fn mismatch() -> Self {
        Self {
            success: false,
            captures: CaptureMap::default(),
        }
    }

    /// A successful match with the given captures.
    pub(crate) fn matched(captures: CaptureMap<N>) -> Self {
        Self {
            success: true,
            captures,
        }
    }

    /// Whether the pattern matched.
    pub fn is_match(&self) -> bool {
        self.success
    }

    /// The single binding for `name`.
    ///
    /// Errors if `name` is bound zero or several times; use
    /// [`MatchResult::first`] or [`MatchResult::all`] when that is expected.
    pub fn single(&self, name: &str) -> Result<&N, CaptureError> {
        match self.captures.get(name) {
            [] => Err(CaptureError::NotCaptured(name.to_owned())),
            [node] => Ok(node),
            nodes => Err(CaptureError::Ambiguous {
                name: name.to_owned(),
                count: nodes.len(),
            }),
        }
    }

    /// The first binding for `name`, or `None`.
    pub fn first(&self, name: &str) -> Option<&N> {
        self.captures.first(name)
    }

    /// All bindings for `name`, in the order they were captured.
    ///
    /// The iterator is finite and restartable: calling `all` again starts
    /// over from the first binding.
    pub fn all(&self, name: &str) -> impl Iterator<Item = &N> + '_ {
        self.captures.get(name).iter()
    }

    /// The names bound by this match, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.captures.names().collect();
        names.sort_unstable();
        names
    }
}
