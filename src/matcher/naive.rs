//! A matcher running a catalogue of patterns one at a time.
//!
//! Rule frameworks typically hold on the order of a hundred patterns; this
//! matcher evaluates each of them at every candidate node via its own
//! [`SinglePatternMatcher`] and tags the results with the pattern's position
//! in the catalogue.

use crate::pattern::Pattern;
use crate::predicate::NodePredicate;
use crate::tree::TreeView;

use super::{AnchoredMatch, PatternID, PatternMatch, SinglePatternMatcher, TreeMatcher};

/// A matcher for many patterns, one [`SinglePatternMatcher`] per pattern.
#[derive(Clone, Debug)]
pub struct NaiveManyMatcher<K, P> {
    matchers: Vec<SinglePatternMatcher<K, P>>,
}

impl<K, P> Default for NaiveManyMatcher<K, P> {
    fn default() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }
}

impl<K, P> NaiveManyMatcher<K, P> {
    /// Create a matcher from a catalogue of patterns.
    ///
    /// The [`PatternID`]s reported by
    /// [`find_matches`](TreeMatcher::find_matches) are positions in this
    /// catalogue.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern<K, P>>) -> Self {
        Self {
            matchers: patterns
                .into_iter()
                .map(SinglePatternMatcher::new)
                .collect(),
        }
    }

    /// The number of patterns in the catalogue.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl<K, P> FromIterator<Pattern<K, P>> for NaiveManyMatcher<K, P> {
    fn from_iter<I: IntoIterator<Item = Pattern<K, P>>>(iter: I) -> Self {
        Self::from_patterns(iter)
    }
}

impl<T, P> TreeMatcher<T> for NaiveManyMatcher<T::Kind, P>
where
    T: TreeView,
    P: NodePredicate<T>,
{
    type Match = AnchoredMatch<T::Node>;

    fn find_matches<'a>(
        &'a self,
        host: &'a T,
    ) -> impl Iterator<Item = PatternMatch<Self::Match>> + 'a {
        self.matchers.iter().enumerate().flat_map(move |(id, matcher)| {
            matcher
                .find_matches(host)
                .map(move |found| PatternMatch::new(PatternID(id), found.match_data))
        })
    }
}
