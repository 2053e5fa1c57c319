#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod captures;
pub mod concrete;
pub mod matcher;
pub mod pattern;
pub mod predicate;
pub mod tree;

pub use captures::{CaptureError, MatchResult};
pub use matcher::{
    AnchoredMatch, NaiveManyMatcher, PatternID, PatternMatch, SinglePatternMatcher, TreeMatcher,
};
pub use pattern::{InvalidPattern, Pattern};
pub use predicate::{NodePredicate, ValuePredicate};
pub use tree::{PreOrder, TreeView};

use rustc_hash::{FxHashMap, FxHashSet};

pub(crate) type HashMap<K, V> = FxHashMap<K, V>;
pub(crate) type HashSet<T> = FxHashSet<T>;
