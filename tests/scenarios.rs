//! End-to-end scenarios from classic inspection rules.

use itertools::Itertools;
use rstest::rstest;

use treematch::concrete::expr::{NodeId, SyntaxKind, SyntaxTree};
use treematch::{NaiveManyMatcher, Pattern, PatternID, SinglePatternMatcher, TreeMatcher, TreeView};

type RulePattern = Pattern<SyntaxKind, ()>;
type RuleMatcher = SinglePatternMatcher<SyntaxKind, ()>;

/// `cond ? <then> : <else>` where both branches come from the same builder.
fn ternary(tree: &mut SyntaxTree, same_branches: bool) -> NodeId {
    let cond = tree.leaf_with_value(SyntaxKind::Identifier, "cond");
    let one_plus_one = |tree: &mut SyntaxTree| {
        let a = tree.leaf_with_value(SyntaxKind::NumberLiteral, "1");
        let b = tree.leaf_with_value(SyntaxKind::NumberLiteral, "1");
        tree.node(SyntaxKind::Add, [a, b])
    };
    let then_branch = one_plus_one(tree);
    let else_branch = if same_branches {
        one_plus_one(tree)
    } else {
        tree.leaf_with_value(SyntaxKind::NumberLiteral, "2")
    };
    let conditional = tree.node(SyntaxKind::Conditional, [cond, then_branch, else_branch]);
    tree.set_root(conditional);
    conditional
}

/// The "ternary with identical branches" rule: the pattern finds every
/// conditional, the rule then compares the two captured branches itself.
#[rstest]
#[case(true)]
#[case(false)]
fn redundant_ternary_branches(#[case] same_branches: bool) {
    let pattern = RulePattern::exact(
        SyntaxKind::Conditional,
        [
            RulePattern::wildcard(),
            RulePattern::capture("t"),
            RulePattern::capture("f"),
        ],
    );
    let matcher = RuleMatcher::new(pattern);

    let mut tree = SyntaxTree::new();
    let conditional = ternary(&mut tree, same_branches);

    // the structural match succeeds either way
    let result = matcher.match_root(&tree, &conditional);
    assert!(result.is_match());

    // the rule's own equality check decides whether to report
    let t = result.single("t").unwrap();
    let f = result.single("f").unwrap();
    assert_eq!(tree.same_shape(t, f), same_branches);
}

/// The GetType()/typeof comparison rule: one commutative pattern covers both
/// operand orders, and parentheses around the comparison are transparent.
#[rstest]
#[case(false, false)]
#[case(true, false)]
#[case(false, true)]
fn gettype_typeof_comparison(#[case] swapped: bool, #[case] parenthesize: bool) {
    let pattern = RulePattern::commutative(
        SyntaxKind::Equals,
        RulePattern::exact(SyntaxKind::Invocation, [RulePattern::capture("a")]),
        RulePattern::exact(SyntaxKind::TypeOf, [RulePattern::capture("b")]),
    );
    let matcher = RuleMatcher::new(pattern);

    // `a.GetType() == typeof(B)`, or the mirrored / parenthesized variants
    let mut tree = SyntaxTree::new();
    let receiver = tree.leaf_with_value(SyntaxKind::Identifier, "a");
    let get_type = tree.node_with_value(SyntaxKind::Invocation, "GetType", [receiver]);
    let type_name = tree.leaf_with_value(SyntaxKind::Identifier, "B");
    let type_of = tree.node(SyntaxKind::TypeOf, [type_name]);
    let operands = if swapped {
        [type_of, get_type]
    } else {
        [get_type, type_of]
    };
    let mut candidate = tree.node(SyntaxKind::Equals, operands);
    if parenthesize {
        candidate = tree.parenthesized(candidate);
    }
    tree.set_root(candidate);

    let result = matcher.match_root(&tree, &candidate);
    assert!(result.is_match());
    assert_eq!(result.single("a"), Ok(&receiver));
    assert_eq!(result.single("b"), Ok(&type_name));
}

/// A small rule catalogue run over one file, the way the host framework
/// drives many rules per tree.
#[test]
fn rule_catalogue_over_one_tree() {
    // `x == x ? x.GetType() == typeof(Y) : false`  (contrived, but exercises
    // every rule in the catalogue at once)
    let mut tree = SyntaxTree::new();
    let x1 = tree.leaf_with_value(SyntaxKind::Identifier, "x");
    let x2 = tree.leaf_with_value(SyntaxKind::Identifier, "x");
    let self_eq = tree.node(SyntaxKind::Equals, [x1, x2]);
    let x3 = tree.leaf_with_value(SyntaxKind::Identifier, "x");
    let get_type = tree.node_with_value(SyntaxKind::Invocation, "GetType", [x3]);
    let y = tree.leaf_with_value(SyntaxKind::Identifier, "Y");
    let type_of = tree.node(SyntaxKind::TypeOf, [y]);
    let type_check = tree.node(SyntaxKind::Equals, [get_type, type_of]);
    let fallback = tree.leaf_with_value(SyntaxKind::Identifier, "false");
    let conditional = tree.node(SyntaxKind::Conditional, [self_eq, type_check, fallback]);
    tree.set_root(conditional);

    let self_comparison = RulePattern::exact(
        SyntaxKind::Equals,
        [RulePattern::capture("side"), RulePattern::capture("side")],
    );
    let gettype_typeof = RulePattern::commutative(
        SyntaxKind::Equals,
        RulePattern::exact(SyntaxKind::Invocation, [RulePattern::wildcard()]),
        RulePattern::exact(SyntaxKind::TypeOf, [RulePattern::wildcard()]),
    );
    let matcher = NaiveManyMatcher::from_patterns([self_comparison, gettype_typeof]);

    let matches = matcher
        .find_matches(&tree)
        .map(|m| (m.pattern, m.match_data.root))
        .collect_vec();
    assert_eq!(
        matches,
        vec![(PatternID(0), self_eq), (PatternID(1), type_check)]
    );
}
