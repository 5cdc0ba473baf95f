//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Report stats and verdict consistency
//! - Evaluation determinism
//! - Dependency resolution over partial collections

use crate::dependencies::direct_dependencies;
use crate::engine::{build_asserter, evaluate, evaluate_single_rule};
use crate::rule::{DeclaredRule, RuleOutcome};
use dragee_types::{DependencyKind, Dragee, Severity};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{0,7}").unwrap()
}

fn arb_profile() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ddd/aggregate".to_string()),
        Just("ddd/entity".to_string()),
        Just("ddd/value_object".to_string()),
        Just("ddd/repository".to_string()),
    ]
}

fn arb_kind() -> impl Strategy<Value = DependencyKind> {
    prop_oneof![
        Just(DependencyKind::Constructor),
        Just(DependencyKind::Field),
        Just(DependencyKind::MethodParam),
        Just(DependencyKind::MethodReturn),
    ]
}

/// Dragees with unique names; dependencies may point outside the collection.
fn arb_dragees() -> impl Strategy<Value = Vec<Dragee>> {
    prop::collection::btree_set(arb_name(), 0..12).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let count = names.len();
        (
            Just(names),
            prop::collection::vec(arb_profile(), count),
            prop::collection::vec(
                prop::collection::vec((arb_name(), arb_kind()), 0..4),
                count,
            ),
        )
            .prop_map(|(names, profiles, deps)| {
                names
                    .into_iter()
                    .zip(profiles)
                    .zip(deps)
                    .map(|((name, profile), deps)| {
                        deps.into_iter()
                            .fold(Dragee::new(name, profile), |d, (dep, kind)| {
                                d.depending_on(dep, kind)
                            })
                    })
                    .collect()
            })
    })
}

/// Rule shapes: fail per matching dragee, pass per dragee, or fail per dependency.
#[derive(Clone, Debug)]
enum RuleShape {
    FailProfile(String),
    PassAll,
    FailUnresolved,
}

fn arb_rule_shape() -> impl Strategy<Value = RuleShape> {
    prop_oneof![
        arb_profile().prop_map(RuleShape::FailProfile),
        Just(RuleShape::PassAll),
        Just(RuleShape::FailUnresolved),
    ]
}

fn declare(index: usize, shape: RuleShape) -> DeclaredRule {
    let label = format!("Rule {index}");
    match shape {
        RuleShape::FailProfile(profile) => DeclaredRule::new(label, Severity::Error, move |ds| {
            ds.iter()
                .map(|d| {
                    if d.profile == profile {
                        RuleOutcome::failure("forbidden profile", d.name.as_str())
                    } else {
                        RuleOutcome::success()
                    }
                })
                .collect()
        }),
        RuleShape::PassAll => DeclaredRule::new(label, Severity::Info, |ds| {
            ds.iter().map(|_| RuleOutcome::success()).collect()
        }),
        RuleShape::FailUnresolved => DeclaredRule::new(label, Severity::Warn, |ds| {
            ds.iter()
                .filter(|d| direct_dependencies(d, ds).dependencies.len() < d.depends_on.len())
                .map(|d| RuleOutcome::failure("unresolved dependency", d.name.as_str()))
                .collect()
        }),
    }
}

fn arb_rules() -> impl Strategy<Value = Vec<RuleShape>> {
    prop::collection::vec(arb_rule_shape(), 0..6)
}

fn build(shapes: Vec<RuleShape>) -> crate::engine::Asserter {
    let declared: Vec<DeclaredRule> = shapes
        .into_iter()
        .enumerate()
        .map(|(i, shape)| declare(i, shape))
        .collect();
    build_asserter("props", declared).expect("labels are unique")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn rules_count_matches_rule_set(shapes in arb_rules(), dragees in arb_dragees()) {
        let expected = shapes.len();
        let report = evaluate(&build(shapes), &dragees);
        prop_assert_eq!(report.stats.rules_count, expected);
    }

    #[test]
    fn pass_agrees_with_errors(shapes in arb_rules(), dragees in arb_dragees()) {
        let report = evaluate(&build(shapes), &dragees);
        prop_assert_eq!(report.pass, report.errors.is_empty());
        prop_assert_eq!(report.stats.errors_count, report.errors.len());
        prop_assert_eq!(
            report.stats.pass_count,
            report.stats.rules_count as i64 - report.stats.errors_count as i64
        );
    }

    #[test]
    fn every_error_names_a_registered_rule(shapes in arb_rules(), dragees in arb_dragees()) {
        let asserter = build(shapes);
        let report = evaluate(&asserter, &dragees);
        for err in &report.errors {
            let rule_id = err.rule_id.as_deref();
            prop_assert!(rule_id.is_some_and(|id| asserter.rule(id).is_some()));
        }
    }

    #[test]
    fn empty_asserter_always_passes(dragees in arb_dragees()) {
        let report = evaluate(&build(Vec::new()), &dragees);
        prop_assert!(report.pass);
        prop_assert!(report.errors.is_empty());
        prop_assert_eq!(report.stats.rules_count, 0);
        prop_assert_eq!(report.stats.pass_count, 0);
        prop_assert_eq!(report.stats.errors_count, 0);
    }

    #[test]
    fn evaluation_is_idempotent(shapes in arb_rules(), dragees in arb_dragees()) {
        let asserter = build(shapes);
        let first = serde_json::to_string(&evaluate(&asserter, &dragees)).unwrap();
        let second = serde_json::to_string(&evaluate(&asserter, &dragees)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_rule_reports_partition_the_full_report(shapes in arb_rules(), dragees in arb_dragees()) {
        let asserter = build(shapes);
        let full = evaluate(&asserter, &dragees);

        let mut stitched = Vec::new();
        for rule in asserter.rules() {
            let single = evaluate_single_rule(&asserter, &dragees, rule.id()).unwrap();
            prop_assert_eq!(single.stats.rules_count, 1);
            stitched.extend(single.errors);
        }
        prop_assert_eq!(stitched, full.errors);
    }

    #[test]
    fn direct_dependencies_are_declared_and_present(dragees in arb_dragees()) {
        let present: BTreeSet<&str> = dragees.iter().map(|d| d.name.as_str()).collect();
        for root in &dragees {
            let resolved = direct_dependencies(root, &dragees);
            prop_assert!(std::ptr::eq(resolved.root, root));
            let expected: Vec<&str> = root
                .depends_on
                .names()
                .filter(|name| present.contains(name))
                .collect();
            let actual: Vec<&str> = resolved.dependencies.iter().map(|d| d.name.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
