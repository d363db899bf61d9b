//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - exclusion of exported names and deduplication of the report
//! - isolation from remote references, parameter types and user type arguments
//! - determinism of the per-module analysis and the whole engine

use crate::analysis::analyze_module;
use crate::engine::evaluate;
use crate::policy::AnalysisOptions;
use crate::test_support::{config, found, model};
use proptest::prelude::*;
use std::collections::HashSet;
use typeleak_types::{DocEntry, FunctionSignature, Severity, TypeExpr};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Names that may legitimately show up in a report.
fn arb_audited_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["t0", "t1", "t2", "t3", "t4", "t5"])
}

/// Names that only ever appear nested as a user type's arguments.
fn arb_nested_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["n0", "n1", "n2"])
}

/// Names that only ever appear in parameter position.
fn arb_param_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["p0", "p1", "p2"])
}

fn arb_leaf() -> impl Strategy<Value = TypeExpr> {
    prop_oneof![
        3 => arb_audited_name().prop_map(|n| TypeExpr::user(n, vec![])),
        1 => "[A-Z]".prop_map(|v| TypeExpr::var(&v)),
        1 => "[a-z]{1,5}".prop_map(|a| TypeExpr::atom(&a)),
        1 => Just(TypeExpr::MapAny),
        1 => (-5i64..5).prop_map(TypeExpr::integer),
        1 => Just(TypeExpr::op("-", TypeExpr::integer(1))),
        // Remote names collide with nothing local, so they must never surface.
        1 => Just(TypeExpr::remote("other_mod", "ghost", vec![])),
    ]
}

fn arb_nested_args() -> impl Strategy<Value = Vec<TypeExpr>> {
    prop::collection::vec(arb_nested_name().prop_map(|n| TypeExpr::user(n, vec![])), 0..3)
}

fn arb_expr() -> impl Strategy<Value = TypeExpr> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(TypeExpr::union),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|args| TypeExpr::compound("tuple", args)),
            ("[A-Z][a-z]{0,3}", inner.clone())
                .prop_map(|(label, expr)| TypeExpr::annotated(&label, expr)),
            (arb_audited_name(), arb_nested_args())
                .prop_map(|(name, args)| TypeExpr::user(name, args)),
        ]
    })
}

fn arb_params() -> impl Strategy<Value = Vec<TypeExpr>> {
    prop::collection::vec(arb_param_name().prop_map(|n| TypeExpr::user(n, vec![])), 0..3)
}

fn arb_signature() -> impl Strategy<Value = FunctionSignature> {
    (
        arb_params(),
        arb_expr(),
        prop::collection::vec(("[A-Z]", arb_expr()), 0..3),
    )
        .prop_map(|(params, result, constraints)| {
            constraints
                .into_iter()
                .fold(FunctionSignature::plain(params, result), |sig, (var, bound)| {
                    sig.with_constraint(&var, bound)
                })
        })
}

fn arb_entries() -> impl Strategy<Value = Vec<DocEntry>> {
    (
        prop::collection::vec((arb_audited_name(), 0u32..3), 0..5),
        prop::collection::vec(prop::option::weighted(0.9, arb_signature()), 0..6),
        0usize..3,
    )
        .prop_map(|(types, functions, callbacks)| {
            let mut entries: Vec<DocEntry> = types
                .into_iter()
                .map(|(name, arity)| DocEntry::exported_type(name, arity))
                .collect();
            for (i, sig) in functions.into_iter().enumerate() {
                entries.push(DocEntry::function(
                    &format!("f{i}"),
                    i as u32,
                    sig.map(|s| s.to_json()),
                ));
            }
            for i in 0..callbacks {
                entries.push(DocEntry::callback(&format!("cb{i}"), 1));
            }
            entries
        })
}

fn exported_names(entries: &[DocEntry]) -> HashSet<String> {
    entries
        .iter()
        .filter(|e| e.kind == typeleak_types::EntryKind::Type)
        .map(|e| e.name.clone())
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn report_never_contains_exported_names(entries in arb_entries()) {
        let report = analyze_module("m", &entries, AnalysisOptions::default())
            .expect("generated signatures are well formed");
        let exported = exported_names(&entries);
        for name in &report.types {
            prop_assert!(!exported.contains(name), "{} is exported", name);
        }
    }

    #[test]
    fn report_has_no_duplicates(entries in arb_entries()) {
        let report = analyze_module("m", &entries, AnalysisOptions::default())
            .expect("generated signatures are well formed");
        let distinct: HashSet<&String> = report.types.iter().collect();
        prop_assert_eq!(distinct.len(), report.types.len());
    }

    #[test]
    fn only_audited_positions_contribute(entries in arb_entries()) {
        let report = analyze_module("m", &entries, AnalysisOptions::default())
            .expect("generated signatures are well formed");
        for name in &report.types {
            prop_assert!(name.starts_with('t'), "unexpected name {}", name);
        }
    }

    #[test]
    fn analysis_is_idempotent(entries in arb_entries()) {
        let first = analyze_module("m", &entries, AnalysisOptions::default());
        let second = analyze_module("m", &entries, AnalysisOptions::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn opt_in_options_only_add_names(entries in arb_entries()) {
        let base = analyze_module("m", &entries, AnalysisOptions::default())
            .expect("generated signatures are well formed");
        let wide = analyze_module(
            "m",
            &entries,
            AnalysisOptions { audit_parameters: true, recurse_type_arguments: true },
        )
        .expect("generated signatures are well formed");
        let wide_set: HashSet<&String> = wide.types.iter().collect();
        for name in &base.types {
            prop_assert!(wide_set.contains(name));
        }
        prop_assert!(!wide.types.iter().any(|n| n == "ghost"));
    }

    #[test]
    fn engine_is_deterministic(a in arb_entries(), b in arb_entries()) {
        let docs = model(vec![found("a", a), found("b", b)]);
        let cfg = config(Severity::Warning);
        let first = evaluate(&docs, &cfg);
        let second = evaluate(&docs, &cfg);
        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.data, second.data);
        prop_assert_eq!(first.verdict, second.verdict);
    }
}
