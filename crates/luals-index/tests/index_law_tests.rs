//! Property-based tests for document add/remove.
//!
//! Random edit sequences check that:
//! 1. Removing a document leaves the same observable state as never adding it
//! 2. Removing twice is the same as removing once

use crate::{DocumentContributions, TypeIndex};
use luals_common::DocumentId;
use luals_types::{LuaType, TypeFeature, TypeOperator, TypeOperatorKind};
use proptest::prelude::*;

// -- Strategies --

fn feature_strategy() -> impl Strategy<Value = TypeFeature> {
    prop_oneof![
        Just(TypeFeature::Class),
        Just(TypeFeature::Enum),
        Just(TypeFeature::Interface),
        Just(TypeFeature::Alias),
    ]
}

fn name_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Foo"), Just("Bar"), Just("Baz")]
}

fn operator_strategy() -> impl Strategy<Value = TypeOperator> {
    let operand = prop_oneof![
        Just(LuaType::integer()),
        Just(LuaType::number()),
        Just(LuaType::named("Foo")),
    ];
    let kind = prop_oneof![
        Just(TypeOperatorKind::Add),
        Just(TypeOperatorKind::Concat),
        Just(TypeOperatorKind::Lt),
    ];
    (kind, operand.clone(), operand.clone(), operand)
        .prop_map(|(kind, left, right, result)| TypeOperator::binary(kind, left, right, result))
}

fn contributions_strategy() -> impl Strategy<Value = DocumentContributions> {
    (
        prop::collection::vec(operator_strategy(), 0..4),
        prop::collection::vec((name_strategy(), feature_strategy()), 0..4),
    )
        .prop_map(|(operators, features)| {
            let mut batch = DocumentContributions::new();
            for operator in operators {
                batch.add_operator(operator);
            }
            for (name, feature) in features {
                batch.add_feature(name, feature);
            }
            batch
        })
}

/// Everything a caller can observe through queries.
fn snapshot(index: &TypeIndex) -> Vec<String> {
    let mut lines = vec![
        format!("kinds={}", index.operator_kind_count()),
        format!("names={}", index.feature_name_count()),
        format!("docs={}", index.document_count()),
    ];
    for kind in TypeOperatorKind::ALL {
        let operators: Vec<_> = index.operators(kind).collect();
        lines.push(format!("{kind}: {operators:?}"));
    }
    for name in ["Foo", "Bar", "Baz"] {
        let features: Vec<_> = index.features_of(name).collect();
        lines.push(format!("{name}: {features:?} -> {}", index.get_feature(name)));
    }
    lines
}

// -- Property Tests --

proptest! {
    #[test]
    fn prop_remove_restores_state_without_document(
        before in prop::collection::vec(contributions_strategy(), 0..4),
        removed in contributions_strategy(),
    ) {
        let target = DocumentId::new(100);

        let mut expected = TypeIndex::new();
        let mut actual = TypeIndex::new();
        for (i, batch) in before.into_iter().enumerate() {
            let document = DocumentId::new(i as u32);
            expected.add_contributions(document, batch.clone());
            actual.add_contributions(document, batch);
        }

        actual.add_contributions(target, removed);
        actual.remove(target);
        prop_assert_eq!(snapshot(&actual), snapshot(&expected));

        actual.remove(target);
        prop_assert_eq!(snapshot(&actual), snapshot(&expected));
    }
}
