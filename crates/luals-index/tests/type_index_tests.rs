use super::*;

fn doc(id: u32) -> DocumentId {
    DocumentId::new(id)
}

fn add_int_int() -> TypeOperator {
    TypeOperator::binary(
        TypeOperatorKind::Add,
        LuaType::integer(),
        LuaType::integer(),
        LuaType::integer(),
    )
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_binary_operator_add_and_remove() {
    let mut index = TypeIndex::new();
    index.add_type_operator(doc(1), add_int_int());

    let found = index
        .get_best_matched_binary_operator(
            TypeOperatorKind::Add,
            &LuaType::integer(),
            &LuaType::integer(),
        )
        .expect("registered operator");
    assert_eq!(found.result, LuaType::integer());

    index.remove(doc(1));
    assert!(
        index
            .get_best_matched_binary_operator(
                TypeOperatorKind::Add,
                &LuaType::integer(),
                &LuaType::integer(),
            )
            .is_none()
    );
    assert!(index.is_empty());
}

#[test]
fn test_binary_operator_requires_exact_operands() {
    let mut index = TypeIndex::new();
    index.add_type_operator(doc(1), add_int_int());

    // Wrong kind, swapped/mismatched operands, and a wider operand all miss.
    assert!(
        index
            .get_best_matched_binary_operator(
                TypeOperatorKind::Sub,
                &LuaType::integer(),
                &LuaType::integer(),
            )
            .is_none()
    );
    assert!(
        index
            .get_best_matched_binary_operator(
                TypeOperatorKind::Add,
                &LuaType::integer(),
                &LuaType::number(),
            )
            .is_none()
    );
    assert!(
        index
            .get_best_matched_binary_operator(
                TypeOperatorKind::Add,
                &LuaType::Any,
                &LuaType::integer(),
            )
            .is_none()
    );
}

#[test]
fn test_first_match_follows_contribution_order() {
    let mut index = TypeIndex::new();
    let first = TypeOperator::binary(
        TypeOperatorKind::Concat,
        LuaType::named("Path"),
        LuaType::string(),
        LuaType::named("Path"),
    );
    let second = TypeOperator::binary(
        TypeOperatorKind::Concat,
        LuaType::named("Path"),
        LuaType::string(),
        LuaType::string(),
    );
    index.add_type_operator(doc(2), first);
    index.add_type_operator(doc(1), second);

    let lookup = |index: &TypeIndex| {
        index
            .get_best_matched_binary_operator(
                TypeOperatorKind::Concat,
                &LuaType::named("Path"),
                &LuaType::string(),
            )
            .map(|op| op.result.clone())
    };
    assert_eq!(lookup(&index), Some(LuaType::named("Path")));

    // Re-adding the winner's document moves it behind the other one.
    index.replace_document(doc(2), {
        let mut batch = DocumentContributions::new();
        batch.add_operator(TypeOperator::binary(
            TypeOperatorKind::Concat,
            LuaType::named("Path"),
            LuaType::string(),
            LuaType::named("Path"),
        ));
        batch
    });
    assert_eq!(lookup(&index), Some(LuaType::string()));
}

#[test]
fn test_overload_set_within_one_document() {
    let mut index = TypeIndex::new();
    let vector = LuaType::named("Vector");
    index.add_type_operator(
        doc(1),
        TypeOperator::binary(TypeOperatorKind::Mul, vector.clone(), vector.clone(), vector.clone()),
    );
    index.add_type_operator(
        doc(1),
        TypeOperator::binary(
            TypeOperatorKind::Mul,
            vector.clone(),
            LuaType::number(),
            vector.clone(),
        ),
    );

    assert_eq!(index.operators(TypeOperatorKind::Mul).count(), 2);
    assert!(
        index
            .get_best_matched_binary_operator(TypeOperatorKind::Mul, &vector, &LuaType::number())
            .is_some()
    );
    assert!(
        index
            .get_best_matched_binary_operator(TypeOperatorKind::Mul, &vector, &vector)
            .is_some()
    );
}

#[test]
fn test_unary_and_index_operators() {
    let mut index = TypeIndex::new();
    let vector = LuaType::named("Vector");
    index.add_type_operator(
        doc(1),
        TypeOperator::unary(TypeOperatorKind::Unm, vector.clone(), vector.clone()),
    );
    index.add_type_operator(
        doc(1),
        TypeOperator::unary(TypeOperatorKind::Len, vector.clone(), LuaType::integer()),
    );
    index.add_type_operator(
        doc(1),
        TypeOperator::index(vector.clone(), LuaType::integer(), LuaType::number()),
    );

    let len = index
        .get_best_matched_unary_operator(TypeOperatorKind::Len, &vector)
        .expect("len operator");
    assert_eq!(len.result, LuaType::integer());
    assert!(
        index
            .get_best_matched_unary_operator(TypeOperatorKind::BNot, &vector)
            .is_none()
    );

    let indexed = index
        .get_best_matched_index_operator(&vector, &LuaType::integer())
        .expect("index operator");
    assert_eq!(indexed.result, LuaType::number());
    assert!(
        index
            .get_best_matched_index_operator(&vector, &LuaType::string())
            .is_none()
    );

    // Unary lookups never return operators of another shape.
    assert!(
        index
            .get_best_matched_unary_operator(TypeOperatorKind::Index, &vector)
            .is_none()
    );
}

// =============================================================================
// Features
// =============================================================================

#[test]
fn test_feature_defaults_to_class() {
    let index = TypeIndex::new();
    assert_eq!(index.get_feature("Unknown"), TypeFeature::Class);
}

#[test]
fn test_feature_highest_wins_across_documents() {
    let mut index = TypeIndex::new();
    index.add_feature(doc(1), "Foo", TypeFeature::Class);
    index.add_feature(doc(2), "Foo", TypeFeature::Interface);

    assert_eq!(index.get_feature("Foo"), TypeFeature::Interface);

    index.remove(doc(2));
    assert_eq!(index.get_feature("Foo"), TypeFeature::Class);

    index.remove(doc(1));
    assert_eq!(index.feature_name_count(), 0);
    assert_eq!(index.get_feature("Foo"), TypeFeature::Class);
}

#[test]
fn test_feature_uses_configured_precedence() {
    let precedence = FeaturePrecedence::from_order(&[
        TypeFeature::Alias,
        TypeFeature::Interface,
        TypeFeature::Enum,
        TypeFeature::Class,
    ])
    .expect("permutation");
    let mut index = TypeIndex::with_precedence(precedence);
    index.add_feature(doc(1), "Foo", TypeFeature::Class);
    index.add_feature(doc(2), "Foo", TypeFeature::Interface);

    assert_eq!(index.precedence(), precedence);
    assert_eq!(index.get_feature("Foo"), TypeFeature::Class);
    assert_eq!(
        index.features_of("Foo").collect::<Vec<_>>(),
        vec![TypeFeature::Class, TypeFeature::Interface]
    );
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_remove_is_idempotent_and_leaves_no_empty_keys() {
    let mut index = TypeIndex::new();
    index.add_type_operator(doc(1), add_int_int());
    index.add_feature(doc(1), "Foo", TypeFeature::Enum);
    index.add_feature(doc(2), "Bar", TypeFeature::Class);

    index.remove(doc(1));
    assert_eq!(index.operator_kind_count(), 0);
    assert_eq!(index.feature_name_count(), 1);
    assert!(!index.contains_document(doc(1)));
    assert!(index.contains_document(doc(2)));

    index.remove(doc(1));
    index.remove(doc(42));
    assert_eq!(index.operator_kind_count(), 0);
    assert_eq!(index.feature_name_count(), 1);
    assert_eq!(index.document_count(), 1);
    assert_eq!(index.get_feature("Bar"), TypeFeature::Class);
}

#[test]
fn test_remove_keeps_other_documents_on_shared_keys() {
    let mut index = TypeIndex::new();
    index.add_type_operator(doc(1), add_int_int());
    index.add_type_operator(doc(2), add_int_int());

    index.remove(doc(1));
    assert_eq!(index.operator_kind_count(), 1);
    assert_eq!(index.operators(TypeOperatorKind::Add).count(), 1);
}

#[test]
fn test_add_contributions_and_clear() {
    let mut batch = DocumentContributions::new();
    assert!(batch.is_empty());
    batch.add_operator(add_int_int());
    batch.add_feature("Foo", TypeFeature::Alias);
    assert_eq!(batch.len(), 2);

    let mut index = TypeIndex::new();
    index.add_contributions(doc(3), batch);
    assert_eq!(index.get_feature("Foo"), TypeFeature::Alias);
    assert_eq!(index.operator_kind_count(), 1);

    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.document_count(), 0);
}

#[test]
fn test_replace_document_with_empty_batch_evicts() {
    let mut index = TypeIndex::new();
    index.add_feature(doc(1), "Foo", TypeFeature::Interface);

    index.replace_document(doc(1), DocumentContributions::new());
    assert!(index.is_empty());
    assert!(!index.contains_document(doc(1)));
}
