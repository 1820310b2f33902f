//! End-to-end edit-and-reanalyze lifecycle through the public API.

use luals::AnalyzerConfig;
use luals::common::{DocumentId, SyntaxId};
use luals::index::{DocumentContributions, SharedTypeIndex};
use luals::types::{
    DefinitionStore, LuaType, MemberInfo, NamedTypeDetail, SearchContext, TupleMember,
    TypeFeature, TypeOperator, TypeOperatorKind, TypeSubstitution,
};

/// What binding one version of `vector.lua` produces.
fn bind_vector(document: DocumentId, with_unm: bool) -> (Vec<NamedTypeDetail>, DocumentContributions) {
    let vector = LuaType::named("Vector");
    let details = vec![
        NamedTypeDetail::new("Vector", TypeFeature::Class)
            .with_supers(vec![LuaType::named("Shape")])
            .with_members(vec![
                MemberInfo::new("x", LuaType::number()),
                MemberInfo::new("y", LuaType::number()),
            ])
            .with_document(document),
        NamedTypeDetail::new("Shape", TypeFeature::Interface).with_document(document),
    ];

    let mut contributions = DocumentContributions::new();
    contributions.add_feature("Vector", TypeFeature::Class);
    contributions.add_feature("Shape", TypeFeature::Interface);
    contributions.add_operator(TypeOperator::binary(
        TypeOperatorKind::Add,
        vector.clone(),
        vector.clone(),
        vector.clone(),
    ));
    if with_unm {
        contributions.add_operator(TypeOperator::unary(
            TypeOperatorKind::Unm,
            vector.clone(),
            vector,
        ));
    }
    (details, contributions)
}

#[test]
fn test_edit_and_reanalyze_lifecycle() {
    let config = AnalyzerConfig::default();
    let index = config.shared_type_index();
    let store = DefinitionStore::new();
    let vector_lua = DocumentId::new(1);
    let vector = LuaType::named("Vector");

    // First analysis.
    let (details, contributions) = bind_vector(vector_lua, true);
    for detail in details {
        store.register(detail);
    }
    index.replace_document(vector_lua, contributions);

    let ctx = SearchContext::new(&store).with_profile(config.search_profile());
    assert!(vector.sub_type_of(&LuaType::named("Shape"), &ctx));
    assert_eq!(index.get_feature("Shape"), TypeFeature::Interface);
    assert!(
        index
            .get_best_matched_unary_operator(TypeOperatorKind::Unm, &vector)
            .is_some()
    );

    // The edit drops `---@operator unm`; the document is re-bound and replaced.
    store.remove_document(vector_lua);
    let (details, contributions) = bind_vector(vector_lua, false);
    for detail in details {
        store.register(detail);
    }
    index.replace_document(vector_lua, contributions);

    assert!(
        index
            .get_best_matched_unary_operator(TypeOperatorKind::Unm, &vector)
            .is_none()
    );
    let add = index
        .get_best_matched_binary_operator(TypeOperatorKind::Add, &vector, &vector)
        .expect("add survives the edit");
    assert_eq!(add.result, vector);
    assert_eq!(index.with_index(|index| index.operators(TypeOperatorKind::Add).count()), 1);

    // Closing the document evicts everything it contributed.
    store.remove_document(vector_lua);
    index.remove_document(vector_lua);
    let ctx = SearchContext::new(&store);
    assert!(!vector.sub_type_of(&LuaType::named("Shape"), &ctx));
    assert_eq!(index.get_feature("Shape"), TypeFeature::Class);
    assert!(index.with_index(|index| index.is_empty()));
}

#[test]
fn test_feature_precedence_from_config() {
    let config = AnalyzerConfig::from_json_str(
        r#"{ "featurePrecedence": ["interface", "alias", "enum", "class"] }"#,
    )
    .expect("valid config");
    let index: SharedTypeIndex = config.shared_type_index();

    let mut a = DocumentContributions::new();
    a.add_feature("Foo", TypeFeature::Interface);
    let mut b = DocumentContributions::new();
    b.add_feature("Foo", TypeFeature::Class);
    index.replace_document(DocumentId::new(1), a);
    index.replace_document(DocumentId::new(2), b);

    assert_eq!(index.get_feature("Foo"), TypeFeature::Class);
    index.remove_document(DocumentId::new(2));
    assert_eq!(index.get_feature("Foo"), TypeFeature::Interface);
}

#[test]
fn test_generic_call_result_flattens_into_tuple() {
    // ---@generic T...
    // ---@param ... T...
    // ---@return integer, T...
    let declared = LuaType::tuple(vec![
        TupleMember::new(0, LuaType::integer()),
        TupleMember::new(1, LuaType::expand("T"))
            .with_syntax(SyntaxId::new(DocumentId::new(3), 12)),
    ]);

    let mut substitution = TypeSubstitution::new();
    substitution.insert(
        "T",
        LuaType::multi_return([LuaType::string(), LuaType::boolean()]),
    );

    let instantiated = declared.instantiate(&substitution);
    assert_eq!(instantiated.to_string(), "[integer, string, boolean]");

    let store = DefinitionStore::new();
    let ctx = SearchContext::new(&store);
    assert!(instantiated.sub_type_of(
        &LuaType::tuple_of([LuaType::integer(), LuaType::string(), LuaType::boolean()]),
        &ctx
    ));
}

#[test]
fn test_generic_class_members_through_resolver() {
    let store = DefinitionStore::new();
    store.register(
        NamedTypeDetail::new("List", TypeFeature::Class)
            .with_generic_params(vec!["T".into()])
            .with_members(vec![MemberInfo::new("items", LuaType::array(LuaType::named("T")))]),
    );
    let ctx = SearchContext::new(&store);

    let list_of_strings = LuaType::generic("List", [LuaType::string()]);
    let detail = list_of_strings.get_detail_type(&ctx).expect("declared");
    let members = detail.instantiate_members(&[LuaType::string()]);
    assert_eq!(members[0].ty, LuaType::array(LuaType::string()));
    assert_eq!(members[0].ty.to_string(), "string[]");
}
