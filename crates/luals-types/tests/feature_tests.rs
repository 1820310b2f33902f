use super::*;

#[test]
fn test_default_feature_is_class() {
    assert_eq!(TypeFeature::default(), TypeFeature::Class);
}

#[test]
fn test_default_precedence_follows_declaration_order() {
    let precedence = FeaturePrecedence::default();
    assert_eq!(precedence.order(), TypeFeature::ALL);
    assert!(precedence.rank(TypeFeature::Interface) > precedence.rank(TypeFeature::Class));
    assert_eq!(
        precedence.max([TypeFeature::Class, TypeFeature::Interface, TypeFeature::Enum]),
        Some(TypeFeature::Interface)
    );
    assert_eq!(precedence.max([]), None);
}

#[test]
fn test_custom_precedence() {
    let precedence = FeaturePrecedence::from_order(&[
        TypeFeature::Alias,
        TypeFeature::Interface,
        TypeFeature::Enum,
        TypeFeature::Class,
    ])
    .expect("valid order");

    assert_eq!(
        precedence.max([TypeFeature::Interface, TypeFeature::Class]),
        Some(TypeFeature::Class)
    );
    assert_eq!(precedence.order()[0], TypeFeature::Alias);
}

#[test]
fn test_invalid_precedence_orders() {
    assert!(FeaturePrecedence::from_order(&[TypeFeature::Class]).is_none());
    assert!(
        FeaturePrecedence::from_order(&[
            TypeFeature::Class,
            TypeFeature::Class,
            TypeFeature::Enum,
            TypeFeature::Alias,
        ])
        .is_none()
    );
}

#[test]
fn test_feature_names() {
    assert_eq!(TypeFeature::Interface.to_string(), "interface");
    assert_eq!(TypeFeature::Alias.as_str(), "alias");
}
