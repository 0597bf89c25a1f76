use internals_core::model::{bool_str, ClassKind, Visibility};
use internals_core::version;

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn class_kind_checks_interface_before_trait() {
    assert_eq!(ClassKind::from_flags(true, true), ClassKind::Interface);
    assert_eq!(ClassKind::from_flags(false, true), ClassKind::Trait);
    assert_eq!(ClassKind::from_flags(false, false), ClassKind::Class);
    assert_eq!(ClassKind::Trait.as_str(), "trait");
}

#[test]
fn visibility_checks_protected_before_private() {
    assert_eq!(Visibility::from_flags(true, true), Visibility::Protected);
    assert_eq!(Visibility::from_flags(false, true), Visibility::Private);
    assert_eq!(Visibility::from_flags(false, false), Visibility::Public);
}

#[test]
fn bool_str_is_literal_text() {
    assert_eq!(bool_str(true), "true");
    assert_eq!(bool_str(false), "false");
}
