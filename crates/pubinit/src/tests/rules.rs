use crate::{prelude::*, tests::stored};

#[test]
fn escaping_is_required_only_for_bare_function_types() {
    assert!(TypeExpr::function("() -> Void").requires_escaping());
    assert!(TypeExpr::function("(Int) -> String").requires_escaping());
    assert!(!TypeExpr::optional_function("(() -> Void)?").requires_escaping());
    assert!(!TypeExpr::nominal("Int").requires_escaping());
    assert!(!TypeExpr::nominal("Double?").requires_escaping());
}

#[test]
fn fixed_with_default_needs_both_conditions() {
    let mut member = stored("x", TypeExpr::nominal("Int"), Mutability::Let);
    assert!(!member.is_fixed_with_default());

    member.default = Some("5".to_string());
    assert!(member.is_fixed_with_default());
    assert!(!member.participates());

    member.mutability = Mutability::Var;
    assert!(!member.is_fixed_with_default());
    assert!(member.participates());
}

#[test]
fn accessor_blocks_never_participate() {
    let mut member = stored("x", TypeExpr::nominal("Int"), Mutability::Var);
    assert!(member.participates());

    member.accessor = AccessorKind::Computed;
    assert!(!member.participates());

    member.accessor = AccessorKind::GetSet;
    assert!(!member.participates());
}
