use crate::prelude::*;

// Declarations arrive from the host as parsed records; the JSON form here
// mirrors what a host would hand across a process boundary.

#[test]
fn declaration_deserializes_from_a_host_payload_and_expands() {
    let json = r#"{
        "name": "AccessibilityInformation",
        "kind": "Struct",
        "attrs": [{ "name": "PublicInit", "span": { "start": 0, "end": 11 } }],
        "members": [
            { "name": "id", "ty": { "text": "String" }, "mutability": "Let" },
            { "name": "action", "ty": { "text": "() -> Void", "shape": "Function" }, "mutability": "Let" }
        ]
    }"#;

    let decl: Declaration = serde_json::from_str(json).unwrap();
    assert_eq!(decl.members[0].accessor, AccessorKind::Stored);
    assert_eq!(decl.members[0].scope, Scope::Instance);

    let rendered = expand(&decl).unwrap();
    assert!(rendered.contains("id: String"));
    assert!(rendered.contains("action: @escaping () -> Void"));
}

#[test]
fn declaration_survives_a_serialize_round_trip() {
    let decl = Declaration {
        name: "Point".to_string(),
        kind: DeclKind::Struct,
        attrs: vec![Attribute {
            name: MACRO_NAME.to_string(),
            span: Span::new(4, 15),
        }],
        members: vec![Member {
            name: "x".to_string(),
            ty: TypeExpr::nominal("Int"),
            mutability: Mutability::Var,
            scope: Scope::Instance,
            default: Some("0".to_string()),
            accessor: AccessorKind::Stored,
        }],
    };

    let json = serde_json::to_string(&decl).unwrap();
    let back: Declaration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, decl);
    assert_eq!(expand(&back).unwrap(), expand(&decl).unwrap());
}
