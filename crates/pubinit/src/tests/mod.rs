mod fixtures;
mod rules;

use crate::prelude::*;

pub fn annotated(name: &str, kind: DeclKind, members: Vec<Member>) -> Declaration {
    Declaration {
        name: name.to_string(),
        kind,
        attrs: vec![Attribute {
            name: MACRO_NAME.to_string(),
            span: Span::new(0, 11),
        }],
        members,
    }
}

pub fn stored(name: &str, ty: TypeExpr, mutability: Mutability) -> Member {
    Member {
        name: name.to_string(),
        ty,
        mutability,
        scope: Scope::Instance,
        default: None,
        accessor: AccessorKind::Stored,
    }
}
