pub mod classify;
pub mod decl;
pub mod diagnostic;
pub mod synthesize;
pub mod validate;

#[cfg(test)]
mod tests;

/// Name of the annotation that triggers initializer synthesis.
pub const MACRO_NAME: &str = "PublicInit";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        MACRO_NAME,
        classify::{ParticipatingMember, Qualifier, classify},
        decl::{
            AccessorKind, Attribute, DeclKind, Declaration, Member, Mutability, Scope, TypeExpr,
            TypeShape,
        },
        diagnostic::{Diagnostic, Severity, Span},
        expand,
        synthesize::{Assignment, Initializer, Parameter, synthesize},
        validate::{TargetKind, validate},
    };
    pub use serde::{Deserialize, Serialize};
}

use crate::prelude::*;

/// Expand one annotated declaration into the text of a synthesized
/// `public init`.
///
/// The single host-facing entry point: validation, member classification
/// and signature synthesis run in order, and the rendered declaration is
/// handed back for the host to splice into the type's member list. On an
/// unsupported declaration shape the one diagnostic comes back instead and
/// no text is produced.
pub fn expand(decl: &Declaration) -> Result<String, Diagnostic> {
    validate(decl)?;
    let members = classify(decl);

    Ok(synthesize(&members).render())
}
