use crate::prelude::*;

///
/// TargetKind
///
/// The two declaration shapes initializer synthesis supports.
///

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Record-like value type.
    Struct,
    /// Reference type.
    Class,
}

/// Check that the annotated declaration is a shape an initializer can be
/// synthesized for. Everything other than a struct or a class gets exactly
/// one error diagnostic and no output.
pub fn validate(decl: &Declaration) -> Result<TargetKind, Diagnostic> {
    match decl.kind {
        DeclKind::Struct => Ok(TargetKind::Struct),
        DeclKind::Class => Ok(TargetKind::Class),
        DeclKind::Enum | DeclKind::Protocol | DeclKind::Actor | DeclKind::Extension => {
            Err(Diagnostic::unsupported_declaration(decl))
        }
    }
}
