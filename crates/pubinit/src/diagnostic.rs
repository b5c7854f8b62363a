use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// Diagnostic
///
/// The only failure the transform produces. Anchored at the span of the
/// triggering attribute so the host can surface it at the annotation site.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{message}")]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    /// Unsupported declaration shape, the one error this transform reports.
    #[must_use]
    pub fn unsupported_declaration(decl: &Declaration) -> Self {
        Self {
            severity: Severity::Error,
            message: format!("'@{MACRO_NAME}' can only be applied to a struct or a class."),
            span: decl.diagnostic_span(),
        }
    }
}

///
/// Severity
///

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
}

///
/// Span
///
/// Byte-offset range into the host's source buffer. Opaque to the core and
/// echoed back unchanged on diagnostics.
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}
