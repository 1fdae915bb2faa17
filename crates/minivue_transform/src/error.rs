use minivue_core::{Severity, SeverityLevel};
use swc_core::common::{Span, Spanned};
use thiserror::Error;

/// A diagnostic produced by a transform pass. Severities follow the
/// compiler's containment model: warnings leave output untouched,
/// recoverable errors degrade the affected artifact of one file.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

#[derive(Debug, Error)]
#[error("{kind}")]
pub struct TemplateError {
    pub span: Span,
    pub kind: TemplateErrorKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateErrorKind {
    #[error("modifier .{modifier} is not supported yet (supported: .stop/.catch, .mut, .capture, .capture.catch)")]
    UnknownEventModifier { modifier: String },

    #[error("malformed loop expression `{expression}` (expected `item in list` or `(item, index) in list`)")]
    MalformedLoopExpression { expression: String },

    #[error("could not parse asset base URL `{base}`")]
    AssetBaseUrlParseFailed { base: String },

    #[error("could not decode asset URL `{url}`")]
    AssetUrlDecodeFailed { url: String },
}

#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ScriptError {
    pub span: Span,
    pub kind: ScriptErrorKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptErrorKind {
    #[error("{name}() argument is not literal data and was ignored")]
    MalformedMacroArgument { name: &'static str },

    #[error("{name}() called without an argument")]
    MissingMacroArgument { name: &'static str },
}

impl Severity for TransformError {
    fn severity(&self) -> SeverityLevel {
        match self {
            TransformError::Template(e) => match e.kind {
                // Loop expressions come from downstream expression parsing:
                // a failure empties the whole template's generated markup.
                TemplateErrorKind::MalformedLoopExpression { .. } => {
                    SeverityLevel::RecoverableError
                }
                TemplateErrorKind::UnknownEventModifier { .. }
                | TemplateErrorKind::AssetBaseUrlParseFailed { .. }
                | TemplateErrorKind::AssetUrlDecodeFailed { .. } => SeverityLevel::Warning,
            },
            TransformError::Script(e) => match e.kind {
                ScriptErrorKind::MalformedMacroArgument { .. }
                | ScriptErrorKind::MissingMacroArgument { .. } => SeverityLevel::Warning,
            },
        }
    }
}

impl Spanned for TransformError {
    fn span(&self) -> Span {
        match self {
            TransformError::Template(e) => e.span,
            TransformError::Script(e) => e.span,
        }
    }
}
