use thiserror::Error;

use crate::model::{Diagnostic, DiagnosticKind};

/// Every problem the comment checker can report. The `Display` output is the
/// user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    // malformed tags
    #[error("Malformed @author tag, must have an author name.")]
    MalformedAuthor,
    #[error("Malformed @deprecated tag, must have a description")]
    MalformedDeprecated,
    #[error("Malformed @{tag} tag, must at least specify the linked type.")]
    MalformedReference { tag: String },
    #[error("Malformed @param tag '{text}', needs to have parameter name and description")]
    MalformedParam { text: String },
    #[error("Malformed @return tag, needs to have a description")]
    MalformedReturn,
    #[error("Malformed @since tag, must have text.")]
    MalformedSince,
    #[error("Malformed @{tag} tag, must at least specify the exception class")]
    MalformedThrows { tag: String },
    #[error("Malformed @value tag, must have a JavaDoc reference.")]
    MalformedValue,
    #[error("Malformed @version tag, must have a version specification.")]
    MalformedVersion,
    #[error("Malformed overload specification in @{tag} tag, missing ')'")]
    MalformedOverload { tag: String },

    // tags used in the wrong place
    #[error("Illegal @author tag, may only be specified on classes, interfaces and enums")]
    IllegalAuthor,
    #[error("@inheritDoc may not be specified on non-override methods")]
    InheritDocOnNonOverride,
    #[error("@inheritDoc may not be specified on classes without a super class or a class implementing interfaces")]
    InheritDocWithoutSupertype,
    #[error("Illegal @param tag '{text}', may only be specified on methods and constructors or generic types")]
    IllegalParam { text: String },
    #[error("Illegal @return tag, may only be specified on methods")]
    IllegalReturn,
    #[error("Illegal @return tag, may not be specified on void methods")]
    ReturnOnVoidMethod,
    #[error("Illegal @{tag} tag, may only be specified on methods and constructors")]
    IllegalThrows { tag: String },
    #[error("Illegal @version tag, may only be specified on classes, interfaces and enums")]
    IllegalVersion,

    // resolution failures
    #[error("Exception '{name}' could not be resolved")]
    UnresolvedException { name: String },
    #[error("Referenced type '{name}' could not be resolved")]
    UnresolvedReferencedType { name: String },
    #[error("Specified type '{name}' not found")]
    UnresolvedSpecifiedType { name: String },
    #[error("Could not resolve argument type '{name}'")]
    UnresolvedArgumentType { name: String },
    #[error("Method or field of tag @{tag} '{text}' not present in type '{type_name}'")]
    MemberNotFound {
        tag: String,
        text: String,
        type_name: String,
    },
    #[error("Overloaded constructor '{signature}' not found in type '{type_name}'")]
    ConstructorNotFound { signature: String, type_name: String },
    #[error("Overloaded method '{signature}' not found in type '{type_name}'")]
    MethodNotFound { signature: String, type_name: String },

    // documentation out of sync with the declaration
    #[error("Parameter '{name}' is undocumented")]
    UndocumentedParameter { name: String },
    #[error("Exception '{name}' is undocumented")]
    UndocumentedException { name: String },
    #[error("Methods returning anything other than void must have a @return tag")]
    MissingReturn,
    #[error("Parameter '{name}' specified in JavaDoc is not a parameter or generic type of the documented item")]
    UnknownParameter { name: String },
    #[error("Exception '{name}' specified in JavaDoc is not thrown by the documented method")]
    ExceptionNotThrown { name: String },

    #[error("Comment is too short: need {minimum} actual text characters, got {actual}")]
    CommentTooShort { minimum: usize, actual: usize },
    #[error("Method '{name}' overrides a supertype method but is missing @Override")]
    MissingOverride { name: String },
}

impl Violation {
    pub fn kind(&self) -> DiagnosticKind {
        use Violation::*;
        match self {
            MalformedAuthor
            | MalformedDeprecated
            | MalformedReference { .. }
            | MalformedParam { .. }
            | MalformedReturn
            | MalformedSince
            | MalformedThrows { .. }
            | MalformedValue
            | MalformedVersion
            | MalformedOverload { .. } => DiagnosticKind::MalformedTag,
            IllegalAuthor
            | InheritDocOnNonOverride
            | InheritDocWithoutSupertype
            | IllegalParam { .. }
            | IllegalReturn
            | ReturnOnVoidMethod
            | IllegalThrows { .. }
            | IllegalVersion => DiagnosticKind::IllegalContext,
            UnresolvedException { .. }
            | UnresolvedReferencedType { .. }
            | UnresolvedSpecifiedType { .. }
            | UnresolvedArgumentType { .. }
            | MemberNotFound { .. }
            | ConstructorNotFound { .. }
            | MethodNotFound { .. } => DiagnosticKind::UnresolvedType,
            UndocumentedParameter { .. } | UndocumentedException { .. } | MissingReturn => {
                DiagnosticKind::Undocumented
            }
            UnknownParameter { .. } | ExceptionNotThrown { .. } => {
                DiagnosticKind::StaleDocumentation
            }
            CommentTooShort { .. } => DiagnosticKind::CommentTooShort,
            MissingOverride { .. } => DiagnosticKind::MissingOverride,
        }
    }

    /// Attach a comment-relative line.
    pub fn at(self, line: usize) -> Diagnostic {
        Diagnostic {
            kind: self.kind(),
            message: self.to_string(),
            line,
        }
    }
}

/// Receives diagnostics as the checker produces them. Lines are relative to
/// the first line of the checked comment.
pub trait DiagnosticSink {
    fn report(&mut self, violation: Violation, line: usize);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, violation: Violation, line: usize) {
        self.push(violation.at(line));
    }
}
