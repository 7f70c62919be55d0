//! Errors raised while interpreting a script.
//!
//! Every variant is fatal to the current run. An executor-requested abort is
//! not an error and never shows up here (see [`crate::model::Outcome`]).

use thiserror::Error;

/// The structural violation behind a [`ScriptError::Syntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// `#` while an instruction is being assembled.
    CommentInInstruction,
    /// `{` with nothing before it to evaluate.
    ContextOpenWithoutInstruction,
    /// `}` while only the root context is open.
    ContextCloseWithoutContext,
    /// `$` in the middle of a token.
    VariableMidToken,
    /// End of script inside a quoted literal.
    UnterminatedLiteral,
    /// End of script with an instruction missing its `;`.
    UnterminatedInstruction,
}

impl SyntaxErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::CommentInInstruction => {
                "unexpected \"#\": cannot start a comment within an instruction"
            }
            Self::ContextOpenWithoutInstruction => {
                "unexpected \"{\": no preceding conditional statement"
            }
            Self::ContextCloseWithoutContext => "unexpected \"}\": not in a context block",
            Self::VariableMidToken => "unexpected variable reference in the middle of a token",
            Self::UnterminatedLiteral => {
                "unexpected end of script: unterminated string literal (missing closing quote?)"
            }
            Self::UnterminatedInstruction => {
                "unexpected end of script: unterminated instruction (missing \";\"?)"
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Syntax error at line {line}, column {column}: {}", .kind.message())]
    Syntax {
        kind: SyntaxErrorKind,
        line: usize,
        column: usize,
    },

    #[error("Reference error at line {line}, column {column}: variable ${name} is not defined")]
    Reference {
        name: String,
        line: usize,
        column: usize,
    },
}

impl ScriptError {
    /// The syntax error kind, if this is a syntax error.
    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            Self::Syntax { kind, .. } => Some(*kind),
            Self::Reference { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
