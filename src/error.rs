use std::fmt::{self, Display};
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// The complete taxonomy of lexical diagnostics. Both are non-fatal: the
/// scanner reports them and keeps going.
#[derive(Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    UnexpectedCharacter { line: usize },
    UnterminatedString { line: usize },
}

#[derive(Debug, PartialEq, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn unexpected_character(line: usize, c: char) -> Error {
        let kind = ErrorKind::UnexpectedCharacter { line };
        Error { kind, message: format!("Unexpected character '{}'.", c) }
    }

    pub fn unterminated_string(line: usize) -> Error {
        let kind = ErrorKind::UnterminatedString { line };
        Error { kind, message: "Unterminated string literal.".into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        match self.kind {
            ErrorKind::UnexpectedCharacter { line } => line,
            ErrorKind::UnterminatedString { line } => line,
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line(), self.message)
    }
}
