use std::io;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Pl0Error {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Lexical analysis errors
    #[error("Lexer error at line {line}: unrecognized input at offset {offset}: {snippet:?}")]
    LexError {
        line: usize,
        offset: usize,
        snippet: String,
    },

    #[error("Unterminated comment at line {line}")]
    UnterminatedComment { line: usize },

    #[error("Invalid number '{number}' at line {line}")]
    InvalidNumber { number: String, line: usize },

    // Parsing errors
    #[error("Syntax error at line {line}: expected '{expected}', found '{found}'")]
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("Parse error at line {line}: {message}")]
    ParseError { message: String, line: usize },

    // Expression resolution errors
    #[error("Expression error at line {line}: {message}")]
    ExpressionError { message: String, line: usize },

    #[error("Mismatched parentheses at line {line}: {message}")]
    ParenMismatch { message: String, line: usize },

    // Emission errors
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    // Compilation pipeline errors
    #[error("Compilation error in {stage}: {message}")]
    CompilationError { stage: String, message: String },
}

impl Pl0Error {
    /// Create a syntax error
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        Pl0Error::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    pub fn parse_error(message: impl Into<String>, line: usize) -> Self {
        Pl0Error::ParseError {
            message: message.into(),
            line,
        }
    }

    pub fn expression_error(message: impl Into<String>, line: usize) -> Self {
        Pl0Error::ExpressionError {
            message: message.into(),
            line,
        }
    }

    pub fn paren_mismatch(message: impl Into<String>, line: usize) -> Self {
        Pl0Error::ParenMismatch {
            message: message.into(),
            line,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Pl0Error::InternalConsistency(message.into())
    }

    /// Create a compilation error for a specific stage
    pub fn compilation_error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Pl0Error::CompilationError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

// Type alias for Result with Pl0Error
pub type Pl0Result<T> = Result<T, Pl0Error>;
