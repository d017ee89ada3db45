use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Const,
    Var,
    Procedure,
    Call,
    Begin,
    End,
    If,
    Then,
    While,
    Do,
    Odd,
    Ident,
    Number,
    Assign,
    Write,
    LParen,
    RParen,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    Hash,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    Comma,
    Dot,
    Semicolon,
    // Never scanned; the parser reclassifies a leading sign into these
    UnaryPlus,
    UnaryMinus,
    Eof,
}

impl TokenKind {
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word.to_ascii_lowercase().as_str() {
            "const" => TokenKind::Const,
            "var" => TokenKind::Var,
            "procedure" => TokenKind::Procedure,
            "call" => TokenKind::Call,
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "odd" => TokenKind::Odd,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Const => "const",
            TokenKind::Var => "var",
            TokenKind::Procedure => "procedure",
            TokenKind::Call => "call",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Odd => "odd",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Assign => ":=",
            TokenKind::Write => "!",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Equal => "=",
            TokenKind::Hash => "#",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEqual => "<=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEqual => ">=",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::UnaryPlus => "unary +",
            TokenKind::UnaryMinus => "unary -",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub value: Option<i64>,
    pub line: usize,
}

/// Terminal token handed out once the stream is exhausted.
pub static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    text: String::new(),
    value: None,
    line: 0,
};

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
            line,
        }
    }

    pub fn number(value: i64, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
            value: Some(value),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// The same sign token reclassified as a prefix operator.
    pub fn to_unary(&self) -> Option<Token> {
        let kind = match self.kind {
            TokenKind::Plus => TokenKind::UnaryPlus,
            TokenKind::Minus => TokenKind::UnaryMinus,
            _ => return None,
        };
        Some(Token {
            kind,
            ..self.clone()
        })
    }

    /// Lexeme as shown in diagnostics.
    pub fn lexeme(&self) -> String {
        if self.kind == TokenKind::Eof {
            TokenKind::Eof.to_string()
        } else {
            self.text.clone()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "Ident({})", self.text),
            TokenKind::Number => write!(f, "Number({})", self.value.unwrap_or_default()),
            kind => write!(f, "{:?}", kind),
        }
    }
}
