use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::lexer::ERROR_SNIPPET_LEN;
use crate::utils::errors::{Pl0Error, Pl0Result};
use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Whitespace,
    Comment,
    Word,
    Number,
    Symbol(TokenKind),
}

lazy_static! {
    // Tried in order; multi-character symbols come before their prefixes.
    static ref PATTERNS: Vec<(Pattern, Regex)> = [
        (Pattern::Whitespace, r"\A\s+"),
        (Pattern::Comment, r"\A\{[^}]*\}"),
        (Pattern::Word, r"\A[A-Za-z_][A-Za-z0-9_]*"),
        (Pattern::Number, r"\A[0-9]+"),
        (Pattern::Symbol(TokenKind::Assign), r"\A:="),
        (Pattern::Symbol(TokenKind::LessThanEqual), r"\A<="),
        (Pattern::Symbol(TokenKind::GreaterThanEqual), r"\A>="),
        (Pattern::Symbol(TokenKind::Hash), r"\A(?:#|<>)"),
        (Pattern::Symbol(TokenKind::LessThan), r"\A<"),
        (Pattern::Symbol(TokenKind::GreaterThan), r"\A>"),
        (Pattern::Symbol(TokenKind::Equal), r"\A="),
        (Pattern::Symbol(TokenKind::Write), r"\A!"),
        (Pattern::Symbol(TokenKind::LParen), r"\A\("),
        (Pattern::Symbol(TokenKind::RParen), r"\A\)"),
        (Pattern::Symbol(TokenKind::Multiply), r"\A\*"),
        (Pattern::Symbol(TokenKind::Divide), r"\A/"),
        (Pattern::Symbol(TokenKind::Plus), r"\A\+"),
        (Pattern::Symbol(TokenKind::Minus), r"\A-"),
        (Pattern::Symbol(TokenKind::Comma), r"\A,"),
        (Pattern::Symbol(TokenKind::Dot), r"\A\."),
        (Pattern::Symbol(TokenKind::Semicolon), r"\A;"),
    ]
    .iter()
    .map(|(pattern, re)| (*pattern, Regex::new(re).unwrap()))
    .collect();
}

pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
        }
    }

    pub fn scan(mut self) -> Pl0Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while self.offset < self.source.len() {
            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }
        tokens.push(Token::eof(self.line));
        Ok(tokens)
    }

    fn scan_token(&mut self) -> Pl0Result<Option<Token>> {
        let source = self.source;
        let rest = &source[self.offset..];
        let (pattern, lexeme) = PATTERNS
            .iter()
            .find_map(|(pattern, re)| re.find(rest).map(|m| (*pattern, m.as_str())))
            .ok_or_else(|| self.unrecognized(rest))?;

        let line = self.line;
        self.offset += lexeme.len();
        self.line += lexeme.matches('\n').count();

        let token = match pattern {
            Pattern::Whitespace | Pattern::Comment => None,
            Pattern::Word => Some(match TokenKind::keyword(lexeme) {
                Some(kind) => Token::new(kind, lexeme, line),
                None => Token::new(TokenKind::Ident, lexeme, line),
            }),
            Pattern::Number => {
                let value = lexeme.parse::<i64>().map_err(|_| Pl0Error::InvalidNumber {
                    number: lexeme.to_string(),
                    line,
                })?;
                Some(Token::number(value, lexeme, line))
            }
            Pattern::Symbol(kind) => Some(Token::new(kind, lexeme, line)),
        };
        Ok(token)
    }

    fn unrecognized(&self, rest: &str) -> Pl0Error {
        if rest.starts_with('{') {
            return Pl0Error::UnterminatedComment { line: self.line };
        }
        Pl0Error::LexError {
            line: self.line,
            offset: self.offset,
            snippet: rest.chars().take(ERROR_SNIPPET_LEN).collect(),
        }
    }
}

pub fn scan(source: &str) -> Pl0Result<Vec<Token>> {
    Lexer::new(source).scan()
}
