use crate::ast::{Block, Condition, Expr, Procedure, Program, RelOp, Statement};
use crate::frontend::resolver::ExpressionResolver;
use crate::frontend::token::{Token, TokenKind, EOF_TOKEN};
use crate::semantic::symboltable::{Symbol, SymbolTable, SymbolType};
use crate::utils::errors::{Pl0Error, Pl0Result};

/// Recursive-descent parser. All state lives here, so nested blocks and
/// independent compilations never share anything.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn current(&self) -> &'a Token {
        self.tokens.get(self.position).unwrap_or(&EOF_TOKEN)
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn accept(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Pl0Result<&'a Token> {
        match self.accept(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kind.to_string())),
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> Pl0Error {
        let found = self.current();
        Pl0Error::syntax_error(expected, found.lexeme(), self.line())
    }

    fn line(&self) -> usize {
        let token = self.current();
        if token.kind == TokenKind::Eof && token.line == 0 {
            self.tokens.last().map(|t| t.line).unwrap_or(1)
        } else {
            token.line
        }
    }

    fn expect_number(&mut self) -> Pl0Result<i64> {
        let token = self.expect(TokenKind::Number)?;
        token.value.ok_or_else(|| {
            Pl0Error::syntax_error(TokenKind::Number.to_string(), token.text.clone(), token.line)
        })
    }

    /**
     * Parse a program according to the grammar:
     * program = block "."
     */
    pub fn parse(&mut self) -> Pl0Result<Program> {
        let block = self.block()?;
        self.expect(TokenKind::Dot)?;
        self.expect(TokenKind::Eof)?;
        Ok(Program::new(block))
    }

    /// Parses one standalone expression that must span the whole input.
    pub fn parse_expression(&mut self) -> Pl0Result<Expr> {
        let mut resolver = ExpressionResolver::new();
        self.expression_into(&mut resolver)?;
        if self.check(TokenKind::RParen) {
            // Surplus ')' is reported by the resolver
            resolver.process(self.advance())?;
        }
        self.expect(TokenKind::Eof)?;
        resolver.complete()?;
        resolver.tree()
    }

    fn parse_const_declarations(&mut self, table: &mut SymbolTable) -> Pl0Result<()> {
        loop {
            let ident = self.expect(TokenKind::Ident)?;
            self.expect(TokenKind::Equal)?;
            let value = self.expect_number()?;
            table.insert(Symbol::new(
                ident.text.clone(),
                SymbolType::Constant(value),
                ident.line,
            ));
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    fn parse_var_declarations(&mut self, table: &mut SymbolTable) -> Pl0Result<()> {
        loop {
            let ident = self.expect(TokenKind::Ident)?;
            table.insert(Symbol::new(ident.text.clone(), SymbolType::Variable, ident.line));
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    fn parse_procedure_declarations(&mut self) -> Pl0Result<Vec<Procedure>> {
        let mut procedures = Vec::new();
        while self.accept(TokenKind::Procedure).is_some() {
            let name = self.expect(TokenKind::Ident)?.text.clone();
            self.expect(TokenKind::Semicolon)?;
            let block = self.block()?;
            self.expect(TokenKind::Semicolon)?;
            procedures.push(Procedure::new(name, block));
        }
        Ok(procedures)
    }

    /**
     * Parse a block according to the grammar:
     * block = [ "const" ident "=" number { "," ident "=" number } ";" ]
     *         ["var" ident {"," ident} ";"]
     *         { "procedure" ident ";" block ";" } statement .
     */
    fn block(&mut self) -> Pl0Result<Block> {
        let mut symbols = SymbolTable::new();

        if self.accept(TokenKind::Const).is_some() {
            self.parse_const_declarations(&mut symbols)?;
        }

        if self.accept(TokenKind::Var).is_some() {
            self.parse_var_declarations(&mut symbols)?;
        }

        let procedures = self.parse_procedure_declarations()?;
        let statement = self.statement()?;
        Ok(Block::new(symbols, procedures, statement))
    }

    /**
     * Parse a statement according to the grammar:
     * statement = ident ":=" expression
     *           | "call" ident
     *           | "!" expression
     *           | "begin" statement { ";" statement } "end"
     *           | "if" condition "then" statement
     *           | "while" condition "do" statement .
     */
    fn statement(&mut self) -> Pl0Result<Statement> {
        match self.current().kind {
            TokenKind::Ident => {
                let identifier = self.advance().text.clone();
                self.expect(TokenKind::Assign)?;
                let expr = self.expression()?;
                Ok(Statement::Assignment { identifier, expr })
            }
            TokenKind::Call => {
                self.advance();
                let identifier = self.expect(TokenKind::Ident)?.text.clone();
                Ok(Statement::Call(identifier))
            }
            TokenKind::Write => {
                self.advance();
                Ok(Statement::Write(self.expression()?))
            }
            TokenKind::Begin => {
                self.advance();
                let mut stmts = vec![self.statement()?];
                while self.accept(TokenKind::Semicolon).is_some() {
                    stmts.push(self.statement()?);
                }
                self.expect(TokenKind::End)?;
                Ok(Statement::Compound(stmts))
            }
            TokenKind::If => {
                self.advance();
                let condition = self.condition()?;
                self.expect(TokenKind::Then)?;
                let body = Box::new(self.statement()?);
                Ok(Statement::IfThen { condition, body })
            }
            TokenKind::While => {
                self.advance();
                let condition = self.condition()?;
                self.expect(TokenKind::Do)?;
                let body = Box::new(self.statement()?);
                Ok(Statement::While { condition, body })
            }
            _ => Err(self.unexpected("statement")),
        }
    }

    /**
     * Parse a condition according to the grammar:
     * condition = "odd" expression
     *           | expression ( comparator ) expression .
     */
    fn condition(&mut self) -> Pl0Result<Condition> {
        if self.accept(TokenKind::Odd).is_some() {
            return Ok(Condition::Odd(self.expression()?));
        }

        let left = self.expression()?;
        let token = self.current();
        let op = RelOp::from_token_kind(token.kind).ok_or_else(|| {
            Pl0Error::parse_error(
                format!("condition: invalid operator: '{}'", token.lexeme()),
                self.line(),
            )
        })?;
        self.advance();
        let right = self.expression()?;
        Ok(Condition::Comparison { op, left, right })
    }

    /// Top-level expression: one resolver shared by every nested term,
    /// factor and parenthesized sub-expression.
    fn expression(&mut self) -> Pl0Result<Expr> {
        let mut resolver = ExpressionResolver::new();
        self.expression_into(&mut resolver)?;
        resolver.complete()?;
        resolver.tree()
    }

    /**
     * expression = [ "+" | "-" ] term { ( "+" | "-" ) term } .
     */
    fn expression_into(&mut self, resolver: &mut ExpressionResolver) -> Pl0Result<()> {
        if let Some(sign) = self.current().to_unary() {
            self.advance();
            resolver.process(&sign)?;
        }

        self.term(resolver)?;

        while matches!(self.current().kind, TokenKind::Plus | TokenKind::Minus) {
            resolver.process(self.advance())?;
            self.term(resolver)?;
        }
        Ok(())
    }

    /**
     * term = factor { ( "*" | "/" ) factor } .
     */
    fn term(&mut self, resolver: &mut ExpressionResolver) -> Pl0Result<()> {
        self.factor(resolver)?;
        while matches!(self.current().kind, TokenKind::Multiply | TokenKind::Divide) {
            resolver.process(self.advance())?;
            self.factor(resolver)?;
        }
        Ok(())
    }

    /**
     * factor = ident | number | "(" expression ")" .
     */
    fn factor(&mut self, resolver: &mut ExpressionResolver) -> Pl0Result<()> {
        match self.current().kind {
            TokenKind::Ident | TokenKind::Number => resolver.process(self.advance()),
            TokenKind::LParen => {
                resolver.process(self.advance())?;
                self.expression_into(resolver)?;
                match self.accept(TokenKind::RParen) {
                    Some(rparen) => resolver.process(rparen),
                    None => Err(Pl0Error::paren_mismatch(
                        format!("'(' is never closed, found '{}'", self.current().lexeme()),
                        self.line(),
                    )),
                }
            }
            _ => Err(self.unexpected("factor")),
        }
    }
}

pub fn parse_program(tokens: &[Token]) -> Pl0Result<Program> {
    Parser::new(tokens).parse()
}

pub fn parse_expression(tokens: &[Token]) -> Pl0Result<Expr> {
    Parser::new(tokens).parse_expression()
}
