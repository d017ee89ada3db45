use crate::ast::{Block, Condition, Expr, Operand, Procedure, Program, Statement};
use crate::semantic::scope::Scope;
use crate::semantic::symboltable::SymbolType;
use crate::utils::string_utils::indent;

const INDENT_WIDTH: usize = 2;

/// Indented tree dump. Identifiers are annotated with the declaration they
/// resolve to through the lexical scope chain.
#[derive(Default)]
pub struct AstPrinter {
    output: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_program(mut self, program: &Program) -> String {
        self.line(0, "Program");
        let scope = Scope::root(&program.block);
        self.print_block(&scope, 1);
        self.output
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.output.push_str(&indent(depth, INDENT_WIDTH));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn print_block(&mut self, scope: &Scope, depth: usize) {
        let block: &Block = scope.block();
        self.line(depth, &format!("Block (level {})", scope.level()));
        for symbol in block.symbols.iter() {
            let text = match symbol.symbol_type {
                SymbolType::Constant(value) => format!("Const {} = {}", symbol.name, value),
                SymbolType::Variable => format!("Var {}", symbol.name),
            };
            self.line(depth + 1, &text);
        }
        for procedure in &block.procedures {
            self.print_procedure(scope, procedure, depth + 1);
        }
        self.print_statement(scope, &block.statement, depth + 1);
    }

    fn print_procedure(&mut self, scope: &Scope, procedure: &Procedure, depth: usize) {
        self.line(depth, &format!("Procedure {}", procedure.name));
        let inner = scope.child(&procedure.block);
        self.print_block(&inner, depth + 1);
    }

    fn print_statement(&mut self, scope: &Scope, statement: &Statement, depth: usize) {
        match statement {
            Statement::Compound(stmts) => {
                self.line(depth, "Compound");
                for stmt in stmts {
                    self.print_statement(scope, stmt, depth + 1);
                }
            }
            Statement::Assignment { identifier, expr } => {
                self.line(depth, &format!("Assign {}", annotate(scope, identifier)));
                self.line(depth + 1, &render_expr(scope, expr));
            }
            Statement::Call(identifier) => {
                self.line(depth, &format!("Call {}", annotate(scope, identifier)));
            }
            Statement::Write(expr) => {
                self.line(depth, "Write");
                self.line(depth + 1, &render_expr(scope, expr));
            }
            Statement::IfThen { condition, body } => {
                self.line(depth, "IfThen");
                self.print_condition(scope, condition, depth + 1);
                self.print_statement(scope, body, depth + 1);
            }
            Statement::While { condition, body } => {
                self.line(depth, "While");
                self.print_condition(scope, condition, depth + 1);
                self.print_statement(scope, body, depth + 1);
            }
        }
    }

    fn print_condition(&mut self, scope: &Scope, condition: &Condition, depth: usize) {
        match condition {
            Condition::Odd(expr) => {
                self.line(depth, &format!("Odd {}", render_expr(scope, expr)));
            }
            Condition::Comparison { op, left, right } => {
                self.line(depth, &format!("{}", op));
                self.line(depth + 1, &render_expr(scope, left));
                self.line(depth + 1, &render_expr(scope, right));
            }
        }
    }
}

fn annotate(scope: &Scope, name: &str) -> String {
    match scope.resolve(name) {
        Some(resolved) => format!("{} <{}>", name, resolved.describe()),
        None => format!("{} <unresolved>", name),
    }
}

fn render_expr(scope: &Scope, expr: &Expr) -> String {
    match expr {
        Expr::Operand(Operand::Ident(name)) => annotate(scope, name),
        Expr::Operand(operand) => operand.to_string(),
        Expr::Unary { op, operand } => format!("{}({})", op, render_expr(scope, operand)),
        Expr::Binary { op, left, right } => format!(
            "{}({}, {})",
            op,
            render_expr(scope, left),
            render_expr(scope, right)
        ),
    }
}
