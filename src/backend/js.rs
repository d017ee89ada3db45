use crate::ast::{
    AstVisitor, Block, Condition, Expr, Node, Operand, Operator, Procedure, Program, RelOp,
    Statement,
};
use crate::semantic::symboltable::SymbolType;
use crate::utils::config::emitter::{rename_identifier, PROGRAM_EPILOGUE, PROGRAM_PROLOGUE};
use crate::utils::config::EmitConfig;
use crate::utils::errors::{Pl0Error, Pl0Result};
use crate::utils::string_utils::{indent, write_line};

/// Syntax-directed JavaScript generator. One top-down walk, no backtracking.
pub struct JsEmitter {
    config: EmitConfig,
    output: String,
    depth: usize,
}

impl JsEmitter {
    pub fn new() -> Self {
        Self::with_config(EmitConfig::default())
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(4096),
            depth: 0,
        }
    }

    pub fn generate_code(&mut self, program: &Program) -> Pl0Result<()> {
        self.output.clear();
        self.depth = 0;
        program.accept(self)
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    fn pad(&self) -> String {
        indent(self.depth, self.config.indent_width)
    }

    fn out(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn line(&mut self, s: &str) {
        let pad = self.pad();
        self.output.push_str(&pad);
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Body of `if`/`while`: braces stay on the header line, a single
    /// statement goes on its own line one level deeper.
    fn emit_body(&mut self, body: &Statement) -> Pl0Result<()> {
        match body {
            Statement::Compound(stmts) => {
                self.out(" {\n");
                self.emit_statements(stmts)?;
                self.line("}");
            }
            other => {
                self.out("\n");
                self.depth += 1;
                other.accept(self)?;
                self.depth -= 1;
            }
        }
        Ok(())
    }

    fn emit_statements(&mut self, stmts: &[Statement]) -> Pl0Result<()> {
        self.depth += 1;
        for stmt in stmts {
            stmt.accept(self)?;
        }
        self.depth -= 1;
        Ok(())
    }

    fn relational(op: RelOp) -> &'static str {
        match op {
            RelOp::Eq => "===",
            RelOp::Ne => "!==",
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        }
    }
}

impl Default for JsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstVisitor for JsEmitter {
    fn visit_program(&mut self, program: &Program) -> Pl0Result<()> {
        self.out(PROGRAM_PROLOGUE);
        self.depth += 1;
        program.block.accept(self)?;
        self.depth -= 1;
        self.out(PROGRAM_EPILOGUE);
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> Pl0Result<()> {
        for symbol in block.symbols.iter() {
            let name = rename_identifier(&symbol.name);
            match symbol.symbol_type {
                SymbolType::Constant(value) => self.line(&format!("const {} = {};", name, value)),
                SymbolType::Variable => self.line(&format!("let {};", name)),
            }
        }
        for procedure in &block.procedures {
            procedure.accept(self)?;
        }
        block.statement.accept(self)
    }

    fn visit_procedure(&mut self, procedure: &Procedure) -> Pl0Result<()> {
        self.line(&format!("function {}() {{", rename_identifier(&procedure.name)));
        self.depth += 1;
        procedure.block.accept(self)?;
        self.depth -= 1;
        self.line("}");
        Ok(())
    }

    fn visit_statement(&mut self, statement: &Statement) -> Pl0Result<()> {
        match statement {
            Statement::Compound(stmts) => {
                self.line("{");
                self.emit_statements(stmts)?;
                self.line("}");
            }
            Statement::Assignment { identifier, expr } => {
                let pad = self.pad();
                write_line(&mut self.output, format_args!("{}{} = ", pad, rename_identifier(identifier)))?;
                expr.accept(self)?;
                self.out(";\n");
            }
            Statement::Call(identifier) => {
                self.line(&format!("{}();", rename_identifier(identifier)));
            }
            Statement::Write(expr) => {
                let pad = self.pad();
                write_line(&mut self.output, format_args!("{}{}(", pad, self.config.print_function))?;
                expr.accept(self)?;
                self.out(");\n");
            }
            Statement::IfThen { condition, body } => {
                let pad = self.pad();
                self.out(&pad);
                self.out("if (");
                condition.accept(self)?;
                self.out(")");
                self.emit_body(body)?;
            }
            Statement::While { condition, body } => {
                let pad = self.pad();
                self.out(&pad);
                self.out("while (");
                condition.accept(self)?;
                self.out(")");
                self.emit_body(body)?;
            }
        }
        Ok(())
    }

    fn visit_condition(&mut self, condition: &Condition) -> Pl0Result<()> {
        match condition {
            Condition::Odd(expr) => {
                self.out("((");
                expr.accept(self)?;
                self.out(" % 2) === 1)");
            }
            Condition::Comparison { op, left, right } => {
                self.out("(");
                left.accept(self)?;
                write_line(&mut self.output, format_args!(" {} ", Self::relational(*op)))?;
                right.accept(self)?;
                self.out(")");
            }
        }
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Pl0Result<()> {
        match expr {
            Expr::Operand(Operand::Number(value)) if *value < 0 => {
                write_line(&mut self.output, format_args!("({})", value))?;
            }
            Expr::Operand(Operand::Number(value)) => {
                write_line(&mut self.output, format_args!("{}", value))?;
            }
            Expr::Operand(Operand::Ident(name)) => {
                self.out(&rename_identifier(name));
            }
            Expr::Unary { op, operand } => {
                if !op.is_unary() {
                    return Err(Pl0Error::internal(format!(
                        "binary operator {} in a unary node",
                        op
                    )));
                }
                self.out("(");
                self.out(op.symbol());
                operand.accept(self)?;
                self.out(")");
            }
            Expr::Binary { op, left, right } => {
                if op.is_unary() {
                    return Err(Pl0Error::internal(format!(
                        "unary operator {} in a binary node",
                        op
                    )));
                }
                let truncate = self.config.truncate_division && *op == Operator::Divide;
                if truncate {
                    self.out("Math.trunc(");
                }
                self.out("(");
                left.accept(self)?;
                self.out(op.symbol());
                right.accept(self)?;
                self.out(")");
                if truncate {
                    self.out(")");
                }
            }
        }
        Ok(())
    }
}

/// Renders a program as JavaScript with the default configuration.
pub fn emit_js(program: &Program) -> Pl0Result<String> {
    emit_js_with(program, EmitConfig::default())
}

pub fn emit_js_with(program: &Program, config: EmitConfig) -> Pl0Result<String> {
    let mut emitter = JsEmitter::with_config(config);
    emitter.generate_code(program)?;
    Ok(emitter.output)
}
