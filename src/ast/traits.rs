/*
*                    pl0js -- PL/0 to JavaScript translator.
*
* program    = block "." ;
* block      = [ "const" ident "=" number { "," ident "=" number } ";" ]
*              [ "var" ident { "," ident } ";" ]
*              { "procedure" ident ";" block ";" } statement ;
* statement  = ident ":=" expression
*            | "call" ident
*            | "!" expression
*            | "begin" statement { ";" statement } "end"
*            | "if" condition "then" statement
*            | "while" condition "do" statement ;
* condition  = "odd" expression | expression ( comparator ) expression ;
* expression = [ "+" | "-" ] term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = ident | number | "(" expression ")" ;
* comparator = "=" | "#" | "<" | "<=" | ">" | ">=" ;
*/

use crate::ast::{Block, Condition, Expr, Procedure, Program, Statement};
use crate::utils::errors::Pl0Result;

pub trait Node {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()>;
}

pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) -> Pl0Result<()>;
    fn visit_block(&mut self, block: &Block) -> Pl0Result<()>;
    fn visit_procedure(&mut self, procedure: &Procedure) -> Pl0Result<()>;
    fn visit_statement(&mut self, statement: &Statement) -> Pl0Result<()>;
    fn visit_condition(&mut self, condition: &Condition) -> Pl0Result<()>;
    fn visit_expr(&mut self, expr: &Expr) -> Pl0Result<()>;
}
