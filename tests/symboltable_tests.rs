use pl0js::ast::{AstPrinter, Program};
use pl0js::frontend::lexer::scan;
use pl0js::frontend::parser::parse_program;
use pl0js::semantic::scope::{Binding, Scope};
use pl0js::semantic::symboltable::{Symbol, SymbolTable, SymbolType};
use pl0js::utils::errors::Pl0Result;

fn parse(source: &str) -> Pl0Result<Program> {
    let tokens = scan(source)?;
    parse_program(&tokens)
}

#[test]
fn test_symbol_table_insert_and_get() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());

    assert!(table.insert(Symbol::new("x", SymbolType::Variable, 1)).is_none());
    assert!(table.insert(Symbol::new("limit", SymbolType::Constant(10), 1)).is_none());
    assert_eq!(table.len(), 2);

    let x = table.get("x").expect("x was inserted");
    assert_eq!(x.symbol_type, SymbolType::Variable);
    assert!(!x.is_const());

    let limit = table.get("limit").expect("limit was inserted");
    assert!(limit.is_const());
    assert_eq!(limit.const_value(), Some(10));

    assert!(table.get("y").is_none());
    assert!(!table.contains("y"));
}

#[test]
fn test_symbol_table_replaces_in_place() {
    let mut table = SymbolTable::new();
    table.insert(Symbol::new("a", SymbolType::Variable, 1));
    table.insert(Symbol::new("b", SymbolType::Variable, 1));

    let replaced = table.insert(Symbol::new("a", SymbolType::Constant(3), 2));
    assert_eq!(replaced, Some(Symbol::new("a", SymbolType::Variable, 1)));
    assert_eq!(table.len(), 2);

    let order: Vec<(&str, usize)> = table.iter().map(|s| (s.name.as_str(), s.line_number)).collect();
    assert_eq!(order, vec![("a", 2), ("b", 1)]);
}

#[test]
fn test_names_are_case_sensitive() {
    let mut table = SymbolTable::new();
    table.insert(Symbol::new("Count", SymbolType::Variable, 1));
    assert!(table.contains("Count"));
    assert!(!table.contains("count"));
}

#[test]
fn test_outer_variable_visible_in_procedure() -> Pl0Result<()> {
    let program = parse("var x; procedure p; x := 1; call p.")?;
    let root = Scope::root(&program.block);
    let inner = root.child(&program.block.procedures[0].block);

    assert_eq!(inner.level(), 1);
    let resolved = inner.resolve("x").expect("x is declared in the outer block");
    assert_eq!(resolved.distance, 1);
    assert!(matches!(resolved.binding, Binding::Symbol(s) if s.symbol_type == SymbolType::Variable));
    Ok(())
}

#[test]
fn test_local_declaration_shadows_outer() -> Pl0Result<()> {
    let program = parse("const x = 1; procedure p; var x; x := 2; call p.")?;
    let root = Scope::root(&program.block);
    let inner = root.child(&program.block.procedures[0].block);

    let local = inner.resolve("x").expect("x is declared locally");
    assert_eq!(local.distance, 0);
    assert!(matches!(local.binding, Binding::Symbol(s) if !s.is_const()));

    let outer = root.resolve("x").expect("x is declared at the top level");
    assert!(matches!(outer.binding, Binding::Symbol(s) if s.const_value() == Some(1)));
    Ok(())
}

#[test]
fn test_inner_declarations_are_not_visible_outside() -> Pl0Result<()> {
    let program = parse("procedure p; var hidden; hidden := 1; call p.")?;
    let root = Scope::root(&program.block);
    assert!(root.resolve("hidden").is_none());
    assert!(!root.is_visible("missing"));
    assert!(root.is_visible("p"));
    Ok(())
}

#[test]
fn test_procedure_bindings() -> Pl0Result<()> {
    let program = parse("procedure a; call a; procedure b; call a; call b.")?;
    let root = Scope::root(&program.block);
    let in_b = root.child(&program.block.procedures[1].block);

    let a = in_b.resolve("a").expect("a is a sibling procedure");
    assert_eq!(a.distance, 1);
    match a.binding {
        Binding::Procedure(procedure) => assert_eq!(procedure.name, "a"),
        other => panic!("Expected a procedure binding, got {:?}", other),
    }
    assert_eq!(a.describe(), "procedure, distance 1");
    Ok(())
}

#[test]
fn test_distance_through_nested_procedures() -> Pl0Result<()> {
    let source = "
        var depth;
        procedure outer;
            procedure inner;
                depth := depth + 1;
            call inner;
        call outer.
    ";
    let program = parse(source)?;
    let root = Scope::root(&program.block);
    let outer_block = &program.block.procedures[0].block;
    let outer = root.child(outer_block);
    let inner = outer.child(&outer_block.procedures[0].block);

    assert_eq!(inner.level(), 2);
    let resolved = inner.resolve("depth").expect("depth is declared at the top level");
    assert_eq!(resolved.distance, 2);
    assert_eq!(resolved.describe(), "var, distance 2");
    Ok(())
}

#[test]
fn test_ast_printer_annotates_identifiers() -> Pl0Result<()> {
    let program = parse("const k = 4; var x; procedure p; x := k; begin call p; ! y end.")?;
    let dump = AstPrinter::new().print_program(&program);
    let expected = "\
Program
  Block (level 0)
    Const k = 4
    Var x
    Procedure p
      Block (level 1)
        Assign x <var, distance 1>
          k <const = 4, distance 1>
    Compound
      Call p <procedure, distance 0>
      Write
        y <unresolved>
";
    assert_eq!(dump, expected);
    Ok(())
}
