pub mod scope;
pub mod symboltable;

pub use scope::{Binding, Resolved, Scope};
pub use symboltable::{Symbol, SymbolTable, SymbolType};
