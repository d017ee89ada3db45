// Lexer constants
pub mod lexer {
    // Number of characters shown in a lexer error
    pub const ERROR_SNIPPET_LEN: usize = 16;
}

// Expression resolver constants
pub mod resolver {
    pub const ADDITIVE_PRECEDENCE: u8 = 10;
    // A leading sign covers the whole first term
    pub const UNARY_PRECEDENCE: u8 = 15;
    pub const MULTIPLICATIVE_PRECEDENCE: u8 = 20;
}

// JavaScript emitter constants
pub mod emitter {
    use lazy_static::lazy_static;
    use std::collections::HashSet;

    pub const DEFAULT_INDENT_WIDTH: usize = 2;
    pub const DEFAULT_PRINT_FUNCTION: &str = "console.log";
    pub const PROGRAM_PROLOGUE: &str = ";(function () {\n";
    pub const PROGRAM_EPILOGUE: &str = "}());\n";

    // PL/0 identifiers never contain '$'
    pub const RENAME_PREFIX: &str = "$";

    lazy_static! {
        pub static ref RESERVED_WORDS: HashSet<&'static str> = [
            "arguments", "await", "break", "case", "catch", "class", "const", "continue",
            "debugger", "default", "delete", "do", "else", "enum", "eval", "export", "extends",
            "false", "finally", "for", "function", "if", "implements", "import", "in",
            "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
            "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
            "typeof", "undefined", "var", "void", "while", "with", "yield",
            "console", "Math", "NaN", "Infinity",
        ]
        .iter()
        .copied()
        .collect();
    }

    pub fn rename_identifier(name: &str) -> String {
        if RESERVED_WORDS.contains(name) {
            format!("{}{}", RENAME_PREFIX, name)
        } else {
            name.to_string()
        }
    }
}

/// Knobs for the JavaScript emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitConfig {
    pub indent_width: usize,
    pub print_function: String,
    /// Emit `Math.trunc((a/b))` so division keeps PL/0 integer semantics.
    pub truncate_division: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: emitter::DEFAULT_INDENT_WIDTH,
            print_function: emitter::DEFAULT_PRINT_FUNCTION.to_string(),
            truncate_division: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::emitter::rename_identifier;

    #[test]
    fn test_rename_reserved_words() {
        assert_eq!(rename_identifier("let"), "$let");
        assert_eq!(rename_identifier("function"), "$function");
        assert_eq!(rename_identifier("square"), "square");
    }
}
