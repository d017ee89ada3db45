use crate::utils::errors::{Pl0Error, Pl0Result};

/// Helper function for writing formatted strings to a buffer
pub fn write_line(buf: &mut String, args: std::fmt::Arguments) -> Pl0Result<()> {
    use std::fmt::Write;
    buf.write_fmt(args)
        .map_err(|_| Pl0Error::internal("fmt error"))
}

/// Indentation prefix for a nesting depth.
pub fn indent(depth: usize, width: usize) -> String {
    " ".repeat(depth * width)
}
