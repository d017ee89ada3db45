use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod backend;
pub mod frontend;
pub mod semantic;
pub mod utils;

pub const VERSION: &str = "0.1.0";

use crate::utils::config::EmitConfig;
use crate::utils::errors::{Pl0Error, Pl0Result};

pub fn read(filename: &Path) -> Pl0Result<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) => {
            if !ext.eq("pl0") {
                return Err(Pl0Error::FileReadError("File must have a .pl0 extension".to_string()));
            }
        }
        None => {
            return Err(Pl0Error::FileReadError("File must have a .pl0 extension".to_string()));
        }
    }
    // Open the path in read-only mode, returns `io::Result<File>`
    let mut file = File::open(path)?;
    // Read the file contents into a string, returns `io::Result<usize>`
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// scan -> parse -> emit with the given emitter configuration.
pub fn compile_with(source: &str, config: EmitConfig) -> Pl0Result<String> {
    let tokens = frontend::scan(source)?;
    let program = frontend::parse_program(&tokens)?;
    backend::emit_js_with(&program, config)
}

pub fn compile(source: &str) -> Pl0Result<String> {
    compile_with(source, EmitConfig::default())
}
