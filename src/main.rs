use clap::Parser;
use pl0js::{
    ast::{AstPrinter, Program},
    backend::JsEmitter,
    frontend::{parse_program, scan, Token},
    read,
    utils::config::EmitConfig,
};
use pl0js::utils::errors::{Pl0Error, Pl0Result};
use std::{fs, path::PathBuf, process::Command, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "PL/0 to JavaScript translator",
    long_about = "PL/0 to JavaScript translator.\n\
                 This translator takes PL/0 source code and generates an equivalent JavaScript program.\n\
                 It performs lexical analysis, parsing with operator-precedence expression resolution,\n\
                 and syntax-directed code emission.\n\
                 \n\
                 Example usage:\n\
                 pl0js input.pl0                    # Translate to input.js\n\
                 pl0js input.pl0 -o output.js       # Specify output file\n\
                 pl0js input.pl0 --print-js         # Print generated JavaScript\n\
                 pl0js input.pl0 --verbose          # Verbose compilation output\n\
                 pl0js input.pl0 --timing           # Show compilation timing\n\
                 pl0js input.pl0 --show-ast         # Display abstract syntax tree\n\
                 pl0js input.pl0 --run              # Execute the result with node"
)]
struct Cli {
    // The path to the file to translate
    path: PathBuf,

    // Output file path (defaults to input file with .js extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Print the token stream
    #[arg(long)]
    print_tokens: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Print the generated JavaScript
    #[arg(short = 'p', long)]
    print_js: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show compilation timing
    #[arg(short, long)]
    timing: bool,

    // Spaces per nesting level in the generated code
    #[arg(long, default_value_t = pl0js::utils::config::emitter::DEFAULT_INDENT_WIDTH)]
    indent: usize,

    // Truncate division results to keep integer semantics
    #[arg(long)]
    trunc_div: bool,

    // Run the generated program with node
    #[arg(short, long)]
    run: bool,
}

// Compilation statistics for performance analysis
#[derive(Debug, Default)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    emit_time: f64,
    run_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
    js_lines: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Generate output file path from input path if not specified
fn determine_output_path(input_path: &PathBuf, output: &Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => {
            let basename = input_path.file_stem().unwrap_or_default();
            let mut path = PathBuf::from(basename);
            path.set_extension("js");
            path
        }
    }
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut CompilationStats, verbose: bool) -> Pl0Result<Vec<Token>> {
    let lexer_start = Instant::now();
    let tokens = scan(source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }

    Ok(tokens)
}

// Perform parsing phase
fn parsing_phase(tokens: &[Token], stats: &mut CompilationStats, verbose: bool) -> Pl0Result<Program> {
    let parser_start = Instant::now();
    let program = parse_program(tokens)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = program.node_count();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
        println!("  Built {} AST nodes", stats.ast_size);
    }

    Ok(program)
}

// Perform code emission phase
fn emission_phase(
    program: &Program,
    config: EmitConfig,
    stats: &mut CompilationStats,
    verbose: bool,
) -> Pl0Result<String> {
    let emit_start = Instant::now();
    let mut emitter = JsEmitter::with_config(config);
    emitter.generate_code(program)?;
    let output = emitter.get_output().to_string();
    stats.emit_time = emit_start.elapsed().as_secs_f64();
    stats.js_lines = output.lines().count();

    if verbose {
        println!("Code emission completed in {:.3}s", stats.emit_time);
        println!("  Generated {} lines of JavaScript", stats.js_lines);
    }

    Ok(output)
}

// Main compilation function
fn compile(input_path: &PathBuf, args: &Cli) -> Pl0Result<(String, CompilationStats)> {
    let start_time = Instant::now();
    let mut stats = CompilationStats::default();

    if args.verbose {
        println!("pl0js {}: starting translation of {}", pl0js::VERSION, input_path.display());
    }

    // Validate input file exists
    if !input_path.exists() {
        return Err(Pl0Error::compilation_error(
            "file not found",
            format!("Input file does not exist: {}", input_path.display()),
        ));
    }

    let source_str = read(input_path)?;
    if args.verbose {
        println!("Read {} bytes from input file", source_str.len());
    }

    let tokens = lexical_analysis(&source_str, &mut stats, args.verbose)?;

    if args.print_tokens {
        println!("\nTokens:");
        for token in &tokens {
            println!("  {:>4}: {}", token.line, token);
        }
    }

    let program = parsing_phase(&tokens, &mut stats, args.verbose)?;

    // Show AST if requested
    if args.show_ast {
        println!("\nAbstract Syntax Tree:");
        print!("{}", AstPrinter::new().print_program(&program));
    }

    let config = EmitConfig {
        indent_width: args.indent,
        truncate_division: args.trunc_div,
        ..EmitConfig::default()
    };
    let output = emission_phase(&program, config, &mut stats, args.verbose)?;

    if args.print_js {
        println!("\nGenerated JavaScript:");
        println!("{}", output);
    }

    stats.total_time = start_time.elapsed().as_secs_f64();

    if args.verbose {
        println!("Translation completed in {:.3}s", stats.total_time);
    }

    Ok((output, stats))
}

// Execute the generated program with node
fn run_with_node(js_file: &PathBuf, verbose: bool) -> Pl0Result<f64> {
    let start_time = Instant::now();

    if verbose {
        println!("Running {} with node", js_file.display());
    }

    let status = Command::new("node").arg(js_file).status().map_err(|e| {
        Pl0Error::compilation_error("run", format!("Failed to invoke node: {}", e))
    })?;

    if !status.success() {
        return Err(Pl0Error::compilation_error(
            "run",
            format!("node exited with {}", status),
        ));
    }

    Ok(start_time.elapsed().as_secs_f64())
}

// Print detailed compilation statistics
fn print_stats(stats: &CompilationStats) {
    println!("\nCompilation Statistics:");
    println!("+---------------------+-----------+");
    println!("| Phase               | Time (s)  |");
    println!("+---------------------+-----------+");
    println!("| Lexical Analysis    | {:>9.3} |", stats.lexer_time);
    println!("| Parsing             | {:>9.3} |", stats.parser_time);
    println!("| Code Emission       | {:>9.3} |", stats.emit_time);
    println!("| Execution           | {:>9.3} |", stats.run_time);
    println!("+---------------------+-----------+");
    println!("| Total Time          | {:>9.3} |", stats.total_time);
    println!("+---------------------+-----------+");

    println!("\nCode Metrics:");
    println!("  - Tokens:             {}", stats.token_count);
    println!("  - AST Nodes:          {}", stats.ast_size);
    println!("  - JavaScript Lines:   {}", stats.js_lines);
}

fn main() {
    let args = Cli::parse();

    match compile(&args.path, &args) {
        Ok((output, mut stats)) => {
            let output_path = determine_output_path(&args.path, &args.output);

            if let Err(e) = fs::write(&output_path, &output) {
                fatal(&format!("Failed to write output file '{}': {}", output_path.display(), e));
            }

            if args.verbose {
                println!("JavaScript written to: {}", output_path.display());
            }

            if args.run {
                match run_with_node(&output_path, args.verbose) {
                    Ok(run_time) => {
                        stats.run_time = run_time;
                        stats.total_time += run_time;
                    }
                    Err(e) => fatal(&format!("Execution failed: {}", e)),
                }
            }

            if args.timing {
                print_stats(&stats);
            }

            if args.verbose {
                println!("Translation successful!");
            }
        }
        Err(e) => fatal(&format!("Translation failed: {}", e)),
    }
}
