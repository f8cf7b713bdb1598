use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::process::ExitCode;

use monkey_lang::evaluator::eval_program;
use monkey_lang::lexer::Lexer;
use monkey_lang::object::Environment;
use monkey_lang::parser::Parser;
use monkey_lang::repl;

/// The one genuinely exceptional condition at the driver layer: the script
/// path handed to `monkey <script>` could not be read. Parse errors and
/// runtime errors are reported on their own channels (§7); this is not
/// either of those, it is the file I/O the core pipeline never has to do.
#[derive(Debug)]
enum DriverError {
    ScriptUnreadable { path: String, source: io::Error },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::ScriptUnreadable { path, source } => {
                write!(f, "could not read {path}: {source}")
            }
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DriverError::ScriptUnreadable { source, .. } => Some(source),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.as_slice() {
        [_] => {
            println!("Welcome to monkey v0.1.0\nPress ctrl-d to exit.");
            let stdin = io::stdin();
            match repl::start(stdin.lock(), io::stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("repl error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        [_, path] => run_file(path),
        _ => {
            eprintln!("Usage: monkey [script]");
            ExitCode::from(64)
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match read_script(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for err in parser.errors() {
            eprintln!("parser error: {err}");
        }
        return ExitCode::FAILURE;
    }

    let env = Environment::new();
    let result = eval_program(&program, &env);
    println!("{result}");
    ExitCode::SUCCESS
}

fn read_script(path: &str) -> Result<String, DriverError> {
    fs::read_to_string(path).map_err(|source| DriverError::ScriptUnreadable {
        path: path.to_string(),
        source,
    })
}
