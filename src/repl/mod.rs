//! The interactive shell. Explicitly out of scope for the interpreter core
//! (spec §1) — a thin external collaborator that feeds source lines into
//! the pipeline and renders the resulting [`Object`](crate::object::Object).

use std::io::{self, BufRead, Write};

use crate::evaluator::eval_program;
use crate::lexer::Lexer;
use crate::object::Environment;
use crate::parser::Parser;

const PROMPT: &str = ">> ";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Reads one line at a time from `reader`, threading a single environment
/// across lines so earlier `let` bindings stay visible, and writes either
/// the evaluated value or the accumulated parser errors to `writer`.
pub fn start(reader: impl BufRead, mut writer: impl Write) -> io::Result<()> {
    let env = Environment::new();
    let mut lines = reader.lines();

    loop {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let lexer = Lexer::new(line);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parse_errors(&mut writer, parser.errors())?;
            continue;
        }

        let result = eval_program(&program, &env);
        writeln!(writer, "{result}")?;
    }
}

fn print_parse_errors(writer: &mut impl Write, errors: &[String]) -> io::Result<()> {
    writeln!(writer, "{MONKEY_FACE}")?;
    writeln!(writer, "Woops! We ran into some monkey business here!")?;
    writeln!(writer, " parser errors:")?;
    for err in errors {
        writeln!(writer, "\t{err}")?;
    }
    Ok(())
}
