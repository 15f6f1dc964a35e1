use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use itertools::Itertools;

use detlibm::format::Format;
use detlibm::opts::Opts;
use detlibm::script::{self, ast, ScriptParser};
use detlibm::utils::{Diagnostic, Reporter};

fn read_input(file: &Option<PathBuf>) -> io::Result<(Cow<'_, str>, String)> {
    if let Some(file) = file {
        let filename = file.to_string_lossy();
        let src = fs::read_to_string(file)?;

        Ok((filename, src))
    } else {
        let filename = Cow::from("<stdin>");
        let src = io::read_to_string(io::stdin())?;

        Ok((filename, src))
    }
}

fn open_output(file: &Option<PathBuf>) -> io::Result<Box<dyn Write>> {
    if let Some(path) = file {
        Ok(Box::new(File::create(path)?))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

/// Evaluates each statement, writing one line of values per statement.
/// Returns whether every statement evaluated.
fn run(
    statements: &[ast::Expression],
    format: Format,
    out: &mut dyn Write,
    reporter: &mut Reporter,
) -> io::Result<bool> {
    let mut ok = true;

    for statement in statements {
        match script::eval(statement) {
            Ok(values) => {
                let line = values.iter().map(|&x| format.number(x)).join("\t");

                writeln!(out, "{line}")?;
            }
            Err(err) => {
                reporter.emit(&err.to_diagnostic());

                ok = false;
            }
        }
    }

    out.flush()?;

    Ok(ok)
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .format_timestamp(None)
        .init();

    let (filename, src) = match read_input(&opts.file) {
        Ok(result) => result,
        Err(err) => {
            Reporter::new("", "").emit(&Diagnostic::from(err));

            return ExitCode::FAILURE;
        }
    };

    let mut reporter = Reporter::new(&filename, &src);

    let statements = match ScriptParser::parse_file(&src) {
        Ok(result) => result,
        Err(err) => {
            reporter.emit(
                &Diagnostic::error()
                    .with_message("syntax error")
                    .with_primary(
                        ast::Span::from(err.location.clone()),
                        err.variant.message(),
                    ),
            );

            return ExitCode::FAILURE;
        }
    };

    log::info!("evaluating {} statement(s) from {filename}", statements.len());

    let result = open_output(&opts.output).and_then(|mut out| {
        run(&statements, opts.format, &mut *out, &mut reporter)
    });

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            reporter.emit(&Diagnostic::from(err));

            ExitCode::FAILURE
        }
    }
}
