mod exit;
mod test_runner;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use ippcode::parser::ParseError;

use crate::exit::ExitCode;

#[derive(Parser)]
#[command(
    name = "ippcode",
    version,
    about = "IPPcode24 parser: validates source and emits its XML representation"
)]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,

    // Used when no subcommand is given
    #[command(flatten)]
    parse: ParseArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a program and print its XML representation (default)
    Parse(ParseArgs),

    /// Run .test.ippcode fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct ParseArgs {
    /// Source file to read instead of standard input
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// File to write the XML to instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't emit anything (exit 0 if valid)
    #[arg(long)]
    check: bool,

    /// Dump the validated program structure instead of XML
    #[arg(long, conflicts_with = "check")]
    ast: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.ippcode file or a directory containing them
    path: PathBuf,

    /// Run only tests in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    // Invariant violations surface as panics; report them with the internal-error code.
    std::panic::set_hook(Box::new(|info| {
        eprintln!("internal error: {}", info);
        process::exit(ExitCode::Internal.code());
    }));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Usage,
            };
            process::exit(code.code());
        }
    };

    let code = match cli.command {
        Some(Command::Parse(args)) => do_parse(args, cli.no_color).code(),
        None => do_parse(cli.parse, cli.no_color).code(),
        Some(Command::Test(args)) => {
            if args.list_categories {
                test_runner::list_categories(&args.path);
                0
            } else {
                test_runner::run_tests(&args.path, cli.no_color, &args.category)
            }
        }
    };

    process::exit(code);
}

fn do_parse(args: ParseArgs, no_color: bool) -> ExitCode {
    let (name, source) = match read_source(args.source.as_deref()) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: cannot read input: {}", e);
            return ExitCode::Input;
        }
    };

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(name.clone(), source.clone());

    let program = match ippcode::parser::Parser::new(source, file_id).parse() {
        Ok(program) => program,
        Err(error) => {
            emit_parse_error(&files, &error, no_color);
            return ExitCode::from(&error.kind);
        }
    };

    if args.check {
        eprintln!("ok: {} is valid ({} instructions)", name, program.instructions.len());
        return ExitCode::Success;
    }

    let rendered = if args.ast {
        format!("{:#?}\n", program)
    } else {
        ippcode::tree::serialize(&program).to_string()
    };

    match write_output(args.output.as_deref(), &rendered) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("error: cannot write output: {}", e);
            ExitCode::Output
        }
    }
}

/// Whole input as one string, with the name used in diagnostics.
fn read_source(path: Option<&Path>) -> io::Result<(String, String)> {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            Ok((path.display().to_string(), source))
        }
        None => {
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, rendered),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()
        }
    }
}

fn emit_parse_error(files: &SimpleFiles<String, String>, error: &ParseError, no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    let diagnostic = error.to_diagnostic();
    if term::emit_to_write_style(&mut writer.lock(), &config, files, &diagnostic).is_err() {
        eprintln!("error: {}", error);
    }
}
