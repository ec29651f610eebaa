//! CLI for printing greetings.
//!
//! ## Usage
//!
//! ```bash
//! # Greet each argument on its own line
//! greet Aku Kamu
//!
//! # Greet each line of stdin
//! printf 'Kita\nMereka\n' | greet
//! echo "Kita" | greet -
//!
//! # Generate shell completions
//! greet --completions zsh > ~/.zfunc/_greet
//! source <(COMPLETE=bash greet)
//! ```

use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use greeting_lib::hello_world;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Print a greeting for every name given
#[derive(Debug, Parser)]
#[command(name = "greet", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Names to greet (use "-" or pipe input to read one name per line from stdin)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Log at debug level to stderr (overrides RUST_LOG)
    #[arg(long)]
    debug: bool,

    /// Generate a completion script for SHELL and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

const AFTER_HELP: &str = "\
EXAMPLES:
  greet Aku                      # Hello Aku
  greet Aku Kamu                 # one greeting per name
  printf 'Kita\\nMereka\\n' | greet  # one greeting per stdin line
  greet --completions bash >> ~/.bashrc
";

#[derive(Debug, Error)]
enum GreetError {
    #[error("failed to read names from stdin: {0}")]
    ReadInput(#[source] io::Error),

    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
}

/// Where the names come from.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Args(&'a [String]),
    Stdin,
    Help,
}

fn main() -> ExitCode {
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.completions {
        Some(shell) => write_completions(shell, &mut io::stdout().lock()),
        None => run(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// A closed stdout (e.g. `greet ... | head -1`) is not a failure.
fn is_broken_pipe(err: &GreetError) -> bool {
    matches!(err, GreetError::WriteOutput(e) if e.kind() == io::ErrorKind::BrokenPipe)
}

/// Renders the completion script for `shell` into memory, then writes it out.
///
/// `clap_complete::generate` panics on write errors, so it never touches
/// `out` directly.
fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<(), GreetError> {
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "greet", &mut script);

    out.write_all(&script)
        .and_then(|()| out.flush())
        .map_err(GreetError::WriteOutput)
}

/// Installs a stderr subscriber for `--debug`, or for `RUST_LOG` when set.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn select_input(names: &[String], stdin_is_terminal: bool) -> Input<'_> {
    match names {
        [only] if only == "-" => Input::Stdin,
        [] if stdin_is_terminal => Input::Help,
        [] => Input::Stdin,
        names => Input::Args(names),
    }
}

fn run(cli: &Cli) -> Result<(), GreetError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match select_input(&cli.names, io::stdin().is_terminal()) {
        Input::Help => {
            writeln!(out, "{}", Cli::command().render_help()).map_err(GreetError::WriteOutput)?;
        }
        Input::Args(names) => {
            tracing::debug!(count = names.len(), "greeting names from arguments");
            write_greetings(&mut out, names)?;
        }
        Input::Stdin => {
            tracing::debug!("greeting names from stdin");
            greet_lines(io::stdin().lock(), &mut out)?;
        }
    }

    out.flush().map_err(GreetError::WriteOutput)
}

/// Writes one greeting per name, each terminated by a newline.
fn write_greetings<W, I>(out: &mut W, names: I) -> Result<(), GreetError>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for name in names {
        writeln!(out, "{}", hello_world(name.as_ref())).map_err(GreetError::WriteOutput)?;
    }
    Ok(())
}

/// Greets every line of `input`. Only the line terminator is removed.
fn greet_lines<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), GreetError> {
    let mut count = 0usize;
    for line in input.lines() {
        let name = line.map_err(GreetError::ReadInput)?;
        write_greetings(out, [name])?;
        count += 1;
    }
    tracing::debug!(count, "finished reading stdin");
    Ok(())
}
