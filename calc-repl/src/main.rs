mod command;
mod error;
mod session;

use error::report_to_stderr;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::{Output, Session};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs, io::{self, IsTerminal, Read}, ops::ControlFlow};

/// Command-line arguments.
#[derive(Debug, Default)]
struct Args {
    /// A file whose lines are run as commands.
    file: Option<String>,

    /// The number of `-v` flags given.
    verbosity: u8,
}

impl Args {
    /// Reads the arguments of the process.
    fn from_env() -> Self {
        let mut args = Args::default();
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "-v" | "--verbose" => args.verbosity += 1,
                "-vv" => args.verbosity += 2,
                _ => args.file = Some(arg),
            }
        }
        args
    }

    /// The log level selected by the verbosity flags.
    fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Prints the outputs of a command. Returns [`ControlFlow::Break`] if the user asked to leave.
fn show(outputs: Vec<Output>) -> ControlFlow<()> {
    for output in outputs {
        match output {
            Output::Text(text) => println!("{}", text),
            Output::Error { source, error } => report_to_stderr(&error, &source),
            Output::Quit => return ControlFlow::Break(()),
        }
    }
    ControlFlow::Continue(())
}

/// Runs each line of the input as a command, stopping early at `quit` or `exit`.
fn run_lines(input: &str, session: &mut Session) {
    for line in input.lines() {
        if show(session.run(line)).is_break() {
            break;
        }
    }
}

/// Runs the interactive prompt until the user leaves.
fn run_interactive(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    println!("type `help` for a list of commands");

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        if show(session.run(&input)).is_break() {
            return Ok(());
        }
    }
}

fn main() {
    let args = Args::from_env();
    if let Err(err) = TermLogger::init(args.log_level(), Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("could not start logging: {}", err);
    }

    let mut session = Session::new();
    if let Some(filename) = &args.file {
        // run each line of the file as a command
        match fs::read_to_string(filename) {
            Ok(input) => run_lines(&input, &mut session),
            Err(err) => log::error!("could not read `{}`: {}", filename, err),
        }
    } else if !io::stdin().is_terminal() {
        // read commands from stdin
        let mut input = String::new();
        match io::stdin().read_to_string(&mut input) {
            Ok(_) => run_lines(&input, &mut session),
            Err(err) => log::error!("could not read stdin: {}", err),
        }
    } else if let Err(err) = run_interactive(&mut session) {
        log::error!("{}", err);
    }
}
