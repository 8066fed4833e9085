// ptrcalc: integer expression interpreter with a memory view

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ptrcalc::interpreter::constants::{DEFAULT_ADDRESS_BASE, DEFAULT_HISTORY_LIMIT, MAX_ADDRESS_BASE};
use ptrcalc::session::{Outcome, Session, SessionConfig};
use ptrcalc::ui::App;

/// Evaluate integer expressions with `&x` and `*p` over a flat address space
#[derive(Parser, Debug)]
#[command(name = "ptrcalc", version, about)]
struct Args {
    /// Evaluate each line of FILE and exit instead of starting a session
    file: Option<PathBuf>,

    /// Use a plain line prompt instead of the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Also print each line in minimally parenthesized form
    #[arg(long)]
    unparse: bool,

    /// Address given to the first variable
    #[arg(
        long,
        default_value_t = DEFAULT_ADDRESS_BASE,
        value_parser = clap::value_parser!(i32).range(0..=MAX_ADDRESS_BASE as i64)
    )]
    base: i32,

    /// Number of transcript entries kept
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history: usize,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            address_base: self.base,
            history_limit: self.history,
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Print the outcome of one line.
///
/// `None` ends the session; otherwise whether the line succeeded.
fn report(session: &mut Session, line: &str, unparse: bool) -> Option<bool> {
    match session.submit(line) {
        Ok(Outcome::Empty) => Some(true),
        Ok(Outcome::Quit) => None,
        Ok(Outcome::Value { rendered, value }) => {
            if unparse {
                println!("{}", rendered);
            }
            println!("{}", value);
            Some(true)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            Some(false)
        }
    }
}

fn run_script(args: &Args, path: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;

    let mut session = Session::new(args.session_config());
    let mut failed = false;

    for line in source.lines() {
        match report(&mut session, line, args.unparse) {
            Some(ok) => failed |= !ok,
            None => break,
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_plain(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut session = Session::new(args.session_config());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("=> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if report(&mut session, &line, args.unparse).is_none() {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_tui(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Session::new(args.session_config()), args.unparse);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match &args.file {
        Some(path) => {
            init_logging();
            run_script(&args, path)
        }
        None if args.plain => {
            init_logging();
            run_plain(&args)
        }
        None => run_tui(&args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
