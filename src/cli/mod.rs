mod presenter;

pub use presenter::{OutputFormat, Presenter};

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Once;

use anyhow::Result;
use clap::Parser;

use crate::application::BudgetTracker;
use crate::domain::EntryKind;

/// Saldo - session budget tracker
#[derive(Parser)]
#[command(name = "saldo")]
#[command(about = "An interactive budget tracker whose state lives for one session")]
#[command(version)]
pub struct Cli {
    /// Output format for snapshots and entries
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let tracker = BudgetTracker::new();
        let presenter = Presenter::new(self.format);
        let interactive = io::stdin().is_terminal();

        let mut session = Session::new(
            tracker,
            presenter,
            io::stdin().lock(),
            io::stdout().lock(),
            io::stderr().lock(),
        )
        .with_prompt(interactive);

        session.run()
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber once. Logs go to stderr so the
/// output stream carries nothing but display values.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default_directive = if verbose { "saldo=debug" } else { "saldo=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    });
}

enum LoopAction {
    Continue,
    Quit,
}

/// One interactive session: reads commands line by line, drives the
/// tracker and hands results to the presenter.
///
/// Prompts, rejections and help go to the error sink; the output sink
/// carries only display values, which keeps piped use
/// (`saldo < commands.txt`) clean. Input and sinks are generic so tests
/// can run whole sessions in memory.
pub struct Session<R, W, E> {
    tracker: BudgetTracker,
    presenter: Presenter,
    input: R,
    out: W,
    err: E,
    prompt: bool,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(tracker: BudgetTracker, presenter: Presenter, input: R, out: W, err: E) -> Self {
        Self {
            tracker,
            presenter,
            input,
            out,
            err,
            prompt: false,
        }
    }

    /// Show a `> ` prompt before each command.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until `quit`, `exit` or end of input. The current snapshot is
    /// displayed on startup, all zeroes included, just like every later
    /// update.
    pub fn run(&mut self) -> Result<()> {
        self.show_snapshot()?;

        let mut line = String::new();
        loop {
            self.show_prompt()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match self.dispatch(line.trim())? {
                LoopAction::Continue => {}
                LoopAction::Quit => break,
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<LoopAction> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(LoopAction::Continue);
        };

        match command {
            "quit" | "exit" => return Ok(LoopAction::Quit),
            "help" => self.show_help()?,
            "show" => self.show_snapshot()?,
            "list" => self.show_entries()?,
            "add" => {
                let args: Vec<&str> = words.collect();
                self.handle_add(&args)?;
            }
            other => writeln!(self.err, "Unknown command: {} (try 'help')", other)?,
        }

        Ok(LoopAction::Continue)
    }

    /// `add <kind> <description...> <amount>` - the last word is the
    /// amount, everything between kind and amount is the description.
    fn handle_add(&mut self, args: &[&str]) -> Result<()> {
        const USAGE: &str = "Usage: add <income|expense> <description> <amount>";

        let Some((kind, rest)) = args.split_first() else {
            writeln!(self.err, "{}", USAGE)?;
            return Ok(());
        };
        let Some((amount, description_words)) = rest.split_last() else {
            writeln!(self.err, "{}", USAGE)?;
            return Ok(());
        };
        // "add income 100" leaves the description empty; the tracker
        // rejects it like any other invalid submission.
        let description = description_words.join(" ");

        match self.tracker.submit(kind, &description, amount) {
            Ok(outcome) => {
                writeln!(self.out, "{}", self.presenter.render_entry(&outcome.entry)?)?;
                writeln!(
                    self.out,
                    "{}",
                    self.presenter.render_snapshot(&outcome.snapshot)?
                )?;
            }
            Err(err) => writeln!(self.err, "Rejected: {}", err)?,
        }

        Ok(())
    }

    fn show_snapshot(&mut self) -> Result<()> {
        let snapshot = self.tracker.snapshot();
        writeln!(self.out, "{}", self.presenter.render_snapshot(&snapshot)?)?;
        Ok(())
    }

    fn show_entries(&mut self) -> Result<()> {
        for kind in [EntryKind::Income, EntryKind::Expense] {
            let entries = self.tracker.entries(kind);
            writeln!(
                self.out,
                "{}",
                self.presenter.render_entry_list(kind, entries)?
            )?;
        }
        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        writeln!(
            self.err,
            "Commands:\n\
             \x20 add <income|expense> <description> <amount>\n\
             \x20 show    display budget, totals and spend percentage\n\
             \x20 list    display all recorded entries\n\
             \x20 help    this summary\n\
             \x20 quit    end the session\n\
             Kinds also accept inc/+ and exp/-."
        )?;
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<()> {
        if self.prompt {
            write!(self.err, "> ")?;
            self.err.flush()?;
        }
        Ok(())
    }
}
