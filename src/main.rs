use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use countstore::cli::Command;
use countstore::config::Config;
use countstore::logging::init_tracing;
use countstore::{state_logger, CounterStore, CountersState, Store};

#[derive(Parser, Debug)]
#[command(name = "countstore")]
#[command(version, about = "Drive a counter store with line-oriented commands")]
#[command(long_about = r#"Drive a counter store with line-oriented commands.

Reads one command per line from --script or stdin and dispatches it.

COMMANDS:
    add             Append a new counter at zero
    inc <ref>       Increment a counter
    dec <ref>       Decrement a counter
    del <ref>       Remove a counter
    show            Print the current state as JSON
    {"type":...}    Dispatch a raw JSON action, e.g. {"type":"INCREMENT","id":"..."}

<ref> is a counter id or @N for the N-th counter (1-based).

EXAMPLES:
    printf 'add\ninc @2\ninc @2\nshow\n' | countstore
    countstore --quiet --script session.txt
"#)]
struct Args {
    /// Config file (default: ~/.config/countstore/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Don't log every state change
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging);

    let mut store: CounterStore =
        Store::new(CountersState::with_counters(config.store.initial_counters));
    if config.store.log_state_changes && !args.quiet {
        store.subscribe(state_logger::<CountersState>());
    }

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    run(&mut store, input)
}

fn run(store: &mut CounterStore, input: impl BufRead) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let line_no = index + 1;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping invalid command");
                continue;
            }
        };

        match command {
            Command::Show => {
                serde_json::to_writer_pretty(&mut stdout, store.get_state())?;
                writeln!(stdout)?;
            }
            Command::Act(command) => match command.resolve(store.get_state()) {
                Ok(action) => store.dispatch(action),
                Err(e) => tracing::warn!(line = line_no, error = %e, "Skipping command"),
            },
        }
    }

    Ok(())
}
