use std::{
    io::{IsTerminal, Write},
    process::ExitCode,
};

use env_logger::{Builder, Env};
use log::{debug, error, info};
use rustyline::{DefaultEditor, error::ReadlineError};
use stbstore::{
    config::Config,
    repl::{LineOutcome, process_line, run_reader},
    storage::table::Table,
    types::error::DatabaseError,
};

fn init_logger() {
    // RUST_LOG overrides, e.g. RUST_LOG=debug stbstore my.db
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn run_shell(config: &Config, table: &mut Table) -> Result<(), DatabaseError> {
    let mut rl = DefaultEditor::new().map_err(|e| std::io::Error::other(e.to_string()))?;
    if let Some(history) = &config.history_path {
        if let Err(e) = rl.load_history(history) {
            info!("No history loaded from {}: {}", history.display(), e);
        }
    }

    let mut stdout = std::io::stdout();
    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        debug!("History entry not recorded: {}", e);
                    }
                }
                let outcome = process_line(table, &line, &mut stdout)?;
                stdout.flush()?;
                if outcome == LineOutcome::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                info!("Input closed");
                break;
            }
            Err(err) => {
                return Err(std::io::Error::other(err.to_string()).into());
            }
        }
    }

    if let Some(history) = &config.history_path {
        if let Err(e) = rl.save_history(history) {
            info!("Could not save history to {}: {}", history.display(), e);
        }
    }
    Ok(())
}

fn run(config: &Config) -> Result<(), DatabaseError> {
    let mut table = Table::open(&config.db_path)?;
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        debug!("stdin is not a terminal, reading lines directly");
        return run_reader(table, stdin.lock(), &config.prompt, &mut std::io::stdout());
    }
    run_shell(config, &mut table)?;
    table.close()
}

fn main() -> ExitCode {
    init_logger();
    let config = Config::from_args();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
