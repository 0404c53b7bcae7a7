use std::io::{BufRead, Write};

use log::warn;

use crate::{
    executor::{
        ExecuteResult, execute_statement,
        meta::{MetaCommandResult, do_meta_command},
    },
    planner::parser::StatementParser,
    storage::table::Table,
    types::error::{DatabaseError, Result},
};

pub const DEFAULT_PROMPT: &str = "db > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Handles one line of input with its trailing newline already removed.
/// Everything meant for the user goes to `out`; only fatal storage errors
/// come back as `Err`.
pub fn process_line<W: Write>(table: &mut Table, line: &str, out: &mut W) -> Result<LineOutcome> {
    if line.starts_with('.') {
        match do_meta_command(line, table, out)? {
            MetaCommandResult::Success => {}
            MetaCommandResult::Exit => return Ok(LineOutcome::Exit),
            MetaCommandResult::Unrecognized => {
                warn!("Unrecognized meta command {:?}", line);
                writeln!(out, "Unrecognized command '{}'", line)?;
            }
        }
        return Ok(LineOutcome::Continue);
    }

    let statement = match StatementParser::new().parse(line) {
        Ok(statement) => statement,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(LineOutcome::Continue);
        }
    };

    match execute_statement(&statement, table, out)? {
        ExecuteResult::Success => writeln!(out, "Executed.")?,
        ExecuteResult::TableFull => writeln!(out, "Error: Table full.")?,
    }
    Ok(LineOutcome::Continue)
}

/// Feeds `lines` through a fresh session on `table`, printing `prompt`
/// before each one, and closes the table when the input ends or `.exit`
/// is reached.
pub fn run_script<I, S, W>(table: Table, lines: I, prompt: &str, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    drive(table, lines.into_iter().map(Ok), prompt, out)
}

/// Same session as `run_script`, reading lines from `reader` as they
/// arrive. Used when stdin is a pipe or a file instead of a terminal.
pub fn run_reader<R, W>(table: Table, reader: R, prompt: &str, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    drive(
        table,
        reader.lines().map(|line| line.map_err(DatabaseError::from)),
        prompt,
        out,
    )
}

fn drive<I, S, W>(mut table: Table, lines: I, prompt: &str, out: &mut W) -> Result<()>
where
    I: Iterator<Item = Result<S>>,
    S: AsRef<str>,
    W: Write,
{
    for line in lines {
        let line = line?;
        write!(out, "{}", prompt)?;
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if process_line(&mut table, line, out)? == LineOutcome::Exit {
            break;
        }
    }
    out.flush()?;
    table.close()
}
