//! Interactive menu: pick a problem kind, pick an input, print the result.
//!
//! Nothing is carried between iterations; every choice is dispatched to the
//! same handlers the subcommands use. Invalid choices and failing inputs
//! are reported and the menu is shown again.
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::warn;

use crate::commands::{run_orbit, run_population, run_system};
use crate::config::RunConfig;

type Handler<W> = fn(&Path, &RunConfig, &mut W) -> Result<()>;

const SEPARATOR: &str = "-------------------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    System,
    Population,
    Orbit,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::System),
            "2" => Some(MenuChoice::Population),
            "3" => Some(MenuChoice::Orbit),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or the input ends.
pub fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W, config: &RunConfig) -> Result<()> {
    loop {
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "Choose the kind of problem to solve:")?;
        writeln!(out)?;
        writeln!(out, "1 - linear system (augmented matrix file)")?;
        writeln!(out, "2 - population growth (cubic least-squares trend)")?;
        writeln!(out, "3 - planetary orbit (conic least-squares fit)")?;
        writeln!(out, "4 - exit")?;

        let Some(line) = prompt(input, out, "Choice: ")? else {
            return Ok(());
        };
        let choice = match MenuChoice::parse(&line) {
            Some(choice) => choice,
            None => {
                warn!("Invalid menu choice: {:?}", line.trim());
                writeln!(out, "Invalid choice '{}'. Enter a number from 1 to 4.", line.trim())?;
                continue;
            }
        };

        let (sample, handler): (&Path, Handler<W>) = match choice {
            MenuChoice::Exit => return Ok(()),
            MenuChoice::System => (config.samples.system.as_path(), run_system as Handler<W>),
            MenuChoice::Population => (config.samples.population.as_path(), run_population as Handler<W>),
            MenuChoice::Orbit => (config.samples.orbit.as_path(), run_orbit as Handler<W>),
        };

        let path = match choose_input(input, out, sample)? {
            Selection::File(path) => path,
            Selection::Invalid => continue,
            Selection::EndOfInput => return Ok(()),
        };

        writeln!(out)?;
        let result = handler(&path, config, out);
        if let Err(e) = result {
            writeln!(out, "Error: {:#}", e)?;
        }
    }
}

enum Selection {
    File(PathBuf),
    Invalid,
    EndOfInput,
}

/// Ask whether to run the bundled sample or a user file.
fn choose_input<R: BufRead, W: Write>(input: &mut R, out: &mut W, sample: &Path) -> Result<Selection> {
    writeln!(out)?;
    writeln!(out, "1 - run the bundled sample ({})", sample.display())?;
    writeln!(out, "2 - read another file in the same format")?;

    let Some(line) = prompt(input, out, "Choice: ")? else {
        return Ok(Selection::EndOfInput);
    };
    match line.trim() {
        "1" => Ok(Selection::File(sample.to_path_buf())),
        "2" => {
            let Some(path) = prompt(input, out, "File name: ")? else {
                return Ok(Selection::EndOfInput);
            };
            let path = path.trim();
            if path.is_empty() {
                writeln!(out, "No file name given.")?;
                return Ok(Selection::Invalid);
            }
            Ok(Selection::File(PathBuf::from(path)))
        }
        other => {
            writeln!(out, "Invalid choice '{}'. Enter 1 or 2.", other)?;
            Ok(Selection::Invalid)
        }
    }
}

/// Print `message` and read one line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line))
}
