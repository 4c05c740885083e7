//! Script Runner
//!
//! Replays parsed commands against a cache and writes their output.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::cache::Cache;
use crate::command::{Command, ABSENT};
use crate::error::Result;

// == Script Runner ==
/// Executes commands against one cache, writing results to `out`.
pub struct ScriptRunner<W: Write> {
    cache: Box<dyn Cache<String, String>>,
    out: W,
}

impl<W: Write> ScriptRunner<W> {
    // == Constructor ==
    pub fn new(cache: Box<dyn Cache<String, String>>, out: W) -> Self {
        Self { cache, out }
    }

    // == Run ==
    /// Executes every line of `input`.
    ///
    /// Malformed lines are logged and skipped. Returns the number of commands
    /// executed.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<usize> {
        let mut executed = 0;

        for (number, line) in input.lines().enumerate() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    self.execute(command)?;
                    executed += 1;
                }
                Ok(None) => {}
                Err(err) => warn!(line = number + 1, "Skipping line: {}", err),
            }
        }

        self.out.flush()?;
        Ok(executed)
    }

    // == Execute ==
    /// Executes a single command.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!(?command, "executing");

        match command {
            Command::Put { key, value } => {
                if let Some(discarded) = self.cache.put(key, value) {
                    writeln!(self.out, "DISCARD: {}", discarded.key)?;
                }
            }
            Command::Get { key } => {
                let value = self.cache.get(key.as_ref());
                writeln!(self.out, "{}", value.map(String::as_str).unwrap_or(ABSENT))?;
            }
            Command::Print => {
                let snapshot = self.cache.snapshot();
                writeln!(self.out, "Current cache:")?;
                for (key, value) in snapshot.sorted() {
                    writeln!(self.out, "{}: {}", key, value)?;
                }
            }
            Command::Dump => {
                let json = serde_json::to_string(&self.cache.snapshot())?;
                writeln!(self.out, "{}", json)?;
            }
            Command::Len => {
                writeln!(self.out, "{}", self.cache.len())?;
            }
        }

        Ok(())
    }

    /// The cache commands run against.
    pub fn cache(&self) -> &dyn Cache<String, String> {
        self.cache.as_ref()
    }

    /// Consumes the runner and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
