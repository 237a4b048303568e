use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::application::{AppError, Command, LedgerStore};
use crate::domain::{AgentId, Side};
use crate::io::{Exporter, render_side, render_summary, render_view};

/// One line typed into a session
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Record an entry (e.g. `add a asset 100.00 Cash`)
    Add {
        /// Agent: a or b
        agent: String,

        /// Side: asset or liability
        side: String,

        /// Amount (e.g. "50.00", "-12.5")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Label (defaults to "Unnamed Asset" / "Unnamed Liability")
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        label: Vec<String>,
    },

    /// Delete the entry at INDEX from one side of an agent
    Delete {
        /// Agent: a or b
        agent: String,

        /// Side: asset or liability
        side: String,

        /// Entry index as shown in the listing
        #[arg(allow_hyphen_values = true)]
        index: String,
    },

    /// Clear every entry (agent names are kept)
    Reset,

    /// Set an agent's display name (blank restores the default)
    Rename {
        /// Agent: a or b
        agent: String,

        /// New display name
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Show the T-account table and balance summary
    Show,

    /// List the entries of one side of an agent
    List {
        /// Agent: a or b
        agent: String,

        /// Side: asset or liability
        side: String,
    },

    /// Show balance totals
    Report {
        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Export the session: entries, report or snapshot
    Export {
        /// What to export: entries, report, snapshot
        export_type: String,

        /// Format: csv, json (default: csv, json for snapshot)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (session output if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive ledger session. Owns its store; nothing is shared between sessions.
pub struct Session {
    store: LedgerStore,
    quiet: bool,
}

impl Session {
    pub fn new(store: LedgerStore, quiet: bool) -> Self {
        Self { store, quiet }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Read commands until end of input or `quit`.
    /// A bad command is reported and the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(out, "Error: {:#}", err)?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Parse and run a single line.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shell_words::split(line).context("Could not split command line")?;
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Help output and usage errors are both shown to the user as-is
                write!(out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        self.dispatch(parsed.command, out)
    }

    fn dispatch<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Add {
                agent,
                side,
                amount,
                label,
            } => {
                let command = Command::Add {
                    agent: parse_agent(&agent)?,
                    side: parse_side(&side)?,
                    amount,
                    label: label.join(" "),
                };
                self.apply(command, out)?;
            }

            SessionCommand::Delete { agent, side, index } => {
                let index: usize = index
                    .parse()
                    .map_err(|_| AppError::InvalidIndex(index.clone()))?;
                let command = Command::Delete {
                    agent: parse_agent(&agent)?,
                    side: parse_side(&side)?,
                    index,
                };
                self.apply(command, out)?;
            }

            SessionCommand::Reset => self.apply(Command::Reset, out)?,

            SessionCommand::Rename { agent, name } => {
                let command = Command::Rename {
                    agent: parse_agent(&agent)?,
                    name: name.join(" "),
                };
                self.apply(command, out)?;
            }

            SessionCommand::Show => write!(out, "{}", render_view(&self.store))?,

            SessionCommand::List { agent, side } => {
                let (agent, side) = (parse_agent(&agent)?, parse_side(&side)?);
                write!(out, "{}", render_side(&self.store, agent, side))?;
            }

            SessionCommand::Report { format } => {
                let exporter = Exporter::new(&self.store);
                match format.as_str() {
                    "table" => write!(out, "{}", render_summary(&self.store.balance_report()))?,
                    "json" => {
                        exporter.export_report_json(&mut *out)?;
                    }
                    "csv" => {
                        exporter.export_report_csv(&mut *out)?;
                    }
                    _ => {
                        return Err(AppError::UnsupportedFormat {
                            format: format.clone(),
                            target: "report".to_string(),
                        }
                        .into());
                    }
                }
            }

            SessionCommand::Export {
                export_type,
                format,
                output,
            } => self.export(&export_type, format.as_deref(), output.as_deref(), out)?,

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Apply a ledger command and, unless quiet, print the refreshed view.
    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        let outcome = self.store.apply(command);
        debug!(?outcome, changed = outcome.changed(), "applied command");
        if !self.quiet {
            write!(out, "{}", render_view(&self.store))?;
        }
        Ok(())
    }

    fn export<W: Write>(
        &self,
        export_type: &str,
        format: Option<&str>,
        output: Option<&str>,
        out: &mut W,
    ) -> Result<()> {
        let exporter = Exporter::new(&self.store);

        let mut file;
        let writer: &mut dyn Write = match output {
            Some(path) => {
                file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path))?;
                &mut file
            }
            None => &mut *out,
        };

        let unsupported = |format: &str| AppError::UnsupportedFormat {
            format: format.to_string(),
            target: export_type.to_string(),
        };

        let summary = match (export_type, format.unwrap_or_default()) {
            ("entries", "" | "csv") => {
                format!("{} entries", exporter.export_entries_csv(writer)?)
            }
            ("entries", "json") => {
                format!("{} entries", exporter.export_entries_json(writer)?)
            }
            ("report", "" | "csv") => {
                format!("{} balance rows", exporter.export_report_csv(writer)?)
            }
            ("report", "json") => {
                exporter.export_report_json(writer)?;
                "balance report".to_string()
            }
            ("snapshot", "" | "json") => {
                let snapshot = exporter.export_snapshot_json(writer)?;
                let entries: usize = snapshot
                    .agents
                    .iter()
                    .map(|a| a.assets.len() + a.liabilities.len())
                    .sum();
                format!("snapshot with {} entries", entries)
            }
            ("entries" | "report" | "snapshot", other) => return Err(unsupported(other).into()),
            (other, _) => return Err(AppError::UnknownExportType(other.to_string()).into()),
        };

        if let Some(path) = output {
            writeln!(out, "Exported {} to {}", summary, path)?;
        }
        Ok(())
    }
}

fn parse_agent(input: &str) -> Result<AgentId, AppError> {
    AgentId::from_str(input).ok_or_else(|| AppError::UnknownAgent(input.to_string()))
}

fn parse_side(input: &str) -> Result<Side, AppError> {
    Side::from_str(input).ok_or_else(|| AppError::UnknownSide(input.to_string()))
}
