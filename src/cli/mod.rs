mod session;

pub use session::{Flow, Session};

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write, stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::LedgerStore;
use crate::domain::AgentId;

/// T-Account - two-agent balance sheet ledger
///
/// Starts a session and reads commands one per line (type `help` for the list).
/// Nothing is saved when the session ends; use `export` to keep a copy.
#[derive(Parser, Debug)]
#[command(name = "taccount")]
#[command(about = "Record assets and liabilities for two agents and check that they balance")]
#[command(version)]
pub struct Cli {
    /// Display name for agent A
    #[arg(long, default_value = AgentId::A.default_name())]
    pub agent_a: String,

    /// Display name for agent B
    #[arg(long, default_value = AgentId::B.default_name())]
    pub agent_b: String,

    /// Read session commands from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Do not print the T-account view after each change
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.run_to(&mut stdout().lock())
    }

    /// Run the session, writing its output to `out` instead of stdout.
    pub fn run_to<W: Write>(self, out: &mut W) -> Result<()> {
        init_tracing(self.verbose);

        let store = LedgerStore::with_names(&self.agent_a, &self.agent_b);
        let mut session = Session::new(store, self.quiet);

        let input: Box<dyn BufRead> = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(stdin().lock()),
        };

        info!(
            agent_a = %session.store().agent(AgentId::A).name,
            agent_b = %session.store().agent(AgentId::B).name,
            "session started"
        );
        session.run(input, out)?;

        let report = session.store().balance_report();
        info!(system_balanced = report.system.is_balanced, "session ended");
        Ok(())
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `--verbose` is given.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("taccount=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taccount=warn"))
    };

    // A subscriber may already be installed (tests, embedding); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
