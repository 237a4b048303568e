use anyhow::Result;
use clap::Parser;
use taccount::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
