use anyhow::Result;
use clap::Parser;
use drawlot::{TimeSeeded, run};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "drawlot")]
#[command(about = "Seed once from the clock, draw ten times, print one fixed outcome per draw")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut source = TimeSeeded::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut source, &mut out)?;
    out.flush()?;
    Ok(())
}
