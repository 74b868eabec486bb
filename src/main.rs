use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;
use std::time::Instant;

use clap::Parser;

use roster::{Roster, RosterError, RosterOptions};

#[derive(Parser)]
#[command(about = "Point dictionary backed by a splay tree (Sleator & Tarjan 1985)")]
struct Cli {
    /// Command script to run; reads stdin when absent or "-"
    input: Option<String>,

    /// Echo commands and print a run summary to stderr
    #[arg(long)]
    verbose: bool,
}

fn open_input(path: Option<&str>) -> io::Result<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
    }
}

fn run<R: BufRead>(roster: &mut Roster, input: R) -> Result<(), RosterError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = roster.run(input, &mut out);
    // Responses written before a failure still reach stdout.
    out.flush()?;
    result
}

fn main() {
    let cli = Cli::parse();

    let input = open_input(cli.input.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: reading {}: {}", cli.input.as_deref().unwrap_or("-"), e);
        process::exit(1);
    });

    let opts = RosterOptions {
        verbose: cli.verbose,
    };
    let mut roster = Roster::new(opts);
    let t0 = Instant::now();
    let result = run(&mut roster, input);
    let elapsed = t0.elapsed();

    if cli.verbose {
        let stats = roster.summary();
        let tree = roster.tree();
        eprintln!("Commands:     {}", stats.num_commands);
        eprintln!(
            "  Inserts:    {}  Queries: {}  Deletes: {}  Prints: {}",
            stats.num_inserts, stats.num_queries, stats.num_deletes, stats.num_prints
        );
        eprintln!("  Not found:  {}", stats.num_not_found);
        eprintln!("Entries:      {}", tree.len());
        eprintln!("Rotations:    {}", tree.rotations());
        eprintln!("Time:         {:.3}s", elapsed.as_secs_f64());
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
