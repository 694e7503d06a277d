use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crossing_core::{validate_totals, Searcher};

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "crossing",
    version,
    about = "A* solver for the missionaries-and-cannibals river crossing"
)]
struct Args {
    /// Total number of missionaries (prompted for when omitted)
    #[arg(long, short = 'm')]
    missionaries: Option<i32>,

    /// Total number of cannibals (prompted for when omitted)
    #[arg(long, short = 'c')]
    cannibals: Option<i32>,

    /// Print the raw search result as JSON instead of the step report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the report on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    info!(core_version = %crossing_core::version(), "starting crossing solver");

    let total_m = match args.missionaries {
        Some(n) => n,
        None => prompt_count("Enter number of missionaries: ")?,
    };
    let total_c = match args.cannibals {
        Some(n) => n,
        None => prompt_count("Enter number of cannibals: ")?,
    };

    if let Err(e) = validate_totals(total_m, total_c) {
        println!("Invalid input: {e}");
        return Ok(());
    }

    let searcher = Searcher::new(total_m, total_c);
    let result = searcher.solve();
    info!(
        expanded = result.expanded,
        solved = result.path.is_some(),
        "search finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result.path {
        Some(steps) => {
            println!("\nSteps to solve the problem:\n");
            println!("{}", render::diagram(&searcher.start_state()));
            println!("Initial State\n");
            for (i, step) in steps.iter().enumerate() {
                print!("{}", render::step_report(i + 1, step));
            }
        }
        None => println!("No solution found."),
    }

    Ok(())
}

fn prompt_count(prompt: &str) -> Result<i32> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading count from stdin")?;
    line.trim()
        .parse()
        .with_context(|| format!("expected an integer, got {:?}", line.trim()))
}
