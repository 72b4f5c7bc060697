use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;

use flightpath::dijkstra;
use flightpath::frontier::FrontierKind;
use flightpath::graph::Criterion;
use flightpath::network::FlightNetwork;

#[derive(Parser, Debug)]
#[command(name = "flightpath-csv")]
#[command(about = "Load a route CSV (from,to,time,price) and time repeated solves from successive sources.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Number of runs. Run i solves from source i (mod the city count) under each criterion.
    #[arg(short, long)]
    num_runs: usize,

    #[arg(short, long, value_enum, default_value_t = FrontierKind::Indexed)]
    frontier: FrontierKind,

    /// -v for info, -vv for debug logging on stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let network = FlightNetwork::from_csv_path(&cli.csv)
        .with_context(|| format!("loading routes from {}", &cli.csv))?;
    let graph = network.graph();
    let n = graph.vertex_count();

    for criterion in Criterion::ALL {
        let mut duration_millis = Vec::with_capacity(cli.num_runs);
        let mut reachable = 0_usize;
        for run in 0..cli.num_runs {
            let src_idx = run % n;
            let now = Instant::now();
            let result = dijkstra::solve_using(cli.frontier, graph, src_idx, src_idx, criterion)?;
            duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
            reachable += (0..n).filter(|&v| result.is_reachable(v)).count();
        }
        tracing::info!(
            %criterion,
            frontier = cli.frontier.name(),
            runs = cli.num_runs,
            reachable,
            "finished"
        );
        println!("{}: {:?}", criterion, duration_millis);
    }

    Ok(())
}
