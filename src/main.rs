use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};

use flightpath::dijkstra;
use flightpath::frontier::FrontierKind;
use flightpath::graph::Criterion;
use flightpath::network::FlightNetwork;
use flightpath::report::{self, RouteReport};

#[derive(Parser, Debug)]
#[command(name = "flightpath")]
#[command(about = "Find the cheapest and the fastest route between two cities.", long_about = None)]
struct Cli {
    /// Departure city. Asked for on stdin if omitted.
    #[arg(short, long)]
    from: Option<String>,

    /// Arrival city. Asked for on stdin if omitted.
    #[arg(short, long)]
    to: Option<String>,

    /// Route CSV with a from,to,time,price header. Defaults to the built-in nine-city network.
    #[arg(short, long)]
    routes: Option<String>,

    #[arg(short, long, value_enum, default_value_t = CriterionArg::Both)]
    criterion: CriterionArg,

    #[arg(long, value_enum, default_value_t = FrontierKind::Indexed)]
    frontier: FrontierKind,

    /// Also write the results to this CSV.
    #[arg(short, long)]
    out: Option<String>,

    /// -v for info, -vv for debug logging on stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CriterionArg {
    Price,
    Time,
    Both,
}

impl CriterionArg {
    fn criteria(self) -> &'static [Criterion] {
        match self {
            CriterionArg::Price => &[Criterion::Price],
            CriterionArg::Time => &[Criterion::Time],
            CriterionArg::Both => &Criterion::ALL,
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("Please Enter the {} City\t: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("reading {} city", label.to_lowercase()))?;
    Ok(line.trim().to_string())
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
        .with_writer(io::stderr)
        .init();

    let network = match &cli.routes {
        Some(path) => FlightNetwork::from_csv_path(path)
            .with_context(|| format!("loading routes from {}", path))?,
        None => FlightNetwork::builtin(),
    };
    tracing::info!(
        cities = network.city_count(),
        flights = network.graph().edge_count(),
        frontier = cli.frontier.name(),
        "network ready"
    );

    let departure = match cli.from {
        Some(city) => city,
        None => prompt("Departure")?,
    };
    let arrival = match cli.to {
        Some(city) => city,
        None => prompt("Arrival")?,
    };

    let (source, destination) = match network.resolve_pair(&departure, &arrival) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::info!("{}", e);
            println!("{} ", report::NO_FLIGHTS);
            return Ok(());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut reports = Vec::new();
    for &criterion in cli.criterion.criteria() {
        let result = dijkstra::solve_using(cli.frontier, network.graph(), source, destination, criterion)?;
        let route = RouteReport::from_result(&network, &result)?;
        writeln!(out)?;
        report::write_table(&mut out, &route)?;
        reports.push(route);
    }

    if let Some(out_path) = cli.out {
        report::write_csv(&out_path, &reports)
            .with_context(|| format!("writing CSV {}", &out_path))?;
        tracing::info!(path = %out_path, rows = reports.len(), "wrote routes");
    }

    Ok(())
}
