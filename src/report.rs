use std::io::{self, Write};
use std::path::Path;

use csv::Writer;

use crate::dijkstra::SolverResult;
use crate::error::Result;
use crate::graph::{Criterion, Weight};
use crate::network::FlightNetwork;

pub const NO_FLIGHTS: &str = "NO FLIGHTS!!!";

/// One solved city pair, with totals split back into duration and price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteReport {
    pub criterion: Criterion,
    pub departure: String,
    pub arrival: String,
    pub duration: Option<Weight>,
    pub price: Option<Weight>,
    pub path: Option<Vec<String>>,
}

impl RouteReport {
    pub fn from_result(network: &FlightNetwork, result: &SolverResult) -> Result<Self> {
        let dst = result.destination;
        let (duration, price) = match result.criterion {
            Criterion::Price => (result.cost(dst), result.distance(dst)),
            Criterion::Time => (result.distance(dst), result.cost(dst)),
        };
        let path = result
            .path()?
            .map(|p| p.into_iter().map(|v| network.city(v).to_string()).collect());
        Ok(Self {
            criterion: result.criterion,
            departure: network.city(result.source).to_string(),
            arrival: network.city(dst).to_string(),
            duration,
            price,
            path,
        })
    }

    pub fn path_string(&self) -> Option<String> {
        self.path.as_ref().map(|p| p.join(" -> "))
    }
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Departure City\tArrival City\tDuration\tPrice\t\tPath")
}

pub fn write_table<W: Write>(out: &mut W, report: &RouteReport) -> io::Result<()> {
    writeln!(
        out,
        "\t\tOptimum Route For {}",
        report.criterion.to_string().to_uppercase()
    )?;
    write_header(out)?;
    write!(out, "{}\t\t{}\t\t", report.departure, report.arrival)?;
    match (report.duration, report.price, report.path_string()) {
        (Some(duration), Some(price), Some(path)) => {
            writeln!(out, "{}\t\t{}\t\t{}", duration, price, path)
        }
        _ => writeln!(out, "{}", NO_FLIGHTS),
    }
}

pub fn write_csv<P: AsRef<Path>>(path: P, reports: &[RouteReport]) -> Result<()> {
    let mut wtr = Writer::from_path(path.as_ref())?;
    wtr.write_record(["criterion", "departure", "arrival", "duration", "price", "path"])?;
    let field = |w: Option<Weight>| w.map(|w| w.to_string()).unwrap_or_default();
    for r in reports {
        wtr.write_record(&[
            r.criterion.to_string(),
            r.departure.clone(),
            r.arrival.clone(),
            field(r.duration),
            field(r.price),
            r.path_string().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::solve;
    use crate::graph::WeightedGraph;

    fn report(criterion: Criterion) -> RouteReport {
        let network = FlightNetwork::builtin();
        let result = solve(network.graph(), 0, 8, criterion).unwrap();
        RouteReport::from_result(&network, &result).unwrap()
    }

    #[test]
    fn price_run_puts_price_in_price_column() {
        let r = report(Criterion::Price);
        assert_eq!(r.duration, Some(15));
        assert_eq!(r.price, Some(120));
        assert_eq!(r.path_string().as_deref(), Some("Bodrum -> Roma -> Helsinki"));
    }

    #[test]
    fn time_run_puts_time_in_duration_column() {
        let r = report(Criterion::Time);
        assert_eq!(r.duration, Some(14));
        assert_eq!(r.price, Some(380));
    }

    #[test]
    fn table_row() {
        let mut out = Vec::new();
        write_table(&mut out, &report(Criterion::Price)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "\t\tOptimum Route For PRICE");
        assert!(lines[1].starts_with("Departure City"));
        assert_eq!(lines[2], "Bodrum\t\tHelsinki\t\t15\t\t120\t\tBodrum -> Roma -> Helsinki");
    }

    #[test]
    fn unreachable_row_reads_no_flights() {
        let network = FlightNetwork::new(
            vec!["A".to_string(), "B".to_string()],
            WeightedGraph::new(2),
        );
        let result = solve(network.graph(), 0, 1, Criterion::Time).unwrap();
        let r = RouteReport::from_result(&network, &result).unwrap();
        assert_eq!(r.path, None);

        let mut out = Vec::new();
        write_table(&mut out, &r).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("A\t\tB\t\tNO FLIGHTS!!!\n"));
    }
}
