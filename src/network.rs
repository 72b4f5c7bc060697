/*
City names and the flight graph between them.

The built-in network is the nine-city, fourteen-flight map. Other networks load from a CSV with
a `from,to,time,price` header, where endpoints are either all integer vertex ids or all city
names (names get ids in order of first appearance).
*/

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use fnv::FnvHashMap;

use crate::error::{Error, Result};
use crate::graph::{EdgeWeight, NodeId, WeightedGraph};

pub const CITIES: [&str; 9] = [
    "Bodrum",
    "Ankara",
    "Istanbul",
    "Amsterdam",
    "Barcelona",
    "Paris",
    "London",
    "Roma",
    "Helsinki",
];

/// (from, to, time, price)
pub const FLIGHTS: [(NodeId, NodeId, EdgeWeight, EdgeWeight); 14] = [
    (0, 1, 4, 300),
    (0, 7, 8, 50),
    (1, 2, 8, 30),
    (1, 7, 11, 100),
    (2, 3, 7, 200),
    (2, 8, 2, 50),
    (2, 5, 4, 300),
    (3, 4, 9, 120),
    (3, 5, 14, 30),
    (4, 5, 10, 140),
    (5, 6, 2, 700),
    (6, 7, 1, 1400),
    (6, 8, 6, 600),
    (7, 8, 7, 70),
];

#[derive(Clone, Debug)]
pub struct FlightNetwork {
    cities: Vec<String>,
    index: FnvHashMap<String, NodeId>,
    graph: WeightedGraph,
}

struct RawRoute {
    line: u64,
    from: String,
    to: String,
    time: EdgeWeight,
    price: EdgeWeight,
}

impl FlightNetwork {
    pub fn builtin() -> Self {
        let cities = CITIES.iter().map(|c| c.to_string()).collect();
        Self::new(cities, WeightedGraph::from_edges(CITIES.len(), &FLIGHTS))
    }

    /// Pairs city labels with a graph. `cities[v]` names vertex `v`.
    pub fn new(cities: Vec<String>, graph: WeightedGraph) -> Self {
        assert_eq!(cities.len(), graph.vertex_count(), "one label per vertex");
        let index = cities
            .iter()
            .enumerate()
            .map(|(v, name)| (name.clone(), v))
            .collect();
        Self {
            cities,
            index,
            graph,
        }
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let network = Self::from_reader(file)?;
        tracing::info!(
            path = %path.as_ref().display(),
            cities = network.city_count(),
            flights = network.graph.edge_count(),
            "loaded route file"
        );
        Ok(network)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut routes = Vec::new();
        for result in rdr.records() {
            routes.push(parse_route(&result?)?);
        }
        if routes.is_empty() {
            return Err(Error::EmptyNetwork);
        }

        let numeric: Option<Vec<(NodeId, NodeId)>> = routes
            .iter()
            .map(|r| Some((r.from.parse().ok()?, r.to.parse().ok()?)))
            .collect();

        let mut cities: Vec<String> = Vec::new();
        let mut edges = Vec::with_capacity(routes.len());
        if let Some(ids) = numeric {
            // A file of m flights touches at most 2m distinct vertices.
            let limit = 2 * routes.len();
            for (r, (u, v)) in routes.iter().zip(ids) {
                if let Some(id) = [u, v].into_iter().find(|&id| id >= limit) {
                    return Err(Error::MalformedRoute {
                        line: r.line,
                        reason: format!(
                            "vertex id {} must be below {} for a file of {} flights",
                            id,
                            limit,
                            routes.len()
                        ),
                    });
                }
                edges.push((u, v, r.time, r.price));
            }
            let n = edges.iter().map(|&(u, v, _, _)| u.max(v) + 1).max().unwrap_or(0);
            cities.extend((0..n).map(|v| v.to_string()));
        } else {
            let mut index: FnvHashMap<String, NodeId> = FnvHashMap::default();
            let mut id_of = |name: &str, cities: &mut Vec<String>| {
                *index.entry(name.to_string()).or_insert_with(|| {
                    cities.push(name.to_string());
                    cities.len() - 1
                })
            };
            for r in &routes {
                let u = id_of(&r.from, &mut cities);
                let v = id_of(&r.to, &mut cities);
                edges.push((u, v, r.time, r.price));
            }
        }

        for r in routes.iter().filter(|r| r.from == r.to) {
            tracing::warn!(line = r.line, city = %r.from, "self-loop flight has no effect on routes");
        }

        let graph = WeightedGraph::from_edges(cities.len(), &edges);
        Ok(Self::new(cities, graph))
    }

    #[inline]
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    #[inline]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Label of vertex `v`. Panics if `v` is out of range.
    pub fn city(&self, v: NodeId) -> &str {
        &self.cities[v]
    }

    /// Exact-match lookup.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn resolve_pair(&self, departure: &str, arrival: &str) -> Result<(NodeId, NodeId)> {
        let lookup = |name: &str| {
            self.resolve(name)
                .ok_or_else(|| Error::UnknownCity(name.to_string()))
        };
        Ok((lookup(departure)?, lookup(arrival)?))
    }
}

fn parse_route(record: &StringRecord) -> Result<RawRoute> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let malformed = |reason: String| Error::MalformedRoute { line, reason };

    if record.len() != 4 {
        return Err(malformed(format!("expected 4 fields, found {}", record.len())));
    }
    let weight = |i: usize, what: &str| {
        record[i]
            .parse::<EdgeWeight>()
            .map_err(|e| malformed(format!("{} {:?}: {}", what, &record[i], e)))
    };
    let route = RawRoute {
        line,
        from: record[0].to_string(),
        to: record[1].to_string(),
        time: weight(2, "time")?,
        price: weight(3, "price")?,
    };
    if route.from.is_empty() || route.to.is_empty() {
        return Err(malformed("empty endpoint".to_string()));
    }
    Ok(route)
}
