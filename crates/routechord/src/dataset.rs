//! Dataset types and loading for routechord.
//!
//! This module defines the route and airport record types and the sources
//! that supply them: JSON files on disk, or the built-in sample dataset.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// A single flight segment between two airports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Identifier of the origin airport.
    #[serde(rename = "SourceID")]
    pub source_id: String,
    /// Identifier of the destination airport.
    #[serde(rename = "DestinationID")]
    pub destination_id: String,
    /// Number of stops on this segment.
    #[serde(rename = "Stops", default)]
    pub stops: u32,
}

impl Route {
    /// Create a nonstop route between two airports.
    #[must_use]
    pub fn nonstop(source_id: impl Into<String>, destination_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            stops: 0,
        }
    }
}

/// Metadata for a single airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Unique airport identifier.
    #[serde(rename = "AirportID")]
    pub airport_id: String,
    /// City the airport serves.
    #[serde(rename = "City")]
    pub city: String,
    /// Full airport name, when known.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country, when known.
    #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Airport {
    /// Create an airport record with just an id and city.
    #[must_use]
    pub fn new(airport_id: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            airport_id: airport_id.into(),
            city: city.into(),
            name: None,
            country: None,
        }
    }
}

/// The two tables the pipeline consumes.
///
/// Route endpoints are assumed to reference valid airport ids; this is not
/// enforced here, matching the behavior of the upstream sample data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Flight segments.
    pub routes: Vec<Route>,
    /// Airport metadata, one record per airport.
    pub airports: Vec<Airport>,
}

impl Dataset {
    /// Build a lookup table from airport id to airport record.
    ///
    /// Duplicate ids keep the first record seen.
    #[must_use]
    pub fn airport_index(&self) -> HashMap<&str, &Airport> {
        let mut index = HashMap::with_capacity(self.airports.len());
        for airport in &self.airports {
            index.entry(airport.airport_id.as_str()).or_insert(airport);
        }
        index
    }

    /// Number of route records.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Check if the dataset has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// A source of route and airport tables.
///
/// Implementors supply the two tables the pipeline consumes, keeping the
/// pipeline itself independent of where the data lives.
pub trait DatasetSource {
    /// The name of this source (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Load both tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn load(&self) -> Result<Dataset>;
}

/// Loads routes and airports from JSON files on disk.
///
/// Each file holds a JSON array of records using the upstream column names
/// (`SourceID`, `DestinationID`, `Stops` / `AirportID`, `City`).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    routes_path: PathBuf,
    airports_path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from the given file paths.
    #[must_use]
    pub fn new(routes_path: impl Into<PathBuf>, airports_path: impl Into<PathBuf>) -> Self {
        Self {
            routes_path: routes_path.into(),
            airports_path: airports_path.into(),
        }
    }

    fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        debug!("Reading dataset from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| Error::DatasetOpen {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::DatasetParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DatasetSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn load(&self) -> Result<Dataset> {
        let routes = Self::read_table(&self.routes_path)?;
        let airports = Self::read_table(&self.airports_path)?;
        let dataset = Dataset { routes, airports };
        info!(
            "Loaded {} routes and {} airports",
            dataset.routes.len(),
            dataset.airports.len()
        );
        Ok(dataset)
    }
}

/// The built-in sample dataset.
///
/// A small, synthetic slice of a US domestic route network, enough to
/// exercise the full pipeline without external files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    /// Create the sample source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSource for SampleSource {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn load(&self) -> Result<Dataset> {
        Ok(sample_dataset())
    }
}

/// Build the built-in sample dataset.
#[must_use]
pub fn sample_dataset() -> Dataset {
    let airports = vec![
        Airport::new("ATL", "Atlanta"),
        Airport::new("ORD", "Chicago"),
        Airport::new("DFW", "Dallas-Fort Worth"),
        Airport::new("DEN", "Denver"),
        Airport::new("LAX", "Los Angeles"),
        Airport::new("SFO", "San Francisco"),
        Airport::new("SEA", "Seattle"),
        Airport::new("JFK", "New York"),
        Airport::new("MIA", "Miami"),
        Airport::new("BOS", "Boston"),
    ];

    // (source, destination, segments) triples; one Route row per segment.
    let pairs: &[(&str, &str, usize)] = &[
        ("ATL", "ORD", 6),
        ("ATL", "LAX", 5),
        ("ATL", "JFK", 5),
        ("ATL", "MIA", 4),
        ("ORD", "ATL", 6),
        ("ORD", "DEN", 4),
        ("ORD", "SFO", 3),
        ("DFW", "ATL", 3),
        ("DFW", "LAX", 3),
        ("DEN", "ORD", 4),
        ("DEN", "SEA", 2),
        ("LAX", "SFO", 5),
        ("LAX", "JFK", 4),
        ("SFO", "LAX", 5),
        ("SFO", "SEA", 3),
        ("SEA", "SFO", 3),
        ("JFK", "LAX", 4),
        ("JFK", "BOS", 3),
        ("MIA", "ATL", 4),
        ("BOS", "JFK", 3),
    ];

    let mut routes = Vec::new();
    for &(src, dst, n) in pairs {
        for _ in 0..n {
            routes.push(Route::nonstop(src, dst));
        }
    }

    Dataset { routes, airports }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_nonstop() {
        let route = Route::nonstop("ATL", "ORD");
        assert_eq!(route.source_id, "ATL");
        assert_eq!(route.destination_id, "ORD");
        assert_eq!(route.stops, 0);
    }

    #[test]
    fn test_airport_new() {
        let airport = Airport::new("SEA", "Seattle");
        assert_eq!(airport.airport_id, "SEA");
        assert_eq!(airport.city, "Seattle");
        assert!(airport.name.is_none());
        assert!(airport.country.is_none());
    }

    #[test]
    fn test_route_deserialize_upstream_names() {
        let json = r#"{"SourceID": "3682", "DestinationID": "3876", "Stops": 0}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.source_id, "3682");
        assert_eq!(route.destination_id, "3876");
    }

    #[test]
    fn test_route_deserialize_missing_stops() {
        let json = r#"{"SourceID": "A", "DestinationID": "B"}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.stops, 0);
    }

    #[test]
    fn test_airport_deserialize_upstream_names() {
        let json = r#"{"AirportID": "3682", "City": "Atlanta", "Country": "United States"}"#;
        let airport: Airport = serde_json::from_str(json).unwrap();
        assert_eq!(airport.airport_id, "3682");
        assert_eq!(airport.city, "Atlanta");
        assert_eq!(airport.country.as_deref(), Some("United States"));
    }

    #[test]
    fn test_airport_index() {
        let dataset = sample_dataset();
        let index = dataset.airport_index();
        assert_eq!(index.len(), dataset.airports.len());
        assert_eq!(index.get("ATL").unwrap().city, "Atlanta");
    }

    #[test]
    fn test_airport_index_duplicate_keeps_first() {
        let dataset = Dataset {
            routes: vec![],
            airports: vec![Airport::new("X", "First"), Airport::new("X", "Second")],
        };
        let index = dataset.airport_index();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("X").unwrap().city, "First");
    }

    #[test]
    fn test_dataset_empty() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.route_count(), 0);
    }

    #[test]
    fn test_sample_source_load() {
        let source = SampleSource::new();
        assert_eq!(source.name(), "sample");

        let dataset = source.load().unwrap();
        assert!(!dataset.is_empty());
        assert_eq!(dataset.airports.len(), 10);
    }

    #[test]
    fn test_sample_dataset_endpoints_are_known() {
        let dataset = sample_dataset();
        let index = dataset.airport_index();
        for route in &dataset.routes {
            assert!(index.contains_key(route.source_id.as_str()));
            assert!(index.contains_key(route.destination_id.as_str()));
        }
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/routes.json", "/nonexistent/airports.json");
        assert_eq!(source.name(), "json-file");

        let result = source.load();
        assert!(matches!(result, Err(Error::DatasetOpen { .. })));
    }

    #[test]
    fn test_json_file_source_parse_error() {
        let dir = std::env::temp_dir().join("routechord-test-parse");
        std::fs::create_dir_all(&dir).unwrap();
        let routes = dir.join("routes.json");
        let airports = dir.join("airports.json");
        std::fs::write(&routes, "not json").unwrap();
        std::fs::write(&airports, "[]").unwrap();

        let source = JsonFileSource::new(&routes, &airports);
        let result = source.load();
        assert!(matches!(result, Err(Error::DatasetParse { .. })));
    }

    #[test]
    fn test_json_file_source_round_trip() {
        let dir = std::env::temp_dir().join("routechord-test-load");
        std::fs::create_dir_all(&dir).unwrap();
        let routes = dir.join("routes.json");
        let airports = dir.join("airports.json");
        std::fs::write(
            &routes,
            r#"[{"SourceID": "A", "DestinationID": "B", "Stops": 0}]"#,
        )
        .unwrap();
        std::fs::write(&airports, r#"[{"AirportID": "A", "City": "Alpha"}]"#).unwrap();

        let source = JsonFileSource::new(&routes, &airports);
        let dataset = source.load().unwrap();
        assert_eq!(dataset.route_count(), 1);
        assert_eq!(dataset.airports.len(), 1);
    }
}
