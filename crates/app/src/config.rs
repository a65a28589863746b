//! Runtime configuration. Every value has a compiled default and can be
//! overridden through an environment variable; there are no CLI flags.

use std::env;
use std::path::PathBuf;

/// Endpoints, file locations, and the listen address.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Wikidata SPARQL query service.
    pub wikidata_sparql: String,
    /// Wikidata entity API (`wbgetentities`).
    pub wikidata_api: String,
    /// FLMR Wikibase Cloud SPARQL endpoint.
    pub g42_sparql: String,
    /// FLMR Wikibase Cloud entity API.
    pub g42_api: String,
    /// Directory holding the fixed-name CSV/GeoJSON/icon files.
    pub data_dir: PathBuf,
    pub bind_address: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            wikidata_sparql: var_or("G42_WIKIDATA_SPARQL", "https://query.wikidata.org/sparql"),
            wikidata_api: var_or("G42_WIKIDATA_API", "https://www.wikidata.org/w/api.php"),
            g42_sparql: var_or(
                "G42_FLMR_SPARQL",
                "https://flmr-db.wikibase.cloud/query/sparql",
            ),
            g42_api: var_or("G42_FLMR_API", "https://flmr-db.wikibase.cloud/w/api.php"),
            data_dir: PathBuf::from(var_or("G42_DATA_DIR", "data")),
            bind_address: var_or("G42_BIND", "0.0.0.0"),
            port: env::var("G42_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Path of a fixed-name file inside the data directory.
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
