use thiserror::Error;

/// A place resolved from a knowledge base: the query-layer identifier plus
/// the label and coordinates pulled from its entity document.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub id: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("response from {url} is not the expected JSON shape")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("entity {id}: `{path}` missing from entity document")]
    MissingField { id: String, path: String },
    #[error("entity {id}: `{path}` is not a number")]
    NotANumber { id: String, path: String },
}
