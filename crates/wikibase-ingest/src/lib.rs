//! Clients for the Wikidata-family knowledge bases feeding the map.
//!
//! The crate is split per concern:
//! - `sparql`: POSTs a query to a SPARQL endpoint and pulls entity
//!   identifiers out of the result bindings.
//! - `entity`: enriches identifiers with label and coordinates via the
//!   MediaWiki `wbgetentities` API.
//! - `types`: shared records and the ingest error enum.
//!
//! Network fetches and JSON traversal are separate steps throughout, so the
//! traversal logic is testable without a live endpoint.

pub use entity::{fetch_place, fetch_places, place_from_entity};
pub use sparql::{Binding, Bindings, SparqlResults, Term, item_ids, query_item_ids};
pub use types::{IngestError, Place};

mod entity;
mod sparql;
mod types;
