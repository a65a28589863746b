//! Entity enrichment via the MediaWiki `wbgetentities` API.
//!
//! [`fetch_place`] performs the GET and status check; [`place_from_entity`]
//! is the pure traversal of the entity document. Coordinates live at
//! `entities.<id>.claims.<property>[0].mainsnak.datavalue.value` and the
//! label at `entities.<id>.labels.en.value`; any missing key along either
//! path is reported as a distinct [`IngestError`].

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::types::{IngestError, Place};

/// Fetch the entity document for `id` from `api` and extract a [`Place`]
/// using the coordinate claim named by `coordinate_property`.
pub fn fetch_place(
    client: &Client,
    api: &str,
    id: &str,
    coordinate_property: &str,
) -> Result<Place, IngestError> {
    let response = client
        .get(api)
        .query(&[
            ("action", "wbgetentities"),
            ("ids", id),
            ("format", "json"),
            ("languages", "en"),
        ])
        .send()
        .map_err(|source| IngestError::Transport {
            url: api.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            url: api.to_string(),
            status,
        });
    }

    let document: Value = response.json().map_err(|source| IngestError::Body {
        url: api.to_string(),
        source,
    })?;

    place_from_entity(&document, id, coordinate_property)
}

/// Enrich every identifier in `ids`, preserving order. The first failing
/// entity aborts the whole batch; there is no partial result.
pub fn fetch_places(
    client: &Client,
    api: &str,
    ids: &[String],
    coordinate_property: &str,
) -> Result<Vec<Place>, IngestError> {
    let mut places = Vec::with_capacity(ids.len());
    for id in ids {
        let place = fetch_place(client, api, id, coordinate_property)?;
        debug!(
            "resolved {id} -> {} ({}, {})",
            place.label, place.latitude, place.longitude
        );
        places.push(place);
    }
    Ok(places)
}

/// Pure traversal of a `wbgetentities` document. Does not touch the network.
pub fn place_from_entity(
    document: &Value,
    id: &str,
    coordinate_property: &str,
) -> Result<Place, IngestError> {
    let entity = document
        .get("entities")
        .and_then(|entities| entities.get(id))
        .ok_or_else(|| missing(id, format!("entities.{id}")))?;

    let claim_path = format!("/claims/{coordinate_property}/0/mainsnak/datavalue/value");
    let location = entity
        .pointer(&claim_path)
        .ok_or_else(|| missing(id, dotted(&claim_path)))?;

    let latitude = coordinate(location, id, &claim_path, "latitude")?;
    let longitude = coordinate(location, id, &claim_path, "longitude")?;

    let label = entity
        .pointer("/labels/en/value")
        .ok_or_else(|| missing(id, "labels.en.value".to_string()))?
        .as_str()
        .ok_or_else(|| missing(id, "labels.en.value".to_string()))?;

    Ok(Place {
        id: id.to_string(),
        label: label.to_string(),
        latitude,
        longitude,
    })
}

fn coordinate(location: &Value, id: &str, claim_path: &str, key: &str) -> Result<f64, IngestError> {
    let value = location
        .get(key)
        .ok_or_else(|| missing(id, format!("{}.{key}", dotted(claim_path))))?;
    value.as_f64().ok_or_else(|| IngestError::NotANumber {
        id: id.to_string(),
        path: format!("{}.{key}", dotted(claim_path)),
    })
}

fn missing(id: &str, path: String) -> IngestError {
    IngestError::MissingField {
        id: id.to_string(),
        path,
    }
}

/// Render a JSON pointer as the dotted path used in error messages.
fn dotted(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}
