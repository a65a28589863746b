//! SPARQL query client.
//!
//! Queries are POSTed as `query`/`format=json` form parameters, the way the
//! Wikidata query service and Wikibase Cloud instances both accept them. The
//! response body is deserialized into [`SparqlResults`] and identifier
//! extraction happens in [`item_ids`], a pure function over that struct.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::types::IngestError;

/// Top-level SPARQL JSON result document, reduced to the `?item` binding
/// shape used by every query in this service.
#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub results: Bindings,
}

#[derive(Debug, Deserialize)]
pub struct Bindings {
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
pub struct Binding {
    pub item: Term,
}

/// One RDF term; `value` carries the entity URI.
#[derive(Debug, Deserialize)]
pub struct Term {
    pub value: String,
}

/// POST `query` to `endpoint` and return the entity identifiers named by the
/// result bindings. No retry, no pagination; a non-success status or a body
/// that does not match [`SparqlResults`] is an error.
pub fn query_item_ids(
    client: &Client,
    endpoint: &str,
    query: &str,
) -> Result<Vec<String>, IngestError> {
    let response = client
        .post(endpoint)
        .form(&[("query", query), ("format", "json")])
        .send()
        .map_err(|source| IngestError::Transport {
            url: endpoint.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            url: endpoint.to_string(),
            status,
        });
    }

    let results: SparqlResults = response.json().map_err(|source| IngestError::Body {
        url: endpoint.to_string(),
        source,
    })?;

    let ids = item_ids(&results);
    debug!("{endpoint} returned {} bindings", ids.len());
    Ok(ids)
}

/// Extract the final path segment of each bound `item` URI, e.g.
/// `http://www.wikidata.org/entity/Q123` becomes `Q123`.
pub fn item_ids(results: &SparqlResults) -> Vec<String> {
    results
        .results
        .bindings
        .iter()
        .map(|binding| {
            let uri = binding.item.value.as_str();
            uri.rsplit('/').next().unwrap_or(uri).to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(values: &[&str]) -> SparqlResults {
        SparqlResults {
            results: Bindings {
                bindings: values
                    .iter()
                    .map(|value| Binding {
                        item: Term {
                            value: value.to_string(),
                        },
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn extracts_final_uri_segment() {
        let parsed = results(&["http://www.wikidata.org/entity/Q123"]);
        assert_eq!(item_ids(&parsed), vec!["Q123".to_string()]);
    }

    #[test]
    fn keeps_binding_order() {
        let parsed = results(&[
            "https://flmr-db.wikibase.cloud/entity/Q14",
            "https://flmr-db.wikibase.cloud/entity/Q17",
        ]);
        assert_eq!(item_ids(&parsed), vec!["Q14", "Q17"]);
    }

    #[test]
    fn value_without_slashes_is_kept_verbatim() {
        let parsed = results(&["Q7"]);
        assert_eq!(item_ids(&parsed), vec!["Q7"]);
    }

    #[test]
    fn deserializes_endpoint_shape() {
        let body = r#"{
            "head": {"vars": ["item"]},
            "results": {"bindings": [
                {"item": {"type": "uri", "value": "http://www.wikidata.org/entity/Q45820240"}}
            ]}
        }"#;
        let parsed: SparqlResults = serde_json::from_str(body).expect("valid result document");
        assert_eq!(item_ids(&parsed), vec!["Q45820240"]);
    }
}
