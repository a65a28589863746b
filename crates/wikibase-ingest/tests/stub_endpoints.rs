//! End-to-end fixture against stub HTTP endpoints.
//!
//! A throwaway Actix server plays both the SPARQL endpoint and the
//! `wbgetentities` API on an ephemeral port; the blocking clients run
//! against it exactly as they would against the live services.

use std::net::TcpListener;
use std::thread;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::json;
use wikibase_ingest::{fetch_places, query_item_ids};

async fn sparql_stub(form: web::Form<Vec<(String, String)>>) -> HttpResponse {
    assert!(
        form.iter()
            .any(|(key, value)| key == "format" && value == "json")
    );
    HttpResponse::Ok().json(json!({
        "head": {"vars": ["item"]},
        "results": {"bindings": [
            {"item": {"type": "uri", "value": "https://flmr-db.wikibase.cloud/entity/Q17"}}
        ]}
    }))
}

async fn entity_stub(query: web::Query<Vec<(String, String)>>) -> HttpResponse {
    assert!(
        query
            .iter()
            .any(|(key, value)| key == "action" && value == "wbgetentities")
    );
    assert!(query.iter().any(|(key, value)| key == "ids" && value == "Q17"));
    HttpResponse::Ok().json(json!({
        "entities": {
            "Q17": {
                "labels": {"en": {"value": "Garage42 Hauptwerkstatt"}},
                "claims": {
                    "P13": [{
                        "mainsnak": {
                            "datavalue": {
                                "value": {"latitude": 48.1337, "longitude": 11.575}
                            }
                        }
                    }]
                }
            }
        },
        "success": 1
    }))
}

fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub socket");
    let addr = listener.local_addr().expect("stub socket address");

    thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            HttpServer::new(|| {
                App::new()
                    .route("/query/sparql", web::post().to(sparql_stub))
                    .route("/w/api.php", web::get().to(entity_stub))
            })
            .workers(1)
            .listen(listener)
            .expect("listen on stub socket")
            .run()
            .await
            .expect("stub server run");
        });
    });

    format!("http://{addr}")
}

#[test]
fn one_binding_becomes_one_place_row() {
    let base = spawn_stub();
    let client = reqwest::blocking::Client::new();

    let ids = query_item_ids(
        &client,
        &format!("{base}/query/sparql"),
        "select ?item where { ?item flmdt:P1 flmd:Q12 }",
    )
    .expect("stub query succeeds");
    assert_eq!(ids, vec!["Q17".to_string()]);

    let places =
        fetch_places(&client, &format!("{base}/w/api.php"), &ids, "P13").expect("stub enrichment");
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id, "Q17");
    assert_eq!(places[0].label, "Garage42 Hauptwerkstatt");
    assert_eq!(places[0].latitude, 48.1337);
    assert_eq!(places[0].longitude, 11.575);
}
