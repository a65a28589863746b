//! Scene pipeline: fetch the remote tables, load the local ones, and
//! assemble the deck.gl layer stack.
//!
//! Fetching ([`fetch_remote_tables`], [`load_local_tables`]) and assembly
//! ([`assemble_scene`]) are separate steps; assembly is pure so the layer
//! stack can be tested with fixture records.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::info;

use city_data::{
    CONTACT_SOURCE, ContactRow, DistrictNames, DistrictRing, MakerspaceRow, PoiRow, active_codes,
    load_contacts, load_districts, load_makerspaces, load_points_of_interest, load_suburbs,
    read_icon, select_icon,
};
use deck_scene::{
    ArcRow, ColumnRow, DeckScene, IconRow, IconSpec, Layer, PointRow, PolygonRow, Rgba, ViewState,
};
use wikibase_ingest::{Place, fetch_places, query_item_ids};

use crate::config::AppConfig;
use crate::queries;

/// Fill colors per category.
const G42_FILL: Rgba = Rgba([0, 30, 200, 200]);
const MAKERSPACE_FILL: Rgba = Rgba([200, 30, 0, 200]);
const POI_FILL: Rgba = Rgba([255, 140, 0, 200]);
const DISTRICT_FILL: Rgba = Rgba([64, 64, 64, 128]);
const DISTRICT_ACTIVE_FILL: Rgba = Rgba([0, 102, 169, 96]);

/// Everything pulled from the two knowledge bases in one pass.
pub struct RemoteTables {
    pub g42_workshops: Vec<Place>,
    pub makerspaces: Vec<Place>,
}

/// Everything read from the fixed-name files in the data directory.
pub struct LocalTables {
    pub makerspaces: Vec<MakerspaceRow>,
    pub pois: Vec<PoiRow>,
    pub contacts: Vec<ContactRow>,
    pub districts_active: Vec<DistrictRing>,
    pub districts_inactive: Vec<DistrictRing>,
    pub icon_active: String,
    pub icon_inactive: String,
}

/// Run the whole pipeline once and return the renderable scene.
pub fn build_scene(config: &AppConfig, camera: ViewState) -> Result<DeckScene> {
    let client = Client::new();
    let names = DistrictNames::munich();

    let remote = fetch_remote_tables(&client, config).context("fetching knowledge-base tables")?;
    let local = load_local_tables(config, &names).context("loading local data tables")?;

    info!(
        "scene tables: {} G42 workshops, {} wiki maker spaces, {} static maker spaces, \
         {} points of interest, {} contacts, {}/{} districts active",
        remote.g42_workshops.len(),
        remote.makerspaces.len(),
        local.makerspaces.len(),
        local.pois.len(),
        local.contacts.len(),
        local.districts_active.len(),
        local.districts_active.len() + local.districts_inactive.len(),
    );

    Ok(assemble_scene(&remote, &local, camera))
}

/// Query both SPARQL endpoints and enrich every identifier.
pub fn fetch_remote_tables(client: &Client, config: &AppConfig) -> Result<RemoteTables> {
    let g42_ids = query_item_ids(client, &config.g42_sparql, queries::G42_WORKSHOPS)
        .context("querying Garage42 workshops")?;
    let g42_workshops = fetch_places(client, &config.g42_api, &g42_ids, queries::G42_COORDINATES)
        .context("enriching Garage42 workshops")?;

    let makerspace_ids = query_item_ids(
        client,
        &config.wikidata_sparql,
        queries::WIKIDATA_MAKERSPACES,
    )
    .context("querying Wikidata maker spaces")?;
    let makerspaces = fetch_places(
        client,
        &config.wikidata_api,
        &makerspace_ids,
        queries::WIKIDATA_COORDINATES,
    )
    .context("enriching Wikidata maker spaces")?;

    Ok(RemoteTables {
        g42_workshops,
        makerspaces,
    })
}

/// Read the CSV tables, the boundary file, and both icon images. Points of
/// interest and contacts keep their active rows (activity level 1).
pub fn load_local_tables(config: &AppConfig, names: &DistrictNames) -> Result<LocalTables> {
    let suburbs = load_suburbs(&config.data_file("suburbs.csv"))?;
    let active = active_codes(&suburbs);
    let boundary = config.data_file("MUC_Stadtviertel_wgs84.json");

    Ok(LocalTables {
        makerspaces: load_makerspaces(&config.data_file("makerspaces.csv"))?,
        pois: load_points_of_interest(&config.data_file("points_of_interest.csv"), 1)?,
        contacts: load_contacts(&config.data_file("contacts.csv"), 1)?,
        districts_active: load_districts(&boundary, names, &active, true)?,
        districts_inactive: load_districts(&boundary, names, &active, false)?,
        icon_active: read_icon(&config.data_file("G42Icon.txt"))?,
        icon_inactive: read_icon(&config.data_file("G42IconInactive.txt"))?,
    })
}

/// Pure layer-stack assembly. Draw order: districts below everything,
/// then columns, circles, arcs, and the workshop icons on top.
pub fn assemble_scene(remote: &RemoteTables, local: &LocalTables, camera: ViewState) -> DeckScene {
    let mut scene = DeckScene::new(camera);

    scene.push(Layer::polygons(
        district_rows(&local.districts_inactive),
        DISTRICT_FILL,
    ));
    scene.push(Layer::polygons(
        district_rows(&local.districts_active),
        DISTRICT_ACTIVE_FILL,
    ));
    scene.push(Layer::columns(poi_rows(&local.pois), POI_FILL));
    scene.push(Layer::scatterplot(
        place_rows(&remote.g42_workshops),
        G42_FILL,
        400.0,
    ));
    scene.push(Layer::scatterplot(
        place_rows(&remote.makerspaces),
        MAKERSPACE_FILL,
        250.0,
    ));
    scene.push(Layer::scatterplot(
        makerspace_rows(&local.makerspaces),
        MAKERSPACE_FILL,
        250.0,
    ));
    scene.push(Layer::arcs(
        contact_rows(&local.contacts),
        G42_FILL,
        MAKERSPACE_FILL,
    ));
    scene.push(Layer::icons(workshop_icon_rows(
        &remote.g42_workshops,
        &local.icon_active,
        &local.icon_inactive,
    )));

    scene
}

fn place_rows(places: &[Place]) -> Vec<PointRow> {
    places
        .iter()
        .map(|place| PointRow {
            name: place.label.clone(),
            lat: place.latitude,
            lon: place.longitude,
            tags: place.label.clone(),
        })
        .collect()
}

fn makerspace_rows(rows: &[MakerspaceRow]) -> Vec<PointRow> {
    rows.iter()
        .map(|row| PointRow {
            name: row.name.clone(),
            lat: row.lat,
            lon: row.lon,
            tags: row.name.clone(),
        })
        .collect()
}

fn poi_rows(rows: &[PoiRow]) -> Vec<ColumnRow> {
    rows.iter()
        .map(|row| ColumnRow {
            name: row.name.clone(),
            lat: row.lat,
            lon: row.lon,
            count: row.count,
            tags: row.name.clone(),
        })
        .collect()
}

fn district_rows(rings: &[DistrictRing]) -> Vec<PolygonRow> {
    rings
        .iter()
        .map(|ring| PolygonRow {
            coordinates: ring.coordinates.clone(),
            tags: ring.tag.clone(),
        })
        .collect()
}

fn contact_rows(rows: &[ContactRow]) -> Vec<ArcRow> {
    rows.iter()
        .map(|row| ArcRow {
            name: row.name.clone(),
            source: CONTACT_SOURCE,
            target: [row.lon, row.lat],
            tags: row.name.clone(),
        })
        .collect()
}

/// One icon row per workshop; the marker image depends on whether the
/// workshop is [`city_data::ACTIVE_WORKSHOP_ID`].
fn workshop_icon_rows(places: &[Place], active: &str, inactive: &str) -> Vec<IconRow> {
    places
        .iter()
        .map(|place| IconRow {
            name: place.label.clone(),
            lat: place.latitude,
            lon: place.longitude,
            tags: place.label.clone(),
            icon: IconSpec::marker(select_icon(&place.id, active, inactive).to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> RemoteTables {
        RemoteTables {
            g42_workshops: vec![
                Place {
                    id: "Q17".to_string(),
                    label: "Garage42 Hauptwerkstatt".to_string(),
                    latitude: 48.1504,
                    longitude: 11.5456,
                },
                Place {
                    id: "Q14".to_string(),
                    label: "Garage42 Giesing".to_string(),
                    latitude: 48.11,
                    longitude: 11.59,
                },
            ],
            makerspaces: vec![Place {
                id: "Q106839007".to_string(),
                label: "MUCLab".to_string(),
                latitude: 48.13,
                longitude: 11.58,
            }],
        }
    }

    fn local() -> LocalTables {
        LocalTables {
            makerspaces: vec![MakerspaceRow {
                name: "Erfindergarten".to_string(),
                lat: 48.1231,
                lon: 11.5565,
            }],
            pois: vec![PoiRow {
                name: "MakerLab Schwabing".to_string(),
                lat: 48.168,
                lon: 11.581,
                count: 22,
                activity_level: 1,
            }],
            contacts: vec![ContactRow {
                name: "Werkbox 3".to_string(),
                lat: 48.1587,
                lon: 11.5503,
                activity_level: 1,
            }],
            districts_active: vec![DistrictRing {
                coordinates: vec![[11.5, 48.1], [11.6, 48.1], [11.6, 48.2], [11.5, 48.1]],
                tag: "Au-Haidhausen".to_string(),
            }],
            districts_inactive: Vec::new(),
            icon_active: "data:image/png;base64,active".to_string(),
            icon_inactive: "data:image/png;base64,inactive".to_string(),
        }
    }

    #[test]
    fn stack_has_one_layer_per_category() {
        let scene = assemble_scene(&remote(), &local(), ViewState::munich_home());
        let value = serde_json::to_value(&scene).expect("serializable");
        let kinds: Vec<_> = value["layers"]
            .as_array()
            .expect("layer array")
            .iter()
            .map(|layer| layer["@@type"].as_str().expect("tagged layer").to_string())
            .collect();
        assert_eq!(
            kinds,
            [
                "PolygonLayer",
                "PolygonLayer",
                "ColumnLayer",
                "ScatterplotLayer",
                "ScatterplotLayer",
                "ScatterplotLayer",
                "ArcLayer",
                "IconLayer",
            ]
        );
    }

    #[test]
    fn workshop_icons_follow_the_identifier_rule() {
        let scene = assemble_scene(&remote(), &local(), ViewState::munich_home());
        let value = serde_json::to_value(&scene).expect("serializable");
        let icons = value["layers"][7]["data"].as_array().expect("icon rows");
        assert_eq!(icons[0]["icon"]["url"], "data:image/png;base64,active");
        assert_eq!(icons[1]["icon"]["url"], "data:image/png;base64,inactive");
    }

    #[test]
    fn contact_arcs_start_at_the_shared_source() {
        let scene = assemble_scene(&remote(), &local(), ViewState::munich_home());
        let value = serde_json::to_value(&scene).expect("serializable");
        let arcs = value["layers"][6]["data"].as_array().expect("arc rows");
        assert_eq!(arcs[0]["source"][0], CONTACT_SOURCE[0]);
        assert_eq!(arcs[0]["source"][1], CONTACT_SOURCE[1]);
        assert_eq!(arcs[0]["target"][0], 11.5503);
        assert_eq!(arcs[0]["target"][1], 48.1587);
    }

    #[test]
    fn shipped_data_directory_loads() {
        let config = AppConfig {
            wikidata_sparql: String::new(),
            wikidata_api: String::new(),
            g42_sparql: String::new(),
            g42_api: String::new(),
            data_dir: std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            bind_address: "127.0.0.1".to_string(),
            port: 0,
        };
        let names = DistrictNames::munich();

        let local = load_local_tables(&config, &names).expect("shipped data loads");
        assert_eq!(local.makerspaces.len(), 8);
        assert!(local.pois.iter().all(|row| row.activity_level == 1));
        assert!(local.contacts.iter().all(|row| row.activity_level == 1));
        assert_eq!(local.districts_active.len(), 3);
        assert_eq!(local.districts_inactive.len(), 22);
        assert!(local.icon_active.starts_with("data:image/png;base64,"));
        assert!(local.icon_inactive.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn camera_is_taken_verbatim() {
        let camera = ViewState {
            latitude: 48.2,
            longitude: 11.4,
            zoom: 12.0,
            pitch: 30.0,
        };
        let scene = assemble_scene(&remote(), &local(), camera);
        assert_eq!(scene.initial_view_state, camera);
    }
}
