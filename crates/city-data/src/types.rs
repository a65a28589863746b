use serde::Deserialize;
use thiserror::Error;

/// One maker space, columns `name,lat,lon`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MakerspaceRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// One point of interest, columns `name,lat,lon,count,activity_level`.
/// `count` drives the column extrusion in the scene.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PoiRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub count: u32,
    pub activity_level: u8,
}

/// One contact target, columns `name,lat,lon,activity_level`. The arc
/// source is the shared [`crate::CONTACT_SOURCE`] constant.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub activity_level: u8,
}

/// One suburb flag, columns `number,activity_level`. `number` is the
/// 1-based district code matching the boundary file's `vi_nummer`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SuburbRow {
    pub number: usize,
    pub activity_level: u8,
}

/// A flattened boundary feature: the exterior ring as `[lon, lat]` pairs
/// plus the resolved district name.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictRing {
    pub coordinates: Vec<[f64; 2]>,
    pub tag: String,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: malformed CSV")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: not valid GeoJSON")]
    GeoJson {
        path: String,
        #[source]
        source: geojson::Error,
    },
    #[error("{path}: expected a FeatureCollection")]
    NotAFeatureCollection { path: String },
    #[error("{path}: feature #{index} has no polygon geometry")]
    MissingGeometry { path: String, index: usize },
    #[error("{path}: feature #{index} has no `vi_nummer` property")]
    MissingDistrictCode { path: String, index: usize },
    #[error("district code {code:?} is not numeric")]
    BadDistrictCode { code: String },
    #[error("district code {code} outside 1..={max}")]
    DistrictCodeRange { code: usize, max: usize },
}
