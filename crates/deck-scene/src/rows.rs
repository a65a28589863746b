//! Row tables carried inline by the layers.
//!
//! Field names are part of the wire contract: accessor expressions such as
//! `@@=[lon, lat]` refer to them by name inside the renderer.

use serde::Serialize;

/// A labelled point; `tags` feeds the tooltip.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PointRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub tags: String,
}

/// A point of interest whose `count` drives the column extrusion.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ColumnRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub count: u32,
    pub tags: String,
}

/// A district footprint: exterior ring as `[lon, lat]` pairs.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PolygonRow {
    pub coordinates: Vec<[f64; 2]>,
    pub tags: String,
}

/// A directional arc between two `[lon, lat]` coordinates.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ArcRow {
    pub name: String,
    pub source: [f64; 2],
    pub target: [f64; 2],
    pub tags: String,
}

/// A bitmap marker row; `icon` describes the image per row.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct IconRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub tags: String,
    pub icon: IconSpec,
}

/// Icon image description in the shape the IconLayer expects.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct IconSpec {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "anchorY")]
    pub anchor_y: u32,
}

impl IconSpec {
    /// Wrap pre-encoded image text in the fixed marker dimensions.
    pub fn marker(url: String) -> Self {
        Self {
            url,
            width: 43,
            height: 64,
            anchor_y: 64,
        }
    }
}
