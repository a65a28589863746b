//! Layer objects in deck.gl JSON form.
//!
//! Each variant serializes with its renderer class under the `@@type` tag
//! and camelCase props, matching what the JSONConverter instantiates.
//! Style constants (colors, radii, extrusion parameters) live in the
//! constructors so assembly code only decides *what* goes on a layer.

use serde::{Serialize, Serializer};

use crate::rows::{ArcRow, ColumnRow, IconRow, PointRow, PolygonRow};

/// A deck.gl accessor expression; serializes with the `@@=` prefix that
/// marks it as code for the converter rather than a constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accessor(pub &'static str);

impl Serialize for Accessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("@@={}", self.0))
    }
}

/// An RGBA color as the renderer expects it, one channel per array slot.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Rgba(pub [u8; 4]);

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "@@type")]
pub enum Layer {
    #[serde(rename = "ScatterplotLayer", rename_all = "camelCase")]
    Scatterplot {
        data: Vec<PointRow>,
        get_position: Accessor,
        get_fill_color: Rgba,
        get_radius: f64,
        pickable: bool,
    },
    #[serde(rename = "ColumnLayer", rename_all = "camelCase")]
    Column {
        data: Vec<ColumnRow>,
        get_position: Accessor,
        get_elevation: Accessor,
        elevation_scale: f64,
        radius: f64,
        extruded: bool,
        get_fill_color: Rgba,
        pickable: bool,
    },
    #[serde(rename = "PolygonLayer", rename_all = "camelCase")]
    Polygon {
        data: Vec<PolygonRow>,
        get_polygon: Accessor,
        opacity: f64,
        stroked: bool,
        filled: bool,
        extruded: bool,
        wireframe: bool,
        get_elevation: f64,
        get_fill_color: Rgba,
        get_line_color: Rgba,
        auto_highlight: bool,
        pickable: bool,
    },
    #[serde(rename = "ArcLayer", rename_all = "camelCase")]
    Arc {
        data: Vec<ArcRow>,
        get_source_position: Accessor,
        get_target_position: Accessor,
        get_source_color: Rgba,
        get_target_color: Rgba,
        get_width: f64,
        pickable: bool,
    },
    #[serde(rename = "IconLayer", rename_all = "camelCase")]
    Icon {
        data: Vec<IconRow>,
        get_icon: Accessor,
        get_position: Accessor,
        get_size: f64,
        size_scale: f64,
        pickable: bool,
    },
}

impl Layer {
    /// Colored circle markers at each row's `[lon, lat]`.
    pub fn scatterplot(data: Vec<PointRow>, fill: Rgba, radius: f64) -> Self {
        Layer::Scatterplot {
            data,
            get_position: Accessor("[lon, lat]"),
            get_fill_color: fill,
            get_radius: radius,
            pickable: true,
        }
    }

    /// Extruded columns whose height is keyed by each row's `count`.
    pub fn columns(data: Vec<ColumnRow>, fill: Rgba) -> Self {
        Layer::Column {
            data,
            get_position: Accessor("[lon, lat]"),
            get_elevation: Accessor("count"),
            elevation_scale: 40.0,
            radius: 120.0,
            extruded: true,
            get_fill_color: fill,
            pickable: true,
        }
    }

    /// Extruded district footprints.
    pub fn polygons(data: Vec<PolygonRow>, fill: Rgba) -> Self {
        Layer::Polygon {
            data,
            get_polygon: Accessor("coordinates"),
            opacity: 1.0,
            stroked: false,
            filled: true,
            extruded: true,
            wireframe: true,
            get_elevation: -10.0,
            get_fill_color: fill,
            get_line_color: Rgba([0, 102, 169, 255]),
            auto_highlight: false,
            pickable: true,
        }
    }

    /// Directional arcs from each row's `source` to its `target`.
    pub fn arcs(data: Vec<ArcRow>, source_color: Rgba, target_color: Rgba) -> Self {
        Layer::Arc {
            data,
            get_source_position: Accessor("source"),
            get_target_position: Accessor("target"),
            get_source_color: source_color,
            get_target_color: target_color,
            get_width: 3.0,
            pickable: true,
        }
    }

    /// Bitmap markers described per row by the `icon` field.
    pub fn icons(data: Vec<IconRow>) -> Self {
        Layer::Icon {
            data,
            get_icon: Accessor("icon"),
            get_position: Accessor("[lon, lat]"),
            get_size: 4.0,
            size_scale: 15.0,
            pickable: true,
        }
    }
}
