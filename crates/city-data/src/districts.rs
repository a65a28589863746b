//! District name resolution and the municipal boundary loader.
//!
//! Boundary features carry a `vi_nummer` property shaped `"N.M"`; the
//! integer part N is the 1-based district code. The name table is built
//! once with [`DistrictNames::munich`] and passed to the loader, never
//! held in module state.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use geojson::{GeoJson, Value};
use tracing::debug;

use crate::types::{DataError, DistrictRing};

/// The 25 Munich city districts, ordered by district code.
const MUNICH_DISTRICTS: [&str; 25] = [
    "Altstadt-Lehel",
    "Ludwigvorstadt-Isarvorstadt",
    "Maxvorstadt",
    "Schwabing-West",
    "Au-Haidhausen",
    "Sendling",
    "Sendling-Westpark",
    "Schwanthalerhöhe",
    "Neuhausen-Nymphenburg",
    "Moosach",
    "Milbertshofen-Am Hart",
    "Schwabing-Freimann",
    "Bogehausen",
    "Berg am Laim",
    "Trudering-Riem",
    "Ramersdorf-Perlach",
    "Obergiesing-Fasangarten",
    "Untergiesing-Harlaching",
    "Thalkirchen-Obersendling-Forstenried",
    "Hadern",
    "Pasing-Obermenzing",
    "Aubing-Lochhausen-Langwied",
    "Allach-Untermenzing",
    "Feldmoching-Hasenbergl",
    "Laim",
];

/// Ordered lookup table mapping 1-based district codes to display names.
#[derive(Clone, Debug)]
pub struct DistrictNames {
    names: Vec<String>,
}

impl DistrictNames {
    /// The fixed Munich table.
    pub fn munich() -> Self {
        Self {
            names: MUNICH_DISTRICTS.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a 1-based district code. Codes outside `[1, len]` are
    /// rejected.
    pub fn resolve(&self, code: usize) -> Result<&str, DataError> {
        if code == 0 || code > self.names.len() {
            return Err(DataError::DistrictCodeRange {
                code,
                max: self.names.len(),
            });
        }
        Ok(&self.names[code - 1])
    }

    /// Parse the integer part of a two-segment `"N.M"` code and resolve it.
    pub fn resolve_vi_nummer(&self, vi_nummer: &str) -> Result<&str, DataError> {
        self.resolve(district_code(vi_nummer)?)
    }
}

/// Integer part of a `"N.M"` code.
pub(crate) fn district_code(vi_nummer: &str) -> Result<usize, DataError> {
    let number = vi_nummer.split('.').next().unwrap_or(vi_nummer);
    number.parse().map_err(|_| DataError::BadDistrictCode {
        code: vi_nummer.to_string(),
    })
}

/// Load the boundary file and flatten each feature into a [`DistrictRing`].
///
/// A feature is kept iff its district code's membership in `active` equals
/// `include_active`, so one call yields the active districts and a second
/// the complement. Malformed features fail the whole load.
pub fn load_districts(
    path: &Path,
    names: &DistrictNames,
    active: &BTreeSet<usize>,
    include_active: bool,
) -> Result<Vec<DistrictRing>, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let collection = parse_feature_collection(&text, path)?;

    let mut rings = Vec::new();
    for (index, feature) in collection.features.iter().enumerate() {
        let vi_nummer = feature
            .properties
            .as_ref()
            .and_then(|properties| properties.get("vi_nummer"))
            .and_then(|value| value.as_str())
            .ok_or_else(|| DataError::MissingDistrictCode {
                path: path.display().to_string(),
                index,
            })?;
        let code = district_code(vi_nummer)?;
        if active.contains(&code) != include_active {
            continue;
        }

        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| DataError::MissingGeometry {
                path: path.display().to_string(),
                index,
            })?;
        let Value::Polygon(polygon) = &geometry.value else {
            return Err(DataError::MissingGeometry {
                path: path.display().to_string(),
                index,
            });
        };
        // GeoJSON rings are [lon, lat]; the exterior ring comes first.
        let coordinates = polygon
            .first()
            .map(|ring| ring.iter().map(|position| [position[0], position[1]]).collect())
            .unwrap_or_default();

        rings.push(DistrictRing {
            coordinates,
            tag: names.resolve(code)?.to_string(),
        });
    }

    debug!(
        "{}: {} district rings (include_active={include_active})",
        path.display(),
        rings.len()
    );
    Ok(rings)
}

fn parse_feature_collection(
    text: &str,
    path: &Path,
) -> Result<geojson::FeatureCollection, DataError> {
    let geojson: GeoJson = text.parse().map_err(|source| DataError::GeoJson {
        path: path.display().to_string(),
        source,
    })?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(DataError::NotAFeatureCollection {
            path: path.display().to_string(),
        }),
    }
}
