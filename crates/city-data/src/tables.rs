//! CSV table loaders.
//!
//! Every file carries a mandatory header row; columns are matched by name
//! against the row structs in [`crate::types`]. A row that fails to parse
//! faults the whole load.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{ContactRow, DataError, MakerspaceRow, PoiRow, SuburbRow};

/// Arc source shared by every contact row, as `[lon, lat]` (the map's
/// home anchor at U Maillingerstraße).
pub const CONTACT_SOURCE: [f64; 2] = [11.545566, 48.150368];

/// Maker spaces maintained by hand next to the ones fetched from Wikidata.
pub fn load_makerspaces(path: &Path) -> Result<Vec<MakerspaceRow>, DataError> {
    let rows: Vec<MakerspaceRow> = read_rows(path)?;
    debug!("{}: {} maker spaces", path.display(), rows.len());
    Ok(rows)
}

/// Points of interest, keeping only rows whose `activity_level` equals
/// `level`.
pub fn load_points_of_interest(path: &Path, level: u8) -> Result<Vec<PoiRow>, DataError> {
    let mut rows: Vec<PoiRow> = read_rows(path)?;
    rows.retain(|row| row.activity_level == level);
    debug!(
        "{}: {} points of interest at level {level}",
        path.display(),
        rows.len()
    );
    Ok(rows)
}

/// Contact arc targets, keeping only rows whose `activity_level` equals
/// `level`.
pub fn load_contacts(path: &Path, level: u8) -> Result<Vec<ContactRow>, DataError> {
    let mut rows: Vec<ContactRow> = read_rows(path)?;
    rows.retain(|row| row.activity_level == level);
    debug!("{}: {} contacts at level {level}", path.display(), rows.len());
    Ok(rows)
}

/// The suburb flag table, unfiltered.
pub fn load_suburbs(path: &Path) -> Result<Vec<SuburbRow>, DataError> {
    read_rows(path)
}

/// District codes flagged active (activity level 1) in the suburb table.
pub fn active_codes(rows: &[SuburbRow]) -> BTreeSet<usize> {
    rows.iter()
        .filter(|row| row.activity_level == 1)
        .map(|row| row.number)
        .collect()
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Csv {
        path: path.display().to_string(),
        source,
    })?;
    collect_rows(&mut reader).map_err(|source| DataError::Csv {
        path: path.display().to_string(),
        source,
    })
}

fn collect_rows<T: DeserializeOwned, R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Vec<T>, csv::Error> {
    reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: DeserializeOwned>(text: &str) -> Vec<T> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        collect_rows(&mut reader).expect("fixture rows parse")
    }

    const POI_CSV: &str = "\
name,lat,lon,count,activity_level
Stadtbibliothek Werkraum,48.1174,11.6023,14,1
Kulturzentrum Trudering,48.1260,11.6630,3,0
MakerLab Schwabing,48.1680,11.5810,22,1
";

    #[test]
    fn activity_filter_drops_the_other_level() {
        let rows: Vec<PoiRow> = parse(POI_CSV);

        let level_one: Vec<_> = rows
            .iter()
            .filter(|row| row.activity_level == 1)
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(level_one, ["Stadtbibliothek Werkraum", "MakerLab Schwabing"]);

        let level_zero: Vec<_> = rows
            .iter()
            .filter(|row| row.activity_level == 0)
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(level_zero, ["Kulturzentrum Trudering"]);
    }

    #[test]
    fn makerspace_columns_match_by_name() {
        let rows: Vec<MakerspaceRow> = parse(
            "name,lat,lon\nErfindergarten,48.1231168709479,11.556521818246615\n",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Erfindergarten");
        assert_eq!(rows[0].lat, 48.1231168709479);
        assert_eq!(rows[0].lon, 11.556521818246615);
    }

    #[test]
    fn missing_column_faults_the_load() {
        let mut reader = csv::Reader::from_reader("name,lat\nMachwerk,48.14\n".as_bytes());
        let result: Result<Vec<MakerspaceRow>, _> = collect_rows(&mut reader);
        assert!(result.is_err());
    }

    #[test]
    fn active_codes_collects_level_one_numbers() {
        let rows: Vec<SuburbRow> = parse(
            "number,activity_level\n5,1\n6,0\n16,1\n19,1\n21,0\n",
        );
        let active = active_codes(&rows);
        assert_eq!(active.into_iter().collect::<Vec<_>>(), vec![5, 16, 19]);
    }
}
