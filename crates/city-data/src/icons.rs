//! Marker icon assets.
//!
//! Each icon file holds one pre-encoded image (a `data:` URL) as opaque
//! text. Which image a workshop gets is decided purely by identifier
//! equality against [`ACTIVE_WORKSHOP_ID`].

use std::fs;
use std::path::Path;

use crate::types::DataError;

/// The one workshop rendered with the active marker image.
pub const ACTIVE_WORKSHOP_ID: &str = "Q17";

/// Read an icon file as opaque text. Trailing newlines are not part of the
/// encoded image.
pub fn read_icon(path: &Path) -> Result<String, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text.trim_end().to_string())
}

/// Pick the marker image for a workshop identifier.
pub fn select_icon<'a>(id: &str, active: &'a str, inactive: &'a str) -> &'a str {
    if id == ACTIVE_WORKSHOP_ID { active } else { inactive }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE: &str = "data:image/png;base64,active";
    const INACTIVE: &str = "data:image/png;base64,inactive";

    #[test]
    fn q17_selects_the_active_image() {
        assert_eq!(select_icon("Q17", ACTIVE, INACTIVE), ACTIVE);
    }

    #[test]
    fn every_other_id_selects_the_inactive_image() {
        for id in ["Q14", "Q18", "Q45820240", ""] {
            assert_eq!(select_icon(id, ACTIVE, INACTIVE), INACTIVE);
        }
    }
}
