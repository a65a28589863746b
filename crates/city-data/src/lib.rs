//! Local data layer: fixed-name CSV tables, the municipal boundary file,
//! and the marker icon assets.
//!
//! - `tables`: CSV loaders with header-row column contracts and
//!   activity-level filtering.
//! - `districts`: the ordered district name table and the GeoJSON
//!   boundary loader with active/inactive district filtering.
//! - `icons`: opaque pre-encoded marker images and the active/inactive
//!   selection rule.
//! - `types`: row records and the data error enum.

pub use districts::{DistrictNames, load_districts};
pub use icons::{ACTIVE_WORKSHOP_ID, read_icon, select_icon};
pub use tables::{
    CONTACT_SOURCE, active_codes, load_contacts, load_makerspaces, load_points_of_interest,
    load_suburbs,
};
pub use types::{ContactRow, DataError, DistrictRing, MakerspaceRow, PoiRow, SuburbRow};

mod districts;
mod icons;
mod tables;
mod types;
