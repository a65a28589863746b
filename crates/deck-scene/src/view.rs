use serde::{Deserialize, Serialize};

/// Initial camera position for the scene.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl ViewState {
    /// The fixed home camera over U Maillingerstraße.
    pub fn munich_home() -> Self {
        Self {
            latitude: 48.150368,
            longitude: 11.545566,
            zoom: 10.15,
            pitch: 0.0,
        }
    }
}
