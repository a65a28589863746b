use serde::Serialize;

use crate::layer::Layer;
use crate::view::ViewState;

/// The complete renderable scene: camera, basemap style, tooltip template,
/// and the layer stack in draw order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckScene {
    pub initial_view_state: ViewState,
    pub map_style: String,
    pub tooltip: Tooltip,
    pub layers: Vec<Layer>,
}

/// Tooltip template; `{tags}` interpolates the row's tag field.
#[derive(Clone, Debug, Serialize)]
pub struct Tooltip {
    pub text: String,
}

impl DeckScene {
    /// An empty scene on the `light` basemap with the `{tags}` tooltip.
    pub fn new(initial_view_state: ViewState) -> Self {
        Self {
            initial_view_state,
            map_style: "light".to_string(),
            tooltip: Tooltip {
                text: "{tags}".to_string(),
            },
            layers: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }
}
