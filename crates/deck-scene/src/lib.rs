//! Typed deck.gl JSON scene specification.
//!
//! Mirrors the subset of the deck.gl JSON bundle format this map needs:
//! tagged layer objects (`@@type`), camelCase props, `@@=` accessor
//! expressions, row tables carried inline, and a single initial view
//! state. The page-side `JSONConverter` consumes the serialized scene
//! unmodified, so everything here is shaped for the wire, not for
//! computation.

pub use layer::{Accessor, Layer, Rgba};
pub use rows::{ArcRow, ColumnRow, IconRow, IconSpec, PointRow, PolygonRow};
pub use scene::{DeckScene, Tooltip};
pub use view::ViewState;

mod layer;
mod rows;
mod scene;
mod view;
