//! Engine-agnostic state for the wardrobe customizer: which models exist, which
//! one is on stage, how it spins, and what each sub-mesh is painted with.

pub mod carousel;
pub mod config;
pub mod drag;
pub mod error;
pub mod material_map;
pub mod model;
pub mod palette;
pub mod registry;
pub mod studio;

pub use carousel::{Carousel, ModelVariant, Paint, Step, YawOwner, normalize_angle};
pub use config::StudioConfig;
pub use drag::{DragState, ScrollDrag, TrackMetrics};
pub use error::{ConfigError, CustomizeError, MaterialMapError};
pub use material_map::{MaterialIndexMap, SlotTable};
pub use model::{BodyPart, ModelId};
pub use palette::Palette;
pub use registry::{AssetEntry, AssetRegistry};
pub use studio::{DragInput, Studio, StudioCommand};
