use std::path::PathBuf;

use thiserror::Error;

use crate::model::{BodyPart, ModelId};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Raised when a slot table does not fit the model that was actually loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialMapError {
    #[error("{model} has no slot table")]
    Unregistered { model: ModelId },

    #[error("{model}: {part} slot {slot} is out of range, model has {count} sub-meshes")]
    SlotOutOfRange {
        model: ModelId,
        part: BodyPart,
        slot: usize,
        count: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomizeError {
    #[error("no model is loaded")]
    NoActiveModel,

    #[error("{part} cannot be picked directly")]
    NotCustomizable { part: BodyPart },

    #[error("{model} has no slot table for {part}")]
    UnregisteredVariant { model: ModelId, part: BodyPart },

    #[error("{part} palette has {len} colors, index {index} requested")]
    PaletteIndexOutOfRange {
        part: BodyPart,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Map(#[from] MaterialMapError),
}
