use std::fmt;

use serde::{Deserialize, Serialize};

/// Character models the studio knows how to customize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelId {
    Streetwear,
    Athletic,
    Formal,
}

impl ModelId {
    pub const ALL: [Self; 3] = [Self::Streetwear, Self::Athletic, Self::Formal];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Streetwear => "Streetwear",
            Self::Athletic => "Athletic",
            Self::Formal => "Formal",
        }
    }

    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Streetwear => "models/streetwear.glb",
            Self::Athletic => "models/athletic.glb",
            Self::Formal => "models/formal.glb",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Skin,
    Hair,
    Top,
    Bottom,
    Shoes,
    Eyes,
}

impl BodyPart {
    /// Parts that have a palette and a row of swatches. Eyes are only ever
    /// painted as a side effect of skin.
    pub const CUSTOMIZABLE: [Self; 5] = [Self::Skin, Self::Hair, Self::Top, Self::Bottom, Self::Shoes];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Skin => "Skin",
            Self::Hair => "Hair",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Shoes => "Shoes",
            Self::Eyes => "Eyes",
        }
    }

    pub const fn is_customizable(self) -> bool {
        !matches!(self, Self::Eyes)
    }

    /// Position inside [`Self::CUSTOMIZABLE`].
    pub const fn swatch_row(self) -> Option<usize> {
        match self {
            Self::Skin => Some(0),
            Self::Hair => Some(1),
            Self::Top => Some(2),
            Self::Bottom => Some(3),
            Self::Shoes => Some(4),
            Self::Eyes => None,
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
