use bevy::color::Color;

use crate::model::BodyPart;

/// Eyes are not user-selectable; they are repainted with this whenever skin
/// changes.
pub const EYE_COLOR: [u8; 3] = [0x1a, 0x14, 0x12];

const SKIN: &[[u8; 3]] = &[
    [0xff, 0xdb, 0xac],
    [0xf1, 0xc2, 0x7d],
    [0xe0, 0xac, 0x69],
    [0xc6, 0x86, 0x42],
    [0x8d, 0x55, 0x24],
    [0x5c, 0x38, 0x36],
];

const HAIR: &[[u8; 3]] = &[
    [0x09, 0x08, 0x06],
    [0x3b, 0x30, 0x24],
    [0x6a, 0x4e, 0x42],
    [0xb8, 0x97, 0x78],
    [0xe6, 0xce, 0xa8],
    [0xb5, 0x52, 0x39],
];

const TOP: &[[u8; 3]] = &[
    [0xf5, 0xf5, 0xf5],
    [0x22, 0x22, 0x22],
    [0xd6, 0x2f, 0x2f],
    [0x2f, 0x6f, 0xd6],
    [0x3c, 0xa5, 0x5c],
    [0xf2, 0xb1, 0x34],
];

const BOTTOM: &[[u8; 3]] = &[
    [0x1f, 0x2a, 0x44],
    [0x4a, 0x4a, 0x4a],
    [0x8b, 0x6f, 0x47],
    [0xd9, 0xd2, 0xc5],
    [0x5b, 0x3a, 0x6e],
    [0x2e, 0x4d, 0x3a],
];

const SHOES: &[[u8; 3]] = &[
    [0x11, 0x11, 0x11],
    [0xfa, 0xfa, 0xfa],
    [0x7a, 0x4a, 0x2a],
    [0xc0, 0x39, 0x2b],
    [0x29, 0x80, 0xb9],
    [0x95, 0xa5, 0xa6],
];

/// Fixed swatch colors, index-aligned with the swatch rows in the panel.
#[derive(Debug, Clone)]
pub struct Palette {
    skin: Vec<Color>,
    hair: Vec<Color>,
    top: Vec<Color>,
    bottom: Vec<Color>,
    shoes: Vec<Color>,
    eyes: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            skin: to_colors(SKIN),
            hair: to_colors(HAIR),
            top: to_colors(TOP),
            bottom: to_colors(BOTTOM),
            shoes: to_colors(SHOES),
            eyes: srgb(EYE_COLOR),
        }
    }
}

impl Palette {
    /// Swatches for `part`. Eyes have no swatches.
    pub fn colors(&self, part: BodyPart) -> &[Color] {
        match part {
            BodyPart::Skin => &self.skin,
            BodyPart::Hair => &self.hair,
            BodyPart::Top => &self.top,
            BodyPart::Bottom => &self.bottom,
            BodyPart::Shoes => &self.shoes,
            BodyPart::Eyes => &[],
        }
    }

    pub fn color(&self, part: BodyPart, index: usize) -> Option<Color> {
        self.colors(part).get(index).copied()
    }

    pub fn eye_color(&self) -> Color {
        self.eyes
    }
}

fn srgb([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}

fn to_colors(raw: &[[u8; 3]]) -> Vec<Color> {
    raw.iter().copied().map(srgb).collect()
}
