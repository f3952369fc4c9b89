//! Document styling constants

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex form without the leading `#`
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Styling applied uniformly across one composed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color for level 1-2 headings and table header rows
    pub accent: Rgb,
    /// Body font family
    pub body_font: String,
    /// Body font size in points
    pub body_size_pt: u8,
    /// Display width for embedded images, in inches
    pub image_width_inches: u32,
    /// Table style name
    pub table_style: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Rgb(31, 60, 136), // #1F3C88
            body_font: "Calibri".to_string(),
            body_size_pt: 11,
            image_width_inches: 6,
            table_style: "Light Grid Accent 1".to_string(),
        }
    }
}
