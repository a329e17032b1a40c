//! Alignment (anchor point) names and their wire codes

use std::fmt;
use std::str::FromStr;

use super::error::TransformError;

/// Anchor point used by smart resize and canvas to choose which part
/// of the image to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Center,
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    Right,
    /// Center on the most prominent detected face
    Face,
    /// Center on all detected faces
    Faces,
}

impl Alignment {
    pub const ALL: [Alignment; 11] = [
        Alignment::Center,
        Alignment::Top,
        Alignment::TopLeft,
        Alignment::TopRight,
        Alignment::Bottom,
        Alignment::BottomLeft,
        Alignment::BottomRight,
        Alignment::Left,
        Alignment::Right,
        Alignment::Face,
        Alignment::Faces,
    ];

    /// Human-readable name, e.g. `top-left`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Left => "left",
            Self::Right => "right",
            Self::Face => "face",
            Self::Faces => "faces",
        }
    }

    /// Short code written into the URL, e.g. `tl`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Center => "c",
            Self::Top => "t",
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::Bottom => "b",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
            Self::Left => "l",
            Self::Right => "r",
            Self::Face => "f",
            Self::Faces => "fs",
        }
    }
}

impl FromStr for Alignment {
    type Err = TransformError;

    /// Only the exact lower-case names are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| TransformError::unknown_alignment(s))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse an optional alignment name, failing on unknown names
pub fn parse_alignment(name: Option<&str>) -> Result<Option<Alignment>, TransformError> {
    name.map(str::parse).transpose()
}
