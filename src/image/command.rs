//! Transform commands and their URL parameters

use std::fmt;

use super::alignment::Alignment;
use crate::constants::{DEFAULT_UNSHARP_AMOUNT, DEFAULT_UNSHARP_RADIUS, DEFAULT_UNSHARP_THRESHOLD};

/// Unsharp mask settings as supplied by the caller
///
/// Any field left `None` falls back to its default once at least one field
/// is set. All three `None` means no sharpening.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Unsharp {
    pub radius: Option<f64>,
    pub amount: Option<f64>,
    pub threshold: Option<f64>,
}

impl Unsharp {
    pub fn new(radius: f64, amount: f64, threshold: f64) -> Self {
        Self {
            radius: Some(radius),
            amount: Some(amount),
            threshold: Some(threshold),
        }
    }

    pub fn resolve(&self) -> Option<Sharpen> {
        if self.radius.is_none() && self.amount.is_none() && self.threshold.is_none() {
            return None;
        }
        Some(Sharpen {
            radius: self.radius.unwrap_or(DEFAULT_UNSHARP_RADIUS),
            amount: self.amount.unwrap_or(DEFAULT_UNSHARP_AMOUNT),
            threshold: self.threshold.unwrap_or(DEFAULT_UNSHARP_THRESHOLD),
        })
    }
}

/// Fully resolved unsharp mask, rendered as `radius_amount_threshold`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sharpen {
    pub radius: f64,
    pub amount: f64,
    pub threshold: f64,
}

impl fmt::Display for Sharpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}_{:.2}_{:.2}",
            self.radius, self.amount, self.threshold
        )
    }
}

/// The single geometry operation applied to a source image
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransformCommand {
    #[default]
    None,
    /// Smart resize: scale and crop around an anchor
    ResizeSmart {
        width: u32,
        height: u32,
        quality: Option<u8>,
        alignment: Option<Alignment>,
        sharpen: Option<Sharpen>,
    },
    /// Resize to fit inside a box
    ResizeBox {
        width: u32,
        height: u32,
        quality: Option<u8>,
        sharpen: Option<Sharpen>,
    },
    /// Place the image on a canvas of the given size
    Canvas {
        width: u32,
        height: u32,
        quality: Option<u8>,
        alignment: Option<Alignment>,
    },
    Fill {
        width: u32,
        height: u32,
        quality: Option<u8>,
    },
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        quality: Option<u8>,
    },
}

impl TransformCommand {
    pub fn is_set(&self) -> bool {
        !matches!(self, TransformCommand::None)
    }

    /// Short name used as the command segment (empty for `None`)
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::ResizeSmart { .. } => "srz",
            Self::ResizeBox { .. } => "srb",
            Self::Canvas { .. } => "canvas",
            Self::Fill { .. } => "fill",
            Self::Crop { .. } => "crop",
        }
    }

    pub fn quality(&self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::ResizeSmart { quality, .. }
            | Self::ResizeBox { quality, .. }
            | Self::Canvas { quality, .. }
            | Self::Fill { quality, .. }
            | Self::Crop { quality, .. } => *quality,
        }
    }

    /// Fill in quality when the caller left it out
    pub fn with_default_quality(mut self, default: Option<u8>) -> Self {
        match &mut self {
            Self::None => {}
            Self::ResizeSmart { quality, .. }
            | Self::ResizeBox { quality, .. }
            | Self::Canvas { quality, .. }
            | Self::Fill { quality, .. }
            | Self::Crop { quality, .. } => {
                if quality.is_none() {
                    *quality = default;
                }
            }
        }
        self
    }

    /// Wire-form parameters in rendering order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        match self {
            Self::None => {}
            Self::ResizeSmart {
                width,
                height,
                quality,
                alignment,
                sharpen,
            } => {
                push_size(&mut out, *width, *height, *quality);
                push_alignment(&mut out, *alignment);
                push_sharpen(&mut out, *sharpen);
            }
            Self::ResizeBox {
                width,
                height,
                quality,
                sharpen,
            } => {
                push_size(&mut out, *width, *height, *quality);
                push_sharpen(&mut out, *sharpen);
            }
            Self::Canvas {
                width,
                height,
                quality,
                alignment,
            } => {
                push_size(&mut out, *width, *height, *quality);
                push_alignment(&mut out, *alignment);
            }
            Self::Fill {
                width,
                height,
                quality,
            } => push_size(&mut out, *width, *height, *quality),
            Self::Crop {
                x,
                y,
                width,
                height,
                quality,
            } => {
                push_size(&mut out, *width, *height, *quality);
                out.push(("x", x.to_string()));
                out.push(("y", y.to_string()));
            }
        }
        out
    }

    /// Comma-joined `key_value` list for the parameter segment
    pub fn params_segment(&self) -> String {
        self.params()
            .iter()
            .map(|(k, v)| format!("{}_{}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn push_size(out: &mut Vec<(&'static str, String)>, width: u32, height: u32, quality: Option<u8>) {
    out.push(("w", width.to_string()));
    out.push(("h", height.to_string()));
    if let Some(q) = quality {
        out.push(("q", q.to_string()));
    }
}

fn push_alignment(out: &mut Vec<(&'static str, String)>, alignment: Option<Alignment>) {
    if let Some(a) = alignment {
        out.push(("a", a.code().to_string()));
    }
}

fn push_sharpen(out: &mut Vec<(&'static str, String)>, sharpen: Option<Sharpen>) {
    if let Some(s) = sharpen {
        out.push(("us", s.to_string()));
    }
}
