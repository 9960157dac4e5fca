use serde::{Deserialize, Serialize};

use super::hex::Rgb;

/// Ratio at or above which a pair passes WCAG AAA for normal text.
pub const AAA_THRESHOLD: f64 = 7.0;
/// Ratio at or above which a pair passes WCAG AA for normal text.
pub const AA_THRESHOLD: f64 = 4.5;

/// How channel values are turned into luminance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuminanceModel {
    /// Weighted sum of the normalized channels, no gamma curve.
    #[default]
    Simplified,
    /// WCAG 2.1 sRGB linearization before weighting.
    Srgb,
}

impl LuminanceModel {
    /// Accepts "simplified" / "linear" and "srgb" / "wcag21", any case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "simplified" | "linear" => Some(Self::Simplified),
            "srgb" | "wcag21" => Some(Self::Srgb),
            _ => None,
        }
    }
}

/// Compliance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Aaa,
    Aa,
    Fail,
}

impl Level {
    /// First match wins: >= 7.0 is AAA, >= 4.5 is AA, anything else fails.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            Level::Aaa
        } else if ratio >= AA_THRESHOLD {
            Level::Aa
        } else {
            Level::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Aaa => "AAA",
            Level::Aa => "AA",
            Level::Fail => "FAIL",
        }
    }

    pub fn passes(self) -> bool {
        self != Level::Fail
    }
}

/// Ratio between two colors plus the level it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Unrounded; always >= 1.0.
    pub ratio: f64,
    pub level: Level,
}

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance as a plain weighted sum of normalized channels.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B, with R, G, B = channel / 255
pub fn relative_luminance(color: Rgb) -> f64 {
    relative_luminance_with(color, LuminanceModel::Simplified)
}

pub fn relative_luminance_with(color: Rgb, model: LuminanceModel) -> f64 {
    let [r, g, b] = match model {
        LuminanceModel::Simplified => color.normalized(),
        LuminanceModel::Srgb => color.normalized().map(srgb_to_linear),
    };
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Calculate the contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Rgb, b: Rgb) -> ContrastResult {
    contrast_ratio_with(a, b, LuminanceModel::Simplified)
}

pub fn contrast_ratio_with(a: Rgb, b: Rgb, model: LuminanceModel) -> ContrastResult {
    let la = relative_luminance_with(a, model);
    let lb = relative_luminance_with(b, model);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    ContrastResult {
        ratio,
        level: Level::from_ratio(ratio),
    }
}
