use crate::config::EvaluatorConfig;
use crate::error::{Error, Result};

use super::hex::parse_hex_rgb;
use super::wcag::{contrast_ratio_with, ContrastResult};

/// Parse both colors and compute their contrast with the default config.
pub fn evaluate(fg_hex: &str, bg_hex: &str) -> Result<ContrastResult> {
    evaluate_with(fg_hex, bg_hex, &EvaluatorConfig::default())
}

/// Parse both colors and compute their contrast.
/// Fails as a whole if either input is not a 6-digit hex color.
pub fn evaluate_with(fg_hex: &str, bg_hex: &str, config: &EvaluatorConfig) -> Result<ContrastResult> {
    let warn = |err: &Error| tracing::warn!(fg = fg_hex, bg = bg_hex, "rejected color input: {err}");
    let fg = parse_hex_rgb(fg_hex).inspect_err(warn)?;
    let bg = parse_hex_rgb(bg_hex).inspect_err(warn)?;

    let result = contrast_ratio_with(fg, bg, config.luminance_model);
    tracing::debug!(
        %fg,
        %bg,
        ratio = result.ratio,
        level = result.level.as_str(),
        "evaluated contrast"
    );
    Ok(result)
}
