use crate::error::{Error, Result};
use crate::math::LuminanceModel;
use crate::types::EvaluateOptions;

/// Foreground preset in the host form.
pub const DEFAULT_FOREGROUND: &str = "#FFFFFF";
/// Background preset in the host form (Anki dark mode).
pub const DEFAULT_BACKGROUND: &str = "#2F2F31";
/// Shown before the first evaluation.
pub const INITIAL_PROMPT: &str = "Enter colors and click evaluate.";
pub const PREVIEW_CAPTION: &str = "Preview: Flashcard Text";

/// Rust-side evaluator settings, resolved from the options passed by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub luminance_model: LuminanceModel,
}

impl EvaluatorConfig {
    /// Missing fields fall back to defaults; an unrecognized model name is rejected.
    pub fn from_options(options: Option<&EvaluateOptions>) -> Result<Self> {
        let Some(options) = options else {
            return Ok(Self::default());
        };
        let luminance_model = match options.luminance_model.as_deref() {
            None => LuminanceModel::default(),
            Some(name) => LuminanceModel::from_name(name)
                .ok_or_else(|| Error::InvalidOption(format!("luminanceModel = {name:?}")))?,
        };
        Ok(Self { luminance_model })
    }
}
