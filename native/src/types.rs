use napi_derive::napi;

/// Evaluator configuration passed from JS to Rust
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// "simplified" (default) | "srgb"
    pub luminance_model: Option<String>,
}

/// Everything the host needs to render one evaluation
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    /// Normalized `#rrggbb`, for the preview swatch
    pub foreground: String,
    pub background: String,
    /// Rounded to 2 decimals
    pub ratio: f64,
    /// "Contrast Ratio: 21.00:1"
    pub ratio_text: String,
    /// "AAA" | "AA" | "FAIL"
    pub level: String,
    pub verdict: String,
    pub verdict_color: String,
    /// ratio_text and verdict on two lines
    pub result_text: String,
    pub preview_caption: String,
}

/// Explicit success/failure result for hosts that prefer not to catch
#[napi(object)]
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub ok: bool,
    pub report: Option<ContrastReport>,
    pub error_title: Option<String>,
    pub error_message: Option<String>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorPairInput {
    pub label: String,
    pub foreground: String,
    pub background: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct PairReport {
    pub label: String,
    pub report: ContrastReport,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct InvalidPair {
    pub label: String,
    /// The field that failed to parse
    pub input: String,
}

/// Batch result returned from Rust to JS
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub passed: Vec<PairReport>,
    pub failed: Vec<PairReport>,
    pub invalid: Vec<InvalidPair>,
}

/// Initial state of the host form
#[napi(object)]
#[derive(Debug, Clone)]
pub struct HostDefaults {
    pub foreground: String,
    pub background: String,
    pub prompt: String,
    pub preview_caption: String,
    pub error_title: String,
    pub error_message: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct PortionReport {
    pub food: String,
    pub weight_g: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JournalEntryJs {
    pub id: u32,
    /// `%Y-%m-%d %H:%M:%S`, local time
    pub date: String,
    pub food_item: String,
    pub weight_g: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
