//! Maps contrast results onto the strings and colors the host displays.

use crate::config::{EvaluatorConfig, PREVIEW_CAPTION};
use crate::error::{Error, Result, INVALID_COLOR_MESSAGE, INVALID_COLOR_TITLE};
use crate::math::{evaluate_with, parse_hex_rgb, ContrastResult, Level};
use crate::types::{ContrastReport, EvaluationOutcome};

/// Verdict line and the color the result label is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub text: &'static str,
    pub color: &'static str,
}

pub fn verdict(level: Level) -> Verdict {
    match level {
        Level::Aaa => Verdict {
            text: "Passes WCAG AAA (Excellent!)",
            color: "#008800",
        },
        Level::Aa => Verdict {
            text: "Passes WCAG AA (Good)",
            color: "#4444FF",
        },
        Level::Fail => Verdict {
            text: "Fails WCAG Standards (Do not use!)",
            color: "#CC0000",
        },
    }
}

pub fn ratio_text(ratio: f64) -> String {
    format!("Contrast Ratio: {ratio:.2}:1")
}

/// Build the display report for an already-evaluated pair.
pub fn to_report(fg_hex: &str, bg_hex: &str, result: &ContrastResult) -> Result<ContrastReport> {
    let foreground = parse_hex_rgb(fg_hex)?.to_string();
    let background = parse_hex_rgb(bg_hex)?.to_string();
    let ratio_text = ratio_text(result.ratio);
    let verdict = verdict(result.level);

    Ok(ContrastReport {
        foreground,
        background,
        ratio: (result.ratio * 100.0).round() / 100.0,
        result_text: format!("{ratio_text}\n{}", verdict.text),
        ratio_text,
        level: result.level.as_str().to_string(),
        verdict: verdict.text.to_string(),
        verdict_color: verdict.color.to_string(),
        preview_caption: PREVIEW_CAPTION.to_string(),
    })
}

/// Evaluate and render in one step.
pub fn report(fg_hex: &str, bg_hex: &str, config: &EvaluatorConfig) -> Result<ContrastReport> {
    let result = evaluate_with(fg_hex, bg_hex, config)?;
    to_report(fg_hex, bg_hex, &result)
}

/// Like [`report`], but folds a bad color into the host's error notification.
/// Errors other than a bad color are still returned.
pub fn outcome(fg_hex: &str, bg_hex: &str, config: &EvaluatorConfig) -> Result<EvaluationOutcome> {
    match report(fg_hex, bg_hex, config) {
        Ok(report) => Ok(EvaluationOutcome {
            ok: true,
            report: Some(report),
            error_title: None,
            error_message: None,
        }),
        Err(Error::InvalidColorFormat(_)) => Ok(EvaluationOutcome {
            ok: false,
            report: None,
            error_title: Some(INVALID_COLOR_TITLE.to_string()),
            error_message: Some(INVALID_COLOR_MESSAGE.to_string()),
        }),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aaa_report() {
        let r = report("#FFFFFF", "#000000", &EvaluatorConfig::default()).unwrap();
        assert_eq!(r.ratio, 21.0);
        assert_eq!(r.ratio_text, "Contrast Ratio: 21.00:1");
        assert_eq!(r.level, "AAA");
        assert_eq!(r.verdict, "Passes WCAG AAA (Excellent!)");
        assert_eq!(r.verdict_color, "#008800");
        assert_eq!(r.result_text, "Contrast Ratio: 21.00:1\nPasses WCAG AAA (Excellent!)");
    }

    #[test]
    fn fail_report_for_anki_default_pair() {
        let r = report("#FFFFFF", "#2F2F31", &EvaluatorConfig::default()).unwrap();
        assert_eq!(r.ratio_text, "Contrast Ratio: 4.47:1");
        assert_eq!(r.verdict, "Fails WCAG Standards (Do not use!)");
        assert_eq!(r.verdict_color, "#CC0000");
    }

    #[test]
    fn aa_verdict() {
        let v = verdict(Level::Aa);
        assert_eq!(v.text, "Passes WCAG AA (Good)");
        assert_eq!(v.color, "#4444FF");
    }

    #[test]
    fn aa_report_from_result() {
        let result = ContrastResult {
            ratio: 4.5,
            level: Level::Aa,
        };
        let r = to_report("#000000", "#777777", &result).unwrap();
        assert_eq!(r.ratio_text, "Contrast Ratio: 4.50:1");
        assert_eq!(r.verdict, "Passes WCAG AA (Good)");
    }

    #[test]
    fn preview_uses_normalized_colors() {
        let r = report("ABCDEF", "#2F2F31", &EvaluatorConfig::default()).unwrap();
        assert_eq!(r.foreground, "#abcdef");
        assert_eq!(r.background, "#2f2f31");
        assert_eq!(r.preview_caption, "Preview: Flashcard Text");
    }

    #[test]
    fn ratio_rounded_to_2_decimals() {
        let r = report("#777777", "#888888", &EvaluatorConfig::default()).unwrap();
        let rounded = (r.ratio * 100.0).round() / 100.0;
        assert!((r.ratio - rounded).abs() < 1e-12);
        assert_eq!(r.ratio_text, "Contrast Ratio: 1.13:1");
    }

    #[test]
    fn bad_input_becomes_notification() {
        let o = outcome("bad", "#000000", &EvaluatorConfig::default()).unwrap();
        assert!(!o.ok);
        assert!(o.report.is_none());
        assert_eq!(o.error_title.as_deref(), Some("Input Error"));
        assert_eq!(
            o.error_message.as_deref(),
            Some("Please enter valid Hex color codes (e.g., #FFFFFF).")
        );
    }

    #[test]
    fn good_input_has_no_error() {
        let o = outcome("#FFFFFF", "#000000", &EvaluatorConfig::default()).unwrap();
        assert!(o.ok);
        assert!(o.error_message.is_none());
        assert_eq!(o.report.unwrap().level, "AAA");
    }
}
