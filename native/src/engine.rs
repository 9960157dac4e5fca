use rayon::prelude::*;

use crate::config::EvaluatorConfig;
use crate::math::{evaluate_with, parse_hex_rgb};
use crate::presentation::to_report;
use crate::types::{BatchReport, ColorPairInput, InvalidPair, PairReport};

enum Evaluated {
    Passed(PairReport),
    Failed(PairReport),
    Invalid(InvalidPair),
}

fn evaluate_pair(pair: &ColorPairInput, config: &EvaluatorConfig) -> Evaluated {
    let checked = evaluate_with(&pair.foreground, &pair.background, config)
        .and_then(|result| Ok((result, to_report(&pair.foreground, &pair.background, &result)?)));

    match checked {
        Ok((result, report)) => {
            let pair_report = PairReport {
                label: pair.label.clone(),
                report,
            };
            if result.level.passes() {
                Evaluated::Passed(pair_report)
            } else {
                Evaluated::Failed(pair_report)
            }
        }
        Err(_) => {
            // Report the first field that does not parse.
            let input = if parse_hex_rgb(&pair.foreground).is_err() {
                pair.foreground.clone()
            } else {
                pair.background.clone()
            };
            Evaluated::Invalid(InvalidPair {
                label: pair.label.clone(),
                input,
            })
        }
    }
}

/// Evaluate many color pairs in parallel and sort them into passed / failed / invalid.
///
/// Uses Rayon's `par_iter()`: every pair is independent, so there is no shared
/// mutable state. A pair with a bad color lands in `invalid` without aborting
/// the rest. Input order is kept within each bucket.
pub fn evaluate_all(pairs: &[ColorPairInput], config: &EvaluatorConfig) -> BatchReport {
    let evaluated: Vec<Evaluated> = pairs.par_iter().map(|pair| evaluate_pair(pair, config)).collect();

    let mut report = BatchReport {
        passed: Vec::new(),
        failed: Vec::new(),
        invalid: Vec::new(),
    };
    for item in evaluated {
        match item {
            Evaluated::Passed(p) => report.passed.push(p),
            Evaluated::Failed(p) => report.failed.push(p),
            Evaluated::Invalid(p) => report.invalid.push(p),
        }
    }

    tracing::debug!(
        total = pairs.len(),
        passed = report.passed.len(),
        failed = report.failed.len(),
        invalid = report.invalid.len(),
        "evaluated color pairs"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(label: &str, fg: &str, bg: &str) -> ColorPairInput {
        ColorPairInput {
            label: label.to_string(),
            foreground: fg.to_string(),
            background: bg.to_string(),
        }
    }

    #[test]
    fn sorted_into_buckets() {
        let pairs = vec![
            pair("body", "#FFFFFF", "#000000"),
            pair("muted", "#777777", "#888888"),
            pair("broken", "bad", "#000000"),
        ];
        let report = evaluate_all(&pairs, &EvaluatorConfig::default());
        assert_eq!(report.passed.len(), 1);
        assert_eq!(report.passed[0].label, "body");
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].label, "muted");
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].input, "bad");
    }

    #[test]
    fn invalid_background_reported() {
        let pairs = vec![pair("x", "#000000", "#12345")];
        let report = evaluate_all(&pairs, &EvaluatorConfig::default());
        assert_eq!(report.invalid[0].input, "#12345");
    }

    #[test]
    fn empty_batch() {
        let report = evaluate_all(&[], &EvaluatorConfig::default());
        assert!(report.passed.is_empty() && report.failed.is_empty() && report.invalid.is_empty());
    }

    #[test]
    fn order_kept_under_parallelism() {
        let pairs: Vec<ColorPairInput> = (0..200)
            .map(|i| pair(&format!("pair_{i}"), "#ffffff", "#000000"))
            .collect();
        let report = evaluate_all(&pairs, &EvaluatorConfig::default());
        assert_eq!(report.passed.len(), 200);
        for (i, p) in report.passed.iter().enumerate() {
            assert_eq!(p.label, format!("pair_{i}"));
        }
    }

    #[test]
    fn matches_single_evaluation() {
        let pairs = vec![pair("a", "#1e293b", "#f8fafc")];
        let report = evaluate_all(&pairs, &EvaluatorConfig::default());
        let single = crate::presentation::report("#1e293b", "#f8fafc", &EvaluatorConfig::default()).unwrap();
        assert_eq!(report.passed[0].report, single);
    }
}
