//! Numerical answers: `#value` or `#value:tolerance`, possibly several per payload.

use crate::gift::ast::NumericalAnswer;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_ANSWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\s*([\d.+\-]+)(?::([\d.]+))?").unwrap());

pub fn parse_numerical(payload: &str) -> Vec<NumericalAnswer> {
    NUMERIC_ANSWER
        .captures_iter(payload)
        .filter_map(|captures| {
            let raw_value = captures.get(1)?.as_str();
            let Ok(value) = raw_value.parse::<f64>() else {
                tracing::debug!(value = raw_value, "dropping unparseable numerical answer");
                return None;
            };
            let tolerance = match captures.get(2) {
                None => 0.0,
                Some(raw) => match raw.as_str().parse::<f64>() {
                    Ok(tolerance) => tolerance,
                    Err(_) => {
                        tracing::debug!(
                            tolerance = raw.as_str(),
                            "dropping numerical answer with unparseable tolerance"
                        );
                        return None;
                    }
                },
            };
            Some(NumericalAnswer::new(value, tolerance))
        })
        .collect()
}
