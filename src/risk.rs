//! Extraction of the aggressor/victim risk scores from free text.
//!
//! The annotation grammar, matched independently per label:
//!
//! ```text
//! annotation := LABEL COLON? WS* NUMERAL
//! LABEL      := "加害" | "受害"
//! COLON      := ":" | "："
//! NUMERAL    := DIGIT+ ("." DIGIT+)?
//! ```
//!
//! Only the first occurrence of each label counts.

use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{DEFAULT_RISK_SCORE, RiskPair};

pub const AGGRESSOR_LABEL: &str = "加害";
pub const VICTIM_LABEL: &str = "受害";
pub const COLON_VARIANTS: &[char] = &[':', '：'];
pub const NUMERAL_PATTERN: &str = r"[0-9]+(?:\.[0-9]+)?";

#[derive(Debug, Clone)]
pub struct RiskExtractor {
    aggressor: Regex,
    victim: Regex,
}

impl RiskExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            aggressor: annotation_regex(AGGRESSOR_LABEL)?,
            victim: annotation_regex(VICTIM_LABEL)?,
        })
    }

    pub fn extract(&self, text: Option<&str>) -> RiskPair {
        let Some(text) = text else {
            return RiskPair::default();
        };

        RiskPair {
            aggressor: match_score(&self.aggressor, text),
            victim: match_score(&self.victim, text),
        }
    }
}

fn annotation_regex(label: &str) -> Result<Regex> {
    let colons = COLON_VARIANTS
        .iter()
        .map(|colon| regex::escape(&colon.to_string()))
        .collect::<String>();
    let pattern = format!(
        r"{}[{colons}]?\s*({NUMERAL_PATTERN})",
        regex::escape(label)
    );

    Regex::new(&pattern).with_context(|| format!("failed to compile risk pattern for {label}"))
}

fn match_score(pattern: &Regex, text: &str) -> f64 {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|numeral| numeral.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_RISK_SCORE)
}
