use anyhow::Result;

use crate::model::{
    FALLBACK_CATEGORY, KEY_ATTACHMENT, KEY_BACKGROUND, KEY_BEHAVIORAL, KEY_CASE_STUDY,
    KEY_COGNITIVE, KEY_COLD_READ, KEY_COLD_READ_QUOTE, KEY_CONTROL, KEY_DEFENSE, KEY_DIALOGUE,
    KEY_EMOTIONAL, KEY_INTERACTION, KEY_RISK, KEY_SUBMISSION, Profile, RawProfile,
};
use crate::risk::RiskExtractor;

/// Delimiters ending the category prefix of a profile type, in priority order.
pub const CATEGORY_DELIMITERS: &[char] = &['·', '（'];

/// Label placed in front of the cold-read quote.
pub const COLD_READ_QUOTE_LABEL: &str = "💬 冷讀金句：";

#[derive(Debug, Clone)]
pub struct ProfileNormalizer {
    risk: RiskExtractor,
}

impl ProfileNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            risk: RiskExtractor::new()?,
        })
    }

    pub fn normalize(&self, raw: &RawProfile) -> Profile {
        let text = |key: &str| raw.field(key).unwrap_or_default().to_string();

        Profile {
            id: raw.id,
            title: raw.profile_type.clone(),
            category: derive_category(&raw.profile_type),
            emotional: text(KEY_EMOTIONAL),
            cognitive: text(KEY_COGNITIVE),
            behavioral: text(KEY_BEHAVIORAL),
            attachment: text(KEY_ATTACHMENT),
            background: text(KEY_BACKGROUND),
            control: text(KEY_CONTROL),
            submission: text(KEY_SUBMISSION),
            defense: text(KEY_DEFENSE),
            interaction: text(KEY_INTERACTION),
            dialogue: text(KEY_DIALOGUE),
            cold_read: compose_cold_read(
                raw.field(KEY_COLD_READ).unwrap_or_default(),
                raw.field(KEY_COLD_READ_QUOTE).unwrap_or_default(),
            ),
            case_study: text(KEY_CASE_STUDY),
            risk: self.risk.extract(raw.field(KEY_RISK)),
        }
    }

    pub fn normalize_all(&self, raws: &[RawProfile]) -> Vec<Profile> {
        raws.iter().map(|raw| self.normalize(raw)).collect()
    }
}

/// Text before the first delimiter, trying each delimiter in priority order.
/// An empty prefix falls back like a missing delimiter.
pub fn derive_category(title: &str) -> String {
    CATEGORY_DELIMITERS
        .iter()
        .find_map(|delimiter| title.split_once(*delimiter).map(|(prefix, _)| prefix))
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(FALLBACK_CATEGORY)
        .to_string()
}

pub fn compose_cold_read(text: &str, quote: &str) -> String {
    let mut combined = text.to_string();
    if !quote.is_empty() {
        combined.push_str("\n\n");
        combined.push_str(COLD_READ_QUOTE_LABEL);
        combined.push('\n');
        combined.push_str(quote);
    }
    combined.trim().to_string()
}
