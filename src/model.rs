use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Category assigned when a profile type carries no recognised delimiter.
pub const FALLBACK_CATEGORY: &str = "其他";

/// Category filter value that matches every profile.
pub const ALL_CATEGORIES: &str = "全部";

/// Midpoint of the 0-10 risk scale.
pub const DEFAULT_RISK_SCORE: f64 = 5.0;

pub const KEY_EMOTIONAL: &str = "情緒模組";
pub const KEY_COGNITIVE: &str = "認知模組";
pub const KEY_BEHAVIORAL: &str = "行為模組";
pub const KEY_ATTACHMENT: &str = "依附模組";
pub const KEY_BACKGROUND: &str = "人格發展背景";
pub const KEY_CONTROL: &str = "控制模組";
pub const KEY_SUBMISSION: &str = "順從_被控制模組";
pub const KEY_DEFENSE: &str = "防衛機制";
pub const KEY_INTERACTION: &str = "關係不同階段的互動模式";
pub const KEY_DIALOGUE: &str = "常見內在對話";
pub const KEY_COLD_READ: &str = "冷讀模組";
pub const KEY_COLD_READ_QUOTE: &str = "冷讀句";
pub const KEY_CASE_STUDY: &str = "案例_細節";
pub const KEY_RISK: &str = "加害_受害風險";

/// One entry of the dataset as it appears on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProfile {
    pub id: i64,
    pub profile_type: String,
    pub content: BTreeMap<String, String>,
}

impl RawProfile {
    /// Decodes a record without ever failing. Fields of the wrong shape are
    /// replaced by their defaults.
    pub fn from_value(value: &Value) -> Self {
        let id = match value.get("id") {
            Some(raw_id) => raw_id.as_i64().unwrap_or_else(|| {
                debug!(id = %raw_id, "profile id is not an integer");
                0
            }),
            None => {
                debug!("profile id missing");
                0
            }
        };

        let profile_type = value
            .get("type")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        let content = value
            .get("content")
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(key, field)| {
                        field.as_str().map(|text| (key.clone(), text.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            profile_type,
            content,
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.content.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskPair {
    pub aggressor: f64,
    pub victim: f64,
}

impl Default for RiskPair {
    fn default() -> Self {
        Self {
            aggressor: DEFAULT_RISK_SCORE,
            victim: DEFAULT_RISK_SCORE,
        }
    }
}

/// Flat view model derived from a [`RawProfile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub emotional: String,
    pub cognitive: String,
    pub behavioral: String,
    pub attachment: String,
    pub background: String,
    pub control: String,
    pub submission: String,
    pub defense: String,
    pub interaction: String,
    pub dialogue: String,
    pub cold_read: String,
    pub case_study: String,
    pub risk: RiskPair,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetStatus {
    pub dataset_path: String,
    pub sha256: String,
    pub loaded_at: String,
    pub profile_count: usize,
    pub category_count: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_value_reads_well_formed_record() {
        let raw = RawProfile::from_value(&json!({
            "id": 7,
            "type": "控制型·冷暴力者",
            "content": { "情緒模組": "壓抑" }
        }));

        assert_eq!(raw.id, 7);
        assert_eq!(raw.profile_type, "控制型·冷暴力者");
        assert_eq!(raw.field(KEY_EMOTIONAL), Some("壓抑"));
    }

    #[test]
    fn from_value_absorbs_wrong_shapes() {
        let raw = RawProfile::from_value(&json!({
            "id": "seven",
            "type": 3,
            "content": { "情緒模組": 12, "認知模組": "ok" }
        }));

        assert_eq!(raw.id, 0);
        assert_eq!(raw.profile_type, "");
        assert_eq!(raw.field(KEY_EMOTIONAL), None);
        assert_eq!(raw.field(KEY_COGNITIVE), Some("ok"));
    }

    #[test]
    fn from_value_accepts_non_object_record() {
        let raw = RawProfile::from_value(&json!(42));
        assert_eq!(raw, RawProfile::default());
    }

    #[test]
    fn risk_pair_defaults_to_midpoint() {
        let risk = RiskPair::default();
        assert_eq!(risk.aggressor, DEFAULT_RISK_SCORE);
        assert_eq!(risk.victim, DEFAULT_RISK_SCORE);
    }
}
