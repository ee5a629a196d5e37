use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::model::RawProfile;
use crate::normalize::ProfileNormalizer;

/// Message shown while the dataset is being read.
pub const LOADING_MESSAGE: &str = "載入中...";

#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("載入 JSON 失敗: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("無法解析 JSON: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Catalog),
}

/// Reads the dataset document. A missing or non-array `profiles` member is an
/// empty dataset, not a failure.
pub fn load_dataset(path: &Path) -> Result<Vec<RawProfile>, LoadFailure> {
    let raw = fs::read(path).map_err(|source| LoadFailure::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_slice(&raw).map_err(|source| LoadFailure::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw_profiles(&document))
}

pub fn raw_profiles(document: &Value) -> Vec<RawProfile> {
    match document.get("profiles") {
        Some(Value::Array(entries)) => entries.iter().map(RawProfile::from_value).collect(),
        Some(other) => {
            warn!(kind = value_kind(other), "profiles member is not an array");
            Vec::new()
        }
        None => {
            warn!("profiles member missing");
            Vec::new()
        }
    }
}

/// One-shot load of the catalog for this session.
#[derive(Debug)]
pub struct Session {
    dataset_path: PathBuf,
    state: LoadState,
}

impl Session {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            state: LoadState::Loading,
        }
    }

    /// Runs the load if it has not happened yet. Later calls are no-ops.
    pub fn load(&mut self, normalizer: &ProfileNormalizer) -> &LoadState {
        if !matches!(self.state, LoadState::Loading) {
            return &self.state;
        }

        info!(path = %self.dataset_path.display(), "{LOADING_MESSAGE}");
        self.state = match load_dataset(&self.dataset_path) {
            Ok(raws) => {
                let catalog = Catalog::new(normalizer.normalize_all(&raws));
                info!(profiles = catalog.len(), "catalog ready");
                LoadState::Ready(catalog)
            }
            Err(err) => {
                debug!(error = ?err, "dataset load failed");
                LoadState::Failed(describe_failure(&err))
            }
        };

        &self.state
    }

    pub fn into_state(self) -> LoadState {
        self.state
    }
}

fn describe_failure(err: &LoadFailure) -> String {
    match std::error::Error::source(err) {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
