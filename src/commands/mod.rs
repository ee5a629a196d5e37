use std::path::Path;

use anyhow::{Result, bail};

use crate::catalog::Catalog;
use crate::load::{LoadState, Session};
use crate::normalize::ProfileNormalizer;

pub mod categories;
pub mod list;
pub mod show;
pub mod status;

/// Loads and normalizes the dataset, surfacing a failed load as the error
/// shown in place of the catalog.
pub fn open_catalog(dataset: &Path) -> Result<Catalog> {
    let normalizer = ProfileNormalizer::new()?;
    let mut session = Session::new(dataset);
    session.load(&normalizer);

    match session.into_state() {
        LoadState::Ready(catalog) => Ok(catalog),
        LoadState::Failed(message) => bail!(message),
        LoadState::Loading => bail!("dataset was never loaded: {}", dataset.display()),
    }
}
