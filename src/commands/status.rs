use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::cli::StatusArgs;
use crate::commands::open_catalog;
use crate::model::DatasetStatus;
use crate::util::{now_utc_string, sha256_file, write_json_stdout};

pub fn run(dataset: &Path, args: StatusArgs) -> Result<()> {
    let catalog = open_catalog(dataset)?;
    let status = DatasetStatus {
        dataset_path: dataset.display().to_string(),
        sha256: sha256_file(dataset)?,
        loaded_at: now_utc_string(),
        profile_count: catalog.len(),
        // the "all" sentinel is not a dataset category
        category_count: catalog.categories().len() - 1,
    };

    info!(
        path = %status.dataset_path,
        profiles = status.profile_count,
        categories = status.category_count,
        "dataset status"
    );

    if args.json {
        return write_json_stdout(&status);
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "Dataset: {}", status.dataset_path)?;
    writeln!(output, "SHA-256: {}", status.sha256)?;
    writeln!(output, "Loaded at: {}", status.loaded_at)?;
    writeln!(output, "Profiles: {}", status.profile_count)?;
    writeln!(output, "Categories: {}", status.category_count)?;
    output.flush()?;
    Ok(())
}
