use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ShowArgs;
use crate::commands::open_catalog;
use crate::render::write_detail;
use crate::util::write_json_stdout;

pub fn run(dataset: &Path, args: ShowArgs) -> Result<()> {
    let catalog = open_catalog(dataset)?;
    let profile = catalog
        .get(args.id)
        .with_context(|| format!("no profile with id {} in {}", args.id, dataset.display()))?;

    info!(id = profile.id, tab = args.tab.title(), "profile selected");

    if args.json {
        return write_json_stdout(profile);
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_detail(&mut output, profile, args.tab)?;
    output.flush()?;
    Ok(())
}
