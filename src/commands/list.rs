use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::CatalogQuery;
use crate::cli::ListArgs;
use crate::commands::open_catalog;
use crate::model::Profile;
use crate::render::write_card_list;
use crate::util::write_json_stdout;

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    search: &'a str,
    category: &'a str,
    total: usize,
    returned: usize,
    profiles: Vec<&'a Profile>,
}

pub fn run(dataset: &Path, args: ListArgs) -> Result<()> {
    let catalog = open_catalog(dataset)?;
    let query = CatalogQuery::new(args.search, args.category);

    if catalog.is_empty() {
        warn!(path = %dataset.display(), "catalog is empty");
    }

    if !catalog.categories().contains(&query.category) {
        warn!(category = %query.category, "category not present in catalog");
    }

    let profiles = catalog.filter(&query);
    info!(
        search = %query.search,
        category = %query.category,
        returned = profiles.len(),
        total = catalog.len(),
        "catalog filtered"
    );

    if args.json {
        return write_json_stdout(&ListResponse {
            search: &query.search,
            category: &query.category,
            total: catalog.len(),
            returned: profiles.len(),
            profiles,
        });
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_card_list(&mut output, &query, catalog.len(), &profiles)?;
    output.flush()?;
    Ok(())
}
