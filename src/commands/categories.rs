use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::cli::CategoriesArgs;
use crate::commands::open_catalog;
use crate::model::ALL_CATEGORIES;
use crate::render::write_category_bar;
use crate::util::write_json_stdout;

pub fn run(dataset: &Path, args: CategoriesArgs) -> Result<()> {
    let catalog = open_catalog(dataset)?;
    let categories = catalog.categories();

    if args.json {
        return write_json_stdout(&categories);
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_category_bar(&mut output, &categories, ALL_CATEGORIES)?;
    output.flush()?;
    Ok(())
}
