use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::ALL_CATEGORIES;
use crate::render::DetailTab;

#[derive(Parser, Debug)]
#[command(
    name = "persona-catalog",
    version,
    about = "Browse and search the relationship personality catalog"
)]
pub struct Cli {
    #[arg(long, global = true, default_value = "public/戀愛人格表.json")]
    pub dataset: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    List(ListArgs),
    Categories(CategoriesArgs),
    Show(ShowArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    #[arg(long, short = 'c', default_value = ALL_CATEGORIES)]
    pub category: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    pub id: i64,

    #[arg(long, value_enum, default_value_t = DetailTab::Core)]
    pub tab: DetailTab,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_all_categories() {
        let cli = Cli::try_parse_from(["persona-catalog", "list"]).expect("parse");
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search, "");
                assert_eq!(args.category, ALL_CATEGORIES);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.dataset, PathBuf::from("public/戀愛人格表.json"));
    }

    #[test]
    fn show_accepts_tab_and_global_dataset() {
        let cli = Cli::try_parse_from([
            "persona-catalog",
            "show",
            "3",
            "--tab",
            "deep",
            "--dataset",
            "data.json",
        ])
        .expect("parse");
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.tab, DetailTab::Deep);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.dataset, PathBuf::from("data.json"));
    }
}
