use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::source::DataSource;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the publications list as HTML
    Render {
        #[command(flatten)]
        input: Input,
        /// Write the HTML here instead of standard output
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Emit a complete page with a search box instead of just the list. The page carries no
        /// script: filtering happens only here, at render time, through `--search`
        #[arg(long)]
        standalone: bool,
        /// Pre-filter the rendered list as if TERM had been typed into the search box
        #[arg(long, value_name = "TERM")]
        search: Option<String>,
    },
    /// Print the titles of publications matching TERM
    Search {
        #[arg(value_name = "TERM")]
        term: String,
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
pub struct Input {
    /// Publications data: a file path or an http(s) URL
    #[arg(short, long, value_name = "SRC", default_value_t = DataSource::default())]
    pub data: DataSource,
    /// URL of the page the list is published on; relative data paths are resolved against it
    #[arg(long, value_name = "URL")]
    pub base: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults_to_local_data_file() {
        let cli = Cli::try_parse_from(["pubs", "render"]).expect("parse");
        match cli.command {
            Command::Render { input, standalone, .. } => {
                assert_eq!(input.data, DataSource::default());
                assert!(input.base.is_none());
                assert!(!standalone);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn standalone_help_says_filtering_is_render_time_only() {
        let help = Cli::command()
            .find_subcommand_mut("render")
            .expect("render subcommand")
            .render_long_help()
            .to_string();
        let help = help.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(help.contains("only here, at render time"), "help=\n{help}");
    }

    #[test]
    fn search_takes_term_and_url() {
        let cli = Cli::try_parse_from([
            "pubs",
            "search",
            "venom",
            "--data",
            "https://lab.example.org/publications-data.json",
        ])
        .expect("parse");
        match cli.command {
            Command::Search { term, input } => {
                assert_eq!(term, "venom");
                assert!(matches!(input.data, DataSource::Url(_)));
            }
            other => panic!("expected search, got {other:?}"),
        }
    }
}
