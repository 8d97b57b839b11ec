use std::fs;

use anyhow::Context;
use clap::Parser;

use crate::{
    cli::{Cli, Command, Input},
    loader::{LoadOutcome, load},
    page::{Container, Page, SearchInput},
    render::block::Visibility,
};

mod cli;
mod diag;
mod loader;
mod page;
mod publication;
mod render;
mod search;
mod source;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    match args.command {
        Command::Render {
            input,
            output,
            standalone,
            search: term,
        } => {
            let search_box = (standalone || term.is_some()).then(SearchInput::default);
            let mut page = Page::new(Some(Container::default()), search_box);
            load_into(&mut page, input)?;
            if search::attach(&page)
                && let Some(term) = term
                && let Some(summary) = search::on_input(&mut page, &term)
            {
                diag::summary(summary.shown, summary.hidden);
            }

            let html = if standalone {
                page.to_html()
            } else {
                page.list.as_ref().map(Container::to_html).unwrap_or_default()
            };
            match output {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
        }
        Command::Search { term, input } => {
            let mut page = Page::new(Some(Container::default()), Some(SearchInput::default()));
            match load_into(&mut page, input)? {
                LoadOutcome::Rendered(_) => {
                    let summary = search::on_input(&mut page, &term).unwrap_or_default();
                    if let Some(list) = &page.list {
                        for block in list.blocks().filter(|b| b.visibility != Visibility::Hidden) {
                            println!("{}", block.title_text);
                        }
                    }
                    if summary.shown == 0 {
                        diag::warn(format!("No publications match \"{term}\""));
                    }
                    diag::summary(summary.shown, summary.hidden);
                }
                LoadOutcome::NoTarget(_) => diag::summary(0, 0),
                LoadOutcome::Failed(err) => {
                    diag::warn(format!("Nothing to search: {}", err.root_cause()));
                    diag::summary(0, 0);
                }
            }
        }
    }
    Ok(())
}

fn load_into(page: &mut Page, input: Input) -> anyhow::Result<LoadOutcome> {
    let source = input.data.resolve(input.base.as_ref())?;
    let fetcher = source.into_fetcher();
    diag::info(format!("Loading publications from {}", fetcher.describe()));
    Ok(load(page, fetcher.as_ref()))
}
