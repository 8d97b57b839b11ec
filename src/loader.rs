use crate::{
    diag,
    page::Page,
    publication::ingest,
    render::{render_publications, show_error},
    source::Fetch,
};

#[derive(Debug)]
pub enum LoadOutcome {
    /// Number of publications rendered.
    Rendered(usize),
    /// The page has no list to render into; carries how many publications were loaded.
    NoTarget(usize),
    Failed(anyhow::Error),
}

/// Fetch, decode and render the publications into `page`. A single attempt: any failure
/// before rendering replaces the list with the error message.
pub fn load(page: &mut Page, source: &dyn Fetch) -> LoadOutcome {
    let mut publications = match source.fetch().and_then(|body| ingest(&body)) {
        Ok(publications) => publications,
        Err(err) => {
            diag::error(format!("Error loading publications: {err:#}"));
            show_error(page);
            return LoadOutcome::Failed(err);
        }
    };

    let loaded = publications.len();
    let has_list = page.list.is_some();
    let rendered = render_publications(page, &mut publications);
    diag::info(format!("Loaded {loaded} publications successfully!"));
    if has_list {
        LoadOutcome::Rendered(rendered)
    } else {
        LoadOutcome::NoTarget(loaded)
    }
}
