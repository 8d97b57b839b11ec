use crate::{
    page::{Container, Page},
    render::block::Visibility,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

/// Hook the filter up to the page's search box. Returns whether there is one to listen to;
/// nothing is filtered until the box changes.
pub fn attach(page: &Page) -> bool {
    page.search.is_some()
}

/// The search box changed: remember the new value and re-filter.
pub fn on_input(page: &mut Page, value: &str) -> Option<FilterSummary> {
    page.search.as_mut()?.value = value.to_string();
    Some(
        page.list
            .as_mut()
            .map(|list| apply_filter(list, value))
            .unwrap_or_default(),
    )
}

/// Show blocks whose title or journal line contains `term` (case-insensitive), hide the rest.
/// An empty term shows everything.
pub fn apply_filter(list: &mut Container, term: &str) -> FilterSummary {
    let term = term.to_lowercase();
    let mut summary = FilterSummary::default();
    for block in list.blocks_mut() {
        let matches = block.title_text.to_lowercase().contains(&term)
            || block.journal_text.to_lowercase().contains(&term);
        if matches {
            block.visibility = Visibility::Shown;
            summary.shown += 1;
        } else {
            block.visibility = Visibility::Hidden;
            summary.hidden += 1;
        }
    }
    summary
}
