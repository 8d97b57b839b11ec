use crate::{
    diag,
    page::{Node, Page},
    publication::Publication,
};

pub mod block;
pub mod group;

use block::PublicationBlock;

/// Replace the list's contents with the publications, grouped by year, newest first.
///
/// `publications` is sorted in place. Returns how many publication blocks were rendered; a
/// page without a list is logged and left untouched.
pub fn render_publications(page: &mut Page, publications: &mut [Publication]) -> usize {
    let Some(list) = page.list.as_mut() else {
        diag::error("Publications list element not found");
        return 0;
    };

    list.clear();

    if publications.is_empty() {
        list.push(Node::Empty);
        return 0;
    }

    group::sort_by_year(publications);

    let mut rendered = 0;
    for year_group in group::group_by_year(publications) {
        list.push(Node::YearHeader(year_group.label.to_string()));
        for (index, publication) in year_group.publications.iter().enumerate() {
            list.push(Node::Publication(PublicationBlock::new(publication, index)));
            rendered += 1;
        }
    }
    rendered
}

/// Swap the list's contents for the fixed failure message. Does nothing without a list.
pub fn show_error(page: &mut Page) {
    if let Some(list) = page.list.as_mut() {
        list.clear();
        list.push(Node::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        page::Container,
        publication::ingest,
    };

    fn page() -> Page {
        Page::new(Some(Container::default()), None)
    }

    fn sample() -> Vec<Publication> {
        ingest(
            r#"[
                {"title": "Old", "journal": "J Physiol", "year": "2017", "category": "Ion Channels"},
                {"title": "New A", "journal": "Nature", "year": 2022, "volume": "600", "pages": "1-9", "category": "Peptides"},
                {"title": "Mid", "journal": "Pain", "year": "2019", "citations": "0", "category": "Pain Research"},
                {"title": "New B", "journal": "Cell", "year": "2022", "citations": "31", "doi": "10.1016/j.cell.2022.01.001"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn renders_year_headers_newest_first() {
        let mut page = page();
        let mut pubs = sample();
        assert_eq!(render_publications(&mut page, &mut pubs), 4);
        let list = page.list.unwrap();
        let headers: Vec<_> = list.year_headers().collect();
        assert_eq!(headers, ["2022", "2019", "2017"]);
        let titles: Vec<_> = list.blocks().map(|b| b.title_text.as_str()).collect();
        assert_eq!(titles, ["New A", "New B", "Mid", "Old"]);
    }

    #[test]
    fn first_node_is_a_header_and_loading_is_gone() {
        let mut page = page();
        render_publications(&mut page, &mut sample());
        let list = page.list.unwrap();
        assert!(matches!(list.nodes()[0], Node::YearHeader(_)));
        assert!(!list.nodes().contains(&Node::Loading));
    }

    #[test]
    fn delays_restart_per_group() {
        let mut page = page();
        render_publications(&mut page, &mut sample());
        let delays: Vec<_> = page.list.unwrap().blocks().map(|b| b.delay).collect();
        assert_eq!(delays, [0, 50, 0, 0]);
    }

    #[test]
    fn empty_input_renders_single_placeholder() {
        let mut page = page();
        assert_eq!(render_publications(&mut page, &mut []), 0);
        let list = page.list.unwrap();
        assert_eq!(list.nodes(), &[Node::Empty]);
        assert!(list.to_html().contains("No publications found."));
        assert_eq!(list.year_headers().count(), 0);
    }

    #[test]
    fn rendering_twice_does_not_accumulate() {
        let mut page = page();
        render_publications(&mut page, &mut sample());
        let once = page.list.as_ref().unwrap().to_html();
        render_publications(&mut page, &mut sample());
        let twice = page.list.as_ref().unwrap().to_html();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_list_is_left_alone() {
        let mut page = Page::default();
        assert_eq!(render_publications(&mut page, &mut sample()), 0);
        assert!(page.list.is_none());
        show_error(&mut page);
        assert!(page.list.is_none());
    }

    #[test]
    fn input_is_sorted_in_place() {
        let mut pubs = sample();
        render_publications(&mut page(), &mut pubs);
        let years: Vec<_> = pubs.iter().map(|p| p.year.value).collect();
        assert_eq!(years, [2022, 2022, 2019, 2017]);
    }

    #[test]
    fn numeric_and_string_years_share_a_group() {
        let mut page = page();
        let mut pubs = ingest(
            r#"[
                {"title": "Number", "year": 2017},
                {"title": "Text", "year": "2017"},
                {"title": "Float", "year": 2017.0}
            ]"#,
        )
        .unwrap();
        render_publications(&mut page, &mut pubs);
        let list = page.list.unwrap();
        let headers: Vec<_> = list.year_headers().collect();
        assert_eq!(headers, ["2017"]);
        let titles: Vec<_> = list.blocks().map(|b| b.title_text.as_str()).collect();
        assert_eq!(titles, ["Number", "Text", "Float"]);
    }

    #[test]
    fn error_display_is_idempotent() {
        let mut page = page();
        render_publications(&mut page, &mut sample());
        show_error(&mut page);
        let once = page.list.as_ref().unwrap().to_html();
        show_error(&mut page);
        let list = page.list.unwrap();
        assert_eq!(list.to_html(), once);
        assert_eq!(list.nodes(), &[Node::Error]);
        assert!(once.contains("Failed to load publications."));
        assert_eq!(list.blocks().count(), 0);
    }
}
