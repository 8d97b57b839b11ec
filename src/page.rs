//! The page the publications list is rendered into.

use crate::render::block::PublicationBlock;

pub const LIST_ID: &str = "publications-list";
pub const SEARCH_ID: &str = "publication-search";

/// Everything the renderer and the search filter are allowed to touch. Either part may be
/// missing, as on a real page.
#[derive(Debug, Default)]
pub struct Page {
    pub list: Option<Container>,
    pub search: Option<SearchInput>,
}

impl Page {
    pub fn new(list: Option<Container>, search: Option<SearchInput>) -> Self {
        Page { list, search }
    }

    /// Full HTML document with the search box (when present) above the list.
    pub fn to_html(&self) -> String {
        let search = self
            .search
            .as_ref()
            .map(SearchInput::to_html)
            .unwrap_or_default();
        let list = self
            .list
            .as_ref()
            .map(Container::to_html)
            .unwrap_or_default();
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Publications</title>
    <link rel="stylesheet" href="css/style.css">
</head>
<body>
<section class="publications">
{search}{list}
</section>
</body>
</html>
"#
        )
    }
}

/// The search box. `value` is whatever was last typed into it.
#[derive(Debug, Default, Clone)]
pub struct SearchInput {
    pub value: String,
}

impl SearchInput {
    fn to_html(&self) -> String {
        format!(
            "<input type=\"search\" id=\"{SEARCH_ID}\" placeholder=\"Search publications...\" value=\"{}\">\n",
            quick_xml::escape::escape(self.value.as_str())
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Loading,
    Empty,
    YearHeader(String),
    Publication(PublicationBlock),
    Error,
}

impl Node {
    fn to_html(&self) -> String {
        match self {
            Node::Loading => concat!(
                "<div class=\"loading-spinner\">",
                "<i class=\"fas fa-spinner fa-spin\"></i> Loading publications...",
                "</div>\n"
            )
            .to_string(),
            Node::Empty => concat!(
                "<p style=\"text-align: center; color: var(--text-light);\">",
                "No publications found.</p>\n"
            )
            .to_string(),
            Node::YearHeader(label) => format!(
                "<h3 class=\"publications-year-header\">{}</h3>\n",
                quick_xml::escape::escape(label.as_str())
            ),
            Node::Publication(block) => block.to_html(),
            Node::Error => r#"<div style="text-align: center; padding: 3rem;">
    <i class="fas fa-exclamation-triangle" style="font-size: 3rem; color: var(--accent-color); margin-bottom: 1rem;"></i>
    <p style="color: var(--text-light); font-size: 1.2rem;">Failed to load publications.</p>
    <p style="color: var(--text-light);">Please check the publications-data.json file.</p>
</div>
"#
            .to_string(),
        }
    }
}

/// The `publications-list` element. Starts out showing the loading placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    nodes: Vec<Node>,
}

impl Default for Container {
    fn default() -> Self {
        Container {
            nodes: vec![Node::Loading],
        }
    }
}

impl Container {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn blocks(&self) -> impl Iterator<Item = &PublicationBlock> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Publication(b) => Some(b),
            _ => None,
        })
    }

    pub fn blocks_mut(&mut self) -> impl Iterator<Item = &mut PublicationBlock> {
        self.nodes.iter_mut().filter_map(|n| match n {
            Node::Publication(b) => Some(b),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn year_headers(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            Node::YearHeader(label) => Some(label.as_str()),
            _ => None,
        })
    }

    pub fn to_html(&self) -> String {
        let mut out = format!("<div id=\"{LIST_ID}\">\n");
        for node in &self.nodes {
            out.push_str(&node.to_html());
        }
        out.push_str("</div>\n");
        out
    }
}
