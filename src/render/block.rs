use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use quick_xml::escape::escape;

use crate::publication::Publication;

const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Reveal delay step and cap, in milliseconds.
const DELAY_STEP: usize = 50;
const DELAY_CAP: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// No inline display style.
    Default,
    Shown,
    Hidden,
}

/// One rendered publication. Holds the escaped markup pieces plus the plain text the search
/// filter matches against.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationBlock {
    category: String,
    category_class: &'static str,
    year: String,
    title: String,
    citation: String,
    citations: Option<String>,
    doi_href: Option<String>,
    pub delay: usize,
    /// Unescaped text of the title element.
    pub title_text: String,
    /// Unescaped text of the journal line, without the emphasis tags.
    pub journal_text: String,
    pub visibility: Visibility,
}

impl PublicationBlock {
    /// `index` is the position within the year group; it only staggers the reveal animation.
    pub fn new(publication: &Publication, index: usize) -> Self {
        PublicationBlock {
            category: escape(publication.category.as_str()).into_owned(),
            category_class: category_class(&publication.category),
            year: escape(publication.year.label.as_str()).into_owned(),
            title: escape(publication.title.as_str()).into_owned(),
            citation: format_citation(publication),
            citations: publication
                .citations
                .as_deref()
                .map(|c| escape(c).into_owned()),
            doi_href: publication.doi.as_deref().map(doi_url),
            delay: reveal_delay(index),
            title_text: publication.title.clone(),
            journal_text: citation_text(publication),
            visibility: Visibility::Default,
        }
    }

    pub fn to_html(&self) -> String {
        let style = match self.visibility {
            Visibility::Default => "",
            Visibility::Shown => r#" style="display: block;""#,
            Visibility::Hidden => r#" style="display: none;""#,
        };
        let citations = match &self.citations {
            Some(n) => format!(
                r#"<span class="publication-citations"><i class="fas fa-quote-right"></i> {n} citations</span>"#
            ),
            None => String::new(),
        };
        let doi = match &self.doi_href {
            Some(href) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" style="color: var(--secondary-color); text-decoration: none;"><i class="fas fa-external-link-alt"></i> DOI</a>"#,
                escape(href.as_str())
            ),
            None => String::new(),
        };
        format!(
            r#"<div class="publication-item" data-category="{category}" data-aos="fade-up" data-aos-delay="{delay}"{style}>
    <div class="publication-year">{year}</div>
    <h3 class="publication-title">{title}</h3>
    <p class="publication-journal">{citation}</p>
    <div class="publication-meta">
        <span class="publication-category {class}">{category}</span>
        {citations}
        {doi}
    </div>
</div>
"#,
            category = self.category,
            delay = self.delay,
            year = self.year,
            title = self.title,
            citation = self.citation,
            class = self.category_class,
        )
    }
}

pub fn reveal_delay(index: usize) -> usize {
    index.saturating_mul(DELAY_STEP).min(DELAY_CAP)
}

/// Style class for a category badge. Exact, case-sensitive match; anything unknown gets the
/// fallback.
pub fn category_class(category: &str) -> &'static str {
    match category {
        "Ion Channels" => "category-ion-channels",
        "Peptides" => "category-peptides",
        "Pain Research" => "category-pain-research",
        "Drug Discovery" => "category-drug-discovery",
        _ => FALLBACK_CATEGORY_CLASS,
    }
}

pub const FALLBACK_CATEGORY_CLASS: &str = "category-ion-channels";

/// `<em>Journal</em>. Volume:Pages`, dropping whichever of volume and pages is missing.
pub fn format_citation(publication: &Publication) -> String {
    let mut citation = format!("<em>{}</em>", escape(publication.journal.as_str()));
    if let Some(volume) = &publication.volume {
        citation.push_str(&format!(". {}", escape(volume.as_str())));
    }
    if let Some(pages) = &publication.pages {
        citation.push_str(&format!(":{}", escape(pages.as_str())));
    }
    citation
}

fn citation_text(publication: &Publication) -> String {
    let mut text = publication.journal.clone();
    if let Some(volume) = &publication.volume {
        text.push_str(". ");
        text.push_str(volume);
    }
    if let Some(pages) = &publication.pages {
        text.push(':');
        text.push_str(pages);
    }
    text
}

pub fn doi_url(doi: &str) -> String {
    format!(
        "https://doi.org/{}",
        utf8_percent_encode(doi.trim(), PATH_SEGMENT_ENCODE_SET)
    )
}
