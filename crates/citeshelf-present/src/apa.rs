//! APA-style renditions of a citation

use crate::html::escape_html;
use citeshelf_domain::Citation;

/// Output target for the shared APA builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    /// Plain text with a DOI suffix
    Text,
    /// Escaped HTML with the source in `<em>` and no DOI
    Html,
}

impl Markup {
    fn field(self, value: &str) -> String {
        match self {
            Markup::Text => value.to_string(),
            Markup::Html => escape_html(value),
        }
    }

    fn source(self, source: &str) -> String {
        match self {
            Markup::Text => source.to_string(),
            Markup::Html => format!("<em>{}</em>", escape_html(source)),
        }
    }
}

/// Plain-text APA citation used by the text export
///
/// `"<authors> (<year>). <title>. <source>"`, then for journals the volume,
/// `(issue)` and pages when present, then `". https://doi.org/<doi>"` when a
/// DOI is present. Missing required fields render as empty segments.
pub fn format_citation(citation: &Citation) -> String {
    build(citation, Markup::Text)
}

/// HTML APA citation used by the table renderer
///
/// Same shape as [`format_citation`] with the source emphasized and the DOI
/// left out; the table row links to the full text separately.
pub fn format_citation_html(citation: &Citation) -> String {
    build(citation, Markup::Html)
}

fn build(citation: &Citation, markup: Markup) -> String {
    let mut apa = format!(
        "{} ({}). {}. {}",
        markup.field(&citation.authors),
        citation.year_label(),
        markup.field(&citation.title),
        markup.source(&citation.source),
    );

    if citation.is_journal() {
        if let Some(volume) = citation.volume() {
            apa.push_str(&format!(", {}", markup.field(volume)));
        }
        if let Some(issue) = citation.issue() {
            apa.push_str(&format!("({})", markup.field(issue)));
        }
        if let Some(pages) = citation.pages() {
            apa.push_str(&format!(", {}", markup.field(pages)));
        }
    }

    if markup == Markup::Text {
        if let Some(doi) = citation.doi() {
            apa.push_str(&format!(". https://doi.org/{}", doi));
        }
    }

    apa
}

/// Link label for a citation
///
/// Journals are labelled by the first word of the journal name; everything
/// else by the full source.
pub fn get_source_label(citation: &Citation) -> &str {
    if citation.is_journal() {
        return citation.source.split(' ').next().unwrap_or_default();
    }
    &citation.source
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_article() -> Citation {
        let mut c = Citation::new("ortiz2004", "Heart rate and antisocial behavior", "Ortiz, J., & Raine, A.", 2004);
        c.source = "Journal of the American Academy of Child & Adolescent Psychiatry".to_string();
        c.source_type = "journal".to_string();
        c.volume = Some("5".to_string());
        c.issue = Some("2".to_string());
        c.pages = Some("10-20".to_string());
        c
    }

    #[test]
    fn test_journal_volume_issue_pages_order() {
        let apa = format_citation(&journal_article());
        assert!(apa.contains(", 5(2), 10-20"));
        assert_eq!(
            apa,
            "Ortiz, J., & Raine, A. (2004). Heart rate and antisocial behavior. \
             Journal of the American Academy of Child & Adolescent Psychiatry, 5(2), 10-20"
        );
    }

    #[test]
    fn test_journal_parts_only_when_present() {
        let mut c = journal_article();
        c.volume = None;
        c.pages = Some(String::new());
        assert!(format_citation(&c).ends_with("Psychiatry(2)"));
    }

    #[test]
    fn test_non_journal_ignores_volume() {
        let mut c = journal_article();
        c.source = "Pantheon".to_string();
        c.source_type = "book".to_string();
        assert_eq!(
            format_citation(&c),
            "Ortiz, J., & Raine, A. (2004). Heart rate and antisocial behavior. Pantheon"
        );
    }

    #[test]
    fn test_doi_only_in_text_variant() {
        let mut c = journal_article();
        c.doi = Some("10.1097/00004583-200402000-00010".to_string());

        assert!(format_citation(&c).ends_with(", 10-20. https://doi.org/10.1097/00004583-200402000-00010"));
        assert!(!format_citation_html(&c).contains("doi.org"));
    }

    #[test]
    fn test_html_variant_emphasizes_and_escapes() {
        let html = format_citation_html(&journal_article());
        assert_eq!(
            html,
            "Ortiz, J., &amp; Raine, A. (2004). Heart rate and antisocial behavior. \
             <em>Journal of the American Academy of Child &amp; Adolescent Psychiatry</em>, 5(2), 10-20"
        );
    }

    #[test]
    fn test_missing_required_fields_render_empty() {
        let c: Citation = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert_eq!(format_citation(&c), " (). . ");
        assert_eq!(format_citation_html(&c), " (). . <em></em>");
    }

    #[test]
    fn test_null_fields_render_empty() {
        let c: Citation = serde_json::from_str(
            r#"{"id": "c1", "title": null, "authors": null, "source": null, "sourceType": null, "studyType": null}"#,
        )
        .unwrap();
        assert_eq!(format_citation(&c), " (). . ");
    }

    #[test]
    fn test_source_label() {
        let journal = journal_article();
        assert_eq!(get_source_label(&journal), "Journal");

        let mut book = journal_article();
        book.source_type = "book".to_string();
        book.source = "Oxford University Press".to_string();
        assert_eq!(get_source_label(&book), "Oxford University Press");

        let mut empty = journal_article();
        empty.source = String::new();
        assert_eq!(get_source_label(&empty), "");
    }
}
