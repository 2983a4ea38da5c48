//! HTML table rows for a citation listing

use crate::apa::{format_citation_html, get_source_label};
use crate::palette::DomainPalette;
use citeshelf_domain::Citation;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one `<tr>` per citation for the library table body
///
/// Each row carries the HTML citation with a link labelled by the source,
/// a domain badge styled through `palette`, and the synthesis. Rows for
/// citations without a URL have no link.
pub fn render_citation_rows<'a, I>(citations: I, palette: &DomainPalette) -> String
where
    I: IntoIterator<Item = &'a Citation>,
{
    let mut html = String::new();
    for citation in citations {
        html.push_str(&render_row(citation, palette));
    }
    html
}

fn render_row(citation: &Citation, palette: &DomainPalette) -> String {
    let domain = escape_html(&citation.domain);

    let mut row = format!(
        "<tr class=\"lit-row border-b\" data-source=\"{}\" data-year=\"{}\" data-id=\"{}\">\n",
        domain,
        citation.year_label(),
        escape_html(&citation.id),
    );

    row.push_str("    <td class=\"p-4\">\n");
    row.push_str(&format!(
        "        <span class=\"block leading-snug citation-text\">{}</span>\n",
        format_citation_html(citation),
    ));
    if let Some(url) = citation.url() {
        row.push_str(&format!(
            "        <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"apa-link\">View Full Article ({})</a>\n",
            escape_html(url),
            escape_html(get_source_label(citation)),
        ));
    }
    row.push_str("    </td>\n");

    row.push_str("    <td class=\"p-4\">\n");
    row.push_str(&format!(
        "        <span class=\"domain-tag {}\">{}</span>\n",
        escape_html(palette.class_for(&citation.domain)),
        domain,
    ));
    row.push_str("    </td>\n");

    row.push_str(&format!(
        "    <td class=\"p-4 text-xs synthesis-text\">{}</td>\n",
        escape_html(&citation.synthesis),
    ));
    row.push_str("</tr>\n");
    row
}
