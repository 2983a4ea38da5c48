//! BibTeX export

use citeshelf_domain::Citation;

/// Render citations as BibTeX entries
///
/// Journals become `@article`, everything else `@misc`, keyed by the
/// citation id. Field values are emitted verbatim: braces and TeX special
/// characters are not escaped, so values containing `{` or `}` produce
/// unbalanced entries.
pub fn export_to_bibtex<'a, I>(citations: I) -> String
where
    I: IntoIterator<Item = &'a Citation>,
{
    let mut bibtex = String::new();

    for citation in citations {
        let entry_type = if citation.is_journal() { "article" } else { "misc" };
        bibtex.push_str(&format!("@{}{{{},\n", entry_type, citation.id));
        push_field(&mut bibtex, "author", &citation.authors);
        push_field(&mut bibtex, "title", &citation.title);
        push_field(&mut bibtex, "year", &citation.year_label());

        if citation.is_journal() {
            push_field(&mut bibtex, "journal", &citation.source);
            if let Some(volume) = citation.volume() {
                push_field(&mut bibtex, "volume", volume);
            }
            if let Some(issue) = citation.issue() {
                push_field(&mut bibtex, "number", issue);
            }
            if let Some(pages) = citation.pages() {
                push_field(&mut bibtex, "pages", pages);
            }
        }

        if let Some(doi) = citation.doi() {
            push_field(&mut bibtex, "doi", doi);
        }

        bibtex.push_str("}\n\n");
    }

    bibtex
}

fn push_field(bibtex: &mut String, name: &str, value: &str) {
    bibtex.push_str(&format!("  {} = {{{}}},\n", name, value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_entry() {
        let mut c = Citation::new("anderson2002", "Human aggression", "Anderson, C. A., & Bushman, B. J.", 2002);
        c.source = "Annual Review of Psychology".to_string();
        c.source_type = "journal".to_string();
        c.volume = Some("53".to_string());
        c.issue = Some("1".to_string());
        c.pages = Some("27-51".to_string());
        c.doi = Some("10.1146/annurev.psych.53.100901.135231".to_string());

        assert_eq!(
            export_to_bibtex([&c]),
            "@article{anderson2002,\n\
             \x20 author = {Anderson, C. A., & Bushman, B. J.},\n\
             \x20 title = {Human aggression},\n\
             \x20 year = {2002},\n\
             \x20 journal = {Annual Review of Psychology},\n\
             \x20 volume = {53},\n\
             \x20 number = {1},\n\
             \x20 pages = {27-51},\n\
             \x20 doi = {10.1146/annurev.psych.53.100901.135231},\n\
             }\n\n"
        );
    }

    #[test]
    fn test_misc_entry_skips_journal_fields() {
        let mut c = Citation::new("gilligan1996", "Violence", "Gilligan, J.", 1996);
        c.source = "Vintage".to_string();
        c.source_type = "book".to_string();
        c.volume = Some("3".to_string());

        let bibtex = export_to_bibtex([&c]);
        assert!(bibtex.starts_with("@misc{gilligan1996,\n"));
        assert!(!bibtex.contains("journal"));
        assert!(!bibtex.contains("volume"));
        assert!(!bibtex.contains("doi"));
    }

    #[test]
    fn test_braces_pass_through_unescaped() {
        let c = Citation::new("c1", "The {GAM} model", "A", 2000);
        assert!(export_to_bibtex([&c]).contains("  title = {The {GAM} model},\n"));
    }

    #[test]
    fn test_empty_list() {
        let empty: Vec<&Citation> = Vec::new();
        assert_eq!(export_to_bibtex(empty), "");
    }
}
