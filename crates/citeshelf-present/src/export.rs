//! Plain-text export

use crate::apa::format_citation;
use chrono::NaiveDate;
use citeshelf_domain::Citation;

/// First line of every text export
pub const EXPORT_HEADER: &str = "V-PROJECT EVIDENCE LIBRARY EXPORT";

const RULE_WIDTH: usize = 80;

/// Render citations as a numbered plain-text listing
///
/// The caller supplies the generation date so identical input always
/// produces identical output.
pub fn export_to_text<'a, I>(citations: I, generated_on: NaiveDate) -> String
where
    I: IntoIterator<Item = &'a Citation>,
{
    let mut output = format!("{}\n", EXPORT_HEADER);
    output.push_str(&format!("Generated: {}\n", generated_on.format("%Y-%m-%d")));
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push_str("\n\n");

    for (index, citation) in citations.into_iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, format_citation(citation)));
        output.push_str(&format!("   Domain: {}\n", citation.domain));
        output.push_str(&format!("   Synthesis: {}\n", citation.synthesis));
        if let Some(url) = citation.url() {
            output.push_str(&format!("   Link: {}\n", url));
        }
        if let Some(effect_size) = citation.effect_size {
            output.push_str(&format!(
                "   Effect Size: {} {}\n",
                effect_size,
                citation.effect_size_type.as_deref().unwrap_or_default()
            ));
        }
        output.push('\n');
    }

    output
}
