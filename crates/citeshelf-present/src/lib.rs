//! Citeshelf Presentation Adapter
//!
//! Stateless functions that turn citations into human-readable or
//! interchange formats. Nothing here holds a dataset: every function takes
//! the citations it works on as plain input.
//!
//! # Overview
//!
//! ```text
//! CitationStore → query results → citeshelf-present → text / BibTeX / HTML / chart JSON
//! ```
//!
//! - **APA**: [`format_citation`] (plain text, with DOI) and
//!   [`format_citation_html`] (table cell, without DOI)
//! - **Exports**: [`export_to_text`] and [`export_to_bibtex`]
//! - **Rendering**: [`render_citation_rows`] styled by a [`DomainPalette`]
//! - **Charts**: [`risk_factor_series`] and the configured [`RadarProfile`]
//!
//! # Example Usage
//!
//! ```
//! use citeshelf_domain::Citation;
//! use citeshelf_present::format_citation;
//!
//! let mut citation = Citation::new("c1", "Human aggression", "Anderson, C. A.", 2002);
//! citation.source = "Annual Review of Psychology".to_string();
//!
//! assert_eq!(
//!     format_citation(&citation),
//!     "Anderson, C. A. (2002). Human aggression. Annual Review of Psychology"
//! );
//! ```

#![warn(missing_docs)]

mod apa;
mod bibtex;
mod chart;
mod error;
mod export;
mod html;
mod palette;

pub use apa::{format_citation, format_citation_html, get_source_label};
pub use bibtex::export_to_bibtex;
pub use chart::{risk_factor_series, RadarAxis, RadarProfile, RiskFactorSeries};
pub use error::PresentError;
pub use export::{export_to_text, EXPORT_HEADER};
pub use html::{escape_html, render_citation_rows};
pub use palette::DomainPalette;
