//! Command implementations.
//!
//! Each command renders its result to a `String`; [`execute`] prints it.

pub mod domains;
pub mod export;
pub mod list;
pub mod risk_factors;
pub mod search;
pub mod show;
pub mod stats;
pub mod years;

pub use self::domains::execute_domains;
pub use self::export::execute_export;
pub use self::list::execute_list;
pub use self::risk_factors::execute_risk_factors;
pub use self::search::execute_search;
pub use self::show::execute_show;
pub use self::stats::execute_stats;
pub use self::years::execute_years;

use crate::cli::{Command, FilterArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use citeshelf_domain::{Citation, CitationCatalog, ALL_DOMAINS};
use citeshelf_store::CitationStore;

/// Run a command against a loaded store and print its output.
pub fn execute(command: Command, store: &CitationStore, config: &Config, formatter: &Formatter) -> Result<()> {
    let output = match command {
        Command::List(args) => execute_list(&args, store, formatter)?,
        Command::Search(args) => execute_search(&args, store, formatter)?,
        Command::Show(args) => execute_show(&args, store, formatter)?,
        Command::Stats => execute_stats(store, formatter)?,
        Command::Domains => execute_domains(store, formatter)?,
        Command::Years => execute_years(store, formatter)?,
        Command::RiskFactors => execute_risk_factors(store, formatter)?,
        Command::Export(args) => execute_export(&args, store, config, formatter)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Apply every requested filter, keeping document order.
///
/// Each filter is answered by the matching catalog query and the results
/// are intersected.
pub fn select_citations<'a, C>(catalog: &'a C, filter: &FilterArgs) -> Vec<&'a Citation>
where
    C: CitationCatalog,
{
    let mut selected = catalog.get_citations_by_domain(filter.domain.as_deref().unwrap_or(ALL_DOMAINS));

    if filter.from.is_some() || filter.to.is_some() {
        let start = filter.from.unwrap_or(i32::MIN);
        let end = filter.to.unwrap_or(i32::MAX);
        retain_in(&mut selected, &catalog.get_citations_by_year_range(start, end));
    }

    if let Some(keyword) = &filter.keyword {
        retain_in(&mut selected, &catalog.get_citations_by_keyword(keyword));
    }

    if let Some(study_type) = &filter.study_type {
        retain_in(&mut selected, &catalog.get_citations_by_study_type(study_type));
    }

    if filter.with_effect_sizes {
        retain_in(&mut selected, &catalog.get_citations_with_effect_sizes());
    }

    selected
}

fn retain_in(selected: &mut Vec<&Citation>, allowed: &[&Citation]) {
    selected.retain(|c| allowed.iter().any(|a| std::ptr::eq(*a, *c)));
}
