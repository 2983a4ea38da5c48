//! List command implementation.

use crate::cli::FilterArgs;
use crate::commands::select_citations;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use citeshelf_store::CitationStore;

/// Execute the list command.
pub fn execute_list(args: &FilterArgs, store: &CitationStore, formatter: &Formatter) -> Result<String> {
    validate_filter(args)?;
    let citations = select_citations(store, args);
    formatter.format_citations(&citations)
}

/// Reject filters that can never match.
pub fn validate_filter(args: &FilterArgs) -> Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            return Err(CliError::InvalidInput(format!(
                "--from ({}) is after --to ({})",
                from, to
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_is_rejected() {
        let args = FilterArgs {
            from: Some(2010),
            to: Some(2000),
            ..Default::default()
        };
        assert!(matches!(validate_filter(&args), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_open_range_is_accepted() {
        let args = FilterArgs {
            from: Some(2010),
            ..Default::default()
        };
        assert!(validate_filter(&args).is_ok());
    }
}
