use anyhow::Result;
use clap::Parser;
use tracing::error;

use domain_tally::utils::{print_domain_counts, setup_logging, validate_args};
use domain_tally::{Args, CustomerImporter, EmailPattern, TieBreak, DEFAULT_EMAIL_PATTERN};

fn main() -> Result<()> {
    let args = Args::parse();
    let log = setup_logging(args.verbose);

    validate_args(&args)?;

    let pattern = EmailPattern::new(
        args.email_pattern
            .as_deref()
            .unwrap_or(DEFAULT_EMAIL_PATTERN),
    )?;
    let tie_break = if args.sort_ties {
        TieBreak::DomainAscending
    } else {
        TieBreak::Unspecified
    };

    let importer = CustomerImporter::new(log, pattern)
        .fail_fast(args.fail_fast)
        .tie_break(tie_break);

    match importer.load(&args.path) {
        Ok(counts) => {
            let limit = (!args.all).then_some(args.top);
            print_domain_counts(&args.path, &counts, limit);
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
