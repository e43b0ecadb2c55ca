use clap::Args;

use crate::catalog::store::AssociationTable;
use crate::cli::{report, DatabaseArgs, OutputFormat};
use crate::matching::engine::{QueryEngine, DEFAULT_MAX_MISMATCHES};
use crate::parsing::tcr::parse_tcr_query;

#[derive(Args)]
pub struct TcrArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Query TCR, 'v_gene+CDR3+j_gene:convention' with convention IMGT or
    /// Adaptive (e.g. 'TRBV12-3*01+CASSPGASGYTF+TRBJ2-7*01:IMGT')
    #[arg(required = true)]
    pub tcr: String,

    /// Maximum CDR3 edit distance for a match
    #[arg(long, default_value_t = DEFAULT_MAX_MISMATCHES)]
    pub max_mismatches: usize,
}

/// Execute the tcr subcommand.
///
/// # Errors
///
/// Returns an error if the database cannot be loaded, the query string is
/// malformed, or its genes are absent from the database.
pub fn run(args: &TcrArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let query = parse_tcr_query(&args.tcr)?;

    let chain = args.database.chain.into();
    let table = AssociationTable::load(&args.database.database_dir, chain)?;

    if verbose {
        eprintln!(
            "Loaded {chain} database with {} rows; querying {} / {} / {} ({})",
            table.len(),
            query.v_gene,
            query.cdr3,
            query.j_gene,
            query.convention
        );
    }

    let engine = QueryEngine::new(table);
    let matches = engine.single_match(
        &query.v_gene,
        &query.j_gene,
        &query.cdr3,
        query.convention,
        args.max_mismatches,
    )?;

    if matches.is_empty() {
        eprintln!(
            "No restricted clonotypes within {} mismatch(es) of the query CDR3.",
            args.max_mismatches
        );
    } else if verbose {
        eprintln!("{} matching clonotype(s)", matches.len());
    }

    let mut out = report::open_output(args.database.output.as_deref())?;
    report::write_clonotype_matches(&mut out, &matches, format)
}
