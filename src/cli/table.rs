use clap::Args;
use std::path::PathBuf;

use crate::catalog::store::AssociationTable;
use crate::cli::{report, DatabaseArgs, OutputFormat};
use crate::core::types::GeneConvention;
use crate::matching::engine::{QueryEngine, DEFAULT_MAX_MISMATCHES};
use crate::parsing::table::read_query_table;

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// TSV table of query clonotypes with columns v_gene, CDR3, j_gene
    #[arg(required = true)]
    pub queries: PathBuf,

    /// Gene naming convention used throughout the query table
    #[arg(long)]
    pub convention: GeneConvention,

    /// Maximum CDR3 edit distance for a match
    #[arg(long, default_value_t = DEFAULT_MAX_MISMATCHES)]
    pub max_mismatches: usize,
}

/// Execute the table subcommand.
///
/// # Errors
///
/// Returns an error if the database or query table cannot be loaded, or if
/// the query table lacks a required column.
pub fn run(args: &TableArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let queries = read_query_table(&args.queries)?;

    let chain = args.database.chain.into();
    let table = AssociationTable::load(&args.database.database_dir, chain)?;

    if verbose {
        eprintln!(
            "Cross-referencing {} query clonotypes ({} names) against the {chain} database \
             ({} rows)",
            queries.len(),
            args.convention,
            table.len()
        );
    }

    let engine = QueryEngine::new(table);
    let matches = engine.bulk_match(&queries, args.convention, args.max_mismatches)?;

    if matches.is_empty() {
        eprintln!(
            "No match found in the database. If this is unexpected, check that the query \
             table really uses the {} naming convention.",
            args.convention
        );
    } else if verbose {
        eprintln!("{} matching pair(s)", matches.len());
    }

    let mut out = report::open_output(args.database.output.as_deref())?;
    report::write_cross_matches(&mut out, &matches, format)
}
