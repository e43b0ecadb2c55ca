use clap::Args;

use crate::catalog::store::AssociationTable;
use crate::cli::{report, DatabaseArgs, OutputFormat};
use crate::matching::engine::QueryEngine;

#[derive(Args)]
pub struct AlleleArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// HLA allele key, '<locus>-<allele>' (e.g. 'A-02:01', 'DQ-01:02+04:01')
    #[arg(required = true)]
    pub allele: String,
}

/// Execute the allele subcommand.
///
/// # Errors
///
/// Returns an error if the database cannot be loaded or the allele key is
/// malformed or unknown.
pub fn run(args: &AlleleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let chain = args.database.chain.into();
    let table = AssociationTable::load(&args.database.database_dir, chain)?;

    if verbose {
        eprintln!("Loaded {chain} database with {} rows", table.len());
    }

    let engine = QueryEngine::new(table);
    let records = engine.allele_lookup(&args.allele)?;

    if verbose {
        eprintln!(
            "{} clonotype(s) restricted by {}",
            records.len(),
            args.allele
        );
    }

    let mut out = report::open_output(args.database.output.as_deref())?;
    report::write_allele_results(&mut out, &records, format)
}
