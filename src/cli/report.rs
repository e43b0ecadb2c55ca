//! Result writers for the query subcommands.

use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::core::record::{AssociationRecord, ClonotypeMatch, CrossMatch};

/// Open the result destination: a file when `--output` was given, stdout
/// otherwise.
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(std::fs::File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Write allele-lookup results: the raw matched association rows.
///
/// # Errors
///
/// Returns an error if writing to the destination fails.
pub fn write_allele_results(
    out: &mut dyn Write,
    records: &[AssociationRecord],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, r) in records.iter().enumerate() {
                writeln!(
                    out,
                    "#{} {} [{}]  V: {}  J: {}  CDR3: {}",
                    i + 1,
                    r.allele_name,
                    r.loci,
                    r.v_gene,
                    r.j_gene,
                    r.cdr3
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "loci\tallele_name\tv_gene\tj_gene\tCDR3")?;
            for r in records {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    r.loci, r.allele_name, r.v_gene, r.j_gene, r.cdr3
                )?;
            }
        }
    }
    Ok(())
}

/// Write single-TCR fuzzy-match results, one row per matched database
/// record with its CDR3 edit distance.
///
/// # Errors
///
/// Returns an error if writing to the destination fails.
pub fn write_clonotype_matches(
    out: &mut dyn Write,
    matches: &[ClonotypeMatch],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, m) in matches.iter().enumerate() {
                let r = &m.record;
                writeln!(
                    out,
                    "#{} {} [{}]  V: {}  J: {}  CDR3: {}  distance: {}",
                    i + 1,
                    r.allele_name,
                    r.loci,
                    r.v_gene,
                    r.j_gene,
                    r.cdr3,
                    m.distance
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches)?;
            writeln!(out)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "loci\tallele_name\tv_gene\tj_gene\tCDR3\tdistance")?;
            for m in matches {
                let r = &m.record;
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    r.loci, r.allele_name, r.v_gene, r.j_gene, r.cdr3, m.distance
                )?;
            }
        }
    }
    Ok(())
}

/// Write bulk cross-reference results: database fields, the originating
/// query row's fields, and the distance.
///
/// # Errors
///
/// Returns an error if writing to the destination fails.
pub fn write_cross_matches(
    out: &mut dyn Write,
    matches: &[CrossMatch],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, m) in matches.iter().enumerate() {
                writeln!(
                    out,
                    "#{} {} [{}]  DB: {} / {} / {}  query: {} / {} / {}  distance: {}",
                    i + 1,
                    m.allele_name,
                    m.loci,
                    m.db_v_gene,
                    m.db_j_gene,
                    m.db_cdr3,
                    m.query_v_gene,
                    m.query_j_gene,
                    m.query_cdr3,
                    m.distance
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches)?;
            writeln!(out)?;
        }
        OutputFormat::Tsv => {
            writeln!(
                out,
                "loci\tallele_name\tdb_v_gene\tdb_j_gene\tdb_CDR3\t\
                 query_v_gene\tquery_j_gene\tquery_CDR3\tdistance"
            )?;
            for m in matches {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    m.loci,
                    m.allele_name,
                    m.db_v_gene,
                    m.db_j_gene,
                    m.db_cdr3,
                    m.query_v_gene,
                    m.query_j_gene,
                    m.query_cdr3,
                    m.distance
                )?;
            }
        }
    }
    Ok(())
}
