use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::record::QueryClonotype;
use crate::imputation::RepertoireClonotype;

/// Columns a bulk-query table must carry.
pub const QUERY_COLUMNS: [&str; 3] = ["v_gene", "CDR3", "j_gene"];

/// Columns a repertoire table must carry (a query table plus clonal counts).
pub const REPERTOIRE_COLUMNS: [&str; 4] = ["v_gene", "CDR3", "j_gene", "count"];

#[derive(Error, Debug)]
pub enum TableParseError {
    #[error("query table not found at: {0}")]
    MissingFile(PathBuf),

    #[error("query table is missing one or more required columns: {0:?}")]
    MissingColumns(&'static [&'static str]),

    #[error("failed to read query table: {0}")]
    Read(#[from] csv::Error),
}

fn open_reader(
    path: &Path,
    required: &'static [&'static str],
) -> Result<csv::Reader<std::fs::File>, TableParseError> {
    if !path.exists() {
        return Err(TableParseError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;
    {
        let headers = reader.headers()?;
        let missing = required
            .iter()
            .any(|col| !headers.iter().any(|h| h == *col));
        if missing {
            return Err(TableParseError::MissingColumns(required));
        }
    }
    Ok(reader)
}

/// Read a bulk-query clonotype table (TSV with `v_gene`, `CDR3`, `j_gene`).
///
/// # Errors
///
/// [`TableParseError::MissingFile`] if the path does not exist,
/// [`TableParseError::MissingColumns`] if a required column is absent.
pub fn read_query_table(path: &Path) -> Result<Vec<QueryClonotype>, TableParseError> {
    let mut reader = open_reader(path, &QUERY_COLUMNS)?;
    let rows = reader
        .deserialize::<QueryClonotype>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Read a sample repertoire (a query table with a `count` expansion column).
///
/// # Errors
///
/// Same failure modes as [`read_query_table`].
pub fn read_repertoire(path: &Path) -> Result<Vec<RepertoireClonotype>, TableParseError> {
    let mut reader = open_reader(path, &REPERTOIRE_COLUMNS)?;
    let rows = reader
        .deserialize::<RepertoireClonotype>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
