use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::nomenclature::GeneMapping;
use crate::core::record::AssociationRecord;
use crate::core::types::Chain;

/// Columns every association database must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["loci", "allele_name", "v_gene", "j_gene", "CDR3"];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("database file not found at: {0}")]
    MissingDatabase(PathBuf),

    #[error("loaded database is missing one or more required columns: {REQUIRED_COLUMNS:?}")]
    MissingColumns,

    #[error("failed to read database: {0}")]
    Read(#[from] csv::Error),
}

/// An immutable TCR-HLA association table for one receptor chain.
///
/// Rows keep the insertion order of the source file. The table remembers
/// which directory it was loaded from so gene mappings can be rebuilt on
/// demand, and which chain it represents, which fixes its native gene
/// naming convention.
#[derive(Debug, Clone)]
pub struct AssociationTable {
    records: Vec<AssociationRecord>,
    chain: Chain,
    database_dir: PathBuf,
}

impl AssociationTable {
    /// Load the association table for `chain` from
    /// `<database_dir>/databases/<chain filename>`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::MissingDatabase`] if the file does not exist,
    /// [`CatalogError::MissingColumns`] if a required column is absent.
    pub fn load(database_dir: &Path, chain: Chain) -> Result<Self, CatalogError> {
        let path = database_dir.join("databases").join(chain.database_filename());
        if !path.exists() {
            return Err(CatalogError::MissingDatabase(path));
        }

        let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(&path)?;

        {
            let headers = reader.headers()?;
            let missing = REQUIRED_COLUMNS
                .iter()
                .any(|required| !headers.iter().any(|h| h == *required));
            if missing {
                return Err(CatalogError::MissingColumns);
            }
        }

        let records = reader
            .deserialize::<AssociationRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            records,
            chain,
            database_dir: database_dir.to_path_buf(),
        })
    }

    /// Build a table from in-memory records (primarily for tests).
    #[must_use]
    pub fn from_records(
        records: Vec<AssociationRecord>,
        chain: Chain,
        database_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            records,
            chain,
            database_dir: database_dir.into(),
        }
    }

    /// All rows, in source order.
    #[must_use]
    pub fn records(&self) -> &[AssociationRecord] {
        &self.records
    }

    #[must_use]
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// Directory the table was loaded from, where the gene mapping file
    /// also lives.
    #[must_use]
    pub fn database_dir(&self) -> &Path {
        &self.database_dir
    }

    /// Sorted, deduplicated loci present in the table.
    #[must_use]
    pub fn distinct_loci(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.loci.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Sorted, deduplicated allele keys for one locus.
    #[must_use]
    pub fn alleles_in(&self, locus: &str) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter(|r| r.loci == locus)
            .map(|r| r.allele_name.as_str())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Rows with exactly this locus and allele key, in source order.
    #[must_use]
    pub fn rows_matching(&self, locus: &str, allele_name: &str) -> Vec<&AssociationRecord> {
        self.records
            .iter()
            .filter(|r| r.loci == locus && r.allele_name == allele_name)
            .collect()
    }

    /// Whether any row uses this V gene name.
    #[must_use]
    pub fn has_v_gene(&self, v_gene: &str) -> bool {
        self.records.iter().any(|r| r.v_gene == v_gene)
    }

    /// Whether any row uses this J gene name.
    #[must_use]
    pub fn has_j_gene(&self, j_gene: &str) -> bool {
        self.records.iter().any(|r| r.j_gene == j_gene)
    }

    /// A new table with `v_gene`/`j_gene` rewritten through `mapping`.
    ///
    /// Names the mapping does not cover pass through unchanged. The
    /// receiver is untouched; the returned table is a working copy meant to
    /// live for the duration of one query.
    #[must_use]
    pub fn translated(&self, mapping: &GeneMapping) -> Self {
        let records = self
            .records
            .iter()
            .map(|r| AssociationRecord {
                loci: r.loci.clone(),
                allele_name: r.allele_name.clone(),
                v_gene: mapping.convert(&r.v_gene).to_string(),
                j_gene: mapping.convert(&r.j_gene).to_string(),
                cdr3: r.cdr3.clone(),
            })
            .collect();

        Self {
            records,
            chain: self.chain,
            database_dir: self.database_dir.clone(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
