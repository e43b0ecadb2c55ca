use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::nomenclature::{GeneMapping, NomenclatureError, DEFAULT_ORGANISM};
use crate::catalog::store::AssociationTable;
use crate::core::record::{AssociationRecord, ClonotypeMatch, CrossMatch, QueryClonotype};
use crate::core::types::{ConversionDirection, GeneConvention};
use crate::matching::distance::levenshtein;

/// Default maximum CDR3 edit distance for fuzzy matches.
pub const DEFAULT_MAX_MISMATCHES: usize = 1;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("invalid allele key '{0}': expected '<locus>-<allele>', e.g. 'A-02:01'")]
    MalformedAlleleKey(String),

    #[error("locus '{locus}' is not supported; only these loci are supported: {supported:?}")]
    UnknownLocus {
        locus: String,
        supported: Vec<String>,
    },

    #[error(
        "allele '{allele}' from locus '{locus}' is not supported; \
         only these alleles from this locus are supported: {supported:?}"
    )]
    UnknownAllele {
        locus: String,
        allele: String,
        supported: Vec<String>,
    },

    #[error(
        "V gene '{0}' is not defined in the database; \
         check that it is spelled in the {1} convention"
    )]
    UnknownVGene(String, GeneConvention),

    #[error(
        "J gene '{0}' is not defined in the database; \
         check that it is spelled in the {1} convention"
    )]
    UnknownJGene(String, GeneConvention),

    #[error(transparent)]
    Nomenclature(#[from] NomenclatureError),
}

/// The query engine: one immutable association table plus a lazily built,
/// per-direction cache of gene mappings.
///
/// All query operations are synchronous, idempotent, and side-effect-free
/// with respect to the table; converted working tables are locals dropped
/// when the query returns. The mapping cache is guarded by a read-mostly
/// lock, so sharing one engine across threads for concurrent read-only
/// queries is safe.
pub struct QueryEngine {
    table: AssociationTable,
    organism: String,
    mappings: RwLock<HashMap<ConversionDirection, Arc<GeneMapping>>>,
}

impl QueryEngine {
    #[must_use]
    pub fn new(table: AssociationTable) -> Self {
        Self {
            table,
            organism: DEFAULT_ORGANISM.to_string(),
            mappings: RwLock::new(HashMap::new()),
        }
    }

    /// Restrict gene-name mapping to a different organism tag.
    #[must_use]
    pub fn with_organism(mut self, organism: impl Into<String>) -> Self {
        self.organism = organism.into();
        self
    }

    #[must_use]
    pub fn table(&self) -> &AssociationTable {
        &self.table
    }

    /// Exact allele lookup: return every row restricted by `allele_key`.
    ///
    /// `allele_key` must be `<locus>-<allele>`, e.g. `A-02:01` or, for the
    /// paired DQ/DP loci, `DQ-01:02+04:01`. No fuzzy matching is performed.
    ///
    /// # Errors
    ///
    /// [`QueryError::MalformedAlleleKey`] for a key without the `-`
    /// delimiter, [`QueryError::UnknownLocus`] / [`QueryError::UnknownAllele`]
    /// when the key is absent from the table, each enumerating the valid set.
    pub fn allele_lookup(&self, allele_key: &str) -> Result<Vec<AssociationRecord>, QueryError> {
        let Some((locus, _allele)) = allele_key.split_once('-') else {
            return Err(QueryError::MalformedAlleleKey(allele_key.to_string()));
        };

        let supported_loci = self.table.distinct_loci();
        if !supported_loci.iter().any(|l| l == locus) {
            return Err(QueryError::UnknownLocus {
                locus: locus.to_string(),
                supported: supported_loci,
            });
        }

        let supported_alleles = self.table.alleles_in(locus);
        if !supported_alleles.iter().any(|a| a == allele_key) {
            return Err(QueryError::UnknownAllele {
                locus: locus.to_string(),
                allele: allele_key.to_string(),
                supported: supported_alleles,
            });
        }

        debug!("allele lookup for '{allele_key}' on locus '{locus}'");
        Ok(self
            .table
            .rows_matching(locus, allele_key)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Fuzzy-match one clonotype against the table.
    ///
    /// The table is first rewritten into `convention` if that differs from
    /// its native one. `v_gene` and `j_gene` must then exist in the working
    /// table; rows with exactly those genes are kept when their CDR3 is
    /// within `max_mismatches` edits of `cdr3`. An empty result is not an
    /// error.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownVGene`] / [`QueryError::UnknownJGene`] when a
    /// gene is absent from the working table, or a nomenclature error if
    /// the mapping file cannot be read.
    pub fn single_match(
        &self,
        v_gene: &str,
        j_gene: &str,
        cdr3: &str,
        convention: GeneConvention,
        max_mismatches: usize,
    ) -> Result<Vec<ClonotypeMatch>, QueryError> {
        let working = self.working_table(convention)?;

        if !working.has_v_gene(v_gene) {
            return Err(QueryError::UnknownVGene(v_gene.to_string(), convention));
        }
        if !working.has_j_gene(j_gene) {
            return Err(QueryError::UnknownJGene(j_gene.to_string(), convention));
        }

        let matches = working
            .records()
            .iter()
            .filter(|r| r.v_gene == v_gene && r.j_gene == j_gene)
            .filter_map(|r| {
                let distance = levenshtein(&r.cdr3, cdr3);
                (distance <= max_mismatches).then(|| ClonotypeMatch {
                    record: r.clone(),
                    distance,
                })
            })
            .collect();

        Ok(matches)
    }

    /// Cross-reference a whole set of query clonotypes against the table.
    ///
    /// Semantically this is the full cross-product of table rows and query
    /// rows, filtered to pairs whose V and J genes match exactly and whose
    /// CDR3s are within `max_mismatches` edits. The implementation groups
    /// query rows by `(v_gene, j_gene)` so only matching pairs are ever
    /// materialized; the result set is identical to the naive cross-product.
    ///
    /// Zero pairs surviving the gene filter is reported as an advisory (the
    /// usual cause is a naming-convention mismatch), never as an error.
    ///
    /// # Errors
    ///
    /// A nomenclature error if a required gene-name conversion cannot be
    /// built.
    pub fn bulk_match(
        &self,
        queries: &[QueryClonotype],
        convention: GeneConvention,
        max_mismatches: usize,
    ) -> Result<Vec<CrossMatch>, QueryError> {
        let working = self.working_table(convention)?;

        info!(
            "cross-referencing {} query clonotypes against {} database rows",
            queries.len(),
            working.len()
        );

        // Group queries by gene pair, preserving their input order so the
        // output order matches the cross-product definition (table rows
        // outer, query rows inner).
        let mut by_genes: HashMap<(&str, &str), Vec<&QueryClonotype>> = HashMap::new();
        for query in queries {
            by_genes
                .entry((query.v_gene.as_str(), query.j_gene.as_str()))
                .or_default()
                .push(query);
        }

        let mut candidates = 0usize;
        let mut matches = Vec::new();
        for record in working.records() {
            let Some(group) = by_genes.get(&(record.v_gene.as_str(), record.j_gene.as_str()))
            else {
                continue;
            };
            for query in group {
                candidates += 1;
                let distance = levenshtein(&record.cdr3, &query.cdr3);
                if distance <= max_mismatches {
                    matches.push(CrossMatch::new(record, query, distance));
                }
            }
        }

        if candidates == 0 {
            warn!(
                "no matching V and/or J gene segments between the query clonotypes and the \
                 database; make sure the query uses the {convention} naming convention it declares"
            );
        }

        Ok(matches)
    }

    /// The table rewritten into `convention`, or the table itself when that
    /// is already its native convention.
    fn working_table(
        &self,
        convention: GeneConvention,
    ) -> Result<Cow<'_, AssociationTable>, NomenclatureError> {
        let native = self.table.chain().native_convention();
        match ConversionDirection::between(native, convention) {
            None => Ok(Cow::Borrowed(&self.table)),
            Some(direction) => {
                let mapping = self.gene_mapping(direction)?;
                debug!(
                    "translating {} table {direction} ({} gene names mapped)",
                    self.table.chain(),
                    mapping.len()
                );
                Ok(Cow::Owned(self.table.translated(&mapping)))
            }
        }
    }

    /// Cached gene mapping for one direction, built on first use.
    fn gene_mapping(
        &self,
        direction: ConversionDirection,
    ) -> Result<Arc<GeneMapping>, NomenclatureError> {
        // A poisoned lock cannot leave the map inconsistent (inserts are
        // single statements), so recover the guard rather than panic.
        if let Some(mapping) = self
            .mappings
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&direction)
        {
            return Ok(Arc::clone(mapping));
        }

        let mapping = Arc::new(GeneMapping::build(
            self.table.database_dir(),
            direction,
            &self.organism,
        )?);
        self.mappings
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(direction, Arc::clone(&mapping));
        Ok(mapping)
    }
}
