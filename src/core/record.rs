use serde::{Deserialize, Serialize};

/// One row of a TCR-HLA association database: a clonotype restricted by an
/// HLA allele.
///
/// `locus` is always the locus prefix of `allele_name` (e.g. locus `A` for
/// allele `A-02:01`; composite loci such as `DQ` pair two allele numbers
/// with `+`, e.g. `DQ-01:02+04:01`). Gene names are stored in the table's
/// native convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRecord {
    /// HLA locus category (A, B, C, DRB1, DQ, DP, ...)
    pub loci: String,

    /// Full allele key, `<locus>-<allele>`
    pub allele_name: String,

    /// V gene segment name, in the table's native convention
    pub v_gene: String,

    /// J gene segment name, in the table's native convention
    pub j_gene: String,

    /// CDR3 amino-acid sequence
    #[serde(rename = "CDR3")]
    pub cdr3: String,
}

/// One clonotype from a user-supplied query table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClonotype {
    pub v_gene: String,

    #[serde(rename = "CDR3")]
    pub cdr3: String,

    pub j_gene: String,
}

/// A database record matched by a single-clonotype query, with the
/// Levenshtein distance between the database CDR3 and the query CDR3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClonotypeMatch {
    #[serde(flatten)]
    pub record: AssociationRecord,

    /// Edit distance to the query CDR3, never above the requested threshold
    pub distance: usize,
}

/// A (database record, query clonotype) pair retained by a bulk
/// cross-reference, with the CDR3 edit distance between the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossMatch {
    pub loci: String,
    pub allele_name: String,
    pub db_v_gene: String,
    pub db_j_gene: String,
    pub db_cdr3: String,

    /// Identity of the originating query row
    pub query_v_gene: String,
    pub query_j_gene: String,
    pub query_cdr3: String,

    pub distance: usize,
}

impl CrossMatch {
    #[must_use]
    pub fn new(record: &AssociationRecord, query: &QueryClonotype, distance: usize) -> Self {
        Self {
            loci: record.loci.clone(),
            allele_name: record.allele_name.clone(),
            db_v_gene: record.v_gene.clone(),
            db_j_gene: record.j_gene.clone(),
            db_cdr3: record.cdr3.clone(),
            query_v_gene: query.v_gene.clone(),
            query_j_gene: query.j_gene.clone(),
            query_cdr3: query.cdr3.clone(),
            distance,
        }
    }
}
