use thiserror::Error;

use crate::core::types::{GeneConvention, UnsupportedConvention};

/// A single-TCR query parsed from its command-line string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcrQuery {
    pub v_gene: String,
    pub cdr3: String,
    pub j_gene: String,
    pub convention: GeneConvention,
}

#[derive(Error, Debug)]
pub enum TcrParseError {
    #[error(
        "invalid TCR query '{0}': expected 'v_gene+CDR3+j_gene:convention', \
         e.g. 'TRBV12-3*01+CASSPGASGYTF+TRBJ2-7*01:IMGT'"
    )]
    Malformed(String),

    #[error(transparent)]
    Convention(#[from] UnsupportedConvention),
}

/// Parse a single-TCR query string of the form
/// `v_gene+CDR3+j_gene:convention`.
///
/// The convention token follows the last `:`, so allele suffixes inside
/// gene names (`TRBV12-3*01`) are untouched. Exactly three `+`-separated
/// fields are required, all non-empty.
///
/// # Errors
///
/// [`TcrParseError::Malformed`] for a missing separator, wrong field count,
/// or empty field; [`TcrParseError::Convention`] for a convention token
/// that is neither `IMGT` nor `Adaptive`.
pub fn parse_tcr_query(input: &str) -> Result<TcrQuery, TcrParseError> {
    let Some((clonotype, convention)) = input.rsplit_once(':') else {
        return Err(TcrParseError::Malformed(input.to_string()));
    };

    let fields: Vec<&str> = clonotype.split('+').collect();
    let [v_gene, cdr3, j_gene] = fields.as_slice() else {
        return Err(TcrParseError::Malformed(input.to_string()));
    };
    if v_gene.is_empty() || cdr3.is_empty() || j_gene.is_empty() {
        return Err(TcrParseError::Malformed(input.to_string()));
    }

    Ok(TcrQuery {
        v_gene: (*v_gene).to_string(),
        cdr3: (*cdr3).to_string(),
        j_gene: (*j_gene).to_string(),
        convention: convention.parse()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_imgt_query() {
        let q = parse_tcr_query("TRBV12-3*01+CASSPGASGYTF+TRBJ2-7*01:IMGT").unwrap();
        assert_eq!(q.v_gene, "TRBV12-3*01");
        assert_eq!(q.cdr3, "CASSPGASGYTF");
        assert_eq!(q.j_gene, "TRBJ2-7*01");
        assert_eq!(q.convention, GeneConvention::Imgt);
    }

    #[test]
    fn test_parse_adaptive_query() {
        let q = parse_tcr_query("TCRBV12-03+CASSF+TCRBJ02-07:Adaptive").unwrap();
        assert_eq!(q.convention, GeneConvention::Adaptive);
    }

    #[test]
    fn test_missing_convention_separator() {
        assert!(matches!(
            parse_tcr_query("TRBV12-3+CASSF+TRBJ2-7"),
            Err(TcrParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse_tcr_query("TRBV12-3+CASSF:IMGT"),
            Err(TcrParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_tcr_query("A+B+C+D:IMGT"),
            Err(TcrParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_field() {
        assert!(matches!(
            parse_tcr_query("+CASSF+TRBJ2-7:IMGT"),
            Err(TcrParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_convention() {
        assert!(matches!(
            parse_tcr_query("TRBV12-3+CASSF+TRBJ2-7:10x"),
            Err(TcrParseError::Convention(_))
        ));
    }
}
