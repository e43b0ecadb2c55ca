//! # tcrdb
//!
//! A library for querying TCR-HLA association databases.
//!
//! Reference databases link T-cell receptor clonotypes (a V gene, a J gene,
//! and a CDR3 amino-acid sequence) to the HLA alleles that restrict them.
//! `tcrdb` answers the two questions researchers ask of such a table:
//!
//! - *Which clonotypes are restricted by HLA allele X?* — an exact,
//!   indexed lookup.
//! - *Which database entries approximately match this clonotype (or this
//!   whole table of clonotypes)?* — an exact V/J gene filter followed by a
//!   CDR3 Levenshtein-distance threshold.
//!
//! The alpha- and beta-chain databases are stored in different gene naming
//! conventions (IMGT and Adaptive respectively); queries may use either
//! convention, and the engine converts a working copy of the table through
//! an explicit mapping file when needed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tcrdb::{AssociationTable, Chain, GeneConvention, QueryEngine};
//!
//! // Load the beta-chain association database
//! let table = AssociationTable::load(Path::new("db"), Chain::Beta).unwrap();
//! let engine = QueryEngine::new(table);
//!
//! // Exact allele lookup
//! let restricted = engine.allele_lookup("A-02:01").unwrap();
//! println!("{} clonotypes restricted by A-02:01", restricted.len());
//!
//! // Fuzzy single-clonotype match, IMGT gene names, 1 mismatch allowed
//! let matches = engine
//!     .single_match("TRBV12-3*01", "TRBJ2-7*01", "CASSPGASGYTF", GeneConvention::Imgt, 1)
//!     .unwrap();
//! for m in &matches {
//!     println!("{} (distance {})", m.record.allele_name, m.distance);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: association-table storage and gene nomenclature mapping
//! - [`core`]: core data types for records, chains, and conventions
//! - [`matching`]: the query engine and CDR3 edit distance
//! - [`imputation`]: HLA-imputation feature extraction and classifier seam
//! - [`parsing`]: query-string and query-table parsers
//! - [`cli`]: command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod imputation;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::nomenclature::GeneMapping;
pub use catalog::store::AssociationTable;
pub use core::record::{AssociationRecord, ClonotypeMatch, CrossMatch, QueryClonotype};
pub use core::types::{Chain, ConversionDirection, GeneConvention};
pub use matching::engine::{QueryEngine, QueryError};
