//! Clonotype matching engine.
//!
//! This module provides the core query functionality:
//!
//! - [`QueryEngine`]: entry point for the three query modes
//! - [`distance`]: Levenshtein distance over CDR3 sequences
//!
//! ## Query modes
//!
//! 1. **Allele lookup**: exact index lookup of every clonotype restricted
//!    by one HLA allele. No distance computation.
//! 2. **Single-clonotype match**: exact V/J gene filter, then CDR3
//!    Levenshtein distance within a mismatch threshold.
//! 3. **Bulk cross-reference**: the same gene-then-distance filter applied
//!    to the cross-product of the table and a whole query set.
//!
//! When a query declares a gene naming convention other than the table's
//! native one, the engine rewrites a working copy of the table through the
//! nomenclature mapping before filtering; the engine's own table is never
//! modified.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tcrdb::catalog::store::AssociationTable;
//! use tcrdb::core::types::{Chain, GeneConvention};
//! use tcrdb::matching::engine::QueryEngine;
//!
//! let table = AssociationTable::load(Path::new("db"), Chain::Beta).unwrap();
//! let engine = QueryEngine::new(table);
//!
//! let matches = engine
//!     .single_match("TRBV12-3*01", "TRBJ2-7*01", "CASSPGASGYTF", GeneConvention::Imgt, 1)
//!     .unwrap();
//! for m in &matches {
//!     println!("{} (distance {})", m.record.allele_name, m.distance);
//! }
//! ```

pub mod distance;
pub mod engine;

pub use engine::{QueryEngine, QueryError, DEFAULT_MAX_MISMATCHES};
