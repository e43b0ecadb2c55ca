//! Core data types for TCR-HLA association queries.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`AssociationRecord`]: one (locus, allele, V, J, CDR3) database row
//! - [`QueryClonotype`]: one clonotype from a user-supplied query table
//! - [`ClonotypeMatch`], [`CrossMatch`]: fuzzy-match results with distances
//! - [`Chain`], [`GeneConvention`], [`ConversionDirection`]: chain and
//!   nomenclature tags
//!
//! ## Gene naming
//!
//! The two supported naming conventions label the same V/J segments
//! differently:
//!
//! | Convention | Example V gene |
//! |------------|----------------|
//! | IMGT       | TRBV12-3       |
//! | Adaptive   | TCRBV12-03     |
//!
//! Matching uses **exact names** within one convention; equivalence across
//! conventions is defined only through the explicit mapping table (see
//! [`crate::catalog::nomenclature`]).

pub mod record;
pub mod types;

pub use record::{AssociationRecord, ClonotypeMatch, CrossMatch, QueryClonotype};
pub use types::{Chain, ConversionDirection, GeneConvention, UnsupportedConvention};
