//! Association-table storage and gene nomenclature mapping.
//!
//! A database directory is laid out as:
//!
//! ```text
//! <database_dir>/
//!   adaptive_imgt_mapping.csv      gene-name mapping (IMGT <-> Adaptive)
//!   databases/
//!     TRA_database.tsv             alpha-chain associations (IMGT names)
//!     TRB_database.tsv             beta-chain associations (Adaptive names)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tcrdb::catalog::store::AssociationTable;
//! use tcrdb::core::types::Chain;
//!
//! let table = AssociationTable::load(Path::new("db"), Chain::Beta).unwrap();
//! for locus in table.distinct_loci() {
//!     println!("{locus}: {} alleles", table.alleles_in(&locus).len());
//! }
//! ```

pub mod nomenclature;
pub mod store;
