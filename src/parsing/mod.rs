//! Parsers for query inputs.
//!
//! - [`tcr`]: the single-TCR query string, `v_gene+CDR3+j_gene:convention`
//! - [`table`]: TSV readers for bulk-query tables and sample repertoires
//!
//! ## Example
//!
//! ```rust
//! use tcrdb::parsing::tcr::parse_tcr_query;
//!
//! let q = parse_tcr_query("TRBV12-3*01+CASSPGASGYTF+TRBJ2-7*01:IMGT").unwrap();
//! assert_eq!(q.cdr3, "CASSPGASGYTF");
//! ```

pub mod table;
pub mod tcr;
