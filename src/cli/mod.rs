//! Command-line interface for tcrdb.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **allele**: list every clonotype restricted by one HLA allele
//! - **tcr**: fuzzy-match a single clonotype against the database
//! - **table**: cross-reference a whole table of clonotypes
//!
//! ## Usage
//!
//! ```text
//! # Which clonotypes are restricted by HLA-A*02:01?
//! tcrdb allele --database-dir db --chain trb A-02:01
//!
//! # Fuzzy-match one TCR, IMGT gene names, up to 1 CDR3 mismatch
//! tcrdb tcr --database-dir db --chain trb 'TRBV12-3*01+CASSPGASGYTF+TRBJ2-7*01:IMGT'
//!
//! # Cross-reference a TSV of clonotypes, writing results to a file
//! tcrdb table --database-dir db --chain trb --convention Adaptive \
//!     queries.tsv --output matches.tsv --format tsv
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Chain;

pub mod allele;
pub mod report;
pub mod table;
pub mod tcr;

#[derive(Parser)]
#[command(name = "tcrdb")]
#[command(version)]
#[command(about = "Query TCR-HLA association databases")]
#[command(
    long_about = "tcrdb answers queries against reference databases that link T-cell receptor \
clonotypes to restricting HLA alleles.\n\nIt supports exact lookup of the clonotypes \
restricted by an HLA allele, fuzzy matching of a single clonotype, and bulk \
cross-referencing of a clonotype table, with transparent conversion between the IMGT \
and Adaptive gene naming conventions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the clonotypes restricted by an HLA allele
    Allele(allele::AlleleArgs),

    /// Fuzzy-match a single TCR against the database
    Tcr(tcr::TcrArgs),

    /// Cross-reference a table of TCRs against the database
    Table(table::TableArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Options shared by every query subcommand.
#[derive(clap::Args)]
pub struct DatabaseArgs {
    /// Directory holding the association databases and gene mapping file
    #[arg(long)]
    pub database_dir: PathBuf,

    /// Which chain's database to query
    #[arg(long, value_enum)]
    pub chain: ChainArg,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ChainArg {
    /// Alpha-chain database (TRA, IMGT-native gene names)
    Tra,
    /// Beta-chain database (TRB, Adaptive-native gene names)
    Trb,
}

impl From<ChainArg> for Chain {
    fn from(arg: ChainArg) -> Self {
        match arg {
            ChainArg::Tra => Self::Alpha,
            ChainArg::Trb => Self::Beta,
        }
    }
}
