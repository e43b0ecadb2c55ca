use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// T-cell receptor chain, selecting which association database to load.
///
/// Each chain carries its own database filename and the gene naming
/// convention its reference data is stored in: the alpha-chain table uses
/// IMGT names, the beta-chain table uses Adaptive names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    /// TRA: alpha-chain association table, IMGT-native gene names
    Alpha,
    /// TRB: beta-chain association table, Adaptive-native gene names
    Beta,
}

impl Chain {
    /// Conventional database filename for this chain, relative to the
    /// `databases/` subdirectory of the database directory.
    #[must_use]
    pub fn database_filename(self) -> &'static str {
        match self {
            Self::Alpha => "TRA_database.tsv",
            Self::Beta => "TRB_database.tsv",
        }
    }

    /// The gene naming convention the chain's reference table is stored in.
    #[must_use]
    pub fn native_convention(self) -> GeneConvention {
        match self {
            Self::Alpha => GeneConvention::Imgt,
            Self::Beta => GeneConvention::Adaptive,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => write!(f, "TRA"),
            Self::Beta => write!(f, "TRB"),
        }
    }
}

/// V/J gene segment naming convention.
///
/// Two incompatible textual schemes are in circulation: IMGT (the standards
/// body) and Adaptive (the sequencing platform). Queries declare which one
/// their gene names follow; the engine converts the working table when the
/// declared convention differs from the table's native one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneConvention {
    Imgt,
    Adaptive,
}

impl GeneConvention {
    /// The two accepted spellings, for error messages.
    pub const SUPPORTED: [&'static str; 2] = ["IMGT", "Adaptive"];
}

impl std::fmt::Display for GeneConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imgt => write!(f, "IMGT"),
            Self::Adaptive => write!(f, "Adaptive"),
        }
    }
}

impl FromStr for GeneConvention {
    type Err = UnsupportedConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IMGT" => Ok(Self::Imgt),
            "Adaptive" => Ok(Self::Adaptive),
            other => Err(UnsupportedConvention(other.to_string())),
        }
    }
}

/// Error for a naming-convention token that is neither `IMGT` nor `Adaptive`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported gene naming convention '{0}': supported conventions are {supported:?}", supported = GeneConvention::SUPPORTED)]
pub struct UnsupportedConvention(pub String);

/// Direction of a gene-name conversion between the two conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    ImgtToAdaptive,
    AdaptiveToImgt,
}

impl ConversionDirection {
    /// Direction needed to rewrite names from `from` into `to`, or `None`
    /// when the conventions already agree.
    #[must_use]
    pub fn between(from: GeneConvention, to: GeneConvention) -> Option<Self> {
        match (from, to) {
            (GeneConvention::Imgt, GeneConvention::Adaptive) => Some(Self::ImgtToAdaptive),
            (GeneConvention::Adaptive, GeneConvention::Imgt) => Some(Self::AdaptiveToImgt),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImgtToAdaptive => write!(f, "IMGT->Adaptive"),
            Self::AdaptiveToImgt => write!(f, "Adaptive->IMGT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_native_conventions_differ() {
        assert_eq!(Chain::Alpha.native_convention(), GeneConvention::Imgt);
        assert_eq!(Chain::Beta.native_convention(), GeneConvention::Adaptive);
    }

    #[test]
    fn test_chain_database_filenames() {
        assert_eq!(Chain::Alpha.database_filename(), "TRA_database.tsv");
        assert_eq!(Chain::Beta.database_filename(), "TRB_database.tsv");
    }

    #[test]
    fn test_convention_from_str() {
        assert_eq!("IMGT".parse::<GeneConvention>(), Ok(GeneConvention::Imgt));
        assert_eq!(
            "Adaptive".parse::<GeneConvention>(),
            Ok(GeneConvention::Adaptive)
        );
        // Spellings are exact; lowercase is rejected
        assert!("imgt".parse::<GeneConvention>().is_err());
        let err = "10x".parse::<GeneConvention>().unwrap_err();
        assert!(err.to_string().contains("IMGT"));
        assert!(err.to_string().contains("Adaptive"));
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(
            ConversionDirection::between(GeneConvention::Adaptive, GeneConvention::Imgt),
            Some(ConversionDirection::AdaptiveToImgt)
        );
        assert_eq!(
            ConversionDirection::between(GeneConvention::Imgt, GeneConvention::Imgt),
            None
        );
    }
}
