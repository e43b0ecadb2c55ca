use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One clonotype of a sample repertoire, with its clonal expansion count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepertoireClonotype {
    pub v_gene: String,

    #[serde(rename = "CDR3")]
    pub cdr3: String,

    pub j_gene: String,

    /// Number of cells observed carrying this clonotype
    pub count: u64,
}

impl RepertoireClonotype {
    /// Identity key used to look a clonotype up in per-allele weight lists:
    /// `CDR3+v_gene+j_gene`.
    #[must_use]
    pub fn bio_id(&self) -> String {
        format!("{}+{}+{}", self.cdr3, self.v_gene, self.j_gene)
    }
}

/// Per-allele weights for its associated clonotypes, keyed by the
/// clonotype identity key (see [`RepertoireClonotype::bio_id`]). Weights
/// may be signed in serialized form; only their magnitude is used.
pub type ClonotypeWeights = HashMap<String, f64>;

/// The two-element feature vector consumed by an allele's classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// `log10(1 + sum of |weight| * count over weighted clonotypes present
    /// in the repertoire)`
    pub weighted_expansion: f64,

    /// `log10(1 + number of repertoire clonotypes)`
    pub sequencing_depth: f64,
}

/// Compute the feature vector for one allele model from a sample
/// repertoire and the allele's clonotype weight list.
#[must_use]
pub fn features_for_allele(
    repertoire: &[RepertoireClonotype],
    weights: &ClonotypeWeights,
) -> FeatureVector {
    #[allow(clippy::cast_precision_loss)]
    let depth = repertoire.len() as f64;

    let mut expansion = 0.0;
    for clonotype in repertoire {
        if let Some(weight) = weights.get(&clonotype.bio_id()) {
            #[allow(clippy::cast_precision_loss)]
            let count = clonotype.count as f64;
            expansion += weight.abs() * count;
        }
    }

    FeatureVector {
        weighted_expansion: (1.0 + expansion).log10(),
        sequencing_depth: (1.0 + depth).log10(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clonotype(v: &str, cdr3: &str, j: &str, count: u64) -> RepertoireClonotype {
        RepertoireClonotype {
            v_gene: v.to_string(),
            cdr3: cdr3.to_string(),
            j_gene: j.to_string(),
            count,
        }
    }

    #[test]
    fn test_bio_id_format() {
        let c = clonotype("TRBV12-3", "CASSF", "TRBJ2-7", 3);
        assert_eq!(c.bio_id(), "CASSF+TRBV12-3+TRBJ2-7");
    }

    #[test]
    fn test_features_empty_repertoire() {
        let features = features_for_allele(&[], &ClonotypeWeights::new());
        assert_eq!(features.weighted_expansion, 0.0);
        assert_eq!(features.sequencing_depth, 0.0);
    }

    #[test]
    fn test_features_weighted_expansion() {
        let repertoire = vec![
            clonotype("V1", "CASSA", "J1", 9),
            clonotype("V1", "CASSB", "J1", 100),
        ];
        // Negative weights contribute by magnitude
        let mut weights = ClonotypeWeights::new();
        weights.insert("CASSA+V1+J1".to_string(), -1.0);

        let features = features_for_allele(&repertoire, &weights);
        // 1 + |-1| * 9 = 10
        assert!((features.weighted_expansion - 1.0).abs() < 1e-12);
        // depth: log10(1 + 2)
        assert!((features.sequencing_depth - 3.0_f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_features_ignore_unweighted_clonotypes() {
        let repertoire = vec![clonotype("V1", "CASSA", "J1", 50)];
        let mut weights = ClonotypeWeights::new();
        weights.insert("CASSZ+V9+J9".to_string(), 2.0);

        let features = features_for_allele(&repertoire, &weights);
        assert_eq!(features.weighted_expansion, 0.0);
    }
}
