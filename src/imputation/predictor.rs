use std::collections::HashMap;

use crate::imputation::features::{
    features_for_allele, ClonotypeWeights, FeatureVector, RepertoireClonotype,
};

/// The call contract of a pre-trained per-allele carriership classifier.
///
/// Implementations are external collaborators: this crate computes the
/// feature vector and collects results, but does not define training or
/// weight deserialization.
pub trait AlleleClassifier {
    /// Carriership score for the feature vector (a binary label is a score
    /// of 0.0 or 1.0).
    fn predict(&self, features: &FeatureVector) -> f64;

    /// Class-probability mapping (class label -> probability) for the
    /// feature vector.
    fn predict_proba(&self, features: &FeatureVector) -> HashMap<String, f64>;
}

/// Drives one classifier per HLA allele over a sample repertoire.
pub struct HlaPredictor<C> {
    /// (allele name, its clonotype weights, its classifier)
    models: Vec<(String, ClonotypeWeights, C)>,
}

impl<C: AlleleClassifier> HlaPredictor<C> {
    #[must_use]
    pub fn new(models: Vec<(String, ClonotypeWeights, C)>) -> Self {
        Self { models }
    }

    /// Allele names with a registered model.
    pub fn alleles(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|(allele, _, _)| allele.as_str())
    }

    /// Carriership score per allele.
    #[must_use]
    pub fn predict(&self, repertoire: &[RepertoireClonotype]) -> HashMap<String, f64> {
        self.models
            .iter()
            .map(|(allele, weights, classifier)| {
                let features = features_for_allele(repertoire, weights);
                (allele.clone(), classifier.predict(&features))
            })
            .collect()
    }

    /// Class-probability mapping per allele.
    #[must_use]
    pub fn predict_proba(
        &self,
        repertoire: &[RepertoireClonotype],
    ) -> HashMap<String, HashMap<String, f64>> {
        self.models
            .iter()
            .map(|(allele, weights, classifier)| {
                let features = features_for_allele(repertoire, weights);
                (allele.clone(), classifier.predict_proba(&features))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classifier that flags carriership when any weighted clonotype is
    /// expanded at all.
    struct ThresholdClassifier;

    impl AlleleClassifier for ThresholdClassifier {
        fn predict(&self, features: &FeatureVector) -> f64 {
            f64::from(u8::from(features.weighted_expansion > 0.0))
        }

        fn predict_proba(&self, features: &FeatureVector) -> HashMap<String, f64> {
            let carrier = if features.weighted_expansion > 0.0 {
                0.9
            } else {
                0.1
            };
            HashMap::from([
                ("carrier".to_string(), carrier),
                ("non_carrier".to_string(), 1.0 - carrier),
            ])
        }
    }

    fn repertoire() -> Vec<RepertoireClonotype> {
        vec![RepertoireClonotype {
            v_gene: "V1".to_string(),
            cdr3: "CASSA".to_string(),
            j_gene: "J1".to_string(),
            count: 7,
        }]
    }

    #[test]
    fn test_predict_per_allele() {
        let hit_weights = ClonotypeWeights::from([("CASSA+V1+J1".to_string(), 0.5)]);
        let miss_weights = ClonotypeWeights::from([("CASSZ+V9+J9".to_string(), 0.5)]);

        let predictor = HlaPredictor::new(vec![
            ("A-02:01".to_string(), hit_weights, ThresholdClassifier),
            ("B-07:02".to_string(), miss_weights, ThresholdClassifier),
        ]);

        let scores = predictor.predict(&repertoire());
        assert_eq!(scores["A-02:01"], 1.0);
        assert_eq!(scores["B-07:02"], 0.0);
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let weights = ClonotypeWeights::from([("CASSA+V1+J1".to_string(), 0.5)]);
        let predictor = HlaPredictor::new(vec![(
            "A-02:01".to_string(),
            weights,
            ThresholdClassifier,
        )]);

        let probs = predictor.predict_proba(&repertoire());
        let total: f64 = probs["A-02:01"].values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
