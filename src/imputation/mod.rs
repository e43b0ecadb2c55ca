//! HLA imputation from a TCR repertoire: feature extraction and the
//! classifier call contract.
//!
//! Imputation scores a sample for carriership of each HLA allele from the
//! expansion of that allele's associated clonotypes in the sample's
//! repertoire. The statistical models themselves are pre-trained and live
//! outside this crate; what is defined here is the seam:
//!
//! - [`features_for_allele`] turns a repertoire plus an allele's clonotype
//!   weight list into the two-element [`FeatureVector`] the models consume
//! - [`AlleleClassifier`] is the trait a model implementation plugs into
//! - [`HlaPredictor`] drives one classifier per allele and collects scores

pub mod features;
pub mod predictor;

pub use features::{features_for_allele, ClonotypeWeights, FeatureVector, RepertoireClonotype};
pub use predictor::{AlleleClassifier, HlaPredictor};
