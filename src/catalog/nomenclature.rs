use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::core::types::ConversionDirection;

/// Filename of the gene-name mapping table, expected directly under the
/// database directory. Based on the mapping released by tcrdist3.
pub const MAPPING_FILENAME: &str = "adaptive_imgt_mapping.csv";

/// Organism the mapping is filtered to by default.
pub const DEFAULT_ORGANISM: &str = "human";

#[derive(Error, Debug)]
pub enum NomenclatureError {
    #[error("gene mapping file not found at: {0}")]
    MissingMappingFile(PathBuf),

    #[error("gene mapping file is missing one or more required columns: [\"species\", \"imgt\", \"adaptive\"]")]
    MissingColumns,

    #[error("failed to read gene mapping file: {0}")]
    Read(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct MappingRow {
    species: String,
    imgt: String,
    adaptive: String,
}

/// A one-direction gene-name translation table for a single organism.
///
/// Built from the `adaptive_imgt_mapping.csv` reference file. The relation
/// is right-unique: each source name maps to at most one target name (a
/// later row with the same source name replaces the earlier one). Nothing is
/// assumed about coverage; names absent from the mapping pass through
/// unchanged.
///
/// Building is deterministic and side-effect-free, so one instance per
/// (direction, organism, path) can be cached for the life of the process.
#[derive(Debug, Clone)]
pub struct GeneMapping {
    direction: ConversionDirection,
    names: HashMap<String, String>,
}

impl GeneMapping {
    /// Build the mapping for `direction`, reading the reference file under
    /// `database_dir` and keeping only rows for `organism`.
    ///
    /// An organism with no rows yields an empty mapping (conversion becomes
    /// a pass-through), not an error.
    ///
    /// # Errors
    ///
    /// [`NomenclatureError::MissingMappingFile`] if the reference file does
    /// not exist, [`NomenclatureError::MissingColumns`] if it lacks the
    /// `species`/`imgt`/`adaptive` columns.
    pub fn build(
        database_dir: &Path,
        direction: ConversionDirection,
        organism: &str,
    ) -> Result<Self, NomenclatureError> {
        let path = database_dir.join(MAPPING_FILENAME);
        if !path.exists() {
            return Err(NomenclatureError::MissingMappingFile(path));
        }

        let mut reader = csv::ReaderBuilder::new().delimiter(b',').from_path(&path)?;

        {
            let headers = reader.headers()?;
            let has = |name: &str| headers.iter().any(|h| h == name);
            if !(has("species") && has("imgt") && has("adaptive")) {
                return Err(NomenclatureError::MissingColumns);
            }
        }

        let mut names = HashMap::new();
        for row in reader.deserialize::<MappingRow>() {
            let row = row?;
            if row.species != organism {
                continue;
            }
            match direction {
                ConversionDirection::ImgtToAdaptive => names.insert(row.imgt, row.adaptive),
                ConversionDirection::AdaptiveToImgt => names.insert(row.adaptive, row.imgt),
            };
        }

        if names.is_empty() {
            warn!(
                "no '{organism}' rows found in {}: gene conversion will be a pass-through",
                path.display()
            );
        }

        Ok(Self { direction, names })
    }

    /// The direction this mapping translates in.
    #[must_use]
    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    /// Translate one gene name. Names not covered by the mapping are
    /// returned unchanged.
    #[must_use]
    pub fn convert<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.get(name).map_or(name, String::as_str)
    }

    /// Number of gene names covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_mapping(dir: &Path, content: &str) {
        let mut f = std::fs::File::create(dir.join(MAPPING_FILENAME)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    const MAPPING: &str = "\
species,imgt,adaptive
human,TRBV12-3,TCRBV12-03
human,TRBJ2-7,TCRBJ02-07
mouse,TRBV1,TCRBV01-01
";

    #[test]
    fn test_build_filters_to_organism() {
        let dir = tempfile::tempdir().unwrap();
        write_mapping(dir.path(), MAPPING);

        let mapping = GeneMapping::build(
            dir.path(),
            ConversionDirection::ImgtToAdaptive,
            DEFAULT_ORGANISM,
        )
        .unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.convert("TRBV12-3"), "TCRBV12-03");
        // Mouse-only gene passes through
        assert_eq!(mapping.convert("TRBV1"), "TRBV1");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_mapping(dir.path(), MAPPING);

        let forward = GeneMapping::build(
            dir.path(),
            ConversionDirection::ImgtToAdaptive,
            DEFAULT_ORGANISM,
        )
        .unwrap();
        let back = GeneMapping::build(
            dir.path(),
            ConversionDirection::AdaptiveToImgt,
            DEFAULT_ORGANISM,
        )
        .unwrap();

        for imgt in ["TRBV12-3", "TRBJ2-7"] {
            assert_eq!(back.convert(forward.convert(imgt)), imgt);
        }
    }

    #[test]
    fn test_unknown_organism_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        write_mapping(dir.path(), MAPPING);

        let mapping = GeneMapping::build(
            dir.path(),
            ConversionDirection::AdaptiveToImgt,
            "macaque",
        )
        .unwrap();
        assert!(mapping.is_empty());
        assert_eq!(mapping.convert("TCRBV12-03"), "TCRBV12-03");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneMapping::build(
            dir.path(),
            ConversionDirection::AdaptiveToImgt,
            DEFAULT_ORGANISM,
        )
        .unwrap_err();
        assert!(matches!(err, NomenclatureError::MissingMappingFile(_)));
    }

    #[test]
    fn test_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        write_mapping(dir.path(), "species,imgt\nhuman,TRBV12-3\n");

        let err = GeneMapping::build(
            dir.path(),
            ConversionDirection::AdaptiveToImgt,
            DEFAULT_ORGANISM,
        )
        .unwrap_err();
        assert!(matches!(err, NomenclatureError::MissingColumns));
    }
}
