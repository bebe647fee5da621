use ahash::HashMap;
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub type Result<T, E = LibraryError> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Error)]
pub enum LibraryError {
    #[error("failed to parse the glycan option library")]
    Parse(#[from] serde_json::Error),
}

/// One attachable glycan: a compact-notation sequence plus the GlyTouCan
/// accession the job API wants in its place
#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
pub struct GlycanOption {
    pub sequence: String,
    pub glytoucan: String,
}

/// The per-amino-acid glycan option lists served by the configuration
/// endpoint, keyed by three-letter residue name
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct GlycanLibrary {
    options: HashMap<String, Vec<GlycanOption>>,
}

impl GlycanLibrary {
    pub fn from_json(json: impl AsRef<str>) -> Result<Self> {
        let library: Self = serde_json::from_str(json.as_ref())?;
        debug!(
            "loaded glycan options for {} residue types",
            library.options.len()
        );
        Ok(library)
    }

    /// The glycans offered for one residue type (empty for unknown residues)
    #[must_use]
    pub fn options_for(&self, residue_name: &str) -> &[GlycanOption] {
        self.options
            .get(residue_name)
            .map_or(&[], Vec::as_slice)
    }

    /// Cross-references a compact sequence to its GlyTouCan accession
    #[must_use]
    pub fn glytoucan_for(&self, residue_name: &str, compact_sequence: &str) -> Option<&str> {
        self.options_for(residue_name)
            .iter()
            .find(|option| option.sequence == compact_sequence)
            .map(|option| option.glytoucan.as_str())
    }
}
