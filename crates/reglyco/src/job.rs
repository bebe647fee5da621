use glycan_notation::to_compact_notation;
use glycosite::{GlycosylationSite, SelectionState};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::library::GlycanLibrary;

pub type Result<T, E = JobError> = std::result::Result<T, E>;

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum JobError {
    #[error("no glycan option for residue {name:?} matches the sequence {sequence:?}")]
    UnknownGlycan { name: String, sequence: String },

    #[error("no residues are selected, so there is no job to submit")]
    EmptySelection,
}

impl JobError {
    pub(crate) fn unknown_glycan(name: &str, sequence: &str) -> Self {
        let name = name.to_owned();
        let sequence = sequence.to_owned();

        Self::UnknownGlycan { name, sequence }
    }
}

/// One glycosylated residue of an outbound job, carrying the cross-referenced
/// GlyTouCan accession instead of the raw sequence
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct GlycanSelection {
    #[serde(flatten)]
    pub site: GlycosylationSite,
    pub glytoucan: String,
}

/// The payload POSTed to the PDB-generation endpoint
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct JobRequest {
    #[serde(rename = "protFileBase64")]
    pub prot_file_base64: String,
    pub selections: Vec<GlycanSelection>,
}

impl JobRequest {
    /// Builds the request from the session's selections: each stored
    /// sequence goes through the outbound normalizer, then through the
    /// library's cross-reference table
    pub fn build(
        selection: &SelectionState,
        library: &GlycanLibrary,
        prot_file_base64: impl Into<String>,
    ) -> Result<Self> {
        if selection.is_empty() {
            return Err(JobError::EmptySelection);
        }

        let selections = selection
            .iter()
            .map(|selected| {
                let compact = to_compact_notation(&selected.sequence);
                let glytoucan = library
                    .glytoucan_for(&selected.site.name, &compact)
                    .ok_or_else(|| JobError::unknown_glycan(&selected.site.name, &compact))?;
                Ok(GlycanSelection {
                    site: selected.site.clone(),
                    glytoucan: glytoucan.to_owned(),
                })
            })
            .collect::<Result<_>>()?;

        let request = Self {
            prot_file_base64: prot_file_base64.into(),
            selections,
        };
        debug!(
            "built job request covering {} residues",
            request.selections.len()
        );
        Ok(request)
    }
}

// The job id ends in a fixed-width timestamp tag that the result object name
// must not carry
const JOB_ID_TAG_WIDTH: usize = 11;

/// What the job endpoint answers with
#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
pub struct JobResponse {
    pub output: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
}

impl JobResponse {
    /// The name under which the returned structure should be loaded,
    /// derived from the job id with its timestamp tag stripped
    #[must_use]
    pub fn result_name(&self) -> String {
        let cut = self.job_id.len().saturating_sub(JOB_ID_TAG_WIDTH);
        let head = self.job_id.get(..cut).unwrap_or("");
        format!("reglyco_result_{head}")
    }
}
