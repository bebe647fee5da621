use glycosite::{GlycosylationSite, ResidueKey, ResidueMap, SelectionState, SiteSelection};
use tracing::info;

use crate::{
    job::{JobError, JobRequest, Result},
    library::GlycanLibrary,
};

/// The composing controller: owns the glycan option library and the current
/// per-residue selections, and turns them into an outbound job request.
///
/// This is the explicit home of what would otherwise be session-global
/// state — callers hold one `SugarBuilder` per editing session.
#[derive(Clone, Debug, Default)]
pub struct SugarBuilder {
    library: GlycanLibrary,
    selection: SelectionState,
}

impl SugarBuilder {
    #[must_use]
    pub fn new(library: GlycanLibrary) -> Self {
        Self {
            library,
            selection: SelectionState::new(),
        }
    }

    #[must_use]
    pub fn library(&self) -> &GlycanLibrary {
        &self.library
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The residues of `residues` that the library can actually decorate —
    /// candidate sites whose residue type has at least one glycan option
    pub fn selectable_sites(&self, residues: &ResidueMap) -> Vec<GlycosylationSite> {
        residues
            .candidate_sites()
            .into_iter()
            .filter(|site| !self.library.options_for(&site.name).is_empty())
            .collect()
    }

    /// Attaches a glycan (given in compact notation) to a site, after
    /// checking the library offers it for that residue type
    pub fn select(&mut self, site: GlycosylationSite, sequence: &str) -> Result<()> {
        if self.library.glytoucan_for(&site.name, sequence).is_none() {
            return Err(JobError::unknown_glycan(&site.name, sequence));
        }
        info!(
            chain = %site.chain,
            number = site.number,
            sequence,
            "glycan attached to site"
        );
        self.selection.assign(site, sequence);
        Ok(())
    }

    pub fn deselect(&mut self, key: &ResidueKey) -> Option<SiteSelection> {
        self.selection.clear(key)
    }

    /// The job request for everything currently selected
    pub fn job_request(&self, prot_file_base64: impl Into<String>) -> Result<JobRequest> {
        JobRequest::build(&self.selection, &self.library, prot_file_base64)
    }
}
