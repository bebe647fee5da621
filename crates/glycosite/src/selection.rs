use ahash::HashMap;
use itertools::Itertools;

use crate::{GlycosylationSite, ResidueKey};

/// One residue's chosen glycan
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SiteSelection {
    pub site: GlycosylationSite,
    pub sequence: String,
}

/// The per-residue glycan choices of the current session, keyed by residue.
///
/// Owned by whichever controller composes the UI — it is deliberately plain
/// data with no global instance.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    values: HashMap<ResidueKey, SiteSelection>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the glycan attached to a site, returning the
    /// previous choice if there was one
    pub fn assign(
        &mut self,
        site: GlycosylationSite,
        sequence: impl Into<String>,
    ) -> Option<SiteSelection> {
        let sequence = sequence.into();
        self.values
            .insert(site.key(), SiteSelection { site, sequence })
    }

    pub fn clear(&mut self, key: &ResidueKey) -> Option<SiteSelection> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn sequence_for(&self, key: &ResidueKey) -> Option<&str> {
        self.values.get(key).map(|value| value.sequence.as_str())
    }

    /// Selections in chain-then-number order, for deterministic downstream
    /// output
    pub fn iter(&self) -> impl Iterator<Item = &SiteSelection> {
        self.values
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
