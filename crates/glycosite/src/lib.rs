//! Protein-side domain types: residue maps, glycosylation-candidate
//! scanning, and the per-residue selection state

mod selection;

use ahash::HashMap;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

pub use selection::{SelectionState, SiteSelection};

/// Identifies one residue within a structure
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ResidueKey {
    pub chain: String,
    pub number: i32,
}

impl ResidueKey {
    pub fn new(chain: impl Into<String>, number: i32) -> Self {
        Self {
            chain: chain.into(),
            number,
        }
    }
}

/// A residue that can carry a glycan, in the shape the selector UI and the
/// job API exchange it
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct GlycosylationSite {
    #[serde(rename = "residueID")]
    pub number: i32,
    #[serde(rename = "residueChain")]
    pub chain: String,
    #[serde(rename = "residueName")]
    pub name: String,
}

impl GlycosylationSite {
    pub fn key(&self) -> ResidueKey {
        ResidueKey::new(self.chain.clone(), self.number)
    }
}

// Residues included as candidates with no further sequence check
const SIMPLE_INCLUSION: [&str; 4] = ["SER", "THR", "TRP", "PRO"];

// Legal third positions of the N-X-[S/T/C] sequon
const SEQUON_TAIL: [&str; 3] = ["SER", "THR", "CYS"];

/// A `(chain, residue number) → residue name` map covering one structure (or
/// one selection within it)
#[derive(Clone, Debug, Default)]
pub struct ResidueMap {
    residues: HashMap<ResidueKey, String>,
}

impl ResidueMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chain: impl Into<String>, number: i32, name: impl Into<String>) {
        self.residues
            .insert(ResidueKey::new(chain, number), name.into());
    }

    #[must_use]
    pub fn name_at(&self, chain: &str, number: i32) -> Option<&str> {
        self.residues
            .get(&ResidueKey::new(chain, number))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Scans the map for residues that can accept a glycan.
    ///
    /// SER, THR, TRP, and PRO are always candidates; ASN only when it heads
    /// an N-X-[S/T/C] sequon whose X position is present and isn't PRO.
    /// Sites come back sorted by chain, then residue number.
    pub fn candidate_sites(&self) -> Vec<GlycosylationSite> {
        if self.residues.is_empty() {
            warn!("residue map is empty; no candidate sites to report");
            return Vec::new();
        }

        let sites: Vec<_> = self
            .residues
            .iter()
            .sorted()
            .filter_map(|(key, name)| {
                let accepted = match name.as_str() {
                    name if SIMPLE_INCLUSION.contains(&name) => true,
                    "ASN" => self.heads_sequon(key),
                    _ => false,
                };
                accepted.then(|| GlycosylationSite {
                    number: key.number,
                    chain: key.chain.clone(),
                    name: name.clone(),
                })
            })
            .collect();

        debug!(
            "found {} candidate sites among {} residues",
            sites.len(),
            self.residues.len()
        );
        sites
    }

    fn heads_sequon(&self, key: &ResidueKey) -> bool {
        // Absent neighbours (e.g. at the C-terminus) fail the motif
        let x = self.name_at(&key.chain, key.number + 1);
        let tail = self.name_at(&key.chain, key.number + 2);
        match (x, tail) {
            (Some(x), Some(tail)) => x != "PRO" && SEQUON_TAIL.contains(&tail),
            _ => false,
        }
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, i32, N)> for ResidueMap {
    fn from_iter<T: IntoIterator<Item = (C, i32, N)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (chain, number, name) in iter {
            map.insert(chain, number, name);
        }
        map
    }
}
