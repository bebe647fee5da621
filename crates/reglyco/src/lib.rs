//! Configuration and job plumbing around the notation normalizer: the
//! per-amino-acid glycan option library, the session controller, and the
//! outbound PDB-generation job request

mod builder;
mod job;
mod library;
pub mod snfg;

pub use builder::SugarBuilder;
pub use job::{GlycanSelection, JobError, JobRequest, JobResponse};
pub use library::{GlycanLibrary, GlycanOption, LibraryError};
