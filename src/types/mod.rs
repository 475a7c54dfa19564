// src/types/mod.rs
pub mod candidate;
pub mod job;
pub mod response;

pub use candidate::{
    CandidateSubmission, CreateCandidateRequest, ExistingCandidate, SocialProfile,
    UpstreamCandidate,
};
pub use job::{Cursor, Job, JobCollection, JobPage, StateFilter};
