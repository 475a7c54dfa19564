// src/core/submission.rs
use serde_json::Value;

use crate::error::RejectionReason;
use crate::types::{CandidateSubmission, CreateCandidateRequest, SocialProfile, UpstreamCandidate};
use crate::utils::{first_trimmed_field, non_empty, trimmed_field};

impl CandidateSubmission {
    /// Normalize a raw `/add-candidate` body.
    ///
    /// All text fields are trimmed and non-string values count as empty. A job
    /// identifier (`jobId`, else `jobShortcode`) and at least one of `email` /
    /// `linkedin_url` are required.
    pub fn from_json(raw: &Value) -> Result<Self, RejectionReason> {
        if !raw.is_object() {
            return Err(RejectionReason::MalformedBody);
        }

        let job_identifier = first_trimmed_field(raw, &["jobId", "jobShortcode"]);
        if job_identifier.is_empty() {
            return Err(RejectionReason::MissingJobIdentifier);
        }

        let email = non_empty(trimmed_field(raw, "email"));
        let linkedin_url = non_empty(first_trimmed_field(raw, &["linkedin_url", "linkedinUrl"]));
        if email.is_none() && linkedin_url.is_none() {
            return Err(RejectionReason::MissingContactIdentifier);
        }

        Ok(Self {
            first_name: trimmed_field(raw, "firstName"),
            last_name: trimmed_field(raw, "lastName"),
            email,
            linkedin_url,
            tag: non_empty(trimmed_field(raw, "tag")),
            job_identifier,
        })
    }

    pub fn to_payload(&self) -> CreateCandidateRequest {
        CreateCandidateRequest {
            sourced: true,
            candidate: UpstreamCandidate {
                firstname: self.first_name.clone(),
                lastname: self.last_name.clone(),
                email: self.email.clone(),
                social_profiles: self
                    .linkedin_url
                    .iter()
                    .map(|url| SocialProfile::linkedin(url))
                    .collect(),
                tags: self.tag.iter().cloned().collect(),
            },
        }
    }
}
