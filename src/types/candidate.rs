// src/types/candidate.rs
use serde::{Deserialize, Serialize};

/// Normalized `/add-candidate` input. Built only through
/// `CandidateSubmission::from_json`, so the contact invariant always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub tag: Option<String>,
    pub job_identifier: String,
}

/// Body for `POST /jobs/{job}/candidates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCandidateRequest {
    pub sourced: bool,
    pub candidate: UpstreamCandidate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamCandidate {
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_profiles: Vec<SocialProfile>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialProfile {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl SocialProfile {
    pub fn linkedin(url: &str) -> Self {
        Self {
            kind: "linkedin".to_string(),
            url: url.to_string(),
        }
    }
}

/// Candidate as returned by `GET /jobs/{job}/candidates`, reduced to what the
/// duplicate check compares.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExistingCandidate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl ExistingCandidate {
    pub fn matches(&self, email: Option<&str>, linkedin_url: Option<&str>) -> bool {
        let same_email = email.is_some() && self.email.as_deref() == email;
        let same_linkedin = linkedin_url.is_some() && self.linkedin_url.as_deref() == linkedin_url;
        same_email || same_linkedin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_candidate_matching() {
        let existing = ExistingCandidate {
            email: Some("a@b.com".to_string()),
            linkedin_url: None,
        };
        assert!(existing.matches(Some("a@b.com"), None));
        assert!(!existing.matches(Some("A@b.com"), None));
        assert!(!existing.matches(None, None));
        assert!(!existing.matches(None, Some("https://linkedin.com/in/a")));

        let profile_only = ExistingCandidate {
            email: None,
            linkedin_url: Some("https://linkedin.com/in/a".to_string()),
        };
        assert!(profile_only.matches(Some("x@y.com"), Some("https://linkedin.com/in/a")));
    }
}
