// src/types/job.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A Workable job as exposed to callers. Only the fields the extension needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
}

/// Workable ids are strings today; tolerate numbers rather than failing the page.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        Value::Number(id) => id.to_string(),
        _ => String::new(),
    })
}

/// Opaque `paging.next` URL. Replayed verbatim, never built or inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub(crate) fn from_upstream(raw: Option<String>) -> Option<Self> {
        raw.filter(|next| !next.trim().is_empty()).map(Cursor)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which job states to ask Workable for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateFilter {
    All,
    Only(String),
}

impl StateFilter {
    /// `None`/empty and `open` mean published; `all` drops the filter.
    pub fn from_query(raw: Option<&str>) -> Self {
        let state = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        match state.as_str() {
            "" | "open" | "published" => StateFilter::Only("published".to_string()),
            "all" => StateFilter::All,
            _ => StateFilter::Only(state),
        }
    }

    pub fn query_value(&self) -> Option<&str> {
        match self {
            StateFilter::All => None,
            StateFilter::Only(state) => Some(state),
        }
    }

    pub fn label(&self) -> &str {
        self.query_value().unwrap_or("all")
    }
}

/// One caller-facing page. `has_more` always mirrors `cursor.is_some()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    pub jobs: Vec<Job>,
}

impl JobPage {
    pub fn new(page: u32, limit: u32, mut jobs: Vec<Job>, cursor: Option<Cursor>) -> Self {
        jobs.truncate(limit as usize);
        Self {
            page,
            limit,
            has_more: cursor.is_some(),
            cursor,
            jobs,
        }
    }

    /// The page asked for lies beyond the last one Workable has.
    pub fn past_end(page: u32, limit: u32) -> Self {
        Self::new(page, limit, Vec::new(), None)
    }
}

/// Every job across the whole cursor chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCollection {
    pub total: usize,
    pub state: String,
    pub jobs: Vec<Job>,
}

impl JobCollection {
    pub fn new(state: &StateFilter, jobs: Vec<Job>) -> Self {
        Self {
            total: jobs.len(),
            state: state.label().to_string(),
            jobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_filter_synonyms() {
        let published = StateFilter::Only("published".to_string());
        assert_eq!(StateFilter::from_query(None), published);
        assert_eq!(StateFilter::from_query(Some("")), published);
        assert_eq!(StateFilter::from_query(Some("open")), published);
        assert_eq!(StateFilter::from_query(Some(" Published ")), published);
        assert_eq!(StateFilter::from_query(Some("all")), StateFilter::All);
        assert_eq!(
            StateFilter::from_query(Some("archived")).query_value(),
            Some("archived")
        );
        assert_eq!(StateFilter::All.query_value(), None);
        assert_eq!(StateFilter::All.label(), "all");
    }

    #[test]
    fn test_job_deserializes_loosely() {
        let job: Job = serde_json::from_value(json!({
            "id": 61884,
            "shortcode": "GROOV005",
            "title": "Office Manager",
            "state": "published",
            "department": "Sales"
        }))
        .unwrap();
        assert_eq!(job.id, "61884");
        assert_eq!(job.shortcode.as_deref(), Some("GROOV005"));

        let sparse: Job = serde_json::from_value(json!({"title": "Driver"})).unwrap();
        assert_eq!(sparse.id, "");
        assert_eq!(sparse.state, "");
    }

    #[test]
    fn test_job_page_serialization() {
        let page = JobPage::new(
            1,
            2,
            vec![Job {
                id: "1".to_string(),
                shortcode: None,
                title: "Chef".to_string(),
                state: "published".to_string(),
            }],
            Cursor::from_upstream(Some("https://acme.workable.com/spi/v3/jobs?since_id=1".into())),
        );
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["hasMore"], json!(true));
        assert_eq!(
            value["cursor"],
            json!("https://acme.workable.com/spi/v3/jobs?since_id=1")
        );
        assert_eq!(value["jobs"][0], json!({"id": "1", "title": "Chef", "state": "published"}));

        let end = serde_json::to_value(JobPage::past_end(4, 2)).unwrap();
        assert_eq!(end, json!({"page": 4, "limit": 2, "hasMore": false, "jobs": []}));
    }

    #[test]
    fn test_blank_cursor_is_no_cursor() {
        assert_eq!(Cursor::from_upstream(Some("  ".to_string())), None);
        assert_eq!(Cursor::from_upstream(None), None);
    }
}
