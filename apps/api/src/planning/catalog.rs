//! Course Suggestion Adapter — pluggable, trait-based lookup against an
//! external course catalog.
//!
//! `AppState` holds an `Arc<dyn CourseCatalog>` so tests and future backends
//! can swap the implementation without touching callers. Ordering is
//! whatever the catalog returns; the ≤5-per-skill cap is applied at the
//! call site in the planner, not here.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many courses the planner keeps per skill.
pub const MAX_COURSES_PER_SKILL: usize = 5;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A course as returned by the catalog. Only `name` is contractual;
/// provider fields (url, price, platform, …) ride along opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn fetch_courses(&self, skill: &str) -> Result<Vec<CourseRecord>, CatalogError>;
}

/// HTTP-backed catalog client. Expects `GET {base}/courses?skill=...` to
/// return a JSON array of course records.
pub struct HttpCourseCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCourseCatalog {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl CourseCatalog for HttpCourseCatalog {
    async fn fetch_courses(&self, skill: &str) -> Result<Vec<CourseRecord>, CatalogError> {
        let url = format!("{}/courses", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("skill", skill)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_record_captures_opaque_provider_metadata() {
        let json = r#"{
            "name": "Intro to SQL",
            "provider": "Coursera",
            "url": "https://example.com/sql",
            "price_usd": 0
        }"#;
        let course: CourseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(course.name, "Intro to SQL");
        assert_eq!(course.metadata["provider"], "Coursera");
        assert_eq!(course.metadata["price_usd"], 0);
    }

    #[test]
    fn test_course_record_requires_name() {
        let json = r#"{"provider": "Udemy"}"#;
        let result: Result<CourseRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_course_record_round_trips_metadata() {
        let json = r#"{"name": "Stats 101", "platform": "edX"}"#;
        let course: CourseRecord = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&course).unwrap();
        assert_eq!(back["name"], "Stats 101");
        assert_eq!(back["platform"], "edX");
    }
}
