//! Career Recommender — turns a profile into a list of candidate careers.

use std::collections::HashSet;

use tracing::info;

use crate::llm_client::{GenerationConfig, LlmError, TextGenerator};
use crate::planning::parse::bullet_items;
use crate::planning::prompts::career_recommendation_prompt;
use crate::models::profile::UserProfile;

/// High-temperature exploratory sampling: we want breadth of options here.
fn sampling() -> GenerationConfig {
    GenerationConfig {
        temperature: 1.0,
        top_p: 0.95,
        top_k: Some(40),
        max_output_tokens: 8192,
    }
}

/// Asks the generative service for candidate career paths and parses the
/// bulleted response.
///
/// Duplicates are removed by exact string match, first occurrence kept.
/// A response with no usable bullets yields an empty list, not an error;
/// callers must handle an empty recommendation as a normal case.
pub async fn recommend_careers(
    generator: &dyn TextGenerator,
    profile: &UserProfile,
) -> Result<Vec<String>, LlmError> {
    let prompt = career_recommendation_prompt(profile);
    let raw = generator.generate(&prompt, &sampling()).await?;

    let mut seen = HashSet::new();
    let careers: Vec<String> = bullet_items(&raw)
        .into_iter()
        .filter(|career| seen.insert(career.clone()))
        .collect();

    info!("Recommended {} career paths", careers.len());
    Ok(careers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            skills: vec!["Python".to_string(), "Data Analysis".to_string()],
            education: vec!["Computer Science".to_string()],
            desired_industry: "AI".to_string(),
            immigration_status: "Permanent Resident".to_string(),
            career_goals: "Data Science".to_string(),
            weekly_hours_available: 10,
            location: String::new(),
            when_moved: String::new(),
        }
    }

    #[tokio::test]
    async fn test_recommend_parses_bulleted_careers() {
        let generator = FixedGenerator(
            "Here are some options:\n* Data Scientist\n- Machine Learning Engineer\n• Data Analyst"
                .to_string(),
        );
        let careers = recommend_careers(&generator, &profile()).await.unwrap();
        assert_eq!(
            careers,
            vec!["Data Scientist", "Machine Learning Engineer", "Data Analyst"]
        );
    }

    #[tokio::test]
    async fn test_recommend_deduplicates_exact_matches_only() {
        let generator = FixedGenerator(
            "* Data Scientist\n* Data Scientist\n* data scientist".to_string(),
        );
        let careers = recommend_careers(&generator, &profile()).await.unwrap();
        // Case-sensitive exact match is the dedup key — no normalization.
        assert_eq!(careers, vec!["Data Scientist", "data scientist"]);
    }

    #[tokio::test]
    async fn test_recommend_empty_response_is_empty_not_error() {
        let generator = FixedGenerator(String::new());
        let careers = recommend_careers(&generator, &profile()).await.unwrap();
        assert!(careers.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_prose_only_response_is_empty() {
        let generator =
            FixedGenerator("I'm sorry, I cannot suggest careers right now.".to_string());
        let careers = recommend_careers(&generator, &profile()).await.unwrap();
        assert!(careers.is_empty());
    }

    #[tokio::test]
    async fn test_recommended_names_are_trimmed_and_marker_free() {
        let generator = FixedGenerator("*   Data Scientist  \n-\tML Engineer ".to_string());
        let careers = recommend_careers(&generator, &profile()).await.unwrap();
        for career in &careers {
            assert!(!career.is_empty());
            assert_eq!(career, career.trim());
            assert!(!career.starts_with(['*', '-', '•']));
        }
    }
}
