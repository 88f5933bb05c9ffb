//! Skill-Gap Resolver — required skills per career, and the diff against
//! what the user already has.

use crate::llm_client::{GenerationConfig, LlmError, TextGenerator};
use crate::planning::parse::nonblank_lines;
use crate::planning::prompts::required_skills_prompt;

/// Lower temperature and a small token budget: this call wants a focused
/// list, not exploration.
fn sampling() -> GenerationConfig {
    GenerationConfig {
        temperature: 0.8,
        top_p: 0.9,
        top_k: None,
        max_output_tokens: 1000,
    }
}

/// Asks the generative service which skills a career requires.
///
/// Every non-blank line of the response is kept verbatim in source order:
/// no dedup, no structural validation beyond the parser's boundary checks.
pub async fn required_skills(
    generator: &dyn TextGenerator,
    career: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = required_skills_prompt(career);
    let raw = generator.generate(&prompt, &sampling()).await?;
    Ok(nonblank_lines(&raw))
}

/// Required skills not present in `current`, by exact string membership.
/// Order follows `required`.
pub fn missing_skills(required: &[String], current: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|skill| !current.contains(skill))
        .cloned()
        .collect()
}
