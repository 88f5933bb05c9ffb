// All LLM prompt construction for the Planning module.

use crate::models::profile::UserProfile;

/// Prompt for career-path recommendation. Embeds the full profile so the
/// model can weigh skills, education, and status together.
pub fn career_recommendation_prompt(profile: &UserProfile) -> String {
    format!(
        "Given the user's skills: {:?}, education: {:?}, desired industry: {}, \
         immigration status: {}, and career goals: {}, please suggest potential \
         career paths. Provide as many possible career options as are reasonable.",
        profile.skills,
        profile.education,
        profile.desired_industry,
        profile.immigration_status,
        profile.career_goals
    )
}

/// Prompt for resolving the skills a career requires, one per line.
pub fn required_skills_prompt(career: &str) -> String {
    format!("List all skills required to be successful in a career as a {career}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_prompt_embeds_profile_fields() {
        let profile = UserProfile {
            skills: vec!["Python".to_string()],
            education: vec!["Computer Science".to_string()],
            desired_industry: "AI".to_string(),
            immigration_status: "Permanent Resident".to_string(),
            career_goals: "Data Science".to_string(),
            weekly_hours_available: 10,
            location: String::new(),
            when_moved: String::new(),
        };
        let prompt = career_recommendation_prompt(&profile);
        assert!(prompt.contains("Python"));
        assert!(prompt.contains("Computer Science"));
        assert!(prompt.contains("AI"));
        assert!(prompt.contains("Permanent Resident"));
        assert!(prompt.contains("Data Science"));
    }

    #[test]
    fn test_required_skills_prompt_names_the_career() {
        let prompt = required_skills_prompt("Data Scientist");
        assert_eq!(
            prompt,
            "List all skills required to be successful in a career as a Data Scientist."
        );
    }
}
