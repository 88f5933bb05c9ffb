use serde::{Deserialize, Serialize};

fn default_weekly_hours() -> u32 {
    10
}

/// A user's profile as collected by the onboarding flow.
///
/// Immutable input to the planning pipeline; owned by the caller and stored
/// as a document in the "users" collection. `location` and `when_moved` are
/// carried for the job-postings collaborator and do not influence planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub desired_industry: String,
    #[serde(default)]
    pub immigration_status: String,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours_available: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub when_moved: String,
}

impl UserProfile {
    /// Exact-match membership test against the user's current skills.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
