//! Growth Plan Builder — orchestrates the per-career planning pipeline.
//!
//! Flow per career: required skills → missing-skill diff → course lookup
//! per missing skill → year-by-year plan + fallback plans.
//!
//! All external calls are issued strictly sequentially, one per career and
//! one per missing skill. A generation failure skips that career and the
//! batch continues; a catalog failure degrades to zero courses for that
//! skill. Partial results are surfaced alongside the list of skipped
//! careers.

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::models::plan::{CareerPlan, FallbackPlans, GrowthPlan, YearPlan};
use crate::models::profile::UserProfile;
use crate::planning::catalog::{CourseCatalog, MAX_COURSES_PER_SKILL};
use crate::planning::skill_gap::{missing_skills, required_skills};

/// Default planning horizon in years.
pub const DEFAULT_PLAN_YEARS: u32 = 5;

/// Year-1 course lists are capped at this many foundational entries;
/// the rest become the advanced list repeated in every later year.
const FOUNDATIONAL_COURSES: usize = 3;

/// A career dropped from the batch because its generation call failed.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedCareer {
    pub career: String,
    pub reason: String,
}

/// The planner's result: whatever plans could be built, plus what was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub plan: GrowthPlan,
    pub skipped: Vec<SkippedCareer>,
}

/// Builds growth plans for every candidate career.
pub async fn generate_growth_plans(
    generator: &dyn TextGenerator,
    catalog: &dyn CourseCatalog,
    profile: &UserProfile,
    careers: &[String],
    horizon: u32,
) -> PlanOutcome {
    let mut plan = GrowthPlan::default();
    let mut skipped = Vec::new();

    for career in careers {
        let required = match required_skills(generator, career).await {
            Ok(required) => required,
            Err(e) => {
                warn!("Skipping career '{career}': skill resolution failed: {e}");
                skipped.push(SkippedCareer {
                    career: career.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let missing = missing_skills(&required, &profile.skills);
        info!(
            "Career '{career}': {} required skills, {} missing",
            required.len(),
            missing.len()
        );

        let suggested = suggest_courses(catalog, &missing).await;
        plan.careers.insert(
            career.clone(),
            build_career_plan(career, &suggested, horizon, profile.weekly_hours_available),
        );
    }

    info!(
        "Planned {} careers, skipped {}",
        plan.careers.len(),
        skipped.len()
    );
    PlanOutcome { plan, skipped }
}

/// Fetches course names for each missing skill, at most
/// [`MAX_COURSES_PER_SKILL`] per skill, concatenated in skill order then
/// catalog order. No dedup across skills. A failed lookup contributes
/// nothing for that skill.
async fn suggest_courses(catalog: &dyn CourseCatalog, missing: &[String]) -> Vec<String> {
    let mut suggested = Vec::new();
    for skill in missing {
        match catalog.fetch_courses(skill).await {
            Ok(courses) => suggested.extend(
                courses
                    .into_iter()
                    .take(MAX_COURSES_PER_SKILL)
                    .map(|course| course.name),
            ),
            Err(e) => {
                warn!("Course lookup failed for skill '{skill}', treating as zero courses: {e}");
            }
        }
    }
    suggested
}

/// Pure year-split: year 1 takes the first `min(3, L)` suggested courses as
/// foundational work plus an entry-level job goal; every later year carries
/// the identical remaining-courses list reframed as advanced work plus two
/// mid-level job goals.
pub fn build_career_plan(
    career: &str,
    suggested_courses: &[String],
    horizon: u32,
    hours_per_week: u32,
) -> CareerPlan {
    let split = suggested_courses.len().min(FOUNDATIONAL_COURSES);

    let foundational: Vec<String> = suggested_courses[..split]
        .iter()
        .map(|name| format!("Take course: {name}"))
        .collect();
    let advanced: Vec<String> = suggested_courses[split..]
        .iter()
        .map(|name| format!("Take advanced course: {name}"))
        .collect();

    let years = (1..=horizon)
        .map(|year| {
            if year == 1 {
                YearPlan {
                    year,
                    courses: foundational.clone(),
                    jobs: vec![format!(
                        "Apply for internship or entry-level positions in {career}"
                    )],
                    hours_per_week,
                }
            } else {
                YearPlan {
                    year,
                    courses: advanced.clone(),
                    jobs: vec![
                        format!("Apply for mid-level positions in {career}"),
                        format!("Work on projects related to {career}"),
                    ],
                    hours_per_week,
                }
            }
        })
        .collect();

    CareerPlan {
        years,
        fallback_plans: fallback_plans(career),
    }
}

/// Advisory strings for the three fixed risk scenarios. The visa text is
/// static regardless of the user's current immigration status.
fn fallback_plans(career: &str) -> FallbackPlans {
    FallbackPlans {
        if_visa_rejected: format!(
            "Consider remote jobs in {career} that allow working from home or from a home country."
        ),
        if_course_incomplete: format!(
            "Take alternative online courses for {career}, focusing on free resources to catch up."
        ),
        if_financial_issues: format!(
            "Consider part-time freelance projects in {career} to continue progressing."
        ),
    }
}
