//! The canonical growth-plan shape.
//!
//! Historically there were two plan representations: a per-career mapping
//! keyed by "Year N" strings and a bare `"years": [...]` list consumed by the
//! graph builder. Both producers and consumers now operate on this single
//! model; "Year N" survives only as a node-label format in the graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One year of a career plan. Year numbers start at 1 and are contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPlan {
    pub year: u32,
    pub courses: Vec<String>,
    pub jobs: Vec<String>,
    pub hours_per_week: u32,
}

/// Fixed-key advisory strings for the three risk scenarios.
///
/// The field set is closed: serialization always yields exactly these
/// three keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackPlans {
    pub if_visa_rejected: String,
    pub if_course_incomplete: String,
    pub if_financial_issues: String,
}

/// The multi-year schedule built for a single career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPlan {
    pub years: Vec<YearPlan>,
    pub fallback_plans: FallbackPlans,
}

/// All per-career plans produced for one planning request, keyed by the
/// exact career name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthPlan {
    pub careers: BTreeMap<String, CareerPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> CareerPlan {
        CareerPlan {
            years: vec![
                YearPlan {
                    year: 1,
                    courses: vec!["Take course: Intro to SQL".to_string()],
                    jobs: vec![
                        "Apply for internship or entry-level positions in Data Analyst"
                            .to_string(),
                    ],
                    hours_per_week: 10,
                },
                YearPlan {
                    year: 2,
                    courses: vec![],
                    jobs: vec!["Apply for mid-level positions in Data Analyst".to_string()],
                    hours_per_week: 10,
                },
            ],
            fallback_plans: FallbackPlans {
                if_visa_rejected: "remote work".to_string(),
                if_course_incomplete: "free resources".to_string(),
                if_financial_issues: "freelance".to_string(),
            },
        }
    }

    #[test]
    fn test_fallback_plans_serialize_to_exactly_three_keys() {
        let plan = sample_plan();
        let json = serde_json::to_value(&plan.fallback_plans).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("if_visa_rejected"));
        assert!(object.contains_key("if_course_incomplete"));
        assert!(object.contains_key("if_financial_issues"));
    }

    #[test]
    fn test_growth_plan_round_trips_through_json() {
        let mut plan = GrowthPlan::default();
        plan.careers
            .insert("Data Analyst".to_string(), sample_plan());

        let json = serde_json::to_string(&plan).unwrap();
        let recovered: GrowthPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, plan);
        assert_eq!(recovered.careers["Data Analyst"].years[0].year, 1);
    }
}
